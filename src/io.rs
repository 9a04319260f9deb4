//! File I/O operations
//!
//! Documents are raw text, read and written verbatim

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Load a document's full text
pub fn load(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Save text to `path` all-or-nothing.
///
/// The content is written and synced to a temporary file next to the real
/// target, which then replaces it. Symlinks are followed so the linked file
/// is updated in place, and an existing file keeps its permissions.
pub fn save(text: &str, path: &Path) -> io::Result<()> {
    let target = resolve_target(path)?;
    let existing = fs::metadata(&target).ok().map(|m| m.permissions());

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(".tiny-pad-").suffix(".tmp");
    if existing.is_none() {
        default_permissions(&mut builder);
    }

    // Dropping the temp file on any error removes it
    let mut file = builder.tempfile_in(dir)?;
    file.write_all(text.as_bytes())?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }
    file.as_file().sync_all()?;
    file.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

/// The file a save should replace: symlinks resolved, new paths as given
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

/// New files get the usual umask-filtered mode instead of tempfile's 0600
#[cfg(unix)]
fn default_permissions(builder: &mut tempfile::Builder<'_, '_>) {
    use std::os::unix::fs::PermissionsExt;
    builder.permissions(fs::Permissions::from_mode(0o666));
}

#[cfg(not(unix))]
fn default_permissions(_builder: &mut tempfile::Builder<'_, '_>) {}

/// Final path component for titles and status text
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");

        save("line one\nline two", &path).unwrap();
        assert_eq!(load(&path).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_save_overwrites_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");

        save("a much longer first version", &path).unwrap();
        save("short", &path).unwrap();
        assert_eq!(load(&path).unwrap(), "short");

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_save_keeps_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("note.txt");
        assert!(save("text", &path).is_err());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("private.txt");
        fs::write(&path, "secret").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

        save("still secret", &path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(load(&path).unwrap(), "still secret");
    }

    #[cfg(unix)]
    #[test]
    fn test_save_through_symlink_updates_target() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.txt");
        let link = dir.path().join("link.txt");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        save("first", &link).unwrap();
        save("second", &link).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(load(&real).unwrap(), "second");
        assert_eq!(load(&link).unwrap(), "second");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/a/b/notes.txt")), "notes.txt");
    }
}
