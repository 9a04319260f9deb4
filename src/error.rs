//! Error taxonomy for editor commands

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything a command handler can fail with
#[derive(Debug, Error)]
pub enum EditorError {
    /// File could not be read or written
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Style or clipboard command invoked without an active selection
    #[error("no text selected")]
    NoSelection,

    /// A dialog was dismissed. Never surfaced to the user.
    #[error("cancelled by user")]
    Cancelled,

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl EditorError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        EditorError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = EditorError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = EditorError::io(
            "/tmp/missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/missing.txt"));
        assert!(message.contains("not found"));
    }
}
