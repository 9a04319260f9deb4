//! Modal prompts the editor needs: file paths, colors, and alerts
//!
//! Every prompt returns `None` when dismissed. The shipped implementation
//! asks on the terminal so the editor works without a native dialog toolkit.

use crate::palette::Rgb;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Name plus glob pattern shown in a file dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Filter categories offered by Open and Save As
pub const FILE_FILTERS: [FileFilter; 4] = [
    FileFilter {
        name: "txt files",
        pattern: "*.txt",
    },
    FileFilter {
        name: "html files",
        pattern: "*.html",
    },
    FileFilter {
        name: "python files",
        pattern: "*.py",
    },
    FileFilter {
        name: "all files",
        pattern: "*",
    },
];

/// Default extension for Save As (any)
pub const DEFAULT_SAVE_EXTENSION: &str = ".*";

impl FileFilter {
    /// Whether `path` matches this filter's pattern
    pub fn matches(&self, path: &Path) -> bool {
        match self.pattern.strip_prefix("*.") {
            Some(ext) => path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(ext)),
            None => true,
        }
    }
}

pub trait Dialogs {
    /// Choose an existing file to open
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    /// Choose a destination to save to
    fn pick_save_path(&mut self, filters: &[FileFilter], default_extension: &str)
        -> Option<PathBuf>;

    /// Choose a color, starting from `initial`
    fn pick_color(&mut self, title: &str, initial: Option<Rgb>) -> Option<Rgb>;

    /// Pick one of `options` by index
    fn choose(&mut self, title: &str, options: &[String]) -> Option<usize>;

    /// Show a dismissible error
    fn alert(&mut self, message: &str);
}

/// Terminal-backed dialogs. An empty answer cancels.
pub struct ConsoleDialogs<R, W> {
    input: R,
    output: W,
    start_dir: PathBuf,
}

impl ConsoleDialogs<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio(start_dir: impl Into<PathBuf>) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), start_dir)
    }
}

impl<R: BufRead, W: Write> ConsoleDialogs<R, W> {
    pub fn new(input: R, output: W, start_dir: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            start_dir: start_dir.into(),
        }
    }

    /// Print `prompt` and read one trimmed line; `None` on empty input or EOF
    fn ask(&mut self, prompt: &str) -> Option<String> {
        write!(self.output, "{}", prompt).ok()?;
        self.output.flush().ok()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim();
                (!answer.is_empty()).then(|| answer.to_string())
            }
        }
    }

    fn resolve(&self, answer: &str) -> PathBuf {
        let path = PathBuf::from(answer);
        if path.is_absolute() {
            path
        } else {
            self.start_dir.join(path)
        }
    }

    fn describe_filters(filters: &[FileFilter]) -> String {
        filters
            .iter()
            .map(|f| format!("{} ({})", f.name, f.pattern))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<R: BufRead, W: Write> Dialogs for ConsoleDialogs<R, W> {
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        let prompt = format!("Choose file to load [{}]: ", Self::describe_filters(filters));
        loop {
            let answer = self.ask(&prompt)?;
            let path = self.resolve(&answer);
            if path.is_file() {
                return Some(path);
            }
            let _ = writeln!(self.output, "No such file: {}", path.display());
        }
    }

    fn pick_save_path(
        &mut self,
        filters: &[FileFilter],
        default_extension: &str,
    ) -> Option<PathBuf> {
        let prompt = format!(
            "Choose file to save [{}] (default extension {}): ",
            Self::describe_filters(filters),
            default_extension
        );
        let answer = self.ask(&prompt)?;
        Some(self.resolve(&answer))
    }

    fn pick_color(&mut self, title: &str, initial: Option<Rgb>) -> Option<Rgb> {
        let prompt = match initial {
            Some(color) => format!("{} (#rrggbb, currently {}): ", title, color),
            None => format!("{} (#rrggbb): ", title),
        };
        loop {
            match self.ask(&prompt)?.parse::<Rgb>() {
                Ok(color) => return Some(color),
                Err(e) => {
                    let _ = writeln!(self.output, "{}", e);
                }
            }
        }
    }

    fn choose(&mut self, title: &str, options: &[String]) -> Option<usize> {
        let _ = writeln!(self.output, "{}", title);
        for (i, option) in options.iter().enumerate() {
            let _ = writeln!(self.output, "  {:>2}. {}", i + 1, option);
        }
        loop {
            let answer = self.ask("> ")?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Some(n - 1),
                _ => {
                    let _ = writeln!(self.output, "Enter a number from 1 to {}", options.len());
                }
            }
        }
    }

    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.output, "Error: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> ConsoleDialogs<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleDialogs::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), "/work")
    }

    #[test]
    fn test_filters() {
        let txt = FILE_FILTERS[0];
        assert!(txt.matches(Path::new("notes.TXT")));
        assert!(!txt.matches(Path::new("page.html")));
        assert!(FILE_FILTERS[3].matches(Path::new("Makefile")));
    }

    #[test]
    fn test_empty_answer_cancels() {
        let mut dialogs = console("\n");
        assert_eq!(dialogs.pick_save_path(&FILE_FILTERS, DEFAULT_SAVE_EXTENSION), None);

        let mut dialogs = console("");
        assert_eq!(dialogs.pick_color("Pick", None), None);
    }

    #[test]
    fn test_save_path_is_relative_to_start_dir() {
        let mut dialogs = console("notes.txt\n");
        assert_eq!(
            dialogs.pick_save_path(&FILE_FILTERS, DEFAULT_SAVE_EXTENSION),
            Some(PathBuf::from("/work/notes.txt"))
        );
    }

    #[test]
    fn test_color_retries_until_valid() {
        let mut dialogs = console("red\n#ff0000\n");
        assert_eq!(dialogs.pick_color("Pick", None), Some(Rgb::new(255, 0, 0)));
        let shown = String::from_utf8(dialogs.output).unwrap();
        assert!(shown.contains("Invalid color: red"));
    }

    #[test]
    fn test_choose_by_number() {
        let options = vec!["File/New".to_string(), "File/Open".to_string()];
        let mut dialogs = console("7\n2\n");
        assert_eq!(dialogs.choose("Menu", &options), Some(1));

        let mut dialogs = console("\n");
        assert_eq!(dialogs.choose("Menu", &options), None);
    }

    #[test]
    fn test_open_rejects_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("a.txt");
        std::fs::write(&existing, "x").unwrap();

        let input = format!("missing.txt\n{}\n", existing.display());
        let mut dialogs =
            ConsoleDialogs::new(Cursor::new(input.into_bytes()), Vec::new(), dir.path());
        assert_eq!(dialogs.pick_open_path(&FILE_FILTERS), Some(existing));
    }
}
