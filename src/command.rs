//! Editor commands and their stable event names
//!
//! Names are what `shortcuts.toml` binds accelerators to.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    // File
    New,
    Open,
    Save,
    SaveAs,
    Print,
    Exit,

    // Edit
    Cut,
    Copy,
    Paste,
    Undo,
    Redo,
    SelectAll,
    ClearAll,
    ChangeTextColor,
    ChangeBackgroundColor,

    // Styling
    ToggleBold,
    ToggleItalic,
    ToggleColor,

    // Options
    NightMode,
    DayMode,

    // Text entry
    InsertText(String),
    Backspace,
    Delete,
    MoveLeft { extend: bool },
    MoveRight { extend: bool },
    MoveHome { extend: bool },
    MoveEnd { extend: bool },
}

/// Commands reachable by name, in menu order
const NAMED: &[(&str, Command)] = &[
    ("file.new", Command::New),
    ("file.open", Command::Open),
    ("file.save", Command::Save),
    ("file.save_as", Command::SaveAs),
    ("file.print", Command::Print),
    ("file.exit", Command::Exit),
    ("edit.cut", Command::Cut),
    ("edit.copy", Command::Copy),
    ("edit.paste", Command::Paste),
    ("edit.undo", Command::Undo),
    ("edit.redo", Command::Redo),
    ("edit.select_all", Command::SelectAll),
    ("edit.clear_all", Command::ClearAll),
    ("edit.text_color", Command::ChangeTextColor),
    ("edit.background_color", Command::ChangeBackgroundColor),
    ("format.bold", Command::ToggleBold),
    ("format.italic", Command::ToggleItalic),
    ("format.color", Command::ToggleColor),
    ("options.night_mode", Command::NightMode),
    ("options.day_mode", Command::DayMode),
];

impl Command {
    /// Event name, or `None` for text-entry commands that carry input
    pub fn name(&self) -> Option<&'static str> {
        NAMED
            .iter()
            .find(|(_, command)| command == self)
            .map(|(name, _)| *name)
    }

    /// All commands that can be bound to a shortcut
    pub fn named() -> impl Iterator<Item = (&'static str, &'static Command)> {
        NAMED.iter().map(|(name, command)| (*name, command))
    }

    /// Whether the command may change document text or styles
    pub fn edits_document(&self) -> bool {
        matches!(
            self,
            Command::Cut
                | Command::Paste
                | Command::ClearAll
                | Command::ToggleBold
                | Command::ToggleItalic
                | Command::ToggleColor
                | Command::InsertText(_)
                | Command::Backspace
                | Command::Delete
        )
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, command)| command.clone())
            .ok_or_else(|| format!("Unknown command: {}", name))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for (name, command) in Command::named() {
            assert_eq!(name.parse::<Command>().unwrap(), *command);
            assert_eq!(command.name(), Some(name));
        }
    }

    #[test]
    fn test_text_entry_has_no_name() {
        assert_eq!(Command::InsertText("x".into()).name(), None);
        assert_eq!(Command::MoveLeft { extend: false }.name(), None);
        assert!("editor.insert_char".parse::<Command>().is_err());
    }

    #[test]
    fn test_edits_document() {
        assert!(Command::Cut.edits_document());
        assert!(!Command::Copy.edits_document());
        assert!(!Command::SelectAll.edits_document());
    }
}
