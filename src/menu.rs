//! Menu bar and toolbar layout

use crate::command::Command;
use crate::shortcuts::ShortcutRegistry;

#[derive(Clone, Debug, PartialEq)]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    pub command: Command,
    /// Accelerator label, e.g. "Ctrl+X"
    pub shortcut: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Menu {
    pub label: &'static str,
    pub entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Separator => None,
        })
    }
}

/// Toolbar button
#[derive(Clone, Debug, PartialEq)]
pub struct ToolButton {
    pub label: &'static str,
    pub command: Command,
}

fn item(label: &'static str, command: Command, shortcuts: &ShortcutRegistry) -> MenuEntry {
    let shortcut = shortcuts.accelerator_for(&command).map(|acc| acc.to_string());
    MenuEntry::Item(MenuItem {
        label,
        command,
        shortcut,
    })
}

/// File, Edit and Options menus with labels for the active shortcuts
pub fn menu_bar(shortcuts: &ShortcutRegistry) -> Vec<Menu> {
    vec![
        Menu {
            label: "File",
            entries: vec![
                item("New", Command::New, shortcuts),
                item("Open", Command::Open, shortcuts),
                item("Save", Command::Save, shortcuts),
                item("Save As", Command::SaveAs, shortcuts),
                item("Print", Command::Print, shortcuts),
                MenuEntry::Separator,
                item("Exit", Command::Exit, shortcuts),
            ],
        },
        Menu {
            label: "Edit",
            entries: vec![
                item("Cut", Command::Cut, shortcuts),
                item("Copy", Command::Copy, shortcuts),
                item("Paste", Command::Paste, shortcuts),
                MenuEntry::Separator,
                item("Change All Text Color", Command::ChangeTextColor, shortcuts),
                item("Change Background Color", Command::ChangeBackgroundColor, shortcuts),
                MenuEntry::Separator,
                item("Undo", Command::Undo, shortcuts),
                item("Redo", Command::Redo, shortcuts),
                MenuEntry::Separator,
                item("Select All", Command::SelectAll, shortcuts),
                item("Clear All", Command::ClearAll, shortcuts),
            ],
        },
        Menu {
            label: "Options",
            entries: vec![
                item("Night Mode", Command::NightMode, shortcuts),
                item("Day Mode", Command::DayMode, shortcuts),
            ],
        },
    ]
}

pub fn toolbar() -> Vec<ToolButton> {
    vec![
        ToolButton {
            label: "Bold",
            command: Command::ToggleBold,
        },
        ToolButton {
            label: "Italics",
            command: Command::ToggleItalic,
        },
        ToolButton {
            label: "Undo",
            command: Command::Undo,
        },
        ToolButton {
            label: "Redo",
            command: Command::Redo,
        },
        ToolButton {
            label: "Text Color",
            command: Command::ToggleColor,
        },
    ]
}

/// Every menu item and toolbar button as ("Menu/Item (Shortcut)", command),
/// in display order
pub fn flatten(menus: &[Menu]) -> Vec<(String, Command)> {
    let mut entries: Vec<(String, Command)> = menus
        .iter()
        .flat_map(|menu| {
            menu.items().map(move |item| {
                let label = match &item.shortcut {
                    Some(shortcut) => format!("{}/{} ({})", menu.label, item.label, shortcut),
                    None => format!("{}/{}", menu.label, item.label),
                };
                (label, item.command.clone())
            })
        })
        .collect();

    entries.extend(
        toolbar()
            .into_iter()
            .map(|button| (format!("Toolbar/{}", button.label), button.command)),
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_surface() {
        let menus = menu_bar(&ShortcutRegistry::with_defaults());
        let labels: Vec<Vec<&str>> = menus
            .iter()
            .map(|m| m.items().map(|i| i.label).collect())
            .collect();

        assert_eq!(labels[0], ["New", "Open", "Save", "Save As", "Print", "Exit"]);
        assert_eq!(
            labels[1],
            [
                "Cut",
                "Copy",
                "Paste",
                "Change All Text Color",
                "Change Background Color",
                "Undo",
                "Redo",
                "Select All",
                "Clear All"
            ]
        );
        assert_eq!(labels[2], ["Night Mode", "Day Mode"]);
    }

    #[test]
    fn test_shortcut_labels() {
        let menus = menu_bar(&ShortcutRegistry::with_defaults());
        let cut = menus[1].items().find(|i| i.command == Command::Cut).unwrap();
        assert_eq!(cut.shortcut.as_deref(), Some("Ctrl+X"));

        let print = menus[0].items().find(|i| i.command == Command::Print).unwrap();
        assert_eq!(print.shortcut, None);
    }

    #[test]
    fn test_flatten_includes_toolbar() {
        let menus = menu_bar(&ShortcutRegistry::with_defaults());
        let entries = flatten(&menus);

        assert_eq!(entries[0], ("File/New (Ctrl+N)".to_string(), Command::New));
        assert!(entries.contains(&("File/Print".to_string(), Command::Print)));
        assert_eq!(
            entries.last(),
            Some(&("Toolbar/Text Color".to_string(), Command::ToggleColor))
        );
        assert_eq!(entries.len(), 17 + 5);
    }
}
