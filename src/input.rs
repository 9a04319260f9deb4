//! Keyboard input - converts winit key presses into editor commands

use crate::accelerator::{Modifiers, Trigger};
use crate::command::Command;
use crate::shortcuts::ShortcutRegistry;
use winit::keyboard::{Key, ModifiersState, NamedKey};

/// What a key press asks the shell to do
#[derive(Clone, Debug, PartialEq)]
pub enum KeyAction {
    Command(Command),
    /// Show the menu chooser (F10)
    OpenMenu,
    /// Key is part of an unfinished shortcut sequence, or unbound
    Ignored,
}

/// Convert winit modifiers to our Modifiers
pub fn convert_modifiers(state: ModifiersState) -> Modifiers {
    Modifiers {
        cmd: state.super_key(),
        ctrl: state.control_key(),
        alt: state.alt_key(),
        shift: state.shift_key(),
    }
}

/// Convert winit key to our Trigger
pub fn convert_key(key: &Key) -> Option<Trigger> {
    match key {
        Key::Character(ch) if ch.chars().count() == 1 => Some(Trigger::Char(ch.to_lowercase())),
        Key::Named(named) => {
            let name = match named {
                NamedKey::Enter => "Enter",
                NamedKey::Tab => "Tab",
                NamedKey::Backspace => "Backspace",
                NamedKey::Delete => "Delete",
                NamedKey::Escape => "Escape",
                NamedKey::Space => "Space",
                NamedKey::ArrowUp => "ArrowUp",
                NamedKey::ArrowDown => "ArrowDown",
                NamedKey::ArrowLeft => "ArrowLeft",
                NamedKey::ArrowRight => "ArrowRight",
                NamedKey::Home => "Home",
                NamedKey::End => "End",
                NamedKey::PageUp => "PageUp",
                NamedKey::PageDown => "PageDown",
                NamedKey::F1 => "F1",
                NamedKey::F2 => "F2",
                NamedKey::F3 => "F3",
                NamedKey::F4 => "F4",
                NamedKey::F5 => "F5",
                NamedKey::F6 => "F6",
                NamedKey::F7 => "F7",
                NamedKey::F8 => "F8",
                NamedKey::F9 => "F9",
                NamedKey::F10 => "F10",
                NamedKey::F11 => "F11",
                NamedKey::F12 => "F12",
                _ => return None,
            };
            Some(Trigger::Named(name.to_string()))
        }
        _ => None,
    }
}

/// Resolve one key press. Shortcuts win over editing keys. Character text
/// is inserted unless the platform command key or a lone Ctrl is held, so
/// AltGr (reported as Ctrl+Alt) and Option still type.
pub fn translate(
    shortcuts: &mut ShortcutRegistry,
    modifiers: &Modifiers,
    key: &Key,
    text: Option<&str>,
) -> KeyAction {
    if let Some(trigger) = convert_key(key) {
        if let Some(command) = shortcuts.match_input(modifiers, &trigger) {
            return KeyAction::Command(command);
        }
        if shortcuts.is_pending() {
            return KeyAction::Ignored;
        }
    }

    let extend = modifiers.shift;
    let editing = match key {
        Key::Named(NamedKey::F10) => return KeyAction::OpenMenu,
        Key::Named(NamedKey::Backspace) => Some(Command::Backspace),
        Key::Named(NamedKey::Delete) => Some(Command::Delete),
        Key::Named(NamedKey::ArrowLeft) => Some(Command::MoveLeft { extend }),
        Key::Named(NamedKey::ArrowRight) => Some(Command::MoveRight { extend }),
        Key::Named(NamedKey::Home) => Some(Command::MoveHome { extend }),
        Key::Named(NamedKey::End) => Some(Command::MoveEnd { extend }),
        Key::Named(NamedKey::Enter) => Some(Command::InsertText("\n".to_string())),
        Key::Named(NamedKey::Tab) => Some(Command::InsertText("\t".to_string())),
        Key::Named(NamedKey::Space) => Some(Command::InsertText(" ".to_string())),
        _ => None,
    };
    if let Some(command) = editing {
        return if modifiers.is_command() {
            KeyAction::Ignored
        } else {
            KeyAction::Command(command)
        };
    }

    let blocks_text = modifiers.cmd || (modifiers.ctrl && !modifiers.alt);
    match (key, text) {
        (Key::Character(_), Some(text))
            if !blocks_text && !text.is_empty() && !text.chars().any(char::is_control) =>
        {
            KeyAction::Command(Command::InsertText(text.to_string()))
        }
        _ => KeyAction::Ignored,
    }
}
