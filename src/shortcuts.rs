//! Shortcut registry - maps accelerators to commands
//!
//! Built-in defaults cover the standard edit keys. `shortcuts.toml` replaces
//! the bindings of any command it names:
//!
//! ```toml
//! [shortcuts]
//! "edit.cut" = "ctrl+x"
//! "file.save_as" = ["ctrl+shift+s", "f12"]
//! ```

use crate::accelerator::{Accelerator, AcceleratorMatcher, Modifiers, Trigger};
use crate::command::Command;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_SHORTCUTS: &[(&str, &str)] = &[
    ("file.new", "ctrl+n"),
    ("file.open", "ctrl+o"),
    ("file.save", "ctrl+s"),
    ("file.save_as", "ctrl+shift+s"),
    ("edit.cut", "ctrl+x"),
    ("edit.copy", "ctrl+c"),
    ("edit.paste", "ctrl+v"),
    ("edit.select_all", "ctrl+a"),
    ("edit.undo", "ctrl+z"),
    ("edit.redo", "ctrl+y"),
    ("format.bold", "ctrl+b"),
    ("format.italic", "ctrl+i"),
];

#[derive(Debug, Default, Deserialize)]
struct ShortcutsConfig {
    #[serde(default)]
    shortcuts: HashMap<String, ShortcutValue>,
}

/// A shortcut value can be either a single string or an array of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ShortcutValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ShortcutValue {
    fn into_vec(self) -> Vec<String> {
        match self {
            ShortcutValue::Single(s) => vec![s],
            ShortcutValue::Multiple(v) => v,
        }
    }
}

pub struct ShortcutRegistry {
    bindings: Vec<(Accelerator, Command)>,
    matcher: AcceleratorMatcher,
}

impl ShortcutRegistry {
    /// Registry with no bindings
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
            matcher: AcceleratorMatcher::new(),
        }
    }

    /// Registry with the built-in bindings
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for (name, accelerator) in DEFAULT_SHORTCUTS {
            registry.register_named(name, accelerator);
        }
        registry
    }

    /// Defaults, overridden by `path` when it exists
    pub fn load(path: &Path) -> Self {
        let mut registry = Self::with_defaults();
        if !path.exists() {
            tracing::info!("No {} found, using default shortcuts", path.display());
            return registry;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => registry.apply_overrides(&content),
            Err(e) => tracing::warn!("Failed to read {}: {}", path.display(), e),
        }
        registry
    }

    /// Apply a `shortcuts.toml` document on top of the current bindings
    pub fn apply_overrides(&mut self, content: &str) {
        let config = match toml::from_str::<ShortcutsConfig>(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Shortcut file has a syntax error, keeping defaults: {}", e);
                return;
            }
        };

        for (name, value) in config.shortcuts {
            let command = match name.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    tracing::warn!("Skipping shortcut: {}", e);
                    continue;
                }
            };
            self.bindings.retain(|(_, bound)| bound != &command);
            for accelerator in value.into_vec() {
                self.register(&accelerator, command.clone());
            }
        }
        self.matcher.reset();
    }

    /// Bind an accelerator to a command
    pub fn register(&mut self, accelerator: &str, command: Command) {
        match Accelerator::parse(accelerator) {
            Ok(acc) => {
                // One command per accelerator; later bindings win
                self.bindings.retain(|(bound, _)| bound != &acc);
                self.bindings.push((acc, command));
            }
            Err(e) => tracing::warn!("Failed to parse accelerator '{}': {}", accelerator, e),
        }
    }

    fn register_named(&mut self, name: &str, accelerator: &str) {
        match name.parse::<Command>() {
            Ok(command) => self.register(accelerator, command),
            Err(e) => tracing::warn!("{}", e),
        }
    }

    /// Feed one key press; returns the command it completes, if any
    pub fn match_input(&mut self, modifiers: &Modifiers, trigger: &Trigger) -> Option<Command> {
        let bindings = &self.bindings;
        let matched = self
            .matcher
            .feed(modifiers, trigger, bindings.iter().map(|(acc, _)| acc))?;
        bindings
            .iter()
            .find(|(acc, _)| acc == matched)
            .map(|(_, command)| command.clone())
    }

    /// Whether the key just fed started a multi-chord shortcut
    pub fn is_pending(&self) -> bool {
        self.matcher.is_pending()
    }

    /// First accelerator bound to `command`, for menu labels
    pub fn accelerator_for(&self, command: &Command) -> Option<&Accelerator> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound == command)
            .map(|(acc, _)| acc)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(c: &str) -> Trigger {
        Trigger::Char(c.to_string())
    }

    #[test]
    fn test_defaults() {
        let mut registry = ShortcutRegistry::with_defaults();
        let mods = Modifiers::ctrl();
        assert_eq!(registry.match_input(&mods, &ch("x")), Some(Command::Cut));
        assert_eq!(registry.match_input(&mods, &ch("c")), Some(Command::Copy));
        assert_eq!(registry.match_input(&mods, &ch("v")), Some(Command::Paste));
        assert_eq!(registry.match_input(&mods, &ch("a")), Some(Command::SelectAll));
        assert_eq!(registry.match_input(&mods, &ch("z")), Some(Command::Undo));
        assert_eq!(registry.match_input(&mods, &ch("y")), Some(Command::Redo));
        assert_eq!(registry.match_input(&Modifiers::none(), &ch("x")), None);
    }

    #[test]
    fn test_overrides_replace_command_bindings() {
        let mut registry = ShortcutRegistry::with_defaults();
        registry.apply_overrides(
            r#"
            [shortcuts]
            "edit.cut" = ["ctrl+shift+x", "shift+delete"]
            "#,
        );

        let mods = Modifiers::ctrl();
        assert_eq!(registry.match_input(&mods, &ch("x")), None);

        let mods = Modifiers {
            ctrl: true,
            shift: true,
            ..Modifiers::default()
        };
        assert_eq!(registry.match_input(&mods, &ch("x")), Some(Command::Cut));
        assert_eq!(
            registry.accelerator_for(&Command::Cut).map(|a| a.to_string()),
            Some("Ctrl+Shift+X".to_string())
        );
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let mut registry = ShortcutRegistry::with_defaults();
        registry.apply_overrides(
            r#"
            [shortcuts]
            "no.such.command" = "ctrl+q"
            "edit.copy" = "hyper+c"
            "#,
        );
        // Copy lost its binding to the bad accelerator, everything else intact
        assert_eq!(registry.accelerator_for(&Command::Copy), None);
        assert_eq!(
            registry.match_input(&Modifiers::ctrl(), &ch("v")),
            Some(Command::Paste)
        );
    }

    #[test]
    fn test_syntax_error_keeps_defaults() {
        let mut registry = ShortcutRegistry::with_defaults();
        registry.apply_overrides("[shortcuts\n");
        assert!(registry.accelerator_for(&Command::Cut).is_some());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ShortcutRegistry::load(&dir.path().join("shortcuts.toml"));
        assert!(registry.accelerator_for(&Command::Undo).is_some());
    }
}
