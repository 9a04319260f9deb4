//! Configuration management for Tiny Pad

use crate::error::EditorError;
use crate::palette::{DisplayMode, Rgb};
use crate::style::BufferColors;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "init.toml";
pub const SHORTCUTS_FILE: &str = "shortcuts.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub dialogs: DialogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EditorConfig {
    /// Suffix shown in every window title
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default = "default_text_color")]
    pub text_color: Rgb,
    #[serde(default = "default_background_color")]
    pub background_color: Rgb,
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DialogConfig {
    /// Directory relative paths in file prompts resolve against
    #[serde(default = "default_start_dir")]
    pub start_dir: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            display_mode: DisplayMode::default(),
            text_color: default_text_color(),
            background_color: default_background_color(),
            history_size: default_history_size(),
        }
    }
}

impl EditorConfig {
    pub fn buffer_colors(&self) -> BufferColors {
        BufferColors {
            foreground: self.text_color,
            background: self.background_color,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            start_dir: default_start_dir(),
        }
    }
}

fn default_app_name() -> String { "TextEditor".to_string() }
fn default_text_color() -> Rgb { BufferColors::default().foreground }
fn default_background_color() -> Rgb { BufferColors::default().background }
fn default_history_size() -> usize { 100 }
fn default_width() -> f32 { 600.0 }
fn default_height() -> f32 { 700.0 }
fn default_start_dir() -> PathBuf { PathBuf::from(".") }

impl AppConfig {
    /// Load configuration from init.toml in the working directory
    pub fn load() -> Result<Self, EditorError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, EditorError> {
        if !path.exists() {
            tracing::info!("No {} found, using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| EditorError::io(path, e))?;
        let config = Self::parse(&content).map_err(|message| EditorError::Config {
            path: path.to_path_buf(),
            message,
        })?;

        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::parse(
            r##"
            [editor]
            display_mode = "night"
            text_color = "#00ff00"

            [window]
            width = 1024.0
            "##,
        )
        .unwrap();

        assert_eq!(config.editor.display_mode, DisplayMode::Night);
        assert_eq!(config.editor.text_color, Rgb::new(0, 255, 0));
        assert_eq!(config.editor.background_color, Rgb::WHITE);
        assert_eq!(config.editor.app_name, "TextEditor");
        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, 700.0);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = AppConfig::parse("[editor]\ntext_color = \"greenish\"").unwrap_err();
        assert!(err.contains("Invalid color"));
    }

    #[test]
    fn test_load_reports_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[editor\n").unwrap();

        match AppConfig::load_from(&path) {
            Err(EditorError::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
