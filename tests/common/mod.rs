//! Shared test doubles for driving the editor headless

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use tiny_pad::clipboard::Clipboard;
use tiny_pad::dialogs::{Dialogs, FileFilter};
use tiny_pad::palette::Rgb;

/// Dialogs that answer from queues; an empty queue means the user cancelled
#[derive(Default)]
pub struct ScriptedDialogs {
    pub open_paths: VecDeque<PathBuf>,
    pub save_paths: VecDeque<PathBuf>,
    pub colors: VecDeque<Rgb>,
    pub choices: VecDeque<usize>,
    pub alerts: Vec<String>,
    /// Name of every dialog shown, in order
    pub shown: Vec<&'static str>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, path: impl Into<PathBuf>) -> Self {
        self.open_paths.push_back(path.into());
        self
    }

    pub fn save(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_paths.push_back(path.into());
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.colors.push_back(color);
        self
    }
}

impl Dialogs for ScriptedDialogs {
    fn pick_open_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
        self.shown.push("open");
        self.open_paths.pop_front()
    }

    fn pick_save_path(&mut self, _filters: &[FileFilter], _default: &str) -> Option<PathBuf> {
        self.shown.push("save");
        self.save_paths.pop_front()
    }

    fn pick_color(&mut self, _title: &str, _initial: Option<Rgb>) -> Option<Rgb> {
        self.shown.push("color");
        self.colors.pop_front()
    }

    fn choose(&mut self, _title: &str, _options: &[String]) -> Option<usize> {
        self.shown.push("choose");
        self.choices.pop_front()
    }

    fn alert(&mut self, message: &str) {
        self.shown.push("alert");
        self.alerts.push(message.to_string());
    }
}

/// A system clipboard that cannot be reached
pub struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn get_text(&mut self) -> Option<String> {
        None
    }

    fn set_text(&mut self, _text: &str) -> bool {
        false
    }
}
