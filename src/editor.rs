//! Editor state and command dispatch
//!
//! `Editor` owns the document, its file binding, the style table and the
//! chrome state. `execute` runs one command to completion and returns the UI
//! updates the shell must apply; nothing here touches a window, so every
//! command can be driven headless.

use crate::buffer::{Selection, TextBuffer};
use crate::clipboard::{Clipboard, ClipboardCache, MemoryClipboard};
use crate::command::Command;
use crate::config::EditorConfig;
use crate::dialogs::{Dialogs, DEFAULT_SAVE_EXTENSION, FILE_FILTERS};
use crate::error::{EditorError, Result};
use crate::history::{DocumentHistory, DocumentSnapshot, History};
use crate::io;
use crate::palette::{DisplayMode, SurfacePalette};
use crate::style::{BufferColors, StyleTable, StyleTag, Toggled};
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const READY_STATUS: &str = "Ready";
pub const NEW_FILE_LABEL: &str = "New File";
pub const NO_SELECTION_STATUS: &str = "No text selected";

/// UI update produced by a command
#[derive(Clone, Debug, PartialEq)]
pub enum Reflection {
    Title(String),
    Status(String),
    Palette(SurfacePalette),
    BufferColors(BufferColors),
    /// Dismissible error dialog
    Error(String),
    Exit,
}

pub struct Editor {
    buffer: TextBuffer,
    styles: StyleTable,
    file: Option<PathBuf>,
    buffer_colors: BufferColors,
    mode: DisplayMode,
    surfaces: SurfacePalette,
    clipboard: ClipboardCache,
    history: DocumentHistory,
    app_name: String,
    title: String,
    status: String,
    /// Last command was typed text; the next one joins its undo step
    typing: bool,
}

impl Editor {
    pub fn new(config: &EditorConfig, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            buffer: TextBuffer::new(),
            styles: StyleTable::new(),
            file: None,
            buffer_colors: config.buffer_colors(),
            mode: config.display_mode,
            surfaces: SurfacePalette::for_mode(config.display_mode),
            clipboard: ClipboardCache::new(clipboard),
            history: History::with_max_size(config.history_size),
            app_name: config.app_name.clone(),
            title: config.app_name.clone(),
            status: READY_STATUS.to_string(),
            typing: false,
        }
    }

    /// Default configuration with a process-local clipboard
    pub fn headless() -> Self {
        Self::new(&EditorConfig::default(), Box::new(MemoryClipboard::new()))
    }

    // === Accessors ===

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn selection(&self) -> Selection {
        self.buffer.selection()
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.buffer.set_selection(selection);
        self.typing = false;
    }

    /// Select a byte range (anchor at start, cursor at end)
    pub fn select(&mut self, range: Range<usize>) {
        self.set_selection(Selection::new(range.start, range.end));
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn buffer_colors(&self) -> BufferColors {
        self.buffer_colors
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn surfaces(&self) -> SurfacePalette {
        self.surfaces
    }

    pub fn clipboard_scratch(&self) -> &str {
        self.clipboard.scratch()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // === Dispatch ===

    /// Run one command to completion and collect the resulting UI updates
    pub fn execute(&mut self, command: Command, dialogs: &mut dyn Dialogs) -> Vec<Reflection> {
        tracing::debug!(%command, "execute");

        let is_typing = matches!(command, Command::InsertText(_));
        let joins_typing_run = is_typing && self.typing;
        let before =
            (command.edits_document() && !joins_typing_run).then(|| self.snapshot());
        self.typing = is_typing;

        let mut out = Vec::new();
        match self.run(command, dialogs, &mut out) {
            Ok(()) => {
                if let Some(snapshot) = before {
                    if snapshot.text != self.buffer.text() || snapshot.styles != self.styles {
                        self.history.checkpoint(snapshot);
                    }
                }
            }
            Err(EditorError::Cancelled) => {
                tracing::debug!("Dialog cancelled");
            }
            Err(EditorError::NoSelection) => {
                self.typing = false;
                self.set_status(NO_SELECTION_STATUS, &mut out);
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.typing = false;
                out.push(Reflection::Error(e.to_string()));
                self.set_status(format!("Error: {}", e), &mut out);
            }
        }
        out
    }

    fn run(
        &mut self,
        command: Command,
        dialogs: &mut dyn Dialogs,
        out: &mut Vec<Reflection>,
    ) -> Result<()> {
        match command {
            Command::New => self.new_file(out),
            Command::Open => self.open_file(dialogs, out),
            Command::Save => self.save_file(dialogs, out),
            Command::SaveAs => self.save_as_file(dialogs, out),
            Command::Print => {
                tracing::debug!("Print is not implemented");
                Ok(())
            }
            Command::Exit => {
                out.push(Reflection::Exit);
                Ok(())
            }

            Command::Cut => self.cut(),
            Command::Copy => self.copy(),
            Command::Paste => {
                self.paste();
                Ok(())
            }
            Command::Undo => {
                self.undo();
                Ok(())
            }
            Command::Redo => {
                self.redo();
                Ok(())
            }
            Command::SelectAll => {
                self.buffer.select_all();
                Ok(())
            }
            Command::ClearAll => {
                self.delete_range(0..self.buffer.len());
                Ok(())
            }
            Command::ChangeTextColor => self.change_text_color(dialogs, out),
            Command::ChangeBackgroundColor => self.change_background_color(dialogs, out),

            Command::ToggleBold => self.toggle_tag(StyleTag::Bold).map(drop),
            Command::ToggleItalic => self.toggle_tag(StyleTag::Italic).map(drop),
            Command::ToggleColor => self.toggle_color(dialogs),

            Command::NightMode => {
                self.set_display_mode(DisplayMode::Night, out);
                Ok(())
            }
            Command::DayMode => {
                self.set_display_mode(DisplayMode::Day, out);
                Ok(())
            }

            Command::InsertText(text) => {
                self.replace_selection(&text);
                Ok(())
            }
            Command::Backspace => {
                self.delete_backward();
                Ok(())
            }
            Command::Delete => {
                self.delete_forward();
                Ok(())
            }
            Command::MoveLeft { extend } => {
                let sel = self.buffer.selection();
                let target = if !extend && !sel.is_cursor() {
                    sel.min_pos()
                } else {
                    self.buffer.prev_boundary(sel.cursor)
                };
                self.move_cursor(target, extend);
                Ok(())
            }
            Command::MoveRight { extend } => {
                let sel = self.buffer.selection();
                let target = if !extend && !sel.is_cursor() {
                    sel.cursor.max(sel.anchor)
                } else {
                    self.buffer.next_boundary(sel.cursor)
                };
                self.move_cursor(target, extend);
                Ok(())
            }
            Command::MoveHome { extend } => {
                let target = self.buffer.line_start(self.buffer.selection().cursor);
                self.move_cursor(target, extend);
                Ok(())
            }
            Command::MoveEnd { extend } => {
                let target = self.buffer.line_end(self.buffer.selection().cursor);
                self.move_cursor(target, extend);
                Ok(())
            }
        }
    }

    // === File commands ===

    fn new_file(&mut self, out: &mut Vec<Reflection>) -> Result<()> {
        self.buffer.clear();
        self.styles.clear();
        self.history.clear();
        self.file = None;

        let title = format!("{} - {}", NEW_FILE_LABEL, self.app_name);
        self.set_title(title, out);
        self.set_status(NEW_FILE_LABEL, out);
        Ok(())
    }

    fn open_file(&mut self, dialogs: &mut dyn Dialogs, out: &mut Vec<Reflection>) -> Result<()> {
        let path = dialogs
            .pick_open_path(&FILE_FILTERS)
            .ok_or(EditorError::Cancelled)?;
        // Read before touching the buffer so a failure leaves it intact
        let text = io::load(&path).map_err(|e| EditorError::io(&path, e))?;

        self.buffer.set_text(&text);
        self.styles.clear();
        self.history.clear();

        let name = io::display_name(&path);
        tracing::info!("Opened {} ({} bytes)", path.display(), text.len());
        self.file = Some(path);

        let title = format!("{} - {}", name, self.app_name);
        self.set_title(title, out);
        self.set_status(name, out);
        Ok(())
    }

    fn save_file(&mut self, dialogs: &mut dyn Dialogs, out: &mut Vec<Reflection>) -> Result<()> {
        let Some(path) = self.file.clone() else {
            return self.save_as_file(dialogs, out);
        };

        self.write_to(&path)?;
        self.set_status(format!("Saved: {}", io::display_name(&path)), out);
        Ok(())
    }

    fn save_as_file(&mut self, dialogs: &mut dyn Dialogs, out: &mut Vec<Reflection>) -> Result<()> {
        let path = dialogs
            .pick_save_path(&FILE_FILTERS, DEFAULT_SAVE_EXTENSION)
            .ok_or(EditorError::Cancelled)?;

        self.write_to(&path)?;

        let name = io::display_name(&path);
        self.file = Some(path);

        let title = format!("Saved: {} - {}", name, self.app_name);
        self.set_title(title, out);
        self.set_status(format!("Saved: {}", name), out);
        Ok(())
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        io::save(self.buffer.text(), path).map_err(|e| EditorError::io(path, e))?;
        tracing::info!("Saved {} ({} bytes)", path.display(), self.buffer.len());
        Ok(())
    }

    // === Clipboard ===

    fn cut(&mut self) -> Result<()> {
        let range = self.selected_range()?;
        let text = self.buffer.slice(range.clone()).to_string();
        self.clipboard.copy(&text);
        self.delete_range(range);
        Ok(())
    }

    fn copy(&mut self) -> Result<()> {
        let range = self.selected_range()?;
        let text = self.buffer.slice(range).to_string();
        self.clipboard.copy(&text);
        Ok(())
    }

    fn paste(&mut self) {
        let text = self.clipboard.paste().to_string();
        if !text.is_empty() {
            self.replace_selection(&text);
        }
    }

    // === Styling ===

    fn selected_range(&self) -> Result<Range<usize>> {
        let selection = self.buffer.selection();
        if selection.is_cursor() {
            Err(EditorError::NoSelection)
        } else {
            Ok(selection.range())
        }
    }

    fn toggle_tag(&mut self, tag: StyleTag) -> Result<Toggled> {
        let range = self.selected_range()?;
        let toggled = self
            .styles
            .toggle(tag, range.clone())
            .ok_or(EditorError::NoSelection)?;
        tracing::debug!(%tag, ?range, ?toggled, "toggle");
        Ok(toggled)
    }

    fn toggle_color(&mut self, dialogs: &mut dyn Dialogs) -> Result<()> {
        self.selected_range()?;
        let color = dialogs
            .pick_color("Choose text color", self.styles.color())
            .ok_or(EditorError::Cancelled)?;
        self.styles.set_color(color);
        self.toggle_tag(StyleTag::Colored).map(drop)
    }

    fn change_text_color(
        &mut self,
        dialogs: &mut dyn Dialogs,
        out: &mut Vec<Reflection>,
    ) -> Result<()> {
        let color = dialogs
            .pick_color("Choose text color", Some(self.buffer_colors.foreground))
            .ok_or(EditorError::Cancelled)?;
        self.buffer_colors.foreground = color;
        out.push(Reflection::BufferColors(self.buffer_colors));
        Ok(())
    }

    fn change_background_color(
        &mut self,
        dialogs: &mut dyn Dialogs,
        out: &mut Vec<Reflection>,
    ) -> Result<()> {
        let color = dialogs
            .pick_color("Choose background color", Some(self.buffer_colors.background))
            .ok_or(EditorError::Cancelled)?;
        self.buffer_colors.background = color;
        out.push(Reflection::BufferColors(self.buffer_colors));
        Ok(())
    }

    fn set_display_mode(&mut self, mode: DisplayMode, out: &mut Vec<Reflection>) {
        self.mode = mode;
        self.surfaces = SurfacePalette::for_mode(mode);
        out.push(Reflection::Palette(self.surfaces));
    }

    // === History ===

    fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            text: self.buffer.text().to_string(),
            styles: self.styles.clone(),
            selection: self.buffer.selection(),
        }
    }

    fn restore(&mut self, snapshot: DocumentSnapshot) {
        self.buffer.set_text(&snapshot.text);
        self.buffer.set_selection(snapshot.selection);
        self.styles = snapshot.styles;
    }

    fn undo(&mut self) {
        let current = self.snapshot();
        if let Some(previous) = self.history.undo(current) {
            self.restore(previous);
        }
    }

    fn redo(&mut self) {
        let current = self.snapshot();
        if let Some(next) = self.history.redo(current) {
            self.restore(next);
        }
    }

    // === Text edits (keep the style table aligned with the buffer) ===

    fn insert_at(&mut self, pos: usize, text: &str) {
        self.buffer.insert(pos, text);
        self.styles.on_insert(pos, text.len());
    }

    fn delete_range(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.styles.on_delete(&range);
        self.buffer.delete(range);
    }

    /// Replace a non-empty selection with `text`, or insert at the caret
    fn replace_selection(&mut self, text: &str) {
        let selection = self.buffer.selection();
        if !selection.is_cursor() {
            self.delete_range(selection.range());
        }
        let caret = self.buffer.selection().cursor;
        self.insert_at(caret, text);
    }

    fn delete_backward(&mut self) {
        let selection = self.buffer.selection();
        if !selection.is_cursor() {
            self.delete_range(selection.range());
        } else {
            let start = self.buffer.prev_boundary(selection.cursor);
            self.delete_range(start..selection.cursor);
        }
    }

    fn delete_forward(&mut self) {
        let selection = self.buffer.selection();
        if !selection.is_cursor() {
            self.delete_range(selection.range());
        } else {
            let end = self.buffer.next_boundary(selection.cursor);
            self.delete_range(selection.cursor..end);
        }
    }

    fn move_cursor(&mut self, target: usize, extend: bool) {
        let anchor = if extend {
            self.buffer.selection().anchor
        } else {
            target
        };
        self.buffer.set_selection(Selection::new(anchor, target));
    }

    // === Chrome ===

    fn set_title(&mut self, title: impl Into<String>, out: &mut Vec<Reflection>) {
        self.title = title.into();
        out.push(Reflection::Title(self.title.clone()));
    }

    fn set_status(&mut self, status: impl Into<String>, out: &mut Vec<Reflection>) {
        self.status = status.into();
        out.push(Reflection::Status(self.status.clone()));
    }
}
