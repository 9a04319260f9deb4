//! Tiny Pad - a minimal rich-text notepad
//!
//! Everything except `app` and `gpu` runs headless: build an [`Editor`],
//! feed it [`Command`]s, and apply the [`Reflection`]s it returns.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod accelerator;
pub mod app;
pub mod buffer;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod dialogs;
pub mod editor;
pub mod error;
pub mod gpu;
pub mod history;
pub mod input;
pub mod io;
pub mod menu;
pub mod palette;
pub mod render;
pub mod shortcuts;
pub mod style;

// Re-export core types
pub use buffer::{Selection, TextBuffer};
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use command::Command;
pub use config::AppConfig;
pub use dialogs::{ConsoleDialogs, Dialogs, FileFilter};
pub use editor::{Editor, Reflection};
pub use error::{EditorError, Result};
pub use history::History;
pub use palette::{DisplayMode, Palette, Rgb, Surface, SurfacePalette};
pub use style::{BufferColors, StyleTable, StyleTag};
