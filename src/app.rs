//! winit application shell
//!
//! Owns the window and GPU renderer, feeds key presses through the
//! shortcut registry into the editor, and applies the reflections each
//! command returns.

use crate::accelerator::Modifiers;
use crate::clipboard::SystemClipboard;
use crate::command::Command;
use crate::config::AppConfig;
use crate::dialogs::{ConsoleDialogs, Dialogs};
use crate::editor::{Editor, Reflection};
use crate::gpu::GpuRenderer;
use crate::input::{self, KeyAction};
use crate::menu::{self, Menu};
use crate::render::layout_chrome;
use crate::shortcuts::ShortcutRegistry;
use std::io::{Stderr, StdinLock};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

pub struct TinyPadApp {
    window: Option<Arc<Window>>,
    renderer: Option<GpuRenderer>,
    editor: Editor,
    shortcuts: ShortcutRegistry,
    dialogs: ConsoleDialogs<StdinLock<'static>, Stderr>,
    modifiers: Modifiers,
    menus: Vec<Menu>,
    window_size: (f32, f32),
    /// Set when the window could not be brought up
    startup_error: Option<anyhow::Error>,
}

impl TinyPadApp {
    pub fn new(config: AppConfig, shortcuts: ShortcutRegistry) -> Self {
        let editor = Editor::new(&config.editor, Box::new(SystemClipboard::new()));
        let menus = menu::menu_bar(&shortcuts);
        Self {
            window: None,
            renderer: None,
            editor,
            shortcuts,
            dialogs: ConsoleDialogs::stdio(config.dialogs.start_dir),
            modifiers: Modifiers::none(),
            menus,
            window_size: (config.window.width, config.window.height),
            startup_error: None,
        }
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, command: Command) {
        let reflections = self.editor.execute(command, &mut self.dialogs);
        self.apply(event_loop, reflections);
    }

    fn apply(&mut self, event_loop: &ActiveEventLoop, reflections: Vec<Reflection>) {
        let mut redraw = false;
        for reflection in reflections {
            match reflection {
                Reflection::Title(title) => {
                    if let Some(window) = &self.window {
                        window.set_title(&title);
                    }
                }
                Reflection::Status(status) => tracing::info!(target: "status", "{}", status),
                Reflection::Palette(_) | Reflection::BufferColors(_) => redraw = true,
                Reflection::Error(message) => self.dialogs.alert(&message),
                Reflection::Exit => {
                    event_loop.exit();
                    return;
                }
            }
        }
        if redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn open_menu(&mut self, event_loop: &ActiveEventLoop) {
        let entries = menu::flatten(&self.menus);
        let labels: Vec<String> = entries.iter().map(|(label, _)| label.clone()).collect();
        if let Some(index) = self.dialogs.choose("Menu", &labels) {
            let command = entries[index].1.clone();
            self.dispatch(event_loop, command);
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.editor.title())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.window_size.0,
                self.window_size.1,
            ));
        let window = Arc::new(event_loop.create_window(attributes)?);

        tracing::info!("Initializing GPU renderer...");
        let renderer = pollster::block_on(GpuRenderer::new(window.clone()))?;

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self) {
        let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer) else {
            return;
        };
        let physical_size = window.inner_size();
        let scale_factor = window.scale_factor() as f32;
        let logical_width = physical_size.width as f32 / scale_factor;
        let logical_height = physical_size.height as f32 / scale_factor;

        let rects = layout_chrome(
            logical_width,
            logical_height,
            &self.editor.surfaces(),
            &self.editor.buffer_colors(),
        );
        renderer.render(&rects, (logical_width, logical_height));
    }
}

impl ApplicationHandler for TinyPadApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            tracing::error!("Failed to start: {:#}", e);
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Goodbye!");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = input::convert_modifiers(modifiers.state());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let text = event.text.as_ref().map(|t| t.as_str());
                match input::translate(
                    &mut self.shortcuts,
                    &self.modifiers,
                    &event.logical_key,
                    text,
                ) {
                    KeyAction::Command(command) => self.dispatch(event_loop, command),
                    KeyAction::OpenMenu => self.open_menu(event_loop),
                    KeyAction::Ignored => {}
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }
}

/// Open the editor window and block until it closes
pub fn run(config: AppConfig, shortcuts: ShortcutRegistry) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = TinyPadApp::new(config, shortcuts);
    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
