//! Chrome layout - turns the current palette into colored rectangles
//!
//! The window is painted as bands: menu bar, toolbar, text area, status bar,
//! with the window background showing around the text area.

use crate::palette::{Rgb, SurfacePalette};
use crate::style::BufferColors;

pub const MENU_HEIGHT: f32 = 24.0;
pub const TOOLBAR_HEIGHT: f32 = 32.0;
pub const STATUS_HEIGHT: f32 = 22.0;
pub const PADDING: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectInstance {
    pub rect: Rect,
    pub color: Rgb,
}

/// Rectangles for every surface, back to front, in logical pixels
pub fn layout_chrome(
    width: f32,
    height: f32,
    surfaces: &SurfacePalette,
    buffer: &BufferColors,
) -> Vec<RectInstance> {
    let status_top = (height - STATUS_HEIGHT).max(0.0);
    let text_top = MENU_HEIGHT + TOOLBAR_HEIGHT + PADDING;

    let rects = [
        (Rect::new(0.0, 0.0, width, height), surfaces.window.background),
        (Rect::new(0.0, 0.0, width, MENU_HEIGHT), surfaces.menu.background),
        (
            Rect::new(0.0, MENU_HEIGHT, width, TOOLBAR_HEIGHT),
            surfaces.toolbar.background,
        ),
        (
            Rect::new(
                PADDING,
                text_top,
                width - PADDING * 2.0,
                status_top - PADDING - text_top,
            ),
            buffer.background,
        ),
        (
            Rect::new(0.0, status_top, width, height.min(STATUS_HEIGHT)),
            surfaces.status_bar.background,
        ),
    ];

    rects
        .into_iter()
        .filter(|(rect, _)| !rect.is_empty())
        .map(|(rect, color)| RectInstance { rect, color })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::DisplayMode;

    #[test]
    fn test_bands_stack_top_to_bottom() {
        let surfaces = SurfacePalette::for_mode(DisplayMode::Day);
        let rects = layout_chrome(600.0, 700.0, &surfaces, &BufferColors::default());
        assert_eq!(rects.len(), 5);

        assert_eq!(rects[0].rect, Rect::new(0.0, 0.0, 600.0, 700.0));
        assert_eq!(rects[1].rect.y, 0.0);
        assert_eq!(rects[2].rect.y, MENU_HEIGHT);
        assert_eq!(rects[3].color, Rgb::WHITE);
        assert_eq!(rects[4].rect.y, 700.0 - STATUS_HEIGHT);
        assert_eq!(rects[4].color, surfaces.status_bar.background);
    }

    #[test]
    fn test_tiny_window_drops_text_area() {
        let surfaces = SurfacePalette::for_mode(DisplayMode::Night);
        let rects = layout_chrome(10.0, 40.0, &surfaces, &BufferColors::default());
        assert!(rects.iter().all(|r| !r.rect.is_empty()));
        assert!(rects.iter().all(|r| r.color != Rgb::WHITE));
    }
}
