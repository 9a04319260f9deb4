//! Display palettes for the window chrome
//!
//! A palette assigns background and foreground colors to each named UI
//! surface. The set of surfaces is closed; there is no widget traversal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear RGBA floats for the GPU
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional)
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let hex = input.trim().trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid color: {}", input));
        }
        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| format!("Invalid color: {}", input))
        };

        match hex.len() {
            6 => Ok(Rgb::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |s: &str| channel(s).map(|v| v * 0x11);
                Ok(Rgb::new(short(&hex[0..1])?, short(&hex[1..2])?, short(&hex[2..3])?))
            }
            _ => Err(format!("Invalid color: {}", input)),
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Named color scheme for the window chrome
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Day,
    Night,
}

/// Base colors a display mode is built from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub accent: Rgb,
}

impl Palette {
    pub fn day() -> Self {
        Self {
            background: Rgb::new(0xf0, 0xf0, 0xf0),
            foreground: Rgb::BLACK,
            accent: Rgb::new(0xe1, 0xe1, 0xe1),
        }
    }

    pub fn night() -> Self {
        Self {
            background: Rgb::BLACK,
            foreground: Rgb::new(0x00, 0x80, 0x00),
            accent: Rgb::new(0x37, 0x37, 0x37),
        }
    }

    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Day => Self::day(),
            DisplayMode::Night => Self::night(),
        }
    }
}

/// UI regions a palette colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Window,
    StatusBar,
    Toolbar,
    Menu,
}

impl Surface {
    pub const ALL: [Surface; 4] = [
        Surface::Window,
        Surface::StatusBar,
        Surface::Toolbar,
        Surface::Menu,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceColors {
    pub background: Rgb,
    pub foreground: Rgb,
}

/// Resolved colors for every surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfacePalette {
    pub window: SurfaceColors,
    pub status_bar: SurfaceColors,
    pub toolbar: SurfaceColors,
    pub menu: SurfaceColors,
}

impl SurfacePalette {
    pub fn from_palette(palette: Palette) -> Self {
        let plain = SurfaceColors {
            background: palette.background,
            foreground: palette.foreground,
        };
        let raised = SurfaceColors {
            background: palette.accent,
            foreground: palette.foreground,
        };
        Self {
            window: plain,
            status_bar: plain,
            toolbar: raised,
            menu: raised,
        }
    }

    pub fn for_mode(mode: DisplayMode) -> Self {
        Self::from_palette(Palette::for_mode(mode))
    }

    pub fn get(&self, surface: Surface) -> SurfaceColors {
        match surface {
            Surface::Window => self.window,
            Surface::StatusBar => self.status_bar,
            Surface::Toolbar => self.toolbar,
            Surface::Menu => self.menu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff8000".parse::<Rgb>().unwrap(), Rgb::new(255, 128, 0));
        assert_eq!("0a0b0c".parse::<Rgb>().unwrap(), Rgb::new(10, 11, 12));
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert!("#ééé".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_signs_are_not_hex_digits() {
        assert!("#+f+f+f".parse::<Rgb>().is_err());
        assert!("+ff".parse::<Rgb>().is_err());
        assert!("#-10000".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    }

    #[test]
    fn test_modes_differ_on_every_surface() {
        let day = SurfacePalette::for_mode(DisplayMode::Day);
        let night = SurfacePalette::for_mode(DisplayMode::Night);
        for surface in Surface::ALL {
            assert_ne!(day.get(surface), night.get(surface), "{:?}", surface);
        }
    }
}
