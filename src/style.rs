//! Overlay appearance: colours, button styling and layout metrics.
//!
//! Everything here is plain serde data so it can live in the config file.

use serde::{Deserialize, Serialize};

/// An RGBA colour that survives a JSON round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Rgba = Rgba::rgb(211, 211, 211);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Opaque colour from a `0xRRGGBB` literal
    pub const fn hex(value: u32) -> Self {
        Rgba::rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }
}

#[cfg(feature = "sdl")]
impl From<Rgba> for sdl2::pixels::Color {
    fn from(c: Rgba) -> Self {
        sdl2::pixels::Color::RGBA(c.r, c.g, c.b, c.a)
    }
}

/// Look of a single button in one highlight state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyle {
    pub fill: Rgba,
    pub border: Rgba,
    pub border_width: u32,
    pub text: Rgba,
}

/// Sizes and spacing of the vertical button stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Inner padding of the stack container
    pub padding: u32,
    /// Vertical gap between stacked children
    pub spacing: u32,
    pub button_width: u32,
    pub button_height: u32,
    /// Height of the title line
    pub title_size: u32,
    /// Height of the final-score line
    pub score_size: u32,
    /// Gap between title and score line
    pub title_spacing: u32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        LayoutMetrics {
            padding: 40,
            spacing: 15,
            button_width: 200,
            button_height: 50,
            title_size: 32,
            score_size: 18,
            title_spacing: 10,
        }
    }
}

/// Full overlay style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuStyle {
    /// Full-screen translucent panel behind the menu
    pub background: Rgba,
    pub title_color: Rgba,
    pub score_color: Rgba,
    pub button: ButtonStyle,
    pub selected_button: ButtonStyle,
    pub layout: LayoutMetrics,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            background: Rgba::rgba(0, 0, 0, 204), // 80% black
            title_color: Rgba::WHITE,
            score_color: Rgba::LIGHT_GRAY,
            button: ButtonStyle {
                fill: Rgba::hex(0x16213e),
                border: Rgba::hex(0x3bb78f),
                border_width: 2,
                text: Rgba::WHITE,
            },
            selected_button: ButtonStyle {
                fill: Rgba::hex(0x3bb78f),
                border: Rgba::hex(0x0abab5),
                border_width: 3,
                text: Rgba::WHITE,
            },
            layout: LayoutMetrics::default(),
        }
    }
}

impl MenuStyle {
    /// Picks the button style for a highlight state
    pub fn button_style(&self, highlighted: bool) -> &ButtonStyle {
        if highlighted {
            &self.selected_button
        } else {
            &self.button
        }
    }
}
