//! In-game menu overlay: pause, game-over and settings screens with
//! keyboard and mouse navigation.
//!
//! The selection logic in [`gui`] is backend-free. Enable the `sdl` feature
//! for the SDL2 renderer and the demo binary.

pub mod config;
pub mod gui;
pub mod input_system;
pub mod style;
pub mod text;

#[cfg(feature = "sdl")]
pub mod render;

pub use config::{ConfigError, OverlayConfig};
pub use gui::{MenuCallback, MenuCommand, MenuOverlay, MenuVariant};
pub use input_system::{KeyBindings, MenuInput, MenuKey};
pub use style::MenuStyle;
