//! Input translation for the menu overlay
//!
//! Raw toolkit input (key codes, pointer events) is mapped to [`MenuInput`]
//! before it reaches the overlay. This keeps the selection state machine free
//! of any toolkit types: the host only has to produce [`MenuKey`]s.

use serde::{Deserialize, Serialize};

/// Keys the overlay reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuKey {
    Up,
    Down,
    W,
    S,
    Enter,
    Space,
    Escape,
}

/// High-level inputs understood by the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Activate,
    Escape,
    /// Pointer moved to screen position (hover)
    PointerMoved { x: i32, y: i32 },
    /// Primary button pressed at screen position (click)
    PointerPressed { x: i32, y: i32 },
}

/// Which keys produce which menu input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: Vec<MenuKey>,
    pub down: Vec<MenuKey>,
    pub activate: Vec<MenuKey>,
    pub escape: Vec<MenuKey>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            up: vec![MenuKey::Up, MenuKey::W],
            down: vec![MenuKey::Down, MenuKey::S],
            activate: vec![MenuKey::Enter, MenuKey::Space],
            escape: vec![MenuKey::Escape],
        }
    }
}

impl KeyBindings {
    /// Map a key press to a menu input
    ///
    /// Bindings are checked in the order up, down, activate, escape, so a key
    /// bound twice resolves to the first match.
    pub fn translate(&self, key: MenuKey) -> Option<MenuInput> {
        if self.up.contains(&key) {
            Some(MenuInput::Up)
        } else if self.down.contains(&key) {
            Some(MenuInput::Down)
        } else if self.activate.contains(&key) {
            Some(MenuInput::Activate)
        } else if self.escape.contains(&key) {
            Some(MenuInput::Escape)
        } else {
            None
        }
    }
}

#[cfg(feature = "sdl")]
mod sdl {
    use super::{KeyBindings, MenuInput, MenuKey};
    use sdl2::event::Event;
    use sdl2::keyboard::Keycode;
    use sdl2::mouse::MouseButton;

    impl MenuKey {
        /// Map an SDL2 key code, `None` for keys the menu ignores
        pub fn from_keycode(key: Keycode) -> Option<Self> {
            match key {
                Keycode::Up => Some(MenuKey::Up),
                Keycode::Down => Some(MenuKey::Down),
                Keycode::W => Some(MenuKey::W),
                Keycode::S => Some(MenuKey::S),
                Keycode::Return | Keycode::KpEnter => Some(MenuKey::Enter),
                Keycode::Space => Some(MenuKey::Space),
                Keycode::Escape => Some(MenuKey::Escape),
                _ => None,
            }
        }
    }

    impl KeyBindings {
        /// Translate a polled SDL2 event into a menu input
        ///
        /// Handles key presses, mouse motion (hover) and left clicks.
        /// Everything else is left to the game. Held keys auto-repeat only
        /// for navigation, so holding Enter cannot fire a button twice.
        pub fn translate_event(&self, event: &Event) -> Option<MenuInput> {
            match event {
                Event::KeyDown {
                    keycode: Some(key),
                    repeat,
                    ..
                } => {
                    let input = MenuKey::from_keycode(*key).and_then(|k| self.translate(k))?;
                    match input {
                        MenuInput::Up | MenuInput::Down => Some(input),
                        _ if *repeat => None,
                        _ => Some(input),
                    }
                }
                Event::MouseMotion { x, y, .. } => Some(MenuInput::PointerMoved { x: *x, y: *y }),
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => Some(MenuInput::PointerPressed { x: *x, y: *y }),
                _ => None,
            }
        }
    }
}
