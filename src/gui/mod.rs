//! Screen-Space Menu Overlay
//!
//! The pause, game-over and settings screens drawn on top of gameplay.
//!
//! # Architecture
//!
//! - [`menu`]: pure builder, variant -> title + ordered button actions
//! - [`overlay`]: selection state machine and the toolkit capability traits
//! - [`scene`]: retained, backend-free visual root used by default
//! - [`layout`]: vertical stack placement and pointer hit-testing
//!
//! # Example Usage
//!
//! ```rust
//! use menu_overlay::gui::{MenuCommand, MenuOverlay};
//! use menu_overlay::input_system::MenuInput;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let commands = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&commands);
//!
//! let mut overlay = MenuOverlay::default();
//! overlay.show_pause_menu(move |command: MenuCommand| sink.borrow_mut().push(command));
//!
//! overlay.handle_input(MenuInput::Escape);
//! assert!(!overlay.is_visible());
//! assert_eq!(*commands.borrow(), vec![MenuCommand::Resume]);
//! ```

pub mod layout;
pub mod menu;
pub mod overlay;
pub mod scene;

pub use layout::{Bounds, OverlayLayout};
pub use menu::{format_thousands, ButtonAction, MenuCommand, MenuTitle, MenuVariant};
pub use overlay::{ButtonWidget, MenuCallback, MenuOverlay, NavDirection, OverlayRoot};
pub use scene::{SceneButton, SceneRoot};
