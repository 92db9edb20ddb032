//! Menu Overlay
//!
//! The selection state machine behind the pause, game-over and settings
//! screens. It owns a visual root (anything implementing [`OverlayRoot`]),
//! fills it from the menu builder, and keeps exactly one button highlighted
//! while shown. Keyboard navigation and mouse hover move the same cursor.

use super::menu::{ButtonAction, MenuCommand, MenuTitle, MenuVariant};
use super::scene::SceneRoot;
use crate::input_system::MenuInput;
use log::{debug, trace};

/// A button as the overlay sees it
pub trait ButtonWidget {
    fn set_label(&mut self, label: &str);
    fn set_highlighted(&mut self, highlighted: bool);
    fn is_highlighted(&self) -> bool;
}

/// The toolkit-side container the overlay draws into
///
/// Buttons are addressed by their position in the container, which is also
/// their navigation order.
pub trait OverlayRoot {
    type Button: ButtonWidget;

    /// Removes the title and every button
    fn clear(&mut self);

    fn set_title(&mut self, title: &MenuTitle);

    /// Appends an empty button and returns its index
    fn push_button(&mut self) -> usize;

    fn button_mut(&mut self, index: usize) -> Option<&mut Self::Button>;

    fn set_visible(&mut self, visible: bool);

    fn bring_to_front(&mut self) {}

    fn request_focus(&mut self) {}

    /// Hit-test a screen position, `None` if no button is there
    fn button_at(&self, _x: i32, _y: i32) -> Option<usize> {
        None
    }
}

/// Receives the commands fired by menu buttons
///
/// Any `FnMut(MenuCommand)` closure is a callback, which is usually the
/// simplest way to push commands into the game loop.
pub trait MenuCallback {
    fn on_resume(&mut self);
    fn on_restart(&mut self);
    fn on_settings(&mut self);
    fn on_main_menu(&mut self);
    fn on_exit(&mut self);
}

impl<F: FnMut(MenuCommand)> MenuCallback for F {
    fn on_resume(&mut self) {
        self(MenuCommand::Resume)
    }

    fn on_restart(&mut self) {
        self(MenuCommand::Restart)
    }

    fn on_settings(&mut self) {
        self(MenuCommand::Settings)
    }

    fn on_main_menu(&mut self) {
        self(MenuCommand::MainMenu)
    }

    fn on_exit(&mut self) {
        self(MenuCommand::Exit)
    }
}

fn dispatch(callback: &mut dyn MenuCallback, command: MenuCommand) {
    match command {
        MenuCommand::Resume => callback.on_resume(),
        MenuCommand::Restart => callback.on_restart(),
        MenuCommand::Settings => callback.on_settings(),
        MenuCommand::MainMenu => callback.on_main_menu(),
        MenuCommand::Exit => callback.on_exit(),
    }
}

/// Keyboard navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy)]
struct ButtonEntry {
    label: &'static str,
    action: ButtonAction,
}

/// In-game menu overlay
///
/// # Example
///
/// ```
/// use menu_overlay::gui::{MenuCommand, MenuOverlay};
/// use menu_overlay::input_system::MenuInput;
///
/// let mut overlay = MenuOverlay::default();
/// overlay.show_pause_menu(|command: MenuCommand| println!("{:?}", command));
///
/// overlay.handle_input(MenuInput::Down);
/// assert_eq!(overlay.selected_index(), 1);
/// ```
pub struct MenuOverlay<R: OverlayRoot = SceneRoot> {
    root: R,
    entries: Vec<ButtonEntry>,
    selected_index: usize,
    visible: bool,
    variant: Option<MenuVariant>,
    callback: Option<Box<dyn MenuCallback>>,
}

impl<R: OverlayRoot> MenuOverlay<R> {
    /// Wraps a visual root; the overlay starts hidden
    pub fn new(mut root: R) -> Self {
        root.set_visible(false);
        MenuOverlay {
            root,
            entries: Vec::new(),
            selected_index: 0,
            visible: false,
            variant: None,
            callback: None,
        }
    }

    pub fn show_pause_menu(&mut self, callback: impl MenuCallback + 'static) {
        self.show(MenuVariant::Pause, callback, None);
    }

    pub fn show_game_over_menu(&mut self, callback: impl MenuCallback + 'static, final_score: i64) {
        self.show(MenuVariant::GameOver, callback, Some(final_score));
    }

    pub fn show_settings_menu(&mut self, callback: impl MenuCallback + 'static) {
        self.show(MenuVariant::Settings, callback, None);
    }

    /// Replaces whatever is shown with `variant` and selects the first button
    pub fn show(
        &mut self,
        variant: MenuVariant,
        callback: impl MenuCallback + 'static,
        final_score: Option<i64>,
    ) {
        self.root.clear();
        self.entries.clear();
        self.selected_index = 0;

        self.root.set_title(&variant.title(final_score));

        for &action in variant.buttons() {
            let index = self.root.push_button();
            if let Some(button) = self.root.button_mut(index) {
                button.set_label(action.label());
                button.set_highlighted(false);
            }
            self.entries.push(ButtonEntry {
                label: action.label(),
                action,
            });
        }

        self.set_highlight(0, true);

        self.callback = Some(Box::new(callback));
        self.variant = Some(variant);
        self.visible = true;
        self.root.set_visible(true);
        self.root.bring_to_front();
        self.root.request_focus();

        debug!("Showing {:?} menu ({} buttons)", variant, self.entries.len());
    }

    /// Hides the overlay and forgets the current buttons
    pub fn hide(&mut self) {
        if self.visible {
            debug!("Hiding {:?} menu", self.variant);
        }
        self.visible = false;
        self.root.set_visible(false);
        self.root.clear();
        self.entries.clear();
        self.selected_index = 0;
        self.variant = None;
        self.callback = None;
    }

    /// Feeds one translated input event to the overlay
    ///
    /// Returns `true` if the overlay consumed it. Nothing is consumed while
    /// hidden; pointer events that miss every button fall through.
    pub fn handle_input(&mut self, input: MenuInput) -> bool {
        if !self.visible || self.entries.is_empty() {
            return false;
        }

        match input {
            MenuInput::Up => self.navigate(NavDirection::Up),
            MenuInput::Down => self.navigate(NavDirection::Down),
            MenuInput::Activate => {
                self.activate();
            }
            MenuInput::Escape => {
                self.escape();
            }
            MenuInput::PointerMoved { x, y } => match self.root.button_at(x, y) {
                Some(index) => self.hover(index),
                None => return false,
            },
            MenuInput::PointerPressed { x, y } => match self.root.button_at(x, y) {
                Some(index) => {
                    self.hover(index);
                    self.activate();
                }
                None => return false,
            },
        }

        true
    }

    /// Moves the highlight one step, wrapping at both ends
    pub fn navigate(&mut self, direction: NavDirection) {
        if !self.visible || self.entries.is_empty() {
            return;
        }

        let count = self.entries.len();
        let next = match direction {
            NavDirection::Up => (self.selected_index + count - 1) % count,
            NavDirection::Down => (self.selected_index + 1) % count,
        };
        trace!("Menu selection {} -> {}", self.selected_index, next);
        self.select(next);
    }

    /// Moves the highlight to the button under the pointer
    pub fn hover(&mut self, index: usize) {
        if !self.visible || index >= self.entries.len() {
            return;
        }
        self.select(index);
    }

    /// Fires the highlighted button, returning the action that ran
    pub fn activate(&mut self) -> Option<ButtonAction> {
        if !self.visible {
            return None;
        }
        let action = self.entries.get(self.selected_index)?.action;
        self.fire(action);
        Some(action)
    }

    /// Fires "Resume" if the menu has one, otherwise the first button
    pub fn escape(&mut self) -> Option<ButtonAction> {
        if !self.visible {
            return None;
        }
        let entry = self
            .entries
            .iter()
            .find(|e| e.label == ButtonAction::Resume.label())
            .or_else(|| self.entries.first())?;
        let action = entry.action;
        self.fire(action);
        Some(action)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_action(&self) -> Option<ButtonAction> {
        self.entries.get(self.selected_index).map(|e| e.action)
    }

    /// Variant currently shown, `None` while hidden
    pub fn variant(&self) -> Option<MenuVariant> {
        self.variant
    }

    /// Labels of the current buttons in navigation order
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.label).collect()
    }

    /// Visual root, for embedding into the host scene
    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut R {
        &mut self.root
    }

    fn select(&mut self, index: usize) {
        self.set_highlight(self.selected_index, false);
        self.selected_index = index;
        self.set_highlight(index, true);
    }

    fn set_highlight(&mut self, index: usize, highlighted: bool) {
        if let Some(button) = self.root.button_mut(index) {
            button.set_highlighted(highlighted);
        }
    }

    fn fire(&mut self, action: ButtonAction) {
        debug!("Menu button '{}' activated", action.label());

        // Hiding drops the callback, so hold on to it for this dispatch
        let mut callback = self.callback.take();
        if action.hides_overlay() {
            self.hide();
        }

        match (action.command(), callback.as_mut()) {
            (Some(command), Some(callback)) => dispatch(&mut **callback, command),
            (Some(_), None) => {}
            (None, _) => debug!("'{}' has no handler", action.label()),
        }

        // Restore unless hidden, or unless the session was replaced meanwhile
        if self.visible && self.callback.is_none() {
            self.callback = callback;
        }
    }
}

impl Default for MenuOverlay<SceneRoot> {
    fn default() -> Self {
        MenuOverlay::new(SceneRoot::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Collects every command the overlay forwards
    fn recorder() -> (Rc<RefCell<Vec<MenuCommand>>>, impl FnMut(MenuCommand) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |command: MenuCommand| sink.borrow_mut().push(command))
    }

    fn highlighted(overlay: &MenuOverlay) -> Vec<usize> {
        overlay
            .root()
            .buttons()
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_highlighted())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_overlay_starts_hidden() {
        let overlay = MenuOverlay::default();
        assert!(!overlay.is_visible());
        assert!(overlay.labels().is_empty());
        assert_eq!(overlay.variant(), None);
    }

    #[test]
    fn test_show_pause_menu() {
        let mut overlay = MenuOverlay::default();
        let (_, callback) = recorder();
        overlay.show_pause_menu(callback);

        assert!(overlay.is_visible());
        assert!(overlay.root().is_visible());
        assert!(overlay.root().is_focused());
        assert!(overlay.root().is_raised());
        assert_eq!(overlay.variant(), Some(MenuVariant::Pause));
        assert_eq!(overlay.labels(), vec!["Resume", "Settings", "Restart", "Main Menu"]);
        assert_eq!(overlay.root().title().unwrap().heading, "PAUSED");
        assert_eq!(highlighted(&overlay), vec![0]);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut overlay = MenuOverlay::default();
        let (_, callback) = recorder();
        overlay.show_pause_menu(callback);

        overlay.navigate(NavDirection::Up);
        assert_eq!(overlay.selected_index(), 3);
        assert_eq!(highlighted(&overlay), vec![3]);

        overlay.navigate(NavDirection::Down);
        assert_eq!(overlay.selected_index(), 0);
        assert_eq!(highlighted(&overlay), vec![0]);
    }

    #[test]
    fn test_selection_stays_in_range() {
        let mut overlay = MenuOverlay::default();
        let (_, callback) = recorder();
        overlay.show_game_over_menu(callback, 0);

        let moves = [
            NavDirection::Down,
            NavDirection::Down,
            NavDirection::Down,
            NavDirection::Down,
            NavDirection::Up,
            NavDirection::Up,
            NavDirection::Up,
            NavDirection::Up,
            NavDirection::Up,
        ];
        let mut expected = 0usize;
        for direction in moves {
            overlay.navigate(direction);
            expected = match direction {
                NavDirection::Down => (expected + 1) % 3,
                NavDirection::Up => (expected + 2) % 3,
            };
            assert_eq!(overlay.selected_index(), expected);
            assert_eq!(highlighted(&overlay), vec![expected]);
        }
    }

    #[test]
    fn test_activate_resume_hides_and_calls_back() {
        let mut overlay = MenuOverlay::default();
        let (log, callback) = recorder();
        overlay.show_pause_menu(callback);

        assert_eq!(overlay.activate(), Some(ButtonAction::Resume));
        assert!(!overlay.is_visible());
        assert!(!overlay.root().is_visible());
        assert_eq!(*log.borrow(), vec![MenuCommand::Resume]);
    }

    #[test]
    fn test_settings_button_keeps_overlay_visible() {
        let mut overlay = MenuOverlay::default();
        let (log, callback) = recorder();
        overlay.show_pause_menu(callback);

        overlay.navigate(NavDirection::Down);
        assert_eq!(overlay.activate(), Some(ButtonAction::Settings));
        assert!(overlay.is_visible());
        assert_eq!(*log.borrow(), vec![MenuCommand::Settings]);
    }

    #[test]
    fn test_exit_button_keeps_overlay_visible() {
        let mut overlay = MenuOverlay::default();
        let (log, callback) = recorder();
        overlay.show_game_over_menu(callback, 10);

        overlay.navigate(NavDirection::Up);
        assert_eq!(overlay.activate(), Some(ButtonAction::Exit));
        assert!(overlay.is_visible());
        assert_eq!(*log.borrow(), vec![MenuCommand::Exit]);
    }

    #[test]
    fn test_escape_prefers_resume() {
        let mut overlay = MenuOverlay::default();
        let (log, callback) = recorder();
        overlay.show_pause_menu(callback);

        overlay.navigate(NavDirection::Down);
        overlay.navigate(NavDirection::Down);
        assert_eq!(overlay.escape(), Some(ButtonAction::Resume));
        assert_eq!(*log.borrow(), vec![MenuCommand::Resume]);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_escape_without_resume_fires_first_button() {
        let mut overlay = MenuOverlay::default();
        let (log, callback) = recorder();
        overlay.show_game_over_menu(callback, 500);

        overlay.navigate(NavDirection::Down);
        assert_eq!(overlay.escape(), Some(ButtonAction::PlayAgain));
        assert_eq!(*log.borrow(), vec![MenuCommand::Restart]);
    }

    #[test]
    fn test_show_resets_selection() {
        let mut overlay = MenuOverlay::default();
        let (_, callback) = recorder();
        overlay.show_pause_menu(callback);
        overlay.navigate(NavDirection::Down);
        overlay.navigate(NavDirection::Down);
        assert_eq!(overlay.selected_index(), 2);

        let (_, callback) = recorder();
        overlay.show_settings_menu(callback);
        assert_eq!(overlay.selected_index(), 0);
        assert_eq!(highlighted(&overlay), vec![0]);
        assert_eq!(overlay.labels(), vec!["Color Scheme", "Controls", "Back"]);
    }

    #[test]
    fn test_hide_makes_input_a_no_op() {
        let mut overlay = MenuOverlay::default();
        let (log, callback) = recorder();
        overlay.show_pause_menu(callback);
        overlay.navigate(NavDirection::Down);
        overlay.hide();

        assert!(overlay.labels().is_empty());
        assert_eq!(overlay.selected_index(), 0);
        assert!(overlay.root().buttons().is_empty());

        overlay.navigate(NavDirection::Down);
        assert_eq!(overlay.selected_index(), 0);
        assert_eq!(overlay.activate(), None);
        assert_eq!(overlay.escape(), None);
        assert!(!overlay.handle_input(MenuInput::Activate));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_hide_releases_callback() {
        let mut overlay = MenuOverlay::default();
        let (log, callback) = recorder();
        overlay.show_pause_menu(callback);
        assert_eq!(Rc::strong_count(&log), 2);

        overlay.hide();
        assert_eq!(Rc::strong_count(&log), 1);
    }

    #[test]
    fn test_hiding_button_releases_callback_after_dispatch() {
        let mut overlay = MenuOverlay::default();
        let (log, callback) = recorder();
        overlay.show_pause_menu(callback);

        overlay.escape();
        assert_eq!(*log.borrow(), vec![MenuCommand::Resume]);
        assert_eq!(Rc::strong_count(&log), 1);
    }

    #[test]
    fn test_non_hiding_button_keeps_callback() {
        let mut overlay = MenuOverlay::default();
        let (log, callback) = recorder();
        overlay.show_pause_menu(callback);

        overlay.navigate(NavDirection::Down);
        overlay.activate();
        overlay.activate();
        assert_eq!(*log.borrow(), vec![MenuCommand::Settings, MenuCommand::Settings]);
        assert_eq!(Rc::strong_count(&log), 2);
    }

    #[test]
    fn test_placeholder_buttons_do_nothing() {
        let mut overlay = MenuOverlay::default();
        let (log, callback) = recorder();
        overlay.show_settings_menu(callback);

        assert_eq!(overlay.activate(), Some(ButtonAction::ColorScheme));
        overlay.navigate(NavDirection::Down);
        assert_eq!(overlay.activate(), Some(ButtonAction::Controls));
        assert!(overlay.is_visible());
        assert!(log.borrow().is_empty());

        overlay.navigate(NavDirection::Down);
        assert_eq!(overlay.activate(), Some(ButtonAction::Back));
        assert!(!overlay.is_visible());
        assert_eq!(*log.borrow(), vec![MenuCommand::Resume]);
    }

    #[test]
    fn test_game_over_score_title() {
        let mut overlay = MenuOverlay::default();
        let (_, callback) = recorder();
        overlay.show_game_over_menu(callback, 1_234_567);

        let title = overlay.root().title().unwrap();
        assert_eq!(title.heading, "GAME OVER");
        assert_eq!(title.subtitle.as_deref(), Some("Final Score: 1,234,567"));
    }

    #[test]
    fn test_hover_and_keyboard_share_cursor() {
        let mut overlay = MenuOverlay::default();
        let (_, callback) = recorder();
        overlay.show_pause_menu(callback);

        overlay.hover(2);
        assert_eq!(overlay.selected_index(), 2);
        assert_eq!(highlighted(&overlay), vec![2]);

        overlay.navigate(NavDirection::Down);
        assert_eq!(overlay.selected_index(), 3);
        assert_eq!(highlighted(&overlay), vec![3]);

        overlay.hover(42);
        assert_eq!(overlay.selected_index(), 3);
    }

    #[test]
    fn test_pointer_input_uses_layout() {
        let mut overlay = MenuOverlay::default();
        let (log, callback) = recorder();
        overlay.show_pause_menu(callback);

        let restart = overlay.root().layout().buttons[2];
        assert!(overlay.handle_input(MenuInput::PointerMoved {
            x: restart.x + 5,
            y: restart.y + 5,
        }));
        assert_eq!(overlay.selected_action(), Some(ButtonAction::Restart));

        assert!(!overlay.handle_input(MenuInput::PointerMoved { x: 0, y: 0 }));
        assert_eq!(overlay.selected_index(), 2);

        assert!(overlay.handle_input(MenuInput::PointerPressed {
            x: restart.x + 5,
            y: restart.y + 5,
        }));
        assert!(!overlay.is_visible());
        assert_eq!(*log.borrow(), vec![MenuCommand::Restart]);
    }

    #[test]
    fn test_keyboard_input_is_consumed() {
        let mut overlay = MenuOverlay::default();
        let (log, callback) = recorder();
        overlay.show_pause_menu(callback);

        assert!(overlay.handle_input(MenuInput::Down));
        assert!(overlay.handle_input(MenuInput::Down));
        assert!(overlay.handle_input(MenuInput::Activate));
        assert_eq!(*log.borrow(), vec![MenuCommand::Restart]);
    }

    struct Counters {
        resumed: u32,
        exited: u32,
    }

    struct GameHooks(Rc<RefCell<Counters>>);

    impl MenuCallback for GameHooks {
        fn on_resume(&mut self) {
            self.0.borrow_mut().resumed += 1;
        }
        fn on_restart(&mut self) {}
        fn on_settings(&mut self) {}
        fn on_main_menu(&mut self) {}
        fn on_exit(&mut self) {
            self.0.borrow_mut().exited += 1;
        }
    }

    #[test]
    fn test_trait_callback() {
        let counters = Rc::new(RefCell::new(Counters { resumed: 0, exited: 0 }));
        let mut overlay = MenuOverlay::default();

        overlay.show_game_over_menu(GameHooks(Rc::clone(&counters)), 3);
        overlay.navigate(NavDirection::Up);
        overlay.activate();
        assert_eq!(counters.borrow().exited, 1);

        overlay.show_pause_menu(GameHooks(Rc::clone(&counters)));
        overlay.escape();
        assert_eq!(counters.borrow().resumed, 1);
    }

    /// Minimal root that records nothing but highlight state
    #[derive(Default)]
    struct FlagRoot {
        flags: Vec<bool>,
        visible: bool,
    }

    impl ButtonWidget for bool {
        fn set_label(&mut self, _label: &str) {}
        fn set_highlighted(&mut self, highlighted: bool) {
            *self = highlighted;
        }
        fn is_highlighted(&self) -> bool {
            *self
        }
    }

    impl OverlayRoot for FlagRoot {
        type Button = bool;

        fn clear(&mut self) {
            self.flags.clear();
        }
        fn set_title(&mut self, _title: &MenuTitle) {}
        fn push_button(&mut self) -> usize {
            self.flags.push(false);
            self.flags.len() - 1
        }
        fn button_mut(&mut self, index: usize) -> Option<&mut bool> {
            self.flags.get_mut(index)
        }
        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    #[test]
    fn test_custom_root_without_hit_testing() {
        let mut overlay = MenuOverlay::new(FlagRoot::default());
        let (_, callback) = recorder();
        overlay.show_pause_menu(callback);

        assert!(overlay.root().visible);
        assert_eq!(overlay.root().flags, vec![true, false, false, false]);
        assert!(!overlay.handle_input(MenuInput::PointerMoved { x: 1, y: 1 }));

        overlay.handle_input(MenuInput::Up);
        assert_eq!(overlay.root().flags, vec![false, false, false, true]);

        overlay.root_mut().flags.clear();
        overlay.hover(1);
        assert_eq!(overlay.selected_index(), 1);
    }
}
