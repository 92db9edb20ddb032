//! Menu Builder
//!
//! Pure mapping from a menu variant (plus an optional final score) to the
//! title and the ordered button list the overlay shows. Nothing here touches
//! the visual root; [`super::overlay::MenuOverlay`] applies the result.

/// Which screen the overlay is populated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuVariant {
    Pause,
    GameOver,
    Settings,
}

/// High-level commands forwarded to the game when a button fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    Resume,
    Restart,
    Settings,
    MainMenu,
    Exit,
}

/// The effect bound to a single menu button
///
/// Each action has a fixed label, decides whether activating it hides the
/// overlay, and optionally forwards a [`MenuCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    Resume,
    Settings,
    Restart,
    MainMenu,
    PlayAgain,
    Exit,
    ColorScheme,
    Controls,
    Back,
}

impl ButtonAction {
    /// Text shown on the button
    pub fn label(&self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::Settings => "Settings",
            Self::Restart => "Restart",
            Self::MainMenu => "Main Menu",
            Self::PlayAgain => "Play Again",
            Self::Exit => "Exit",
            Self::ColorScheme => "Color Scheme",
            Self::Controls => "Controls",
            Self::Back => "Back",
        }
    }

    /// Whether the overlay is hidden before the command is forwarded
    ///
    /// `Settings` and `Exit` leave the overlay up: the game decides what to
    /// show next (usually the settings screen, or nothing because it quits).
    pub fn hides_overlay(&self) -> bool {
        match self {
            Self::Resume | Self::Restart | Self::MainMenu | Self::PlayAgain | Self::Back => true,
            Self::Settings | Self::Exit | Self::ColorScheme | Self::Controls => false,
        }
    }

    /// Command forwarded to the callback, `None` for placeholder buttons
    pub fn command(&self) -> Option<MenuCommand> {
        match self {
            Self::Resume | Self::Back => Some(MenuCommand::Resume),
            Self::Settings => Some(MenuCommand::Settings),
            Self::Restart | Self::PlayAgain => Some(MenuCommand::Restart),
            Self::MainMenu => Some(MenuCommand::MainMenu),
            Self::Exit => Some(MenuCommand::Exit),
            // Not wired up yet: colour schemes and rebinding live in the game
            Self::ColorScheme | Self::Controls => None,
        }
    }
}

/// Heading plus optional second line (final score on game over)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTitle {
    pub heading: String,
    pub subtitle: Option<String>,
}

impl MenuTitle {
    fn heading(text: &str) -> Self {
        MenuTitle {
            heading: text.to_string(),
            subtitle: None,
        }
    }
}

const PAUSE_BUTTONS: &[ButtonAction] = &[
    ButtonAction::Resume,
    ButtonAction::Settings,
    ButtonAction::Restart,
    ButtonAction::MainMenu,
];

const GAME_OVER_BUTTONS: &[ButtonAction] = &[
    ButtonAction::PlayAgain,
    ButtonAction::MainMenu,
    ButtonAction::Exit,
];

const SETTINGS_BUTTONS: &[ButtonAction] = &[
    ButtonAction::ColorScheme,
    ButtonAction::Controls,
    ButtonAction::Back,
];

impl MenuVariant {
    /// Title for this variant; the score is only used on game over
    pub fn title(&self, final_score: Option<i64>) -> MenuTitle {
        match self {
            MenuVariant::Pause => MenuTitle::heading("PAUSED"),
            MenuVariant::GameOver => MenuTitle {
                heading: "GAME OVER".to_string(),
                subtitle: final_score.map(|score| format!("Final Score: {}", format_thousands(score))),
            },
            MenuVariant::Settings => MenuTitle::heading("SETTINGS"),
        }
    }

    /// Buttons in display (and navigation) order
    pub fn buttons(&self) -> &'static [ButtonAction] {
        match self {
            MenuVariant::Pause => PAUSE_BUTTONS,
            MenuVariant::GameOver => GAME_OVER_BUTTONS,
            MenuVariant::Settings => SETTINGS_BUTTONS,
        }
    }
}

/// Formats an integer with comma thousands separators (`1234567` -> `1,234,567`)
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
