//! Retained overlay scene
//!
//! [`SceneRoot`] is the default visual root for [`MenuOverlay`]: a small
//! retained tree (background panel, title block, button column) that a
//! renderer walks each frame. It knows nothing about any drawing backend.
//!
//! [`MenuOverlay`]: super::MenuOverlay

use super::layout::OverlayLayout;
use super::menu::MenuTitle;
use super::overlay::{ButtonWidget, OverlayRoot};
use crate::style::LayoutMetrics;

/// A button in the retained scene
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneButton {
    label: String,
    highlighted: bool,
}

impl SceneButton {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl ButtonWidget for SceneButton {
    fn set_label(&mut self, label: &str) {
        self.label.clear();
        self.label.push_str(label);
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// Retained overlay content sized to a viewport
#[derive(Debug, Clone)]
pub struct SceneRoot {
    viewport: (u32, u32),
    metrics: LayoutMetrics,
    visible: bool,
    focused: bool,
    raised: bool,
    title: Option<MenuTitle>,
    buttons: Vec<SceneButton>,
}

impl SceneRoot {
    /// Creates an empty, hidden scene filling `viewport`
    pub fn new(viewport: (u32, u32), metrics: LayoutMetrics) -> Self {
        SceneRoot {
            viewport,
            metrics,
            visible: false,
            focused: false,
            raised: false,
            title: None,
            buttons: Vec::new(),
        }
    }

    /// The background panel tracks the parent size, so resizing only
    /// changes the viewport
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the scene holds keyboard focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the scene should be drawn above everything else
    pub fn is_raised(&self) -> bool {
        self.raised
    }

    pub fn title(&self) -> Option<&MenuTitle> {
        self.title.as_ref()
    }

    pub fn buttons(&self) -> &[SceneButton] {
        &self.buttons
    }

    /// Current layout of title and buttons
    pub fn layout(&self) -> OverlayLayout {
        let has_subtitle = self
            .title
            .as_ref()
            .is_some_and(|t| t.subtitle.is_some());
        OverlayLayout::compute(self.viewport, &self.metrics, has_subtitle, self.buttons.len())
    }
}

impl Default for SceneRoot {
    fn default() -> Self {
        SceneRoot::new((640, 480), LayoutMetrics::default())
    }
}

impl OverlayRoot for SceneRoot {
    type Button = SceneButton;

    fn clear(&mut self) {
        self.title = None;
        self.buttons.clear();
    }

    fn set_title(&mut self, title: &MenuTitle) {
        self.title = Some(title.clone());
    }

    fn push_button(&mut self) -> usize {
        self.buttons.push(SceneButton::default());
        self.buttons.len() - 1
    }

    fn button_mut(&mut self, index: usize) -> Option<&mut SceneButton> {
        self.buttons.get_mut(index)
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.focused = false;
            self.raised = false;
        }
    }

    fn bring_to_front(&mut self) {
        self.raised = true;
    }

    fn request_focus(&mut self) {
        self.focused = true;
    }

    fn button_at(&self, x: i32, y: i32) -> Option<usize> {
        if !self.visible {
            return None;
        }
        self.layout().button_at(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_starts_hidden_and_empty() {
        let scene = SceneRoot::default();
        assert!(!scene.is_visible());
        assert!(scene.title().is_none());
        assert!(scene.buttons().is_empty());
        assert_eq!(scene.viewport(), (640, 480));
    }

    #[test]
    fn test_push_and_clear() {
        let mut scene = SceneRoot::default();
        scene.set_title(&MenuTitle {
            heading: "PAUSED".to_string(),
            subtitle: None,
        });
        let index = scene.push_button();
        scene.button_mut(index).unwrap().set_label("Resume");

        assert_eq!(index, 0);
        assert_eq!(scene.buttons()[0].label(), "Resume");

        scene.clear();
        assert!(scene.buttons().is_empty());
        assert!(scene.title().is_none());
    }

    #[test]
    fn test_hidden_scene_has_no_hit_targets() {
        let mut scene = SceneRoot::default();
        scene.push_button();
        let target = scene.layout().buttons[0];

        assert_eq!(scene.button_at(target.x + 1, target.y + 1), None);
        scene.set_visible(true);
        assert_eq!(scene.button_at(target.x + 1, target.y + 1), Some(0));
    }

    #[test]
    fn test_hiding_drops_focus() {
        let mut scene = SceneRoot::default();
        scene.set_visible(true);
        scene.bring_to_front();
        scene.request_focus();
        assert!(scene.is_focused() && scene.is_raised());

        scene.set_visible(false);
        assert!(!scene.is_focused());
        assert!(!scene.is_raised());
    }
}
