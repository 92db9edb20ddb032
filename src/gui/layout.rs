//! Vertical stack layout for the overlay
//!
//! Places the title block and the buttons in a single centred column, the
//! same way a vbox with fixed spacing and padding would. Used both for
//! drawing and for pointer hit-testing, so the two always agree.

use crate::style::LayoutMetrics;

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Bounds { x, y, width, height }
    }

    /// Half-open containment: right and bottom edges are outside
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.width as i32
            && (y - self.y) < self.height as i32
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width as i32 / 2
    }
}

/// Resolved positions of everything the overlay draws
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayout {
    pub title: Bounds,
    pub subtitle: Option<Bounds>,
    pub buttons: Vec<Bounds>,
}

impl OverlayLayout {
    /// Lay out a title block and `button_count` buttons inside `viewport`
    ///
    /// The column is centred vertically; if it is taller than the viewport it
    /// starts at the top padding instead.
    pub fn compute(
        viewport: (u32, u32),
        metrics: &LayoutMetrics,
        has_subtitle: bool,
        button_count: usize,
    ) -> Self {
        let (width, height) = viewport;

        let title_block = if has_subtitle {
            metrics.title_size + metrics.title_spacing + metrics.score_size
        } else {
            metrics.title_size
        };
        let buttons_block = if button_count == 0 {
            0
        } else {
            button_count as u32 * metrics.button_height
                + (button_count as u32 - 1) * metrics.spacing
        };
        let gap = if button_count == 0 { 0 } else { metrics.spacing };
        let content_height = title_block + gap + buttons_block;

        let top = (if content_height + 2 * metrics.padding > height {
            metrics.padding
        } else {
            (height - content_height) / 2
        }) as i32;

        let inner_width = width.saturating_sub(2 * metrics.padding);
        let title = Bounds::new(metrics.padding as i32, top, inner_width, metrics.title_size);
        let subtitle = has_subtitle.then(|| {
            Bounds::new(
                metrics.padding as i32,
                top + (metrics.title_size + metrics.title_spacing) as i32,
                inner_width,
                metrics.score_size,
            )
        });

        let button_x = (width as i32 - metrics.button_width as i32) / 2;
        let first_button_y = top + (title_block + gap) as i32;
        let stride = (metrics.button_height + metrics.spacing) as i32;
        let buttons = (0..button_count)
            .map(|i| {
                Bounds::new(
                    button_x,
                    first_button_y + i as i32 * stride,
                    metrics.button_width,
                    metrics.button_height,
                )
            })
            .collect();

        OverlayLayout {
            title,
            subtitle,
            buttons,
        }
    }

    /// Index of the button under the given point
    pub fn button_at(&self, x: i32, y: i32) -> Option<usize> {
        self.buttons.iter().position(|b| b.contains(x, y))
    }
}
