//! SDL2 drawing of the retained overlay scene
//!
//! Walks a [`SceneRoot`] and draws it with procedural primitives: the
//! translucent full-screen panel, the title block and the button column.
//! Positions come from the scene's layout so clicks and pixels agree.

use crate::gui::{Bounds, ButtonWidget, SceneRoot};
use crate::style::{ButtonStyle, MenuStyle};
use crate::text::{draw_text_centered, scale_for_height, text_width, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Draws the overlay if it is visible
pub fn render_overlay(
    canvas: &mut Canvas<Window>,
    scene: &SceneRoot,
    style: &MenuStyle,
) -> Result<(), String> {
    if !scene.is_visible() {
        return Ok(());
    }

    // Translucent panel bound to the full viewport
    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(Color::from(style.background));
    canvas.fill_rect(None)?;
    canvas.set_blend_mode(BlendMode::None);

    let layout = scene.layout();

    if let Some(title) = scene.title() {
        let scale = scale_for_height(layout.title.height);
        draw_text_centered(
            canvas,
            &title.heading,
            layout.title.center_x(),
            layout.title.y,
            Color::from(style.title_color),
            scale,
        )?;

        if let (Some(subtitle), Some(bounds)) = (&title.subtitle, layout.subtitle) {
            draw_text_centered(
                canvas,
                subtitle,
                bounds.center_x(),
                bounds.y,
                Color::from(style.score_color),
                scale_for_height(bounds.height),
            )?;
        }
    }

    for (button, bounds) in scene.buttons().iter().zip(&layout.buttons) {
        draw_button(
            canvas,
            button.label(),
            *bounds,
            style.button_style(button.is_highlighted()),
        )?;
    }

    Ok(())
}

fn draw_button(
    canvas: &mut Canvas<Window>,
    label: &str,
    bounds: Bounds,
    style: &ButtonStyle,
) -> Result<(), String> {
    let rect = Rect::new(bounds.x, bounds.y, bounds.width, bounds.height);

    canvas.set_draw_color(Color::from(style.fill));
    canvas.fill_rect(rect)?;

    // Nested outlines for thick borders
    canvas.set_draw_color(Color::from(style.border));
    for inset in 0..style.border_width.min(bounds.width / 2).min(bounds.height / 2) {
        canvas.draw_rect(Rect::new(
            bounds.x + inset as i32,
            bounds.y + inset as i32,
            bounds.width - 2 * inset,
            bounds.height - 2 * inset,
        ))?;
    }

    // Leave room for the border and some breathing space around the label
    let mut scale = scale_for_height(bounds.height / 3);
    while scale > 1 && text_width(label, scale) + 2 * style.border_width > bounds.width {
        scale -= 1;
    }
    let text_y = bounds.y + (bounds.height as i32 - (GLYPH_HEIGHT * scale) as i32) / 2;

    draw_text_centered(
        canvas,
        label,
        bounds.center_x(),
        text_y,
        Color::from(style.text),
        scale,
    )
}
