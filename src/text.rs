//! Bitmap Text
//!
//! Procedural 3x5 pixel font for menu labels and scores. Glyph lookup and
//! measuring are backend-free; drawing needs the `sdl` feature.

/// Glyph height in font pixels
pub const GLYPH_HEIGHT: u32 = 5;

/// Horizontal advance per character in font pixels (3 wide + 1 gap)
pub const GLYPH_ADVANCE: u32 = 4;

/// Row bitmaps for a character, top row first, bit 2 = leftmost column
///
/// Lowercase letters render as uppercase. Unknown characters render as `?`.
pub fn glyph(c: char) -> [u8; 5] {
    match c.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b110, 0b001, 0b010, 0b100, 0b111],
        '3' => [0b110, 0b001, 0b010, 0b001, 0b110],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b110, 0b001, 0b110],
        '6' => [0b011, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b110],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        ' ' => [0b000; 5],
        _ => [0b111, 0b001, 0b010, 0b000, 0b010],
    }
}

/// Width in screen pixels of `text` drawn at `scale`
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    (chars * GLYPH_ADVANCE - 1) * scale
}

/// Largest scale whose glyphs fit in `height` pixels (at least 1)
pub fn scale_for_height(height: u32) -> u32 {
    (height / GLYPH_HEIGHT).max(1)
}

#[cfg(feature = "sdl")]
pub use self::sdl::{draw_text, draw_text_centered};

#[cfg(feature = "sdl")]
mod sdl {
    use super::{glyph, text_width, GLYPH_ADVANCE};
    use sdl2::pixels::Color;
    use sdl2::rect::Rect;
    use sdl2::render::Canvas;
    use sdl2::video::Window;

    /// Draws `text` with its top-left corner at (`x`, `y`)
    pub fn draw_text(
        canvas: &mut Canvas<Window>,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String> {
        canvas.set_draw_color(color);
        let step = scale as i32;

        for (i, c) in text.chars().enumerate() {
            let origin_x = x + (i as u32 * GLYPH_ADVANCE * scale) as i32;

            for (row, bits) in glyph(c).iter().enumerate() {
                for col in 0..3 {
                    if *bits & (0b100u8 >> col) != 0 {
                        canvas.fill_rect(Rect::new(
                            origin_x + col * step,
                            y + row as i32 * step,
                            scale,
                            scale,
                        ))?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Draws `text` horizontally centred on `center_x`
    pub fn draw_text_centered(
        canvas: &mut Canvas<Window>,
        text: &str,
        center_x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String> {
        let x = center_x - text_width(text, scale) as i32 / 2;
        draw_text(canvas, text, x, y, color, scale)
    }
}
