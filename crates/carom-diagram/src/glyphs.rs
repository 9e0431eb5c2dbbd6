//! Stroke-segment digit glyphs for marker labels.
//!
//! Labels on a table diagram are numeric, so a seven-segment stroke font
//! tessellated through the vector layer covers them without any font
//! asset. Each digit is drawn as line segments in a 0.6 x 1.0 cell scaled
//! by the requested size; characters without a glyph are skipped but the
//! cursor still advances, preserving spacing.

use glam::Vec2;

use crate::vector::{Color, VectorBuffer};

/// Glyph cell width as a fraction of the glyph size (cap height).
pub const GLYPH_WIDTH: f32 = 0.6;
/// Horizontal advance per character as a fraction of the glyph size.
pub const GLYPH_ADVANCE: f32 = 0.85;
/// Stroke width as a fraction of the glyph size.
const STROKE_WIDTH: f32 = 0.12;

// Segment bits: A top, B upper-right, C lower-right, D bottom,
// E lower-left, F upper-left, G middle.
const SEG_A: u8 = 1 << 0;
const SEG_B: u8 = 1 << 1;
const SEG_C: u8 = 1 << 2;
const SEG_D: u8 = 1 << 3;
const SEG_E: u8 = 1 << 4;
const SEG_F: u8 = 1 << 5;
const SEG_G: u8 = 1 << 6;

/// Segment endpoints in the unit glyph cell, y-up.
const SEGMENTS: [([f32; 2], [f32; 2]); 7] = [
    ([0.0, 1.0], [GLYPH_WIDTH, 1.0]),        // A
    ([GLYPH_WIDTH, 1.0], [GLYPH_WIDTH, 0.5]), // B
    ([GLYPH_WIDTH, 0.5], [GLYPH_WIDTH, 0.0]), // C
    ([0.0, 0.0], [GLYPH_WIDTH, 0.0]),        // D
    ([0.0, 0.5], [0.0, 0.0]),                // E
    ([0.0, 1.0], [0.0, 0.5]),                // F
    ([0.0, 0.5], [GLYPH_WIDTH, 0.5]),        // G
];

/// Segment mask for a digit, `None` for characters without a glyph.
fn digit_segments(c: char) -> Option<u8> {
    match c {
        '0' => Some(SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F),
        '1' => Some(SEG_B | SEG_C),
        '2' => Some(SEG_A | SEG_B | SEG_G | SEG_E | SEG_D),
        '3' => Some(SEG_A | SEG_B | SEG_G | SEG_C | SEG_D),
        '4' => Some(SEG_F | SEG_G | SEG_B | SEG_C),
        '5' => Some(SEG_A | SEG_F | SEG_G | SEG_C | SEG_D),
        '6' => Some(SEG_A | SEG_F | SEG_G | SEG_E | SEG_C | SEG_D),
        '7' => Some(SEG_A | SEG_B | SEG_C),
        '8' => Some(SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G),
        '9' => Some(SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G),
        _ => None,
    }
}

/// Rendered width of `text` at the given glyph size.
pub fn measure(text: &str, size: f32) -> f32 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    ((n - 1) as f32 * GLYPH_ADVANCE + GLYPH_WIDTH) * size
}

/// Tessellate `text` into the buffer.
///
/// `origin` is the bottom-left corner of the first glyph cell; `size` is
/// the cap height in world units.
pub fn draw_text(buf: &mut VectorBuffer, text: &str, origin: Vec2, size: f32, color: Color) {
    let stroke = size * STROKE_WIDTH;
    let mut cursor_x = origin.x;

    for c in text.chars() {
        if let Some(mask) = digit_segments(c) {
            for (bit, (a, b)) in SEGMENTS.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    let p0 = Vec2::new(cursor_x + a[0] * size, origin.y + a[1] * size);
                    let p1 = Vec2::new(cursor_x + b[0] * size, origin.y + b[1] * size);
                    buf.stroke_polyline(&[p0, p1], stroke, color);
                }
            }
        }
        // Always advance, even for skipped chars, to preserve spacing
        cursor_x += size * GLYPH_ADVANCE;
    }
}
