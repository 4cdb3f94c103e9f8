//! Text rendering helpers
//!
//! Glyph expansion to pixel runs and fixed-width decimal formatting. The
//! driver-facing `print*` operations live on [`crate::Driver`].

use heapless::String;

use crate::color::Rgb565;
use crate::font::{Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Horizontal cursor advance per character: glyph plus one spacing column
pub const CHAR_ADVANCE: u16 = GLYPH_WIDTH as u16 + 1;

/// Width of the field `print_number` renders into
pub const NUMBER_FIELD_WIDTH: usize = 11;

/// Pixels of one glyph cell in row-major order
///
/// Set bits take the foreground color, clear bits the background, so the
/// whole 5x7 cell is painted.
#[derive(Debug, Clone)]
pub struct GlyphPixels {
    glyph: Glyph,
    fg: Rgb565,
    bg: Rgb565,
    index: usize,
}

impl GlyphPixels {
    /// Expand `glyph` with the given colors
    pub fn new(glyph: Glyph, fg: Rgb565, bg: Rgb565) -> Self {
        Self {
            glyph,
            fg,
            bg,
            index: 0,
        }
    }
}

impl Iterator for GlyphPixels {
    type Item = Rgb565;

    fn next(&mut self) -> Option<Rgb565> {
        if self.index >= GLYPH_WIDTH * GLYPH_HEIGHT {
            return None;
        }
        let row = self.index / GLYPH_WIDTH;
        let column = self.index % GLYPH_WIDTH;
        self.index += 1;

        if self.glyph[column] & (1 << row) != 0 {
            Some(self.fg)
        } else {
            Some(self.bg)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = GLYPH_WIDTH * GLYPH_HEIGHT - self.index.min(GLYPH_WIDTH * GLYPH_HEIGHT);
        (n, Some(n))
    }
}

impl ExactSizeIterator for GlyphPixels {}

/// Format `value` right-justified in an 11-character field
///
/// Negative values carry a leading `-`; the field is padded with spaces on
/// the left. Every `i32`, including `i32::MIN`, fits exactly.
pub fn format_number(value: i32) -> String<NUMBER_FIELD_WIDTH> {
    let mut field = [b' '; NUMBER_FIELD_WIDTH];
    let mut pos = NUMBER_FIELD_WIDTH;
    let mut magnitude = value.unsigned_abs();

    // Least significant digit first, filling from the right
    loop {
        pos -= 1;
        field[pos] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }

    if value < 0 {
        pos -= 1;
        field[pos] = b'-';
    }

    // Spaces, '-' and ASCII digits: always valid UTF-8 and exactly
    // NUMBER_FIELD_WIDTH bytes, so neither conversion can fail
    core::str::from_utf8(&field)
        .ok()
        .and_then(|s| String::try_from(s).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Font5x7, GlyphSource};

    #[test]
    fn test_format_zero() {
        assert_eq!(format_number(0).as_str(), "          0");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_number(-5).as_str(), "         -5");
    }

    #[test]
    fn test_format_positive() {
        assert_eq!(format_number(1234).as_str(), "       1234");
    }

    #[test]
    fn test_format_extremes() {
        assert_eq!(format_number(i32::MAX).as_str(), " 2147483647");
        assert_eq!(format_number(i32::MIN).as_str(), "-2147483648");
    }

    #[test]
    fn test_format_width_is_fixed() {
        for v in [0, 7, -7, 10, -100, 99_999, -1_000_000_000] {
            assert_eq!(format_number(v).len(), NUMBER_FIELD_WIDTH);
        }
    }

    #[test]
    fn test_glyph_pixel_count() {
        let pixels = GlyphPixels::new([0; 5], Rgb565::BLACK, Rgb565::WHITE);
        assert_eq!(pixels.len(), 35);
        assert!(pixels.clone().all(|c| c == Rgb565::WHITE));
    }

    #[test]
    fn test_glyph_row_major_order() {
        // Column 0 fully set, everything else clear
        let glyph = [0x7F, 0x00, 0x00, 0x00, 0x00];
        let pixels: heapless::Vec<Rgb565, 35> =
            GlyphPixels::new(glyph, Rgb565::RED, Rgb565::BLUE).collect();

        for (i, color) in pixels.iter().enumerate() {
            if i % GLYPH_WIDTH == 0 {
                assert_eq!(*color, Rgb565::RED);
            } else {
                assert_eq!(*color, Rgb565::BLUE);
            }
        }
    }

    #[test]
    fn test_glyph_top_row_is_bit_zero() {
        // Bit 0 of each column lights the top row only
        let glyph = [0x01; 5];
        let pixels: heapless::Vec<Rgb565, 35> =
            GlyphPixels::new(glyph, Rgb565::WHITE, Rgb565::BLACK).collect();
        assert!(pixels[..5].iter().all(|&c| c == Rgb565::WHITE));
        assert!(pixels[5..].iter().all(|&c| c == Rgb565::BLACK));
    }

    #[test]
    fn test_minus_glyph() {
        // '-' is a bar across row 3
        let pixels: heapless::Vec<Rgb565, 35> =
            GlyphPixels::new(Font5x7.glyph('-'), Rgb565::WHITE, Rgb565::BLACK).collect();
        for (i, color) in pixels.iter().enumerate() {
            let expected = if i / GLYPH_WIDTH == 3 {
                Rgb565::WHITE
            } else {
                Rgb565::BLACK
            };
            assert_eq!(*color, expected);
        }
    }
}
