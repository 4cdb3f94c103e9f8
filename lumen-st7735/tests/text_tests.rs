//! Integration tests for text rendering: glyph cells, cursor advance,
//! number fields and `core::fmt::Write`.

mod common;

use core::fmt::Write;

use common::*;
use lumen_st7735::font::{GLYPH_HEIGHT, GLYPH_WIDTH};
use lumen_st7735::{Error, Font5x7, GeometryError, GlyphSource, Rgb565};

/// Expected 70-byte payload for `c` in the given colors
fn glyph_payload(c: char, fg: Rgb565, bg: Rgb565) -> Vec<u8> {
    let glyph = Font5x7.glyph(c);
    let mut out = Vec::new();
    for row in 0..GLYPH_HEIGHT {
        for column in glyph.iter().take(GLYPH_WIDTH) {
            let color = if column & (1 << row) != 0 { fg } else { bg };
            out.extend_from_slice(&color.to_be_bytes());
        }
    }
    out
}

fn printed_text(writes: &[RamWrite], fg: Rgb565, bg: Rgb565) -> String {
    writes
        .iter()
        .map(|w| {
            (' '..='~')
                .find(|&c| glyph_payload(c, fg, bg) == w.pixels)
                .expect("payload matches no glyph")
        })
        .collect()
}

#[test]
fn print_char_window_at_cursor() {
    let (mut display, log) = make_driver();

    display.set_cursor(10, 20);
    display.print_char('A').unwrap();

    let writes = ram_writes(&log);
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].window, (11, 46, 15, 52));
    assert_eq!(writes[0].pixels.len(), 70);
}

#[test]
fn print_char_window_height_follows_vertical_cursor() {
    let (mut display, log) = make_driver();

    // A horizontal cursor far from the vertical one exposes which one
    // drives the row range
    display.set_cursor(30, 5);
    display.print_char('x').unwrap();

    let (_, y0, _, y1) = ram_writes(&log)[0].window;
    assert_eq!((y0, y1), (5 + Y_OFFSET, 5 + Y_OFFSET + 6));
}

#[test]
fn print_char_uses_current_colors() {
    let (mut display, log) = make_driver();

    display.set_color(Rgb565::YELLOW);
    display.set_background_color(Rgb565::NAVY);
    display.print_char('7').unwrap();

    let writes = ram_writes(&log);
    assert_eq!(
        writes[0].pixels,
        glyph_payload('7', Rgb565::YELLOW, Rgb565::NAVY)
    );
    assert_eq!(blocks(&log)[0].1, 1);
}

#[test]
fn default_colors_are_black_on_white() {
    let (display, _) = make_driver();
    assert_eq!(display.colors(), (Rgb565::BLACK, Rgb565::WHITE));
}

#[test]
fn print_char_does_not_move_cursor() {
    let (mut display, _) = make_driver();

    display.set_cursor(3, 4);
    display.print_char('Q').unwrap();

    assert_eq!(display.cursor(), (3, 4));
}

#[test]
fn print_advances_six_pixels_per_char() {
    let (mut display, log) = make_driver();

    display.set_cursor(0, 10);
    display.print("Hi!").unwrap();

    let writes = ram_writes(&log);
    let x_starts: Vec<u16> = writes.iter().map(|w| w.window.0 - X_OFFSET).collect();
    assert_eq!(x_starts, vec![0, 6, 12]);
    assert!(writes.iter().all(|w| w.window.1 == 10 + Y_OFFSET));
    assert_eq!(display.cursor(), (18, 10));
    assert_eq!(printed_text(&writes, Rgb565::BLACK, Rgb565::WHITE), "Hi!");
}

#[test]
fn print_has_no_newline_handling() {
    let (mut display, log) = make_driver();

    display.print("a\nb").unwrap();

    let writes = ram_writes(&log);
    assert_eq!(writes.len(), 3);
    // Same row, newline drawn as a blank cell
    assert!(writes.iter().all(|w| w.window.1 == Y_OFFSET));
    assert_eq!(
        writes[1].pixels,
        glyph_payload(' ', Rgb565::BLACK, Rgb565::WHITE)
    );
}

#[test]
fn print_stops_at_panel_edge() {
    let (mut display, log) = make_driver();

    display.set_cursor(150, 0);
    let result = display.print("abc");

    assert_eq!(result, Err(Error::Geometry(GeometryError::OutOfBounds)));
    // 'a' fits at 150..154, 'b' would need 156..160
    assert_eq!(ram_writes(&log).len(), 1);
}

#[test]
fn print_number_zero() {
    let (mut display, log) = make_driver();

    display.print_number(0).unwrap();

    let writes = ram_writes(&log);
    assert_eq!(writes.len(), 11);
    assert_eq!(
        printed_text(&writes, Rgb565::BLACK, Rgb565::WHITE),
        "          0"
    );
}

#[test]
fn print_number_negative() {
    let (mut display, log) = make_driver();

    display.print_number(-5).unwrap();

    let writes = ram_writes(&log);
    assert_eq!(
        printed_text(&writes, Rgb565::BLACK, Rgb565::WHITE),
        "         -5"
    );
    assert_eq!(display.cursor(), (66, 0));
}

#[test]
fn print_number_min() {
    let (mut display, log) = make_driver();

    display.print_number(i32::MIN).unwrap();

    assert_eq!(
        printed_text(&ram_writes(&log), Rgb565::BLACK, Rgb565::WHITE),
        "-2147483648"
    );
}

#[test]
fn fmt_write_renders_through_print() {
    let (mut display, log) = make_driver();

    write!(display, "T={}", 42).unwrap();

    assert_eq!(
        printed_text(&ram_writes(&log), Rgb565::BLACK, Rgb565::WHITE),
        "T=42"
    );
}

#[test]
fn fmt_write_reports_failure() {
    let (mut display, _) = make_driver();

    display.set_cursor(158, 0);
    assert!(write!(display, "x").is_err());
}
