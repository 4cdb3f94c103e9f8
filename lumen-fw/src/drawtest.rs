//! Draw test screens
//!
//! Exercises every drawing primitive in turn: solid fills, outlines, line
//! fans, text, numbers and a bitmap blit.

use embassy_time::Timer;
use lumen_hal::DisplayBus;
use lumen_st7735::{Error, Rgb565, St7735};

const WIDTH: u16 = 160;
const HEIGHT: u16 = 80;

/// Pause between screens
const SCREEN_MS: u64 = 1500;

const PALETTE: [Rgb565; 8] = [
    Rgb565::RED,
    Rgb565::ORANGE,
    Rgb565::YELLOW,
    Rgb565::GREEN,
    Rgb565::CYAN,
    Rgb565::BLUE,
    Rgb565::MAGENTA,
    Rgb565::WHITE,
];

/// Bitmap tile edge in pixels
const TILE: u16 = 16;

/// Run one pass over every screen
pub async fn run<B: DisplayBus>(
    display: &mut St7735<B>,
    frame: u32,
) -> Result<(), Error<B::Error>> {
    color_bars(display)?;
    Timer::after_millis(SCREEN_MS).await;

    nested_rects(display)?;
    Timer::after_millis(SCREEN_MS).await;

    line_fan(display, PALETTE[frame as usize % PALETTE.len()])?;
    Timer::after_millis(SCREEN_MS).await;

    text(display, frame)?;
    Timer::after_millis(SCREEN_MS).await;

    tiles(display)?;
    Timer::after_millis(SCREEN_MS).await;

    Ok(())
}

fn color_bars<B: DisplayBus>(display: &mut St7735<B>) -> Result<(), Error<B::Error>> {
    let bar = WIDTH / PALETTE.len() as u16;
    for (i, color) in PALETTE.iter().enumerate() {
        display.fill_rect(i as u16 * bar, 0, bar, HEIGHT, *color)?;
    }
    Ok(())
}

fn nested_rects<B: DisplayBus>(display: &mut St7735<B>) -> Result<(), Error<B::Error>> {
    display.fill_rect(0, 0, WIDTH, HEIGHT, Rgb565::BLACK)?;
    let mut inset = 0;
    let mut i = 0;
    while inset * 2 < HEIGHT {
        let color = PALETTE[i % PALETTE.len()];
        display.draw_rect(inset, inset, WIDTH - inset * 2, HEIGHT - inset * 2, color)?;
        inset += 4;
        i += 1;
    }
    Ok(())
}

fn line_fan<B: DisplayBus>(display: &mut St7735<B>, color: Rgb565) -> Result<(), Error<B::Error>> {
    display.fill_rect(0, 0, WIDTH, HEIGHT, Rgb565::BLACK)?;
    for x in (0..WIDTH).step_by(10) {
        display.draw_line(0, 0, x, HEIGHT - 1, color)?;
        display.draw_line(WIDTH - 1, 0, x, HEIGHT - 1, color)?;
    }
    for y in (0..HEIGHT).step_by(10) {
        display.draw_line(0, y, WIDTH - 1, y, Rgb565::DARK_GRAY)?;
    }
    Ok(())
}

fn text<B: DisplayBus>(display: &mut St7735<B>, frame: u32) -> Result<(), Error<B::Error>> {
    display.fill_rect(0, 0, WIDTH, HEIGHT, Rgb565::WHITE)?;

    display.set_color(Rgb565::BLACK);
    display.set_background_color(Rgb565::WHITE);
    display.set_cursor(4, 4);
    display.print("Lumen ST7735")?;

    display.set_color(Rgb565::BLUE);
    display.set_cursor(4, 16);
    display.print("frame")?;
    display.set_cursor(4, 28);
    display.print_number(frame as i32)?;

    display.set_color(Rgb565::RED);
    display.set_cursor(4, 40);
    display.print_number((frame as i32).wrapping_neg())?;

    display.set_color(Rgb565::WHITE);
    display.set_background_color(Rgb565::DARK_GREEN);
    display.set_cursor(4, 60);
    display.print(" !\"#$%&'()*+,-./0123")?;
    Ok(())
}

fn tiles<B: DisplayBus>(display: &mut St7735<B>) -> Result<(), Error<B::Error>> {
    let mut tile = [0u8; (TILE * TILE * 2) as usize];
    for y in 0..TILE {
        for x in 0..TILE {
            let color = Rgb565::from_rgb((x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8);
            let i = ((y * TILE + x) * 2) as usize;
            tile[i..i + 2].copy_from_slice(&color.to_be_bytes());
        }
    }

    display.fill_rect(0, 0, WIDTH, HEIGHT, Rgb565::BLACK)?;
    for row in 0..HEIGHT / TILE {
        for col in 0..WIDTH / TILE {
            display.draw_bitmap(col * TILE, row * TILE, TILE, TILE, &tile)?;
        }
    }
    Ok(())
}
