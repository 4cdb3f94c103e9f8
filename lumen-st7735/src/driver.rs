//! ST7735 driver
//!
//! Owns the bus, the scanline buffer and the text state (cursor and colors).
//! Every draw call validates its geometry first, builds its payload in the
//! scanline buffer, then opens one chip-select transaction: addressing
//! window, RAM write, pixel stream. Nothing is retained on the host side.

use embedded_hal::delay::DelayNs;
use lumen_hal::{DisplayBus, Level};

use crate::color::Rgb565;
use crate::command::{
    cmd, COLMOD_16BPP, GAMMA_NEGATIVE, GAMMA_POSITIVE, ORIENTATION, RESET_DELAY_MS,
    SETTLE_DELAY_MS, SLEEP_OUT_DELAY_MS,
};
use crate::config::{Geometry, Window, ROW_BYTES};
use crate::error::{Error, GeometryError};
use crate::font::{Font5x7, GlyphSource, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::interface::Interface;
use crate::raster::Segment;
use crate::scanline::{ScanlineBuffer, BYTES_PER_PIXEL};
use crate::text::{format_number, GlyphPixels, CHAR_ADVANCE};

/// Driver for the default 160x80 module with the built-in font
pub type St7735<B> = Driver<B, Font5x7, { ROW_BYTES }>;

/// ST7735 driver
///
/// `N` is the scanline buffer capacity in bytes and must hold at least one
/// full panel row (`2 * width`).
pub struct Driver<B, F, const N: usize> {
    interface: Interface<B>,
    scanline: ScanlineBuffer<N>,
    geometry: Geometry,
    font: F,
    cursor_x: u16,
    cursor_y: u16,
    color: Rgb565,
    bg_color: Rgb565,
}

impl<B: DisplayBus> Driver<B, Font5x7, { ROW_BYTES }> {
    /// Driver for the 0.96" 160x80 module
    pub fn st7735_160x80(bus: B) -> Self {
        Self::with_parts(bus, Geometry::ST7735_160X80, Font5x7)
    }
}

impl<B, F, const N: usize> Driver<B, F, N>
where
    B: DisplayBus,
    F: GlyphSource,
{
    /// Create a driver for a custom panel
    ///
    /// Fails if the panel is empty, its offsets push it past the controller's
    /// 16-bit address range, or the scanline buffer cannot hold one row.
    pub fn new(bus: B, geometry: Geometry, font: F) -> Result<Self, GeometryError> {
        geometry.validate()?;
        if geometry.row_bytes() > N {
            return Err(GeometryError::RowTooWide {
                requested: geometry.row_bytes(),
                capacity: N,
            });
        }
        Ok(Self::with_parts(bus, geometry, font))
    }

    fn with_parts(bus: B, geometry: Geometry, font: F) -> Self {
        Self {
            interface: Interface::new(bus),
            scanline: ScanlineBuffer::new(),
            geometry,
            font,
            cursor_x: 0,
            cursor_y: 0,
            color: Rgb565::BLACK,
            bg_color: Rgb565::WHITE,
        }
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.interface.release()
    }

    /// Panel geometry
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Text cursor in panel coordinates
    pub fn cursor(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    /// Text (foreground, background) colors
    pub fn colors(&self) -> (Rgb565, Rgb565) {
        (self.color, self.bg_color)
    }

    /// Run the power-up sequence
    ///
    /// Pulses reset, wakes the controller, sets landscape BGR orientation,
    /// 16-bit color, both gamma tables, inversion and display on. The byte
    /// sequence depends only on fixed constants, so running it again
    /// reproduces it exactly.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("st7735: hardware reset");

        self.interface.set_reset(Level::Low).map_err(Error::Bus)?;
        delay.delay_ms(RESET_DELAY_MS);
        self.interface.set_reset(Level::High).map_err(Error::Bus)?;
        delay.delay_ms(RESET_DELAY_MS);

        self.interface
            .transaction(|iface| {
                iface.command(cmd::SLPOUT)?;
                delay.delay_ms(SLEEP_OUT_DELAY_MS);

                iface.command(cmd::MADCTL)?;
                iface.data_u8(ORIENTATION.madctl())?;

                iface.command(cmd::COLMOD)?;
                iface.data_u8(COLMOD_16BPP)?;

                iface.command(cmd::GMCTRP1)?;
                iface.data_block(&GAMMA_POSITIVE, 1)?;
                iface.command(cmd::GMCTRN1)?;
                iface.data_block(&GAMMA_NEGATIVE, 1)?;

                for command in [cmd::INVON, cmd::NORON, cmd::DISPON] {
                    iface.command(command)?;
                    delay.delay_ms(SETTLE_DELAY_MS);
                }
                Ok(())
            })
            .map_err(Error::Bus)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("st7735: display on");

        Ok(())
    }

    /// Turn color inversion on or off
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<B::Error>> {
        let command = if inverted { cmd::INVON } else { cmd::INVOFF };
        self.interface
            .transaction(|iface| iface.command(command))
            .map_err(Error::Bus)
    }

    /// Move the text cursor
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Set the text foreground color
    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    /// Set the text background color
    pub fn set_background_color(&mut self, color: Rgb565) {
        self.bg_color = color;
    }

    /// Draw a single pixel
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), Error<B::Error>> {
        let window = self.geometry.window(x, y, 1, 1).map_err(reject)?;
        self.fill_window(window, color)
    }

    /// Fill a rectangle
    ///
    /// One row of `width` pixels is built once and replayed `height` times.
    pub fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Rgb565,
    ) -> Result<(), Error<B::Error>> {
        let window = self.geometry.window(x, y, width, height).map_err(reject)?;
        self.fill_window(window, color)
    }

    /// Horizontal line of `width` pixels starting at (x, y)
    pub fn fast_h_line(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        color: Rgb565,
    ) -> Result<(), Error<B::Error>> {
        let window = self.geometry.window(x, y, width, 1).map_err(reject)?;
        self.stream_run(window, width, color)
    }

    /// Vertical line of `height` pixels starting at (x, y)
    pub fn fast_v_line(
        &mut self,
        x: u16,
        y: u16,
        height: u16,
        color: Rgb565,
    ) -> Result<(), Error<B::Error>> {
        let window = self.geometry.window(x, y, 1, height).map_err(reject)?;
        self.stream_run(window, height, color)
    }

    /// Rectangle outline, one pixel wide
    pub fn draw_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Rgb565,
    ) -> Result<(), Error<B::Error>> {
        // Reject up front so a bad outline never leaves a partial border
        self.geometry.window(x, y, width, height).map_err(reject)?;
        self.scanline.check_run(width as usize).map_err(reject)?;
        self.scanline.check_run(height as usize).map_err(reject)?;

        self.fast_h_line(x, y, width, color)?;
        self.fast_h_line(x, y + height - 1, width, color)?;
        self.fast_v_line(x, y, height, color)?;
        self.fast_v_line(x + width - 1, y, height, color)
    }

    /// Line from (x0, y0) to (x1, y1), both ends inclusive
    ///
    /// Axis-aligned lines become one fast run; anything else is stepped with
    /// Bresenham and sent one pixel per transaction.
    pub fn draw_line(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: Rgb565,
    ) -> Result<(), Error<B::Error>> {
        if !self.geometry.contains(x0, y0) || !self.geometry.contains(x1, y1) {
            return Err(reject(GeometryError::OutOfBounds));
        }

        match Segment::classify(x0, y0, x1, y1) {
            Segment::Vertical { x, y, len } => self.fast_v_line(x, y, len, color),
            Segment::Horizontal { x, y, len } => self.fast_h_line(x, y, len, color),
            Segment::Sloped(points) => {
                for (x, y) in points {
                    self.draw_pixel(x, y, color)?;
                }
                Ok(())
            }
        }
    }

    /// Blit caller-owned RGB565 data (big-endian, row-major)
    ///
    /// `data` is streamed straight from the caller's memory and must hold
    /// exactly `width * height * 2` bytes.
    pub fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        data: &[u8],
    ) -> Result<(), Error<B::Error>> {
        let window = self.geometry.window(x, y, width, height).map_err(reject)?;
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(reject(GeometryError::BitmapLength {
                expected,
                actual: data.len(),
            }));
        }

        self.interface
            .transaction(|iface| {
                iface.set_window(window)?;
                iface.data_block(data, 1)
            })
            .map_err(Error::Bus)
    }

    /// Draw one character cell at the cursor
    ///
    /// The cursor does not move.
    pub fn print_char(&mut self, c: char) -> Result<(), Error<B::Error>> {
        let window = self
            .geometry
            .window(
                self.cursor_x,
                self.cursor_y,
                GLYPH_WIDTH as u16,
                GLYPH_HEIGHT as u16,
            )
            .map_err(reject)?;

        let glyph = self.font.glyph(c);
        let payload = self
            .scanline
            .fill_pixels(GlyphPixels::new(glyph, self.color, self.bg_color))
            .map_err(reject)?;

        self.interface
            .transaction(|iface| {
                iface.set_window(window)?;
                iface.data_block(payload, 1)
            })
            .map_err(Error::Bus)
    }

    /// Draw a string, advancing the cursor one cell per character
    ///
    /// No wrapping and no control characters: `'\n'` renders as a blank cell.
    pub fn print(&mut self, s: &str) -> Result<(), Error<B::Error>> {
        for c in s.chars() {
            self.print_char(c)?;
            self.cursor_x = self.cursor_x.wrapping_add(CHAR_ADVANCE);
        }
        Ok(())
    }

    /// Draw `value` right-justified in an 11-character field
    pub fn print_number(&mut self, value: i32) -> Result<(), Error<B::Error>> {
        let field = format_number(value);
        self.print(&field)
    }

    /// Fill a window with one color, a full row per pass
    fn fill_window(&mut self, window: Window, color: Rgb565) -> Result<(), Error<B::Error>> {
        let payload = self
            .scanline
            .fill_solid(color, window.width())
            .map_err(reject)?;
        let rows = window.height();

        self.interface
            .transaction(|iface| {
                iface.set_window(window)?;
                iface.data_block(payload, rows)
            })
            .map_err(Error::Bus)
    }

    /// Stream a single run of `len` pixels into a one-pixel-thick window
    fn stream_run(&mut self, window: Window, len: u16, color: Rgb565) -> Result<(), Error<B::Error>> {
        let payload = self.scanline.fill_solid(color, len).map_err(reject)?;

        self.interface
            .transaction(|iface| {
                iface.set_window(window)?;
                iface.data_block(payload, 1)
            })
            .map_err(Error::Bus)
    }
}

impl<B, F, const N: usize> core::fmt::Write for Driver<B, F, N>
where
    B: DisplayBus,
    F: GlyphSource,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.print(s).map_err(|_| core::fmt::Error)
    }
}

fn reject<E>(e: GeometryError) -> Error<E> {
    #[cfg(feature = "defmt")]
    defmt::warn!("st7735: rejected geometry: {}", e);

    Error::Geometry(e)
}
