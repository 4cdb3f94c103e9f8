//! Command/data framing over the display bus
//!
//! The ST7735 distinguishes command bytes from parameter and pixel bytes by
//! the level of the D/C line: low for commands, high for data. Multi-byte
//! parameters go high byte first.

use lumen_hal::{DisplayBus, Level, Line};

use crate::command::cmd;
use crate::config::Window;

/// Framing layer between the driver and its bus
pub struct Interface<B> {
    bus: B,
}

impl<B: DisplayBus> Interface<B> {
    /// Wrap a bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    /// Drive the hardware reset line
    pub fn set_reset(&mut self, level: Level) -> Result<(), B::Error> {
        self.bus.set_line(Line::Reset, level)
    }

    /// Run `f` with chip select asserted
    ///
    /// Chip select is released even when `f` fails; the first error wins.
    pub fn transaction<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, B::Error>,
    ) -> Result<T, B::Error> {
        self.select()?;
        let result = f(self);
        let released = self.deselect();
        let value = result?;
        released?;
        Ok(value)
    }

    #[cfg(not(feature = "no-chip-select"))]
    fn select(&mut self) -> Result<(), B::Error> {
        self.bus.set_line(Line::ChipSelect, Level::Low)
    }

    #[cfg(not(feature = "no-chip-select"))]
    fn deselect(&mut self) -> Result<(), B::Error> {
        self.bus.set_line(Line::ChipSelect, Level::High)
    }

    #[cfg(feature = "no-chip-select")]
    fn select(&mut self) -> Result<(), B::Error> {
        Ok(())
    }

    #[cfg(feature = "no-chip-select")]
    fn deselect(&mut self) -> Result<(), B::Error> {
        Ok(())
    }

    /// Send a command byte
    pub fn command(&mut self, command: u8) -> Result<(), B::Error> {
        self.bus.set_line(Line::DataCommand, Level::Low)?;
        self.bus.send_byte(command)
    }

    /// Send one parameter byte
    pub fn data_u8(&mut self, value: u8) -> Result<(), B::Error> {
        self.bus.set_line(Line::DataCommand, Level::High)?;
        self.bus.send_byte(value)
    }

    /// Send a 16-bit parameter, high byte first
    pub fn data_u16(&mut self, value: u16) -> Result<(), B::Error> {
        let [hi, lo] = value.to_be_bytes();
        self.bus.set_line(Line::DataCommand, Level::High)?;
        self.bus.send_byte(hi)?;
        self.bus.send_byte(lo)
    }

    /// Stream `data` as data bytes, replayed `repeat` times
    pub fn data_block(&mut self, data: &[u8], repeat: u16) -> Result<(), B::Error> {
        self.bus.set_line(Line::DataCommand, Level::High)?;
        self.bus.send_block(data, repeat)
    }

    /// Set the addressing window and open a RAM write
    ///
    /// The next data stream lands inside `window`, left to right then top to
    /// bottom. Coordinates must already include the panel offsets.
    pub fn set_window(&mut self, window: Window) -> Result<(), B::Error> {
        self.command(cmd::CASET)?;
        self.data_u16(window.x0)?;
        self.data_u16(window.x1)?;
        self.command(cmd::RASET)?;
        self.data_u16(window.y0)?;
        self.data_u16(window.y1)?;
        self.command(cmd::RAMWR)
    }
}
