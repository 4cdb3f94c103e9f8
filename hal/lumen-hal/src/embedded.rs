//! `DisplayBus` over `embedded-hal` 1.0
//!
//! Any platform HAL that implements the `embedded-hal` blocking SPI bus and
//! digital output traits can drive the display through [`SpiDisplayBus`].
//! Block repeats are realised by writing the same slice again per pass;
//! DMA-capable backends with a circular mode can implement
//! [`DisplayBus`] directly instead.

use core::convert::Infallible;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};

use crate::bus::{DisplayBus, Level, Line};

/// Adapter errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// SPI peripheral reported a failure
    Spi(spi::ErrorKind),
    /// A control pin could not be driven
    Pin(digital::ErrorKind),
}

/// Placeholder for an unconnected control line
///
/// Use it for the chip-select slot when the bus is dedicated to the display
/// and CS is tied low on the board.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPin;

impl digital::ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Display bus built from an SPI bus and three output pins
pub struct SpiDisplayBus<SPI, DC, RST, CS = NoPin> {
    spi: SPI,
    dc: DC,
    rst: RST,
    cs: CS,
}

impl<SPI, DC, RST> SpiDisplayBus<SPI, DC, RST, NoPin>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a bus without a chip-select line
    pub fn without_cs(spi: SPI, dc: DC, rst: RST) -> Self {
        Self::new(spi, dc, rst, NoPin)
    }
}

impl<SPI, DC, RST, CS> SpiDisplayBus<SPI, DC, RST, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    CS: OutputPin,
{
    /// Create a new bus from its parts
    pub fn new(spi: SPI, dc: DC, rst: RST, cs: CS) -> Self {
        Self { spi, dc, rst, cs }
    }

    /// Release the underlying peripherals
    pub fn release(self) -> (SPI, DC, RST, CS) {
        (self.spi, self.dc, self.rst, self.cs)
    }

    fn write_and_flush(&mut self, data: &[u8]) -> Result<(), BusError> {
        self.spi.write(data).map_err(spi_error)?;
        self.spi.flush().map_err(spi_error)
    }
}

impl<SPI, DC, RST, CS> DisplayBus for SpiDisplayBus<SPI, DC, RST, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    CS: OutputPin,
{
    type Error = BusError;

    fn set_line(&mut self, line: Line, level: Level) -> Result<(), BusError> {
        match line {
            Line::Reset => drive(&mut self.rst, level),
            Line::DataCommand => drive(&mut self.dc, level),
            Line::ChipSelect => drive(&mut self.cs, level),
        }
    }

    fn send_byte(&mut self, value: u8) -> Result<(), BusError> {
        self.write_and_flush(&[value])
    }

    fn send_block(&mut self, data: &[u8], repeat: u16) -> Result<(), BusError> {
        for _ in 0..repeat {
            self.spi.write(data).map_err(spi_error)?;
        }
        self.spi.flush().map_err(spi_error)
    }
}

fn drive<P: OutputPin>(pin: &mut P, level: Level) -> Result<(), BusError> {
    let result = match level {
        Level::High => pin.set_high(),
        Level::Low => pin.set_low(),
    };
    result.map_err(|e| BusError::Pin(digital::Error::kind(&e)))
}

fn spi_error<E: spi::Error>(e: E) -> BusError {
    BusError::Spi(e.kind())
}
