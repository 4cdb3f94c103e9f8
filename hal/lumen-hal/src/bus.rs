//! Display bus abstraction
//!
//! Provides the blocking transport a display controller driver needs: single
//! bytes for commands and short parameters, repeated block transfers for
//! pixel payloads, and the control lines around them.

/// Control line driven by the display driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Hardware reset (active low)
    Reset,
    /// Data/command select: high for data bytes, low for command bytes
    DataCommand,
    /// Chip select (active low)
    ChipSelect,
}

/// Logic level of a control line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Blocking display bus
///
/// Every method returns only once the hardware has confirmed completion.
/// Implementations that poll a status flag may bound the wait and report a
/// fault through `Self::Error` instead of spinning forever.
pub trait DisplayBus {
    /// Error type for bus operations
    type Error;

    /// Drive a control line to the given level
    fn set_line(&mut self, line: Line, level: Level) -> Result<(), Self::Error>;

    /// Shift out one byte, blocking until it has left the shift register
    fn send_byte(&mut self, value: u8) -> Result<(), Self::Error>;

    /// Transmit `data` `repeat` times back to back
    ///
    /// The same bytes are replayed on every pass; a `repeat` of zero sends
    /// nothing.
    fn send_block(&mut self, data: &[u8], repeat: u16) -> Result<(), Self::Error>;
}

impl<T: DisplayBus + ?Sized> DisplayBus for &mut T {
    type Error = T::Error;

    fn set_line(&mut self, line: Line, level: Level) -> Result<(), Self::Error> {
        T::set_line(self, line, level)
    }

    fn send_byte(&mut self, value: u8) -> Result<(), Self::Error> {
        T::send_byte(self, value)
    }

    fn send_block(&mut self, data: &[u8], repeat: u16) -> Result<(), Self::Error> {
        T::send_block(self, data, repeat)
    }
}
