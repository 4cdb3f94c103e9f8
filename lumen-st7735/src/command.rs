//! ST7735 wire protocol
//!
//! Command bytes, parameter values and timing minimums. These values are
//! fixed by the controller; changing any of them breaks compatibility with
//! the panel.

/// ST7735 command bytes
pub mod cmd {
    /// Sleep out
    pub const SLPOUT: u8 = 0x11;
    /// Normal display mode on
    pub const NORON: u8 = 0x13;
    /// Display inversion off
    pub const INVOFF: u8 = 0x20;
    /// Display inversion on
    pub const INVON: u8 = 0x21;
    /// Display on
    pub const DISPON: u8 = 0x29;
    /// Column address set
    pub const CASET: u8 = 0x2A;
    /// Row address set
    pub const RASET: u8 = 0x2B;
    /// Memory write
    pub const RAMWR: u8 = 0x2C;
    /// Memory read
    pub const RAMRD: u8 = 0x2E;
    /// Memory data access control (orientation, color order)
    pub const MADCTL: u8 = 0x36;
    /// Interface pixel format
    pub const COLMOD: u8 = 0x3A;
    /// Gamma adjustment, positive polarity
    pub const GMCTRP1: u8 = 0xE0;
    /// Gamma adjustment, negative polarity
    pub const GMCTRN1: u8 = 0xE1;
}

/// MADCTL flag bits
pub mod madctl {
    /// Horizontal refresh order
    pub const MH: u8 = 0x04;
    /// BGR color filter order
    pub const BGR: u8 = 0x08;
    /// Vertical refresh order
    pub const ML: u8 = 0x10;
    /// Row/column exchange
    pub const MV: u8 = 0x20;
    /// Column address order
    pub const MX: u8 = 0x40;
    /// Row address order
    pub const MY: u8 = 0x80;
    /// RGB color filter order
    pub const RGB: u8 = 0x00;
}

/// Panel orientation as a MADCTL byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Landscape, connector on the left
    Landscape,
    /// Portrait
    Portrait,
    /// Landscape rotated 180°
    LandscapeFlipped,
    /// Portrait rotated 180°
    PortraitFlipped,
}

impl Orientation {
    /// MADCTL parameter byte, always with BGR order
    pub const fn madctl(self) -> u8 {
        match self {
            Orientation::Landscape => madctl::MY | madctl::MV | madctl::BGR,
            Orientation::Portrait => madctl::BGR,
            Orientation::LandscapeFlipped => madctl::MX | madctl::MV | madctl::BGR,
            Orientation::PortraitFlipped => madctl::MX | madctl::MY | madctl::BGR,
        }
    }
}

/// Orientation configured at bring-up
pub const ORIENTATION: Orientation = Orientation::Landscape;

/// COLMOD parameter: 16 bits per pixel
pub const COLMOD_16BPP: u8 = 0x05;

/// Positive polarity gamma table
pub const GAMMA_POSITIVE: [u8; 16] = [
    0x09, 0x16, 0x09, 0x20, 0x21, 0x1B, 0x13, 0x19, 0x17, 0x15, 0x1E, 0x2B, 0x04, 0x05, 0x02, 0x0E,
];

/// Negative polarity gamma table
pub const GAMMA_NEGATIVE: [u8; 16] = [
    0x0B, 0x14, 0x08, 0x1E, 0x22, 0x1D, 0x18, 0x1E, 0x1B, 0x1A, 0x24, 0x2B, 0x06, 0x06, 0x02, 0x0F,
];

/// Reset pulse width and recovery time, ms
pub const RESET_DELAY_MS: u32 = 50;

/// Wait after sleep out before the next command, ms
pub const SLEEP_OUT_DELAY_MS: u32 = 120;

/// Settle time after display mode commands, ms
pub const SETTLE_DELAY_MS: u32 = 10;
