//! Panel geometry
//!
//! Public drawing coordinates are panel coordinates: (0, 0) is the top-left
//! visible pixel. The controller's RAM is larger than most glass it drives,
//! so every window is shifted by the module's fixed offsets before it goes
//! on the wire.

use crate::error::GeometryError;

/// Visible panel size and RAM offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
    /// Column of the first visible pixel in controller RAM
    pub x_offset: u16,
    /// Row of the first visible pixel in controller RAM
    pub y_offset: u16,
}

impl Geometry {
    /// 0.96" 160x80 module in landscape
    pub const ST7735_160X80: Self = Self {
        width: 160,
        height: 80,
        x_offset: 1,
        y_offset: 26,
    };

    /// Bytes needed for one full row of RGB565 pixels
    pub const fn row_bytes(&self) -> usize {
        self.width as usize * 2
    }

    /// Check the panel is non-empty and its offset extent fits 16-bit
    /// controller addresses
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.width == 0 || self.height == 0 {
            return Err(GeometryError::ZeroSize);
        }
        let address_space = u16::MAX as u32 + 1;
        if self.width as u32 + self.x_offset as u32 > address_space
            || self.height as u32 + self.y_offset as u32 > address_space
        {
            return Err(GeometryError::OutOfBounds);
        }
        Ok(())
    }

    /// Validate a rectangle and map it to a controller window
    pub fn window(&self, x: u16, y: u16, width: u16, height: u16) -> Result<Window, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroSize);
        }
        if x as u32 + width as u32 > self.width as u32
            || y as u32 + height as u32 > self.height as u32
        {
            return Err(GeometryError::OutOfBounds);
        }
        Ok(Window {
            x0: address(x as u32 + self.x_offset as u32)?,
            y0: address(y as u32 + self.y_offset as u32)?,
            x1: address(x as u32 + width as u32 - 1 + self.x_offset as u32)?,
            y1: address(y as u32 + height as u32 - 1 + self.y_offset as u32)?,
        })
    }

    /// Check a single point lies on the panel
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }
}

fn address(value: u32) -> Result<u16, GeometryError> {
    u16::try_from(value).map_err(|_| GeometryError::OutOfBounds)
}

impl Default for Geometry {
    fn default() -> Self {
        Self::ST7735_160X80
    }
}

/// Scanline buffer capacity for the default geometry
pub const ROW_BYTES: usize = Geometry::ST7735_160X80.row_bytes();

/// Addressing window in controller RAM coordinates, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Window {
    /// Columns covered
    pub const fn width(&self) -> u16 {
        self.x1 - self.x0 + 1
    }

    /// Rows covered
    pub const fn height(&self) -> u16 {
        self.y1 - self.y0 + 1
    }
}
