//! Driver errors

/// Geometry rejected before anything reaches the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// Width, height or run length of zero
    ZeroSize,
    /// A single row does not fit the scanline buffer
    RowTooWide {
        /// Bytes the row needs
        requested: usize,
        /// Bytes the buffer holds
        capacity: usize,
    },
    /// Region extends past the panel edge
    OutOfBounds,
    /// Bitmap slice length does not match `width * height * 2`
    BitmapLength {
        /// Bytes the window needs
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },
}

/// Driver error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Transport fault reported by the bus
    Bus(E),
    /// Invalid coordinates or dimensions
    Geometry(GeometryError),
}

impl<E> From<GeometryError> for Error<E> {
    fn from(e: GeometryError) -> Self {
        Error::Geometry(e)
    }
}

impl core::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GeometryError::ZeroSize => write!(f, "zero-sized region"),
            GeometryError::RowTooWide {
                requested,
                capacity,
            } => write!(
                f,
                "row of {} bytes exceeds {}-byte scanline buffer",
                requested, capacity
            ),
            GeometryError::OutOfBounds => write!(f, "region outside panel"),
            GeometryError::BitmapLength { expected, actual } => {
                write!(f, "bitmap has {} bytes, window needs {}", actual, expected)
            }
        }
    }
}
