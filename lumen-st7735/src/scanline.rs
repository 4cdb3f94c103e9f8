//! Scanline buffer
//!
//! One row-sized scratch buffer serves every draw call. Solid fills write a
//! single row of pixels and let the bus replay it once per row, so a full
//! screen clear costs `width * 2` bytes of RAM instead of a framebuffer.
//!
//! A payload lives in the buffer only for the duration of one draw call:
//! it is built, streamed to completion, and then the next call overwrites it.

use crate::color::Rgb565;
use crate::error::GeometryError;

/// Bytes per RGB565 pixel
pub const BYTES_PER_PIXEL: usize = 2;

/// Fixed-capacity pixel scratch buffer
pub struct ScanlineBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> ScanlineBuffer<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Capacity in bytes
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Check that `pixels` pixels fit
    pub fn check_run(&self, pixels: usize) -> Result<(), GeometryError> {
        if pixels == 0 {
            return Err(GeometryError::ZeroSize);
        }
        let requested = pixels * BYTES_PER_PIXEL;
        if requested > self.capacity() {
            return Err(GeometryError::RowTooWide {
                requested,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// Fill with `run` copies of `color`
    pub fn fill_solid(&mut self, color: Rgb565, run: u16) -> Result<&[u8], GeometryError> {
        let run = run as usize;
        self.check_run(run)?;
        let [hi, lo] = color.to_be_bytes();
        for pair in self.bytes[..run * BYTES_PER_PIXEL].chunks_exact_mut(BYTES_PER_PIXEL) {
            pair[0] = hi;
            pair[1] = lo;
        }
        self.len = run * BYTES_PER_PIXEL;
        Ok(self.filled())
    }

    /// Fill with an arbitrary pixel sequence
    ///
    /// Fails without writing anything if the sequence does not fit.
    pub fn fill_pixels<I>(&mut self, pixels: I) -> Result<&[u8], GeometryError>
    where
        I: IntoIterator<Item = Rgb565>,
        I::IntoIter: ExactSizeIterator,
    {
        let pixels = pixels.into_iter();
        self.check_run(pixels.len())?;
        let mut len = 0;
        for color in pixels {
            let [hi, lo] = color.to_be_bytes();
            self.bytes[len] = hi;
            self.bytes[len + 1] = lo;
            len += BYTES_PER_PIXEL;
        }
        self.len = len;
        Ok(self.filled())
    }

    /// Bytes of the current payload
    pub fn filled(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}
