//! ST7735 RGB565 display driver
//!
//! Blocking driver for ST7735-based color TFT modules on a synchronous
//! serial bus. Built for parts with a few kilobytes of RAM: no heap, no
//! framebuffer, one row-sized scratch buffer.
//!
//! # Streaming model
//!
//! The controller keeps an addressing window; the driver sets it, issues a
//! RAM write and streams pixels into it. Solid fills put one row of pixels
//! in the scanline buffer and ask the bus to replay it once per row, so
//! filling the whole panel costs `2 * width` bytes of RAM.
//!
//! ```text
//!  caller ──► Driver ──► ScanlineBuffer (build payload)
//!               │
//!               ▼
//!           Interface ── CASET / RASET / RAMWR ──► DisplayBus
//!               │                                     ▲
//!               └──────── payload × repeat ───────────┘
//! ```
//!
//! # Features
//!
//! - `defmt` - `defmt::Format` on public types and bring-up logging
//! - `no-chip-select` - never toggle CS (bus dedicated to the display)

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod font;
pub mod interface;
pub mod raster;
pub mod scanline;
pub mod text;

// Re-export key types at crate root for convenience
pub use color::Rgb565;
pub use config::{Geometry, Window, ROW_BYTES};
pub use driver::{Driver, St7735};
pub use error::{Error, GeometryError};
pub use font::{Font5x7, Glyph, GlyphSource};
pub use text::format_number;
