//! Lumen Hardware Abstraction Layer
//!
//! This crate defines the narrow capability interface the display driver
//! needs from the platform. Chip-specific code (pin muxing, peripheral
//! clocks, DMA channels) lives behind it, so the same driver runs on real
//! silicon and against a host-side recording mock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmware (lumen-fw, application code)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-st7735 (protocol + rasterizer)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │  register /   │
//! │   adapter     │       │  DMA backends │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::DisplayBus`] - Blocking byte and repeated-block transmission
//!   plus control line toggling
//! - [`spi::SpiConfig`] - Bus parameters a platform applies at bring-up
//! - [`embedded::SpiDisplayBus`] - `DisplayBus` over `embedded-hal` 1.0

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod embedded;
pub mod spi;

// Re-export key types at crate root for convenience
pub use bus::{DisplayBus, Level, Line};
pub use embedded::{BusError, NoPin, SpiDisplayBus};
pub use spi::SpiConfig;
