//! Lumen Draw Test Firmware
//!
//! Brings up a 0.96" 160x80 ST7735 module on an STM32F042K6 and cycles
//! through the draw-test screens.
//!
//! # Wiring
//!
//! | STM32F042K6     | ST7735    | Description                   |
//! | --------------- | --------- | ----------------------------- |
//! | PB0             | RESET     | Hardware reset (active low)   |
//! | PB1             | DC / RS   | Data (high) / command (low)   |
//! | PA4             | CS        | Chip select (active low)      |
//! | PA5 (SPI1 SCK)  | SCL       | Serial clock                  |
//! | PA7 (SPI1 MOSI) | SDA       | Serial data out               |
//! | 3V3             | VDD, LEDA | Supply and backlight          |

#![no_std]
#![no_main]

mod drawtest;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::spi::{self, Spi};
use embassy_stm32::time::Hertz;
use embassy_time::Delay;
use lumen_hal::spi::{BitOrder, Phase, Polarity};
use lumen_hal::{SpiConfig, SpiDisplayBus};
use lumen_st7735::St7735;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Lumen draw test starting...");

    let p = embassy_stm32::init(Default::default());

    // SPI1, transmit only
    let spi_config = spi_config(SpiConfig::st7735());
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PA5, p.PA7, spi_config);

    let rst = Output::new(p.PB0, Level::High, Speed::Low);
    let dc = Output::new(p.PB1, Level::Low, Speed::VeryHigh);
    let cs = Output::new(p.PA4, Level::High, Speed::VeryHigh);

    let bus = SpiDisplayBus::new(spi, dc, rst, cs);
    let mut display = St7735::st7735_160x80(bus);

    if let Err(e) = display.init(&mut Delay) {
        error!("Failed to initialize display: {:?}", e);
        return;
    }
    info!("Display initialized");

    let mut frame: u32 = 0;
    loop {
        if let Err(e) = drawtest::run(&mut display, frame).await {
            warn!("Draw test frame {} failed: {:?}", frame, e);
        }
        frame = frame.wrapping_add(1);
    }
}

/// Translate the display's bus settings into the STM32 SPI config
fn spi_config(bus: SpiConfig) -> spi::Config {
    let (polarity, phase): (Polarity, Phase) = bus.mode.into();

    let mut config = spi::Config::default();
    config.frequency = Hertz(bus.frequency);
    config.mode = spi::Mode {
        polarity: match polarity {
            Polarity::IdleLow => spi::Polarity::IdleLow,
            Polarity::IdleHigh => spi::Polarity::IdleHigh,
        },
        phase: match phase {
            Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
            Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
        },
    };
    config.bit_order = match bus.bit_order {
        BitOrder::MsbFirst => spi::BitOrder::MsbFirst,
        BitOrder::LsbFirst => spi::BitOrder::LsbFirst,
    };
    config
}
