//! Recording mock bus shared by the integration tests.
//!
//! Every line change, byte, block and delay is appended to one shared log,
//! then decoded back into commands, windows and pixel payloads.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use lumen_hal::{DisplayBus, Level, Line};
use lumen_st7735::command::cmd;
use lumen_st7735::St7735;

/// One observable bus action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Line(Line, Level),
    Byte(u8),
    Block { data: Vec<u8>, repeat: u16 },
    Delay(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Instant-completion bus that records everything
#[derive(Clone, Default)]
pub struct MockBus {
    log: Log,
    /// Fail once this many bytes have been accepted
    fail_after: Option<usize>,
    sent: Rc<RefCell<usize>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(bytes: usize) -> Self {
        Self {
            fail_after: Some(bytes),
            ..Self::default()
        }
    }

    pub fn log(&self) -> Log {
        self.log.clone()
    }

    fn accept(&self, bytes: usize) -> Result<(), MockError> {
        let mut sent = self.sent.borrow_mut();
        if let Some(limit) = self.fail_after {
            if *sent + bytes > limit {
                return Err(MockError);
            }
        }
        *sent += bytes;
        Ok(())
    }
}

impl DisplayBus for MockBus {
    type Error = MockError;

    fn set_line(&mut self, line: Line, level: Level) -> Result<(), MockError> {
        self.log.borrow_mut().push(Event::Line(line, level));
        Ok(())
    }

    fn send_byte(&mut self, value: u8) -> Result<(), MockError> {
        self.accept(1)?;
        self.log.borrow_mut().push(Event::Byte(value));
        Ok(())
    }

    fn send_block(&mut self, data: &[u8], repeat: u16) -> Result<(), MockError> {
        self.accept(data.len() * repeat as usize)?;
        self.log.borrow_mut().push(Event::Block {
            data: data.to_vec(),
            repeat,
        });
        Ok(())
    }
}

/// Delay that returns at once and logs the requested milliseconds
pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: Log) -> Self {
        Self { log }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}

/// Driver for the default module plus a handle on its log
pub fn make_driver() -> (St7735<MockBus>, Log) {
    let bus = MockBus::new();
    let log = bus.log();
    (St7735::st7735_160x80(bus), log)
}

pub fn clear(log: &Log) {
    log.borrow_mut().clear();
}

/// A command and every data byte that followed it, blocks expanded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub code: u8,
    pub data: Vec<u8>,
}

/// Split the log into commands by tracking the D/C line
pub fn commands(log: &Log) -> Vec<Command> {
    let mut out: Vec<Command> = Vec::new();
    let mut data_mode = false;

    for event in log.borrow().iter() {
        match event {
            Event::Line(Line::DataCommand, level) => data_mode = *level == Level::High,
            Event::Byte(b) if !data_mode => out.push(Command {
                code: *b,
                data: Vec::new(),
            }),
            Event::Byte(b) => out
                .last_mut()
                .expect("data byte before any command")
                .data
                .push(*b),
            Event::Block { data, repeat } => {
                assert!(data_mode, "block sent in command mode");
                let last = out.last_mut().expect("data block before any command");
                for _ in 0..*repeat {
                    last.data.extend_from_slice(data);
                }
            }
            _ => {}
        }
    }
    out
}

/// Every raw block transfer in order
pub fn blocks(log: &Log) -> Vec<(Vec<u8>, u16)> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Block { data, repeat } => Some((data.clone(), *repeat)),
            _ => None,
        })
        .collect()
}

/// Controller window (x0, y0, x1, y1) set before a RAM write
pub type Span = (u16, u16, u16, u16);

/// One addressing window and the pixel bytes streamed into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RamWrite {
    pub window: Span,
    pub pixels: Vec<u8>,
}

fn pair(data: &[u8]) -> (u16, u16) {
    assert_eq!(data.len(), 4, "address set takes two 16-bit values");
    (
        u16::from_be_bytes([data[0], data[1]]),
        u16::from_be_bytes([data[2], data[3]]),
    )
}

/// Decode CASET/RASET/RAMWR triples
pub fn ram_writes(log: &Log) -> Vec<RamWrite> {
    let cmds = commands(log);
    let mut out = Vec::new();
    let mut i = 0;
    while i < cmds.len() {
        if cmds[i].code == cmd::CASET {
            assert_eq!(cmds[i + 1].code, cmd::RASET);
            assert_eq!(cmds[i + 2].code, cmd::RAMWR);
            let (x0, x1) = pair(&cmds[i].data);
            let (y0, y1) = pair(&cmds[i + 1].data);
            out.push(RamWrite {
                window: (x0, y0, x1, y1),
                pixels: cmds[i + 2].data.clone(),
            });
            i += 3;
        } else {
            i += 1;
        }
    }
    out
}

/// Split a payload into big-endian colors
pub fn colors(pixels: &[u8]) -> Vec<u16> {
    assert_eq!(pixels.len() % 2, 0);
    pixels
        .chunks_exact(2)
        .map(|p| u16::from_be_bytes([p[0], p[1]]))
        .collect()
}

/// Chip-select levels in order
pub fn chip_selects(log: &Log) -> Vec<Level> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Line(Line::ChipSelect, level) => Some(*level),
            _ => None,
        })
        .collect()
}

/// Top-left of each single-pixel window, shifted back to panel coordinates
pub fn plotted_points(log: &Log) -> Vec<(u16, u16)> {
    ram_writes(log)
        .iter()
        .map(|w| {
            let (x0, y0, x1, y1) = w.window;
            assert_eq!((x0, y0), (x1, y1), "expected single-pixel windows");
            (x0 - X_OFFSET, y0 - Y_OFFSET)
        })
        .collect()
}

pub const X_OFFSET: u16 = 1;
pub const Y_OFFSET: u16 = 26;
