//! Driver for the Microchip MCP7940M and MCP7940N I²C real-time clocks.
//!
//! Calendar values are exchanged as [`DateTime`] from the `calendar` crate;
//! the [`registers`] module holds the pure register encoding and the
//! [`Mcp7940`] driver performs the bus transactions.
#![deny(unsafe_code)]
#![no_std]

use core::marker::PhantomData;

pub use calendar::{DateTime, DateTimeSource, TimeSpan};
pub use rtcc::{DateTimeAccess, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// All possible errors in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// I²C bus error
    Comm,
    /// Invalid input data provided
    InvalidInputData,
    /// Internal device state is invalid.
    ///
    /// The oscillator did not react, the pin is owned by another function or
    /// a register holds a reserved value.
    InvalidDeviceState,
}

/// Square-wave output frequency on the multi-function pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqWFreq {
    /// 1 Hz
    _1Hz,
    /// 4.096 kHz
    _4_096kHz,
    /// 8.192 kHz
    _8_192kHz,
    /// 32.768 kHz, undivided crystal output
    _32_768kHz,
    /// 64 Hz, only available in coarse trim mode
    _64Hz,
}

impl SqWFreq {
    /// Nominal output frequency in hertz.
    pub const fn hertz(self) -> u32 {
        match self {
            SqWFreq::_1Hz => 1,
            SqWFreq::_4_096kHz => 4096,
            SqWFreq::_8_192kHz => 8192,
            SqWFreq::_32_768kHz => 32768,
            SqWFreq::_64Hz => 64,
        }
    }
}

/// What currently drives the multi-function pin (MFP)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MfpMode {
    /// General purpose output, driven low
    Low,
    /// General purpose output, driven high
    High,
    /// Alarm output, at least one alarm is enabled
    Alarm,
    /// Square-wave output
    SquareWave,
}

struct Register;

impl Register {
    const RTCSEC: u8 = 0x00;
    const RTCHOUR: u8 = 0x02;
    const RTCWKDAY: u8 = 0x03;
    const CONTROL: u8 = 0x07;
    const OSCTRIM: u8 = 0x08;
    const ALM0SEC: u8 = 0x0A;
    const ALM0WKDAY: u8 = 0x0D;
    const PWRDNMIN: u8 = 0x18;
    const PWRUPMIN: u8 = 0x1C;
    const SRAM: u8 = 0x20;
}

struct BitFlags;

impl BitFlags {
    const ST: u8 = 0b1000_0000;
    const H24_H12: u8 = 0b0100_0000;
    const AM_PM: u8 = 0b0010_0000;
    const OSCRUN: u8 = 0b0010_0000;
    const PWRFAIL: u8 = 0b0001_0000;
    const VBATEN: u8 = 0b0000_1000;
    const WEEKDAY: u8 = 0b0000_0111;
    const OUT: u8 = 0b1000_0000;
    const SQWEN: u8 = 0b0100_0000;
    const ALM1EN: u8 = 0b0010_0000;
    const ALM0EN: u8 = 0b0001_0000;
    const CRSTRIM: u8 = 0b0000_0100;
    const SQWFS: u8 = 0b0000_0011;
    const TRIM_SIGN: u8 = 0b1000_0000;
    const ALMPOL: u8 = 0b1000_0000;
    const ALM_MASK: u8 = 0b0111_0000;
    const ALMIF: u8 = 0b0000_1000;
}

const DEVICE_ADDRESS: u8 = 0b110_1111;
const SRAM_SIZE: usize = 64;
const OSCILLATOR_POLL_ATTEMPTS: u8 = 255;

/// IC markers
pub mod ic {
    /// Implemented by every supported IC marker
    pub trait Variant: crate::private::Sealed {}

    /// MCP7940M IC marker
    #[derive(Debug)]
    pub struct MCP7940M;
    /// MCP7940N IC marker, adds battery backup and power-fail time-stamps
    #[derive(Debug)]
    pub struct MCP7940N;

    impl Variant for MCP7940M {}
    impl Variant for MCP7940N {}
}

/// MCP7940M and MCP7940N RTC driver
#[derive(Debug)]
pub struct Mcp7940<I2C, IC> {
    i2c: I2C,
    _ic: PhantomData<IC>,
}

pub mod registers;

mod mcp7940;
pub use crate::mcp7940::{Alarm, AlarmMatching, AlarmPolarity, MAX_PPM_DEVIATION};
mod mcp7940m;
mod mcp7940n;

mod private {
    use super::ic;
    pub trait Sealed {}

    impl Sealed for ic::MCP7940M {}
    impl Sealed for ic::MCP7940N {}
}
