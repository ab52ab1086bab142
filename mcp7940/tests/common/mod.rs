#![allow(dead_code)]

use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use mcp7940::{ic, Mcp7940};

pub const DEVICE_ADDRESS: u8 = 0b110_1111;

pub struct Register;

impl Register {
    pub const RTCSEC: u8 = 0x00;
    pub const RTCHOUR: u8 = 0x02;
    pub const RTCWKDAY: u8 = 0x03;
    pub const CONTROL: u8 = 0x07;
    pub const OSCTRIM: u8 = 0x08;
    pub const ALM0SEC: u8 = 0x0A;
    pub const ALM0WKDAY: u8 = 0x0D;
    pub const ALM1SEC: u8 = 0x11;
    pub const ALM1WKDAY: u8 = 0x14;
    pub const PWRDNMIN: u8 = 0x18;
    pub const PWRUPMIN: u8 = 0x1C;
    pub const SRAM: u8 = 0x20;
}

pub struct BitFlags;

impl BitFlags {
    pub const ST: u8 = 0b1000_0000;
    pub const OSCRUN: u8 = 0b0010_0000;
    pub const PWRFAIL: u8 = 0b0001_0000;
    pub const VBATEN: u8 = 0b0000_1000;
    pub const SQWEN: u8 = 0b0100_0000;
    pub const ALM1EN: u8 = 0b0010_0000;
    pub const ALM0EN: u8 = 0b0001_0000;
    pub const CRSTRIM: u8 = 0b0000_0100;
    pub const ALMPOL: u8 = 0b1000_0000;
    pub const ALMIF: u8 = 0b0000_1000;
}

pub fn new_mcp7940m(transactions: &[I2cTrans]) -> Mcp7940<I2cMock, ic::MCP7940M> {
    Mcp7940::new_mcp7940m(I2cMock::new(transactions))
}

pub fn new_mcp7940n(transactions: &[I2cTrans]) -> Mcp7940<I2cMock, ic::MCP7940N> {
    Mcp7940::new_mcp7940n(I2cMock::new(transactions))
}

pub fn destroy<IC: ic::Variant>(dev: Mcp7940<I2cMock, IC>) {
    dev.destroy().done();
}

pub fn read(register: u8, value: u8) -> I2cTrans {
    I2cTrans::write_read(DEVICE_ADDRESS, vec![register], vec![value])
}

pub fn write(register: u8, value: u8) -> I2cTrans {
    I2cTrans::write(DEVICE_ADDRESS, vec![register, value])
}

pub fn read_block(register: u8, data: &[u8]) -> I2cTrans {
    I2cTrans::write_read(DEVICE_ADDRESS, vec![register], data.to_vec())
}

pub fn write_block(register: u8, data: &[u8]) -> I2cTrans {
    let mut payload = vec![register];
    payload.extend_from_slice(data);
    I2cTrans::write(DEVICE_ADDRESS, payload)
}

/// Bus traffic of `adjust` on a running clock.
///
/// `previous` is the timekeeping block before the call with ST and OSCRUN
/// clear, `written` the block the driver is expected to write.
pub fn adjust_transactions(previous: [u8; 7], written: [u8; 7]) -> Vec<I2cTrans> {
    let weekday = written[3] | BitFlags::OSCRUN;
    vec![
        read(Register::RTCSEC, previous[0] | BitFlags::ST),
        write(Register::RTCSEC, previous[0]),
        read(Register::RTCWKDAY, previous[3]),
        read_block(Register::RTCSEC, &previous),
        write_block(Register::RTCSEC, &written),
        read(Register::RTCSEC, written[0]),
        write(Register::RTCSEC, written[0] | BitFlags::ST),
        read(Register::RTCWKDAY, weekday),
        read(Register::RTCWKDAY, weekday),
        write(Register::RTCWKDAY, weekday),
    ]
}
