//! Battery-backed SRAM
//!
//! 64 bytes at 0x20-0x5F. Addresses are taken modulo 64 and sequential
//! access wraps around inside the SRAM.

use crate::{ic, Error, Mcp7940, Register, SRAM_SIZE};

fn sram_register(address: u8) -> u8 {
    Register::SRAM + address % SRAM_SIZE as u8
}

impl<I2C, IC> Mcp7940<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c,
    IC: ic::Variant,
{
    /// Read `buffer.len()` bytes (at most 64) starting at SRAM `address`.
    pub fn read_sram(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.len() > SRAM_SIZE {
            return Err(Error::InvalidInputData);
        }
        self.read_data(sram_register(address), buffer)
    }

    /// Write up to 64 bytes starting at SRAM `address`.
    pub fn write_sram(&mut self, address: u8, data: &[u8]) -> Result<(), Error> {
        self.write_data(sram_register(address), data)
    }
}
