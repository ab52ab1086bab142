//! Functions exclusive of MCP7940M

use core::marker::PhantomData;

use crate::{ic, Mcp7940};

impl<I2C> Mcp7940<I2C, ic::MCP7940M>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Create a new instance of the MCP7940M device.
    pub fn new_mcp7940m(i2c: I2C) -> Self {
        Mcp7940 {
            i2c,
            _ic: PhantomData,
        }
    }
}
