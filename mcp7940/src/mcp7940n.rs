//! Functions exclusive of MCP7940N

use core::marker::PhantomData;

use calendar::DateTime;

use crate::{ic, registers, BitFlags, Error, Mcp7940, Register};

impl<I2C> Mcp7940<I2C, ic::MCP7940N>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Create a new instance of the MCP7940N device.
    pub fn new_mcp7940n(i2c: I2C) -> Self {
        Mcp7940 {
            i2c,
            _ic: PhantomData,
        }
    }

    /// Keep the clock running from VBAT when the main supply drops.
    pub fn enable_battery_backup(&mut self) -> Result<(), Error> {
        self.set_weekday_flag(BitFlags::VBATEN, true)
    }

    pub fn disable_battery_backup(&mut self) -> Result<(), Error> {
        self.set_weekday_flag(BitFlags::VBATEN, false)
    }

    pub fn is_battery_backup_enabled(&mut self) -> Result<bool, Error> {
        Ok(self.read_register(Register::RTCWKDAY)? & BitFlags::VBATEN != 0)
    }

    /// Whether main power was lost while running on battery.
    ///
    /// The power-fail time-stamps are only valid while this is set.
    pub fn has_power_failed(&mut self) -> Result<bool, Error> {
        Ok(self.read_register(Register::RTCWKDAY)? & BitFlags::PWRFAIL != 0)
    }

    /// Clear the power-fail flag. This also resets both time-stamps.
    pub fn clear_power_failed(&mut self) -> Result<(), Error> {
        self.set_weekday_flag(BitFlags::PWRFAIL, false)
    }

    /// Time main power was lost. Year and seconds are not recorded.
    pub fn power_down_timestamp(&mut self) -> Result<DateTime, Error> {
        self.power_timestamp(Register::PWRDNMIN)
    }

    /// Time main power came back. Year and seconds are not recorded.
    pub fn power_up_timestamp(&mut self) -> Result<DateTime, Error> {
        self.power_timestamp(Register::PWRUPMIN)
    }

    fn power_timestamp(&mut self, register: u8) -> Result<DateTime, Error> {
        let mut block = [0; 4];
        self.read_data(register, &mut block)?;
        Ok(registers::decode_power_timestamp(&block))
    }

    fn set_weekday_flag(&mut self, flag: u8, value: bool) -> Result<(), Error> {
        let data = self.read_register(Register::RTCWKDAY)?;
        let data = if value { data | flag } else { data & !flag };
        self.write_register(Register::RTCWKDAY, data)
    }
}
