//! Functions common to both ICs

use crate::{ic, registers, BitFlags, Error, Mcp7940, Register, DEVICE_ADDRESS};

mod alarms;
mod calibration;
mod configuration;
mod datetime;
mod sram;

pub use self::alarms::{Alarm, AlarmMatching, AlarmPolarity};
pub use self::calibration::MAX_PPM_DEVIATION;

impl<I2C, IC> Mcp7940<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c,
    IC: ic::Variant,
{
    /// Destroy driver instance, return I²C bus instance.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Check that the device answers and switch it to 24-hour mode.
    ///
    /// A clock running in 12-hour mode has its current hour converted.
    pub fn init(&mut self) -> Result<(), Error> {
        let hours = self.read_register(Register::RTCHOUR)?;
        if hours & BitFlags::H24_H12 != 0 {
            let hour = registers::decode_hours(hours);
            self.write_register(Register::RTCHOUR, calendar::bcd::int_to_bcd(hour))?;
        }
        Ok(())
    }

    pub fn write_register(&mut self, register: u8, data: u8) -> Result<(), Error> {
        let payload: [u8; 2] = [register, data];
        self.i2c
            .write(DEVICE_ADDRESS, &payload)
            .map_err(|_err| Error::Comm)
    }

    pub fn read_register(&mut self, register: u8) -> Result<u8, Error> {
        let mut data = [0];
        self.i2c
            .write_read(DEVICE_ADDRESS, &[register], &mut data)
            .map_err(|_err| Error::Comm)?;
        Ok(data[0])
    }

    /// Write consecutive registers starting at `register`.
    ///
    /// At most 64 bytes, the size of the largest block (SRAM).
    pub fn write_data(&mut self, register: u8, data: &[u8]) -> Result<(), Error> {
        if data.len() > crate::SRAM_SIZE {
            return Err(Error::InvalidInputData);
        }
        let mut payload = [0; crate::SRAM_SIZE + 1];
        payload[0] = register;
        payload[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(DEVICE_ADDRESS, &payload[..=data.len()])
            .map_err(|_err| Error::Comm)
    }

    /// Read consecutive registers starting at `register`.
    pub fn read_data(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Error> {
        self.i2c
            .write_read(DEVICE_ADDRESS, &[register], buffer)
            .map_err(|_err| Error::Comm)
    }

    fn read_register_bit(&mut self, register: u8, mask: u8) -> Result<bool, Error> {
        Ok(self.read_register(register)? & mask != 0)
    }

    fn write_register_bit(&mut self, register: u8, mask: u8, value: bool) -> Result<(), Error> {
        let data = self.read_register(register)?;
        let data = if value { data | mask } else { data & !mask };
        self.write_register(register, data)
    }

    /// Whether the oscillator start bit (ST) is set.
    pub fn is_enabled(&mut self) -> Result<bool, Error> {
        self.read_register_bit(Register::RTCSEC, BitFlags::ST)
    }

    /// Whether the oscillator is actually running (OSCRUN).
    pub fn is_oscillator_running(&mut self) -> Result<bool, Error> {
        self.read_register_bit(Register::RTCWKDAY, BitFlags::OSCRUN)
    }

    /// Start the oscillator (set the clock running) and wait until it runs.
    ///
    /// Returns `Error::InvalidDeviceState` if the oscillator does not start,
    /// for example because no crystal is fitted.
    pub fn enable(&mut self) -> Result<(), Error> {
        self.write_register_bit(Register::RTCSEC, BitFlags::ST, true)?;
        self.wait_for_oscillator(true)
    }

    /// Stop the oscillator and wait until it has stopped.
    pub fn disable(&mut self) -> Result<(), Error> {
        self.write_register_bit(Register::RTCSEC, BitFlags::ST, false)?;
        self.wait_for_oscillator(false)
    }

    fn wait_for_oscillator(&mut self, running: bool) -> Result<(), Error> {
        for _ in 0..crate::OSCILLATOR_POLL_ATTEMPTS {
            if self.is_oscillator_running()? == running {
                return Ok(());
            }
        }
        Err(Error::InvalidDeviceState)
    }
}
