//! Oscillator digital trimming
//!
//! The trim register adds or removes `2 * TRIMVAL` clock cycles every minute.
//! One cycle per minute at 32.768 kHz is about 0.5 ppm, so
//! `TRIMVAL = ppm * 32768 * 60 / (2 * 1_000_000)`.

use calendar::DateTime;

use crate::{ic, registers, BitFlags, Error, Mcp7940, Register, SqWFreq};

/// Deviation beyond which a difference is treated as a wrong setting rather
/// than drift. 130 ppm already saturates the trim register.
pub const MAX_PPM_DEVIATION: i32 = 130;
const MAX_TRIM: i32 = 127;

impl<I2C, IC> Mcp7940<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c,
    IC: ic::Variant,
{
    /// Read the current trim value.
    pub fn calibration_trim(&mut self) -> Result<i8, Error> {
        Ok(registers::decode_trim(self.read_register(Register::OSCTRIM)?))
    }

    /// Set the trim value in fine trim mode. Values are limited to ±127.
    ///
    /// Returns the value actually written.
    pub fn set_calibration_trim(&mut self, trim: i8) -> Result<i8, Error> {
        self.write_register_bit(Register::CONTROL, BitFlags::CRSTRIM, false)?;
        let raw = registers::encode_trim(trim);
        self.write_register(Register::OSCTRIM, raw)?;
        Ok(registers::decode_trim(raw))
    }

    /// Remove any trimming.
    pub fn reset_calibration(&mut self) -> Result<(), Error> {
        self.set_calibration_trim(0).map(|_| ())
    }

    /// Drift of the clock in parts per million.
    ///
    /// `actual` is the true current time and `last_set` the time the clock
    /// was last adjusted or calibrated. Positive values mean the clock runs
    /// slow. Will return `Error::InvalidInputData` if no time has passed
    /// since `last_set`.
    pub fn ppm_deviation(&mut self, actual: &DateTime, last_set: &DateTime) -> Result<i32, Error> {
        let expected = i64::from(actual.unix_time()) - i64::from(last_set.unix_time());
        if expected == 0 {
            return Err(Error::InvalidInputData);
        }
        let now = self.now()?;
        let deviation = i64::from(actual.unix_time()) - i64::from(now.unix_time());
        let ppm = 1_000_000 * deviation / expected;
        Ok(ppm.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    /// Compare the clock against the true time, correct the trim register
    /// and set the clock to `actual`.
    ///
    /// The longer the clock ran since `last_set`, the more accurate the
    /// result. Returns the new trim value.
    pub fn calibrate_against(&mut self, actual: &DateTime, last_set: &DateTime) -> Result<i8, Error> {
        let ppm = self.ppm_deviation(actual, last_set)?;
        self.calibrate_with_ppm(actual, ppm)
    }

    /// Set the clock to `actual` and correct the trim register by an already
    /// measured deviation, limited to ±130 ppm. Returns the new trim value.
    pub fn calibrate_with_ppm(&mut self, actual: &DateTime, ppm: i32) -> Result<i8, Error> {
        self.adjust(actual)?;
        let ppm = ppm.clamp(-MAX_PPM_DEVIATION, MAX_PPM_DEVIATION);
        let trim = i32::from(self.calibration_trim()?) + ppm * 32768 * 60 / 2_000_000;
        self.set_calibration_trim(trim.clamp(-MAX_TRIM, MAX_TRIM) as i8)
    }

    /// Correct the trim register from a frequency measured on the
    /// square-wave output.
    ///
    /// The square wave has to be enabled, otherwise
    /// `Error::InvalidDeviceState` is returned. The 32.768 kHz output is not
    /// trimmed by the device so the current trim is ignored for it.
    pub fn calibrate_from_frequency(&mut self, measured_hz: f32) -> Result<i8, Error> {
        let freq = self
            .square_wave_frequency()?
            .ok_or(Error::InvalidDeviceState)?;
        let current = match freq {
            SqWFreq::_32_768kHz => 0,
            _ => self.calibration_trim()?,
        };
        let ideal = freq.hertz() as f32;
        let trim = f32::from(current) + (measured_hz - ideal) * (32768.0 / ideal) * 60.0 / 2.0;
        let trim = (trim as i32).clamp(-MAX_TRIM, MAX_TRIM);
        self.set_calibration_trim(trim as i8)
    }
}
