//! Device configuration

use crate::{ic, BitFlags, Error, Mcp7940, MfpMode, Register, SqWFreq};

impl<I2C, IC> Mcp7940<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c,
    IC: ic::Variant,
{
    /// Enable the square-wave output on the multi-function pin.
    pub fn enable_square_wave(&mut self) -> Result<(), Error> {
        self.write_register_bit(Register::CONTROL, BitFlags::SQWEN, true)
    }

    /// Disable the square-wave output.
    pub fn disable_square_wave(&mut self) -> Result<(), Error> {
        self.write_register_bit(Register::CONTROL, BitFlags::SQWEN, false)
    }

    pub fn is_square_wave_enabled(&mut self) -> Result<bool, Error> {
        self.read_register_bit(Register::CONTROL, BitFlags::SQWEN)
    }

    /// Set the square-wave output frequency.
    ///
    /// 64 Hz is produced in coarse trim mode; any other frequency switches
    /// back to fine trim. The output enable bit is left alone.
    pub fn set_square_wave_frequency(&mut self, freq: SqWFreq) -> Result<(), Error> {
        let control = self.read_register(Register::CONTROL)?;
        let select = |bits: u8| (control & !BitFlags::CRSTRIM & !BitFlags::SQWFS) | bits;
        let new_control = match freq {
            SqWFreq::_1Hz => select(0b00),
            SqWFreq::_4_096kHz => select(0b01),
            SqWFreq::_8_192kHz => select(0b10),
            SqWFreq::_32_768kHz => select(0b11),
            SqWFreq::_64Hz => control | BitFlags::CRSTRIM,
        };
        self.write_register(Register::CONTROL, new_control)
    }

    /// Current square-wave frequency, `None` while the output is disabled.
    pub fn square_wave_frequency(&mut self) -> Result<Option<SqWFreq>, Error> {
        let control = self.read_register(Register::CONTROL)?;
        if control & BitFlags::SQWEN == 0 {
            return Ok(None);
        }
        if control & BitFlags::CRSTRIM != 0 {
            return Ok(Some(SqWFreq::_64Hz));
        }
        let freq = match control & BitFlags::SQWFS {
            0b00 => SqWFreq::_1Hz,
            0b01 => SqWFreq::_4_096kHz,
            0b10 => SqWFreq::_8_192kHz,
            _ => SqWFreq::_32_768kHz,
        };
        Ok(Some(freq))
    }

    /// Drive the multi-function pin as a general purpose output.
    ///
    /// Will return `Error::InvalidDeviceState` while the square wave or an
    /// alarm owns the pin.
    pub fn set_mfp_level(&mut self, high: bool) -> Result<(), Error> {
        let control = self.read_register(Register::CONTROL)?;
        if control & (BitFlags::SQWEN | BitFlags::ALM1EN | BitFlags::ALM0EN) != 0 {
            return Err(Error::InvalidDeviceState);
        }
        let control = if high {
            control | BitFlags::OUT
        } else {
            control & !BitFlags::OUT
        };
        self.write_register(Register::CONTROL, control)
    }

    /// Report what drives the multi-function pin.
    pub fn mfp_mode(&mut self) -> Result<MfpMode, Error> {
        let control = self.read_register(Register::CONTROL)?;
        let mode = if control & BitFlags::SQWEN != 0 {
            MfpMode::SquareWave
        } else if control & (BitFlags::ALM1EN | BitFlags::ALM0EN) != 0 {
            MfpMode::Alarm
        } else if control & BitFlags::OUT != 0 {
            MfpMode::High
        } else {
            MfpMode::Low
        };
        Ok(mode)
    }
}
