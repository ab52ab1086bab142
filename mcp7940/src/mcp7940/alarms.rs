//! Alarm support

use calendar::DateTime;

use crate::{ic, registers, BitFlags, Error, Mcp7940, Register};

/// One of the two alarm modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alarm {
    /// Alarm 0 (registers 0x0A-0x0F)
    Zero,
    /// Alarm 1 (registers 0x11-0x16)
    One,
}

impl Alarm {
    const fn register_offset(self) -> u8 {
        match self {
            Alarm::Zero => 0,
            Alarm::One => 7,
        }
    }

    const fn enable_flag(self) -> u8 {
        match self {
            Alarm::Zero => BitFlags::ALM0EN,
            Alarm::One => BitFlags::ALM1EN,
        }
    }
}

/// Which fields have to match for an alarm to go off (ALMxMSK)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmMatching {
    /// Seconds match
    SecondsMatch = 0b000,
    /// Minutes match
    MinutesMatch = 0b001,
    /// Hours match
    HoursMatch = 0b010,
    /// Day of the week matches
    WeekdayMatches = 0b011,
    /// Day of the month matches
    DateMatches = 0b100,
    /// Seconds, minutes, hours, weekday, date and month match
    AllMatch = 0b111,
}

impl AlarmMatching {
    /// Decode the three mask bits. `0b101` and `0b110` are reserved.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b000 => Some(AlarmMatching::SecondsMatch),
            0b001 => Some(AlarmMatching::MinutesMatch),
            0b010 => Some(AlarmMatching::HoursMatch),
            0b011 => Some(AlarmMatching::WeekdayMatches),
            0b100 => Some(AlarmMatching::DateMatches),
            0b111 => Some(AlarmMatching::AllMatch),
            _ => None,
        }
    }
}

/// Level of the multi-function pin when an alarm is asserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmPolarity {
    /// Pin goes low on a match (default)
    ActiveLow,
    /// Pin goes high on a match
    ActiveHigh,
}

impl<I2C, IC> Mcp7940<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c,
    IC: ic::Variant,
{
    /// Program an alarm.
    ///
    /// The oscillator is started if needed since alarms only compare against
    /// a running clock. The alarm is disabled while being written, its match
    /// flag is cleared and it is finally enabled or left disabled according
    /// to `enabled`.
    pub fn set_alarm(
        &mut self,
        alarm: Alarm,
        matching: AlarmMatching,
        when: &DateTime,
        enabled: bool,
    ) -> Result<(), Error> {
        self.enable()?;
        self.set_alarm_enabled(alarm, false)?;
        let offset = alarm.register_offset();
        let weekday = self.read_register(Register::ALM0WKDAY + offset)?;
        let block = registers::encode_alarm(when, matching, weekday);
        self.write_data(Register::ALM0SEC + offset, &block)?;
        if enabled {
            self.set_alarm_enabled(alarm, true)?;
        }
        Ok(())
    }

    /// Read back an alarm and its matching mode. The year is always 2000.
    pub fn alarm(&mut self, alarm: Alarm) -> Result<(DateTime, AlarmMatching), Error> {
        let mut block = [0; 6];
        self.read_data(Register::ALM0SEC + alarm.register_offset(), &mut block)?;
        match registers::decode_alarm(&block) {
            (when, Some(matching)) => Ok((when, matching)),
            (_, None) => Err(Error::InvalidDeviceState),
        }
    }

    /// Turn an alarm on or off without touching its settings.
    pub fn set_alarm_enabled(&mut self, alarm: Alarm, enabled: bool) -> Result<(), Error> {
        self.write_register_bit(Register::CONTROL, alarm.enable_flag(), enabled)
    }

    pub fn is_alarm_enabled(&mut self, alarm: Alarm) -> Result<bool, Error> {
        self.read_register_bit(Register::CONTROL, alarm.enable_flag())
    }

    /// Whether the alarm has matched since its flag was last cleared.
    pub fn has_alarm_matched(&mut self, alarm: Alarm) -> Result<bool, Error> {
        self.read_register_bit(Register::ALM0WKDAY + alarm.register_offset(), BitFlags::ALMIF)
    }

    /// Clear the alarm matched flag, releasing the multi-function pin.
    pub fn clear_alarm_matched_flag(&mut self, alarm: Alarm) -> Result<(), Error> {
        self.write_register_bit(
            Register::ALM0WKDAY + alarm.register_offset(),
            BitFlags::ALMIF,
            false,
        )
    }

    /// Set the alarm output polarity.
    ///
    /// The multi-function pin is open drain and needs a pull-up. With both
    /// alarms enabled an active-low pin only goes low once both have matched
    /// while an active-high pin goes high as soon as either matches.
    pub fn set_alarm_polarity(&mut self, polarity: AlarmPolarity) -> Result<(), Error> {
        self.write_register_bit(
            Register::ALM0WKDAY,
            BitFlags::ALMPOL,
            polarity == AlarmPolarity::ActiveHigh,
        )
    }
}
