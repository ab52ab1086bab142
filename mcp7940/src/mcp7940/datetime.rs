//! Date and time

use calendar::DateTime;

use crate::{
    ic, registers, BitFlags, DateTimeAccess, Datelike, Error, Mcp7940, NaiveDate, NaiveDateTime,
    Register, Timelike,
};

impl<I2C, IC> Mcp7940<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c,
    IC: ic::Variant,
{
    /// Read the current date and time.
    ///
    /// While the oscillator is stopped this is the time it was stopped at.
    pub fn now(&mut self) -> Result<DateTime, Error> {
        let mut block = [0; 7];
        self.read_data(Register::RTCSEC, &mut block)?;
        Ok(registers::decode_timekeeping(&block))
    }

    /// Set the date and time.
    ///
    /// The oscillator is stopped while the registers are written and started
    /// again afterwards. The weekday is computed from the date.
    pub fn adjust(&mut self, datetime: &DateTime) -> Result<(), Error> {
        self.disable()?;
        let mut current = [0; 7];
        self.read_data(Register::RTCSEC, &mut current)?;
        let block = registers::encode_timekeeping(datetime, &current);
        self.write_data(Register::RTCSEC, &block)?;
        self.enable()?;
        // Silicon errata: the weekday may be lost when written with ST clear.
        self.set_weekday(datetime.day_of_the_week())
    }

    /// Read the weekday counter (1-7, Monday is 1 when set by [`adjust`]).
    ///
    /// [`adjust`]: Mcp7940::adjust
    pub fn weekday(&mut self) -> Result<u8, Error> {
        Ok(self.read_register(Register::RTCWKDAY)? & BitFlags::WEEKDAY)
    }

    /// Set the weekday counter. Will return `Error::InvalidInputData` if
    /// `weekday` is not in 1-7.
    pub fn set_weekday(&mut self, weekday: u8) -> Result<(), Error> {
        if !(1..=7).contains(&weekday) {
            return Err(Error::InvalidInputData);
        }
        let data = self.read_register(Register::RTCWKDAY)?;
        self.write_register(Register::RTCWKDAY, (data & !BitFlags::WEEKDAY) | weekday)
    }
}

impl<I2C, IC> DateTimeAccess for Mcp7940<I2C, IC>
where
    I2C: embedded_hal::i2c::I2c,
    IC: ic::Variant,
{
    type Error = Error;

    fn datetime(&mut self) -> Result<NaiveDateTime, Self::Error> {
        let now = self.now()?;
        NaiveDate::from_ymd_opt(
            i32::from(now.year()),
            u32::from(now.month()),
            u32::from(now.day()),
        )
        .and_then(|date| {
            date.and_hms_opt(
                u32::from(now.hour()),
                u32::from(now.minute()),
                u32::from(now.second()),
            )
        })
        .ok_or(Error::InvalidDeviceState)
    }

    /// Only years 2000-2099 fit the two BCD digits of the year register.
    fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<(), Self::Error> {
        if !(2000..=2099).contains(&datetime.year()) {
            return Err(Error::InvalidInputData);
        }
        let datetime = DateTime::from_ymd_hms(
            datetime.year() as u16,
            datetime.month() as u8,
            datetime.day() as u8,
            datetime.hour() as u8,
            datetime.minute() as u8,
            datetime.second() as u8,
        );
        self.adjust(&datetime)
    }
}
