pub mod clock {
    use log::{debug, info, warn};
    use mcp7940::{ic, DateTime, Error, Mcp7940, MAX_PPM_DEVIATION};

    /// An MCP7940 together with the time it was last set.
    ///
    /// Drift can only be measured against a known starting point, so every
    /// adjustment made through the clock is remembered.
    pub struct Clock<I2C, IC> {
        rtc: Mcp7940<I2C, IC>,
        last_set: Option<DateTime>,
    }

    impl<I2C, IC> Clock<I2C, IC>
    where
        I2C: embedded_hal::i2c::I2c,
        IC: ic::Variant,
    {
        /// Wrap a driver whose last adjustment is unknown.
        pub fn new(rtc: Mcp7940<I2C, IC>) -> Self {
            Clock {
                rtc,
                last_set: None,
            }
        }

        /// Wrap a driver that was last set at `last_set`, for example a
        /// value kept in non-volatile storage across restarts.
        pub fn with_last_set(rtc: Mcp7940<I2C, IC>, last_set: DateTime) -> Self {
            Clock {
                rtc,
                last_set: Some(last_set),
            }
        }

        /// Give back the driver.
        pub fn release(self) -> Mcp7940<I2C, IC> {
            self.rtc
        }

        /// Borrow the driver for everything the clock does not wrap.
        pub fn rtc(&mut self) -> &mut Mcp7940<I2C, IC> {
            &mut self.rtc
        }

        pub fn last_set(&self) -> Option<DateTime> {
            self.last_set
        }

        pub fn now(&mut self) -> Result<DateTime, Error> {
            self.rtc.now()
        }

        /// Set the clock and remember when.
        pub fn adjust(&mut self, datetime: &DateTime) -> Result<(), Error> {
            self.rtc.adjust(datetime)?;
            info!("Clock set to {}", datetime);
            self.last_set = Some(*datetime);
            Ok(())
        }

        /// Set the clock from a build stamp such as `("Jul 17 2017", "09:41:07")`.
        pub fn adjust_to_build_time(&mut self, date: &str, time: &str) -> Result<(), Error> {
            let datetime = DateTime::from_build_strings(date, time);
            debug!("Build stamp {} {} read as {}", date, time, datetime);
            self.adjust(&datetime)
        }

        /// Drift since the last adjustment in ppm, positive when running slow.
        pub fn ppm_deviation(&mut self, actual: &DateTime) -> Result<i32, Error> {
            let last_set = self.last_set.ok_or(Error::InvalidDeviceState)?;
            self.rtc.ppm_deviation(actual, &last_set)
        }

        /// Trim the oscillator against the true time and set the clock to it.
        ///
        /// Returns the new trim value.
        pub fn calibrate(&mut self, actual: &DateTime) -> Result<i8, Error> {
            let last_set = self.last_set.ok_or(Error::InvalidDeviceState)?;
            let trim = self.rtc.calibrate_against(actual, &last_set)?;
            info!("Clock calibrated to {}, trim {}", actual, trim);
            self.last_set = Some(*actual);
            Ok(trim)
        }

        /// Calibrate when the drift is plausible, otherwise only set the time.
        ///
        /// Deviations beyond 130 ppm mean the clock was set wrong rather than
        /// drifting; the trim is left as is. Returns the measured deviation
        /// and the trim value in effect afterwards.
        pub fn calibrate_or_adjust(&mut self, actual: &DateTime) -> Result<(i32, i8), Error> {
            let ppm = self.ppm_deviation(actual)?;
            if !(-MAX_PPM_DEVIATION..=MAX_PPM_DEVIATION).contains(&ppm) {
                warn!("Deviation of {} ppm is out of range, adjusting only", ppm);
                self.adjust(actual)?;
                return Ok((ppm, self.rtc.calibration_trim()?));
            }
            let trim = self.rtc.calibrate_with_ppm(actual, ppm)?;
            info!("Clock calibrated to {} at {} ppm, trim {}", actual, ppm, trim);
            self.last_set = Some(*actual);
            Ok((ppm, trim))
        }
    }
}

pub use clock::Clock;
