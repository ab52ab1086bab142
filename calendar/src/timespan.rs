use core::fmt;
use core::ops::{Add, Neg, Sub};

/// Signed duration with one second resolution.
///
/// Only the total is stored. The day/hour/minute/second components are
/// derived with truncating division, so a negative span yields negative
/// components (-90 seconds is -1 minute and -30 seconds).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpan {
    seconds: i32,
}

impl TimeSpan {
    /// Span of `seconds` seconds.
    pub const fn new(seconds: i32) -> Self {
        TimeSpan { seconds }
    }

    /// Span built from components, each of which may be negative.
    ///
    /// No normalization takes place; mixed signs are the caller's problem.
    pub const fn from_dhms(days: i16, hours: i8, minutes: i8, seconds: i8) -> Self {
        let total = (days as i32)
            .wrapping_mul(86_400)
            .wrapping_add(hours as i32 * 3600)
            .wrapping_add(minutes as i32 * 60)
            .wrapping_add(seconds as i32);
        TimeSpan { seconds: total }
    }

    pub const fn days(&self) -> i16 {
        (self.seconds / 86_400) as i16
    }

    pub const fn hours(&self) -> i8 {
        (self.seconds / 3600 % 24) as i8
    }

    pub const fn minutes(&self) -> i8 {
        (self.seconds / 60 % 60) as i8
    }

    pub const fn seconds(&self) -> i8 {
        (self.seconds % 60) as i8
    }

    pub const fn total_seconds(&self) -> i32 {
        self.seconds
    }
}

impl From<i32> for TimeSpan {
    fn from(seconds: i32) -> Self {
        TimeSpan::new(seconds)
    }
}

impl Add for TimeSpan {
    type Output = TimeSpan;

    fn add(self, right: TimeSpan) -> TimeSpan {
        TimeSpan::new(self.seconds.wrapping_add(right.seconds))
    }
}

impl Sub for TimeSpan {
    type Output = TimeSpan;

    fn sub(self, right: TimeSpan) -> TimeSpan {
        TimeSpan::new(self.seconds.wrapping_sub(right.seconds))
    }
}

impl Neg for TimeSpan {
    type Output = TimeSpan;

    fn neg(self) -> TimeSpan {
        TimeSpan::new(self.seconds.wrapping_neg())
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}d {:02}:{:02}:{:02}",
            sign,
            self.days().unsigned_abs(),
            self.hours().unsigned_abs(),
            self.minutes().unsigned_abs(),
            self.seconds().unsigned_abs()
        )
    }
}
