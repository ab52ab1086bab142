use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::math::{
    civil_from_days, day_of_week, days_since_epoch, seconds_from_components,
    SECONDS_FROM_1970_TO_2000,
};
use crate::TimeSpan;

/// Inputs a [`DateTime`] can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeSource<'a> {
    /// Seconds since 1970-01-01 00:00:00.
    UnixTime(u32),
    /// Calendar fields. A year below 2000 is taken as an offset from 2000.
    Components {
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    },
    /// Compiler style build stamp, `"Mmm DD YYYY"` and `"HH:MM:SS"`.
    BuildStamp { date: &'a str, time: &'a str },
}

/// Civil date and time between 2000 and 2255, one second resolution.
///
/// Fields are stored as given and never range checked. Arithmetic goes
/// through the Unix time scalar and produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    year_offset: u8,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl DateTime {
    /// Build a value from any supported input.
    pub fn from_source(source: DateTimeSource<'_>) -> Self {
        match source {
            DateTimeSource::UnixTime(t) => Self::from_unix_time(t),
            DateTimeSource::Components {
                year,
                month,
                day,
                hour,
                minute,
                second,
            } => Self::from_ymd_hms(year, month, day, hour, minute, second),
            DateTimeSource::BuildStamp { date, time } => Self::from_build_strings(date, time),
        }
    }

    /// Convert seconds since the Unix epoch.
    ///
    /// Anything before 2000-01-01 00:00:00 is clamped to it.
    pub fn from_unix_time(t: u32) -> Self {
        let mut t = t.saturating_sub(SECONDS_FROM_1970_TO_2000);
        let second = (t % 60) as u8;
        t /= 60;
        let minute = (t % 60) as u8;
        t /= 60;
        let hour = (t % 24) as u8;
        let (year_offset, month, day) = civil_from_days(t / 24);
        DateTime {
            year_offset,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub fn from_ymd_hms(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        let year = if year >= 2000 { year - 2000 } else { year };
        DateTime {
            year_offset: year as u8,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight on the given date.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    /// Parse a build stamp such as `("Jul 17 2017", "09:41:07")`.
    ///
    /// Only English three letter month names are understood; an unknown
    /// initial letter gives month 0. Digits are read from fixed columns and a
    /// space in place of a leading digit counts as zero.
    pub fn from_build_strings(date: &str, time: &str) -> Self {
        let date = date.as_bytes();
        let time = time.as_bytes();
        let month = match byte_at(date, 0) {
            b'J' if byte_at(date, 1) == b'a' => 1,
            b'J' if byte_at(date, 2) == b'n' => 6,
            b'J' => 7,
            b'F' => 2,
            b'A' if byte_at(date, 2) == b'r' => 4,
            b'A' => 8,
            b'M' if byte_at(date, 2) == b'r' => 3,
            b'M' => 5,
            b'S' => 9,
            b'O' => 10,
            b'N' => 11,
            b'D' => 12,
            _ => 0,
        };
        DateTime {
            year_offset: two_digits(date, 9),
            month,
            day: two_digits(date, 4),
            hour: two_digits(time, 0),
            minute: two_digits(time, 3),
            second: two_digits(time, 6),
        }
    }

    pub const fn year(&self) -> u16 {
        2000 + self.year_offset as u16
    }

    /// Years since 2000.
    pub const fn year_offset(&self) -> u8 {
        self.year_offset
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Day of the week, Monday is 1 and Sunday is 7.
    pub fn day_of_the_week(&self) -> u8 {
        day_of_week(u16::from(self.year_offset), self.month, self.day)
    }

    /// Seconds since 2000-01-01 00:00:00.
    pub fn seconds_time(&self) -> i64 {
        let days = days_since_epoch(u16::from(self.year_offset), self.month, self.day);
        seconds_from_components(days, self.hour, self.minute, self.second)
    }

    /// Seconds since 1970-01-01 00:00:00.
    pub fn unix_time(&self) -> u32 {
        (self.seconds_time() + i64::from(SECONDS_FROM_1970_TO_2000)) as u32
    }
}

impl Default for DateTime {
    fn default() -> Self {
        DateTime::from_unix_time(0)
    }
}

impl Add<TimeSpan> for DateTime {
    type Output = DateTime;

    fn add(self, span: TimeSpan) -> DateTime {
        DateTime::from_unix_time(self.unix_time().wrapping_add_signed(span.total_seconds()))
    }
}

impl Sub<TimeSpan> for DateTime {
    type Output = DateTime;

    fn sub(self, span: TimeSpan) -> DateTime {
        DateTime::from_unix_time(
            self.unix_time()
                .wrapping_add_signed(span.total_seconds().wrapping_neg()),
        )
    }
}

impl Sub for DateTime {
    type Output = TimeSpan;

    fn sub(self, right: DateTime) -> TimeSpan {
        TimeSpan::new(self.unix_time().wrapping_sub(right.unix_time()) as i32)
    }
}

impl AddAssign<TimeSpan> for DateTime {
    fn add_assign(&mut self, span: TimeSpan) {
        *self = *self + span;
    }
}

impl SubAssign<TimeSpan> for DateTime {
    fn sub_assign(&mut self, span: TimeSpan) {
        *self = *self - span;
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

fn byte_at(bytes: &[u8], index: usize) -> u8 {
    bytes.get(index).copied().unwrap_or(b'0')
}

fn two_digits(bytes: &[u8], index: usize) -> u8 {
    let first = byte_at(bytes, index);
    let tens = if first.is_ascii_digit() { first - b'0' } else { 0 };
    (10 * tens).wrapping_add(byte_at(bytes, index + 1).wrapping_sub(b'0'))
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::ToString;

    use super::*;

    #[test]
    fn epoch_in_unix_time() {
        let dt = DateTime::from_ymd_hms(2000, 1, 1, 0, 0, 0);
        assert_eq!(dt.unix_time(), 946_684_800);
        assert_eq!(dt.seconds_time(), 0);
        assert_eq!(DateTime::default(), dt);
    }

    #[test]
    fn first_day_of_the_century_is_a_saturday() {
        assert_eq!(DateTime::from_ymd(2000, 1, 1).day_of_the_week(), 6);
        assert_eq!(DateTime::from_ymd(2000, 1, 2).day_of_the_week(), 7);
        assert_eq!(DateTime::from_ymd(2021, 1, 1).day_of_the_week(), 5);
    }

    #[test]
    fn year_below_2000_is_an_offset() {
        let dt = DateTime::from_ymd(21, 6, 15);
        assert_eq!(dt.year(), 2021);
        assert_eq!(dt.year_offset(), 21);
        assert_eq!(dt, DateTime::from_ymd(2021, 6, 15));
    }

    #[test]
    fn unix_time_round_trip_for_the_century() {
        let mut year = 2000;
        while year < 2100 {
            for month in 1..=12 {
                for &(day, hour, minute, second) in
                    &[(1, 0, 0, 0), (15, 12, 30, 45), (28, 23, 59, 59)]
                {
                    let dt = DateTime::from_ymd_hms(year, month, day, hour, minute, second);
                    let back = DateTime::from_unix_time(dt.unix_time());
                    assert_eq!(back, dt);
                    assert_eq!(back.year(), year);
                }
            }
            year += 3;
        }
    }

    #[test]
    fn known_unix_times() {
        let dt = DateTime::from_unix_time(1_609_459_200);
        assert_eq!(dt, DateTime::from_ymd(2021, 1, 1));
        let dt = DateTime::from_unix_time(1_709_210_096);
        assert_eq!(dt, DateTime::from_ymd_hms(2024, 2, 29, 12, 34, 56));
    }

    #[test]
    fn unix_time_before_2000_clamps() {
        assert_eq!(DateTime::from_unix_time(0), DateTime::from_ymd(2000, 1, 1));
        assert_eq!(
            DateTime::from_unix_time(946_684_799),
            DateTime::from_ymd(2000, 1, 1)
        );
    }

    #[test]
    fn difference_of_two_dates() {
        let later = DateTime::from_ymd_hms(2000, 1, 2, 0, 0, 0);
        let earlier = DateTime::from_ymd_hms(2000, 1, 1, 0, 0, 0);
        assert_eq!((later - earlier).total_seconds(), 86_400);
        assert_eq!((earlier - later).total_seconds(), -86_400);
    }

    #[test]
    fn adding_a_day_lands_on_leap_day() {
        let dt = DateTime::from_ymd(2000, 2, 28) + TimeSpan::from_dhms(1, 0, 0, 0);
        assert_eq!(dt, DateTime::from_ymd(2000, 2, 29));
        let dt = DateTime::from_ymd(2001, 2, 28) + TimeSpan::from_dhms(1, 0, 0, 0);
        assert_eq!(dt, DateTime::from_ymd(2001, 3, 1));
    }

    #[test]
    fn century_2100_has_no_leap_day() {
        let dt = DateTime::from_ymd(2100, 2, 28) + TimeSpan::from_dhms(1, 0, 0, 0);
        assert_eq!(dt, DateTime::from_ymd(2100, 3, 1));
    }

    #[test]
    fn subtracting_a_span() {
        let dt = DateTime::from_ymd_hms(2001, 1, 1, 0, 0, 0) - TimeSpan::new(1);
        assert_eq!(dt, DateTime::from_ymd_hms(2000, 12, 31, 23, 59, 59));

        let mut dt = DateTime::from_ymd(2020, 3, 1);
        dt -= TimeSpan::from_dhms(1, 0, 0, 0);
        assert_eq!(dt, DateTime::from_ymd(2020, 2, 29));
        dt += TimeSpan::from_dhms(0, 36, 0, 0);
        assert_eq!(dt, DateTime::from_ymd_hms(2020, 3, 1, 12, 0, 0));
    }

    #[test]
    fn subtracting_past_2000_clamps() {
        let dt = DateTime::from_ymd(2000, 1, 1) - TimeSpan::from_dhms(1, 0, 0, 0);
        assert_eq!(dt, DateTime::from_ymd(2000, 1, 1));
    }

    #[test]
    fn build_stamp() {
        let dt = DateTime::from_build_strings("Jan 01 2021", "00:00:00");
        assert_eq!(dt.year(), 2021);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 1);
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));

        let dt = DateTime::from_build_strings("Jul 17 2017", "09:41:07");
        assert_eq!(dt, DateTime::from_ymd_hms(2017, 7, 17, 9, 41, 7));
    }

    #[test]
    fn build_stamp_month_names() {
        let months = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        for (index, name) in months.iter().enumerate() {
            let mut date = [b' '; 11];
            date[..3].copy_from_slice(name.as_bytes());
            date[3..].copy_from_slice(b" 10 2030");
            let date = core::str::from_utf8(&date).unwrap();
            let dt = DateTime::from_build_strings(date, "12:00:00");
            assert_eq!(usize::from(dt.month()), index + 1, "{}", name);
        }
    }

    #[test]
    fn build_stamp_with_space_padded_day() {
        let dt = DateTime::from_build_strings("Mar  5 2024", "23:59:58");
        assert_eq!(dt, DateTime::from_ymd_hms(2024, 3, 5, 23, 59, 58));
    }

    #[test]
    fn build_stamp_garbage() {
        let dt = DateTime::from_build_strings("Xyz 01 2021", "00:00:00");
        assert_eq!(dt.month(), 0);
        assert_eq!(dt.day(), 1);

        // 'A' - '0' wraps to 17 in the ones place
        let dt = DateTime::from_build_strings("Jan 0A 2021", "1:2");
        assert_eq!(dt.day(), 17);
        assert_eq!(dt.hour(), 10 + (b':'.wrapping_sub(b'0')));
        assert_eq!(dt.second(), 0);
    }

    #[test]
    fn build_stamp_through_the_source_enum() {
        let dt = DateTime::from_source(DateTimeSource::BuildStamp {
            date: "Dec 31 2099",
            time: "23:59:59",
        });
        assert_eq!(dt, DateTime::from_ymd_hms(2099, 12, 31, 23, 59, 59));
        assert_eq!(
            DateTime::from_source(DateTimeSource::UnixTime(946_684_800 + 86_400)),
            DateTime::from_ymd(2000, 1, 2)
        );
        assert_eq!(
            DateTime::from_source(DateTimeSource::Components {
                year: 2010,
                month: 10,
                day: 10,
                hour: 10,
                minute: 10,
                second: 10,
            }),
            DateTime::from_ymd_hms(2010, 10, 10, 10, 10, 10)
        );
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(DateTime::from_ymd(2020, 12, 31) < DateTime::from_ymd(2021, 1, 1));
        assert!(DateTime::from_ymd_hms(2021, 1, 1, 0, 0, 1) > DateTime::from_ymd(2021, 1, 1));
    }

    #[test]
    fn display() {
        let dt = DateTime::from_ymd_hms(2024, 2, 9, 7, 5, 3);
        assert_eq!(dt.to_string(), "2024-02-09 07:05:03");
    }

    #[test]
    fn out_of_range_fields_are_not_normalized() {
        let dt = DateTime::from_ymd(2000, 0, 0);
        assert_eq!((dt.month(), dt.day()), (0, 0));
        assert_eq!(dt.day_of_the_week(), 2);
        assert_eq!(dt.seconds_time(), 371_085_174_288_000);
        assert_eq!(dt.unix_time(), 946_598_400);

        let dt = DateTime::from_ymd_hms(2000, 13, 40, 12, 0, 0);
        assert_eq!(dt.day_of_the_week(), 5);
        assert_eq!(dt.unix_time(), 981_720_000);
        assert_eq!(
            DateTime::from_unix_time(dt.unix_time()),
            DateTime::from_ymd_hms(2001, 2, 9, 12, 0, 0)
        );
        assert_eq!(dt.to_string(), "2000-13-40 12:00:00");
    }
}
