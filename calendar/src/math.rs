//! Gregorian day counting relative to 2000-01-01

/// Days in each month of a common year.
pub const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Seconds in one day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Seconds between the Unix epoch and 2000-01-01 00:00:00.
pub const SECONDS_FROM_1970_TO_2000: u32 = 946_684_800;

/// Whether a year counted from 2000 is a leap year.
///
/// 2000 is a multiple of 400 so the offset follows the same rule as the
/// civil year it stands for.
pub const fn is_leap_year(year_offset: u32) -> bool {
    year_offset % 4 == 0 && (year_offset % 100 != 0 || year_offset % 400 == 0)
}

/// Leap days contained in the offsets `0..year_offset`.
const fn leap_days_before(year_offset: u32) -> u32 {
    (year_offset + 3) / 4 - (year_offset + 99) / 100 + (year_offset + 399) / 400
}

/// Days elapsed between 2000-01-01 and the given date.
///
/// `year` may be a full year (2000 or later) or an offset from 2000.
pub fn days_since_epoch(year: u16, month: u8, day: u8) -> u32 {
    let year_offset = u32::from(if year >= 2000 { year - 2000 } else { year });
    let mut days = u32::from(day);
    days += DAYS_IN_MONTH
        .iter()
        .take(usize::from(month.saturating_sub(1)))
        .map(|&len| u32::from(len))
        .sum::<u32>();
    if month > 2 && is_leap_year(year_offset) {
        days += 1;
    }
    (days + 365 * year_offset + leap_days_before(year_offset)).wrapping_sub(1)
}

/// Seconds represented by a day count plus a time of day.
pub fn seconds_from_components(days: u32, hour: u8, minute: u8, second: u8) -> i64 {
    ((i64::from(days) * 24 + i64::from(hour)) * 60 + i64::from(minute)) * 60 + i64::from(second)
}

/// Day of the week, Monday is 1 and Sunday is 7.
pub fn day_of_week(year: u16, month: u8, day: u8) -> u8 {
    // 2000-01-01 was a Saturday
    match (u64::from(days_since_epoch(year, month, day)) + 6) % 7 {
        0 => 7,
        dow => dow as u8,
    }
}

/// Split a day count since 2000-01-01 into year offset, month and day of month.
pub fn civil_from_days(days: u32) -> (u8, u8, u8) {
    let mut days = days;
    let mut year_offset: u8 = 0;
    loop {
        let year_len = if is_leap_year(u32::from(year_offset)) { 366 } else { 365 };
        if days < year_len {
            break;
        }
        days -= year_len;
        year_offset = year_offset.wrapping_add(1);
    }

    let leap = is_leap_year(u32::from(year_offset));
    let mut month: u8 = 1;
    for &len in DAYS_IN_MONTH.iter() {
        let len = u32::from(len) + u32::from(leap && month == 2);
        if days < len {
            break;
        }
        days -= len;
        month += 1;
    }
    (year_offset, month, days as u8 + 1)
}
