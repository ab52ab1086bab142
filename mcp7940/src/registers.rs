//! Register block encoding
//!
//! Conversions between raw register bytes and calendar values. Nothing here
//! touches the bus; the driver reads or writes the blocks and hands them
//! over.
//!
//! | Block         | Start | Bytes                                        |
//! |---------------|-------|----------------------------------------------|
//! | timekeeping   | 0x00  | sec, min, hour, weekday, date, month, year   |
//! | alarm 0       | 0x0A  | sec, min, hour, weekday, date, month         |
//! | alarm 1       | 0x11  | sec, min, hour, weekday, date, month         |
//! | power down    | 0x18  | min, hour, date, month                       |
//! | power up      | 0x1C  | min, hour, date, month                       |

use calendar::bcd::{bcd_to_int, int_to_bcd};
use calendar::DateTime;

use crate::{AlarmMatching, BitFlags};

const SECONDS_MASK: u8 = 0x7F;
const MINUTES_MASK: u8 = 0x7F;
const HOURS_24_MASK: u8 = 0x3F;
const HOURS_12_MASK: u8 = 0x1F;
const DATE_MASK: u8 = 0x3F;
const MONTH_MASK: u8 = 0x1F;
const TRIM_MAGNITUDE: u8 = 0x7F;

/// Decode an hours register in either 12 or 24 hour mode into 0..=23.
pub fn decode_hours(raw: u8) -> u8 {
    if raw & BitFlags::H24_H12 == 0 {
        return bcd_to_int(raw & HOURS_24_MASK);
    }
    let hour = bcd_to_int(raw & HOURS_12_MASK);
    match (hour, raw & BitFlags::AM_PM != 0) {
        (12, false) => 0,
        (12, true) => 12,
        (hour, true) => hour + 12,
        (hour, false) => hour,
    }
}

/// Decode the seven timekeeping registers starting at RTCSEC.
pub fn decode_timekeeping(block: &[u8; 7]) -> DateTime {
    DateTime::from_ymd_hms(
        u16::from(bcd_to_int(block[6])),
        bcd_to_int(block[5] & MONTH_MASK),
        bcd_to_int(block[4] & DATE_MASK),
        decode_hours(block[2]),
        bcd_to_int(block[1] & MINUTES_MASK),
        bcd_to_int(block[0] & SECONDS_MASK),
    )
}

/// Encode `datetime` into the timekeeping registers.
///
/// `current` is the block as read from the device. Only the status flags of
/// the weekday register are carried over. The result has the oscillator
/// start bit cleared and the hours in 24 hour mode.
pub fn encode_timekeeping(datetime: &DateTime, current: &[u8; 7]) -> [u8; 7] {
    let flags = current[3] & !BitFlags::WEEKDAY;
    [
        int_to_bcd(datetime.second()) & SECONDS_MASK,
        int_to_bcd(datetime.minute()),
        int_to_bcd(datetime.hour()) & HOURS_24_MASK,
        flags | (datetime.day_of_the_week() & BitFlags::WEEKDAY),
        int_to_bcd(datetime.day()),
        int_to_bcd(datetime.month()),
        int_to_bcd(datetime.year_offset()),
    ]
}

/// Decode the six registers of an alarm.
///
/// Alarms carry no year, the result is always in 2000. The matching mode is
/// `None` when the mask bits hold one of the reserved values.
pub fn decode_alarm(block: &[u8; 6]) -> (DateTime, Option<AlarmMatching>) {
    let datetime = DateTime::from_ymd_hms(
        0,
        bcd_to_int(block[5] & MONTH_MASK),
        bcd_to_int(block[4] & DATE_MASK),
        decode_hours(block[2]),
        bcd_to_int(block[1] & MINUTES_MASK),
        bcd_to_int(block[0] & SECONDS_MASK),
    );
    let matching = AlarmMatching::from_bits((block[3] & BitFlags::ALM_MASK) >> 4);
    (datetime, matching)
}

/// Encode an alarm. The polarity bit of `current_weekday` is kept and the
/// interrupt flag cleared.
pub fn encode_alarm(datetime: &DateTime, matching: AlarmMatching, current_weekday: u8) -> [u8; 6] {
    let weekday = (current_weekday & BitFlags::ALMPOL)
        | ((matching as u8) << 4)
        | (datetime.day_of_the_week() & BitFlags::WEEKDAY);
    [
        int_to_bcd(datetime.second()) & SECONDS_MASK,
        int_to_bcd(datetime.minute()),
        int_to_bcd(datetime.hour()) & HOURS_24_MASK,
        weekday,
        int_to_bcd(datetime.day()),
        int_to_bcd(datetime.month()),
    ]
}

/// Decode a power-fail time-stamp. Year and seconds are not recorded by the
/// device and come back as 2000 and 0.
pub fn decode_power_timestamp(block: &[u8; 4]) -> DateTime {
    DateTime::from_ymd_hms(
        0,
        bcd_to_int(block[3] & MONTH_MASK),
        bcd_to_int(block[2] & DATE_MASK),
        decode_hours(block[1]),
        bcd_to_int(block[0] & MINUTES_MASK),
        0,
    )
}

/// Digital trim value as sign and magnitude, magnitude limited to 127.
pub fn encode_trim(trim: i8) -> u8 {
    let magnitude = trim.unsigned_abs().min(TRIM_MAGNITUDE);
    if trim < 0 {
        BitFlags::TRIM_SIGN | magnitude
    } else {
        magnitude
    }
}

pub fn decode_trim(raw: u8) -> i8 {
    let magnitude = (raw & TRIM_MAGNITUDE) as i8;
    if raw & BitFlags::TRIM_SIGN != 0 {
        -magnitude
    } else {
        magnitude
    }
}
