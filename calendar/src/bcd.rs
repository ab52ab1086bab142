//! Binary-coded decimal conversion

/// Decode a packed two digit BCD byte.
///
/// Nibbles above 9 are not rejected, `0x0F` decodes as 15.
pub const fn bcd_to_int(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}

/// Encode a value in `0..=99` as packed BCD.
///
/// Larger values silently overflow the tens nibble.
pub const fn int_to_bcd(value: u8) -> u8 {
    (value / 10) << 4 | (value % 10)
}
