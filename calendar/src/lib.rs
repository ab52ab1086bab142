//! Calendar and time arithmetic for real-time clock chips.
//!
//! The clock keeps a civil timestamp counted from 2000-01-01 00:00:00 with no
//! time zone, daylight saving or leap second handling. [`DateTime`] is that
//! timestamp, [`TimeSpan`] a signed distance between two of them, and [`bcd`]
//! the packed-decimal codec used by the device registers.
//!
//! Nothing in here validates its input. Out of range fields produce a defined
//! but meaningless result, the same as the registers would.
#![deny(unsafe_code)]
#![no_std]

pub mod bcd;
pub mod math;

mod datetime;
mod timespan;

pub use crate::datetime::{DateTime, DateTimeSource};
pub use crate::timespan::TimeSpan;
