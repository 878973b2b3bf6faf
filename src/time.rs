//! Conversion of record timestamps to calendar time.
//!
//! _Requires Cargo feature `std`._

use core::fmt;

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Utc, Weekday};

use crate::record::DecodedRecord;

/// Offset between the station's epoch and the Unix epoch, in seconds.
///
/// Record timestamps count seconds from (probably) the start of 1900. The
/// default shift was found by matching the first record of a file against the
/// station's text export, and may be off for some firmware versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EpochShift(pub u32);

impl EpochShift {
    pub const DEFAULT: Self = Self(2_240_611_800);

    /// Convert a record timestamp to seconds since the Unix epoch.
    ///
    /// Timestamps earlier than the shift produce negative values.
    pub fn to_unix(self, timestamp_raw: u32) -> i64 {
        i64::from(timestamp_raw) - i64::from(self.0)
    }
}

impl Default for EpochShift {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A wall-clock date and time.
///
/// Records carry no time zone. The station is assumed to share the viewer's
/// zone, so timestamps are usually rendered in [`Local`] time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarTimestamp(NaiveDateTime);

impl CalendarTimestamp {
    /// Derive a timestamp in the local time zone.
    pub fn from_raw(timestamp_raw: u32, shift: EpochShift) -> Self {
        Self::from_raw_in(timestamp_raw, shift, &Local)
    }

    /// Derive a timestamp in the given time zone.
    pub fn from_raw_in<Tz: TimeZone>(timestamp_raw: u32, shift: EpochShift, zone: &Tz) -> Self {
        // Every `u32` falls well within chrono's supported range.
        let instant = DateTime::<Utc>::from_timestamp(shift.to_unix(timestamp_raw), 0)
            .unwrap_or_default();

        Self(instant.with_timezone(zone).naive_local())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, from 1.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month, from 1.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Render in the layout of C's `asctime`, such as
    /// `Thu Jan  1 01:00:00 1970`.
    pub fn long(&self) -> impl fmt::Display + '_ {
        self.0.format("%a %b %e %H:%M:%S %Y")
    }
}

impl From<NaiveDateTime> for CalendarTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

/// Renders as `YYYY-MM-DD HH:MM:SS`.
impl fmt::Display for CalendarTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

impl DecodedRecord {
    /// Seconds since the Unix epoch at which this record was taken.
    pub fn unix_seconds(&self, shift: EpochShift) -> i64 {
        shift.to_unix(self.timestamp_raw)
    }

    /// The local date and time at which this record was taken.
    pub fn calendar_timestamp(&self, shift: EpochShift) -> CalendarTimestamp {
        CalendarTimestamp::from_raw(self.timestamp_raw, shift)
    }

    /// The date and time at which this record was taken, in a given zone.
    pub fn calendar_timestamp_in<Tz: TimeZone>(
        &self,
        shift: EpochShift,
        zone: &Tz,
    ) -> CalendarTimestamp {
        CalendarTimestamp::from_raw_in(self.timestamp_raw, shift, zone)
    }
}
