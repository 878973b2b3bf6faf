#![cfg_attr(not(feature = "std"), no_std)]

//! A decoder for the binary `history.dat` records written by Heavy Weather
//! weather stations.
//!
//! Each record is a fixed 36-byte slice holding pressure, temperature,
//! humidity, wind and rainfall readings, plus a station-local timestamp.
//! Sensors that were unavailable are marked by reserved byte patterns rather
//! than real values; these are surfaced as `None`.
//!
//! Most users should fetch a record with one of the functions in the
//! [`supplier`] module, pass it to [`decode`], and render the result with the
//! [`format`] module.
//!
//! ```ignore
//! let raw = heavyweather::supplier::reader::open_record("history.dat", 1)?;
//! let record = heavyweather::decode(&raw);
//! let time = record.calendar_timestamp(EpochShift::default());
//! println!("{}", heavyweather::format::compact(&record, &time));
//! ```
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable timestamp conversion, formatting, and the reader-based
//!   supplier (default).
//! - `log`: emit debug traces through the `log` facade.

pub mod record;
pub mod supplier;

#[cfg(feature = "std")]
pub mod format;
#[cfg(feature = "std")]
pub mod time;

pub use record::{DecodedRecord, RECORD_LENGTH, RawRecord, decode};

#[cfg(feature = "std")]
pub use time::{CalendarTimestamp, EpochShift};
