//! Fetching raw records from a history file.
//!
//! A history file is a plain concatenation of 36-byte records, oldest first.
//! Records are numbered from 1; the `n`th record starts `(n - 1) * 36` bytes
//! into the file. A trailing partial record is never returned.
//!
//! Use [`slice`] when the file is already in memory, or [`reader`] to seek
//! within an open file.

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::get_record as get_record_reader;
pub use slice::get_record as get_record_slice;

use crate::record::RECORD_LENGTH;

/// Byte offset of a record, or `None` for record 0.
///
/// Offsets too large to represent saturate, and so always fall past the end
/// of the data.
fn offset(index: u64) -> Option<u64> {
    let n = index.checked_sub(1)?;
    Some(n.saturating_mul(RECORD_LENGTH as u64))
}
