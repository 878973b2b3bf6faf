//! Slice-based record supplier.

use thiserror::Error;

#[cfg(feature = "log")]
use log::debug;

use crate::record::{RECORD_LENGTH, RawRecord};

/// Errors occurring while fetching from a slice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Records are numbered from 1.
    #[error("Record numbers start at 1.")]
    InvalidIndex,
    /// The slice holds fewer records than requested.
    #[error("Reached the end of the slice before record {index}.")]
    EndOfSlice { index: u64 },
}

/// Fetch the `index`th record (from 1) of a slice of concatenated records.
///
/// This method is also re-exported as
/// `heavyweather::supplier::get_record_slice`.
pub fn get_record(r: &[u8], index: u64) -> Result<RawRecord, Error> {
    let start = super::offset(index).ok_or(Error::InvalidIndex)?;

    #[cfg(feature = "log")]
    debug!("Fetching record {index} at offset {start}.");

    usize::try_from(start)
        .ok()
        .and_then(|s| r.get(s..s.checked_add(RECORD_LENGTH)?))
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::EndOfSlice { index })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> [u8; 2 * RECORD_LENGTH + 10] {
        let mut d = [0; 2 * RECORD_LENGTH + 10];
        d[..RECORD_LENGTH].fill(1);
        d[RECORD_LENGTH..2 * RECORD_LENGTH].fill(2);
        d[2 * RECORD_LENGTH..].fill(3);
        d
    }

    #[test]
    fn fetches_by_position() {
        assert_eq!(get_record(&data(), 1), Ok([1; RECORD_LENGTH]));
        assert_eq!(get_record(&data(), 2), Ok([2; RECORD_LENGTH]));
    }

    #[test]
    fn rejects_record_zero() {
        assert_eq!(get_record(&data(), 0), Err(Error::InvalidIndex));
    }

    #[test]
    fn skips_partial_records() {
        assert_eq!(get_record(&data(), 3), Err(Error::EndOfSlice { index: 3 }));
        assert_eq!(
            get_record(&data(), u64::MAX),
            Err(Error::EndOfSlice { index: u64::MAX })
        );
        assert_eq!(get_record(&[], 1), Err(Error::EndOfSlice { index: 1 }));
    }
}
