//! Reader-based record supplier.
//!
//! _Requires Cargo feature `std`._

use std::{
    fs::File,
    io::{ErrorKind, Read, Seek, SeekFrom},
    path::Path,
};

use thiserror::Error;

#[cfg(feature = "log")]
use log::debug;

use crate::record::{RECORD_LENGTH, RawRecord};

/// Errors occurring while fetching from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader, including a missing file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Records are numbered from 1.
    #[error("Record numbers start at 1.")]
    InvalidIndex,
    /// The reader holds fewer records than requested.
    #[error("Premature end of file before record {index}.")]
    EndOfFile { index: u64 },
}

/// Fetch the `index`th record (from 1) from a seekable reader of
/// concatenated records.
///
/// This method is also re-exported as
/// `heavyweather::supplier::get_record_reader`.
pub fn get_record(r: &mut (impl Read + Seek), index: u64) -> Result<RawRecord, Error> {
    let start = super::offset(index).ok_or(Error::InvalidIndex)?;

    #[cfg(feature = "log")]
    debug!("Fetching record {index} at offset {start}.");

    // Beyond any file, and beyond what `seek` accepts.
    if start > i64::MAX as u64 {
        Err(Error::EndOfFile { index })?;
    }

    r.seek(SeekFrom::Start(start))?;

    let mut buf = [0; RECORD_LENGTH];
    r.read_exact(&mut buf).map_err(|err| match err.kind() {
        ErrorKind::UnexpectedEof => Error::EndOfFile { index },
        _ => Error::Io(err),
    })?;

    Ok(buf)
}

/// Open a history file and fetch its `index`th record (from 1).
pub fn open_record(path: impl AsRef<Path>, index: u64) -> Result<RawRecord, Error> {
    if index == 0 {
        Err(Error::InvalidIndex)?;
    }

    let mut file = File::open(path)?;
    get_record(&mut file, index)
}
