//! Print a single record of a Heavy Weather `history.dat` file.
//!
//! Run with `--help` for usage. Set `RUST_LOG=debug` for traces.

mod cli;

use std::{ffi::OsString, process::ExitCode};

use env_logger::{Builder, Env, Target};
use heavyweather::{format, supplier::reader};
use log::debug;
use thiserror::Error;

use cli::{Cli, Layout};

#[derive(Debug, Error)]
pub enum Error {
    #[error("must give number of record to read (>= 1)")]
    MissingInput,
    #[error("record not found: {0}")]
    RecordNotFound(reader::Error),
}

impl From<reader::Error> for Error {
    fn from(err: reader::Error) -> Self {
        match err {
            reader::Error::InvalidIndex => Self::MissingInput,
            err => Self::RecordNotFound(err),
        }
    }
}

/// Parse arguments. Help and version requests exit here; any other usage
/// error is reported as missing input.
fn parse<I, T>(args: I) -> Result<Cli, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_from_args(args).map_err(|err| {
        if !err.use_stderr() {
            err.exit();
        }

        debug!("Invalid arguments: {err}");
        Error::MissingInput
    })
}

fn run(cli: &Cli) -> Result<String, Error> {
    let index = cli.index().ok_or(Error::MissingInput)?;
    let path = cli.file();

    debug!("Reading record {index} of {}.", path.display());

    let raw = reader::open_record(path, index)?;
    let record = heavyweather::decode(raw);

    debug!("Decoded {record:?}.");

    Ok(match cli.layout() {
        Layout::Compact => {
            format::compact(&record, &record.calendar_timestamp(cli.epoch_shift()))
        }
        Layout::CompactRawDate => format::compact_raw_date(&record),
        Layout::Verbose => {
            format::verbose(&record, &record.calendar_timestamp(cli.epoch_shift()))
        }
    })
}

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp_secs()
        .init();

    match parse(std::env::args_os()).and_then(|cli| run(&cli)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("{err:?}");
            eprintln!("Error, {err}.");
            ExitCode::FAILURE
        }
    }
}
