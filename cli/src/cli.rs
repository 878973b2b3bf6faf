use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command, value_parser};
use heavyweather::EpochShift;

/// Output layout selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Tab-delimited row ending with the calendar timestamp.
    Compact,
    /// Tab-delimited row ending with the station's own timestamp.
    CompactRawDate,
    /// Labelled report.
    Verbose,
}

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Cli {
    /// Parse a given list of arguments, including the program name.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self {
            matches: Self::command().try_get_matches_from(args)?,
        })
    }

    fn command() -> Command {
        Command::new("hwread")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Read a record from a Heavy Weather history.dat file")
            .long_about(
                "Decode a single record of a Heavy Weather history.dat file
and print it as a tab-delimited row:

pressure, indoor temperature, indoor humidity, outdoor temperature,
outdoor humidity, dew point, wind chill, wind speed, wind direction,
total rainfall, date and time.

Unavailable readings are printed as '-'.",
            )
            .color(ColorChoice::Auto)
            .arg(
                Arg::new("index")
                    .value_name("INDEX")
                    .allow_negative_numbers(true)
                    .help("Number of the record to read, from 1."),
            )
            .arg(
                Arg::new("file")
                    .short('f')
                    .long("file")
                    .value_name("FILE")
                    .value_parser(value_parser!(PathBuf))
                    .default_value("history.dat")
                    .help("History file to read."),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Print a labelled report instead of a single row."),
            )
            .arg(
                Arg::new("raw-date")
                    .long("raw-date")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("verbose")
                    .help("End the row with the station's uncorrected timestamp."),
            )
            .arg(
                Arg::new("epoch-shift")
                    .long("epoch-shift")
                    .value_name("SECONDS")
                    .value_parser(value_parser!(u32))
                    .help("Seconds between the station's epoch and 1970-01-01.")
                    .long_help(
                        "Seconds between the station's epoch and 1970-01-01.
The default (2240611800) matches the station software's own text exports,
but may be off for some firmware versions.",
                    ),
            )
    }

    /// Record number requested by the user, if given as a number.
    pub fn index(&self) -> Option<u64> {
        self.matches
            .get_one::<String>("index")
            .and_then(|s| s.trim().parse().ok())
    }

    pub fn file(&self) -> &Path {
        self.matches
            .get_one::<PathBuf>("file")
            .map(PathBuf::as_path)
            .unwrap_or(Path::new("history.dat"))
    }

    pub fn layout(&self) -> Layout {
        if self.matches.get_flag("verbose") {
            Layout::Verbose
        } else if self.matches.get_flag("raw-date") {
            Layout::CompactRawDate
        } else {
            Layout::Compact
        }
    }

    pub fn epoch_shift(&self) -> EpochShift {
        self.matches
            .get_one::<u32>("epoch-shift")
            .map(|s| EpochShift(*s))
            .unwrap_or_default()
    }
}
