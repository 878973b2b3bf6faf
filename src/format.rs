//! Text renderings of decoded records.
//!
//! Two layouts are available, matching the station software's exports:
//!
//! - [`compact`]: a single tab-delimited row, for spreadsheets and scripts.
//!   The column order is fixed and must not change.
//! - [`verbose`]: a labelled report, one reading per line.
//!
//! Dew point and wind chill are not stored by the station; both layouts
//! always show them as unavailable.
//!
//! _Requires Cargo feature `std`._

use crate::{record::DecodedRecord, time::CalendarTimestamp};

/// Column separator of the compact row.
pub const SEPARATOR: &str = "\t";

/// Stand-in for an unavailable reading in the compact row.
pub const DASH: &str = "-";

/// Stand-in for an unavailable reading in the verbose report.
pub const NO_DATA: &str = "no data";

/// Number of columns in the compact row.
pub const COLUMNS: usize = 11;

/// Render a record as a single tab-delimited row, ending with the calendar
/// timestamp.
///
/// Columns are pressure, indoor temperature, indoor humidity, outdoor
/// temperature, outdoor humidity, dew point, wind chill, wind speed, wind
/// direction, total rainfall, and timestamp. No line terminator is added.
pub fn compact(record: &DecodedRecord, time: &CalendarTimestamp) -> String {
    let mut row = readings(record);
    row.push(time.to_string());
    row.join(SEPARATOR)
}

/// Render a record as a single tab-delimited row, ending with the
/// uncorrected station timestamp.
pub fn compact_raw_date(record: &DecodedRecord) -> String {
    let mut row = readings(record);
    row.push(record.timestamp_raw.to_string());
    row.join(SEPARATOR)
}

/// All compact columns but the timestamp.
fn readings(record: &DecodedRecord) -> Vec<String> {
    fn or_dash<T>(value: Option<T>, f: impl FnOnce(T) -> String) -> String {
        value.map_or_else(|| DASH.to_string(), f)
    }

    let (wind_speed, wind_direction) = match record.wind {
        Some(wind) => (
            decimal(wind.speed),
            // Unknown compass points are left blank.
            wind.direction.abbreviation().unwrap_or_default().to_string(),
        ),
        None => (DASH.to_string(), DASH.to_string()),
    };

    vec![
        or_dash(record.pressure, decimal),
        decimal(record.indoor_temperature),
        or_dash(record.indoor_humidity, |h| h.to_string()),
        or_dash(record.outdoor_temperature, decimal),
        or_dash(record.outdoor_humidity, |h| h.to_string()),
        DASH.to_string(), // Dew point.
        DASH.to_string(), // Wind chill.
        wind_speed,
        wind_direction,
        decimal(record.rain_total),
    ]
}

/// Render a record as a labelled report, one reading per line.
///
/// No final line terminator is added.
pub fn verbose(record: &DecodedRecord, time: &CalendarTimestamp) -> String {
    let mut lines = Vec::with_capacity(11);

    lines.push(format!("Date:                 {}", time.long()));

    lines.push(match record.pressure {
        Some(p) => format!("Pressure:            {:>6}  hPa", decimal(p)),
        None => format!("Pressure:              {NO_DATA}"),
    });

    lines.push(format!(
        "Indoor  temperature:   {:<4} °C",
        decimal(record.indoor_temperature)
    ));
    lines.push(format!(
        "Indoor  humidity:      {}",
        humidity(record.indoor_humidity)
    ));

    lines.push(match record.outdoor_temperature {
        Some(t) => format!("Outdoor temperature:   {:<4} °C", decimal(t)),
        None => format!("Outdoor temperature:   {NO_DATA}"),
    });
    lines.push(format!(
        "Outdoor humidity:      {}",
        humidity(record.outdoor_humidity)
    ));

    lines.push(format!("Dew point:             {NO_DATA}"));
    lines.push(format!("Wind chill:            {NO_DATA}"));

    match record.wind {
        Some(wind) => {
            lines.push(format!(
                "Wind speed:            {}  m/s",
                space_signed(wind.speed, 4)
            ));
            lines.push(format!(
                "Wind direction:         {}",
                wind.direction.abbreviation().unwrap_or_default()
            ));
        }
        None => {
            lines.push(format!("Wind speed:            {NO_DATA}"));
            lines.push(format!("Wind direction:        {NO_DATA}"));
        }
    }

    lines.push(format!(
        "Total rainfall:      {}  mm",
        space_signed(record.rain_total, 6)
    ));

    lines.join("\n")
}

fn humidity(value: Option<u8>) -> String {
    match value {
        Some(h) => format!("{h}    %"),
        None => NO_DATA.to_string(),
    }
}

/// Format with one fraction digit. Not-a-number renders as `nan`, as the
/// station software's exports do.
fn decimal(value: f32) -> String {
    match value {
        v if v.is_nan() && v.is_sign_negative() => "-nan".to_string(),
        v if v.is_nan() => "nan".to_string(),
        v => format!("{v:.1}"),
    }
}

/// Format with one fraction digit, reserving a leading space in place of a
/// plus sign, then right-align to `width`.
fn space_signed(value: f32, width: usize) -> String {
    let s = decimal(value);
    let s = if s.starts_with('-') { s } else { format!(" {s}") };
    format!("{s:>width$}")
}
