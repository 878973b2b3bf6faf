//! Decoding of raw history records.
//!
//! A record is a fixed 36-byte slice. Multi-byte values are stored
//! little-endian, as written by the station software:
//!
//! | Bytes   | Value                                    |
//! |---------|------------------------------------------|
//! | 0 - 3   | Format tag, uninterpreted.               |
//! | 4 - 7   | Timestamp, `u32` seconds.                |
//! | 8 - 11  | Pressure, `f32` hPa.                     |
//! | 12 - 15 | Wind speed, `f32` m/s.                   |
//! | 16      | Wind direction, compass point `0..16`.   |
//! | 17 - 19 | Blank.                                   |
//! | 20 - 23 | Total rainfall, `f32` mm.                |
//! | 24 - 27 | Indoor temperature, `f32` °C.            |
//! | 28 - 31 | Outdoor temperature, `f32` °C.           |
//! | 32      | Indoor humidity, `u8` %.                 |
//! | 33      | Blank.                                   |
//! | 34      | Outdoor humidity, `u8` %.                |
//! | 35      | Blank.                                   |
//!
//! Decoding never fails. Readings holding their 'no data' marker (see
//! [`sentinel`]) are decoded as `None`.

pub mod compass;
pub mod sentinel;

use zerocopy::FromBytes;

#[cfg(feature = "log")]
use log::trace;

use compass::WindDirection;
use sentinel::Field;

/// Length of a single record, in bytes.
pub const RECORD_LENGTH: usize = 36;

/// The undecoded bytes of a single record.
pub type RawRecord = [u8; RECORD_LENGTH];

/// The leading bytes of a record.
///
/// These probably specify the units used in the file, but their meaning has
/// not been established. They are kept as found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormatTag(pub [u8; 4]);

/// Wind speed and direction, which are only ever absent together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    /// Speed, in m/s.
    pub speed: f32,
    pub direction: WindDirection,
}

/// A decoded record.
///
/// Readings are `None` where the record holds the 'no data' marker for that
/// sensor. Dew point and wind chill are not stored by the station and have no
/// field here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedRecord {
    pub format_tag: FormatTag,
    /// Seconds since the station's epoch. See [`crate::time::EpochShift`].
    pub timestamp_raw: u32,
    /// Pressure, in hPa.
    pub pressure: Option<f32>,
    pub wind: Option<Wind>,
    /// Total rainfall, in mm.
    pub rain_total: f32,
    /// Indoor temperature, in °C.
    pub indoor_temperature: f32,
    /// Outdoor temperature, in °C.
    pub outdoor_temperature: Option<f32>,
    /// Indoor relative humidity, in %.
    pub indoor_humidity: Option<u8>,
    /// Outdoor relative humidity, in %.
    pub outdoor_humidity: Option<u8>,
}

impl DecodedRecord {
    /// Wind speed, in m/s.
    pub fn wind_speed(&self) -> Option<f32> {
        self.wind.map(|w| w.speed)
    }

    pub fn wind_direction(&self) -> Option<WindDirection> {
        self.wind.map(|w| w.direction)
    }
}

#[repr(C, packed)]
#[derive(Debug, FromBytes)]
struct Layout {
    format_tag: [u8; 4],
    timestamp: [u8; 4],
    pressure: [u8; 4],
    wind_speed: [u8; 4],
    wind_direction: u8,
    _blank: [u8; 3],
    rain_total: [u8; 4],
    indoor_temperature: [u8; 4],
    outdoor_temperature: [u8; 4],
    indoor_humidity: u8,
    _reserved_a: u8,
    outdoor_humidity: u8,
    _reserved_b: u8,
}

/// Decode a single record.
pub fn decode(r: RawRecord) -> DecodedRecord {
    let Layout {
        format_tag,
        timestamp,
        pressure,
        wind_speed,
        wind_direction,
        rain_total,
        indoor_temperature,
        outdoor_temperature,
        indoor_humidity,
        outdoor_humidity,
        ..
    } = zerocopy::transmute!(r);

    let wind = float(Field::WindSpeed, wind_speed).map(|speed| Wind {
        speed,
        direction: WindDirection(wind_direction),
    });

    DecodedRecord {
        format_tag: FormatTag(format_tag),
        timestamp_raw: u32::from_le_bytes(timestamp),
        pressure: float(Field::Pressure, pressure),
        wind,
        rain_total: f32::from_le_bytes(rain_total),
        indoor_temperature: f32::from_le_bytes(indoor_temperature),
        outdoor_temperature: float(Field::OutdoorTemperature, outdoor_temperature),
        indoor_humidity: byte(Field::IndoorHumidity, indoor_humidity),
        outdoor_humidity: byte(Field::OutdoorHumidity, outdoor_humidity),
    }
}

/// Decode a little-endian float, unless it holds the field's marker.
fn float(field: Field, r: [u8; 4]) -> Option<f32> {
    let value = f32::from_le_bytes(r);
    screen(field, &r, value).then_some(value)
}

/// Read a single byte, unless it holds the field's marker.
fn byte(field: Field, r: u8) -> Option<u8> {
    screen(field, &[r], f32::from(r)).then_some(r)
}

/// Returns true if the value is present.
fn screen(field: Field, r: &[u8], value: f32) -> bool {
    let marked = field.sentinel().is_marked(r, value);

    #[cfg(feature = "log")]
    if marked {
        trace!("{field:?} holds its no-data marker ({r:02X?})");
    }

    !marked
}
