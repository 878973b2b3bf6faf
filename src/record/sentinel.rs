//! 'No data' markers.
//!
//! The station marks unavailable readings with reserved values instead of
//! omitting them. Most markers are exact byte patterns, matched on the raw
//! bytes before decoding. Pressure is the exception: any value below a
//! threshold is treated as missing.
//!
//! The markers were deduced from recorded files, and may be incomplete.
//! Indoor temperature and total rainfall have no known marker.

/// A reserved value marking a reading as unavailable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sentinel {
    /// The raw bytes equal this pattern.
    Pattern([u8; 4]),
    /// The decoded value is strictly below this threshold.
    Below(f32),
    /// The decoded value is strictly above this limit.
    Above(f32),
}

impl Sentinel {
    /// Returns true if a reading holds this marker, given its raw bytes and
    /// its decoded value.
    pub fn is_marked(self, r: &[u8], value: f32) -> bool {
        match self {
            Self::Pattern(p) => r == p,
            Self::Below(threshold) => value < threshold,
            Self::Above(limit) => value > limit,
        }
    }
}

/// A reading with a known marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Pressure,
    /// Also marks the wind direction as unavailable.
    WindSpeed,
    OutdoorTemperature,
    IndoorHumidity,
    OutdoorHumidity,
}

impl Field {
    /// The marker used by this reading.
    pub const fn sentinel(self) -> Sentinel {
        match self {
            Self::Pressure => Sentinel::Below(700.0),
            Self::WindSpeed => Sentinel::Pattern([0x00, 0x00, 0x4C, 0x42]),
            // Decodes to roughly 81.1 °C.
            Self::OutdoorTemperature => Sentinel::Pattern([0x52, 0x38, 0xA2, 0x42]),
            Self::IndoorHumidity => Sentinel::Above(100.0),
            Self::OutdoorHumidity => Sentinel::Above(100.0),
        }
    }
}
