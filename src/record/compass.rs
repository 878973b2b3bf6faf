//! Compass points for wind direction.

/// Abbreviations of the sixteen compass points, clockwise from north.
///
/// Single-letter points carry a trailing space, as in the station's own text
/// exports.
pub const ABBREVIATIONS: [&str; 16] = [
    "N ", "NNE", "NE", "ENE", "E ", "ESE", "SE", "SSE", "S ", "SSW", "SW", "WSW", "W ", "WNW", "NW",
    "NNW",
];

/// A wind direction, as an index of a compass point clockwise from north.
///
/// Valid indices are `0..16`. Larger values can be stored by the format but
/// have no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindDirection(pub u8);

impl WindDirection {
    /// Angle between adjacent compass points, in degrees.
    pub const STEP_DEG: f32 = 22.5;

    /// Abbreviation of the compass point, if the index is valid.
    pub fn abbreviation(self) -> Option<&'static str> {
        ABBREVIATIONS.get(self.0 as usize).copied()
    }

    /// Bearing clockwise from north, if the index is valid.
    pub fn degrees(self) -> Option<f32> {
        self.abbreviation().map(|_| f32::from(self.0) * Self::STEP_DEG)
    }
}
