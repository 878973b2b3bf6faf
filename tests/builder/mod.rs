#![allow(dead_code)]

use heavyweather::{RECORD_LENGTH, RawRecord};

pub const WIND_MARKER: [u8; 4] = [0x00, 0x00, 0x4C, 0x42];
pub const OUTDOOR_TEMPERATURE_MARKER: [u8; 4] = [0x52, 0x38, 0xA2, 0x42];

/// Build raw records field by field, starting from all zeros.
#[derive(Debug, Clone, Copy)]
pub struct RecordBuilder(RawRecord);

impl RecordBuilder {
    pub fn new() -> Self {
        Self([0; RECORD_LENGTH])
    }

    fn put(mut self, at: usize, bytes: [u8; 4]) -> Self {
        self.0[at..at + 4].copy_from_slice(&bytes);
        self
    }

    pub fn format_tag(self, tag: [u8; 4]) -> Self {
        self.put(0, tag)
    }

    pub fn timestamp(self, t: u32) -> Self {
        self.put(4, t.to_le_bytes())
    }

    pub fn pressure(self, p: f32) -> Self {
        self.put(8, p.to_le_bytes())
    }

    pub fn wind_speed(self, s: f32) -> Self {
        self.put(12, s.to_le_bytes())
    }

    pub fn wind_speed_bytes(self, b: [u8; 4]) -> Self {
        self.put(12, b)
    }

    pub fn wind_direction(mut self, d: u8) -> Self {
        self.0[16] = d;
        self
    }

    pub fn rain_total(self, r: f32) -> Self {
        self.put(20, r.to_le_bytes())
    }

    pub fn indoor_temperature(self, t: f32) -> Self {
        self.put(24, t.to_le_bytes())
    }

    pub fn outdoor_temperature(self, t: f32) -> Self {
        self.put(28, t.to_le_bytes())
    }

    pub fn outdoor_temperature_bytes(self, b: [u8; 4]) -> Self {
        self.put(28, b)
    }

    pub fn indoor_humidity(mut self, h: u8) -> Self {
        self.0[32] = h;
        self
    }

    pub fn outdoor_humidity(mut self, h: u8) -> Self {
        self.0[34] = h;
        self
    }

    pub fn build(self) -> RawRecord {
        self.0
    }
}

/// A record with every reading available.
pub fn typical() -> RecordBuilder {
    RecordBuilder::new()
        .timestamp(2_240_611_800 + 3600)
        .pressure(1013.2)
        .indoor_temperature(21.5)
        .indoor_humidity(45)
        .outdoor_temperature(15.0)
        .outdoor_humidity(60)
        .wind_speed(3.2)
        .wind_direction(4)
        .rain_total(0.0)
}
