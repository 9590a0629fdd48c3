//! Caller-facing reading returned by a sample.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Timestamp layout used in every [`Measurement`], e.g. `2024-05-01T12:30:00Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Identity of the device that produced a reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorInfo {
    pub maker: String,
    pub model: String,
    pub serial: Option<String>,
    pub version: Option<String>,
}

impl SensorInfo {
    pub fn bmp280() -> Self {
        Self {
            maker: "Bosch Sensortec".into(),
            model: "BMP280".into(),
            serial: None,
            version: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub name: String,
    pub unit: String,
    pub value: f64,
    pub timestamp: String,
}

impl Measurement {
    pub fn new(name: &str, unit: &str, value: f64, at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            value,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn temperature(celsius: f64, at: DateTime<Utc>) -> Self {
        Self::new("temperature", "C", celsius, at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub sensor: SensorInfo,
    pub measurements: Vec<Measurement>,
}

impl SensorReading {
    /// Looks up a measurement by name.
    pub fn measurement(&self, name: &str) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.name == name)
    }
}
