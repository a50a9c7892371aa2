use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Observer location in degrees. Positive latitude is north, positive longitude is east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() {
            return Err(Error::NonFiniteValue("latitude"));
        }
        if !longitude.is_finite() {
            return Err(Error::NonFiniteValue("longitude"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Where the sun sits in the sky, in degrees.
///
/// Azimuth is measured from south, positive toward west.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Equatorial coordinates of the sun, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoordinates {
    pub declination: f64,
    pub right_ascension: f64,
}

/// Scene axis the sun rises along when no live heading reference is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CardinalDirection {
    #[default]
    PositiveX,
    PositiveZ,
    NegativeX,
    NegativeZ,
}

impl CardinalDirection {
    pub fn degrees(self) -> f64 {
        match self {
            CardinalDirection::PositiveX => 0.0,
            CardinalDirection::PositiveZ => -90.0,
            CardinalDirection::NegativeZ => 90.0,
            CardinalDirection::NegativeX => 180.0,
        }
    }
}

/// Payload handed to subscribers every time the clock publishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunUpdate {
    pub instant: NaiveDateTime,
    pub sky: SkyPosition,
    pub rotation_offset: f64,
}

impl SunUpdate {
    /// (pitch, yaw) in degrees: altitude about the horizontal axis, azimuth plus the
    /// scene offset about the vertical axis.
    pub fn euler_angles(&self) -> (f64, f64) {
        (self.sky.altitude, self.sky.azimuth + self.rotation_offset)
    }
}
