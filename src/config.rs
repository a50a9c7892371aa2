//! Clock configuration, loadable from JSON.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::angles::normalize_angle;
use crate::error::{Error, Result};
use crate::types::CardinalDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl Default for StartingDate {
    fn default() -> Self {
        Self {
            day: 11,
            month: 10,
            year: 1996,
        }
    }
}

/// Clock time used at startup and combined with every free-text date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingTime {
    pub hour: u32,
    pub minute: u32,
}

impl Default for StartingTime {
    fn default() -> Self {
        Self {
            hour: 12,
            minute: 30,
        }
    }
}

/// Fixed rotation offset used when no live heading source is attached.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub sunrise_direction: CardinalDirection,
    /// Extra yaw in degrees, normalized into [0, 360).
    pub fine_tune: f64,
}

impl RotationConfig {
    pub fn normalized_fine_tune(&self) -> f64 {
        normalize_angle(self.fine_tune)
    }
}

/// Overlay text settings. Color and size are passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub time_format: String,
    pub date_format: String,
    pub font_size: u32,
    /// Linear RGBA.
    pub text_color: [f32; 4],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: "%H:%M".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            font_size: 30,
            text_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl DisplayConfig {
    /// Rejects strftime strings chrono cannot parse.
    pub fn validate(&self) -> Result<()> {
        for fmt in [&self.time_format, &self.date_format] {
            if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
                return Err(Error::InvalidFormat(fmt.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunClockConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub date: StartingDate,
    pub time: StartingTime,
    /// Minutes of simulated time per second of real time at full scrub input.
    pub sun_speed: f64,
    /// Offset of the clock's civil time east of UTC, in minutes.
    pub utc_offset_minutes: i32,
    pub rotation: RotationConfig,
    pub display: DisplayConfig,
}

impl Default for SunClockConfig {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            date: StartingDate::default(),
            time: StartingTime::default(),
            sun_speed: 100.0,
            utc_offset_minutes: 0,
            rotation: RotationConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl SunClockConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.display.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
