//! Error types for the sun clock

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("date text {text:?} has {found} numeric fields, expected day, month and year")]
    MissingDateField { text: String, found: usize },

    #[error("invalid number in date text: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("{hour:02}:{minute:02} is not a valid time of day")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("{0} must be a finite number")]
    NonFiniteValue(&'static str),

    #[error("UTC offset of {0} minutes is outside one day")]
    UtcOffsetOutOfRange(i32),

    #[error("instant is outside the supported calendar range")]
    InstantOutOfRange,

    #[error("{0:?} is not a valid date/time format")]
    InvalidFormat(String),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
