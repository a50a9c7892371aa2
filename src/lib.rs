pub mod angles;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod time;
pub mod types;

pub use angles::{
    altitude, azimuth, declination, deg_to_rad, ecliptic_longitude, equation_of_center,
    from_julian, normalize_angle, rad_to_deg, right_ascension, sidereal_time,
    solar_mean_anomaly, sun_coords, sun_position, sun_position_at, to_days, to_julian, DAY_MS,
    EARTH_OBLIQUITY, EARTH_PERIHELION, J1970, J2000,
};

pub use clock::{HeadingSource, RotationOffset, SubscriptionId, SunClock};

pub use config::{DisplayConfig, RotationConfig, StartingDate, StartingTime, SunClockConfig};

pub use display::DateTimeDisplay;

pub use error::{Error, Result};

pub use time::{
    date_at, day_fraction_to_time, local_to_utc, minutes_to_time, parse_day_month_year,
    time_reference, time_to_minutes, DATE_SEPARATORS, LAST_MINUTE_OF_DAY,
};

pub use types::{CardinalDirection, GeoCoordinate, SkyPosition, SunCoordinates, SunUpdate};
