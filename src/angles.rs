//! Low-precision solar ephemeris after the Astronomy Answers formulas
//! (http://aa.quae.nl/en/reken/zonpositie.html) as popularised by SunCalc.
//!
//! All trigonometry is in radians; the public position functions take and return degrees.

use std::f64::consts::PI;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::types::{SkyPosition, SunCoordinates};

/// Milliseconds in a day.
pub const DAY_MS: f64 = 1000.0 * 60.0 * 60.0 * 24.0;
/// 1970-01-01 12:00 UTC as a Julian date.
pub const J1970: f64 = 2_440_588.0;
/// 2000-01-01 12:00 UTC as a Julian date.
pub const J2000: f64 = 2_451_545.0;
/// Obliquity of the ecliptic, degrees.
pub const EARTH_OBLIQUITY: f64 = 23.4397;
/// Longitude of Earth's perihelion, degrees.
pub const EARTH_PERIHELION: f64 = 102.9372;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Julian date of a UTC instant.
pub fn to_julian(instant: &NaiveDateTime) -> f64 {
    instant.and_utc().timestamp_millis() as f64 / DAY_MS - 0.5 + J1970
}

/// Inverse of [`to_julian`], to millisecond resolution. `None` outside chrono's range.
pub fn from_julian(julian: f64) -> Option<NaiveDateTime> {
    let millis = ((julian + 0.5 - J1970) * DAY_MS).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64).map(|dt| dt.naive_utc())
}

/// Days (fractional) since 2000-01-01 12:00 UTC.
pub fn to_days(instant: &NaiveDateTime) -> f64 {
    to_julian(instant) - J2000
}

pub fn solar_mean_anomaly(days: f64) -> f64 {
    deg_to_rad(357.5291 + 0.98560028 * days)
}

/// Difference between true and mean anomaly, radians.
pub fn equation_of_center(mean_anomaly: f64) -> f64 {
    let m = mean_anomaly;
    deg_to_rad(1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin())
}

pub fn ecliptic_longitude(mean_anomaly: f64) -> f64 {
    mean_anomaly + equation_of_center(mean_anomaly) + deg_to_rad(EARTH_PERIHELION) + PI
}

pub fn declination(longitude: f64, latitude: f64) -> f64 {
    let e = deg_to_rad(EARTH_OBLIQUITY);
    (latitude.sin() * e.cos() + latitude.cos() * e.sin() * longitude.sin()).asin()
}

pub fn right_ascension(longitude: f64, latitude: f64) -> f64 {
    let e = deg_to_rad(EARTH_OBLIQUITY);
    (longitude.sin() * e.cos() - latitude.tan() * e.sin()).atan2(longitude.cos())
}

/// Local sidereal time in radians; `lw` is the west longitude in radians.
pub fn sidereal_time(days: f64, lw: f64) -> f64 {
    deg_to_rad(280.16 + 360.9856235 * days) - lw
}

pub fn sun_coords(days: f64) -> SunCoordinates {
    let m = solar_mean_anomaly(days);
    let l = ecliptic_longitude(m);
    SunCoordinates {
        declination: declination(l, 0.0),
        right_ascension: right_ascension(l, 0.0),
    }
}

pub fn altitude(hour_angle: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * hour_angle.cos()).asin()
}

pub fn azimuth(hour_angle: f64, phi: f64, dec: f64) -> f64 {
    hour_angle
        .sin()
        .atan2(hour_angle.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Sun position for a naive instant interpreted as UTC.
///
/// Latitude and longitude are not range-checked; see [`crate::GeoCoordinate::new`].
pub fn sun_position(instant: &NaiveDateTime, latitude: f64, longitude: f64) -> SkyPosition {
    let lw = deg_to_rad(-longitude);
    let phi = deg_to_rad(latitude);
    let d = to_days(instant);

    let c = sun_coords(d);
    let h = sidereal_time(d, lw) - c.right_ascension;

    SkyPosition {
        azimuth: rad_to_deg(azimuth(h, phi, c.declination)),
        altitude: rad_to_deg(altitude(h, phi, c.declination)),
    }
}

/// Sun position for a zoned instant.
pub fn sun_position_at<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SkyPosition {
    let utc = dt.with_timezone(&Utc).naive_utc();
    sun_position(&utc, latitude, longitude)
}
