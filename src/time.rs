use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::{Error, Result};

/// 23:59 as minutes past midnight.
pub const LAST_MINUTE_OF_DAY: u32 = 23 * 60 + 59;

/// Characters accepted between the day, month and year of a free-text date.
pub const DATE_SEPARATORS: [char; 4] = [' ', '.', '/', '-'];

pub fn minutes_to_time(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_minutes(time: (u32, u32)) -> u32 {
    time.0 * 60 + time.1
}

/// Maps a day fraction onto a clock time between 00:00 (0.0) and 23:59 (1.0).
///
/// Fractions outside [0, 1] are clamped; the minute count is truncated, not rounded.
pub fn day_fraction_to_time(fraction: f64) -> Result<(u32, u32)> {
    if !fraction.is_finite() {
        return Err(Error::NonFiniteValue("day fraction"));
    }
    let clamped = fraction.clamp(0.0, 1.0);
    if clamped != fraction {
        log::warn!("day fraction {} clamped to {}", fraction, clamped);
    }
    let total = (clamped * LAST_MINUTE_OF_DAY as f64) as u32;
    Ok(minutes_to_time(total))
}

/// Parses `day month year` separated by any of [`DATE_SEPARATORS`].
///
/// Fields are trimmed of surrounding whitespace, empty fields are skipped and
/// anything after the third field is ignored.
pub fn parse_day_month_year(text: &str) -> Result<NaiveDate> {
    let fields: Vec<&str> = text
        .split(&DATE_SEPARATORS[..])
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();
    log::trace!("date text {:?} split into {:?}", text, fields);

    if fields.len() < 3 {
        return Err(Error::MissingDateField {
            text: text.to_string(),
            found: fields.len(),
        });
    }

    let day: u32 = fields[0].parse()?;
    let month: u32 = fields[1].parse()?;
    let year: i32 = fields[2].parse()?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate { year, month, day })
}

pub fn date_at(date: NaiveDate, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or(Error::InvalidTime { hour, minute })?;
    Ok(date.and_time(time))
}

/// Fixed offset east of UTC, in whole minutes.
pub fn time_reference(utc_offset_minutes: i32) -> Result<FixedOffset> {
    utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(Error::UtcOffsetOutOfRange(utc_offset_minutes))
}

/// Converts a civil instant at `offset` into UTC.
pub fn local_to_utc(instant: &NaiveDateTime, offset: &FixedOffset) -> Result<NaiveDateTime> {
    offset
        .from_local_datetime(instant)
        .single()
        .map(|dt| dt.naive_utc())
        .ok_or(Error::InstantOutOfRange)
}
