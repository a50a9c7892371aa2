use std::fmt;

use chrono::{FixedOffset, NaiveDateTime, TimeDelta};

use crate::angles;
use crate::config::{StartingTime, SunClockConfig};
use crate::error::{Error, Result};
use crate::time;
use crate::types::{CardinalDirection, GeoCoordinate, SkyPosition, SunUpdate};

/// Live yaw reading, in degrees, from some scene object (a compass, a camera rig...).
pub trait HeadingSource {
    fn heading(&self) -> f64;
}

impl<F: Fn() -> f64> HeadingSource for F {
    fn heading(&self) -> f64 {
        self()
    }
}

/// How the astronomical azimuth is turned into a scene heading.
pub enum RotationOffset {
    /// Read on every publish, never cached.
    LiveReference(Box<dyn HeadingSource>),
    FixedCardinal {
        direction: CardinalDirection,
        fine_tune: f64,
    },
}

impl RotationOffset {
    pub fn degrees(&self) -> f64 {
        match self {
            RotationOffset::LiveReference(source) => source.heading(),
            RotationOffset::FixedCardinal {
                direction,
                fine_tune,
            } => direction.degrees() + fine_tune,
        }
    }
}

impl fmt::Debug for RotationOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationOffset::LiveReference(_) => f.write_str("LiveReference(..)"),
            RotationOffset::FixedCardinal {
                direction,
                fine_tune,
            } => f
                .debug_struct("FixedCardinal")
                .field("direction", direction)
                .field("fine_tune", fine_tune)
                .finish(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&SunUpdate)>;

/// Simulated time of day driving the sun.
///
/// Holds exactly one authoritative instant. Every mutation recomputes the sky
/// position and publishes a [`SunUpdate`] to all subscribers, in the order they
/// subscribed.
pub struct SunClock {
    instant: NaiveDateTime,
    location: GeoCoordinate,
    clock_time: StartingTime,
    sun_speed: f64,
    reference: FixedOffset,
    rotation: RotationOffset,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl SunClock {
    pub fn new(config: &SunClockConfig) -> Result<Self> {
        let location = GeoCoordinate::new(config.latitude, config.longitude)?;
        if !config.sun_speed.is_finite() {
            return Err(Error::NonFiniteValue("sun speed"));
        }
        if !config.rotation.fine_tune.is_finite() {
            return Err(Error::NonFiniteValue("rotation fine tune"));
        }
        let reference = time::time_reference(config.utc_offset_minutes)?;

        let d = config.date;
        let date = chrono::NaiveDate::from_ymd_opt(d.year, d.month, d.day).ok_or(
            Error::InvalidDate {
                year: d.year,
                month: d.month,
                day: d.day,
            },
        )?;
        let instant = time::date_at(date, config.time.hour, config.time.minute)?;

        log::info!(
            "SunClock: starting at {} (UTC{}) at ({:.4}, {:.4})",
            instant,
            reference,
            location.latitude,
            location.longitude
        );

        Ok(Self {
            instant,
            location,
            clock_time: config.time,
            sun_speed: config.sun_speed,
            reference,
            rotation: RotationOffset::FixedCardinal {
                direction: config.rotation.sunrise_direction,
                fine_tune: config.rotation.normalized_fine_tune(),
            },
            subscribers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Replaces the fixed rotation with a live heading reading.
    pub fn with_heading_source(mut self, source: impl HeadingSource + 'static) -> Self {
        self.rotation = RotationOffset::LiveReference(Box::new(source));
        self
    }

    pub fn set_rotation(&mut self, rotation: RotationOffset) {
        self.rotation = rotation;
    }

    pub fn rotation(&self) -> &RotationOffset {
        &self.rotation
    }

    pub fn rotation_offset(&self) -> f64 {
        self.rotation.degrees()
    }

    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    pub fn location(&self) -> GeoCoordinate {
        self.location
    }

    pub fn sun_speed(&self) -> f64 {
        self.sun_speed
    }

    pub fn sky_position(&self) -> Result<SkyPosition> {
        self.sky_position_for(&self.instant)
    }

    pub fn current_update(&self) -> Result<SunUpdate> {
        self.update_for(self.instant)
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&SunUpdate) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Replaces the held instant and publishes the new sun position.
    ///
    /// The instant is left untouched if its position cannot be computed.
    pub fn set_instant(&mut self, instant: NaiveDateTime) -> Result<SunUpdate> {
        let update = self.update_for(instant)?;
        self.instant = instant;
        self.publish(&update);
        Ok(update)
    }

    /// Sets the date from `day month year` text, keeping the configured clock time.
    pub fn set_date_from_str(&mut self, text: &str) -> Result<SunUpdate> {
        let date = time::parse_day_month_year(text)?;
        let instant = time::date_at(date, self.clock_time.hour, self.clock_time.minute)?;
        self.set_instant(instant)
    }

    /// Sets the clock between 00:00 and 23:59 of the current date.
    pub fn set_day_fraction(&mut self, fraction: f64) -> Result<SunUpdate> {
        let (hour, minute) = time::day_fraction_to_time(fraction)?;
        let instant = time::date_at(self.instant.date(), hour, minute)?;
        self.set_instant(instant)
    }

    /// Moves the clock by a (possibly fractional or negative) number of minutes,
    /// carrying into neighbouring days as needed. Millisecond resolution.
    pub fn advance_minutes(&mut self, minutes: f64) -> Result<SunUpdate> {
        if !minutes.is_finite() {
            return Err(Error::NonFiniteValue("minutes"));
        }
        let millis = (minutes * 60_000.0).round();
        if millis.abs() >= i64::MAX as f64 {
            return Err(Error::InstantOutOfRange);
        }
        let delta = TimeDelta::try_milliseconds(millis as i64).ok_or(Error::InstantOutOfRange)?;
        let instant = self
            .instant
            .checked_add_signed(delta)
            .ok_or(Error::InstantOutOfRange)?;
        self.set_instant(instant)
    }

    /// Frame update. Scrub input scaled by frame time and sun speed, in minutes.
    pub fn tick(&mut self, scrub_input: f64, delta_seconds: f64) -> Result<Option<SunUpdate>> {
        if scrub_input == 0.0 {
            return Ok(None);
        }
        self.advance_minutes(scrub_input * delta_seconds * self.sun_speed)
            .map(Some)
    }

    fn sky_position_for(&self, instant: &NaiveDateTime) -> Result<SkyPosition> {
        let utc = time::local_to_utc(instant, &self.reference)?;
        Ok(angles::sun_position(
            &utc,
            self.location.latitude,
            self.location.longitude,
        ))
    }

    fn update_for(&self, instant: NaiveDateTime) -> Result<SunUpdate> {
        Ok(SunUpdate {
            instant,
            sky: self.sky_position_for(&instant)?,
            rotation_offset: self.rotation_offset(),
        })
    }

    fn publish(&mut self, update: &SunUpdate) {
        log::debug!(
            "SunClock: {} azimuth={:.2} altitude={:.2} offset={:.2} -> {} subscribers",
            update.instant,
            update.sky.azimuth,
            update.sky.altitude,
            update.rotation_offset,
            self.subscribers.len()
        );
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(update);
        }
    }
}

impl fmt::Debug for SunClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SunClock")
            .field("instant", &self.instant)
            .field("location", &self.location)
            .field("sun_speed", &self.sun_speed)
            .field("reference", &self.reference)
            .field("rotation", &self.rotation)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
