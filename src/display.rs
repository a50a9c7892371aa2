use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::clock::SunClock;
use crate::config::DisplayConfig;
use crate::error::Result;

/// Shown until the first poll.
pub const PLACEHOLDER: &str = "--:--";

/// Text for the on-screen clock overlay. Rendering is left to the host.
#[derive(Debug, Clone)]
pub struct DateTimeDisplay {
    config: DisplayConfig,
    instant: Option<NaiveDateTime>,
}

impl DateTimeDisplay {
    pub fn new(config: DisplayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            instant: None,
        })
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn poll(&mut self, clock: &SunClock) {
        self.instant = Some(clock.instant());
    }

    pub fn time_text(&self) -> String {
        self.format_with(&self.config.time_format)
    }

    pub fn date_text(&self) -> String {
        self.format_with(&self.config.date_format)
    }

    /// Specifiers that need an offset (`%z`, `%Z`) parse fine but fail on a naive
    /// instant; those render as the placeholder.
    fn format_with(&self, fmt: &str) -> String {
        let Some(instant) = self.instant else {
            return PLACEHOLDER.to_string();
        };
        let mut text = String::new();
        match write!(text, "{}", instant.format(fmt)) {
            Ok(()) => text,
            Err(_) => {
                log::warn!("cannot format {} with {:?}", instant, fmt);
                PLACEHOLDER.to_string()
            }
        }
    }
}

impl Default for DateTimeDisplay {
    fn default() -> Self {
        Self {
            config: DisplayConfig::default(),
            instant: None,
        }
    }
}
