use chrono::{NaiveDate, NaiveDateTime};

use sun_clock::display::PLACEHOLDER;
use sun_clock::*;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

#[test]
fn test_placeholder_before_first_poll() {
    let display = DateTimeDisplay::default();
    assert_eq!(display.time_text(), PLACEHOLDER);
    assert_eq!(display.date_text(), PLACEHOLDER);
}

#[test]
fn test_formats_polled_instant() {
    let clock = SunClock::new(&SunClockConfig::default()).unwrap();
    let mut display = DateTimeDisplay::default();
    display.poll(&clock);
    assert_eq!(display.time_text(), "12:30");
    assert_eq!(display.date_text(), "11/10/1996");
}

#[test]
fn test_follows_clock_between_polls() {
    let mut clock = SunClock::new(&SunClockConfig::default()).unwrap();
    let mut display = DateTimeDisplay::default();
    display.poll(&clock);

    clock.set_instant(at(2001, 2, 3, 4, 5)).unwrap();
    assert_eq!(display.time_text(), "12:30");
    display.poll(&clock);
    assert_eq!(display.time_text(), "04:05");
    assert_eq!(display.date_text(), "03/02/2001");
}

#[test]
fn test_custom_formats() {
    let config = DisplayConfig {
        time_format: "%I:%M %p".to_string(),
        date_format: "%Y-%m-%d".to_string(),
        ..DisplayConfig::default()
    };
    let mut clock = SunClock::new(&SunClockConfig::default()).unwrap();
    clock.set_instant(at(2024, 7, 4, 18, 15)).unwrap();
    let mut display = DateTimeDisplay::new(config).unwrap();
    display.poll(&clock);
    assert_eq!(display.time_text(), "06:15 PM");
    assert_eq!(display.date_text(), "2024-07-04");
    assert_eq!(display.config().font_size, 30);
}

#[test]
fn test_unknown_specifier_rejected_at_load() {
    assert!(matches!(
        SunClockConfig::from_json_str(r#"{"display":{"time_format":"%Q"}}"#),
        Err(Error::InvalidFormat(f)) if f == "%Q"
    ));
    let config = DisplayConfig {
        date_format: "%d/%m/%".to_string(),
        ..DisplayConfig::default()
    };
    assert!(matches!(
        DateTimeDisplay::new(config),
        Err(Error::InvalidFormat(_))
    ));
}

#[test]
fn test_offset_specifier_on_naive_instant_shows_placeholder() {
    let config = DisplayConfig {
        time_format: "%H:%M %z".to_string(),
        ..DisplayConfig::default()
    };
    let clock = SunClock::new(&SunClockConfig::default()).unwrap();
    let mut display = DateTimeDisplay::new(config).unwrap();
    display.poll(&clock);
    assert_eq!(display.time_text(), PLACEHOLDER);
    assert_eq!(display.date_text(), "11/10/1996");
}
