use std::cell::Cell;
use std::rc::Rc;

use sun_clock::{DateTimeDisplay, SunClock, SunClockConfig, SunUpdate};

fn main() -> sun_clock::Result<()> {
    env_logger::init();

    let config = SunClockConfig::from_json_str(
        r#"{
            "latitude": 51.5,
            "longitude": -0.1,
            "date": { "day": 21, "month": 6, "year": 2026 },
            "time": { "hour": 4, "minute": 0 },
            "utc_offset_minutes": 60,
            "rotation": { "sunrise_direction": "NegativeZ", "fine_tune": 0.0 }
        }"#,
    )?;

    let mut clock = SunClock::new(&config)?;
    let mut display = DateTimeDisplay::new(config.display.clone())?;

    let publishes = Rc::new(Cell::new(0u32));
    let counter = publishes.clone();
    clock.subscribe(move |_: &SunUpdate| counter.set(counter.get() + 1));

    println!("=== Sun Clock Example ===");
    println!(
        "Location: London ({:.1}°N, {:.1}°W), UTC+1",
        config.latitude, -config.longitude
    );
    println!();
    println!("{:>6} {:>11} {:>10} {:>9} {:>9}", "Time", "Date", "Azimuth", "Altitude", "Yaw");

    // Full scrub input at 60 fps and the default speed moves 100 simulated minutes per second.
    for _ in 0..18 {
        for _ in 0..36 {
            clock.tick(1.0, 1.0 / 60.0)?;
        }
        display.poll(&clock);
        let update = clock.current_update()?;
        let (pitch, yaw) = update.euler_angles();
        println!(
            "{:>6} {:>11} {:>9.2}° {:>8.2}° {:>8.2}°",
            display.time_text(),
            display.date_text(),
            update.sky.azimuth,
            pitch,
            yaw
        );
    }

    println!();
    clock.set_date_from_str("21.12.2026")?;
    clock.set_day_fraction(0.5)?;
    let winter = clock.current_update()?;
    display.poll(&clock);
    println!(
        "Midwinter {} {}: altitude {:.2}°",
        display.date_text(),
        display.time_text(),
        winter.sky.altitude
    );
    println!("Published {} updates", publishes.get());
    Ok(())
}
