use crate::error::{invalid_format_error, BookingResult};
use chrono::NaiveTime;
use lazy_static::lazy_static;

/// Number of bookable one-hour slots in a day
pub const TIME_SLOT_COUNT: usize = 12;

lazy_static! {
    static ref TIME_SLOTS: Vec<String> = generate_time_slots();
}

/// Half of the day a 12-hour label refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

/// Build the fixed slot labels, 9:00 AM through 8:00 PM
pub fn generate_time_slots() -> Vec<String> {
    let mut slots = Vec::with_capacity(TIME_SLOT_COUNT);
    for hour in 9..=11 {
        slots.push(format!("{}:00 AM", hour));
    }
    slots.push("12:00 PM".to_string());
    for hour in 1..=8 {
        slots.push(format!("{}:00 PM", hour));
    }
    slots
}

/// The slot labels, generated once
pub fn time_slots() -> &'static [String] {
    &TIME_SLOTS
}

/// Parse a `"<h>:<mm> <AM|PM>"` label into its parts
pub fn parse_label(label: &str) -> Option<(u32, u32, Period)> {
    let (clock, period) = label.trim().split_once(' ')?;
    let period = match period {
        "AM" => Period::Am,
        "PM" => Period::Pm,
        _ => return None,
    };

    let (hour, minute) = clock.split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || !hour.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if minute.len() != 2 || !minute.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let hour = hour.parse::<u32>().ok()?;
    let minute = minute.parse::<u32>().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }
    Some((hour, minute, period))
}

/// Convert a 12-hour slot label to the 24-hour `HH:MM:SS` form stored by the backend
pub fn normalize_time(label: &str) -> BookingResult<String> {
    let (hour, minute, period) = parse_label(label).ok_or_else(|| invalid_format_error(label))?;

    let hour = match (period, hour) {
        (Period::Pm, h) if h < 12 => h + 12,
        (Period::Am, 12) => 0,
        (_, h) => h,
    };

    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| invalid_format_error(label))?;
    Ok(time.format("%H:%M:%S").to_string())
}
