//! Irrigation planning — next watering time and water volume.
//!
//! Both computations are pure functions of their inputs; the planner keeps
//! no state of its own.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Watering always happens at this wall-clock time.
pub const IRRIGATION_TIME_OF_DAY: &str = "07:00:00 AM";

/// Hour of day the watering threshold falls on.
const IRRIGATION_HOUR: u32 = 7;

/// The next planned watering: a human-readable label, the calendar date,
/// and the fixed time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IrrigationPlan {
    pub label: &'static str,
    pub date: NaiveDate,
    pub time: &'static str,
}

impl std::fmt::Display for IrrigationPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {} {}",
            self.label,
            self.date.format("%Y-%m-%d"),
            self.time
        )
    }
}

/// Compute the next watering from the current wall-clock instant.
///
/// Even days of the month water tomorrow. Odd days water today when the
/// 07:00 threshold has not passed yet, otherwise in two days. The time
/// component is always [`IRRIGATION_TIME_OF_DAY`].
#[must_use]
pub fn next_irrigation(now: NaiveDateTime) -> IrrigationPlan {
    let today = now.date();
    let (label, date) = if today.day() % 2 == 0 {
        ("Tomorrow", today + Days::new(1))
    } else if now.hour() < IRRIGATION_HOUR {
        ("Today", today)
    } else {
        ("After 2 days", today + Days::new(2))
    };
    IrrigationPlan {
        label,
        date,
        time: IRRIGATION_TIME_OF_DAY,
    }
}

/// Liters of water needed for one watering of `area` square meters at the
/// given temperature setpoint.
#[must_use]
pub fn water_volume(area: f64, temperature: f64) -> f64 {
    let factor = if temperature < 25.0 {
        0.7
    } else if temperature <= 28.0 {
        0.8
    } else {
        0.9
    };
    area * factor
}
