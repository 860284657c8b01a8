//! Sleep-cycle inference.
//!
//! Whether the buddy is asleep is never stored. It is inferred from energy,
//! time awake, and the device's local hour, so the decay step and the
//! presentation layer always agree.

use super::types::Buddy;
use crate::core::clock::hours_between;
use crate::core::constants::*;
use chrono::{NaiveDateTime, Timelike};

/// Night is 22:00 up to (not including) 06:00 local time.
pub fn is_night_hour(hour: u32) -> bool {
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}

pub fn is_night_time(now: NaiveDateTime) -> bool {
    is_night_hour(now.hour())
}

pub fn hours_since_sleep(buddy: &Buddy, now: NaiveDateTime) -> f64 {
    hours_between(buddy.last_slept, now)
}

/// Asleep when exhausted, awake too long, or tired at night.
pub fn is_asleep(buddy: &Buddy, now: NaiveDateTime) -> bool {
    let energy = buddy.vitals().energy();
    energy < EXHAUSTED_ENERGY
        || hours_since_sleep(buddy, now) > MAX_HOURS_AWAKE
        || (is_night_time(now) && energy < NIGHT_SLEEPY_ENERGY)
}

/// Whole hours until the next sleep-cycle boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepCountdown {
    UntilMorning(u32),
    UntilBedtime(u32),
    Bedtime,
}

impl SleepCountdown {
    pub fn label(&self) -> String {
        match self {
            SleepCountdown::UntilMorning(h) => format!("{h}h until morning"),
            SleepCountdown::UntilBedtime(h) => format!("{h}h until bedtime"),
            SleepCountdown::Bedtime => "Bedtime!".to_string(),
        }
    }
}

pub fn sleep_countdown(now: NaiveDateTime) -> SleepCountdown {
    let hour = now.hour();
    if hour < NIGHT_END_HOUR {
        SleepCountdown::UntilMorning(NIGHT_END_HOUR - hour)
    } else if hour < NIGHT_START_HOUR {
        SleepCountdown::UntilBedtime(NIGHT_START_HOUR - hour)
    } else {
        SleepCountdown::Bedtime
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepStatus {
    Sleeping,
    NightSleepy,
    GettingTired,
    Awake,
}

impl SleepStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SleepStatus::Sleeping => "💤 Sleeping peacefully",
            SleepStatus::NightSleepy => "🌙 Night time - getting sleepy",
            SleepStatus::GettingTired => "😴 Getting tired",
            SleepStatus::Awake => "☀️ Awake and active",
        }
    }
}

pub fn sleep_status(buddy: &Buddy, now: NaiveDateTime) -> SleepStatus {
    if is_asleep(buddy, now) {
        SleepStatus::Sleeping
    } else if is_night_time(now) {
        SleepStatus::NightSleepy
    } else if hours_since_sleep(buddy, now) > GETTING_TIRED_HOURS {
        SleepStatus::GettingTired
    } else {
        SleepStatus::Awake
    }
}
