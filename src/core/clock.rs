//! Injectable wall clock.
//!
//! Every time-dependent operation in the crate takes `now` explicitly. The
//! periodic driver asks a [`Clock`] for it, so tests and the headless simulator
//! can advance time without waiting on the real one.

use chrono::{Duration, Local, NaiveDateTime};
use std::sync::{Arc, Mutex, MutexGuard};

/// Source of the device's local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the real local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to. Share it behind an `Arc` to keep
/// advancing it after handing it to a long-running owner.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    fn current(&self) -> MutexGuard<'_, NaiveDateTime> {
        // A plain timestamp cannot be left half-written, so a poisoned lock is still usable.
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current();
        *current += by;
    }

    pub fn advance_minutes(&self, minutes: i64) {
        self.advance(Duration::minutes(minutes));
    }

    pub fn advance_hours(&self, hours: i64) {
        self.advance(Duration::hours(hours));
    }

    pub fn set(&self, to: NaiveDateTime) {
        *self.current() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.current()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Real-valued hours from `since` to `now`. Negative when `since` is in the future.
pub fn hours_between(since: NaiveDateTime, now: NaiveDateTime) -> f64 {
    (now - since).num_milliseconds() as f64 / 1000.0 / super::constants::SECONDS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_manual_clock_only_moves_when_advanced() {
        let clock = ManualClock::new(at(9, 0));
        assert_eq!(clock.now(), at(9, 0));
        assert_eq!(clock.now(), at(9, 0));

        clock.advance_minutes(30);
        assert_eq!(clock.now(), at(9, 30));

        clock.advance_hours(2);
        assert_eq!(clock.now(), at(11, 30));
    }

    #[test]
    fn test_manual_clock_set() {
        let clock = ManualClock::new(at(9, 0));
        clock.set(at(23, 15));
        assert_eq!(clock.now(), at(23, 15));
    }

    #[test]
    fn test_hours_between_fractional() {
        assert!((hours_between(at(9, 0), at(10, 30)) - 1.5).abs() < 1e-9);
        assert!((hours_between(at(10, 30), at(9, 0)) + 1.5).abs() < 1e-9);
        assert_eq!(hours_between(at(9, 0), at(9, 0)), 0.0);
    }

    #[test]
    fn test_shared_manual_clock() {
        let clock = Arc::new(ManualClock::new(at(9, 0)));
        let shared = Arc::clone(&clock);
        clock.advance_hours(1);
        assert_eq!(shared.now(), at(10, 0));
    }

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
