//! Time-based vital decay.
//!
//! Decay owed for a vital is an absolute function of the hours since its care
//! anchor (`last_fed`, `last_cleaned`, `last_slept`). The buddy keeps a ledger of
//! how much of that has already been applied, and each update only applies the
//! difference. The result does not depend on how often the periodic timer fires,
//! and repeating an update with the same `now` changes nothing.

use super::sleep::{is_asleep, is_night_time};
use super::types::Buddy;
use super::vitals::{VitalKind, Vitals};
use crate::core::clock::hours_between;
use crate::core::constants::*;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Decay already applied since each care anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecayLedger {
    /// Hunger lost since `last_fed`.
    pub hunger: i32,
    /// Cleanliness lost since `last_cleaned`.
    pub cleanliness: i32,
    /// Energy drain accounted for since `last_slept` (applied only while awake).
    pub energy_drained: i32,
    /// Energy recovery accounted for since `last_slept` (applied only while asleep).
    pub energy_recovered: i32,
}

impl DecayLedger {
    pub fn reset_hunger(&mut self) {
        self.hunger = 0;
    }

    pub fn reset_cleanliness(&mut self) {
        self.cleanliness = 0;
    }

    pub fn reset_energy(&mut self) {
        self.energy_drained = 0;
        self.energy_recovered = 0;
    }
}

/// Net vital changes made by one [`update_stats`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecayReport {
    pub hunger: i32,
    pub energy: i32,
    pub cleanliness: i32,
    pub happiness: i32,
    pub health: i32,
    /// Sleep state used for the energy update.
    pub was_asleep: bool,
    /// False when `now` did not move past the previous update.
    pub advanced: bool,
}

impl DecayReport {
    fn from_vitals(before: &Vitals, after: &Vitals, was_asleep: bool, advanced: bool) -> Self {
        let delta = |kind| after.get(kind) - before.get(kind);
        Self {
            hunger: delta(VitalKind::Hunger),
            energy: delta(VitalKind::Energy),
            cleanliness: delta(VitalKind::Cleanliness),
            happiness: delta(VitalKind::Happiness),
            health: delta(VitalKind::Health),
            was_asleep,
            advanced,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hunger == 0
            && self.energy == 0
            && self.cleanliness == 0
            && self.happiness == 0
            && self.health == 0
    }
}

/// Floored decay owed after `hours` at `rate` points per hour.
fn owed(hours: f64, rate: f64) -> i32 {
    if hours <= 0.0 {
        return 0;
    }
    (hours * rate).floor() as i32
}

/// Applies decay owed up to `now`, then the neglect and sleep-schedule
/// adjustments.
pub fn update_stats(buddy: &mut Buddy, now: NaiveDateTime) -> DecayReport {
    let before = buddy.vitals;
    let hours_since_fed = hours_between(buddy.last_fed, now);
    let hours_since_cleaned = hours_between(buddy.last_cleaned, now);
    let hours_since_slept = hours_between(buddy.last_slept, now);

    let hunger_owed = owed(hours_since_fed, HUNGER_DECAY_PER_HOUR);
    let hunger_due = hunger_owed - buddy.decay.hunger;
    if hunger_due > 0 {
        buddy.vitals.adjust(VitalKind::Hunger, -hunger_due);
        buddy.decay.hunger = hunger_owed;
    }

    // Time spent in one sleep state forfeits the other state's accrual.
    let was_asleep = is_asleep(buddy, now);
    let drain_owed = owed(hours_since_slept, ENERGY_DRAIN_PER_HOUR);
    let recovery_owed = owed(hours_since_slept, ENERGY_RECOVERY_PER_HOUR);
    if was_asleep {
        let due = recovery_owed - buddy.decay.energy_recovered;
        if due > 0 {
            buddy.vitals.adjust(VitalKind::Energy, due);
        }
    } else {
        let due = drain_owed - buddy.decay.energy_drained;
        if due > 0 {
            buddy.vitals.adjust(VitalKind::Energy, -due);
        }
    }
    buddy.decay.energy_drained = buddy.decay.energy_drained.max(drain_owed);
    buddy.decay.energy_recovered = buddy.decay.energy_recovered.max(recovery_owed);

    let cleanliness_owed = owed(hours_since_cleaned, CLEANLINESS_DECAY_PER_HOUR);
    let cleanliness_due = cleanliness_owed - buddy.decay.cleanliness;
    if cleanliness_due > 0 {
        buddy.vitals.adjust(VitalKind::Cleanliness, -cleanliness_due);
        buddy.decay.cleanliness = cleanliness_owed;
    }

    let advanced = now > buddy.last_update;
    if advanced {
        let v = buddy.vitals;
        if v.hunger() < UNHAPPY_VITAL_THRESHOLD
            || v.energy() < UNHAPPY_VITAL_THRESHOLD
            || v.cleanliness() < UNHAPPY_VITAL_THRESHOLD
        {
            buddy.vitals.adjust(VitalKind::Happiness, -1);
        }

        // Good sleep schedule bonus
        if is_asleep(buddy, now) && is_night_time(now) {
            buddy.vitals.adjust(VitalKind::Happiness, 1);
        }

        if v.hunger() < UNHEALTHY_VITAL_THRESHOLD
            || v.energy() < UNHEALTHY_VITAL_THRESHOLD
            || hours_since_slept > UNHEALTHY_HOURS_AWAKE
        {
            buddy.vitals.adjust(VitalKind::Health, -1);
        }

        buddy.last_update = now;
    }


    let report = DecayReport::from_vitals(&before, &buddy.vitals, was_asleep, advanced);
    if !report.is_empty() {
        tracing::debug!(
            hunger = report.hunger,
            energy = report.energy,
            cleanliness = report.cleanliness,
            happiness = report.happiness,
            health = report.health,
            asleep = was_asleep,
            "Applied decay"
        );
    }
    report
}
