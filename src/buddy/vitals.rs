//! The five core vitals and the predicates derived from them.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// Identifies one of the five vitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalKind {
    Happiness,
    Health,
    Hunger,
    Energy,
    Cleanliness,
}

impl VitalKind {
    pub const ALL: [VitalKind; 5] = [
        VitalKind::Happiness,
        VitalKind::Health,
        VitalKind::Hunger,
        VitalKind::Energy,
        VitalKind::Cleanliness,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VitalKind::Happiness => "Happiness",
            VitalKind::Health => "Health",
            VitalKind::Hunger => "Hunger",
            VitalKind::Energy => "Energy",
            VitalKind::Cleanliness => "Cleanliness",
        }
    }

    /// Value below which the vital warrants an immediate reminder.
    /// Happiness has no critical level.
    pub fn critical_threshold(&self) -> Option<i32> {
        match self {
            VitalKind::Happiness => None,
            VitalKind::Health => Some(CRITICAL_HEALTH),
            VitalKind::Hunger => Some(CRITICAL_HUNGER),
            VitalKind::Energy => Some(CRITICAL_ENERGY),
            VitalKind::Cleanliness => Some(CRITICAL_CLEANLINESS),
        }
    }
}

/// Clamps a vital value into `[VITAL_MIN, VITAL_MAX]`.
pub fn clamp_vital(value: i32) -> i32 {
    value.clamp(VITAL_MIN, VITAL_MAX)
}

/// Vitals in `[0, 100]`. Hunger reads as satiety: lower means hungrier.
///
/// Fields are private so every write goes through the clamp, including
/// deserialization of saves and hand-edited JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredVitals")]
pub struct Vitals {
    happiness: i32,
    health: i32,
    hunger: i32,
    energy: i32,
    cleanliness: i32,
}

impl Vitals {
    pub fn new(happiness: i32, health: i32, hunger: i32, energy: i32, cleanliness: i32) -> Self {
        Self {
            happiness: clamp_vital(happiness),
            health: clamp_vital(health),
            hunger: clamp_vital(hunger),
            energy: clamp_vital(energy),
            cleanliness: clamp_vital(cleanliness),
        }
    }

    pub fn get(&self, kind: VitalKind) -> i32 {
        match kind {
            VitalKind::Happiness => self.happiness,
            VitalKind::Health => self.health,
            VitalKind::Hunger => self.hunger,
            VitalKind::Energy => self.energy,
            VitalKind::Cleanliness => self.cleanliness,
        }
    }

    /// Sets a vital, clamping out-of-range values instead of rejecting them.
    pub fn set(&mut self, kind: VitalKind, value: i32) {
        let value = clamp_vital(value);
        match kind {
            VitalKind::Happiness => self.happiness = value,
            VitalKind::Health => self.health = value,
            VitalKind::Hunger => self.hunger = value,
            VitalKind::Energy => self.energy = value,
            VitalKind::Cleanliness => self.cleanliness = value,
        }
    }

    /// Adds `delta` (may be negative) and clamps. Returns the change actually applied.
    pub fn adjust(&mut self, kind: VitalKind, delta: i32) -> i32 {
        let before = self.get(kind);
        self.set(kind, before.saturating_add(delta));
        self.get(kind) - before
    }

    pub fn happiness(&self) -> i32 {
        self.happiness
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn hunger(&self) -> i32 {
        self.hunger
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn cleanliness(&self) -> i32 {
        self.cleanliness
    }

    /// Truncating average of all five vitals ("overall wellbeing", "care quality").
    pub fn wellbeing(&self) -> i32 {
        (self.happiness + self.health + self.hunger + self.energy + self.cleanliness) / 5
    }

    /// Whether `kind` is below its critical reminder threshold.
    pub fn is_critical(&self, kind: VitalKind) -> bool {
        kind.critical_threshold()
            .is_some_and(|threshold| self.get(kind) < threshold)
    }

    /// Every vital currently below its critical threshold, in `VitalKind::ALL` order.
    pub fn critical_vitals(&self) -> Vec<VitalKind> {
        VitalKind::ALL
            .into_iter()
            .filter(|kind| self.is_critical(*kind))
            .collect()
    }

    pub fn needs_attention(&self) -> bool {
        self.hunger < ATTENTION_HUNGER
            || self.energy < ATTENTION_ENERGY
            || self.cleanliness < ATTENTION_CLEANLINESS
            || self.health < ATTENTION_HEALTH
    }
}

/// Wire shape of [`Vitals`] before clamping.
#[derive(Deserialize)]
struct StoredVitals {
    happiness: i32,
    health: i32,
    hunger: i32,
    energy: i32,
    cleanliness: i32,
}

impl From<StoredVitals> for Vitals {
    fn from(stored: StoredVitals) -> Self {
        Self::new(
            stored.happiness,
            stored.health,
            stored.hunger,
            stored.energy,
            stored.cleanliness,
        )
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self::new(
            DEFAULT_HAPPINESS,
            DEFAULT_HEALTH,
            DEFAULT_HUNGER,
            DEFAULT_ENERGY,
            DEFAULT_CLEANLINESS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vitals() {
        let v = Vitals::default();
        assert_eq!(v.happiness(), 80);
        assert_eq!(v.health(), 85);
        assert_eq!(v.hunger(), 70);
        assert_eq!(v.energy(), 90);
        assert_eq!(v.cleanliness(), 85);
        assert_eq!(v.wellbeing(), 82);
    }

    #[test]
    fn test_new_clamps_out_of_range_values() {
        let v = Vitals::new(-20, 150, 50, 101, -1);
        assert_eq!(v.happiness(), 0);
        assert_eq!(v.health(), 100);
        assert_eq!(v.hunger(), 50);
        assert_eq!(v.energy(), 100);
        assert_eq!(v.cleanliness(), 0);
    }

    #[test]
    fn test_deserialize_clamps_out_of_range_values() {
        let json = r#"{"happiness":250,"health":-40,"hunger":70,"energy":90,"cleanliness":85}"#;
        let v: Vitals = serde_json::from_str(json).unwrap();
        assert_eq!(v.happiness(), 100);
        assert_eq!(v.health(), 0);
        assert_eq!(v.hunger(), 70);

        let round_trip: Vitals = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
        assert_eq!(round_trip, v);
    }

    #[test]
    fn test_adjust_reports_applied_delta() {
        let mut v = Vitals::new(95, 50, 50, 5, 50);
        assert_eq!(v.adjust(VitalKind::Happiness, 20), 5);
        assert_eq!(v.happiness(), 100);
        assert_eq!(v.adjust(VitalKind::Energy, -10), -5);
        assert_eq!(v.energy(), 0);
        assert_eq!(v.adjust(VitalKind::Health, 0), 0);
    }

    #[test]
    fn test_adjust_extreme_delta_does_not_overflow() {
        let mut v = Vitals::default();
        v.adjust(VitalKind::Hunger, i32::MAX);
        assert_eq!(v.hunger(), 100);
        v.adjust(VitalKind::Hunger, i32::MIN);
        assert_eq!(v.hunger(), 0);
    }

    #[test]
    fn test_wellbeing_truncates() {
        // 10 + 10 + 10 + 10 + 14 = 54 -> 10 (not 10.8 rounded)
        let v = Vitals::new(10, 10, 10, 10, 14);
        assert_eq!(v.wellbeing(), 10);
    }

    #[test]
    fn test_critical_thresholds() {
        let v = Vitals::new(0, 24, 19, 14, 19);
        assert_eq!(
            v.critical_vitals(),
            vec![
                VitalKind::Health,
                VitalKind::Hunger,
                VitalKind::Energy,
                VitalKind::Cleanliness
            ]
        );
        // Happiness is never critical
        assert!(!v.is_critical(VitalKind::Happiness));

        let edge = Vitals::new(50, 25, 20, 15, 20);
        assert!(edge.critical_vitals().is_empty());
    }

    #[test]
    fn test_needs_attention() {
        assert!(!Vitals::default().needs_attention());
        assert!(Vitals::new(80, 85, 29, 90, 85).needs_attention());
        assert!(Vitals::new(80, 85, 70, 19, 85).needs_attention());
        assert!(Vitals::new(80, 85, 70, 90, 24).needs_attention());
        assert!(Vitals::new(80, 29, 70, 90, 85).needs_attention());
        assert!(!Vitals::new(0, 30, 30, 20, 25).needs_attention());
    }
}
