use crate::buddy::types::Buddy;
use crate::profile::CaregiverProfile;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Everything a caregiver session owns: the buddy and the wallet that pays for it.
///
/// IMPORTANT: When adding fields, use `#[serde(default)]` to keep older saves loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareState {
    pub buddy: Buddy,
    pub profile: CaregiverProfile,
    /// Last calendar day whose aging has been applied (or skipped by the
    /// offline cap).
    pub aged_through: NaiveDate,
    pub last_save_time: NaiveDateTime,
}

impl CareState {
    /// Creates a new session with a freshly hatched buddy
    pub fn new(profile: CaregiverProfile, now: NaiveDateTime) -> Self {
        let buddy = Buddy::new(now);
        Self {
            aged_through: buddy.born_at.date(),
            buddy,
            profile,
            last_save_time: now,
        }
    }

    /// Calendar days since `aged_through` that still need an aging step.
    pub fn days_due(&self, now: NaiveDateTime) -> u32 {
        let days = (now.date() - self.aged_through).num_days();
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }

    pub fn eco_credits(&self) -> u32 {
        self.profile.eco_credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buddy::types::EvolutionStage;
    use chrono::Duration;

    fn morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_new_care_state() {
        let state = CareState::new(CaregiverProfile::new(), morning());

        assert_eq!(state.buddy.name, "Buddy");
        assert_eq!(state.buddy.level, 1);
        assert_eq!(state.buddy.evolution_stage, EvolutionStage::Baby);
        assert_eq!(state.eco_credits(), 100);
        assert_eq!(state.aged_through, morning().date());
        assert_eq!(state.last_save_time, morning());
    }

    #[test]
    fn test_days_due_counts_calendar_days() {
        let state = CareState::new(CaregiverProfile::new(), morning());
        assert_eq!(state.days_due(morning()), 0);
        assert_eq!(state.days_due(morning() + Duration::hours(14)), 0);
        // 23:30 + 1h crosses midnight
        assert_eq!(state.days_due(morning() + Duration::hours(15)), 1);
        assert_eq!(state.days_due(morning() + Duration::days(5)), 5);
        assert_eq!(state.days_due(morning() - Duration::days(2)), 0);
    }
}
