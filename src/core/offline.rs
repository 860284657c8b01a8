//! Offline catch-up.
//!
//! When the app comes back after being closed, the buddy's decay is brought up
//! to date in one step and every calendar day that passed is aged through,
//! up to a configurable cap. Days past the cap are skipped, not deferred.

use super::clock::hours_between;
use super::game_state::CareState;
use super::tick::{age_days, TickEvent};
use crate::buddy::decay::{update_stats, DecayReport};
use crate::buddy::types::EvolutionStage;
use chrono::NaiveDateTime;

/// Report of offline catch-up results
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OfflineReport {
    pub elapsed_hours: f64,
    pub decay: DecayReport,
    pub days_aged: u32,
    /// Calendar days beyond the cap that were not simulated.
    pub days_skipped: u32,
    pub xp_gained: u64,
    pub level_before: u32,
    pub level_after: u32,
    pub stage_before: Option<EvolutionStage>,
    pub stage_after: Option<EvolutionStage>,
}

impl OfflineReport {
    pub fn evolved(&self) -> bool {
        self.stage_before != self.stage_after
    }

    pub fn total_level_ups(&self) -> u32 {
        self.level_after.saturating_sub(self.level_before)
    }
}

/// Brings `state` up to `now` after time away.
pub fn process_offline_time(
    state: &mut CareState,
    now: NaiveDateTime,
    max_days: u32,
) -> OfflineReport {
    let elapsed_hours = hours_between(state.buddy.last_update, now);
    if elapsed_hours <= 0.0 {
        return OfflineReport::default();
    }

    let level_before = state.buddy.level;
    let stage_before = state.buddy.evolution_stage;

    let decay = update_stats(&mut state.buddy, now);

    let days_due = state.days_due(now);
    let days_aged = days_due.min(max_days);
    let mut events = Vec::new();
    age_days(state, days_aged, &mut events);
    if days_due > 0 {
        state.aged_through = now.date();
    }

    let xp_gained = events
        .iter()
        .map(|e| match e {
            TickEvent::DayPassed { xp_gained, .. } => *xp_gained,
            _ => 0,
        })
        .sum();

    let report = OfflineReport {
        elapsed_hours,
        decay,
        days_aged,
        days_skipped: days_due - days_aged,
        xp_gained,
        level_before,
        level_after: state.buddy.level,
        stage_before: Some(stage_before),
        stage_after: Some(state.buddy.evolution_stage),
    };

    tracing::info!(
        hours = elapsed_hours,
        days_aged,
        days_skipped = report.days_skipped,
        levels = report.total_level_ups(),
        "Offline catch-up"
    );
    report
}
