//! The periodic buddy tick.
//!
//! `buddy_tick()` runs one step of the simulation: decay, any aging that fell
//! due since the last step, and the resulting level-ups and evolutions. It
//! returns a [`TickResult`] describing what happened so the caller can notify
//! or redraw without the simulation depending on any presentation types.

use crate::buddy::decay::{update_stats, DecayReport};
use crate::buddy::growth::age_one_day;
use crate::buddy::mood::Mood;
use crate::buddy::sleep::is_asleep;
use crate::buddy::types::EvolutionStage;
use crate::buddy::vitals::VitalKind;
use crate::core::game_state::CareState;
use chrono::NaiveDateTime;

/// A single event produced by a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// Time-based decay changed at least one vital.
    VitalsDecayed(DecayReport),

    FellAsleep,
    WokeUp,

    /// A calendar day passed and the buddy aged.
    DayPassed { age: u32, xp_gained: u64 },

    /// Calendar days past the aging cap that were not simulated.
    DaysSkipped { days: u32 },

    /// May occur several times per tick from large XP gains.
    LeveledUp { new_level: u32 },

    Evolved {
        from: EvolutionStage,
        to: EvolutionStage,
    },

    /// A vital dropped below its critical threshold during this tick.
    VitalCritical { vital: VitalKind, value: i32 },

    MoodChanged { from: Mood, to: Mood },
}

/// Result of processing a single tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Events produced during this tick, in chronological order.
    pub events: Vec<TickEvent>,
}

impl TickResult {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn leveled_up(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::LeveledUp { .. }))
    }

    pub fn evolved_to(&self) -> Option<EvolutionStage> {
        self.events.iter().rev().find_map(|e| match e {
            TickEvent::Evolved { to, .. } => Some(*to),
            _ => None,
        })
    }
}

/// Processes one tick at `now`, aging at most `max_days` calendar days.
pub fn buddy_tick(state: &mut CareState, now: NaiveDateTime, max_days: u32) -> TickResult {
    let mut result = TickResult::default();
    let was_asleep = is_asleep(&state.buddy, state.buddy.last_update);
    let mood_before = state.buddy.mood();
    let critical_before = state.buddy.vitals().critical_vitals();

    // ── 1. Decay ────────────────────────────────────────────────
    let report = update_stats(&mut state.buddy, now);
    if !report.is_empty() {
        result.events.push(TickEvent::VitalsDecayed(report));
    }

    // ── 2. Aging ────────────────────────────────────────────────
    let days_due = state.days_due(now);
    let days = days_due.min(max_days);
    age_days(state, days, &mut result.events);
    if days_due > days {
        tracing::warn!(skipped = days_due - days, max_days, "Aging capped");
        result.events.push(TickEvent::DaysSkipped {
            days: days_due - days,
        });
    }
    if days_due > 0 {
        state.aged_through = now.date();
    }

    // ── 3. Sleep transitions ────────────────────────────────────
    let asleep = is_asleep(&state.buddy, now);
    if asleep && !was_asleep {
        result.events.push(TickEvent::FellAsleep);
    } else if !asleep && was_asleep {
        result.events.push(TickEvent::WokeUp);
    }

    // ── 4. Newly critical vitals ────────────────────────────────
    for vital in state.buddy.vitals().critical_vitals() {
        if !critical_before.contains(&vital) {
            result.events.push(TickEvent::VitalCritical {
                vital,
                value: state.buddy.vital(vital),
            });
        }
    }

    let mood_after = state.buddy.mood();
    if mood_after != mood_before {
        result.events.push(TickEvent::MoodChanged {
            from: mood_before,
            to: mood_after,
        });
    }

    if !result.is_empty() {
        tracing::debug!(events = result.events.len(), %now, "Buddy tick");
    }
    result
}

/// Ages the buddy `days` times, recording day, level-up and evolution events.
pub(crate) fn age_days(state: &mut CareState, days: u32, events: &mut Vec<TickEvent>) {
    for _ in 0..days {
        let level_before = state.buddy.level;
        let stage_before = state.buddy.evolution_stage;
        let aging = age_one_day(&mut state.buddy);

        events.push(TickEvent::DayPassed {
            age: aging.new_age,
            xp_gained: aging.xp_gained,
        });
        for new_level in (level_before + 1)..=state.buddy.level {
            events.push(TickEvent::LeveledUp { new_level });
        }
        if let Some(to) = aging.evolved_to {
            events.push(TickEvent::Evolved {
                from: stage_before,
                to,
            });
        }
    }
}
