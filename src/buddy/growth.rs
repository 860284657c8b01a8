//! Leveling, aging, and the evolution state machine.

use super::types::{Buddy, EvolutionStage};
use super::vitals::VitalKind;
use crate::core::constants::*;

/// XP needed to advance from `level` to `level + 1`.
pub fn xp_for_next_level(level: u32) -> u64 {
    level as u64 * XP_PER_LEVEL
}

/// XP still missing before the next level-up.
pub fn xp_to_next_level(buddy: &Buddy) -> u64 {
    xp_for_next_level(buddy.level).saturating_sub(buddy.experience)
}

/// Adds XP and processes every level-up it pays for.
/// Returns the number of levels gained.
pub fn gain_experience(buddy: &mut Buddy, amount: u64) -> u32 {
    buddy.experience += amount;

    let mut levelups = 0;
    loop {
        let xp_needed = xp_for_next_level(buddy.level);
        if buddy.experience < xp_needed {
            break;
        }
        buddy.experience -= xp_needed;
        buddy.level += 1;
        levelups += 1;

        buddy.vitals.adjust(VitalKind::Happiness, LEVEL_UP_HAPPINESS);
        buddy.vitals.adjust(VitalKind::Health, LEVEL_UP_HEALTH);
    }

    if levelups > 0 {
        tracing::info!(
            buddy = %buddy.name,
            level = buddy.level,
            levelups,
            "Buddy leveled up"
        );
    }
    levelups
}

/// What one day of aging did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgingReport {
    pub new_age: u32,
    pub xp_gained: u64,
    pub levelups: u32,
    pub evolved_to: Option<EvolutionStage>,
}

/// Ages the buddy one day, rewarding XP for care quality, then runs the
/// leveling and evolution checks.
pub fn age_one_day(buddy: &mut Buddy) -> AgingReport {
    buddy.age += 1;

    let care_quality = buddy.overall_wellbeing();
    let xp_gained = ((care_quality / DAILY_XP_DIVISOR).max(0) as u64).max(MIN_DAILY_XP);
    let mut levelups = gain_experience(buddy, xp_gained);

    let evolution = check_evolution(buddy);
    if let Some(ref ev) = evolution {
        levelups += ev.levelups;
    }

    AgingReport {
        new_age: buddy.age,
        xp_gained,
        levelups,
        evolved_to: evolution.map(|ev| ev.to),
    }
}

/// The stage whose requirements the buddy currently meets, if any.
///
/// Rows are checked in order and the first matching row wins. `None` means no
/// row matched and the buddy stays where it is.
pub fn eligible_stage(age: u32, level: u32, wellbeing: i32) -> Option<EvolutionStage> {
    match age {
        0..=2 => Some(EvolutionStage::Baby),
        3..=7 if wellbeing >= 50 => Some(EvolutionStage::Child),
        8..=15 if wellbeing >= 60 && level >= 3 => Some(EvolutionStage::Teen),
        16..=30 if wellbeing >= 70 && level >= 8 => Some(EvolutionStage::Adult),
        31.. if wellbeing >= 80 && level >= 15 => Some(EvolutionStage::Elder),
        _ => None,
    }
}

/// A completed stage transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evolution {
    pub from: EvolutionStage,
    pub to: EvolutionStage,
    pub bonus_xp: u64,
    /// Level-ups paid for by the bonus XP.
    pub levelups: u32,
}

/// Moves the buddy to a later stage when it qualifies, granting the one-time
/// transition bonus. Stages never regress.
pub fn check_evolution(buddy: &mut Buddy) -> Option<Evolution> {
    let target = eligible_stage(buddy.age, buddy.level, buddy.overall_wellbeing())?;
    if target <= buddy.evolution_stage {
        return None;
    }

    let from = buddy.evolution_stage;
    buddy.evolution_stage = target;

    let bonus_xp = match target {
        EvolutionStage::Baby => 0,
        EvolutionStage::Child => {
            buddy.vitals.adjust(VitalKind::Happiness, CHILD_BONUS_HAPPINESS);
            CHILD_BONUS_XP
        }
        EvolutionStage::Teen => {
            buddy.vitals.adjust(VitalKind::Health, TEEN_BONUS_HEALTH);
            TEEN_BONUS_XP
        }
        EvolutionStage::Adult => {
            buddy.vitals.adjust(VitalKind::Happiness, ADULT_BONUS_HAPPINESS);
            buddy.vitals.adjust(VitalKind::Health, ADULT_BONUS_HEALTH);
            ADULT_BONUS_XP
        }
        // Wisdom bonus
        EvolutionStage::Elder => ELDER_BONUS_XP,
    };
    let levelups = gain_experience(buddy, bonus_xp);

    tracing::info!(
        buddy = %buddy.name,
        from = from.name(),
        to = target.name(),
        "Buddy evolved"
    );

    Some(Evolution {
        from,
        to: target,
        bonus_xp,
        levelups,
    })
}

/// Fraction of the current stage's age range already lived, in `[0, 1]`.
pub fn evolution_progress(buddy: &Buddy) -> f64 {
    let age = buddy.age as f64;
    let progress = match buddy.evolution_stage {
        EvolutionStage::Baby => age / 3.0,
        EvolutionStage::Child => (age - 3.0) / 5.0,
        EvolutionStage::Teen => (age - 8.0) / 8.0,
        EvolutionStage::Adult => (age - 16.0) / 15.0,
        EvolutionStage::Elder => 1.0,
    };
    progress.clamp(0.0, 1.0)
}

pub fn next_evolution_requirements(stage: EvolutionStage) -> &'static str {
    match stage {
        EvolutionStage::Baby => "Age 3+ days, Care Quality 50+",
        EvolutionStage::Child => "Age 8+ days, Level 3+, Care Quality 60+",
        EvolutionStage::Teen => "Age 16+ days, Level 8+, Care Quality 70+",
        EvolutionStage::Adult => "Age 31+ days, Level 15+, Care Quality 80+",
        EvolutionStage::Elder => "Maximum evolution reached!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn buddy() -> Buddy {
        Buddy::new(
            NaiveDate::from_ymd_opt(2026, 3, 14)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    fn set_all_vitals(buddy: &mut Buddy, value: i32) {
        for kind in VitalKind::ALL {
            buddy.set_vital(kind, value);
        }
    }

    #[test]
    fn test_xp_for_next_level() {
        assert_eq!(xp_for_next_level(1), 100);
        assert_eq!(xp_for_next_level(2), 200);
        assert_eq!(xp_for_next_level(15), 1500);
    }

    #[test]
    fn test_gain_250_from_level_one_stops_at_level_two() {
        let mut b = buddy();
        let levelups = gain_experience(&mut b, 250);
        assert_eq!(levelups, 1);
        assert_eq!(b.level, 2);
        assert_eq!(b.experience, 150);
    }

    #[test]
    fn test_gain_cascades_multiple_levels() {
        let mut b = buddy();
        // 100 + 200 + 300 = 600 reaches level 4 exactly
        let levelups = gain_experience(&mut b, 600);
        assert_eq!(levelups, 3);
        assert_eq!(b.level, 4);
        assert_eq!(b.experience, 0);
    }

    #[test]
    fn test_level_up_bonuses_are_clamped() {
        let mut b = buddy();
        b.set_vital(VitalKind::Happiness, 98);
        b.set_vital(VitalKind::Health, 50);
        gain_experience(&mut b, 300);
        assert_eq!(b.level, 3);
        assert_eq!(b.vitals().happiness(), 100);
        assert_eq!(b.vitals().health(), 60);
    }

    #[test]
    fn test_gain_below_threshold_does_not_level() {
        let mut b = buddy();
        assert_eq!(gain_experience(&mut b, 99), 0);
        assert_eq!(b.level, 1);
        assert_eq!(xp_to_next_level(&b), 1);
    }

    #[test]
    fn test_age_one_day_grants_care_quality_xp() {
        let mut b = buddy();
        let report = age_one_day(&mut b);
        // Wellbeing 82 -> 8 XP
        assert_eq!(report.new_age, 1);
        assert_eq!(report.xp_gained, 8);
        assert_eq!(b.experience, 8);
        assert_eq!(report.evolved_to, None);
    }

    #[test]
    fn test_age_one_day_minimum_xp() {
        let mut b = buddy();
        set_all_vitals(&mut b, 5);
        let report = age_one_day(&mut b);
        assert_eq!(report.xp_gained, 1);
    }

    #[test]
    fn test_eligible_stage_table() {
        assert_eq!(eligible_stage(0, 1, 0), Some(EvolutionStage::Baby));
        assert_eq!(eligible_stage(2, 1, 0), Some(EvolutionStage::Baby));
        assert_eq!(eligible_stage(3, 1, 50), Some(EvolutionStage::Child));
        assert_eq!(eligible_stage(3, 1, 49), None);
        assert_eq!(eligible_stage(8, 3, 60), Some(EvolutionStage::Teen));
        assert_eq!(eligible_stage(8, 2, 90), None);
        assert_eq!(eligible_stage(16, 8, 70), Some(EvolutionStage::Adult));
        assert_eq!(eligible_stage(30, 7, 100), None);
        assert_eq!(eligible_stage(31, 15, 80), Some(EvolutionStage::Elder));
        assert_eq!(eligible_stage(100, 14, 100), None);
    }

    #[test]
    fn test_baby_with_good_care_becomes_teen_at_age_ten() {
        let mut b = buddy();
        b.age = 10;
        b.level = 5;
        set_all_vitals(&mut b, 65);

        let ev = check_evolution(&mut b).expect("should evolve");
        assert_eq!(ev.from, EvolutionStage::Baby);
        assert_eq!(ev.to, EvolutionStage::Teen);
        assert_eq!(ev.bonus_xp, 100);
        assert_eq!(b.evolution_stage, EvolutionStage::Teen);
        assert_eq!(b.vitals().health(), 80);
        assert_eq!(b.experience, 100);

        // Bonus is granted once
        assert!(check_evolution(&mut b).is_none());
        assert_eq!(b.vitals().health(), 80);
        assert_eq!(b.experience, 100);
    }

    #[test]
    fn test_child_bonus() {
        let mut b = buddy();
        b.age = 3;
        set_all_vitals(&mut b, 60);

        let ev = check_evolution(&mut b).unwrap();
        assert_eq!(ev.to, EvolutionStage::Child);
        assert_eq!(b.vitals().happiness(), 70);
        assert_eq!(b.experience, 50);
    }

    #[test]
    fn test_adult_bonus_can_level_up() {
        let mut b = buddy();
        b.age = 16;
        b.level = 8;
        b.evolution_stage = EvolutionStage::Teen;
        b.experience = 700;
        set_all_vitals(&mut b, 70);

        let ev = check_evolution(&mut b).unwrap();
        assert_eq!(ev.to, EvolutionStage::Adult);
        // 700 + 200 = 900 >= 800 -> level 9 with 100 left
        assert_eq!(ev.levelups, 1);
        assert_eq!(b.level, 9);
        assert_eq!(b.experience, 100);
        // +20 evolution, +5 level-up
        assert_eq!(b.vitals().happiness(), 95);
        assert_eq!(b.vitals().health(), 95);
    }

    #[test]
    fn test_elder_bonus() {
        let mut b = buddy();
        b.age = 31;
        b.level = 15;
        b.evolution_stage = EvolutionStage::Adult;
        set_all_vitals(&mut b, 90);

        let ev = check_evolution(&mut b).unwrap();
        assert_eq!(ev.to, EvolutionStage::Elder);
        assert_eq!(ev.bonus_xp, 500);
        assert_eq!(b.experience, 500);
    }

    #[test]
    fn test_poor_care_stalls_evolution() {
        let mut b = buddy();
        b.level = 20;
        set_all_vitals(&mut b, 30);
        for _ in 0..40 {
            age_one_day(&mut b);
        }
        assert_eq!(b.evolution_stage, EvolutionStage::Baby);
    }

    #[test]
    fn test_stage_never_regresses() {
        let mut b = buddy();
        b.age = 20;
        b.level = 10;
        b.evolution_stage = EvolutionStage::Adult;
        set_all_vitals(&mut b, 100);

        // Age 20 qualifies for Adult again, not an advance
        assert!(check_evolution(&mut b).is_none());

        // Age band 3-7 matches Child, which is behind Adult
        b.age = 5;
        assert!(check_evolution(&mut b).is_none());
        assert_eq!(b.evolution_stage, EvolutionStage::Adult);
    }

    #[test]
    fn test_evolution_progress() {
        let mut b = buddy();
        assert_eq!(evolution_progress(&b), 0.0);
        b.age = 3;
        assert_eq!(evolution_progress(&b), 1.0);

        b.evolution_stage = EvolutionStage::Teen;
        b.age = 12;
        assert!((evolution_progress(&b) - 0.5).abs() < 1e-9);

        b.evolution_stage = EvolutionStage::Adult;
        b.age = 10;
        assert_eq!(evolution_progress(&b), 0.0);

        b.evolution_stage = EvolutionStage::Elder;
        assert_eq!(evolution_progress(&b), 1.0);
    }

    #[test]
    fn test_next_requirements_text() {
        assert_eq!(
            next_evolution_requirements(EvolutionStage::Baby),
            "Age 3+ days, Care Quality 50+"
        );
        assert_eq!(
            next_evolution_requirements(EvolutionStage::Elder),
            "Maximum evolution reached!"
        );
    }
}
