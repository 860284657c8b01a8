//! Caregiver actions.
//!
//! Each paid action checks the eco-credit balance first. A rejected action
//! returns an error and leaves both the balance and the buddy untouched.

use super::growth::gain_experience;
use super::sleep::is_night_time;
use super::types::Buddy;
use super::vitals::VitalKind;
use crate::core::constants::*;
use crate::error::CareResult;
use crate::profile::spend_credits;
use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub nutrition: i32,
    pub cost: u32,
    pub description: &'static str,
}

pub const FOODS: [Food; 6] = [
    Food {
        id: "kelp_salad",
        name: "Kelp Salad",
        emoji: "🥬",
        nutrition: 25,
        cost: 8,
        description: "Fresh ocean kelp rich in minerals",
    },
    Food {
        id: "plankton_soup",
        name: "Plankton Soup",
        emoji: "🍲",
        nutrition: 30,
        cost: 10,
        description: "Nutritious plankton broth",
    },
    Food {
        id: "algae_smoothie",
        name: "Algae Smoothie",
        emoji: "🥤",
        nutrition: 20,
        cost: 6,
        description: "Refreshing algae blend",
    },
    Food {
        id: "sea_berries",
        name: "Sea Berries",
        emoji: "🫐",
        nutrition: 15,
        cost: 5,
        description: "Sweet ocean berries",
    },
    Food {
        id: "coral_treats",
        name: "Coral Treats",
        emoji: "🍬",
        nutrition: 35,
        cost: 15,
        description: "Premium coral-based snacks",
    },
    Food {
        id: "seaweed_wraps",
        name: "Seaweed Wraps",
        emoji: "🌯",
        nutrition: 40,
        cost: 18,
        description: "Filling seaweed wraps with nutrients",
    },
];

pub fn find_food(id: &str) -> Option<&'static Food> {
    FOODS.iter().find(|f| f.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareAction {
    Feed,
    Play,
    Clean,
    MedicalCare,
    Rest,
}

impl CareAction {
    pub fn name(&self) -> &'static str {
        match self {
            CareAction::Feed => "Feed",
            CareAction::Play => "Play",
            CareAction::Clean => "Clean Habitat",
            CareAction::MedicalCare => "Medical Care",
            CareAction::Rest => "Sleep",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CareAction::Feed => "🐟",
            CareAction::Play => "🎾",
            CareAction::Clean => "🧽",
            CareAction::MedicalCare => "🏥",
            CareAction::Rest => "💤",
        }
    }

    /// Fixed price, or `None` for feeding where the food sets the price.
    pub fn fixed_cost(&self) -> Option<u32> {
        match self {
            CareAction::Feed => None,
            CareAction::Play => Some(PLAY_COST),
            CareAction::Clean => Some(CLEAN_COST),
            CareAction::MedicalCare => Some(MEDICAL_CARE_COST),
            CareAction::Rest => Some(REST_COST),
        }
    }
}

/// What a successful care action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareOutcome {
    pub action: CareAction,
    pub credits_spent: u32,
    pub xp_gained: u64,
    pub levelups: u32,
}

pub fn feed(
    buddy: &mut Buddy,
    credits: &mut u32,
    food: &Food,
    now: NaiveDateTime,
) -> CareResult<CareOutcome> {
    spend_credits(credits, food.cost)?;

    buddy.vitals.adjust(VitalKind::Hunger, food.nutrition);
    buddy
        .vitals
        .adjust(VitalKind::Happiness, food.nutrition / FOOD_HAPPINESS_DIVISOR);
    buddy
        .vitals
        .adjust(VitalKind::Health, food.nutrition / FOOD_HEALTH_DIVISOR);
    buddy.last_fed = now;
    buddy.decay.reset_hunger();

    tracing::debug!(food = food.name, cost = food.cost, "Fed buddy");
    Ok(CareOutcome {
        action: CareAction::Feed,
        credits_spent: food.cost,
        xp_gained: 0,
        levelups: 0,
    })
}

pub fn play(buddy: &mut Buddy, credits: &mut u32, now: NaiveDateTime) -> CareResult<CareOutcome> {
    spend_credits(credits, PLAY_COST)?;

    buddy.vitals.adjust(VitalKind::Happiness, PLAY_HAPPINESS);
    buddy.vitals.adjust(VitalKind::Energy, -PLAY_ENERGY_COST);
    buddy.last_played = now;

    Ok(finish(buddy, CareAction::Play, PLAY_COST, PLAY_XP))
}

pub fn clean(buddy: &mut Buddy, credits: &mut u32, now: NaiveDateTime) -> CareResult<CareOutcome> {
    spend_credits(credits, CLEAN_COST)?;

    buddy.vitals.adjust(VitalKind::Cleanliness, CLEAN_CLEANLINESS);
    buddy.vitals.adjust(VitalKind::Happiness, CLEAN_HAPPINESS);
    buddy.last_cleaned = now;
    buddy.decay.reset_cleanliness();

    Ok(finish(buddy, CareAction::Clean, CLEAN_COST, CLEAN_XP))
}

/// Restores health to full. Not additive.
pub fn medical_care(buddy: &mut Buddy, credits: &mut u32) -> CareResult<CareOutcome> {
    spend_credits(credits, MEDICAL_CARE_COST)?;

    buddy.vitals.set(VitalKind::Health, VITAL_MAX);

    Ok(finish(
        buddy,
        CareAction::MedicalCare,
        MEDICAL_CARE_COST,
        MEDICAL_CARE_XP,
    ))
}

/// Puts the buddy to rest. Resting at night pays off more.
pub fn rest(buddy: &mut Buddy, credits: &mut u32, now: NaiveDateTime) -> CareResult<CareOutcome> {
    spend_credits(credits, REST_COST)?;

    let (energy, happiness, xp) = if is_night_time(now) {
        (REST_NIGHT_ENERGY, REST_NIGHT_HAPPINESS, REST_NIGHT_XP)
    } else {
        (REST_DAY_ENERGY, REST_DAY_HAPPINESS, REST_DAY_XP)
    };
    buddy.vitals.adjust(VitalKind::Energy, energy);
    buddy.vitals.adjust(VitalKind::Happiness, happiness);
    buddy.last_slept = now;
    buddy.decay.reset_energy();

    Ok(finish(buddy, CareAction::Rest, REST_COST, xp))
}

fn finish(buddy: &mut Buddy, action: CareAction, cost: u32, xp: u64) -> CareOutcome {
    let levelups = gain_experience(buddy, xp);
    tracing::debug!(action = action.name(), cost, xp, "Care action");
    CareOutcome {
        action,
        credits_spent: cost,
        xp_gained: xp,
        levelups,
    }
}

const PET_REACTIONS: [&str; 7] = ["💖", "✨", "🌟", "💫", "🎉", "😊", "🥰"];

/// Free interaction: a small happiness boost and a random reaction emoji.
pub fn pet_buddy<R: Rng>(buddy: &mut Buddy, rng: &mut R) -> &'static str {
    buddy.vitals.adjust(VitalKind::Happiness, PET_HAPPINESS);
    gain_experience(buddy, PET_XP);
    PET_REACTIONS.choose(rng).copied().unwrap_or("💖")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CareError;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn plankton_soup() -> &'static Food {
        find_food("plankton_soup").unwrap()
    }

    #[test]
    fn test_feed_worked_example() {
        let mut buddy = Buddy::new(at(8));
        let mut credits = 10;
        let later = at(10);

        let outcome = feed(&mut buddy, &mut credits, plankton_soup(), later).unwrap();
        assert_eq!(outcome.credits_spent, 10);
        assert_eq!(credits, 0);
        assert_eq!(buddy.vitals().hunger(), 100);
        assert_eq!(buddy.vitals().happiness(), 90);
        assert_eq!(buddy.vitals().health(), 91);
        assert_eq!(buddy.last_fed, later);

        let snapshot = buddy.clone();
        let err = feed(&mut buddy, &mut credits, plankton_soup(), at(11)).unwrap_err();
        assert_eq!(
            err,
            CareError::InsufficientFunds {
                cost: 10,
                balance: 0
            }
        );
        assert_eq!(credits, 0);
        assert_eq!(buddy, snapshot);
    }

    #[test]
    fn test_feed_resets_hunger_ledger() {
        let mut buddy = Buddy::new(at(8));
        buddy.decay.hunger = 12;
        let mut credits = 100;
        feed(&mut buddy, &mut credits, plankton_soup(), at(14)).unwrap();
        assert_eq!(buddy.decay.hunger, 0);
    }

    #[test]
    fn test_play() {
        let mut buddy = Buddy::new(at(8));
        let mut credits = 100;
        let outcome = play(&mut buddy, &mut credits, at(9)).unwrap();

        assert_eq!(credits, 85);
        assert_eq!(buddy.vitals().happiness(), 100);
        assert_eq!(buddy.vitals().energy(), 80);
        assert_eq!(buddy.last_played, at(9));
        assert_eq!(outcome.xp_gained, 10);
        assert_eq!(buddy.experience, 10);
    }

    #[test]
    fn test_play_energy_floor() {
        let mut buddy = Buddy::new(at(8));
        buddy.set_vital(VitalKind::Energy, 4);
        let mut credits = 15;
        play(&mut buddy, &mut credits, at(9)).unwrap();
        assert_eq!(buddy.vitals().energy(), 0);
    }

    #[test]
    fn test_clean() {
        let mut buddy = Buddy::new(at(8));
        buddy.set_vital(VitalKind::Cleanliness, 40);
        buddy.decay.cleanliness = 9;
        let mut credits = 20;
        clean(&mut buddy, &mut credits, at(9)).unwrap();

        assert_eq!(credits, 0);
        assert_eq!(buddy.vitals().cleanliness(), 70);
        assert_eq!(buddy.vitals().happiness(), 90);
        assert_eq!(buddy.last_cleaned, at(9));
        assert_eq!(buddy.decay.cleanliness, 0);
        assert_eq!(buddy.experience, 8);
    }

    #[test]
    fn test_medical_care_sets_full_health() {
        let mut buddy = Buddy::new(at(8));
        buddy.set_vital(VitalKind::Health, 12);
        let mut credits = 30;
        medical_care(&mut buddy, &mut credits).unwrap();
        assert_eq!(credits, 5);
        assert_eq!(buddy.vitals().health(), 100);
        assert_eq!(buddy.experience, 12);
    }

    #[test]
    fn test_rest_at_night_is_better() {
        let mut night = Buddy::new(at(8));
        night.set_vital(VitalKind::Energy, 30);
        night.set_vital(VitalKind::Happiness, 50);
        let mut day = night.clone();
        let mut credits = 100;

        rest(&mut night, &mut credits, at(23)).unwrap();
        rest(&mut day, &mut credits, at(13)).unwrap();

        assert_eq!(night.vitals().energy(), 70);
        assert_eq!(night.vitals().happiness(), 60);
        assert_eq!(night.experience, 5);
        assert_eq!(day.vitals().energy(), 55);
        assert_eq!(day.vitals().happiness(), 55);
        assert_eq!(day.experience, 3);
        assert_eq!(night.last_slept, at(23));
        assert_eq!(credits, 90);
    }

    #[test]
    fn test_every_paid_action_rejects_without_funds() {
        let mut buddy = Buddy::new(at(8));
        let snapshot = buddy.clone();
        let mut credits = 4;

        assert!(play(&mut buddy, &mut credits, at(9)).is_err());
        assert!(clean(&mut buddy, &mut credits, at(9)).is_err());
        assert!(medical_care(&mut buddy, &mut credits).is_err());
        assert!(rest(&mut buddy, &mut credits, at(9)).is_err());
        assert_eq!(credits, 4);
        assert_eq!(buddy, snapshot);
    }

    #[test]
    fn test_care_xp_can_level_up() {
        let mut buddy = Buddy::new(at(8));
        buddy.experience = 95;
        let mut credits = 100;
        let outcome = play(&mut buddy, &mut credits, at(9)).unwrap();
        assert_eq!(outcome.levelups, 1);
        assert_eq!(buddy.level, 2);
        assert_eq!(buddy.experience, 5);
    }

    #[test]
    fn test_pet_buddy() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut buddy = Buddy::new(at(8));
        let reaction = pet_buddy(&mut buddy, &mut rng);
        assert!(PET_REACTIONS.contains(&reaction));
        assert_eq!(buddy.vitals().happiness(), 82);
        assert_eq!(buddy.experience, 1);
    }

    #[test]
    fn test_fixed_costs() {
        assert_eq!(CareAction::Feed.fixed_cost(), None);
        assert_eq!(CareAction::Play.fixed_cost(), Some(15));
        assert_eq!(CareAction::Clean.fixed_cost(), Some(20));
        assert_eq!(CareAction::MedicalCare.fixed_cost(), Some(25));
        assert_eq!(CareAction::Rest.fixed_cost(), Some(5));
    }
}
