use super::decay::DecayLedger;
use super::mood::{derive_mood, Mood};
use super::vitals::{VitalKind, Vitals};
use crate::core::constants::{DEFAULT_BUDDY_NAME, DEFAULT_HOURS_SINCE_SLEEP};
use crate::customization::types::{find_accessory, find_outfit, Wardrobe, CASUAL_OUTFIT_ID};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    SeaOtter,
    SeaTurtle,
    Dolphin,
    Whale,
    Manatee,
    BelugaWhale,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::SeaOtter,
        Species::SeaTurtle,
        Species::Dolphin,
        Species::Whale,
        Species::Manatee,
        Species::BelugaWhale,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Species::SeaOtter => "Sea Otter",
            Species::SeaTurtle => "Sea Turtle",
            Species::Dolphin => "Dolphin",
            Species::Whale => "Whale",
            Species::Manatee => "Manatee",
            Species::BelugaWhale => "Beluga Whale",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Species::SeaOtter => "🦦",
            Species::SeaTurtle => "🐢",
            Species::Dolphin => "🐬",
            Species::Whale => "🐋",
            Species::Manatee => "🦭",
            Species::BelugaWhale => "🐋",
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, Species::Manatee | Species::BelugaWhale)
    }

    /// Name ideas shown by the rename prompt.
    pub fn suggested_names(&self) -> &'static [&'static str] {
        match self {
            Species::SeaOtter => &["Ollie", "Pearl", "Splash", "Kelp", "Whiskers", "Bubbles"],
            Species::SeaTurtle => &["Shelly", "Crush", "Sage", "Coral", "Neptune", "Marina"],
            Species::Dolphin => &["Echo", "Flipper", "Aqua", "Sonic", "Wave", "Splash"],
            Species::Whale => &["Moby", "Blue", "Ocean", "Titan", "Deep", "Majesty"],
            Species::Manatee => &["Gentle", "Serenity", "Calm", "Peaceful", "Grace", "Zen"],
            Species::BelugaWhale => &["Arctic", "Snow", "Crystal", "Frost", "Polar", "Ice"],
        }
    }
}

/// Growth stages. Ordering follows the life cycle, so `Baby < Elder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EvolutionStage {
    Baby,
    Child,
    Teen,
    Adult,
    Elder,
}

impl EvolutionStage {
    pub const ALL: [EvolutionStage; 5] = [
        EvolutionStage::Baby,
        EvolutionStage::Child,
        EvolutionStage::Teen,
        EvolutionStage::Adult,
        EvolutionStage::Elder,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EvolutionStage::Baby => "Baby",
            EvolutionStage::Child => "Child",
            EvolutionStage::Teen => "Teen",
            EvolutionStage::Adult => "Adult",
            EvolutionStage::Elder => "Elder",
        }
    }

    /// Sprite scale used by the presentation layer.
    pub fn size_multiplier(&self) -> f64 {
        match self {
            EvolutionStage::Baby => 0.7,
            EvolutionStage::Child => 0.85,
            EvolutionStage::Teen => 1.0,
            EvolutionStage::Adult => 1.2,
            EvolutionStage::Elder => 1.1,
        }
    }

    pub fn next(&self) -> Option<EvolutionStage> {
        match self {
            EvolutionStage::Baby => Some(EvolutionStage::Child),
            EvolutionStage::Child => Some(EvolutionStage::Teen),
            EvolutionStage::Teen => Some(EvolutionStage::Adult),
            EvolutionStage::Adult => Some(EvolutionStage::Elder),
            EvolutionStage::Elder => None,
        }
    }
}

/// The virtual pet.
///
/// IMPORTANT: When adding fields, use `#[serde(default)]` to keep older saves loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buddy {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub(crate) vitals: Vitals,

    pub last_fed: NaiveDateTime,
    pub last_played: NaiveDateTime,
    pub last_cleaned: NaiveDateTime,
    pub last_slept: NaiveDateTime,
    pub born_at: NaiveDateTime,
    /// Last time the decay step advanced; guards against double-counting.
    pub last_update: NaiveDateTime,
    #[serde(default)]
    pub decay: DecayLedger,

    pub age: u32,
    pub experience: u64,
    pub level: u32,
    pub evolution_stage: EvolutionStage,

    #[serde(default)]
    pub wardrobe: Wardrobe,
}

impl Buddy {
    /// Creates a freshly hatched buddy with default vitals.
    pub fn new(now: NaiveDateTime) -> Self {
        use uuid::Uuid;

        Self {
            id: Uuid::new_v4().to_string(),
            name: DEFAULT_BUDDY_NAME.to_string(),
            species: Species::SeaOtter,
            vitals: Vitals::default(),
            last_fed: now,
            last_played: now,
            last_cleaned: now,
            last_slept: now - Duration::hours(DEFAULT_HOURS_SINCE_SLEEP),
            born_at: now,
            last_update: now,
            decay: DecayLedger::default(),
            age: 0,
            experience: 0,
            level: 1,
            evolution_stage: EvolutionStage::Baby,
            wardrobe: Wardrobe::new(),
        }
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn vital(&self, kind: VitalKind) -> i32 {
        self.vitals.get(kind)
    }

    /// Always derived from the current vitals, never stored.
    pub fn mood(&self) -> Mood {
        derive_mood(&self.vitals)
    }

    pub fn overall_wellbeing(&self) -> i32 {
        self.vitals.wellbeing()
    }

    pub fn needs_attention(&self) -> bool {
        self.vitals.needs_attention()
    }

    /// Adjusts a vital by `delta` (clamped). Returns the applied change.
    pub fn adjust_vital(&mut self, kind: VitalKind, delta: i32) -> i32 {
        self.vitals.adjust(kind, delta)
    }

    /// Sets a vital (clamped).
    pub fn set_vital(&mut self, kind: VitalKind, value: i32) {
        self.vitals.set(kind, value);
    }

    /// Species emoji followed by equipped accessories and any non-casual outfit.
    pub fn appearance(&self) -> String {
        let mut appearance = self.species.emoji().to_string();
        for id in self.wardrobe.equipped.iter_equipped() {
            if let Some(accessory) = find_accessory(id) {
                appearance.push_str(accessory.emoji);
            }
        }
        if let Some(outfit) = self
            .wardrobe
            .current_outfit
            .as_deref()
            .filter(|id| *id != CASUAL_OUTFIT_ID)
            .and_then(find_outfit)
        {
            appearance.push_str(outfit.emoji);
        }
        appearance
    }
}
