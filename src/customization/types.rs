//! Accessory and outfit catalog plus the buddy's wardrobe.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Accessory slots. One accessory may be equipped per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccessorySlot {
    Hat,
    Glasses,
    Necklace,
    Bow,
}

impl AccessorySlot {
    /// Slots in the order they are layered onto the buddy's appearance.
    pub const ALL: [AccessorySlot; 4] = [
        AccessorySlot::Hat,
        AccessorySlot::Glasses,
        AccessorySlot::Necklace,
        AccessorySlot::Bow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AccessorySlot::Hat => "Hat",
            AccessorySlot::Glasses => "Glasses",
            AccessorySlot::Necklace => "Necklace",
            AccessorySlot::Bow => "Bow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessory {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub slot: AccessorySlot,
    pub cost: u32,
    pub is_premium: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outfit {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub cost: u32,
    pub is_premium: bool,
}

/// Anything sold in the customization store.
pub trait StoreItem {
    fn id(&self) -> &'static str;
    fn cost(&self) -> u32;
}

impl StoreItem for Accessory {
    fn id(&self) -> &'static str {
        self.id
    }

    fn cost(&self) -> u32 {
        self.cost
    }
}

impl StoreItem for Outfit {
    fn id(&self) -> &'static str {
        self.id
    }

    fn cost(&self) -> u32 {
        self.cost
    }
}

pub const ACCESSORIES: [Accessory; 10] = [
    // Hats
    Accessory {
        id: "sailor_hat",
        name: "Sailor Hat",
        emoji: "🧢",
        slot: AccessorySlot::Hat,
        cost: 50,
        is_premium: false,
    },
    Accessory {
        id: "crown",
        name: "Crown",
        emoji: "👑",
        slot: AccessorySlot::Hat,
        cost: 200,
        is_premium: true,
    },
    Accessory {
        id: "party_hat",
        name: "Party Hat",
        emoji: "🎉",
        slot: AccessorySlot::Hat,
        cost: 75,
        is_premium: false,
    },
    // Glasses
    Accessory {
        id: "cool_shades",
        name: "Cool Shades",
        emoji: "🕶️",
        slot: AccessorySlot::Glasses,
        cost: 60,
        is_premium: false,
    },
    Accessory {
        id: "reading_glasses",
        name: "Reading Glasses",
        emoji: "👓",
        slot: AccessorySlot::Glasses,
        cost: 40,
        is_premium: false,
    },
    Accessory {
        id: "star_glasses",
        name: "Star Glasses",
        emoji: "⭐",
        slot: AccessorySlot::Glasses,
        cost: 150,
        is_premium: true,
    },
    // Necklaces
    Accessory {
        id: "pearl_necklace",
        name: "Pearl Necklace",
        emoji: "📿",
        slot: AccessorySlot::Necklace,
        cost: 80,
        is_premium: false,
    },
    Accessory {
        id: "gold_chain",
        name: "Gold Chain",
        emoji: "🥇",
        slot: AccessorySlot::Necklace,
        cost: 120,
        is_premium: true,
    },
    // Bows
    Accessory {
        id: "cute_bow",
        name: "Cute Bow",
        emoji: "🎀",
        slot: AccessorySlot::Bow,
        cost: 30,
        is_premium: false,
    },
    Accessory {
        id: "fancy_bow",
        name: "Fancy Bow",
        emoji: "🌸",
        slot: AccessorySlot::Bow,
        cost: 90,
        is_premium: true,
    },
];

/// The free outfit every buddy starts with.
pub const CASUAL_OUTFIT_ID: &str = "casual";

pub const OUTFITS: [Outfit; 7] = [
    Outfit {
        id: CASUAL_OUTFIT_ID,
        name: "Casual",
        emoji: "👕",
        cost: 0,
        is_premium: false,
    },
    Outfit {
        id: "formal_suit",
        name: "Formal Suit",
        emoji: "🤵",
        cost: 100,
        is_premium: false,
    },
    Outfit {
        id: "beach_wear",
        name: "Beach Wear",
        emoji: "🏖️",
        cost: 80,
        is_premium: false,
    },
    Outfit {
        id: "winter_coat",
        name: "Winter Coat",
        emoji: "🧥",
        cost: 120,
        is_premium: false,
    },
    Outfit {
        id: "superhero",
        name: "Superhero",
        emoji: "🦸",
        cost: 250,
        is_premium: true,
    },
    Outfit {
        id: "princess_dress",
        name: "Princess Dress",
        emoji: "👗",
        cost: 200,
        is_premium: true,
    },
    Outfit {
        id: "pirate_costume",
        name: "Pirate Costume",
        emoji: "🏴‍☠️",
        cost: 180,
        is_premium: true,
    },
];

pub fn find_accessory(id: &str) -> Option<&'static Accessory> {
    ACCESSORIES.iter().find(|a| a.id == id)
}

pub fn find_outfit(id: &str) -> Option<&'static Outfit> {
    OUTFITS.iter().find(|o| o.id == id)
}

pub fn accessories_for_slot(slot: AccessorySlot) -> impl Iterator<Item = &'static Accessory> {
    ACCESSORIES.iter().filter(move |a| a.slot == slot)
}

/// Accessory ids equipped per slot.
///
/// When adding slots, use `#[serde(default)]` so older saves still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedAccessories {
    pub hat: Option<String>,
    pub glasses: Option<String>,
    pub necklace: Option<String>,
    pub bow: Option<String>,
}

impl EquippedAccessories {
    pub fn get(&self, slot: AccessorySlot) -> Option<&str> {
        match slot {
            AccessorySlot::Hat => self.hat.as_deref(),
            AccessorySlot::Glasses => self.glasses.as_deref(),
            AccessorySlot::Necklace => self.necklace.as_deref(),
            AccessorySlot::Bow => self.bow.as_deref(),
        }
    }

    pub fn set(&mut self, slot: AccessorySlot, id: Option<String>) {
        match slot {
            AccessorySlot::Hat => self.hat = id,
            AccessorySlot::Glasses => self.glasses = id,
            AccessorySlot::Necklace => self.necklace = id,
            AccessorySlot::Bow => self.bow = id,
        }
    }

    /// Equipped ids in appearance order.
    pub fn iter_equipped(&self) -> impl Iterator<Item = &str> {
        [&self.hat, &self.glasses, &self.necklace, &self.bow]
            .into_iter()
            .filter_map(|id| id.as_deref())
    }
}

/// Owned and equipped cosmetics. Equipped items are always a subset of owned ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wardrobe {
    pub owned_accessories: BTreeSet<String>,
    pub equipped: EquippedAccessories,
    pub owned_outfits: BTreeSet<String>,
    pub current_outfit: Option<String>,
}

impl Wardrobe {
    pub fn new() -> Self {
        let mut owned_outfits = BTreeSet::new();
        owned_outfits.insert(CASUAL_OUTFIT_ID.to_string());
        Self {
            owned_accessories: BTreeSet::new(),
            equipped: EquippedAccessories::default(),
            owned_outfits,
            current_outfit: None,
        }
    }

    pub fn owns_accessory(&self, id: &str) -> bool {
        self.owned_accessories.contains(id)
    }

    pub fn owns_outfit(&self, id: &str) -> bool {
        self.owned_outfits.contains(id)
    }
}

impl Default for Wardrobe {
    fn default() -> Self {
        Self::new()
    }
}
