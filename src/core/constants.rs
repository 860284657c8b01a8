// Tick and timing
pub const DEFAULT_TICK_INTERVAL_SECONDS: u64 = 60;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;
pub const MAX_OFFLINE_DAYS: u32 = 7;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

// Vital range
pub const VITAL_MIN: i32 = 0;
pub const VITAL_MAX: i32 = 100;

// Starting vitals
pub const DEFAULT_HAPPINESS: i32 = 80;
pub const DEFAULT_HEALTH: i32 = 85;
pub const DEFAULT_HUNGER: i32 = 70;
pub const DEFAULT_ENERGY: i32 = 90;
pub const DEFAULT_CLEANLINESS: i32 = 85;
pub const DEFAULT_HOURS_SINCE_SLEEP: i64 = 8;
pub const DEFAULT_BUDDY_NAME: &str = "Buddy";

// Decay rates (points per hour)
pub const HUNGER_DECAY_PER_HOUR: f64 = 2.0;
pub const ENERGY_DRAIN_PER_HOUR: f64 = 1.5;
pub const ENERGY_RECOVERY_PER_HOUR: f64 = 0.5;
pub const CLEANLINESS_DECAY_PER_HOUR: f64 = 1.0;

// Neglect thresholds applied by the decay step
pub const UNHAPPY_VITAL_THRESHOLD: i32 = 30;
pub const UNHEALTHY_VITAL_THRESHOLD: i32 = 20;
pub const UNHEALTHY_HOURS_AWAKE: f64 = 24.0;

// Sleep cycle
pub const NIGHT_START_HOUR: u32 = 22;
pub const NIGHT_END_HOUR: u32 = 6;
pub const EXHAUSTED_ENERGY: i32 = 20;
pub const MAX_HOURS_AWAKE: f64 = 16.0;
pub const NIGHT_SLEEPY_ENERGY: i32 = 60;
pub const GETTING_TIRED_HOURS: f64 = 12.0;

// Mood bands (lower bound of the band, on the five-vital average)
pub const MOOD_ECSTATIC_MIN: i32 = 80;
pub const MOOD_HAPPY_MIN: i32 = 60;
pub const MOOD_CONTENT_MIN: i32 = 40;
pub const MOOD_SAD_MIN: i32 = 20;

// Care action costs (eco-credits)
pub const PLAY_COST: u32 = 15;
pub const CLEAN_COST: u32 = 20;
pub const REST_COST: u32 = 5;
pub const MEDICAL_CARE_COST: u32 = 25;

// Care action effects
pub const PLAY_HAPPINESS: i32 = 20;
pub const PLAY_ENERGY_COST: i32 = 10;
pub const PLAY_XP: u64 = 10;
pub const CLEAN_CLEANLINESS: i32 = 30;
pub const CLEAN_HAPPINESS: i32 = 10;
pub const CLEAN_XP: u64 = 8;
pub const MEDICAL_CARE_XP: u64 = 12;
pub const REST_NIGHT_ENERGY: i32 = 40;
pub const REST_NIGHT_HAPPINESS: i32 = 10;
pub const REST_NIGHT_XP: u64 = 5;
pub const REST_DAY_ENERGY: i32 = 25;
pub const REST_DAY_HAPPINESS: i32 = 5;
pub const REST_DAY_XP: u64 = 3;
pub const PET_HAPPINESS: i32 = 2;
pub const PET_XP: u64 = 1;
pub const FOOD_HAPPINESS_DIVISOR: i32 = 3;
pub const FOOD_HEALTH_DIVISOR: i32 = 5;

// Leveling
pub const XP_PER_LEVEL: u64 = 100;
pub const LEVEL_UP_HAPPINESS: i32 = 5;
pub const LEVEL_UP_HEALTH: i32 = 5;
pub const DAILY_XP_DIVISOR: i32 = 10;
pub const MIN_DAILY_XP: u64 = 1;

// One-time evolution bonuses
pub const CHILD_BONUS_HAPPINESS: i32 = 10;
pub const CHILD_BONUS_XP: u64 = 50;
pub const TEEN_BONUS_HEALTH: i32 = 15;
pub const TEEN_BONUS_XP: u64 = 100;
pub const ADULT_BONUS_HAPPINESS: i32 = 20;
pub const ADULT_BONUS_HEALTH: i32 = 20;
pub const ADULT_BONUS_XP: u64 = 200;
pub const ELDER_BONUS_XP: u64 = 500;

// Notification triggers
pub const CRITICAL_HUNGER: i32 = 20;
pub const CRITICAL_ENERGY: i32 = 15;
pub const CRITICAL_HEALTH: i32 = 25;
pub const CRITICAL_CLEANLINESS: i32 = 20;
pub const EVOLUTION_IMMINENT_PROGRESS: f64 = 0.8;
pub const LEVEL_UP_IMMINENT_XP: u64 = 20;

// Needs-attention thresholds (presentation badge)
pub const ATTENTION_HUNGER: i32 = 30;
pub const ATTENTION_ENERGY: i32 = 20;
pub const ATTENTION_CLEANLINESS: i32 = 25;
pub const ATTENTION_HEALTH: i32 = 30;

// Caregiver profile
pub const STARTING_ECO_CREDITS: u32 = 100;
pub const DEFAULT_CAREGIVER_NAME: &str = "Eco Warrior";
pub const MAX_NAME_LENGTH: usize = 16;

// Save system
pub const SAVE_VERSION_MAGIC: u64 = 0x4255_4444_5953_4156; // "BUDDYSAV" in hex
