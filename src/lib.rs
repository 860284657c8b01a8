//! SustainaBuddy - virtual-pet simulation engine
//!
//! This module exposes the buddy simulation for the CLI, the headless
//! simulator, and any host app embedding it.

pub mod buddy;
pub mod config;
pub mod core;
pub mod customization;
pub mod error;
pub mod profile;
pub mod reminders;
pub mod save_manager;
#[cfg(feature = "service")]
pub mod service;
pub mod utils;

pub use crate::buddy::{Buddy, EvolutionStage, Mood, Species, VitalKind, Vitals};
pub use crate::config::BuddyConfig;
pub use crate::core::clock::{Clock, ManualClock, SystemClock};
pub use crate::core::game_state::CareState;
pub use crate::core::offline::{process_offline_time, OfflineReport};
pub use crate::core::tick::{buddy_tick, TickEvent, TickResult};
pub use crate::error::{CareError, CareResult};
pub use crate::profile::{CaregiverProfile, Identity};
