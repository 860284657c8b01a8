//! The buddy itself: vitals, decay, sleep, mood, care and growth.
//!
//! Everything here is a pure function of the buddy and an explicit `now`.
//! Nothing reads the wall clock.

pub mod care;
pub mod decay;
pub mod growth;
pub mod mood;
pub mod naming;
pub mod sleep;
pub mod types;
pub mod vitals;

pub use care::*;
pub use decay::*;
pub use growth::*;
pub use mood::*;
pub use naming::*;
pub use sleep::*;
pub use types::*;
pub use vitals::*;
