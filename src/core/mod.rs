//! Session state, time, and the periodic simulation driver.

pub mod clock;
pub mod constants;
pub mod game_state;
pub mod offline;
pub mod tick;

pub use clock::*;
pub use game_state::*;
pub use offline::*;
pub use tick::*;
