//! Cosmetics store: accessories, outfits and the wardrobe that holds them.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
