//! Card model, dealing engine, and hand detectors.
//!
//! - [`entities`]: cards, the deck, and players
//! - [`table`]: the dealt game state and its invariants
//! - [`functional`]: flush and pair detection

pub mod constants;
pub mod entities;
pub mod functional;
pub mod table;

pub use table::{DealError, PokerTable};
