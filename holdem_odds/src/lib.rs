//! # Holdem Odds
//!
//! Texas Hold'em deal simulation with a Monte Carlo estimate of how often at
//! least one player's seven cards (two hole cards plus five community cards)
//! contain a flush or a pair.
//!
//! ## Core Modules
//!
//! - [`game`]: Card/deck model, the dealing engine, and hand detectors
//! - [`sim`]: Simulation configuration and the Monte Carlo driver
//!
//! ## Dealing
//!
//! Each deal shuffles a fresh 52-card deck and consumes it from the front:
//!
//! - **Hole cards**: two per player, dealt round-robin
//! - **Flop**: one burn, then three community cards
//! - **Turn**: one burn, then one community card
//! - **River**: one burn, then one community card
//!
//! ## Example
//!
//! ```
//! use holdem_odds::{SimConfig, Simulation};
//!
//! let config = SimConfig {
//!     trials: 1_000,
//!     players: 2,
//!     rng_seed: Some(42),
//! };
//! let report = Simulation::new(config).unwrap().run().unwrap();
//! assert!(report.pair_frequency() > 0.0);
//! ```

/// Card model, dealing engine, and hand detectors.
pub mod game;
pub use game::{
    DealError, PokerTable,
    constants::{self, MAX_PLAYERS},
    entities::{self, Card, Deck, Player, Suit},
    functional,
};

/// Simulation configuration and driver.
pub mod sim;
pub use sim::{ConfigError, SimConfig, SimError, SimReport, Simulation, TrialOutcome};
