//! Simulation configuration.
//!
//! Values come from CLI overrides first, then environment variables, then
//! defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::constants::{DECK_SIZE, MAX_PLAYERS, cards_required};

pub const DEFAULT_TRIALS: usize = 100_000;
pub const DEFAULT_PLAYERS: usize = 2;

/// Complete simulation configuration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SimConfig {
    /// Number of deals to simulate
    pub trials: usize,
    /// Players seated at every deal
    pub players: usize,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            players: DEFAULT_PLAYERS,
            rng_seed: None,
        }
    }
}

impl SimConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `trials_override` - Optional trial count (from CLI args)
    /// * `players_override` - Optional player count (from CLI args)
    /// * `seed_override` - Optional RNG seed (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if `SIM_TRIALS` or `SIM_PLAYERS` is set but isn't a
    /// non-negative integer, or if `SIM_SEED` is set but isn't a valid `u64`.
    pub fn from_env(
        trials_override: Option<usize>,
        players_override: Option<usize>,
        seed_override: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let trials = match trials_override {
            Some(trials) => trials,
            None => {
                parse_env("SIM_TRIALS", "a non-negative integer")?.unwrap_or(DEFAULT_TRIALS)
            }
        };
        let players = match players_override {
            Some(players) => players,
            None => {
                parse_env("SIM_PLAYERS", "a non-negative integer")?.unwrap_or(DEFAULT_PLAYERS)
            }
        };
        let rng_seed = match seed_override {
            Some(seed) => Some(seed),
            None => parse_env("SIM_SEED", "an unsigned 64-bit integer")?,
        };

        Ok(Self {
            trials,
            players,
            rng_seed,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::Invalid {
                var: "SIM_TRIALS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.players == 0 {
            return Err(ConfigError::Invalid {
                var: "SIM_PLAYERS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        if self.players > MAX_PLAYERS {
            return Err(ConfigError::Invalid {
                var: "SIM_PLAYERS".to_string(),
                reason: format!(
                    "Must be at most {MAX_PLAYERS} ({} players need {} cards, deck holds {DECK_SIZE})",
                    self.players,
                    cards_required(self.players)
                ),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parses an environment variable if it's set. `expected` names the accepted
/// format in the error.
fn parse_env<T>(key: &str, expected: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("'{v}' is not {expected}"),
            }),
        Err(_) => Ok(None),
    }
}
