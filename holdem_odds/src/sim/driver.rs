use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::config::{ConfigError, SimConfig};
use crate::game::{
    DealError, PokerTable,
    functional::{has_flush, has_pair},
};

/// Errors that stop a simulation run
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;

/// Whether any player at one deal hit each pattern.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TrialOutcome {
    pub flush: bool,
    pub pair: bool,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SimReport {
    pub trials: usize,
    pub players: usize,
    pub flush_hits: usize,
    pub pair_hits: usize,
}

impl SimReport {
    #[must_use]
    pub fn flush_frequency(&self) -> f64 {
        self.flush_hits as f64 / self.trials as f64
    }

    #[must_use]
    pub fn pair_frequency(&self) -> f64 {
        self.pair_hits as f64 / self.trials as f64
    }
}

/// Flush frequency on the first line, pair frequency on the second.
impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.flush_frequency())?;
        write!(f, "{}", self.pair_frequency())
    }
}

/// Monte Carlo driver. Owns the RNG and a single table that's re-dealt
/// every trial.
#[derive(Debug)]
pub struct Simulation<R = StdRng> {
    config: SimConfig,
    rng: R,
    table: PokerTable,
}

impl Simulation<StdRng> {
    /// Seeds from `config.rng_seed` when set, otherwise from OS entropy.
    pub fn new(config: SimConfig) -> Result<Self> {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulation<R> {
    /// Uses `rng` as is; `config.rng_seed` is ignored.
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            table: PokerTable::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The most recently dealt table.
    #[must_use]
    pub fn table(&self) -> &PokerTable {
        &self.table
    }

    /// Shuffles, deals, and checks every player for a flush and a pair.
    pub fn run_trial(&mut self) -> Result<TrialOutcome> {
        self.table.deal(self.config.players, &mut self.rng)?;
        let board = &self.table.community_cards;
        Ok(TrialOutcome {
            flush: self.table.players.iter().any(|p| has_flush(p, board)),
            pair: self.table.players.iter().any(|p| has_pair(p, board)),
        })
    }

    pub fn run(&mut self) -> Result<SimReport> {
        let SimConfig {
            trials, players, ..
        } = self.config;
        info!(
            "Simulating {} deals for {} players (seed: {})",
            trials,
            players,
            self.config
                .rng_seed
                .map_or_else(|| "entropy".to_string(), |s| s.to_string())
        );

        let progress_step = (trials / 10).max(1);
        let mut report = SimReport {
            trials,
            players,
            flush_hits: 0,
            pair_hits: 0,
        };
        for i in 1..=trials {
            let outcome = self.run_trial()?;
            report.flush_hits += usize::from(outcome.flush);
            report.pair_hits += usize::from(outcome.pair);
            if i % progress_step == 0 {
                debug!(
                    "{}/{} deals: {} flush hits, {} pair hits",
                    i, trials, report.flush_hits, report.pair_hits
                );
            }
        }

        info!(
            "Finished {} deals: {} flush hits, {} pair hits",
            trials, report.flush_hits, report.pair_hits
        );
        Ok(report)
    }
}
