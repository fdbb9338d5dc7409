//! Monte Carlo driver: repeatedly deals a table and counts how often any
//! player holds a flush or a pair.

pub mod config;
pub mod driver;

pub use config::{ConfigError, SimConfig};
pub use driver::{SimError, SimReport, Simulation, TrialOutcome};
