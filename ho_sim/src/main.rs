//! Monte Carlo estimator for flush and pair frequencies.
//!
//! Deals repeated Texas Hold'em hands and reports how often at least one
//! player's seven cards hold a flush or a pair.

use anyhow::{Context, Result};
use log::info;
use pico_args::Arguments;
use rand::{SeedableRng, rngs::StdRng};

use holdem_odds::{PokerTable, SimConfig, Simulation};

const HELP: &str = "\
Estimate flush and pair frequencies over simulated Texas Hold'em deals

USAGE:
  ho_sim [OPTIONS]

OPTIONS:
  --trials     N           Number of deals to simulate  [default: env SIM_TRIALS or 100000]
  --players    N           Players at the table (1-22)  [default: env SIM_PLAYERS or 2]
  --seed       N           RNG seed for a reproducible run  [default: env SIM_SEED or entropy]

FLAGS:
  --show-table             Deal a single table and print it instead of simulating
  --json                   Print the report as JSON
  -v, --verbose            Log progress (overridden by RUST_LOG)
  -h, --help               Print help information

ENVIRONMENT:
  SIM_TRIALS               Number of deals
  SIM_PLAYERS              Players per deal
  SIM_SEED                 RNG seed
  RUST_LOG                 Log filter (e.g., debug)
";

struct Args {
    trials: Option<usize>,
    players: Option<usize>,
    seed: Option<u64>,
    show_table: bool,
    json: bool,
    verbose: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        trials: pargs
            .opt_value_from_str("--trials")
            .context("--trials expects a positive integer")?,
        players: pargs
            .opt_value_from_str("--players")
            .context("--players expects a positive integer")?,
        seed: pargs
            .opt_value_from_str("--seed")
            .context("--seed expects an unsigned 64-bit integer")?,
        show_table: pargs.contains("--show-table"),
        json: pargs.contains("--json"),
        verbose: pargs.contains(["-v", "--verbose"]),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("unexpected arguments: {remaining:?}\n\n{HELP}");
    }

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();

    let config = SimConfig::from_env(args.trials, args.players, args.seed)
        .context("Failed to load simulation config")?;
    config.validate().context("Invalid simulation config")?;

    if args.show_table {
        show_table(&config)
    } else {
        simulate(config, args.json)
    }
}

/// Deals one table and prints players, board, burns, and the leftover deck.
fn show_table(config: &SimConfig) -> Result<()> {
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let table = PokerTable::new(config.players, &mut rng)
        .with_context(|| format!("Failed to deal a table for {} players", config.players))?;
    println!("{table}");
    Ok(())
}

fn simulate(config: SimConfig, json: bool) -> Result<()> {
    let mut sim = Simulation::new(config).context("Failed to set up simulation")?;
    let report = sim.run().context("Simulation failed")?;
    info!(
        "Flush hits {}/{}, pair hits {}/{}",
        report.flush_hits, report.trials, report.pair_hits, report.trials
    );

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to encode report")?
        );
    } else {
        println!("{report}");
    }
    Ok(())
}
