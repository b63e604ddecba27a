//! Leader Simulation Driver
//!
//! Runs the demo galaxy's leaders through a number of turns and reports
//! each leader's decision.

use clap::Parser;
use galaxy_types::GameTurn;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use leader_core::config::EngineConfig;
use leader_core::driver::run_turn;
use leader_core::setup::{create_galaxy, create_leaders, leader_roster};
use leader_core::StandardWeighting;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "leader_sim")]
#[command(about = "Runs autonomous leaders through a series of turns")]
struct Args {
    /// Random seed for reproducibility (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of turns to simulate (overrides the config file)
    #[arg(long)]
    turns: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON snapshot after every turn
    #[arg(long)]
    json: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.print_default_config {
        print!("{}", leader_core::config::default_config_toml());
        return;
    }

    let config = match &args.config {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Could not load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => EngineConfig::load_or_default(),
    };
    let seed = args.seed.unwrap_or(config.simulation.seed);
    let turns = args.turns.unwrap_or(config.simulation.turns);

    tracing::info!(seed, turns, "Starting leader simulation");

    let galaxy = create_galaxy();
    let mut leaders = match create_leaders(&leader_roster(), &galaxy, &config, seed) {
        Ok(leaders) => leaders,
        Err(e) => {
            tracing::error!("Could not create leaders: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        planets = galaxy.len(),
        leaders = leaders.len(),
        "Created galaxy"
    );

    let mut turn = GameTurn::first();
    for _ in 0..turns {
        let snapshot = run_turn(&mut leaders, &StandardWeighting, turn);

        if args.json {
            match snapshot.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => tracing::warn!("Could not serialize snapshot for {}: {}", turn, e),
            }
        }

        let skipped = snapshot.decisions.iter().filter(|d| d.error.is_some()).count();
        if skipped > 0 {
            tracing::warn!(%turn, skipped, "Some leaders skipped their turn");
        }
        turn = turn.next();
    }

    tracing::info!("Simulation complete after {} turns", turns);
}
