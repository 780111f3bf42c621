//! Boxing Ring - Binary Entry Point
//!
//! Registers two sample boxers, resolves one bout between them and prints
//! the result and the leaderboard.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use boxing_ring::random::{RandomSource, SeededSource};
use boxing_ring::{LeaderboardSort, RingConfig, RingEngine, Roster};

#[derive(Debug, Parser)]
#[command(name = "boxing-ring", about = "Resolve a bout between two boxers")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the local random stream (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the roll from random.org
    #[cfg(feature = "random-org")]
    #[arg(long)]
    remote: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => RingConfig::load(path)?,
        None => RingConfig::default(),
    };

    let mut roster = Roster::with_limits(config.roster.capacity, config.limits);
    let first = roster.create_boxer("Boxer 1", 180, 167, 72.0, 30)?;
    let second = roster.create_boxer("Boxer 2", 175, 169, 70.0, 28)?;

    let mut source = random_source(args, &config);
    let mut ring = RingEngine::new();
    ring.enter_ring(roster.get_boxer_by_id(first)?)?;
    ring.enter_ring(roster.get_boxer_by_id(second)?)?;

    let result = ring.fight(&mut roster, source.as_mut())?;

    println!("===========================================");
    println!("  Boxing Ring");
    println!("===========================================");
    println!();
    println!("Winner: {}", result.winner_name());
    println!(
        "  Skill: {:.1} vs {:.1}",
        result.winner_skill, result.loser_skill
    );
    println!(
        "  Roll:  {:.4} (threshold {:.4})",
        result.roll, result.threshold
    );
    let corner = if result.receipt.first_corner_won() { "first" } else { "second" };
    println!("  Corner: {corner}");
    println!("  Receipt: {}", result.receipt.digest_hex()?);
    println!(
        "  Record root: {}",
        hex::encode(roster.compute_record_root()?)
    );
    println!();

    println!("Leaderboard (wins):");
    for entry in roster.get_leaderboard(LeaderboardSort::Wins)?.entries() {
        println!(
            "  {:<12} {:<14} {:>3}-{:<3} {:>5}%",
            entry.name,
            entry.weight_class,
            entry.wins,
            entry.fights - entry.wins,
            entry.win_pct.to_string()
        );
    }

    Ok(())
}

fn random_source(args: &Args, config: &RingConfig) -> Box<dyn RandomSource> {
    #[cfg(feature = "random-org")]
    {
        if args.remote {
            return Box::new(boxing_ring::random::RandomOrgSource::new(&config.random));
        }
    }
    #[cfg(not(feature = "random-org"))]
    let _ = config;

    match args.seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(SeededSource::from_entropy()),
    }
}
