//! Duel Runner - headless seeded duels for balance testing
//!
//! Usage:
//!   duel_runner --roster rosters/sample.toml
//!   duel_runner --roster rosters/sample.toml --fights 1000 --seed 7 --format json

mod roster;

use clap::{Parser, ValueEnum};
use combat_core::config::{load_archetypes, load_constants, ArchetypeTable};
use combat_core::{simulate, CombatConstants, CombatEngine, CombatResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roster::{Roster, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "duel_runner")]
#[command(about = "Run seeded PvP duels from a roster file")]
struct Args {
    /// Roster TOML with exactly two combatants
    #[arg(long)]
    roster: PathBuf,

    /// Combat constants TOML; built-in defaults when omitted
    #[arg(long)]
    constants: Option<PathBuf>,

    /// Extra boss archetypes TOML, merged over the built-in ones
    #[arg(long)]
    archetypes: Option<PathBuf>,

    /// Number of fights; more than one prints a batch report
    #[arg(long, default_value_t = 1)]
    fights: u32,

    /// Random seed (random if not specified)
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "duel failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), RunnerError> {
    let constants = match &args.constants {
        Some(path) => load_constants(path)?,
        None => CombatConstants::default(),
    };
    let archetypes = match &args.archetypes {
        Some(path) => load_archetypes(path)?,
        None => ArchetypeTable::with_defaults(),
    };
    let roster = Roster::load(&args.roster)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, fights = args.fights, "starting duel");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let engine = CombatEngine::new(constants);
    let [a, b] = roster.build(&engine, &archetypes, &mut rng)?;

    if args.fights <= 1 {
        let result = engine.fight(&a, &b, &mut rng)?;
        match args.format {
            OutputFormat::Json => println!("{}", result.to_json()?),
            OutputFormat::Text => print_fight(&result, seed),
        }
    } else {
        let report = simulate(&engine, &a, &b, args.fights, &mut rng)?;
        match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => {
                println!("seed {seed}");
                println!("{}", report.summary());
            }
        }
    }

    Ok(())
}

fn print_fight(result: &CombatResult, seed: u64) {
    println!("seed {seed}");
    for snapshot in &result.snapshots {
        println!("  {}", snapshot.describe());
    }
    println!();

    for entry in &result.log {
        println!(
            "[turn {:>2}] {} ({} / {} hp)",
            entry.turn, entry.message, entry.actor_hp, entry.target_hp
        );
    }
    println!();
    println!("{}", result.summary());
}
