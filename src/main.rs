//! Surfopoly CLI - simulate a seeded game from the command line.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use surfopoly::{GameBuilder, GameError, GameResult, RulesConfig, TurnEvent, TurnReport};

/// Surfopoly - simulate a game of the surf-themed property board game
#[derive(Parser, Debug)]
#[command(name = "surfopoly")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player names (2-8 players)
    #[arg(num_args = 2..=8, default_values_t = ["Kelly".to_string(), "Layne".to_string()])]
    players: Vec<String>,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum turns before stopping (default: 1000)
    #[arg(short, long, default_value = "1000")]
    turns: u32,

    /// Rules file (JSON); missing fields take the standard values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print each turn report as a JSON line
    #[arg(long)]
    json: bool,

    /// Only print the final standings
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid rules file: {0}")]
    Rules(#[from] serde_json::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_rules(path: Option<&PathBuf>) -> Result<RulesConfig, CliError> {
    let Some(path) = path else {
        return Ok(RulesConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn run(args: Args) -> Result<(), CliError> {
    let rules = load_rules(args.config.as_ref())?;

    let mut builder = GameBuilder::new().config(rules);
    for name in &args.players {
        builder = builder.player(name.clone());
    }
    let mut game = match args.seed {
        Some(seed) => builder.build(seed)?,
        None => builder.build_from_entropy()?,
    };

    game.start_game();
    while !game.is_game_over() && game.turn_number() < args.turns {
        let report = game.take_turn()?;
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else if !args.quiet {
            println!("{}", describe(&game, &report));
        }
    }

    match game.result() {
        Some(GameResult::Winner(id)) => info!(winner = %game.player(id)?.name, turns = game.turn_number(), "game over"),
        Some(GameResult::Draw) => info!(turns = game.turn_number(), "game over, nobody solvent"),
        None => info!(turns = game.turn_number(), "turn limit reached"),
    }

    if !args.json {
        println!();
        println!("Leaderboard (seed {}):", game.seed());
        for (rank, standing) in game.standings().iter().enumerate() {
            let token = &game.player(standing.player)?.token;
            println!(
                "{}. {} ({}) - cash ${}, net worth ${}",
                rank + 1,
                standing.name,
                token,
                standing.money,
                standing.net_worth
            );
        }
    }
    Ok(())
}

/// One line per turn.
fn describe(game: &surfopoly::Game, report: &TurnReport) -> String {
    let name = game
        .player(report.player)
        .map(|p| p.name.as_str())
        .unwrap_or("?");
    let space_name = |position: usize| {
        game.board()
            .space(position)
            .map(|space| space.name())
            .unwrap_or_default()
    };

    let mut parts = Vec::new();
    for event in &report.events {
        let part = match event {
            TurnEvent::Rolled(roll) => format!("rolls {roll}"),
            TurnEvent::Moved(m) if m.passed_go => format!("passes GO to {}", space_name(m.to)),
            TurnEvent::Moved(m) => format!("moves to {}", space_name(m.to)),
            TurnEvent::Purchased { price, .. } => format!("buys it for ${price}"),
            TurnEvent::CannotAfford { price, .. } => format!("cannot afford ${price}"),
            TurnEvent::PaidRent { owner, amount, .. } => {
                let owner = game.player(*owner).map(|p| p.name.as_str()).unwrap_or("?");
                format!("pays ${amount} rent to {owner}")
            }
            TurnEvent::OwnProperty { .. } => "owns it".to_string(),
            TurnEvent::LandedOnSpecial { .. } => continue,
            TurnEvent::SentToJail => "goes to jail".to_string(),
            TurnEvent::JailAttempt { attempt } => format!("jail turn {attempt}"),
            TurnEvent::PaidJailFine { amount } => format!("pays ${amount} fine"),
            TurnEvent::EscapedJail => "escapes jail".to_string(),
            TurnEvent::DrewCard { category, description } => format!("draws {category}: {description}"),
            TurnEvent::PaidTax { amount } => format!("pays ${amount} tax"),
        };
        parts.push(part);
    }
    if report.extra_turn {
        parts.push("goes again".to_string());
    }

    format!("[{:>4}] {name}: {}", report.turn, parts.join(", "))
}
