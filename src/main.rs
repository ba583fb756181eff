//! Terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use rpsls::{Game, GameConfig, GameError, OpponentStrategy, Terminal};

/// Rock, Paper, Scissors, Lizard, Spock against the computer.
#[derive(Parser)]
#[command(name = "rpsls")]
#[command(about = "Play Rock, Paper, Scissors, Lizard, Spock against a computer opponent")]
struct Cli {
    /// Random seed for the computer opponent.
    #[arg(long)]
    seed: Option<u64>,

    /// Always face this bot (R2d2, Hal, Megatron, Chappie, Robocop).
    #[arg(long, value_parser = parse_opponent)]
    opponent: Option<OpponentStrategy>,

    /// Plain output without colors.
    #[arg(long)]
    no_color: bool,

    /// Log strategy picks and round results to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_opponent(name: &str) -> std::result::Result<OpponentStrategy, String> {
    OpponentStrategy::from_bot_name(name).ok_or_else(|| format!("no bot named {:?}", name))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = GameConfig::default()
        .with_seed(cli.seed)
        .with_opponent(cli.opponent)
        .with_color(!cli.no_color);

    let mut terminal = Terminal::new(config.color);
    match Game::new(config).run(&mut terminal) {
        Ok(_) => Ok(()),
        Err(GameError::InputClosed) => {
            log::info!("input closed, leaving");
            Ok(())
        }
        Err(e) => Err(e).context("game aborted"),
    }
}
