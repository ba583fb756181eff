//! # rpsls
//!
//! Rock, Paper, Scissors, Lizard, Spock against a computer opponent, played
//! in the terminal.
//!
//! ## Design Principles
//!
//! 1. **Fixed rules, explicit state**: the five-move catalog never changes;
//!    scores, history and the "still playing" status live in values passed
//!    through the match loop, not in globals.
//!
//! 2. **Console as a seam**: everything the game shows or reads goes through
//!    the `Console` trait, so whole matches run under test from a script.
//!
//! 3. **Seedable randomness**: opponents draw from `GameRng`; a seed pins a
//!    session, entropy is the default.
//!
//! ## Modules
//!
//! - `core`: moves and outcomes, RNG, configuration
//! - `input`: console trait and the abbreviation disambiguator
//! - `strategy`: the five computer opponents
//! - `players`: human and computer seats
//! - `history`: append-only round ledger
//! - `game`: match state machine, menu, session driver

pub mod core;
pub mod error;
pub mod input;
pub mod strategy;
pub mod players;
pub mod history;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Move, Outcome, WINNING_SCORE};

pub use crate::error::{GameError, Result};

pub use crate::input::{Console, Disambiguator, ScriptedConsole, Terminal};

pub use crate::strategy::OpponentStrategy;

pub use crate::players::{Computer, Human, HumanChoice, Player, Seat, Side};

pub use crate::history::{HistoryLedger, PlayedMove, RoundRecord};

pub use crate::game::{Game, Match, MatchState, RoundSummary};
