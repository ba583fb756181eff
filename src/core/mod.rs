//! Core types: the move catalog, the random source, configuration.

pub mod moves;
pub mod rng;
pub mod config;

pub use moves::{Move, Outcome};
pub use rng::GameRng;
pub use config::{GameConfig, WINNING_SCORE};
