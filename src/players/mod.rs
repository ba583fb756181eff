//! The two players at the table.
//!
//! ## Seat
//!
//! Per-player data shared by both kinds: name, score, and this round's move.
//!
//! ## Player
//!
//! Trait over [`Human`] and [`Computer`] giving uniform access to the seat.

pub mod human;
pub mod computer;

use serde::{Deserialize, Serialize};

use crate::core::{Move, Outcome};

pub use computer::Computer;
pub use human::{Human, HumanChoice};

/// Which side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// The side that won a round, if any.
    #[must_use]
    pub fn winner_of(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::HumanWins => Some(Side::Human),
            Outcome::ComputerWins => Some(Side::Computer),
            Outcome::Tie => None,
        }
    }
}

/// Name, score and current move of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    name: String,
    score: u32,
    current: Option<Move>,
}

impl Seat {
    /// Create a seat with a zero score.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            current: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn current_move(&self) -> Option<Move> {
        self.current
    }

    /// Add one point for a won round.
    pub fn award_point(&mut self) {
        self.score += 1;
    }

    pub fn set_move(&mut self, m: Move) {
        self.current = Some(m);
    }

    pub fn clear_move(&mut self) {
        self.current = None;
    }
}

/// Common access to a player's seat.
pub trait Player {
    fn seat(&self) -> &Seat;

    fn seat_mut(&mut self) -> &mut Seat;

    fn side(&self) -> Side;

    // === Convenience Methods ===

    fn name(&self) -> &str {
        self.seat().name()
    }

    fn score(&self) -> u32 {
        self.seat().score()
    }

    fn current_move(&self) -> Option<Move> {
        self.seat().current_move()
    }

    /// Check if this player's score has reached `winning_score`.
    fn has_won(&self, winning_score: u32) -> bool {
        self.score() >= winning_score
    }
}
