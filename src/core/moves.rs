//! Move catalog: the five move kinds and the fixed "beats" relation.
//!
//! Every kind defeats exactly two others:
//!
//! | Move     | Defeats          |
//! |----------|------------------|
//! | Rock     | Scissors, Lizard |
//! | Paper    | Rock, Spock      |
//! | Scissors | Paper, Lizard    |
//! | Lizard   | Paper, Spock     |
//! | Spock    | Scissors, Rock   |
//!
//! With five kinds and two defeats each, any two distinct kinds have exactly
//! one winner. Only identical kinds tie.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// One of the five move kinds.
///
/// ## Example
///
/// ```
/// use rpsls::core::Move;
///
/// assert!(Move::Rock.beats(Move::Lizard));
/// assert!(!Move::Rock.beats(Move::Paper));
/// assert_eq!("spock".parse::<Move>().unwrap(), Move::Spock);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    /// All kinds in catalog order.
    pub const ALL: [Move; 5] = [Move::Rock, Move::Paper, Move::Scissors, Move::Lizard, Move::Spock];

    /// The two kinds this move defeats.
    #[must_use]
    pub const fn defeats(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Scissors, Move::Lizard],
            Move::Paper => [Move::Rock, Move::Spock],
            Move::Scissors => [Move::Paper, Move::Lizard],
            Move::Lizard => [Move::Paper, Move::Spock],
            Move::Spock => [Move::Scissors, Move::Rock],
        }
    }

    /// True iff `other` is in this move's defeat-set.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.defeats().contains(&other)
    }

    /// Lowercase name, as typed by the player.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        }
    }

    /// Position in [`Move::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
            Move::Lizard => "Lizard",
            Move::Spock => "Spock",
        };
        f.write_str(label)
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Move::ALL
            .into_iter()
            .find(|m| m.name() == lowered)
            .ok_or_else(|| GameError::UnknownMove(s.to_string()))
    }
}

/// Result of a single round, from the table's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    HumanWins,
    ComputerWins,
    Tie,
}

impl Outcome {
    /// Resolve a human move against a computer move.
    #[must_use]
    pub fn resolve(human: Move, computer: Move) -> Self {
        if human == computer {
            Outcome::Tie
        } else if human.beats(computer) {
            Outcome::HumanWins
        } else {
            Outcome::ComputerWins
        }
    }

    /// Check if the round had a winner.
    #[must_use]
    pub fn is_decisive(self) -> bool {
        self != Outcome::Tie
    }
}
