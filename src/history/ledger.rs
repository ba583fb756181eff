//! Append-only round history.
//!
//! Rounds are numbered from 1. Each record keeps both players' names and the
//! move each one played, stored as a [`Move`] rather than a name to re-parse.
//!
//! The ledger is backed by `im::Vector`, so handing out a snapshot is an
//! O(1) clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Move;

/// Rendered in place of an empty ledger.
pub const EMPTY_LEDGER: &str = "Nothing to show...";

/// One player's move in a round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    /// The player's name.
    pub name: String,

    /// The move played.
    pub kind: Move,
}

impl PlayedMove {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: Move) -> Self {
        Self { name: name.into(), kind }
    }
}

/// A completed round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, starting at 1.
    pub round: u32,

    /// The computer's move.
    pub computer: PlayedMove,

    /// The human's move.
    pub human: PlayedMove,
}

impl RoundRecord {
    /// Create a new round record.
    #[must_use]
    pub fn new(round: u32, human: PlayedMove, computer: PlayedMove) -> Self {
        Self { round, computer, human }
    }

    /// One display line, computer first.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "Game number {}: {}'s move: {} || {}'s move: {}",
            self.round, self.computer.name, self.computer.kind, self.human.name, self.human.kind
        )
    }
}

/// Ordered, append-only list of rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLedger {
    records: Vector<RoundRecord>,
}

impl HistoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the round about to be played.
    #[must_use]
    pub fn next_round(&self) -> u32 {
        self.records.len() as u32 + 1
    }

    /// Record a finished round as number [`next_round`](Self::next_round).
    pub fn append(
        &mut self,
        human_name: &str,
        human_move: Move,
        computer_name: &str,
        computer_move: Move,
    ) -> &RoundRecord {
        let round = self.next_round();
        self.records.push_back(RoundRecord::new(
            round,
            PlayedMove::new(human_name, human_move),
            PlayedMove::new(computer_name, computer_move),
        ));
        &self.records[self.records.len() - 1]
    }

    /// The named human's most recent move.
    #[must_use]
    pub fn last_human_move(&self, human_name: &str) -> Option<Move> {
        self.records
            .iter()
            .rev()
            .find(|r| r.human.name == human_name)
            .map(|r| r.human.kind)
    }

    /// Record for a 1-indexed round.
    #[must_use]
    pub fn get(&self, round: u32) -> Option<&RoundRecord> {
        let index = (round as usize).checked_sub(1)?;
        self.records.get(index)
    }

    /// Iterate over records in order.
    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.records.iter()
    }

    /// Number of recorded rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no round has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display lines, one per round.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        if self.records.is_empty() {
            return vec![EMPTY_LEDGER.to_string()];
        }
        self.records.iter().map(RoundRecord::render).collect()
    }
}
