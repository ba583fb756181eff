//! The five computer opponents.
//!
//! A strategy is picked once per match and sees only the human's most recent
//! move, handed in by the caller. None of them keep state between rounds.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, Move};

/// Relative odds for `WeightedRandom`, aligned with [`Move::ALL`].
pub const WEIGHTS: [f32; 5] = [3.0, 1.0, 1.0, 2.0, 1.0];

/// Computer move-selection policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpponentStrategy {
    /// Always Scissors.
    Fixed,
    /// Any of the five, uniformly.
    UniformRandom,
    /// Something the human's last move does not beat.
    CounterLast,
    /// Whatever the human played last; Rock to open.
    MirrorLast,
    /// Rock 3, Paper 1, Scissors 1, Lizard 2, Spock 1.
    WeightedRandom,
}

impl OpponentStrategy {
    /// All variants.
    pub const ALL: [OpponentStrategy; 5] = [
        OpponentStrategy::Fixed,
        OpponentStrategy::UniformRandom,
        OpponentStrategy::CounterLast,
        OpponentStrategy::MirrorLast,
        OpponentStrategy::WeightedRandom,
    ];

    /// Pick a variant uniformly at random.
    pub fn random(rng: &mut GameRng) -> Self {
        Self::ALL[rng.gen_range_usize(0..Self::ALL.len())]
    }

    /// Name the computer player goes by.
    #[must_use]
    pub const fn bot_name(self) -> &'static str {
        match self {
            OpponentStrategy::Fixed => "R2d2",
            OpponentStrategy::UniformRandom => "Hal",
            OpponentStrategy::CounterLast => "Megatron",
            OpponentStrategy::MirrorLast => "Chappie",
            OpponentStrategy::WeightedRandom => "Robocop",
        }
    }

    /// Look a variant up by its bot name, ignoring case.
    #[must_use]
    pub fn from_bot_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.bot_name().eq_ignore_ascii_case(name))
    }

    /// Moves this strategy can return given the human's last move.
    ///
    /// `WeightedRandom` can return any move; its odds come from [`WEIGHTS`].
    #[must_use]
    pub fn candidates(self, last_human: Option<Move>) -> SmallVec<[Move; 5]> {
        match (self, last_human) {
            (OpponentStrategy::Fixed, _) => SmallVec::from_slice(&[Move::Scissors]),
            (OpponentStrategy::MirrorLast, Some(last)) => SmallVec::from_slice(&[last]),
            (OpponentStrategy::MirrorLast, None) => SmallVec::from_slice(&[Move::Rock]),
            (OpponentStrategy::CounterLast, Some(last)) => {
                let beaten = last.defeats();
                Move::ALL.into_iter().filter(|m| !beaten.contains(m)).collect()
            }
            (OpponentStrategy::CounterLast, None)
            | (OpponentStrategy::UniformRandom, _)
            | (OpponentStrategy::WeightedRandom, _) => SmallVec::from_slice(&Move::ALL),
        }
    }

    /// Choose this round's move.
    pub fn choose_move(self, last_human: Option<Move>, rng: &mut GameRng) -> Move {
        let chosen = match self {
            OpponentStrategy::WeightedRandom => rng
                .choose_weighted(&WEIGHTS)
                .map_or(Move::Rock, |i| Move::ALL[i]),
            _ => {
                let candidates = self.candidates(last_human);
                rng.choose(&candidates).copied().unwrap_or(Move::Rock)
            }
        };
        debug!("{} picked {} (human last played {:?})", self.bot_name(), chosen, last_human);
        chosen
    }
}
