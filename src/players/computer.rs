//! The computer player: moves come from its strategy.

use super::{Player, Seat, Side};
use crate::core::{GameRng, Move};
use crate::history::HistoryLedger;
use crate::strategy::OpponentStrategy;

#[derive(Clone, Debug)]
pub struct Computer {
    seat: Seat,
    strategy: OpponentStrategy,
}

impl Computer {
    /// Create a computer player bound to `strategy`, named after it.
    #[must_use]
    pub fn new(strategy: OpponentStrategy) -> Self {
        Self {
            seat: Seat::new(strategy.bot_name()),
            strategy,
        }
    }

    /// Create a computer player with a uniformly drawn strategy.
    pub fn random(rng: &mut GameRng) -> Self {
        Self::new(OpponentStrategy::random(rng))
    }

    #[must_use]
    pub fn strategy(&self) -> OpponentStrategy {
        self.strategy
    }

    /// Choose this round's move, reading the human's last move from `ledger`.
    pub fn choose(&mut self, ledger: &HistoryLedger, human_name: &str, rng: &mut GameRng) -> Move {
        self.seat.clear_move();
        let m = self.strategy.choose_move(ledger.last_human_move(human_name), rng);
        self.seat.set_move(m);
        m
    }
}

impl Player for Computer {
    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn side(&self) -> Side {
        Side::Computer
    }
}
