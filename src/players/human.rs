//! The human player: moves come from the console.

use log::debug;

use super::{Player, Seat, Side};
use crate::core::Move;
use crate::error::Result;
use crate::input::{Console, Disambiguator};

pub const NAME_QUESTION: &str = "What's your name?";
pub const MOVE_QUESTION: &str = "Choose rock, paper, scissors, lizard, or spock (history/exit):";

const HISTORY: &str = "history";
const EXIT: &str = "exit";

/// What the human asked for at the move prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumanChoice {
    /// A move for this round.
    Play(Move),
    /// Show the ledger; no round is played.
    ViewHistory,
    /// Leave the game.
    Exit,
}

#[derive(Clone, Debug)]
pub struct Human {
    seat: Seat,
    choices: Disambiguator,
}

impl Human {
    /// Create a human player with a known name.
    pub fn new(name: impl Into<String>) -> Self {
        let choices = Disambiguator::new(Move::ALL.iter().map(|m| m.name()).chain([HISTORY, EXIT]));
        Self {
            seat: Seat::new(name),
            choices,
        }
    }

    /// Ask for the player's name and seat them.
    pub fn join<C: Console + ?Sized>(console: &mut C) -> Result<Self> {
        let name = Disambiguator::free_text().resolve(console, NAME_QUESTION)?;
        Ok(Self::new(name))
    }

    /// Ask for this round's move.
    pub fn choose<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<HumanChoice> {
        self.seat.clear_move();
        let answer = self.choices.resolve(console, MOVE_QUESTION)?;
        let choice = match answer.as_str() {
            HISTORY => HumanChoice::ViewHistory,
            EXIT => HumanChoice::Exit,
            name => {
                let m: Move = name.parse()?;
                self.seat.set_move(m);
                HumanChoice::Play(m)
            }
        };
        debug!("{} chose {:?}", self.seat.name(), choice);
        Ok(choice)
    }
}

impl Player for Human {
    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn side(&self) -> Side {
        Side::Human
    }
}
