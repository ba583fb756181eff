//! Session driver: menu, matches, rematches, farewell.

use log::info;

use super::content::FAREWELL;
use super::menu::{main_menu, MenuChoice};
use super::state::{Match, MatchState};
use crate::core::{GameConfig, GameRng};
use crate::error::Result;
use crate::input::Console;

/// A whole play session.
///
/// Owns the configuration and the random source that picks each match's
/// opponent.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    rng: GameRng,
}

impl Game {
    /// Create a session from `config`, seeding as it says.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = config.rng();
        Self { config, rng }
    }

    /// Play until the user leaves. Returns the last match as it ended.
    ///
    /// The name is asked first, then the menu. Answering "yes" to the
    /// rematch prompt starts a fresh match with a new name and opponent.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Match> {
        info!("session seed {}", self.rng.seed());

        let mut current = Match::start(console, &self.config, &mut self.rng)?;
        let mut state = match main_menu(console)? {
            MenuChoice::Exit => MatchState::Terminated,
            _ => MatchState::AwaitingMove,
        };

        while state.is_playing() {
            state = match current.step(state, console)? {
                MatchState::Rematch => {
                    info!("rematch requested");
                    current = Match::start(console, &self.config, &mut self.rng)?;
                    MatchState::AwaitingMove
                }
                next => next,
            };
        }

        console.display(FAREWELL)?;
        Ok(current)
    }
}
