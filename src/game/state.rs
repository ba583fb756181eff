//! Match state machine.
//!
//! ```text
//! AwaitingMove ──► RoundResolved ──► AwaitingMove
//!      │                  │
//!      │ exit             └────────► MatchOver ──► Rematch
//!      ▼                                  │
//!  Terminated ◄───────────────────────────┘ no
//! ```
//!
//! Each call to [`Match::step`] consumes the current state and returns the
//! next one. Whether the game is still running is read off that value; there
//! is no separate flag.

use log::{debug, info};

use crate::core::{GameConfig, GameRng, Move, Outcome};
use crate::error::Result;
use crate::history::HistoryLedger;
use crate::input::{Console, Disambiguator};
use crate::players::{Computer, Human, HumanChoice, Player, Side};

pub const REMATCH_QUESTION: &str = "Would you like to play again?";

const REMATCH_OPTIONS: [&str; 3] = ["yes", "no", "history"];

/// Where a match stands between steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchState {
    /// Waiting for the human's next answer.
    AwaitingMove,
    /// A round was just played.
    RoundResolved(RoundSummary),
    /// A player reached the winning score.
    MatchOver(Side),
    /// The player asked for a fresh match.
    Rematch,
    /// The player left.
    Terminated,
}

impl MatchState {
    /// Check if the game is still going (a rematch counts).
    #[must_use]
    pub fn is_playing(&self) -> bool {
        !matches!(self, MatchState::Terminated)
    }
}

/// What happened in one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: u32,
    pub human_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
}

/// One human against one computer, first to the winning score.
#[derive(Clone, Debug)]
pub struct Match {
    human: Human,
    computer: Computer,
    ledger: HistoryLedger,
    winning_score: u32,
    rng: GameRng,
}

impl Match {
    /// Create a match between two seated players.
    ///
    /// `rng` drives the computer's move sampling for this match only.
    #[must_use]
    pub fn new(human: Human, computer: Computer, winning_score: u32, rng: GameRng) -> Self {
        Self {
            human,
            computer,
            ledger: HistoryLedger::new(),
            winning_score,
            rng,
        }
    }

    /// Ask the human's name, draw an opponent, and set up a fresh match.
    pub fn start<C: Console + ?Sized>(console: &mut C, config: &GameConfig, rng: &mut GameRng) -> Result<Self> {
        let human = Human::join(console)?;
        let computer = match config.opponent {
            Some(strategy) => Computer::new(strategy),
            None => Computer::random(rng),
        };
        info!(
            "new match: {} vs {} ({:?}), first to {}",
            human.name(),
            computer.name(),
            computer.strategy(),
            config.winning_score
        );
        Ok(Self::new(human, computer, config.winning_score, rng.fork()))
    }

    #[must_use]
    pub fn human(&self) -> &Human {
        &self.human
    }

    #[must_use]
    pub fn computer(&self) -> &Computer {
        &self.computer
    }

    #[must_use]
    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    #[must_use]
    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    /// The side that reached the winning score, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        [self.player(Side::Human), self.player(Side::Computer)]
            .into_iter()
            .find(|p| p.has_won(self.winning_score))
            .map(|p| p.side())
    }

    fn player(&self, side: Side) -> &dyn Player {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    /// Resolve a pair of moves, score it, and record it.
    ///
    /// Ties are recorded too; they just don't score.
    pub fn play_round(&mut self, human_move: Move, computer_move: Move) -> RoundSummary {
        let outcome = Outcome::resolve(human_move, computer_move);
        let round = self
            .ledger
            .append(self.human.name(), human_move, self.computer.name(), computer_move)
            .round;

        match Side::winner_of(outcome) {
            Some(Side::Human) => self.human.seat_mut().award_point(),
            Some(Side::Computer) => self.computer.seat_mut().award_point(),
            None => {}
        }

        debug!(
            "round {}: {} {} vs {} {} -> {:?} ({}-{})",
            round,
            self.human.name(),
            human_move,
            self.computer.name(),
            computer_move,
            outcome,
            self.human.score(),
            self.computer.score()
        );

        RoundSummary {
            round,
            human_move,
            computer_move,
            outcome,
        }
    }

    /// Advance the match by one state.
    pub fn step<C: Console + ?Sized>(&mut self, state: MatchState, console: &mut C) -> Result<MatchState> {
        match state {
            MatchState::AwaitingMove => self.await_move(console),
            MatchState::RoundResolved(summary) => self.announce_round(summary, console),
            MatchState::MatchOver(winner) => self.offer_rematch(winner, console),
            MatchState::Rematch | MatchState::Terminated => Ok(state),
        }
    }

    /// Step until the match ends in a rematch request or termination.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<MatchState> {
        let mut state = MatchState::AwaitingMove;
        while !matches!(state, MatchState::Rematch | MatchState::Terminated) {
            state = self.step(state, console)?;
        }
        Ok(state)
    }

    fn await_move<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<MatchState> {
        self.show_scores(console)?;
        match self.human.choose(console)? {
            HumanChoice::ViewHistory => {
                self.show_history(console)?;
                Ok(MatchState::AwaitingMove)
            }
            HumanChoice::Exit => {
                info!("{} left mid-match", self.human.name());
                Ok(MatchState::Terminated)
            }
            HumanChoice::Play(human_move) => {
                let computer_move = self.computer.choose(&self.ledger, self.human.name(), &mut self.rng);
                Ok(MatchState::RoundResolved(self.play_round(human_move, computer_move)))
            }
        }
    }

    fn announce_round<C: Console + ?Sized>(&mut self, summary: RoundSummary, console: &mut C) -> Result<MatchState> {
        console.banner(&format!("{} vs {}", summary.human_move, summary.computer_move))?;
        match Side::winner_of(summary.outcome) {
            Some(side) => console.banner(&format!("{} won", self.player(side).name()))?,
            None => console.banner("tie game")?,
        }

        Ok(match self.winner() {
            Some(side) => MatchState::MatchOver(side),
            None => MatchState::AwaitingMove,
        })
    }

    fn offer_rematch<C: Console + ?Sized>(&mut self, winner: Side, console: &mut C) -> Result<MatchState> {
        let name = self.player(winner).name().to_string();
        info!(
            "{} won the match {}-{}",
            name,
            self.player(winner).score(),
            self.player(other(winner)).score()
        );
        console.banner(&format!("{} won the game", name))?;

        let options = Disambiguator::new(REMATCH_OPTIONS);
        loop {
            match options.resolve(console, REMATCH_QUESTION)?.as_str() {
                "history" => self.show_history(console)?,
                "yes" => return Ok(MatchState::Rematch),
                _ => return Ok(MatchState::Terminated),
            }
        }
    }

    /// Print both scores, computer first.
    pub fn show_scores<C: Console + ?Sized>(&self, console: &mut C) -> Result<()> {
        console.display(&format!("{}: {}", self.computer.name(), self.computer.score()))?;
        console.display(&format!("{}: {}", self.human.name(), self.human.score()))
    }

    /// Print the ledger and wait for enter.
    pub fn show_history<C: Console + ?Sized>(&self, console: &mut C) -> Result<()> {
        console.banner("history")?;
        console.rule()?;
        for line in self.ledger.render() {
            console.display(&line)?;
        }
        console.pause()
    }
}

fn other(side: Side) -> Side {
    match side {
        Side::Human => Side::Computer,
        Side::Computer => Side::Human,
    }
}
