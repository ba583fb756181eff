//! Whole-match scenarios.
//!
//! These tests drive matches through `ScriptedConsole` with pinned or seeded
//! opponents, the same way a player would at the terminal.

use rpsls::game::REMATCH_QUESTION;
use rpsls::{
    Computer, Game, GameConfig, GameRng, Human, Match, MatchState, Move, OpponentStrategy, Outcome, Player,
    ScriptedConsole, Side, WINNING_SCORE,
};

fn match_against(strategy: OpponentStrategy, seed: u64) -> Match {
    Match::new(Human::new("Ada"), Computer::new(strategy), WINNING_SCORE, GameRng::new(seed))
}

/// Rock against the fixed Scissors bot wins a point.
#[test]
fn test_rock_beats_fixed_opponent() {
    let mut m = match_against(OpponentStrategy::Fixed, 1);
    let mut console = ScriptedConsole::new(["rock"]);

    assert_eq!(m.human().score(), 0);
    let state = m.step(MatchState::AwaitingMove, &mut console).unwrap();

    let MatchState::RoundResolved(summary) = state else {
        panic!("expected a resolved round, got {:?}", state);
    };
    assert_eq!(summary.outcome, Outcome::HumanWins);
    assert_eq!(summary.computer_move, Move::Scissors);
    assert_eq!(m.human().score(), 1);
}

/// Three straight wins end the match; "no" leaves the scores as they were.
#[test]
fn test_three_wins_then_decline_rematch() {
    let mut m = match_against(OpponentStrategy::Fixed, 1);
    let mut console = ScriptedConsole::new(["r", "rock", "spock", "no"]);

    let end = m.run(&mut console).unwrap();

    assert_eq!(end, MatchState::Terminated);
    assert_eq!(m.human().score(), 3);
    assert_eq!(m.computer().score(), 0);
    assert_eq!(m.winner(), Some(Side::Human));
    assert_eq!(m.ledger().len(), 3);
    assert_eq!(console.count(REMATCH_QUESTION), 1);
}

/// The match ends the moment a score reaches the threshold.
#[test]
fn test_match_over_exactly_at_three() {
    let mut m = match_against(OpponentStrategy::Fixed, 1);
    // Paper loses to Scissors every time.
    let mut console = ScriptedConsole::new(["p", "p", "p", "p", "p"]);

    let mut state = MatchState::AwaitingMove;
    while !matches!(state, MatchState::MatchOver(_)) {
        state = m.step(state, &mut console).unwrap();
        assert!(m.computer().score() <= 3);
    }

    assert_eq!(state, MatchState::MatchOver(Side::Computer));
    assert_eq!(m.computer().score(), 3);
    assert_eq!(console.remaining(), 2);
}

/// Viewing history mid-match doesn't use up a round.
#[test]
fn test_history_between_rounds() {
    let mut m = match_against(OpponentStrategy::Fixed, 1);
    let mut console = ScriptedConsole::new(["rock", "history", "", "exit"]);

    let end = m.run(&mut console).unwrap();

    assert_eq!(end, MatchState::Terminated);
    assert_eq!(m.ledger().len(), 1);
    assert!(console.saw("Game number 1: R2d2's move: Scissors || Ada's move: Rock"));
}

/// The mirror bot repeats whatever the human played in the previous round.
#[test]
fn test_mirror_bot_follows_human() {
    let mut m = match_against(OpponentStrategy::MirrorLast, 1);
    let mut console = ScriptedConsole::new(["lizard", "sp", "exit"]);

    m.run(&mut console).unwrap();

    let rounds: Vec<_> = m.ledger().iter().map(|r| (r.human.kind, r.computer.kind)).collect();
    assert_eq!(rounds, vec![(Move::Lizard, Move::Rock), (Move::Spock, Move::Lizard)]);
}

/// The counter bot never answers with something the human's last move beats.
#[test]
fn test_counter_bot_respects_last_move() {
    let mut m = match_against(OpponentStrategy::CounterLast, 99);
    let answers: Vec<&str> = ["rock", "spock", "paper", "lizard", "scissors"].repeat(6);
    let mut console = ScriptedConsole::new(answers);

    for _ in 0..30 {
        if m.winner().is_some() {
            break;
        }
        let state = m.step(MatchState::AwaitingMove, &mut console).unwrap();
        assert!(matches!(state, MatchState::RoundResolved(_)));
    }

    let records: Vec<_> = m.ledger().iter().cloned().collect();
    for pair in records.windows(2) {
        let last_human = pair[0].human.kind;
        let reply = pair[1].computer.kind;
        assert!(!last_human.beats(reply), "{} answered with {}", last_human, reply);
    }
}

/// Ties are shown and recorded but don't score.
#[test]
fn test_tie_round() {
    let mut m = match_against(OpponentStrategy::MirrorLast, 1);
    let mut console = ScriptedConsole::new(["rock", "exit"]);

    m.run(&mut console).unwrap();

    assert!(console.saw("TIE GAME"));
    assert_eq!(m.human().score(), 0);
    assert_eq!(m.computer().score(), 0);
    assert_eq!(m.ledger().len(), 1);
}

/// A full session: menu, a won match, history at the rematch prompt, then quit.
#[test]
fn test_session_with_history_at_rematch_prompt() {
    let config = GameConfig::default()
        .with_seed(Some(3))
        .with_opponent(Some(OpponentStrategy::Fixed))
        .with_color(false);
    let mut console = ScriptedConsole::new(["ada", "p", "r", "r", "r", "h", "", "n"]);

    let last = Game::new(config).run(&mut console).unwrap();

    assert_eq!(last.human().score(), 3);
    assert!(console.saw("Game number 3: R2d2's move: Scissors || Ada's move: Rock"));
    assert_eq!(console.count(REMATCH_QUESTION), 2);
    assert_eq!(console.remaining(), 0);
}

/// Running out of input surfaces as an error instead of looping forever.
#[test]
fn test_closed_input_stops_session() {
    let config = GameConfig::default().with_seed(Some(3));
    let mut console = ScriptedConsole::new(["ada", "play", "banana"]);

    let result = Game::new(config).run(&mut console);

    assert!(matches!(result, Err(rpsls::GameError::InputClosed)));
}

/// "yes" at the rematch prompt draws the next opponent from the session's RNG
/// and starts from a clean slate.
#[test]
fn test_rematch_redraws_opponent() {
    // Find a seed whose first opponent is R2d2, so three rocks win the match.
    let draws = |seed: u64| {
        let mut rng = GameRng::new(seed);
        let first = OpponentStrategy::random(&mut rng);
        let _ = rng.fork();
        (first, OpponentStrategy::random(&mut rng))
    };
    let (seed, second) = (0..1000)
        .map(|seed| (seed, draws(seed)))
        .find(|(_, (first, _))| *first == OpponentStrategy::Fixed)
        .map(|(seed, (_, second))| (seed, second))
        .expect("some seed opens against R2d2");

    let config = GameConfig::default().with_seed(Some(seed)).with_color(false);
    let mut console = ScriptedConsole::new(["ada", "play", "r", "r", "r", "yes", "bob", "exit"]);

    let last = Game::new(config).run(&mut console).unwrap();

    assert!(console.saw("ADA WON THE GAME"));
    assert_eq!(last.computer().strategy(), second);
    assert_eq!(last.computer().name(), second.bot_name());
    assert_eq!(last.human().name(), "Bob");
    assert_eq!(last.human().score(), 0);
    assert_eq!(last.computer().score(), 0);
    assert!(last.ledger().is_empty());
    assert!(console.saw(&format!("{}: 0", second.bot_name())));
    assert_eq!(console.remaining(), 0);
}
