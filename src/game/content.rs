//! Static text: titles, rules, help.

use crate::core::Move;

pub const TITLE: [&str; 2] = ["rock paper scissors", "lizard spock"];

pub const FAREWELL: &str = "Thanks for playing Rock, Paper, Scissors, Lizard, Spock!";

/// Who beats whom, and how.
pub const VERBS: [(Move, &str, Move); 10] = [
    (Move::Scissors, "cuts", Move::Paper),
    (Move::Paper, "covers", Move::Rock),
    (Move::Rock, "crushes", Move::Lizard),
    (Move::Lizard, "poisons", Move::Spock),
    (Move::Spock, "smashes", Move::Scissors),
    (Move::Scissors, "decapitates", Move::Lizard),
    (Move::Lizard, "eats", Move::Paper),
    (Move::Paper, "disproves", Move::Spock),
    (Move::Spock, "vaporizes", Move::Rock),
    (Move::Rock, "crushes", Move::Scissors),
];

pub const HELP: [&str; 5] = [
    "Type a move name, or just enough of it to be unique:",
    "  r = rock, p = paper, l = lizard, sc = scissors, sp = spock.",
    "Type 'history' (or 'h') at the move prompt to see past rounds.",
    "Type 'exit' (or 'e') at the move prompt to leave the game.",
    "First to 3 round wins takes the match.",
];

/// Rules page, one line per winning pair.
#[must_use]
pub fn rules() -> Vec<String> {
    let mut lines = vec!["Each move beats two others and loses to the other two:".to_string()];
    lines.extend(
        VERBS
            .iter()
            .map(|(winner, verb, loser)| format!("  {} {} {}", winner, verb, loser)),
    );
    lines
}
