//! Resolves typed answers, including abbreviations, to canonical choices.
//!
//! ## Accepted tokens
//!
//! For each choice:
//! - its full lowercase text
//! - its first letter, when no other choice starts with the same letter
//! - its first two letters, when another choice does
//!
//! So with `["rock", "paper", "scissors", "lizard", "spock"]`, `r` means rock
//! but `s` means nothing; `sc` and `sp` are needed.
//!
//! ## Collisions
//!
//! Two letters do not always separate choices (`spock` / `spin`). A prefix
//! token claimed by more than one choice is withdrawn and such input is
//! rejected. A full choice text always wins over another choice's prefix.

use log::{trace, warn};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::console::Console;
use crate::error::Result;

/// Shown after an answer that resolves to nothing.
pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";

/// Token table for one set of choices.
///
/// An empty choice set accepts free text (used for the player's name).
#[derive(Clone, Debug, Default)]
pub struct Disambiguator {
    choices: Vec<String>,
    tokens: FxHashMap<String, usize>,
}

impl Disambiguator {
    /// Build the token table for `choices`.
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let choices: Vec<String> = choices.into_iter().map(|c| c.as_ref().to_string()).collect();
        let lowered: Vec<String> = choices.iter().map(|c| c.to_lowercase()).collect();

        let mut first_letters: FxHashMap<char, usize> = FxHashMap::default();
        for first in lowered.iter().filter_map(|c| c.chars().next()) {
            *first_letters.entry(first).or_default() += 1;
        }

        let mut tokens: FxHashMap<String, usize> = FxHashMap::default();
        for (i, full) in lowered.iter().enumerate() {
            if !full.is_empty() {
                tokens.entry(full.clone()).or_insert(i);
            }
        }

        let mut prefixes: FxHashMap<String, SmallVec<[usize; 2]>> = FxHashMap::default();
        for (i, full) in lowered.iter().enumerate() {
            let Some(first) = full.chars().next() else {
                continue;
            };
            let len = if first_letters[&first] > 1 { 2 } else { 1 };
            let prefix: String = full.chars().take(len).collect();
            prefixes.entry(prefix).or_default().push(i);
        }

        for (prefix, owners) in prefixes {
            if tokens.contains_key(&prefix) {
                continue;
            }
            if owners.len() == 1 {
                tokens.insert(prefix, owners[0]);
            } else {
                warn!(
                    "abbreviation {:?} is shared by {} choices; only full text is accepted",
                    prefix,
                    owners.len()
                );
            }
        }

        Self { choices, tokens }
    }

    /// Table that accepts any non-blank free text.
    #[must_use]
    pub fn free_text() -> Self {
        Self::default()
    }

    /// Check if this table takes free text instead of fixed choices.
    #[must_use]
    pub fn is_free_text(&self) -> bool {
        self.choices.is_empty()
    }

    /// Map an answer to its canonical choice, if it names exactly one.
    #[must_use]
    pub fn lookup(&self, input: &str) -> Option<&str> {
        let key = input.trim().to_lowercase();
        self.tokens.get(&key).map(|&i| self.choices[i].as_str())
    }

    /// Ask `question` until the answer resolves.
    ///
    /// Free-text tables return the answer title-cased. There is no retry
    /// limit; only closed input ends the loop early.
    pub fn resolve<C: Console + ?Sized>(&self, console: &mut C, question: &str) -> Result<String> {
        loop {
            let answer = console.ask(question)?;
            trace!("answer {:?} to {:?}", answer, question);

            if self.is_free_text() {
                if let Some(text) = title_case(&answer) {
                    return Ok(text);
                }
            } else if let Some(choice) = self.lookup(&answer) {
                return Ok(choice.to_string());
            }

            console.display(INVALID_CHOICE)?;
        }
    }
}

/// Capitalize each word and collapse whitespace.
///
/// Returns `None` for blank input.
#[must_use]
pub fn title_case(input: &str) -> Option<String> {
    let words: Vec<String> = input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
