//! Line-based console seam.
//!
//! The game only ever needs to show a block of text and read one line back.
//! `Terminal` does that over stdin/stdout; `ScriptedConsole` replays canned
//! answers and records everything shown, which is how matches are tested.

use colored::Colorize;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::{GameError, Result};

/// Separator printed under banners.
pub const RULE_LINE: &str = "==========================================";

/// Text and line I/O used by the game.
pub trait Console {
    /// Show a line or block of text.
    fn display(&mut self, text: &str) -> Result<()>;

    /// Read one line, without its trailing newline.
    ///
    /// Returns `GameError::InputClosed` when no more input will arrive.
    fn read_line(&mut self) -> Result<String>;

    /// Show a question and read the answer.
    fn ask(&mut self, question: &str) -> Result<String> {
        self.display(question)?;
        self.read_line()
    }

    /// Show a heading.
    fn banner(&mut self, text: &str) -> Result<()> {
        self.display(&text.to_uppercase())
    }

    /// Show the separator line.
    fn rule(&mut self) -> Result<()> {
        self.display(RULE_LINE)
    }

    /// Wait for the player to press enter.
    fn pause(&mut self) -> Result<()> {
        self.display("\n\nPress enter to continue...")?;
        self.read_line().map(|_| ())
    }
}

/// Interactive console over stdin/stdout.
#[derive(Debug)]
pub struct Terminal {
    color: bool,
}

impl Terminal {
    /// Create a terminal console.
    ///
    /// With `color` off, `colored` output is forced plain for the whole process.
    pub fn new(color: bool) -> Self {
        if !color {
            colored::control::set_override(false);
        }
        Self { color }
    }
}

impl Console for Terminal {
    fn display(&mut self, text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        {
            let mut out = io::stdout().lock();
            writeln!(out, "{}", question)?;
            write!(out, "> ")?;
        }
        self.read_line()
    }

    fn banner(&mut self, text: &str) -> Result<()> {
        let heading = text.to_uppercase();
        if self.color {
            self.display(&format!("{}", heading.as_str().bright_cyan().bold()))
        } else {
            self.display(&heading)
        }
    }
}

/// Console that answers prompts from a script and records its output.
///
/// ## Example
///
/// ```
/// use rpsls::input::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["rock"]);
/// assert_eq!(console.ask("Your move?").unwrap(), "rock");
/// assert!(console.saw("Your move?"));
/// assert!(console.ask("Again?").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that will answer with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything displayed so far, one entry per `display` call.
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if any displayed text contains `needle`.
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|t| t.contains(needle))
    }

    /// Count displayed entries containing `needle`.
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.transcript.iter().filter(|t| t.contains(needle)).count()
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn display(&mut self, text: &str) -> Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        self.answers.pop_front().ok_or(GameError::InputClosed)
    }
}
