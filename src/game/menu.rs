//! Main menu shown before the first match.

use super::content;
use crate::error::Result;
use crate::input::{Console, Disambiguator};

pub const MENU_QUESTION: &str = "1) Play 2) Rules 3) Help 4) Exit";

pub const MENU_OPTIONS: [&str; 8] = ["1", "2", "3", "4", "play", "rules", "help", "exit"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Rules,
    Help,
    Exit,
}

impl MenuChoice {
    /// Map a resolved menu answer; digits stand for the named entries.
    #[must_use]
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "1" | "play" => Some(MenuChoice::Play),
            "2" | "rules" => Some(MenuChoice::Rules),
            "3" | "help" => Some(MenuChoice::Help),
            "4" | "exit" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Show the menu until the player picks Play or Exit.
///
/// Rules and Help print their page, wait for enter, and come back here.
pub fn main_menu<C: Console + ?Sized>(console: &mut C) -> Result<MenuChoice> {
    let options = Disambiguator::new(MENU_OPTIONS);
    loop {
        for line in content::TITLE {
            console.banner(line)?;
        }
        let answer = options.resolve(console, MENU_QUESTION)?;
        match MenuChoice::from_answer(&answer) {
            Some(MenuChoice::Rules) => show_page(console, "rules", &content::rules())?,
            Some(MenuChoice::Help) => show_page(console, "help", &content::HELP)?,
            Some(choice) => return Ok(choice),
            None => continue,
        }
    }
}

fn show_page<C, S>(console: &mut C, title: &str, lines: &[S]) -> Result<()>
where
    C: Console + ?Sized,
    S: AsRef<str>,
{
    console.banner(title)?;
    console.rule()?;
    for line in lines {
        console.display(line.as_ref())?;
    }
    console.pause()
}
