//! Player input: the console seam and the answer disambiguator.

pub mod console;
pub mod disambiguator;

pub use console::{Console, ScriptedConsole, Terminal, RULE_LINE};
pub use disambiguator::{title_case, Disambiguator, INVALID_CHOICE};
