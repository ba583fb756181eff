//! The match state machine and the session around it.
//!
//! - `state`: one match, stepped one state at a time
//! - `session`: name prompt, main menu, rematch loop
//! - `menu`: main menu
//! - `content`: static text

pub mod content;
pub mod menu;
pub mod state;
pub mod session;

pub use menu::{main_menu, MenuChoice};
pub use session::Game;
pub use state::{Match, MatchState, RoundSummary, REMATCH_QUESTION};
