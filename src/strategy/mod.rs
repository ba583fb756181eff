//! Computer opponent strategies.

pub mod opponent;

pub use opponent::{OpponentStrategy, WEIGHTS};
