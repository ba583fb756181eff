use thiserror::Error;

/// Errors that can stop a game session.
///
/// Mistyped answers never show up here: the disambiguator re-prompts until
/// it gets something it can resolve.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before an answer was given")]
    InputClosed,

    #[error("unknown move: {0}")]
    UnknownMove(String),
}

/// Convenience Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
