use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Trivia service error: {0}")]
    Service(String),
    #[error("Coordinates outside of the board")]
    OutOfRange,
    #[error("Superseded by a newer game load")]
    StaleLoad,
    #[error("No board loaded yet")]
    NotLoaded,
    #[error("Board must have 6 categories of 5 clues")]
    InvalidBoardShape,
}

impl GameError {
    /// Errors that only come from racing or out-of-date input and can be dropped silently.
    pub const fn is_ignorable(&self) -> bool {
        matches!(self, Self::OutOfRange | Self::StaleLoad | Self::NotLoaded)
    }
}


pub type Result<T> = core::result::Result<T, GameError>;
