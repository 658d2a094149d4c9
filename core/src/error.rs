use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigProblem),
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Board can only be swept after a loss")]
    NotLost,
}

/// Which construction constraint was violated.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigProblem {
    #[error("board needs at least one row")]
    NoRows,
    #[error("board needs at least one column")]
    NoColumns,
    #[error("mine count must leave at least one safe cell")]
    TooManyMines,
}

impl From<ConfigProblem> for GameError {
    fn from(problem: ConfigProblem) -> Self {
        Self::InvalidConfiguration(problem)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
