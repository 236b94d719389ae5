//! Error types for the kinarow crate

use thiserror::Error;

/// Main error type for the kinarow crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board size {size} is too small (must be at least 3)")]
    InvalidSize { size: usize },

    #[error("coordinates ({row}, {col}) are out of bounds for a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string has {got} cells, which is not a square of at least 3 in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
