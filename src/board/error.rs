//! Error types for board operations.

use thiserror::Error;

use super::{Color, Square};

/// Reasons a requested move is refused. The board is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The origin square is empty
    #[error("No piece on {square}")]
    NoPiece { square: Square },
    /// The piece on the origin square belongs to the side not on move
    #[error("Piece on {square} does not belong to {expected}, who is on move")]
    WrongSide { square: Square, expected: Color },
    /// The destination is not among the piece's legal moves
    #[error("Illegal move {from}{to}")]
    Illegal { from: Square, to: Square },
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    #[error("Rank {rank} out of bounds (must be 0-7)")]
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    #[error("File {file} out of bounds (must be 0-7)")]
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}

/// Error type for variant selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("Unknown variant '{found}', expected 1 (classical) or 2 (custom)")]
    Unknown { found: String },
}
