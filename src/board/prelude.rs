//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use variant_chess::board::prelude::*;
//!
//! let board = Board::setup(Variant::Classical);
//! assert_eq!(board.kind_on(Square(0, 4)), Some(PieceKind::King));
//! ```

pub use super::{
    Board, BoardBuilder, Color, Move, MoveError, Piece, PieceKind, Square, SquareError, Variant,
    VariantError,
};
