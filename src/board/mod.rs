//! Board representation and game rules.
//!
//! Holds the 8×8 grid, the move ledger and the rules for both piece sets:
//! per-piece move generation, king-safety filtering, castling, en passant,
//! promotion, undo and checkmate detection.
//!
//! # Example
//! ```
//! use variant_chess::board::{Board, Color, Square, Variant};
//!
//! let mut board = Board::setup(Variant::Custom);
//! assert!(board.move_piece(Square(1, 4), Square(3, 4)));
//! assert_eq!(board.side_to_move(), Color::Black);
//! assert!(board.undo());
//! ```

mod builder;
mod debug;
mod error;
mod legality;
mod make_unmake;
mod movegen;
pub mod prelude;
mod simulate;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, SquareError, VariantError};
pub use state::Board;
pub use types::{CastleRook, Color, Move, Piece, PieceKind, Square, Variant};
