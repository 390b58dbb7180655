//! Fluent builder for constructing positions.
//!
//! Allows creating arbitrary positions piece by piece instead of playing
//! moves from a starting setup.
//!
//! # Example
//! ```
//! use variant_chess::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, PieceKind::King)
//!     .piece(Square(7, 4), Color::Black, PieceKind::King)
//!     .piece(Square(1, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.all_pieces().count(), 3);
//! ```

use super::{Board, Color, PieceKind, Square, Variant};

#[derive(Clone, Copy, Debug)]
struct Placement {
    square: Square,
    color: Color,
    kind: PieceKind,
    moved: bool,
}

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<Placement>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from a variant's initial position.
    #[must_use]
    pub fn starting_position(variant: Variant) -> Self {
        let mut builder = Self::new();
        for (file, kind) in variant.back_rank().into_iter().enumerate() {
            for color in Color::BOTH {
                builder = builder
                    .piece(Square(color.back_rank(), file), color, kind)
                    .piece(Square(color.pawn_start_rank(), file), color, PieceKind::Pawn);
            }
        }
        builder
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|p| p.square != square);
        self.pieces.push(Placement {
            square,
            color,
            kind,
            moved: false,
        });
        self
    }

    /// Flag the piece on `square` as having moved. Kinds without a moved
    /// flag ignore this.
    #[must_use]
    pub fn moved(mut self, square: Square) -> Self {
        if let Some(p) = self.pieces.iter_mut().find(|p| p.square == square) {
            p.moved = true;
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.square != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board, with an empty ledger.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for placement in self.pieces {
            board.place(placement.kind, placement.color, placement.square);
            if placement.moved {
                if let Some(piece) = board.slot_mut(placement.square) {
                    piece.mark_moved();
                }
            }
        }
        board.side_to_move = self.side_to_move;

        board
    }
}
