//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation for both piece sets
//! - `legality.rs` - Check, checkmate, king safety and threats
//! - `make_unmake.rs` - Move application and undo
//! - `edge_cases.rs` - Castling, en passant and promotion
//! - `proptest.rs` - Property-based tests over random playouts


use crate::board::{Board, Color, PieceKind, Square};

/// Parse algebraic notation, panicking on bad input.
pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

/// Sorted destinations, for order-independent comparisons.
pub(super) fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
    squares.sort();
    squares
}

/// `(square, kind, color)` for every piece, a1 first.
pub(super) fn occupancy(board: &Board) -> Vec<(Square, PieceKind, Color)> {
    board
        .all_pieces()
        .map(|p| (p.square(), p.kind(), p.color()))
        .collect()
}
