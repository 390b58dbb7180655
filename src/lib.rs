pub mod board;

pub use board::{Board, BoardBuilder, Color, Move, MoveError, Piece, PieceKind, Square, Variant};
