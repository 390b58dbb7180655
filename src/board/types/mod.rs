//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `PieceKind`, `Color` and `Piece` - piece kinds, colors and placed pieces
//! - `Square` - (rank, file) board coordinates
//! - `Move` - ledger entry for a committed move
//! - `Variant` - which piece set the board is set up with

mod moves;
mod piece;
mod square;
mod variant;

pub use moves::{CastleRook, Move};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
pub use variant::Variant;
