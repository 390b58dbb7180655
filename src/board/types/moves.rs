//! Ledger entries for committed moves.

use std::fmt;

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// Rook relocation performed alongside a castling king move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastleRook {
    pub from: Square,
    pub to: Square,
}

/// A committed move, as stored on the board's ledger.
///
/// `piece` is the mover as it stood before the move (origin square and moved
/// flag included). `captured` carries its own square, which differs from
/// `to` for an en-passant capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub(crate) piece: Piece,
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) captured: Option<Piece>,
    pub(crate) promoted_to: Option<Piece>,
    pub(crate) castle: Option<CastleRook>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// The queen that replaced the pawn, for a promotion.
    #[inline]
    #[must_use]
    pub const fn promoted_to(&self) -> Option<Piece> {
        self.promoted_to
    }

    #[inline]
    #[must_use]
    pub const fn castle(&self) -> Option<CastleRook> {
        self.castle
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.castle.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.captured, Some(victim) if victim.square != self.to)
    }

    /// True for a pawn that advanced two ranks in one move.
    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.0.abs_diff(self.to.0) == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promoted) = self.promoted_to {
            write!(f, "{}", promoted.kind.to_char())?;
        }
        Ok(())
    }
}
