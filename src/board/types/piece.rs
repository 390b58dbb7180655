//! Piece kinds, colors and on-board pieces.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// The nine piece kinds across both variants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    /// Jumps exactly two squares in any of the eight directions.
    Leaper,
    /// Steps like a king, but only while it has a neighbour.
    Stepper,
    /// Slides along the board edge it stands on.
    EdgeSlider,
}

impl PieceKind {
    pub const ALL: [PieceKind; 9] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Leaper,
        PieceKind::Stepper,
        PieceKind::EdgeSlider,
    ];

    /// Parse a piece kind from its symbol, ignoring case.
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            'm' => Some(PieceKind::Leaper),
            'd' => Some(PieceKind::Stepper),
            'c' => Some(PieceKind::EdgeSlider),
            _ => None,
        }
    }

    /// Lowercase symbol of this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Leaper => 'm',
            PieceKind::Stepper => 'd',
            PieceKind::EdgeSlider => 'c',
        }
    }

    /// Returns true for the kinds whose first move matters to the rules
    /// (pawn double step and castling).
    #[inline]
    #[must_use]
    pub const fn tracks_moved(self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Rook | PieceKind::King)
    }

    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(
            self,
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen | PieceKind::EdgeSlider
        )
    }
}

/// Piece colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank a pawn must stand on to capture en passant (4 for White, 3 for Black)
    #[inline]
    #[must_use]
    pub const fn en_passant_rank(self) -> usize {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on the board.
///
/// `square` mirrors the grid slot holding the piece. `moved` is `Some` only
/// for the kinds reported by [`PieceKind::tracks_moved`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) color: Color,
    pub(crate) square: Square,
    pub(crate) moved: Option<bool>,
}

impl Piece {
    /// Create an unmoved piece standing on `square`.
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            square,
            moved: if kind.tracks_moved() { Some(false) } else { None },
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// The moved flag, or `None` for kinds that do not carry one.
    #[inline]
    #[must_use]
    pub const fn moved(&self) -> Option<bool> {
        self.moved
    }

    #[inline]
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved.unwrap_or(false)
    }

    pub(crate) fn mark_moved(&mut self) {
        if let Some(flag) = self.moved.as_mut() {
            *flag = true;
        }
    }

    pub(crate) fn clear_moved(&mut self) {
        if let Some(flag) = self.moved.as_mut() {
            *flag = false;
        }
    }

    /// Display symbol, uppercase for White.
    #[must_use]
    pub fn symbol(&self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    #[inline]
    #[must_use]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.to_char()), Some(kind));
            assert_eq!(
                PieceKind::from_char(kind.to_char().to_ascii_uppercase()),
                Some(kind)
            );
        }
        assert_eq!(PieceKind::from_char('x'), None);
    }

    #[test]
    fn test_symbol_case_follows_color() {
        let white = Piece::new(PieceKind::Leaper, Color::White, Square(0, 1));
        let black = Piece::new(PieceKind::EdgeSlider, Color::Black, Square(7, 0));
        assert_eq!(white.symbol(), 'M');
        assert_eq!(black.symbol(), 'c');
    }

    #[test]
    fn test_moved_flag_only_for_tracked_kinds() {
        for kind in PieceKind::ALL {
            let mut piece = Piece::new(kind, Color::White, Square(1, 1));
            piece.mark_moved();
            let expected = kind.tracks_moved().then_some(true);
            assert_eq!(piece.moved(), expected, "{kind:?}");
        }
    }

    #[test]
    fn test_pawn_geometry_per_color() {
        assert_eq!(Color::White.pawn_direction(), 1);
        assert_eq!(Color::Black.pawn_direction(), -1);
        assert_eq!(Color::White.en_passant_rank(), 4);
        assert_eq!(Color::Black.en_passant_rank(), 3);
        assert_eq!(Color::Black.opponent(), Color::White);
    }
}
