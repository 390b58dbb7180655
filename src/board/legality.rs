//! Check, checkmate and threat queries.

use super::{Board, Color, Piece, Square};

impl Board {
    /// True if `square` is among the pseudo-legal destinations of some `by`
    /// piece. A pawn attacks its push squares and only those diagonals that
    /// hold a piece to take.
    ///
    /// Kings contribute raw adjacency here, so this never recurses into the
    /// king's own safety filter.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces(by)
            .any(|attacker| self.generate_piece_moves(attacker).contains(&square))
    }

    /// True if `color`'s king is attacked. A side without a king is never in
    /// check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, color.opponent()))
    }

    /// True if `color` is in check and no pseudo-legal move of any of its
    /// pieces gets it out.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }
        let defenders: Vec<Piece> = self.pieces(color).collect();
        for piece in defenders {
            let from = piece.square;
            for to in self.pseudo_legal_moves(from) {
                if self.is_safe_after(from, to, color) {
                    return false;
                }
            }
        }
        true
    }

    /// Squares holding a `color` piece that some opponent piece could move
    /// onto. Sorted, without duplicates. Meant for hints, not legality.
    pub fn threatened_squares(&mut self, color: Color) -> Vec<Square> {
        let attackers: Vec<Square> = self.pieces(color.opponent()).map(|p| p.square).collect();
        let mut threatened = Vec::new();
        for from in attackers {
            for to in self.pseudo_legal_moves(from) {
                if self.is_friendly(to, color) && !threatened.contains(&to) {
                    threatened.push(to);
                }
            }
        }
        threatened.sort();
        threatened
    }
}
