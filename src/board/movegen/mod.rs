mod kings;
mod leapers;
mod pawns;
mod sliders;
mod steppers;

pub(crate) use kings::castle_rook;

use super::{Board, Color, Piece, PieceKind, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
pub(crate) const KING_OFFSETS: [(isize, isize); 8] = QUEEN_DIRECTIONS;
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
/// King offsets scaled by two.
pub(crate) const LEAPER_OFFSETS: [(isize, isize); 8] = [
    (2, 0),
    (-2, 0),
    (0, 2),
    (0, -2),
    (2, 2),
    (2, -2),
    (-2, 2),
    (-2, -2),
];

impl Board {
    /// Pseudo-legal destinations for the piece on `from`: geometry and
    /// occupancy only, without asking whether the mover's king ends up
    /// attacked. The king is the exception and filters its own steps.
    ///
    /// Takes `&mut self` because the king's filter simulates each step; the
    /// board is unchanged on return.
    pub fn pseudo_legal_moves(&mut self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::King => self.generate_king_moves(piece),
            _ => self.generate_piece_moves(piece),
        }
    }

    /// Legal destinations for the piece on `from`: its pseudo-legal moves
    /// minus those that would leave its own king attacked. These are the
    /// moves `try_move` accepts (side to move aside), and the set to show as
    /// move hints.
    pub fn candidate_moves(&mut self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let pseudo = self.pseudo_legal_moves(from);
        if piece.kind == PieceKind::King {
            return pseudo;
        }
        pseudo
            .into_iter()
            .filter(|&to| self.is_safe_after(from, to, piece.color))
            .collect()
    }

    /// Every legal `(from, to)` pair for the side to move.
    pub fn legal_moves(&mut self) -> Vec<(Square, Square)> {
        let color = self.side_to_move;
        let origins: Vec<Square> = self.pieces(color).map(|p| p.square).collect();
        let mut moves = Vec::new();
        for from in origins {
            moves.extend(self.candidate_moves(from).into_iter().map(|to| (from, to)));
        }
        moves
    }

    /// Read-only geometry for every kind. The king contributes its raw
    /// adjacency here: no safety filter and no castling. This is also the
    /// attack set used by [`Board::is_square_attacked`].
    pub(crate) fn generate_piece_moves(&self, piece: Piece) -> Vec<Square> {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(piece),
            PieceKind::Knight => self.generate_leaper_moves(piece, &KNIGHT_OFFSETS),
            PieceKind::Leaper => self.generate_leaper_moves(piece, &LEAPER_OFFSETS),
            PieceKind::King => self.generate_leaper_moves(piece, &KING_OFFSETS),
            PieceKind::Stepper => self.generate_stepper_moves(piece),
            PieceKind::Rook => self.generate_sliding_moves(piece, &ROOK_DIRECTIONS),
            PieceKind::Bishop => self.generate_sliding_moves(piece, &BISHOP_DIRECTIONS),
            PieceKind::Queen => self.generate_sliding_moves(piece, &QUEEN_DIRECTIONS),
            PieceKind::EdgeSlider => self.generate_edge_slider_moves(piece),
        }
    }

    /// Destination is on the board and not held by a piece of `color`.
    #[inline]
    pub(crate) fn can_land(&self, sq: Square, color: Color) -> bool {
        !self.is_friendly(sq, color)
    }
}
