use super::super::{Board, CastleRook, Color, Piece, PieceKind, Square};
use super::KING_OFFSETS;

/// The king's home file.
const KING_FILE: usize = 4;

/// Castling geometry on one side: the rook's corner, the squares that must be
/// empty, the king's transit and destination files and the rook's landing file.
struct CastleSide {
    rook_file: usize,
    between: &'static [usize],
    transit_file: usize,
    king_to_file: usize,
    rook_to_file: usize,
}

const KINGSIDE: CastleSide = CastleSide {
    rook_file: 7,
    between: &[5, 6],
    transit_file: 5,
    king_to_file: 6,
    rook_to_file: 5,
};

const QUEENSIDE: CastleSide = CastleSide {
    rook_file: 0,
    between: &[1, 2, 3],
    transit_file: 3,
    king_to_file: 2,
    rook_to_file: 3,
};

/// Rook relocation implied by a king moving `from` → `to`, if that move is a
/// two-file castling step.
pub(crate) fn castle_rook(from: Square, to: Square) -> Option<CastleRook> {
    if from.0 != to.0 || from.1.abs_diff(to.1) != 2 {
        return None;
    }
    let side = [KINGSIDE, QUEENSIDE]
        .into_iter()
        .find(|side| side.king_to_file == to.1)?;
    Some(CastleRook {
        from: Square(from.0, side.rook_file),
        to: Square(from.0, side.rook_to_file),
    })
}

impl Board {
    /// King steps that do not walk into check, plus any available castling
    /// destinations.
    pub(crate) fn generate_king_moves(&mut self, king: Piece) -> Vec<Square> {
        let color = king.color;
        let from = king.square;
        let steps = self.generate_leaper_moves(king, &KING_OFFSETS);
        let mut moves: Vec<Square> = steps
            .into_iter()
            .filter(|&to| self.is_safe_after(from, to, color))
            .collect();

        let back_rank = color.back_rank();
        if !king.has_moved() && from == Square(back_rank, KING_FILE) && !self.is_in_check(color) {
            for side in [KINGSIDE, QUEENSIDE] {
                if self.can_castle(color, &side) {
                    moves.push(Square(back_rank, side.king_to_file));
                }
            }
        }

        moves
    }

    fn can_castle(&self, color: Color, side: &CastleSide) -> bool {
        let back_rank = color.back_rank();
        let rook_ready = self
            .piece_at(Square(back_rank, side.rook_file))
            .is_some_and(|p| p.is(PieceKind::Rook, color) && !p.has_moved());
        if !rook_ready {
            return false;
        }
        if !side
            .between
            .iter()
            .all(|&file| self.is_empty(Square(back_rank, file)))
        {
            return false;
        }
        let opponent = color.opponent();
        !self.is_square_attacked(Square(back_rank, side.transit_file), opponent)
            && !self.is_square_attacked(Square(back_rank, side.king_to_file), opponent)
    }

    /// First king of `color` found scanning from a1, if any.
    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.square)
    }
}
