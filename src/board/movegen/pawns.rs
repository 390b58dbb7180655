use super::super::{Board, Piece, PieceKind, Square};

/// The two forward diagonals of `pawn` that lie on the board.
fn pawn_attack_squares(pawn: Piece) -> impl Iterator<Item = Square> {
    let dir = pawn.color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(move |df| pawn.square.offset(dir, df))
}

impl Board {
    pub(crate) fn generate_pawn_moves(&self, pawn: Piece) -> Vec<Square> {
        let mut moves = Vec::new();
        let color = pawn.color;
        let from = pawn.square;
        let dir = color.pawn_direction();

        if let Some(forward_sq) = from.offset(dir, 0) {
            if self.is_empty(forward_sq) {
                moves.push(forward_sq);
                if !pawn.has_moved() && from.0 == color.pawn_start_rank() {
                    if let Some(double_sq) = from.offset(2 * dir, 0) {
                        if self.is_empty(double_sq) {
                            moves.push(double_sq);
                        }
                    }
                }
            }
        }

        for target_sq in pawn_attack_squares(pawn) {
            if self.color_on(target_sq) == Some(color.opponent()) {
                moves.push(target_sq);
            }
        }

        if let Some(ep_sq) = self.en_passant_target(pawn) {
            moves.push(ep_sq);
        }

        moves
    }

    /// The square behind an enemy pawn that just advanced two ranks to land
    /// beside `pawn`, if `pawn` stands on its en-passant rank.
    pub(crate) fn en_passant_target(&self, pawn: Piece) -> Option<Square> {
        let from = pawn.square;
        if from.0 != pawn.color.en_passant_rank() {
            return None;
        }
        let last = self.last_move()?;
        if !last.is_double_pawn_push() || last.piece.color == pawn.color {
            return None;
        }
        if last.to.0 != from.0 || last.to.1.abs_diff(from.1) != 1 {
            return None;
        }
        let pushed_pawn_present = self
            .piece_at(last.to)
            .is_some_and(|p| p.is(PieceKind::Pawn, pawn.color.opponent()));
        if !pushed_pawn_present {
            return None;
        }
        let target = Square::new(
            (from.0 as isize + pawn.color.pawn_direction()) as usize,
            last.to.1,
        )?;
        self.is_empty(target).then_some(target)
    }
}
