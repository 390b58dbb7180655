use super::super::{Board, Piece, Square};

impl Board {
    /// Unblocked jumps by fixed offsets, kept when on the board and not onto
    /// a friendly piece. Serves the knight, the leaper and raw king steps.
    pub(crate) fn generate_leaper_moves(
        &self,
        piece: Piece,
        offsets: &[(isize, isize)],
    ) -> Vec<Square> {
        offsets
            .iter()
            .filter_map(|&(dr, df)| piece.square.offset(dr, df))
            .filter(|&to| self.can_land(to, piece.color))
            .collect()
    }
}
