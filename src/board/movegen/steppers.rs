use super::super::{Board, Piece, Square};
use super::KING_OFFSETS;

impl Board {
    /// King-like steps, available only while at least one neighbouring
    /// square (either color) is occupied.
    pub(crate) fn generate_stepper_moves(&self, piece: Piece) -> Vec<Square> {
        let has_neighbour = KING_OFFSETS
            .iter()
            .filter_map(|&(dr, df)| piece.square.offset(dr, df))
            .any(|sq| !self.is_empty(sq));
        if !has_neighbour {
            return Vec::new();
        }
        self.generate_leaper_moves(piece, &KING_OFFSETS)
    }
}
