use super::super::{Board, Piece, Square};

const RANK_DIRECTIONS: [(isize, isize); 2] = [(0, 1), (0, -1)];
const FILE_DIRECTIONS: [(isize, isize); 2] = [(1, 0), (-1, 0)];

impl Board {
    /// Walk each direction: empty squares are added, the first enemy piece is
    /// added and ends the ray, a friendly piece ends it without being added.
    pub(crate) fn generate_sliding_moves(
        &self,
        piece: Piece,
        directions: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        for &(dr, df) in directions {
            let mut current = piece.square;
            while let Some(next) = current.offset(dr, df) {
                match self.color_on(next) {
                    None => moves.push(next),
                    Some(color) => {
                        if color != piece.color {
                            moves.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        moves
    }

    /// Slides along rank 0/7 while standing on it, and along file 0/7 while
    /// standing on it. Off both edges there are no moves.
    pub(crate) fn generate_edge_slider_moves(&self, piece: Piece) -> Vec<Square> {
        let Square(rank, file) = piece.square;
        let mut moves = Vec::new();
        if rank == 0 || rank == 7 {
            moves.extend(self.generate_sliding_moves(piece, &RANK_DIRECTIONS));
        }
        if file == 0 || file == 7 {
            moves.extend(self.generate_sliding_moves(piece, &FILE_DIRECTIONS));
        }
        moves
    }
}
