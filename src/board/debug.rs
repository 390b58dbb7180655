use super::{Board, Square};

impl Board {
    /// Panics in debug builds if a grid slot holds a piece whose stored
    /// square is a different one. Compiled to nothing in release builds.
    pub(crate) fn debug_validate(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        for sq in Square::all() {
            if let Some(piece) = self.piece_at(sq) {
                assert_eq!(
                    piece.square(),
                    sq,
                    "{piece} stored at {} sits on {sq}\n{}",
                    piece.square(),
                    self.grid_string()
                );
            }
        }
    }

    /// Plain-text grid, rank 8 on top, for assertion messages.
    pub(crate) fn grid_string(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            out.push_str(&format!("{} ", rank + 1));
            for file in 0..8 {
                let c = self.piece_at(Square(rank, file)).map_or('.', |p| p.symbol());
                out.push(c);
            }
            out.push('\n');
        }
        out.push_str("  abcdefgh");
        out
    }
}
