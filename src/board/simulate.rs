//! Scoped "what if" moves.
//!
//! A [`Simulation`] plays a move on the board without touching the ledger and
//! puts everything back when it is dropped, on every exit path including
//! unwinding. While it is alive the board is only reachable through the guard,
//! read-only.

use std::ops::Deref;

use log::trace;

use super::{Board, Color, Piece, PieceKind, Square};

pub(crate) struct Simulation<'a> {
    board: &'a mut Board,
    piece: Piece,
    to: Square,
    displaced: Option<Piece>,
    en_passant_victim: Option<Piece>,
}

impl<'a> Simulation<'a> {
    /// Move the piece on `from` to `to`. Returns `None`, leaving the board
    /// untouched, if `from` is empty.
    pub(crate) fn new(board: &'a mut Board, from: Square, to: Square) -> Option<Self> {
        let piece = board.take(from)?;

        // A pawn moving diagonally onto an empty square is an en-passant capture.
        let en_passant_victim = if piece.kind == PieceKind::Pawn
            && from.1 != to.1
            && board.is_empty(to)
            && board
                .piece_at(Square(from.0, to.1))
                .is_some_and(|p| p.is(PieceKind::Pawn, piece.color.opponent()))
        {
            board.take(Square(from.0, to.1))
        } else {
            None
        };
        let displaced = board.take(to);

        let mut moved = piece;
        moved.square = to;
        moved.mark_moved();
        board.put(moved);
        trace!("simulating {}{from}{to}", piece.symbol());

        Some(Simulation {
            board,
            piece,
            to,
            displaced,
            en_passant_victim,
        })
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        *self.board.slot_mut(self.to) = self.displaced;
        if let Some(victim) = self.en_passant_victim {
            self.board.put(victim);
        }
        // The saved copy still carries the origin square and the old moved flag.
        self.board.put(self.piece);
        self.board.debug_validate();
    }
}

impl Board {
    /// True if moving `from` → `to` would leave `color`'s king unattacked.
    pub(crate) fn is_safe_after(&mut self, from: Square, to: Square, color: Color) -> bool {
        match Simulation::new(self, from, to) {
            Some(sim) => !sim.is_in_check(color),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn sample() -> Board {
        BoardBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(1, 4), Color::White, PieceKind::Pawn)
            .piece(Square(5, 3), Color::Black, PieceKind::Knight)
            .piece(Square(2, 3), Color::White, PieceKind::Rook)
            .piece(Square(7, 4), Color::Black, PieceKind::King)
            .build()
    }

    #[test]
    fn test_simulation_moves_then_restores() {
        let mut board = sample();
        let before = board.clone();
        {
            let sim = Simulation::new(&mut board, Square(2, 3), Square(5, 3)).expect("rook present");
            let rook = sim.piece_at(Square(5, 3)).expect("rook moved");
            assert_eq!(rook.kind(), PieceKind::Rook);
            assert_eq!(rook.square(), Square(5, 3));
            assert_eq!(rook.moved(), Some(true));
            assert!(sim.is_empty(Square(2, 3)));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_simulation_from_empty_square_is_none() {
        let mut board = sample();
        let before = board.clone();
        assert!(Simulation::new(&mut board, Square(4, 4), Square(5, 4)).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_simulation_restores_on_panic() {
        let mut board = sample();
        let before = board.clone();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _sim = Simulation::new(&mut board, Square(1, 4), Square(3, 4));
            panic!("test failure inside simulation");
        }));
        assert!(result.is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_simulated_en_passant_lifts_victim() {
        let mut board = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, PieceKind::Pawn)
            .piece(Square(4, 3), Color::Black, PieceKind::Pawn)
            .build();
        let before = board.clone();
        {
            let sim = Simulation::new(&mut board, Square(4, 4), Square(5, 3)).expect("pawn present");
            assert!(sim.is_empty(Square(4, 3)));
            assert_eq!(sim.kind_on(Square(5, 3)), Some(PieceKind::Pawn));
        }
        assert_eq!(board, before);
    }
}
