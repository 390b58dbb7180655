use log::debug;

use super::movegen::castle_rook;
use super::{Board, Move, MoveError, Piece, PieceKind, Square};

impl Board {
    /// Play `from` → `to` for the side to move.
    ///
    /// On error the board is untouched.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoPiece { square: from })?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongSide {
                square: from,
                expected: self.side_to_move,
            });
        }
        if !self.candidate_moves(from).contains(&to) {
            return Err(MoveError::Illegal { from, to });
        }
        self.make_move(from, to)
    }

    /// Boolean form of [`Board::try_move`].
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        match self.try_move(from, to) {
            Ok(mv) => {
                debug!("played {mv} (move {})", self.move_count);
                true
            }
            Err(err) => {
                debug!("rejected {from}{to}: {err}");
                false
            }
        }
    }

    /// Apply a move without checking its legality. Handles castling rook
    /// relocation, en-passant removal and promotion to a queen.
    pub(crate) fn make_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        let mut piece = self.take(from).ok_or(MoveError::NoPiece { square: from })?;
        let before = piece;
        let color = piece.color;

        let castle = if piece.kind == PieceKind::King {
            castle_rook(from, to).filter(|c| {
                self.piece_at(c.from)
                    .is_some_and(|p| p.is(PieceKind::Rook, color))
            })
        } else {
            None
        };

        let is_en_passant = piece.kind == PieceKind::Pawn && from.1 != to.1 && self.is_empty(to);
        let captured = if is_en_passant {
            self.take(Square(from.0, to.1))
        } else {
            self.take(to)
        };

        if let Some(c) = castle {
            if let Some(mut rook) = self.take(c.from) {
                rook.square = c.to;
                rook.mark_moved();
                self.put(rook);
            }
        }

        piece.square = to;
        piece.mark_moved();
        let promoted_to =
            if piece.kind == PieceKind::Pawn && to.0 == color.pawn_promotion_rank() {
                let queen = Piece::new(PieceKind::Queen, color, to);
                self.put(queen);
                Some(queen)
            } else {
                self.put(piece);
                None
            };

        let mv = Move {
            piece: before,
            from,
            to,
            captured,
            promoted_to,
            castle,
        };
        self.history.push(mv);
        self.move_count += 1;
        self.side_to_move = color.opponent();
        self.debug_validate();

        Ok(mv)
    }

    /// Take back the last move. Returns false if the ledger is empty.
    pub fn undo(&mut self) -> bool {
        self.undo_move().is_some()
    }

    /// Take back the last move and return its ledger entry.
    ///
    /// The moved flag of the piece that moved is cleared only when it left
    /// from its color's pawn start rank. A king or rook that moved once
    /// therefore keeps its flag (and loses castling) even after undo, while a
    /// piece that came back to the pawn start rank and moved again has its
    /// flag cleared.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;

        // The mover, or the queen it became.
        self.take(mv.to);

        let mut piece = mv.piece;
        piece.square = mv.from;
        piece.mark_moved();
        if mv.from.0 == piece.color.pawn_start_rank() {
            piece.clear_moved();
        }
        self.put(piece);

        if let Some(captured) = mv.captured {
            self.put(captured);
        }

        if let Some(c) = mv.castle {
            if let Some(mut rook) = self.take(c.to) {
                rook.square = c.from;
                rook.clear_moved();
                self.put(rook);
            }
        }

        self.move_count = self.move_count.saturating_sub(1);
        self.side_to_move = piece.color;
        self.debug_validate();
        debug!("undid {mv}");
        Some(mv)
    }
}
