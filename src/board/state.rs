use log::debug;

use super::{Color, Move, Piece, PieceKind, Square, Variant};

/// The 8×8 grid, the move ledger and the side to move.
///
/// Every piece reachable through the grid is owned by the board; a captured
/// piece lives on only inside the ledger entry that captured it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; 8]; 8],
    pub(crate) history: Vec<Move>,
    pub(crate) move_count: usize,
    pub(crate) side_to_move: Color,
}

impl Board {
    /// Classical starting position.
    pub fn new() -> Self {
        Board::setup(Variant::Classical)
    }

    /// Starting position for `variant`: sixteen pawns plus the variant's
    /// back rank for both colors, White to move.
    pub fn setup(variant: Variant) -> Self {
        let mut board = Board::empty();
        for (file, kind) in variant.back_rank().into_iter().enumerate() {
            board.place(kind, Color::White, Square(Color::White.back_rank(), file));
            board.place(kind, Color::Black, Square(Color::Black.back_rank(), file));
            board.place(
                PieceKind::Pawn,
                Color::White,
                Square(Color::White.pawn_start_rank(), file),
            );
            board.place(
                PieceKind::Pawn,
                Color::Black,
                Square(Color::Black.pawn_start_rank(), file),
            );
        }
        debug!("board set up for {variant} variant");
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            history: Vec::new(),
            move_count: 0,
            side_to_move: Color::White,
        }
    }

    /// Put a fresh, unmoved piece on `sq`, replacing any occupant.
    pub(crate) fn place(&mut self, kind: PieceKind, color: Color, sq: Square) {
        self.grid[sq.0][sq.1] = Some(Piece::new(kind, color, sq));
    }

    /// Write `piece` into its own square's slot.
    pub(crate) fn put(&mut self, piece: Piece) {
        let sq = piece.square;
        self.grid[sq.0][sq.1] = Some(piece);
    }

    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.0][sq.1].take()
    }

    pub(crate) fn slot_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.grid[sq.0][sq.1]
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.0][sq.1]
    }

    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.0][sq.1].is_none()
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn kind_on(&self, sq: Square) -> Option<PieceKind> {
        self.piece_at(sq).map(|p| p.kind)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// True when `sq` holds a piece of `color`.
    #[inline]
    pub(crate) fn is_friendly(&self, sq: Square, color: Color) -> bool {
        self.color_on(sq) == Some(color)
    }

    /// Every piece on the board, scanning from a1 to h8.
    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flatten().flatten().copied()
    }

    /// Every piece of `color`, scanning from a1 to h8.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.all_pieces().filter(move |p| p.color == color)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Number of moves currently on the ledger.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Committed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
