//! Whole games driven through the public API only.

use variant_chess::board::prelude::*;

fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

fn play(board: &mut Board, line: &[&str]) {
    for mv in line {
        let (from, to) = mv.split_at(2);
        if let Err(err) = board.try_move(sq(from), sq(to)) {
            panic!("{mv} rejected: {err}\n");
        }
    }
}

#[test]
fn scholars_mate() {
    let mut board = Board::new();
    play(
        &mut board,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );

    let last = board.last_move().expect("moves played");
    assert_eq!(last.captured().map(|p| p.kind()), Some(PieceKind::Pawn));
    assert_eq!(board.side_to_move(), Color::Black);
    assert!(board.is_in_check(Color::Black));
    assert!(board.is_checkmate(Color::Black));
    assert!(board.legal_moves().is_empty());

    // Taking back the mating move leaves Black free again.
    assert!(board.undo());
    assert!(!board.is_in_check(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
}

#[test]
fn custom_opening_sequence() {
    let mut board = Board::setup(Variant::Custom);
    assert_eq!(board.kind_on(sq("a1")), Some(PieceKind::EdgeSlider));
    assert_eq!(board.kind_on(sq("b8")), Some(PieceKind::Leaper));
    assert_eq!(board.kind_on(sq("c8")), Some(PieceKind::Stepper));

    play(&mut board, &["b1d3", "g8e6", "a2a4"]);

    // With a2 gone the edge slider can climb the a-file.
    let slider_moves = board.candidate_moves(sq("a1"));
    assert!(slider_moves.contains(&sq("a2")));
    assert!(slider_moves.contains(&sq("a3")));
    assert!(!slider_moves.contains(&sq("a4")));

    // The leaper left b1, so the stepper beside it can step there and nowhere else.
    assert_eq!(board.candidate_moves(sq("c1")), vec![sq("b1")]);

    assert_eq!(board.move_count(), 3);
    assert_eq!(board.history()[1].piece().kind(), PieceKind::Leaper);
}

#[test]
fn leaper_captures_over_a_wall() {
    let mut board = Board::setup(Variant::Custom);
    play(&mut board, &["b1d3", "g8e6", "d3d5", "e6g4"]);

    // d5 reaches d7 over the empty d6 square and takes the pawn.
    let mv = board.try_move(sq("d5"), sq("d7")).expect("leaper capture");
    assert_eq!(mv.captured().map(|p| p.kind()), Some(PieceKind::Pawn));
    assert_eq!(board.pieces(Color::Black).count(), 15);
}

#[test]
fn turns_alternate_and_wrong_side_is_refused() {
    let mut board = Board::setup(Variant::Custom);
    assert_eq!(board.side_to_move(), Color::White);

    let err = board
        .try_move(sq("e7"), sq("e5"))
        .expect_err("black cannot open");
    assert_eq!(
        err,
        MoveError::WrongSide {
            square: sq("e7"),
            expected: Color::White
        }
    );

    play(&mut board, &["e2e4"]);
    assert_eq!(board.side_to_move(), Color::Black);
    assert!(!board.move_piece(sq("d2"), sq("d4")));
    play(&mut board, &["e7e5"]);
    assert_eq!(board.side_to_move(), Color::White);
}

#[test]
fn undo_all_the_way_back() {
    let mut board = Board::new();
    let start = board.clone();
    play(
        &mut board,
        &["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5a5", "g1f3", "c8g4"],
    );
    assert_eq!(board.move_count(), 8);

    let mut undone = Vec::new();
    while let Some(mv) = board.undo_move() {
        undone.push(mv);
    }
    assert_eq!(undone.len(), 8);
    assert_eq!(undone[0].to(), sq("g4"));
    assert_eq!(board, start);
}

#[test]
fn variant_selection_from_text() {
    assert_eq!("1".parse::<Variant>(), Ok(Variant::Classical));
    assert_eq!("custom".parse::<Variant>(), Ok(Variant::Custom));
    assert_eq!(Variant::try_from(2u8), Ok(Variant::Custom));
    assert!("3".parse::<Variant>().is_err());
    assert!(Variant::try_from(0u8).is_err());
}

#[test]
fn square_notation_errors() {
    assert_eq!("h8".parse::<Square>(), Ok(Square(7, 7)));
    assert!(matches!(
        "i1".parse::<Square>(),
        Err(SquareError::InvalidNotation { .. })
    ));
    assert!(Square::try_from((8, 0)).is_err());
}
