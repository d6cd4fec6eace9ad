//! Check, checkmate and stalemate positions.

use super::legal_destinations;
use crate::board::{
    Board, BoardBuilder, Color, GameOverReason, PieceKind, Preset, Square, TurnEnd,
};

#[test]
fn test_start_positions_are_quiet() {
    for preset in Preset::ALL {
        let mut board = preset.board();
        for color in Color::BOTH {
            assert!(!board.is_in_check(color), "{preset}: {color} in check");
            assert_eq!(
                board.end_of_turn(color),
                TurnEnd::Continue { in_check: false }
            );
        }
    }
}

#[test]
fn test_stalemate_position() {
    // Black king in the corner, covered by queen and king but not attacked.
    let mut board = BoardBuilder::new()
        .piece(Square(0, 7), Color::Black, PieceKind::King)
        .piece(Square(1, 5), Color::White, PieceKind::Queen)
        .piece(Square(2, 6), Color::White, PieceKind::King)
        .build()
        .unwrap();
    assert!(!board.is_checkmate(Color::Black));
    assert!(board.is_stalemate(Color::Black));
    assert_eq!(
        board.end_of_turn(Color::Black),
        TurnEnd::GameOver(GameOverReason::Stalemate)
    );
    assert!(legal_destinations(&mut board, Square(0, 7)).is_empty());
}

#[test]
fn test_fools_mate() {
    let mut board = Board::new();
    for (from, to) in [
        (Square(6, 5), Square(5, 5)),
        (Square(1, 4), Square(3, 4)),
        (Square(6, 6), Square(4, 6)),
        (Square(0, 3), Square(4, 7)),
    ] {
        board.move_piece(from, to).unwrap();
    }
    assert!(board.is_in_check(Color::White));
    assert!(board.is_checkmate(Color::White));
    assert_eq!(
        board.end_of_turn(Color::White),
        TurnEnd::GameOver(GameOverReason::Checkmate {
            winner: Color::Black
        })
    );
}

#[test]
fn test_check_with_escape() {
    let mut board = Board::from_notation(". . . k2 / . . . . / r2 . . . / . . . . / k1 . . .");
    assert_eq!(
        board.end_of_turn(Color::White),
        TurnEnd::Continue { in_check: true }
    );
    // Staying on the rook's file is not allowed.
    assert_eq!(
        legal_destinations(&mut board, Square(4, 0)),
        vec![Square(3, 1), Square(4, 1)]
    );
}

#[test]
fn test_pinned_piece_stays_on_line() {
    let mut board = Board::from_notation(
        "k2 . r2 . . / . . . . . / . . . . . / . . r1 . . / . . k1 . .",
    );
    assert_eq!(
        legal_destinations(&mut board, Square(3, 2)),
        vec![Square(0, 2), Square(1, 2), Square(2, 2)]
    );
}

#[test]
fn test_illegal_moves_are_tagged_not_dropped() {
    let mut board = Board::from_notation(
        "k2 . r2 . . / . . . . . / . . . . . / . . r1 . . / . . k1 . .",
    );
    let raw = board.pseudo_moves(Square(3, 2)).unwrap();
    let tagged = board.generate_moves(Square(3, 2), true).unwrap();
    assert_eq!(raw.len(), tagged.len());
    assert_eq!(tagged.iter().filter(|m| m.is_legal).count(), 3);
    assert!(raw.iter().all(|m| m.is_legal));
}

#[test]
fn test_king_cannot_take_defended_piece() {
    // The rook covers every flight square and is defended by its king.
    let mut board = Board::from_notation(". . k2 / . r2 . / k1 . .");
    assert_eq!(
        legal_destinations(&mut board, Square(2, 0)),
        Vec::<Square>::new()
    );
    assert!(!board.is_in_check(Color::White));
    assert!(board.is_stalemate(Color::White));
}

#[test]
fn test_side_without_king() {
    let mut board = Board::from_notation("q2 . . / . . . / . . p1");
    assert!(!board.is_in_check(Color::White));
    assert!(board.has_any_legal_move(Color::White));

    let mut bare = Board::from_notation("k2 . . / . . . / . . .");
    assert!(!bare.has_any_legal_move(Color::White));
    assert_eq!(
        bare.end_of_turn(Color::White),
        TurnEnd::GameOver(GameOverReason::Stalemate)
    );
}

#[test]
fn test_any_attacked_king_is_check() {
    let mut board = Board::from_notation("k1 . . . / . . . . / . . . . / k1 . . r2");
    assert!(board.is_in_check(Color::White));
    // The attacked king can step off the rook's row.
    assert!(board.has_any_legal_move(Color::White));
}
