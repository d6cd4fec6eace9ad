//! Property-based tests using proptest.

use crate::board::{Board, Color, Preset, Square};
use proptest::prelude::*;
use rand::prelude::*;

fn preset_strategy() -> impl Strategy<Value = Preset> {
    prop::sample::select(Preset::ALL.to_vec())
}

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=16usize
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Every legal `(from, to)` pair for `player`.
fn all_legal_moves(board: &mut Board, player: Color) -> Vec<(Square, Square)> {
    let mut out = Vec::new();
    for (from, _) in board.pieces_of(player) {
        for m in board.legal_moves(from).unwrap() {
            out.push((from, m.destination));
        }
    }
    out
}

/// Play up to `num_moves` random legal moves, alternating sides from White.
/// Returns the side to move next.
fn random_playout(board: &mut Board, rng: &mut StdRng, num_moves: usize) -> Color {
    let mut side = Color::White;
    for _ in 0..num_moves {
        let moves = all_legal_moves(board, side);
        let Some(&(from, to)) = moves.choose(rng) else {
            break;
        };
        board.move_piece(from, to).unwrap();
        board.promote_if_needed(to);
        side = side.opponent();
    }
    side
}

proptest! {
    /// Property: trying every legal move temporarily leaves the board untouched
    #[test]
    fn prop_temporary_moves_restore_board(
        preset in preset_strategy(),
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut board = preset.board();
        let mut rng = StdRng::seed_from_u64(seed);
        let side = random_playout(&mut board, &mut rng, num_moves);

        let before = board.clone();
        for (from, to) in all_legal_moves(&mut board, side) {
            board.with_temporary_move(from, to, |b| b.is_in_check(side)).unwrap();
            prop_assert_eq!(&board, &before);
        }
    }

    /// Property: legal moves never leave the mover's king in check
    #[test]
    fn prop_legal_moves_are_legal(
        preset in preset_strategy(),
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut board = preset.board();
        let mut rng = StdRng::seed_from_u64(seed);
        let side = random_playout(&mut board, &mut rng, num_moves);

        for (from, to) in all_legal_moves(&mut board, side) {
            let exposed = board
                .with_temporary_move(from, to, |b| b.is_in_check(side))
                .unwrap();
            prop_assert!(!exposed, "{} -> {} left {} in check", from, to, side);
        }
    }

    /// Property: a candidate is tagged illegal exactly when trying it exposes the mover's king
    #[test]
    fn prop_illegal_tag_matches_simulation(
        preset in preset_strategy(),
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut board = preset.board();
        let mut rng = StdRng::seed_from_u64(seed);
        let side = random_playout(&mut board, &mut rng, num_moves);

        for (from, _) in board.pieces_of(side) {
            for m in board.generate_moves(from, true).unwrap() {
                let exposed = board
                    .with_temporary_move(from, m.destination, |b| b.is_in_check(side))
                    .unwrap();
                prop_assert_eq!(m.is_legal, !exposed);
            }
        }
    }

    /// Property: no candidate ever targets a friendly piece
    #[test]
    fn prop_no_friendly_targets(
        preset in preset_strategy(),
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut board = preset.board();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        for color in Color::BOTH {
            for (from, piece) in board.pieces_of(color) {
                for m in board.pseudo_moves(from).unwrap() {
                    let target = board.cell(m.destination);
                    prop_assert!(target.map_or(true, |t| t.owner != piece.owner));
                    prop_assert_eq!(m.is_capture, target.is_some());
                }
            }
        }
    }

    /// Property: notation round-trip preserves the position
    #[test]
    fn prop_notation_roundtrip(
        preset in preset_strategy(),
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut board = preset.board();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let restored = Board::try_from_notation(&board.to_notation()).unwrap();
        prop_assert_eq!(restored, board);
    }

    /// Property: the detector agrees with an exhaustive move count
    #[test]
    fn prop_end_of_turn_matches_move_list(
        preset in preset_strategy(),
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        use crate::board::{GameOverReason, TurnEnd};

        let mut board = preset.board();
        let mut rng = StdRng::seed_from_u64(seed);
        let side = random_playout(&mut board, &mut rng, num_moves);

        let has_moves = !all_legal_moves(&mut board, side).is_empty();
        let in_check = board.is_in_check(side);
        let expected = match (has_moves, in_check) {
            (true, _) => TurnEnd::Continue { in_check },
            (false, true) => TurnEnd::GameOver(GameOverReason::Checkmate { winner: side.opponent() }),
            (false, false) => TurnEnd::GameOver(GameOverReason::Stalemate),
        };
        prop_assert_eq!(board.end_of_turn(side), expected);
    }
}
