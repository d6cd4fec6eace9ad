//! Turn engine: the selection state machine that drives a game.

use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use crate::board::search::choose_move;
use crate::board::{
    Board, BoardError, Color, GameOverReason, Layout, MoveCandidate, Piece, PlayedMove, Square,
    TurnEnd,
};

/// Where the turn engine is in the selection cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GamePhase {
    AwaitingPieceSelection,
    AwaitingDestinationSelection,
    GameOver(GameOverReason),
}

/// Whose turn it is and what they have selected.
///
/// `selected` is `Some` only in `AwaitingDestinationSelection`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnState {
    pub active_player: Color,
    pub selected: Option<Square>,
    pub phase: GamePhase,
}

/// The automated side's reply to a move, applied before `select` returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutomatedReply {
    pub played: PlayedMove,
    pub score: i32,
    pub turn_end: TurnEnd,
}

/// What a single `select` call did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectOutcome {
    /// Legal destinations of the piece that just became selected
    pub highlight: Option<Vec<MoveCandidate>>,
    /// The move applied by this selection
    pub played: Option<PlayedMove>,
    /// Classification for the next player after `played`
    pub turn_end: Option<TurnEnd>,
    /// The automated side's answer, if it was its turn next
    pub automated: Option<AutomatedReply>,
}

impl SelectOutcome {
    pub fn move_was_made(&self) -> bool {
        self.played.is_some()
    }

    /// Square of the pawn promoted by this selection, if any.
    pub fn promotion(&self) -> Option<Square> {
        self.played.filter(|m| m.promoted).map(|m| m.to)
    }

    /// True when the outcome carries no event: no highlight, no move and
    /// no automated reply. A cleared selection still counts as no event.
    pub fn is_noop(&self) -> bool {
        *self == SelectOutcome::default()
    }
}

/// A game in progress: the board, the turn state, and the automated side.
pub struct Game {
    board: Board,
    turn: TurnState,
    automated: Option<Color>,
    rng: StdRng,
    history: Vec<PlayedMove>,
}

/// Start a game from `layout`, with the greedy selector playing
/// `automated_color` when `automated_enabled` is set.
pub fn start_game(
    layout: impl Into<Layout>,
    automated_enabled: bool,
    automated_color: Color,
) -> Game {
    let mut config = GameConfig::new(layout);
    if automated_enabled {
        config = config.automated(automated_color);
    }
    Game::start(config)
}

impl Game {
    /// Set up the board and turn state. White moves first; if the automated
    /// side is White its first move is played before this returns.
    pub fn start(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut game = Game {
            board: config.layout.board(),
            turn: TurnState {
                active_player: Color::White,
                selected: None,
                phase: GamePhase::AwaitingPieceSelection,
            },
            automated: config.automated,
            rng,
            history: Vec::new(),
        };

        // A custom layout may leave White without a move from the outset.
        if let TurnEnd::GameOver(reason) = game.board.end_of_turn(Color::White) {
            game.finish(reason);
        } else if game.automated == Some(Color::White) {
            game.play_automated();
        }

        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Result<Option<Piece>, BoardError> {
        self.board.piece_at(square)
    }

    pub fn active_player(&self) -> Color {
        self.turn.active_player
    }

    pub fn phase(&self) -> GamePhase {
        self.turn.phase
    }

    pub fn selected(&self) -> Option<Square> {
        self.turn.selected
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    pub fn automated(&self) -> Option<Color> {
        self.automated
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        matches!(self.turn.phase, GamePhase::GameOver(_))
    }

    /// Whether the player to move is in check.
    pub fn in_check(&self) -> bool {
        self.board.is_in_check(self.turn.active_player)
    }

    /// Legal destinations of the piece on `square` without selecting it.
    pub fn legal_moves_for(&mut self, square: Square) -> Result<Vec<MoveCandidate>, BoardError> {
        self.board.legal_moves(square)
    }

    /// Feed one square into the turn engine.
    ///
    /// Off-board squares return `OutOfBounds` and change nothing. After a
    /// move that hands the turn to the automated side, its reply is played
    /// before this returns and reported in `SelectOutcome::automated`.
    pub fn select(&mut self, square: Square) -> Result<SelectOutcome, BoardError> {
        let mut outcome = self.handle_selection(square)?;
        if outcome.move_was_made()
            && !self.is_over()
            && self.automated == Some(self.turn.active_player)
        {
            outcome.automated = self.play_automated();
        }
        Ok(outcome)
    }

    fn handle_selection(&mut self, square: Square) -> Result<SelectOutcome, BoardError> {
        self.board.check_bounds(square)?;

        match self.turn.phase {
            GamePhase::GameOver(_) => Ok(SelectOutcome::default()),
            GamePhase::AwaitingPieceSelection => Ok(self.select_piece(square)),
            GamePhase::AwaitingDestinationSelection => {
                let Some(from) = self.turn.selected else {
                    return Ok(self.select_piece(square));
                };
                if from == square {
                    return Ok(SelectOutcome::default());
                }
                let is_legal_target = self
                    .board
                    .legal_moves(from)?
                    .iter()
                    .any(|m| m.destination == square);
                if is_legal_target {
                    self.perform_move(from, square)
                } else {
                    Ok(self.select_piece(square))
                }
            }
        }
    }

    fn select_piece(&mut self, square: Square) -> SelectOutcome {
        match self.board.piece_at(square) {
            Ok(Some(piece)) if piece.owner == self.turn.active_player => {
                let moves = self.board.legal_moves(square).unwrap_or_default();
                #[cfg(feature = "logging")]
                log::debug!(
                    "{} selects {piece} on {square}, {} legal moves",
                    self.turn.active_player,
                    moves.len()
                );
                self.turn.selected = Some(square);
                self.turn.phase = GamePhase::AwaitingDestinationSelection;
                SelectOutcome {
                    highlight: Some(moves),
                    ..SelectOutcome::default()
                }
            }
            _ => {
                self.turn.selected = None;
                self.turn.phase = GamePhase::AwaitingPieceSelection;
                SelectOutcome::default()
            }
        }
    }

    fn perform_move(&mut self, from: Square, to: Square) -> Result<SelectOutcome, BoardError> {
        let piece = self
            .board
            .piece_at(from)?
            .ok_or(BoardError::EmptySelection { square: from })?;
        let mover = self.turn.active_player;
        let captured = self.board.move_piece(from, to)?;
        let promoted = self.board.promote_if_needed(to);

        let played = PlayedMove {
            mover,
            from,
            to,
            piece,
            captured,
            promoted,
        };
        #[cfg(feature = "logging")]
        log::debug!("{mover} plays {played}");
        self.history.push(played);

        self.turn.selected = None;
        let next = mover.opponent();
        let turn_end = self.board.end_of_turn(next);
        match turn_end {
            TurnEnd::GameOver(reason) => self.finish(reason),
            TurnEnd::Continue { .. } => {
                self.turn.active_player = next;
                self.turn.phase = GamePhase::AwaitingPieceSelection;
            }
        }

        Ok(SelectOutcome {
            played: Some(played),
            turn_end: Some(turn_end),
            ..SelectOutcome::default()
        })
    }

    fn finish(&mut self, reason: GameOverReason) {
        #[cfg(feature = "logging")]
        log::info!("Game over: {reason}");
        self.turn.selected = None;
        self.turn.phase = GamePhase::GameOver(reason);
    }

    /// Let the greedy selector move for the active player, going through
    /// the same selection path as human input.
    fn play_automated(&mut self) -> Option<AutomatedReply> {
        let choice = choose_move(&mut self.board, self.turn.active_player, &mut self.rng)?;
        self.handle_selection(choice.from).ok()?;
        let outcome = self.handle_selection(choice.to).ok()?;
        Some(AutomatedReply {
            played: outcome.played?,
            score: choice.score,
            turn_end: outcome.turn_end?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, Preset};

    fn human_game(preset: Preset) -> Game {
        Game::start(GameConfig::new(preset))
    }

    #[test]
    fn test_initial_state() {
        let game = human_game(Preset::Standard);
        assert_eq!(game.active_player(), Color::White);
        assert_eq!(game.phase(), GamePhase::AwaitingPieceSelection);
        assert_eq!(game.selected(), None);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_select_own_piece_highlights() {
        let mut game = human_game(Preset::Standard);
        let outcome = game.select(Square(6, 4)).unwrap();
        let highlight = outcome.highlight.unwrap();
        assert_eq!(highlight.len(), 2);
        assert_eq!(game.phase(), GamePhase::AwaitingDestinationSelection);
        assert_eq!(game.selected(), Some(Square(6, 4)));
    }

    #[test]
    fn test_select_enemy_or_empty_is_ignored() {
        let mut game = human_game(Preset::Standard);
        assert!(game.select(Square(1, 4)).unwrap().is_noop());
        assert!(game.select(Square(4, 4)).unwrap().is_noop());
        assert_eq!(game.phase(), GamePhase::AwaitingPieceSelection);
    }

    #[test]
    fn test_reselect_same_square_is_noop() {
        let mut game = human_game(Preset::Standard);
        game.select(Square(6, 4)).unwrap();
        let before = game.turn_state();
        assert!(game.select(Square(6, 4)).unwrap().is_noop());
        assert_eq!(game.turn_state(), before);
    }

    #[test]
    fn test_switch_selection_to_other_piece() {
        let mut game = human_game(Preset::Standard);
        game.select(Square(6, 4)).unwrap();
        let outcome = game.select(Square(7, 1)).unwrap();
        assert_eq!(outcome.highlight.map(|h| h.len()), Some(2));
        assert_eq!(game.selected(), Some(Square(7, 1)));
    }

    #[test]
    fn test_invalid_destination_clears_selection() {
        let mut game = human_game(Preset::Standard);
        game.select(Square(6, 4)).unwrap();
        let outcome = game.select(Square(3, 4)).unwrap();
        assert!(outcome.is_noop());
        assert_eq!(game.selected(), None);
        assert_eq!(game.phase(), GamePhase::AwaitingPieceSelection);
    }

    #[test]
    fn test_move_flips_turn() {
        let mut game = human_game(Preset::Standard);
        game.select(Square(6, 4)).unwrap();
        let outcome = game.select(Square(4, 4)).unwrap();
        assert!(outcome.move_was_made());
        assert_eq!(outcome.turn_end, Some(TurnEnd::Continue { in_check: false }));
        assert_eq!(game.active_player(), Color::Black);
        assert_eq!(game.selected(), None);
        assert_eq!(game.piece_at(Square(6, 4)), Ok(None));
        assert_eq!(
            game.piece_at(Square(4, 4)),
            Ok(Some(Piece::new(PieceKind::Pawn, Color::White)))
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_out_of_bounds_changes_nothing() {
        let mut game = human_game(Preset::Gardner);
        game.select(Square(3, 0)).unwrap();
        let before = game.turn_state();
        assert_eq!(
            game.select(Square(5, 0)),
            Err(BoardError::OutOfBounds {
                square: Square(5, 0),
                rows: 5,
                cols: 5
            })
        );
        assert_eq!(game.turn_state(), before);
    }

    #[test]
    fn test_automated_white_moves_first() {
        let game = Game::start(
            GameConfig::new(Preset::Standard)
                .automated(Color::White)
                .seed(3),
        );
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].mover, Color::White);
        assert_eq!(game.active_player(), Color::Black);
    }

    #[test]
    fn test_automated_reply_is_synchronous() {
        let mut game = start_game(Preset::Standard, true, Color::Black);
        game.select(Square(6, 4)).unwrap();
        let outcome = game.select(Square(4, 4)).unwrap();
        let reply = outcome.automated.expect("black should answer");
        assert_eq!(reply.played.mover, Color::Black);
        assert_eq!(game.active_player(), Color::White);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_start_in_stalemate() {
        // White king boxed in by a black queen without being attacked.
        let layout = Layout::custom("k1 . . / . . q2 / . . k2").unwrap();
        let game = Game::start(GameConfig::new(layout));
        assert_eq!(game.phase(), GamePhase::GameOver(GameOverReason::Stalemate));
    }
}
