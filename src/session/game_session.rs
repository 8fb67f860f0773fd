//! Turn state machine.
//!
//! A `GameSession` owns one `GameState` and walks it through
//! `AwaitingOrigin -> AwaitingDestination -> AwaitingOrigin ...` until a king
//! is captured, at which point it sits in `GameOver` for good. Illegal attempts
//! are dropped without touching the state. Calls must be serialized; there is
//! no internal locking.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{MoveRejection, SessionError};
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::snapshot::Snapshot;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_validator::validate_move;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingOrigin,
    AwaitingDestination(Square),
    GameOver { winner: Color },
}

/// Result of one `apply_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(ChessMove),
    Rejected(MoveRejection),
    GameOver { winner: Color, winning_move: ChessMove },
}

/// Result of one `select` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    OriginSelected(Square),
    MoveAttempted(MoveOutcome),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    phase: SessionPhase,
}

impl GameSession {
    /// Standard layout; `white_name` plays White and moves first.
    pub fn new_game(white_name: &str, black_name: &str) -> Result<Self, SessionError> {
        if white_name == black_name {
            return Err(SessionError::DuplicatePlayerNames(white_name.to_owned()));
        }
        let state =
            GameState::new_game(white_name, black_name).map_err(SessionError::CorruptedState)?;
        Ok(Self::from_state(state))
    }

    /// Rebuild a session with its own fresh board and registry. Pawn state is
    /// inferred from position, so history is not restored.
    pub fn load_game(snapshot: &Snapshot) -> Result<Self, SessionError> {
        if snapshot.white_name == snapshot.black_name {
            return Err(SessionError::DuplicatePlayerNames(
                snapshot.white_name.clone(),
            ));
        }
        let state = GameState::from_snapshot(snapshot).map_err(SessionError::InvalidSnapshot)?;
        Ok(Self::from_state(state))
    }

    fn from_state(state: GameState) -> Self {
        Self {
            state,
            phase: SessionPhase::AwaitingOrigin,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn turn(&self) -> Color {
        self.state.turn()
    }

    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            SessionPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// First call remembers an origin (any square, even empty); the second
    /// attempts the move from it.
    pub fn select(&mut self, square: Square) -> Result<SelectOutcome, SessionError> {
        match self.phase {
            SessionPhase::GameOver { .. } => Err(SessionError::GameAlreadyOver),
            SessionPhase::AwaitingOrigin => {
                self.phase = SessionPhase::AwaitingDestination(square);
                Ok(SelectOutcome::OriginSelected(square))
            }
            SessionPhase::AwaitingDestination(origin) => {
                let outcome = self.apply_move(origin, square)?;
                Ok(SelectOutcome::MoveAttempted(outcome))
            }
        }
    }

    /// Validate and apply one move for the side to move.
    ///
    /// Calling this after the game ended is a contract violation and returns
    /// `SessionError::GameAlreadyOver`.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, SessionError> {
        if let SessionPhase::GameOver { .. } = self.phase {
            return Err(SessionError::GameAlreadyOver);
        }
        self.phase = SessionPhase::AwaitingOrigin;

        let mover = self.state.turn();
        let mv = match validate_move(&self.state, from, to, mover) {
            Ok(mv) => mv,
            Err(rejection) => return Ok(MoveOutcome::Rejected(rejection)),
        };

        apply_move(&mut self.state, &mv).map_err(SessionError::CorruptedState)?;

        if mv.captures_king() {
            self.phase = SessionPhase::GameOver { winner: mover };
            return Ok(MoveOutcome::GameOver {
                winner: mover,
                winning_move: mv,
            });
        }
        Ok(MoveOutcome::Moved(mv))
    }

    /// Ask `engine` for a move for `color` without changing anything.
    pub fn select_move(
        &self,
        engine: &mut dyn Engine,
        color: Color,
    ) -> Result<EngineOutput, SessionError> {
        engine
            .choose_move(&self.state, color)
            .map_err(SessionError::EngineFailure)
    }

    /// Let `engine` move for the side to move, through `apply_move`.
    /// `Ok(None)` means the side to move has no legal move; nothing changes.
    pub fn play_engine_move(
        &mut self,
        engine: &mut dyn Engine,
    ) -> Result<Option<(MoveOutcome, EngineOutput)>, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameAlreadyOver);
        }
        let output = self.select_move(engine, self.turn())?;
        let Some(mv) = output.best_move else {
            return Ok(None);
        };
        let outcome = self.apply_move(mv.from, mv.to)?;
        Ok(Some((outcome, output)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::game_state::chess_types::PieceKind;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn session(position: &str) -> GameSession {
        let snapshot = Snapshot::from_position(position, "ada", "bob")
            .expect("test position should parse");
        GameSession::load_game(&snapshot).expect("test position should load")
    }

    #[test]
    fn new_game_starts_with_white() {
        let game = GameSession::new_game("ada", "bob").expect("new game should build");
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.phase(), SessionPhase::AwaitingOrigin);
        assert_eq!(game.state().player(Color::White).name(), "ada");
        assert_eq!(game.state().player(Color::Black).name(), "bob");
    }

    #[test]
    fn duplicate_names_are_refused() {
        assert_eq!(
            GameSession::new_game("ada", "ada").err(),
            Some(SessionError::DuplicatePlayerNames("ada".to_owned()))
        );
    }

    #[test]
    fn colors_do_not_leak_between_sessions() {
        let first = GameSession::new_game("ada", "bob").expect("first game should build");
        let second = GameSession::new_game("cy", "dee").expect("second game should build");
        assert_eq!(first.state().player(Color::White).name(), "ada");
        assert_eq!(second.state().player(Color::White).name(), "cy");
        assert_eq!(second.turn(), Color::White);
    }

    #[test]
    fn opening_sequence() {
        let mut game = GameSession::new_game("ada", "bob").expect("new game should build");

        let outcome = game.apply_move(sq("e2"), sq("e4")).expect("session is live");
        assert!(matches!(outcome, MoveOutcome::Moved(_)));
        assert_eq!(game.turn(), Color::Black);

        let outcome = game.apply_move(sq("a7"), sq("b5")).expect("session is live");
        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::IllegalShape));
        assert_eq!(game.turn(), Color::Black);

        let outcome = game.apply_move(sq("a7"), sq("a5")).expect("session is live");
        assert!(matches!(outcome, MoveOutcome::Moved(_)));
        assert_eq!(game.turn(), Color::White);

        let outcome = game.apply_move(sq("e4"), sq("e5")).expect("session is live");
        assert!(matches!(outcome, MoveOutcome::Moved(_)));
        assert_eq!(game.turn(), Color::Black);
        game.state().check_consistency().expect("state stays consistent");
    }

    #[test]
    fn rejected_moves_leave_everything_unchanged() {
        let mut game = GameSession::new_game("ada", "bob").expect("new game should build");
        let before = game.snapshot();

        for (from, to) in [("e7", "e5"), ("a1", "a3"), ("e1", "e2"), ("d4", "d5")] {
            let outcome = game.apply_move(sq(from), sq(to)).expect("session is live");
            assert!(matches!(outcome, MoveOutcome::Rejected(_)), "{from}{to}");
            assert_eq!(game.turn(), Color::White);
            assert_eq!(game.phase(), SessionPhase::AwaitingOrigin);
        }
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn select_two_step_flow() {
        let mut game = GameSession::new_game("ada", "bob").expect("new game should build");

        // Empty squares can be selected as origin.
        let first = game.select(sq("e4")).expect("session is live");
        assert_eq!(first, SelectOutcome::OriginSelected(sq("e4")));
        assert_eq!(game.phase(), SessionPhase::AwaitingDestination(sq("e4")));

        let second = game.select(sq("e5")).expect("session is live");
        assert_eq!(
            second,
            SelectOutcome::MoveAttempted(MoveOutcome::Rejected(MoveRejection::NoPieceAtOrigin))
        );
        assert_eq!(game.phase(), SessionPhase::AwaitingOrigin);

        game.select(sq("g1")).expect("session is live");
        let moved = game.select(sq("f3")).expect("session is live");
        assert!(matches!(moved, SelectOutcome::MoveAttempted(MoveOutcome::Moved(_))));
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn king_capture_ends_the_game() {
        let mut game = session("4k3/8/8/8/8/8/8/R3K3 w");
        game.apply_move(sq("a1"), sq("a8")).expect("session is live");
        let outcome = game.apply_move(sq("e8"), sq("d8")).expect("session is live");
        assert!(matches!(outcome, MoveOutcome::Moved(_)));

        // Rook on a8 now shares the rank with the king on d8.
        let outcome = game.apply_move(sq("a8"), sq("d8")).expect("session is live");
        match outcome {
            MoveOutcome::GameOver {
                winner,
                winning_move,
            } => {
                assert_eq!(winner, Color::White);
                assert_eq!(winning_move.captured_kind(), Some(PieceKind::King));
            }
            other => panic!("expected game over, got {other:?}"),
        }
        assert_eq!(game.winner(), Some(Color::White));
        assert!(!game.state().player(Color::Black).has_king());
        assert_eq!(game.state().player(Color::Black).piece_count(), 0);

        assert_eq!(
            game.apply_move(sq("d8"), sq("d7")),
            Err(SessionError::GameAlreadyOver)
        );
        assert_eq!(game.select(sq("d8")), Err(SessionError::GameAlreadyOver));
    }

    #[test]
    fn rook_takes_undefended_king_on_open_file() {
        let mut game = session("4k3/8/8/8/8/8/8/3K1R2 w");
        game.apply_move(sq("f1"), sq("e1")).expect("session is live");
        game.apply_move(sq("e8"), sq("f8")).expect("session is live");
        game.apply_move(sq("e1"), sq("e7")).expect("session is live");
        game.apply_move(sq("f8"), sq("e8")).expect("session is live");
        let outcome = game.apply_move(sq("e7"), sq("e8")).expect("session is live");
        assert!(matches!(
            outcome,
            MoveOutcome::GameOver {
                winner: Color::White,
                ..
            }
        ));
    }

    #[test]
    fn reload_keeps_occupancy_and_turn_but_not_pawn_history() {
        let mut game = GameSession::new_game("ada", "bob").expect("new game should build");
        game.apply_move(sq("e2"), sq("e3")).expect("session is live");
        game.apply_move(sq("d7"), sq("d5")).expect("session is live");

        let snapshot = game.snapshot();
        let reloaded = GameSession::load_game(&snapshot).expect("snapshot should reload");
        assert_eq!(reloaded.snapshot(), snapshot);
        assert_eq!(reloaded.turn(), Color::White);
        assert_eq!(reloaded.phase(), SessionPhase::AwaitingOrigin);

        // Moved pawns stay moved because their rank says so.
        let mut reloaded = reloaded;
        let outcome = reloaded
            .apply_move(sq("e3"), sq("e5"))
            .expect("session is live");
        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::IllegalShape));
    }

    #[test]
    fn reloaded_pawn_on_home_rank_may_double_step() {
        // A white pawn standing on its home rank is treated as unmoved, whatever
        // its history.
        let mut game = session("4k3/8/8/8/8/8/4P3/4K3 w");
        let outcome = game.apply_move(sq("e2"), sq("e4")).expect("session is live");
        assert!(matches!(outcome, MoveOutcome::Moved(_)));
    }

    #[test]
    fn engine_moves_go_through_apply_move() {
        let mut game = session("4k3/8/8/8/8/8/8/4R1K1 w");
        let mut engine = GreedyEngine::with_seed(3);

        let proposal = game
            .select_move(&mut engine, Color::White)
            .expect("engine should not fail");
        assert_eq!(
            proposal.best_move.map(|mv| mv.to_string()),
            Some("e1e8".to_owned())
        );
        assert_eq!(game.turn(), Color::White);

        let (outcome, _) = game
            .play_engine_move(&mut engine)
            .expect("engine should not fail")
            .expect("a legal move exists");
        assert!(matches!(outcome, MoveOutcome::GameOver { .. }));
        assert!(game.play_engine_move(&mut engine).is_err());
    }

    #[test]
    fn engine_without_moves_changes_nothing() {
        let mut game = session("4k3/8/8/8/8/4p3/4P3/8 w");
        let before = game.snapshot();
        let mut engine = GreedyEngine::new();
        let result = game
            .play_engine_move(&mut engine)
            .expect("engine should not fail");
        assert!(result.is_none());
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn engine_versus_engine_terminates_or_runs_out_of_moves() {
        let mut game = GameSession::new_game("ada", "bob").expect("new game should build");
        let mut white = GreedyEngine::with_seed(1);
        let mut black = GreedyEngine::with_seed(2);

        for _ in 0..400 {
            if game.is_over() {
                break;
            }
            let engine: &mut dyn Engine = match game.turn() {
                Color::White => &mut white,
                Color::Black => &mut black,
            };
            let played = game.play_engine_move(engine).expect("engine should not fail");
            if played.is_none() {
                break;
            }
            game.state().check_consistency().expect("state stays consistent");
        }
    }
}
