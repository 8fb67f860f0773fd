//! Engine abstraction used by the session and the terminal front-end.
//!
//! An engine only proposes a move; the caller feeds it through the same
//! `apply_move` path a human move takes.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    /// Propose a move for `color` without touching `game_state`.
    /// `best_move` is `None` when `color` has no legal move.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        color: Color,
    ) -> Result<EngineOutput, String>;
}
