use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// Produces every move the validator accepts for one side.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState, color: Color) -> Vec<ChessMove>;
}
