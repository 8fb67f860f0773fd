//! Full legal move enumeration.
//!
//! Probes every square for every live piece of one player through the
//! validator. Bounded by 64 probes per piece; results are sorted by origin then
//! destination so callers see a stable order regardless of registry layout.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_validator::validate_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::ChessMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState, color: Color) -> Vec<ChessMove> {
        generate_legal_moves(game_state, color)
    }
}

pub fn generate_legal_moves(game_state: &GameState, color: Color) -> Vec<ChessMove> {
    let mut origins: Vec<Square> = game_state
        .player(color)
        .pieces()
        .map(|piece| piece.position)
        .collect();
    origins.sort();

    let mut legal = Vec::<ChessMove>::with_capacity(64);
    for from in origins {
        for to in Square::all() {
            if let Ok(mv) = validate_move(game_state, from, to, color) {
                legal.push(mv);
            }
        }
    }
    legal.sort_by_key(|mv| (mv.from, mv.to));
    legal
}
