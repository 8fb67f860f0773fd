//! Capture-priority engine.
//!
//! Scores every legal move by what stands on its destination (empty 1, pawn 2,
//! bishop/knight 3, rook 4, queen 5, king 6) and picks uniformly at random
//! among the moves tied for the best score. No lookahead, no positional terms.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::ChessMove;

pub const QUIET_MOVE_SCORE: u8 = 1;

pub struct GreedyEngine {
    move_generator: LegalMoveGenerator,
    seeded_rng: Option<StdRng>,
}

impl GreedyEngine {
    /// Tie-breaks draw from the thread RNG.
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            seeded_rng: None,
        }
    }

    /// Reproducible tie-breaks.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            seeded_rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    #[inline]
    pub fn capture_score(captured: Option<PieceKind>) -> u8 {
        match captured {
            None => QUIET_MOVE_SCORE,
            Some(PieceKind::Pawn) => 2,
            Some(PieceKind::Bishop) | Some(PieceKind::Knight) => 3,
            Some(PieceKind::Rook) => 4,
            Some(PieceKind::Queen) => 5,
            Some(PieceKind::King) => 6,
        }
    }

    /// Every legal move tied for the highest score, with that score.
    pub fn best_moves(&self, game_state: &GameState, color: Color) -> (u8, Vec<ChessMove>) {
        let legal_moves = self.move_generator.generate_legal_moves(game_state, color);

        let mut best_score = 0u8;
        let mut best_moves = Vec::new();
        for mv in legal_moves {
            let score = Self::capture_score(mv.captured_kind());
            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best_score {
                best_moves.push(mv);
            }
        }
        (best_score, best_moves)
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Hotseat Greedy"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("Seed") {
            if value.eq_ignore_ascii_case("random") {
                self.seeded_rng = None;
            } else {
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid Seed value '{value}'"))?;
                self.seeded_rng = Some(StdRng::seed_from_u64(seed));
            }
        }
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        color: Color,
    ) -> Result<EngineOutput, String> {
        let (best_score, best_moves) = self.best_moves(game_state, color);

        let mut out = EngineOutput::default();
        if best_moves.is_empty() {
            out.info_lines
                .push("info string greedy_engine legal_moves 0".to_owned());
            return Ok(out);
        }

        out.info_lines.push(format!(
            "info string greedy_engine best_score {} tied_moves {}",
            best_score,
            best_moves.len()
        ));

        let picked = match self.seeded_rng.as_mut() {
            Some(rng) => best_moves.as_slice().choose(rng),
            None => best_moves.as_slice().choose(&mut rand::rng()),
        }
        .ok_or("failed to choose greedy best move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}
