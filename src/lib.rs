//! Crate root module declarations for the hotseat chess project.
//!
//! This file exposes the rule engine subsystems (game state, movement shapes,
//! move validation, the turn state machine, engines, the terminal front-end,
//! and utility helpers) so the binary, tests, and benches share module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece;
    pub mod player;
    pub mod snapshot;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_validator;
    pub mod move_generator;
}

pub mod session {
    pub mod game_session;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_trait;
}

pub mod cli {
    pub mod cli_top;
    pub mod play_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
    pub mod snapshot_text;
}
