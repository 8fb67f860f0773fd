//! Move legality for a single proposed `(from, to)`.
//!
//! Checks run in a fixed order and the first failure wins:
//! origin occupied, ownership, shape, path clearance (skipped for knights),
//! the pawn occupancy rule, and finally friendly-destination. Nothing here
//! mutates state, so the engine can probe every square freely.

use crate::errors::MoveRejection;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{is_path_clear, is_pawn_destination_allowed};
use crate::moves::move_descriptions::{CapturedPiece, ChessMove};

pub fn validate_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    acting: Color,
) -> Result<ChessMove, MoveRejection> {
    let piece = game_state
        .piece_at(from)
        .ok_or(MoveRejection::NoPieceAtOrigin)?;

    if piece.color != acting {
        return Err(MoveRejection::NotYourPiece);
    }

    if !piece.can_reach(to) {
        return Err(MoveRejection::IllegalShape);
    }

    // Knights jump.
    if piece.kind != PieceKind::Knight && !is_path_clear(game_state.board(), from, to) {
        return Err(MoveRejection::BlockedPath);
    }

    if piece.kind == PieceKind::Pawn
        && !is_pawn_destination_allowed(game_state.board(), from, to, acting)
    {
        return Err(MoveRejection::IllegalPawnCapture);
    }

    let captured = match game_state.piece_at(to) {
        Some(target) if target.color == acting => {
            return Err(MoveRejection::FriendlyDestination);
        }
        Some(target) => Some(CapturedPiece {
            id: target.id,
            kind: target.kind,
        }),
        None => None,
    };

    Ok(ChessMove {
        from,
        to,
        piece: piece.id,
        moved_kind: piece.kind,
        captured,
    })
}
