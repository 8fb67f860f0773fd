//! Apply a validated move to a `GameState` in place.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// Remove any captured piece, relocate the mover (setting a pawn's marker),
/// and pass the turn. A king capture ends the game, so the turn stays with the
/// winner.
///
/// Returns the kind of piece captured, if any. The move must come from
/// `validate_move` against this same state; a stale move is reported as an
/// error and may leave the state partially updated.
pub fn apply_move(game_state: &mut GameState, mv: &ChessMove) -> Result<Option<PieceKind>, String> {
    let mover = game_state
        .piece_at(mv.from)
        .ok_or_else(|| format!("No piece on from-square {}", mv.from))?;
    if mover.id != mv.piece {
        return Err(format!("Piece on {} does not match the move", mv.from));
    }
    let moving_color = mover.color;

    let captured = match mv.captured {
        Some(expected) => {
            let removed = game_state.remove_piece_at(mv.to)?;
            if removed.id != expected.id {
                return Err(format!("Captured piece on {} does not match the move", mv.to));
            }
            Some(removed.kind)
        }
        None => None,
    };

    game_state.relocate_piece(mv.from, mv.to)?;

    if captured != Some(PieceKind::King) {
        game_state.set_turn(moving_color.opposite());
    }

    Ok(captured)
}
