//! Occupancy-aware checks layered on top of piece geometry.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// Step direction `(signum d_file, signum d_rank)` from `from` toward `to`.
#[inline]
pub fn ray_step(from: Square, to: Square) -> (i8, i8) {
    let (d_file, d_rank) = from.delta_to(to);
    (d_file.signum(), d_rank.signum())
}

/// Squares strictly between `from` and `to`, walking one ray step at a time.
///
/// Only meaningful for straight or diagonal pairs; for any other pair the walk
/// stops at the board edge.
pub fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let (file_step, rank_step) = ray_step(from, to);
    let mut out = Vec::new();
    if from == to {
        return out;
    }

    let mut current = from.offset(file_step, rank_step);
    while let Some(square) = current {
        if square == to {
            break;
        }
        out.push(square);
        current = square.offset(file_step, rank_step);
    }
    out
}

/// True when every square strictly between origin and destination is empty.
#[inline]
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    squares_between(from, to)
        .into_iter()
        .all(|square| board.is_empty(square))
}

/// Pawn occupancy rule: straight moves need an empty destination, diagonal
/// moves need an opposing piece on the destination.
pub fn is_pawn_destination_allowed(
    board: &Board,
    from: Square,
    to: Square,
    mover: Color,
) -> bool {
    let target = board.at(to);
    if from.file() == to.file() {
        target.is_none()
    } else {
        matches!(target, Some(piece) if piece.color != mover)
    }
}
