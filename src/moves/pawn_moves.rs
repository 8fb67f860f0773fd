use crate::game_state::chess_rules::PawnDirection;
use crate::game_state::chess_types::Square;

/// Pawn geometry, ignoring occupancy.
///
/// - one rank forward on the same file, always;
/// - two ranks forward on the same file while `has_moved` is false;
/// - one rank forward and one file sideways (capture shape; the validator
///   decides whether a capture is actually available).
#[inline]
pub fn pawn_can_reach(from: Square, to: Square, direction: PawnDirection, has_moved: bool) -> bool {
    let (d_file, d_rank) = from.delta_to(to);
    let step = direction.rank_step();

    if d_file == 0 && !has_moved && d_rank == 2 * step {
        return true;
    }

    d_file.abs() <= 1 && d_rank == step
}
