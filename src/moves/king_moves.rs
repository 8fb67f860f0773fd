use crate::game_state::chess_types::Square;

/// One step in any direction. Distance zero also passes; the origin square
/// holds the mover's own piece, so validation rejects it later.
#[inline]
pub fn king_can_reach(from: Square, to: Square) -> bool {
    let (d_file, d_rank) = from.delta_to(to);
    d_file.abs() <= 1 && d_rank.abs() <= 1
}
