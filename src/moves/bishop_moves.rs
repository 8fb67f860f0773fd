use crate::game_state::chess_types::Square;

/// Equal absolute file and rank distance.
#[inline]
pub fn bishop_can_reach(from: Square, to: Square) -> bool {
    let (d_file, d_rank) = from.delta_to(to);
    d_file.abs() == d_rank.abs()
}
