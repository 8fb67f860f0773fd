use crate::game_state::chess_types::Square;

/// `(|d_file|, |d_rank|)` is `(1, 2)` or `(2, 1)`.
#[inline]
pub fn knight_can_reach(from: Square, to: Square) -> bool {
    let (d_file, d_rank) = from.delta_to(to);
    matches!((d_file.abs(), d_rank.abs()), (1, 2) | (2, 1))
}
