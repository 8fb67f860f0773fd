use crate::game_state::chess_types::Square;

/// Same file or same rank.
#[inline]
pub fn rook_can_reach(from: Square, to: Square) -> bool {
    from.file() == to.file() || from.rank() == to.rank()
}
