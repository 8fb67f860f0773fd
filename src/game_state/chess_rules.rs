//! Canonical chess-rule constants.
//!
//! Starting layout, board dimensions and the pawn direction rule live here so
//! setup, loading and validation agree on a single definition.

pub const BOARD_SIZE: u8 = 8;

/// Standard starting layout in FEN board-field form, plus White to move.
pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

pub const WHITE_PAWN_RANK: u8 = 1;
pub const BLACK_PAWN_RANK: u8 = 6;

/// Pawns created on a rank below this move toward increasing rank.
pub const PAWN_DIRECTION_SPLIT_RANK: u8 = 5;

/// Fixed forward direction of a pawn, chosen once from the rank it is created on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnDirection {
    /// Toward increasing rank.
    Down,
    /// Toward decreasing rank.
    Up,
}

impl PawnDirection {
    #[inline]
    pub fn from_creation_rank(rank: u8) -> Self {
        if rank < PAWN_DIRECTION_SPLIT_RANK {
            PawnDirection::Down
        } else {
            PawnDirection::Up
        }
    }

    #[inline]
    pub const fn rank_step(self) -> i8 {
        match self {
            PawnDirection::Down => 1,
            PawnDirection::Up => -1,
        }
    }

    /// Rank-based "has moved" inference: the pawn stands past its home rank.
    #[inline]
    pub const fn is_past_home_rank(self, rank: u8) -> bool {
        match self {
            PawnDirection::Down => rank >= 2,
            PawnDirection::Up => rank <= 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_creation_rank() {
        assert_eq!(PawnDirection::from_creation_rank(WHITE_PAWN_RANK), PawnDirection::Down);
        assert_eq!(PawnDirection::from_creation_rank(4), PawnDirection::Down);
        assert_eq!(PawnDirection::from_creation_rank(5), PawnDirection::Up);
        assert_eq!(PawnDirection::from_creation_rank(BLACK_PAWN_RANK), PawnDirection::Up);
    }

    #[test]
    fn home_rank_inference() {
        assert!(!PawnDirection::Down.is_past_home_rank(1));
        assert!(PawnDirection::Down.is_past_home_rank(2));
        assert!(!PawnDirection::Up.is_past_home_rank(6));
        assert!(PawnDirection::Up.is_past_home_rank(5));
    }
}
