//! A single logical chess piece.
//!
//! The owning `Player` holds the only copy; the board refers to it through a
//! `PieceRef`. Movement geometry is dispatched by kind to the `moves` module.

use crate::game_state::chess_rules::PawnDirection;
use crate::game_state::chess_types::{Color, PieceId, PieceKind, PieceRef, Square};
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};

/// Pawn-only state: the creation-time direction and the "moved" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PawnState {
    pub direction: PawnDirection,
    pub moved: bool,
}

impl PawnState {
    /// Marker OR rank-based inference from the current position.
    #[inline]
    pub fn has_moved(&self, position: Square) -> bool {
        self.moved || self.direction.is_past_home_rank(position.rank())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub position: Square,
    pub pawn: Option<PawnState>,
}

impl Piece {
    /// Create a piece at `position`. Pawns take their direction from this rank.
    pub fn new(id: PieceId, kind: PieceKind, color: Color, position: Square) -> Self {
        let pawn = (kind == PieceKind::Pawn).then(|| PawnState {
            direction: PawnDirection::from_creation_rank(position.rank()),
            moved: false,
        });
        Self {
            id,
            kind,
            color,
            position,
            pawn,
        }
    }

    /// Geometry only: whether `to` matches this piece's movement shape.
    pub fn can_reach(&self, to: Square) -> bool {
        let from = self.position;
        match self.kind {
            PieceKind::Pawn => match self.pawn {
                Some(pawn) => {
                    pawn_moves::pawn_can_reach(from, to, pawn.direction, pawn.has_moved(from))
                }
                None => false,
            },
            PieceKind::Knight => knight_moves::knight_can_reach(from, to),
            PieceKind::Bishop => bishop_moves::bishop_can_reach(from, to),
            PieceKind::Rook => rook_moves::rook_can_reach(from, to),
            PieceKind::Queen => queen_moves::queen_can_reach(from, to),
            PieceKind::King => king_moves::king_can_reach(from, to),
        }
    }

    /// Record that this piece now stands on `to`.
    pub fn relocate(&mut self, to: Square) {
        self.position = to;
        if let Some(pawn) = self.pawn.as_mut() {
            pawn.moved = true;
        }
    }

    #[inline]
    pub fn piece_ref(&self) -> PieceRef {
        PieceRef {
            color: self.color,
            id: self.id,
        }
    }
}
