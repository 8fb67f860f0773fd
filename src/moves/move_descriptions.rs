//! Transient description of a validated move.
//!
//! Built fresh by the validator for every attempt and consumed by the session,
//! the move applier and the engine. Never persisted.

use std::fmt;

use crate::game_state::chess_types::{PieceId, PieceKind, Square};

/// The opposing piece a move removes from play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturedPiece {
    pub id: PieceId,
    pub kind: PieceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub piece: PieceId,
    pub moved_kind: PieceKind,
    pub captured: Option<CapturedPiece>,
}

impl ChessMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn captures_king(&self) -> bool {
        matches!(
            self.captured,
            Some(CapturedPiece {
                kind: PieceKind::King,
                ..
            })
        )
    }

    #[inline]
    pub fn captured_kind(&self) -> Option<PieceKind> {
        self.captured.map(|c| c.kind)
    }
}

/// Long algebraic form, e.g. `e2e4`.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
