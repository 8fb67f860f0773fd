//! 8x8 occupancy grid.
//!
//! Cells hold non-owning `PieceRef`s; the pieces themselves live in the
//! player registry. `GameState` keeps the two in sync.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{PieceRef, Square};

const N: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    // [file][rank]
    cells: [[Option<PieceRef>; N]; N],
}

impl Board {
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn at(&self, square: Square) -> Option<PieceRef> {
        self.cells[square.file() as usize][square.rank() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.at(square).is_none()
    }

    /// Place a reference on an empty cell.
    pub fn place(&mut self, square: Square, piece: PieceRef) -> Result<(), String> {
        let cell = &mut self.cells[square.file() as usize][square.rank() as usize];
        if cell.is_some() {
            return Err(format!("Square {square} is already occupied"));
        }
        *cell = Some(piece);
        Ok(())
    }

    /// Empty a cell, returning what was there.
    pub fn take(&mut self, square: Square) -> Option<PieceRef> {
        self.cells[square.file() as usize][square.rank() as usize].take()
    }

    /// Occupied cells in rank-major order from a1.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceRef)> + '_ {
        Square::all().filter_map(move |sq| self.at(sq).map(|piece| (sq, piece)))
    }
}
