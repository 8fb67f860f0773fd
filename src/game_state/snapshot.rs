//! Externally serializable view of a game.
//!
//! A snapshot records occupancy as `(color, kind)` per cell, both player names
//! and the side to move. Piece identities and pawn markers are not stored, so
//! reloading re-infers pawn state from position alone.

use crate::game_state::chess_rules::STARTING_POSITION;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::utils::snapshot_text::parse_position_line;

pub type CellContents = Option<(Color, PieceKind)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    // [file][rank]
    cells: [[CellContents; 8]; 8],
    pub white_name: String,
    pub black_name: String,
    pub turn: Color,
}

impl Snapshot {
    pub fn new_empty(white_name: impl Into<String>, black_name: impl Into<String>) -> Self {
        Self {
            cells: [[None; 8]; 8],
            white_name: white_name.into(),
            black_name: black_name.into(),
            turn: Color::White,
        }
    }

    /// Standard starting layout with White to move.
    pub fn starting(
        white_name: impl Into<String>,
        black_name: impl Into<String>,
    ) -> Result<Self, String> {
        Self::from_position(STARTING_POSITION, white_name, black_name)
    }

    /// Build from a `<board-field> <w|b>` line.
    pub fn from_position(
        position: &str,
        white_name: impl Into<String>,
        black_name: impl Into<String>,
    ) -> Result<Self, String> {
        let mut snapshot = Self::new_empty(white_name, black_name);
        let (cells, turn) = parse_position_line(position)?;
        snapshot.cells = cells;
        snapshot.turn = turn;
        Ok(snapshot)
    }

    #[inline]
    pub fn cell(&self, square: Square) -> CellContents {
        self.cells[square.file() as usize][square.rank() as usize]
    }

    #[inline]
    pub fn set_cell(&mut self, square: Square, contents: CellContents) {
        self.cells[square.file() as usize][square.rank() as usize] = contents;
    }

    pub fn name_of(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white_name,
            Color::Black => &self.black_name,
        }
    }
}
