//! Player registry entry: name, color and the live pieces the player controls.

use std::collections::HashMap;

use crate::game_state::chess_types::{Color, PieceId, PieceKind};
use crate::game_state::piece::Piece;

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    color: Color,
    pieces: HashMap<PieceId, Piece>,
}

impl Player {
    /// Color is always passed in explicitly; nothing is remembered between players.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            pieces: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(&id)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn has_king(&self) -> bool {
        self.pieces.values().any(|p| p.kind == PieceKind::King)
    }

    pub(crate) fn add_piece(&mut self, piece: Piece) -> Result<(), String> {
        if piece.color != self.color {
            return Err(format!(
                "{} piece cannot join the {} registry",
                piece.color.name(),
                self.color.name()
            ));
        }
        if self.pieces.contains_key(&piece.id) {
            return Err(format!("Duplicate piece id {:?}", piece.id));
        }
        self.pieces.insert(piece.id, piece);
        Ok(())
    }

    pub(crate) fn remove_piece(&mut self, id: PieceId) -> Option<Piece> {
        self.pieces.remove(&id)
    }
}

/// Players compare equal by name only.
impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}
