//! Board plus player registry plus side to move.
//!
//! `GameState` is the single owner of every piece. The board holds `PieceRef`s
//! into the players' collections, and all mutation goes through helpers here
//! that update both sides together, so a cell and its piece never disagree.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::game_state::player::Player;
use crate::game_state::snapshot::Snapshot;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    turn: Color,
    next_piece_id: u8,
}

impl GameState {
    /// Empty board, White to move.
    pub fn new_empty(white_name: impl Into<String>, black_name: impl Into<String>) -> Self {
        Self {
            board: Board::new_empty(),
            players: [
                Player::new(white_name, Color::White),
                Player::new(black_name, Color::Black),
            ],
            turn: Color::White,
            next_piece_id: 0,
        }
    }

    /// Standard starting layout; the first name plays White and moves first.
    pub fn new_game(white_name: &str, black_name: &str) -> Result<Self, String> {
        Self::from_snapshot(&Snapshot::starting(white_name, black_name)?)
    }

    /// Build from a `<board-field> <w|b>` line, FEN style.
    pub fn from_position(
        position: &str,
        white_name: &str,
        black_name: &str,
    ) -> Result<Self, String> {
        Self::from_snapshot(&Snapshot::from_position(position, white_name, black_name)?)
    }

    /// Fresh board and registry rebuilt from occupancy alone.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, String> {
        let mut state = Self::new_empty(snapshot.white_name.clone(), snapshot.black_name.clone());
        for square in Square::all() {
            if let Some((color, kind)) = snapshot.cell(square) {
                state.add_piece(kind, color, square)?;
            }
        }
        state.turn = snapshot.turn;
        Ok(state)
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::new_empty(
            self.player(Color::White).name(),
            self.player(Color::Black).name(),
        );
        for square in Square::all() {
            let contents = self.piece_at(square).map(|p| (p.color, p.kind));
            snapshot.set_cell(square, contents);
        }
        snapshot.turn = self.turn;
        snapshot
    }

    /// Create a piece on an empty square and register it with its owner.
    pub fn add_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square,
    ) -> Result<PieceId, String> {
        let id = PieceId(self.next_piece_id);
        self.next_piece_id = self
            .next_piece_id
            .checked_add(1)
            .ok_or("Piece id space exhausted")?;

        let piece = Piece::new(id, kind, color, square);
        self.board.place(square, piece.piece_ref())?;
        self.players[color.index()].add_piece(piece)?;
        Ok(id)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.turn)
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        let piece_ref = self.board.at(square)?;
        self.players[piece_ref.color.index()].piece(piece_ref.id)
    }

    pub(crate) fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Remove the piece on `square` from the board and from its owner's registry.
    pub(crate) fn remove_piece_at(&mut self, square: Square) -> Result<Piece, String> {
        let piece_ref = self
            .board
            .take(square)
            .ok_or_else(|| format!("Cannot remove from empty square {square}"))?;
        self.players[piece_ref.color.index()]
            .remove_piece(piece_ref.id)
            .ok_or_else(|| format!("Square {square} referenced an unregistered piece"))
    }

    /// Move the piece on `from` to the empty square `to`, updating its stored position.
    pub(crate) fn relocate_piece(&mut self, from: Square, to: Square) -> Result<(), String> {
        if !self.board.is_empty(to) {
            return Err(format!("Destination {to} is still occupied"));
        }
        let piece_ref = self
            .board
            .take(from)
            .ok_or_else(|| format!("No piece on from-square {from}"))?;
        self.board.place(to, piece_ref)?;
        self.players[piece_ref.color.index()]
            .piece_mut(piece_ref.id)
            .ok_or_else(|| format!("Square {from} referenced an unregistered piece"))?
            .relocate(to);
        Ok(())
    }

    /// Check that every board cell and every registered piece agree.
    pub fn check_consistency(&self) -> Result<(), String> {
        let mut on_board = 0usize;
        for (square, piece_ref) in self.board.occupied() {
            let piece = self.players[piece_ref.color.index()]
                .piece(piece_ref.id)
                .ok_or_else(|| format!("Dangling reference on {square}"))?;
            if piece.position != square {
                return Err(format!(
                    "Piece on {square} believes it stands on {}",
                    piece.position
                ));
            }
            on_board += 1;
        }

        let registered: usize = self.players.iter().map(Player::piece_count).sum();
        if registered != on_board {
            return Err(format!(
                "{registered} registered pieces but {on_board} occupied squares"
            ));
        }
        Ok(())
    }
}
