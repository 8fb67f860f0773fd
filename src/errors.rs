//! Errors used throughout the rule engine.
//!
//! Two layers:
//! - `MoveRejection` is the validator's verdict on an illegal attempt. It is an
//!   ordinary, recoverable value; the session drops the attempt and carries on.
//! - `SessionError` is returned by session entry points when the caller broke a
//!   precondition (moving after the game ended, duplicate names) or when a
//!   snapshot cannot be turned into a game.
//!
//! Parsing helpers and internal bookkeeping return `Result<_, String>`.

use std::fmt;

/// Why the validator refused a proposed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The origin square is empty.
    NoPieceAtOrigin,

    /// The origin piece belongs to the player who is not on turn.
    NotYourPiece,

    /// The destination is outside the piece's movement shape.
    IllegalShape,

    /// A square strictly between origin and destination is occupied.
    BlockedPath,

    /// Pawn moved straight onto an occupied square, or diagonally onto a
    /// square without an opposing piece.
    IllegalPawnCapture,

    /// The destination holds one of the mover's own pieces.
    FriendlyDestination,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveRejection::NoPieceAtOrigin => "no piece at origin",
            MoveRejection::NotYourPiece => "piece belongs to the other player",
            MoveRejection::IllegalShape => "piece cannot move that way",
            MoveRejection::BlockedPath => "path is blocked",
            MoveRejection::IllegalPawnCapture => "pawn cannot capture like that",
            MoveRejection::FriendlyDestination => "destination holds a friendly piece",
        };
        f.write_str(text)
    }
}

/// Contract violations and unrecoverable session failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A move was submitted after a king had already been captured.
    GameAlreadyOver,

    /// Both players were given the same name; players compare by name.
    DuplicatePlayerNames(String),

    /// A snapshot could not be rebuilt into a board and registry.
    InvalidSnapshot(String),

    /// Board and registry disagreed while applying a validated move. Indicates a bug.
    CorruptedState(String),

    /// The engine failed to produce a proposal.
    EngineFailure(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::GameAlreadyOver => f.write_str("game is already over"),
            SessionError::DuplicatePlayerNames(name) => {
                write!(f, "both players are named '{name}'")
            }
            SessionError::InvalidSnapshot(reason) => write!(f, "invalid snapshot: {reason}"),
            SessionError::CorruptedState(reason) => write!(f, "corrupted game state: {reason}"),
            SessionError::EngineFailure(reason) => write!(f, "engine failure: {reason}"),
        }
    }
}

impl std::error::Error for SessionError {}
