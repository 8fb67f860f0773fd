//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`, `e2e4`) and the
//! internal `Square` type. Used by the snapshot codec and the terminal front-end.

use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Square::try_new(file - b'a', rank - b'1')
}

/// Parse a four-character coordinate pair such as "e2e4".
pub fn long_algebraic_to_squares(text: &str) -> Result<(Square, Square), String> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(format!("Invalid coordinate pair: {text}"));
    }
    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok((from, to))
}
