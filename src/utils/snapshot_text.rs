//! Text form of a `Snapshot`.
//!
//! Tag pairs carry the player names and the save date, followed by one
//! FEN-style line holding the board field and the side to move:
//!
//! ```text
//! [White "ada"]
//! [Black "bob"]
//! [Date "2024.05.01"]
//!
//! rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b
//! ```

use std::collections::BTreeMap;

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::snapshot::{CellContents, Snapshot};

pub fn write_snapshot(snapshot: &Snapshot) -> String {
    let date = chrono::Local::now().format("%Y.%m.%d").to_string();
    write_snapshot_with_date(snapshot, &date)
}

pub fn write_snapshot_with_date(snapshot: &Snapshot, date: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("[White \"{}\"]\n", escape_tag_value(&snapshot.white_name)));
    out.push_str(&format!("[Black \"{}\"]\n", escape_tag_value(&snapshot.black_name)));
    out.push_str(&format!("[Date \"{}\"]\n", escape_tag_value(date)));
    out.push('\n');
    out.push_str(&generate_position_line(snapshot));
    out.push('\n');
    out
}

pub fn read_snapshot(text: &str) -> Result<Snapshot, String> {
    let mut tags = BTreeMap::<String, String>::new();
    let mut position: Option<&str> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (key, value) = parse_tag_line(trimmed)?;
            tags.insert(key, value);
        } else if position.is_none() {
            position = Some(trimmed);
        } else {
            return Err(format!("Unexpected trailing line in snapshot: {trimmed}"));
        }
    }

    let white = tags.get("White").ok_or("Snapshot is missing the White tag")?;
    let black = tags.get("Black").ok_or("Snapshot is missing the Black tag")?;
    let position = position.ok_or("Snapshot is missing the position line")?;

    Snapshot::from_position(position, white.as_str(), black.as_str())
}

/// `<board-field> <w|b>`
pub fn generate_position_line(snapshot: &Snapshot) -> String {
    let side = match snapshot.turn {
        Color::White => "w",
        Color::Black => "b",
    };
    format!("{} {}", generate_board_field(snapshot), side)
}

pub fn parse_position_line(position: &str) -> Result<([[CellContents; 8]; 8], Color), String> {
    let mut parts = position.split_whitespace();
    let board_part = parts.next().ok_or("Missing board layout in position")?;
    let side_part = parts.next().ok_or("Missing side-to-move in position")?;
    if parts.next().is_some() {
        return Err("Position has extra trailing fields".to_owned());
    }

    let cells = parse_board_field(board_part)?;
    let turn = match side_part {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(format!("Invalid side-to-move field: {side_part}")),
    };
    Ok((cells, turn))
}

fn parse_board_field(board_part: &str) -> Result<[[CellContents; 8]; 8], String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut cells: [[CellContents; 8]; 8] = [[None; 8]; 8];
    for (field_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - field_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += empty_count as usize;
                if file > 8 {
                    return Err("Board rank has too many files".to_owned());
                }
                continue;
            }

            let piece = piece_from_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;
            if file >= 8 {
                return Err("Board rank has too many files".to_owned());
            }
            cells[file][rank] = Some(piece);
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(cells)
}

fn generate_board_field(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;
        for file in 0..8u8 {
            let contents = Square::new(file, rank).and_then(|sq| snapshot.cell(sq));
            match contents {
                Some((color, kind)) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_char(color, kind));
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_from_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some((color, kind))
}

fn piece_to_char(color: Color, kind: PieceKind) -> char {
    let base = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn parse_tag_line(line: &str) -> Result<(String, String), String> {
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(format!("Invalid tag line: {line}"));
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, ' ');
    let key = parts
        .next()
        .ok_or_else(|| format!("Invalid tag key: {line}"))?
        .trim();
    let value_raw = parts
        .next()
        .ok_or_else(|| format!("Invalid tag value: {line}"))?
        .trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(format!("Invalid quoted tag value: {line}"));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

fn escape_tag_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
