//! Conversions between algebraic coordinates and `(row, column)` locations.
//!
//! Row 0 is rank `1` (white's home rank) and column 0 is file `a`, so white
//! pawns advance toward rank `8` exactly as on a real board.

use crate::pieces::board_location::{is_within_board, BoardLocation};

/// Convert algebraic notation (for example: "e4") to a `(row, column)` location.
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, String> {
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

    Ok((i32::from(rank - b'1'), i32::from(file - b'a')))
}

/// Convert an on-board location to algebraic notation (for example: "e4").
pub fn location_to_algebraic(row: i32, column: i32) -> Result<String, String> {
    if !is_within_board(row, column) {
        return Err(format!("Location out of bounds: ({row}, {column})"));
    }

    let file_char = char::from(b'a' + column as u8);
    let rank_char = char::from(b'1' + row as u8);
    Ok(format!("{file_char}{rank_char}"))
}
