//! Reachability views derived from a piece's movement predicate.
//!
//! Everything here is computed by asking `can_move` about every square, so
//! the views can never disagree with the rules themselves.

use tracing::trace;

use crate::pieces::board_location::{all_board_locations, location_bit, BoardLocation, BOARD_SIZE};
use crate::pieces::chess_piece::ChessPiece;
use crate::pieces::piece_class::PieceClass;
use crate::pieces::piece_color::Color;

/// Every square the piece could move to, in row-major order.
pub fn reachable_squares(piece: &dyn ChessPiece) -> Vec<BoardLocation> {
    let squares: Vec<BoardLocation> = all_board_locations()
        .filter(|&(row, column)| piece.can_move(row, column))
        .collect();
    trace!(
        row = piece.row(),
        column = piece.column(),
        count = squares.len(),
        "scanned reachable squares"
    );
    squares
}

/// Reachable squares as a 64-bit mask, bit `row * 8 + column`.
pub fn movement_mask(piece: &dyn ChessPiece) -> u64 {
    reachable_squares(piece)
        .into_iter()
        .filter_map(|(row, column)| location_bit(row, column))
        .fold(0u64, |mask, bit| mask | (1u64 << bit))
}

/// Render the piece and its reachable squares as a text board.
///
/// Row 7 is printed at the top. The piece is drawn with its Unicode glyph,
/// reachable squares as `*` and every other square as `·`.
pub fn render_movement_map(piece: &dyn ChessPiece, class: PieceClass) -> String {
    let mask = movement_mask(piece);
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..BOARD_SIZE).rev() {
        out.push(char::from(b'1' + row as u8));
        out.push(' ');

        for column in 0..BOARD_SIZE {
            if (row, column) == piece.location() {
                out.push(piece_to_unicode(piece.color(), class));
            } else {
                match location_bit(row, column) {
                    Some(bit) if mask & (1u64 << bit) != 0 => out.push('*'),
                    _ => out.push('·'),
                }
            }

            if column < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, class: PieceClass) -> char {
    match (color, class) {
        (Color::White, PieceClass::Pawn) => '♙',
        (Color::White, PieceClass::Knight) => '♘',
        (Color::White, PieceClass::Bishop) => '♗',
        (Color::White, PieceClass::Rook) => '♖',
        (Color::White, PieceClass::Queen) => '♕',
        (Color::White, PieceClass::King) => '♔',
        (Color::Black, PieceClass::Pawn) => '♟',
        (Color::Black, PieceClass::Knight) => '♞',
        (Color::Black, PieceClass::Bishop) => '♝',
        (Color::Black, PieceClass::Rook) => '♜',
        (Color::Black, PieceClass::Queen) => '♛',
        (Color::Black, PieceClass::King) => '♚',
    }
}
