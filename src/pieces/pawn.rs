//! Pawn movement and capture.
//!
//! - Moves one square forward (increasing rows for white, decreasing for
//!   black), never sideways or backwards.
//! - May move two squares when standing on its side's start row (row 1 for
//!   white, row 6 for black). Pieces are never moved in place, so the start
//!   row is the only "first move" signal; there is no move history.
//! - Captures one square diagonally forward, never straight ahead.
//! - Can not be placed on its own back rank (row 0 white, row 7 black).

use tracing::debug;

use crate::errors::{Errors, PlacementFault};
use crate::pieces::chess_piece::{ChessPiece, PiecePlacement};
use crate::pieces::piece_color::Color;

/// Row on which a pawn of the given color may double-step.
pub const fn pawn_start_row(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Row a pawn of the given color may never be placed on.
pub const fn pawn_forbidden_row(color: Color) -> i32 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pawn {
    placement: PiecePlacement,
}

impl Pawn {
    /// Constructs a pawn, validating bounds and the forbidden row.
    ///
    /// # Errors
    ///
    /// * `Errors::InvalidPlacement` with `OutOfBounds` if the position is off
    ///   the board.
    /// * `Errors::InvalidPlacement` with `ForbiddenPawnRow` for a white pawn
    ///   on row 0 or a black pawn on row 7, whatever the column.
    pub fn new(row: i32, column: i32, color: Color) -> Result<Self, Errors> {
        let placement = PiecePlacement::new(row, column, color)?;
        if row == pawn_forbidden_row(color) {
            debug!(row, column, ?color, "rejected pawn on forbidden row");
            return Err(Errors::InvalidPlacement((
                row,
                column,
                PlacementFault::ForbiddenPawnRow(color),
            )));
        }
        Ok(Self { placement })
    }
}

impl ChessPiece for Pawn {
    fn placement(&self) -> &PiecePlacement {
        &self.placement
    }

    fn can_move(&self, row: i32, column: i32) -> bool {
        let Some((d_row, d_column)) = self.placement.displacement_to(row, column) else {
            return false;
        };
        if d_column != 0 {
            return false;
        }

        let color = self.placement.color();
        let forward = color.forward();
        if self.placement.row() == pawn_start_row(color) {
            d_row == forward || d_row == 2 * forward
        } else {
            d_row == forward
        }
    }

    fn can_kill(&self, other: &dyn ChessPiece) -> bool {
        let color = self.placement.color();
        if other.color() == color {
            return false;
        }
        let d_row = other.row() - self.placement.row();
        let d_column = (other.column() - self.placement.column()).abs();
        d_row == color.forward() && d_column == 1
    }
}
