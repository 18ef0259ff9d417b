//! Queen movement: the union of the rook and bishop lines.

use crate::errors::Errors;
use crate::pieces::chess_piece::{ChessPiece, PiecePlacement};
use crate::pieces::piece_color::Color;

/// Moves any distance horizontally, vertically or diagonally.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Queen {
    placement: PiecePlacement,
}

impl Queen {
    /// # Errors
    ///
    /// * `Errors::InvalidPlacement` if the position is outside the 0 - 7 range.
    pub fn new(row: i32, column: i32, color: Color) -> Result<Self, Errors> {
        Ok(Self {
            placement: PiecePlacement::new(row, column, color)?,
        })
    }
}

impl ChessPiece for Queen {
    fn placement(&self) -> &PiecePlacement {
        &self.placement
    }

    fn can_move(&self, row: i32, column: i32) -> bool {
        let Some((d_row, d_column)) = self.placement.displacement_to(row, column) else {
            return false;
        };
        let straight = d_row == 0 || d_column == 0;
        let diagonal = d_row.abs() == d_column.abs();
        straight || diagonal
    }
}
