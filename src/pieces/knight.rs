use crate::errors::Errors;
use crate::pieces::chess_piece::{ChessPiece, PiecePlacement};
use crate::pieces::piece_color::Color;

/// Jumps in an L: two squares one way and one square perpendicular.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Knight {
    placement: PiecePlacement,
}

impl Knight {
    pub fn new(row: i32, column: i32, color: Color) -> Result<Self, Errors> {
        Ok(Self {
            placement: PiecePlacement::new(row, column, color)?,
        })
    }
}

impl ChessPiece for Knight {
    fn placement(&self) -> &PiecePlacement {
        &self.placement
    }

    fn can_move(&self, row: i32, column: i32) -> bool {
        match self.placement.displacement_to(row, column) {
            Some((d_row, d_column)) => matches!(
                (d_row.abs(), d_column.abs()),
                (2, 1) | (1, 2)
            ),
            None => false,
        }
    }
}
