use crate::errors::Errors;
use crate::pieces::chess_piece::{ChessPiece, PiecePlacement};
use crate::pieces::piece_color::Color;

/// Moves exactly one square in any of the eight directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct King {
    placement: PiecePlacement,
}

impl King {
    pub fn new(row: i32, column: i32, color: Color) -> Result<Self, Errors> {
        Ok(Self {
            placement: PiecePlacement::new(row, column, color)?,
        })
    }
}

impl ChessPiece for King {
    fn placement(&self) -> &PiecePlacement {
        &self.placement
    }

    fn can_move(&self, row: i32, column: i32) -> bool {
        // the guard already removed (0, 0)
        match self.placement.displacement_to(row, column) {
            Some((d_row, d_column)) => d_row.abs() <= 1 && d_column.abs() <= 1,
            None => false,
        }
    }
}
