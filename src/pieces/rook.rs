//! Rook movement: any distance along its row or its column.

use crate::errors::Errors;
use crate::pieces::chess_piece::{ChessPiece, PiecePlacement};
use crate::pieces::piece_color::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rook {
    placement: PiecePlacement,
}

impl Rook {
    pub fn new(row: i32, column: i32, color: Color) -> Result<Self, Errors> {
        Ok(Self {
            placement: PiecePlacement::new(row, column, color)?,
        })
    }
}

impl ChessPiece for Rook {
    fn placement(&self) -> &PiecePlacement {
        &self.placement
    }

    fn can_move(&self, row: i32, column: i32) -> bool {
        match self.placement.displacement_to(row, column) {
            Some((d_row, d_column)) => d_row == 0 || d_column == 0,
            None => false,
        }
    }
}
