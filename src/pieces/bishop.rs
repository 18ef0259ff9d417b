//! Bishop movement: any distance along a diagonal.

use crate::errors::Errors;
use crate::pieces::chess_piece::{ChessPiece, PiecePlacement};
use crate::pieces::piece_color::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bishop {
    placement: PiecePlacement,
}

impl Bishop {
    /// # Errors
    ///
    /// * `Errors::InvalidPlacement` if the position is outside the 0 - 7 range.
    pub fn new(row: i32, column: i32, color: Color) -> Result<Self, Errors> {
        Ok(Self {
            placement: PiecePlacement::new(row, column, color)?,
        })
    }
}

impl ChessPiece for Bishop {
    fn placement(&self) -> &PiecePlacement {
        &self.placement
    }

    fn can_move(&self, row: i32, column: i32) -> bool {
        match self.placement.displacement_to(row, column) {
            Some((d_row, d_column)) => d_row.abs() == d_column.abs(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Bishop;
    use crate::pieces::chess_piece::ChessPiece;
    use crate::pieces::piece_color::Color;

    #[test]
    fn rejects_off_board_construction() {
        assert!(Bishop::new(8, 8, Color::White).is_err());
        assert!(Bishop::new(-1, -1, Color::Black).is_err());
    }

    #[test]
    fn moves_along_both_diagonals() {
        let bishop = Bishop::new(4, 4, Color::White).expect("valid bishop");
        assert!(bishop.can_move(5, 5));
        assert!(bishop.can_move(3, 5));
        assert!(bishop.can_move(0, 0));
        assert!(bishop.can_move(7, 1));
        assert!(!bishop.can_move(5, 4));
        assert!(!bishop.can_move(4, 6));
        assert!(!bishop.can_move(4, 4));
        assert!(!bishop.can_move(8, 8));
    }

    #[test]
    fn captures_on_diagonal_only() {
        let bishop = Bishop::new(4, 4, Color::White).expect("valid bishop");
        let foe = Bishop::new(6, 2, Color::Black).expect("valid bishop");
        let blocked_line = Bishop::new(6, 4, Color::Black).expect("valid bishop");
        let friend = Bishop::new(6, 2, Color::White).expect("valid bishop");
        assert!(bishop.can_kill(&foe));
        assert!(!bishop.can_kill(&blocked_line));
        assert!(!bishop.can_kill(&friend));
    }
}
