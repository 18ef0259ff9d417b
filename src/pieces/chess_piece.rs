//! The contract every chess piece implements, and the placement record the
//! six piece types share.
//!
//! A piece is an immutable `(row, column, color)` triple validated once at
//! construction. Movement and capture are pure predicates over that triple
//! and the query arguments; nothing here knows about a board, other pieces
//! in the way, or whose turn it is.

use tracing::debug;

use crate::errors::{Errors, PlacementFault};
use crate::pieces::board_location::{is_within_board, BoardLocation};
use crate::pieces::piece_color::Color;

/// Behaviour shared by all chess pieces.
///
/// Implementors supply their placement and `can_move`; `can_kill` defaults
/// to "different color and the target square is a legal move", which holds
/// for every piece whose attack pattern equals its movement pattern.
pub trait ChessPiece {
    fn placement(&self) -> &PiecePlacement;

    /// Current row (0 - 7).
    fn row(&self) -> i32 {
        self.placement().row()
    }

    /// Current column (0 - 7).
    fn column(&self) -> i32 {
        self.placement().column()
    }

    fn color(&self) -> Color {
        self.placement().color()
    }

    /// True if the piece could move to `(row, column)` on an otherwise empty
    /// board. Off-board targets and the piece's own square are always false.
    fn can_move(&self, row: i32, column: i32) -> bool;

    /// True if this piece could capture `other` where it stands.
    fn can_kill(&self, other: &dyn ChessPiece) -> bool {
        other.color() != self.color() && self.can_move(other.row(), other.column())
    }

    fn location(&self) -> BoardLocation {
        (self.row(), self.column())
    }
}

/// Validated position and color, embedded in every piece type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PiecePlacement {
    row: i32,
    column: i32,
    color: Color,
}

impl PiecePlacement {
    /// Validates the bounds invariant.
    ///
    /// # Errors
    ///
    /// * `Errors::InvalidPlacement` with `PlacementFault::OutOfBounds` when
    ///   either coordinate is outside `0..=7`.
    pub fn new(row: i32, column: i32, color: Color) -> Result<Self, Errors> {
        if !is_within_board(row, column) {
            debug!(row, column, ?color, "rejected out-of-bounds placement");
            return Err(Errors::InvalidPlacement((
                row,
                column,
                PlacementFault::OutOfBounds,
            )));
        }
        Ok(Self { row, column, color })
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.row
    }

    #[inline]
    pub fn column(&self) -> i32 {
        self.column
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Shared guard for every movement rule.
    ///
    /// Returns the signed `(d_row, d_column)` displacement to the target, or
    /// `None` when the target is off the board or is the current square.
    #[inline]
    pub fn displacement_to(&self, row: i32, column: i32) -> Option<(i32, i32)> {
        if !is_within_board(row, column) || (row == self.row && column == self.column) {
            return None;
        }
        Some((row - self.row, column - self.column))
    }
}
