//! Runtime-selected pieces.
//!
//! `AnyPiece` is the closed set of the six piece types behind one tag. Code
//! that only learns the piece kind at runtime (the query shell, sampled
//! tests, benches) builds an `AnyPiece` from a `PieceClass` and dispatches
//! through it instead of boxing trait objects.

use rand::Rng;

use crate::errors::Errors;
use crate::pieces::bishop::Bishop;
use crate::pieces::chess_piece::{ChessPiece, PiecePlacement};
use crate::pieces::king::King;
use crate::pieces::knight::Knight;
use crate::pieces::pawn::{pawn_forbidden_row, Pawn};
use crate::pieces::piece_class::PieceClass;
use crate::pieces::piece_color::Color;
use crate::pieces::queen::Queen;
use crate::pieces::rook::Rook;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnyPiece {
    Pawn(Pawn),
    Knight(Knight),
    Bishop(Bishop),
    Rook(Rook),
    Queen(Queen),
    King(King),
}

impl AnyPiece {
    /// Builds the piece type named by `class`, with that type's validation.
    pub fn new(class: PieceClass, row: i32, column: i32, color: Color) -> Result<Self, Errors> {
        Ok(match class {
            PieceClass::Pawn => AnyPiece::Pawn(Pawn::new(row, column, color)?),
            PieceClass::Knight => AnyPiece::Knight(Knight::new(row, column, color)?),
            PieceClass::Bishop => AnyPiece::Bishop(Bishop::new(row, column, color)?),
            PieceClass::Rook => AnyPiece::Rook(Rook::new(row, column, color)?),
            PieceClass::Queen => AnyPiece::Queen(Queen::new(row, column, color)?),
            PieceClass::King => AnyPiece::King(King::new(row, column, color)?),
        })
    }

    /// Draws a uniformly random piece kind, color and legal placement.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let class = PieceClass::ALL[rng.random_range(0..PieceClass::ALL.len())];
        let color = if rng.random_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        loop {
            let row = rng.random_range(0..8);
            let column = rng.random_range(0..8);
            if class == PieceClass::Pawn && row == pawn_forbidden_row(color) {
                continue;
            }
            if let Ok(piece) = AnyPiece::new(class, row, column, color) {
                return piece;
            }
        }
    }

    pub fn class(&self) -> PieceClass {
        match self {
            AnyPiece::Pawn(_) => PieceClass::Pawn,
            AnyPiece::Knight(_) => PieceClass::Knight,
            AnyPiece::Bishop(_) => PieceClass::Bishop,
            AnyPiece::Rook(_) => PieceClass::Rook,
            AnyPiece::Queen(_) => PieceClass::Queen,
            AnyPiece::King(_) => PieceClass::King,
        }
    }

    fn as_piece(&self) -> &dyn ChessPiece {
        match self {
            AnyPiece::Pawn(p) => p,
            AnyPiece::Knight(p) => p,
            AnyPiece::Bishop(p) => p,
            AnyPiece::Rook(p) => p,
            AnyPiece::Queen(p) => p,
            AnyPiece::King(p) => p,
        }
    }
}

impl ChessPiece for AnyPiece {
    fn placement(&self) -> &PiecePlacement {
        self.as_piece().placement()
    }

    fn can_move(&self, row: i32, column: i32) -> bool {
        self.as_piece().can_move(row, column)
    }

    fn can_kill(&self, other: &dyn ChessPiece) -> bool {
        self.as_piece().can_kill(other)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::AnyPiece;
    use crate::pieces::chess_piece::ChessPiece;
    use crate::pieces::pawn::Pawn;
    use crate::pieces::piece_class::PieceClass;
    use crate::pieces::piece_color::Color;

    #[test]
    fn builds_every_class_with_its_own_rules() {
        for class in PieceClass::ALL {
            let piece = AnyPiece::new(class, 3, 3, Color::White).expect("3,3 is valid for all");
            assert_eq!(piece.class(), class);
            assert_eq!(piece.location(), (3, 3));
            assert_eq!(piece.color(), Color::White);
        }
        assert!(AnyPiece::new(PieceClass::Pawn, 0, 3, Color::White).is_err());
        assert!(AnyPiece::new(PieceClass::Rook, 0, 3, Color::White).is_ok());
    }

    #[test]
    fn delegates_pawn_capture_override() {
        let pawn = AnyPiece::new(PieceClass::Pawn, 4, 4, Color::White).expect("valid pawn");
        let ahead = Pawn::new(5, 4, Color::Black).expect("valid pawn");
        let diagonal = Pawn::new(5, 5, Color::Black).expect("valid pawn");
        assert!(pawn.can_move(5, 4));
        assert!(!pawn.can_kill(&ahead));
        assert!(pawn.can_kill(&diagonal));
    }

    #[test]
    fn random_pieces_respect_placement_rules() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let piece = AnyPiece::random(&mut rng);
            assert!((0..8).contains(&piece.row()));
            assert!((0..8).contains(&piece.column()));
            if piece.class() == PieceClass::Pawn {
                match piece.color() {
                    Color::White => assert_ne!(piece.row(), 0),
                    Color::Black => assert_ne!(piece.row(), 7),
                }
            }
        }
    }
}
