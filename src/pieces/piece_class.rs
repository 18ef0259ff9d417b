use std::fmt;

/// Represents the type (class) of a chess piece.
/// Used to pick which movement rule a runtime-selected piece follows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceClass {
    /// A pawn piece.
    Pawn,
    /// A knight piece.
    Knight,
    /// A bishop piece.
    Bishop,
    /// A rook piece.
    Rook,
    /// A queen piece.
    Queen,
    /// A king piece.
    King,
}

impl PieceClass {
    pub const ALL: [PieceClass; 6] = [
        PieceClass::Pawn,
        PieceClass::Knight,
        PieceClass::Bishop,
        PieceClass::Rook,
        PieceClass::Queen,
        PieceClass::King,
    ];

    /// Parses a piece name (`queen`) or its single-letter symbol (`q`).
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name.to_ascii_lowercase().as_str() {
            "pawn" | "p" => Ok(PieceClass::Pawn),
            "knight" | "n" => Ok(PieceClass::Knight),
            "bishop" | "b" => Ok(PieceClass::Bishop),
            "rook" | "r" => Ok(PieceClass::Rook),
            "queen" | "q" => Ok(PieceClass::Queen),
            "king" | "k" => Ok(PieceClass::King),
            _ => Err(format!("Invalid piece kind: {name}")),
        }
    }
}

impl fmt::Display for PieceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceClass::Pawn => "pawn",
            PieceClass::Knight => "knight",
            PieceClass::Bishop => "bishop",
            PieceClass::Rook => "rook",
            PieceClass::Queen => "queen",
            PieceClass::King => "king",
        };
        f.write_str(name)
    }
}
