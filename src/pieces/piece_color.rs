//! Piece colors and the direction each side calls "forward".

use std::fmt;

/// Represents the side (color) a chess piece belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// The white side; moves toward increasing rows.
    White,
    /// The black side; moves toward decreasing rows.
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single forward step for this side.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Parses `white`/`black` (or `w`/`b`), ignoring case.
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(format!("Invalid color: {name}")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn forward_points_away_from_home_rank() {
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::White.opposite(), Color::Black);
    }

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!(Color::from_name("WHITE"), Ok(Color::White));
        assert_eq!(Color::from_name("b"), Ok(Color::Black));
        assert!(Color::from_name("green").is_err());
    }
}
