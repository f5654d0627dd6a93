use core::{fmt, ops, str::FromStr};

use thiserror::Error;

/// `White` or `Black`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn fold<T>(self, white: T, black: T) -> T {
        match self {
            Color::White => white,
            Color::Black => black,
        }
    }

    #[inline]
    pub fn is_white(self) -> bool {
        self == Color::White
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self == Color::Black
    }

    /// Rank direction of this side's pawn advance.
    #[inline]
    pub fn forward(self) -> i8 {
        self.fold(1, -1)
    }

    /// Rank on which this side's king and rooks start.
    #[inline]
    pub fn backrank(self) -> u8 {
        self.fold(1, 8)
    }

    /// Rank on which this side's pawns start.
    #[inline]
    pub fn pawn_rank(self) -> u8 {
        self.fold(2, 7)
    }

    /// Rank a pawn of this side promotes on.
    #[inline]
    pub fn promotion_rank(self) -> u8 {
        self.fold(8, 1)
    }

    /// `White` and `Black`, in this order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];
}

impl ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.fold(Color::Black, Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold("white", "black"))
    }
}

/// Error when parsing an invalid color name.
#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
#[error("invalid color")]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Color, ParseColorError> {
        Ok(match s {
            "white" => Color::White,
            "black" => Color::Black,
            _ => return Err(ParseColorError),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn test_ranks() {
        assert_eq!(Color::White.backrank(), 1);
        assert_eq!(Color::Black.backrank(), 8);
        assert_eq!(Color::White.pawn_rank(), 2);
        assert_eq!(Color::Black.pawn_rank(), 7);
        assert_eq!(Color::White.promotion_rank(), 8);
        assert_eq!(Color::Black.promotion_rank(), 1);
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
    }

    #[test]
    fn test_parse() {
        assert_eq!("white".parse(), Ok(Color::White));
        assert_eq!("black".parse(), Ok(Color::Black));
        assert_eq!("WHITE".parse::<Color>(), Err(ParseColorError));
    }
}
