use core::fmt;

use crate::{color::Color, role::Role};

/// A piece with [`Color`] and [`Role`].
///
/// Identity is structural: two white rooks are equal wherever they stand.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// Unicode figurine for this piece, as used by the ascii board codec.
    pub const fn symbol(self) -> char {
        match (self.color, self.role) {
            (Color::White, Role::Pawn) => '♙',
            (Color::White, Role::Knight) => '♘',
            (Color::White, Role::Bishop) => '♗',
            (Color::White, Role::Rook) => '♖',
            (Color::White, Role::Queen) => '♕',
            (Color::White, Role::King) => '♔',
            (Color::Black, Role::Pawn) => '♟',
            (Color::Black, Role::Knight) => '♞',
            (Color::Black, Role::Bishop) => '♝',
            (Color::Black, Role::Rook) => '♜',
            (Color::Black, Role::Queen) => '♛',
            (Color::Black, Role::King) => '♚',
        }
    }

    /// Inverse of [`Piece::symbol`].
    pub const fn from_symbol(ch: char) -> Option<Piece> {
        let (color, role) = match ch {
            '♙' => (Color::White, Role::Pawn),
            '♘' => (Color::White, Role::Knight),
            '♗' => (Color::White, Role::Bishop),
            '♖' => (Color::White, Role::Rook),
            '♕' => (Color::White, Role::Queen),
            '♔' => (Color::White, Role::King),
            '♟' => (Color::Black, Role::Pawn),
            '♞' => (Color::Black, Role::Knight),
            '♝' => (Color::Black, Role::Bishop),
            '♜' => (Color::Black, Role::Rook),
            '♛' => (Color::Black, Role::Queen),
            '♚' => (Color::Black, Role::King),
            _ => return None,
        };
        Some(Piece { color, role })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
