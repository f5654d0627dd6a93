use core::fmt;
use std::collections::HashMap;

use thiserror::Error;

use crate::{ascii, attacks, color::Color, role::Role, square::Square, types::Piece};

/// Piece placement as an immutable square-to-piece mapping.
///
/// An absent key is an empty square. `Board::default()` is the initial
/// chess position. A bare board carries no structural guarantee: one built
/// from external data may lack a king, which surfaces as
/// [`MissingKingError`] from the operations that need one.
///
/// # Examples
///
/// ```
/// use rocade::{Board, Color, square};
///
/// let board = Board::default();
/// assert_eq!(board.pieces_of(Color::White).count(), 16);
/// assert_eq!(board.king_of(Color::Black), Some(square::E8));
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    by_square: HashMap<Square, Piece>,
}

impl Board {
    /// A board with no pieces at all.
    pub fn empty() -> Board {
        Board {
            by_square: HashMap::new(),
        }
    }

    /// The piece standing on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.by_square.get(&sq).copied()
    }

    /// All pieces of one side with the squares they stand on.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.by_square
            .iter()
            .filter(move |(_, piece)| piece.color == color)
            .map(|(sq, piece)| (*sq, *piece))
    }

    /// The square of the given side's king, or `None` for a structurally
    /// broken board.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        let king = Role::King.of(color);
        self.by_square
            .iter()
            .find(|(_, piece)| **piece == king)
            .map(|(sq, _)| *sq)
    }

    /// Whether any piece of `by` reaches `sq` with its raw attack pattern,
    /// ignoring whether the attacker's own king would be exposed.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.pieces_of(by)
            .any(|(from, piece)| attacks::is_targeting(piece, self, from, sq))
    }

    /// Whether the given side's king is attacked.
    pub fn is_check(&self, color: Color) -> Result<bool, MissingKingError> {
        let king = self.king_of(color).ok_or(MissingKingError { color })?;
        Ok(self.is_attacked(king, !color))
    }

    /// Relocates the piece at `from`, replacing whatever stood at `to`.
    ///
    /// Pure and legality-blind: the receiver is untouched and no rule is
    /// checked. Returns `None` if `from` is vacant. This is the building
    /// block move execution composes.
    pub fn move_piece(&self, from: Square, to: Square) -> Option<Board> {
        let piece = self.piece_at(from)?;
        let mut by_square = self.by_square.clone();
        by_square.remove(&from);
        by_square.insert(to, piece);
        Some(Board { by_square })
    }

    /// A copy with `piece` placed on `sq`, replacing any occupant.
    pub(crate) fn with(&self, sq: Square, piece: Piece) -> Board {
        let mut by_square = self.by_square.clone();
        by_square.insert(sq, piece);
        Board { by_square }
    }

    /// A copy with `sq` emptied.
    pub(crate) fn without(&self, sq: Square) -> Board {
        let mut by_square = self.by_square.clone();
        by_square.remove(&sq);
        Board { by_square }
    }
}

impl Default for Board {
    fn default() -> Board {
        const BACKRANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];
        let mut by_square = HashMap::with_capacity(32);
        for color in Color::ALL {
            for (file, role) in (1u8..).zip(BACKRANK) {
                if let Some(sq) = Square::from_coords(file, color.backrank()) {
                    by_square.insert(sq, role.of(color));
                }
            }
            for file in 1..=8 {
                if let Some(sq) = Square::from_coords(file, color.pawn_rank()) {
                    by_square.insert(sq, Role::Pawn.of(color));
                }
            }
        }
        Board { by_square }
    }
}

impl FromIterator<(Square, Piece)> for Board {
    fn from_iter<I: IntoIterator<Item = (Square, Piece)>>(iter: I) -> Board {
        Board {
            by_square: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ascii::render(self))
    }
}

/// A structurally broken board: no king of the given color.
///
/// Never reachable through normal play; only corrupt externally loaded
/// boards or histories produce it.
#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
#[error("no {color} king on the board")]
pub struct MissingKingError {
    pub color: Color,
}
