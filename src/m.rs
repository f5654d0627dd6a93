use core::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    board::Board,
    color::Color,
    role::Role,
    square::{ParseSquareError, Square},
    types::Piece,
};

/// A move in coordinate form.
///
/// # Display
///
/// Moves render as the concatenated coordinate pair used for history
/// encoding, e.g. `E2E4`; promotions append the promotion letter, e.g.
/// `A7A8=Q`. [`FromStr`] parses the same notation, inferring the promotion
/// piece's color from the destination rank.
///
/// ```
/// use rocade::{Move, square};
///
/// let m: Move = "E2E4".parse()?;
/// assert_eq!(m, Move::Simple { from: square::E2, to: square::E4 });
/// assert_eq!(m.to_string(), "E2E4");
/// # Ok::<_, rocade::ParseMoveError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Relocation of one piece, including the compound castling and
    /// en passant cases.
    Simple { from: Square, to: Square },
    /// A pawn reaching its last rank, replaced by the promotion piece.
    Promotion {
        from: Square,
        to: Square,
        promotion: Piece,
    },
}

impl Move {
    /// Gets the origin square.
    pub const fn from(self) -> Square {
        match self {
            Move::Simple { from, .. } | Move::Promotion { from, .. } => from,
        }
    }

    /// Gets the target square.
    pub const fn to(self) -> Square {
        match self {
            Move::Simple { to, .. } | Move::Promotion { to, .. } => to,
        }
    }

    /// Gets the promotion piece, or `None` for simple moves.
    pub const fn promotion(self) -> Option<Piece> {
        match self {
            Move::Simple { .. } => None,
            Move::Promotion { promotion, .. } => Some(promotion),
        }
    }

    /// Checks if the move is a promotion.
    pub const fn is_promotion(self) -> bool {
        matches!(self, Move::Promotion { .. })
    }

    /// Applies this move to a board, including special-move side effects.
    ///
    /// Pure: returns the resulting board and leaves `board` untouched. No
    /// legality check is performed. A king moving two files from its home
    /// square drags the paired rook along (castling); a pawn stepping
    /// diagonally onto an empty square removes the bypassed pawn when the
    /// last history entry was the matching double advance (en passant).
    ///
    /// Returns `None` if `from` is vacant.
    pub fn execute(self, board: &Board, history: &[Move]) -> Option<Board> {
        match self {
            Move::Simple { from, to } => {
                let piece = board.piece_at(from)?;
                let mut next = board.move_piece(from, to)?;
                if piece.role == Role::King && from.file().abs_diff(to.file()) == 2 {
                    if let Some((rook_from, rook_to)) = castling_rook_shift(to) {
                        if let Some(with_rook) = next.move_piece(rook_from, rook_to) {
                            next = with_rook;
                        }
                    }
                }
                if piece.role == Role::Pawn
                    && from.file() != to.file()
                    && board.piece_at(to).is_none()
                {
                    if let Some(victim) = en_passant_victim(board, piece.color, from, to, history)
                    {
                        next = next.without(victim);
                    }
                }
                Some(next)
            }
            Move::Promotion {
                from,
                to,
                promotion,
            } => {
                board.piece_at(from)?;
                Some(board.without(from).with(to, promotion))
            }
        }
    }
}

/// Rook relocation paired with a castling king move, keyed by the king's
/// target square: G-file castles shift the H rook to F, C-file castles
/// shift the A rook to D.
fn castling_rook_shift(king_to: Square) -> Option<(Square, Square)> {
    let (rook_file, rook_target_file) = if king_to.file() == 7 { (8, 6) } else { (1, 4) };
    Some((
        Square::from_coords(rook_file, king_to.rank())?,
        Square::from_coords(rook_target_file, king_to.rank())?,
    ))
}

/// The square of the pawn captured en passant by a pawn of `color` moving
/// `from` → `to`, or `None` if the position/history does not match.
///
/// The capture exists exactly when the immediately preceding ply advanced
/// an enemy pawn two ranks, landing beside `from` on the square `to`
/// passes behind.
pub(crate) fn en_passant_victim(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
    history: &[Move],
) -> Option<Square> {
    let last = history.last()?;
    let victim_sq = Square::from_coords(to.file(), from.rank())?;
    let victim = board.piece_at(victim_sq)?;
    if victim.role == Role::Pawn
        && victim.color != color
        && last.to() == victim_sq
        && last.from().rank().abs_diff(last.to().rank()) == 2
    {
        Some(victim_sq)
    } else {
        None
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Simple { from, to } => write!(f, "{from}{to}"),
            Move::Promotion {
                from,
                to,
                promotion,
            } => write!(f, "{from}{to}={}", promotion.role.upper_char()),
        }
    }
}

/// Error when parsing invalid move notation.
#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ParseMoveError {
    #[error("invalid move notation")]
    Notation,
    #[error(transparent)]
    Square(#[from] ParseSquareError),
    #[error("invalid promotion")]
    Promotion,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        if !s.is_ascii() || (s.len() != 4 && s.len() != 6) {
            return Err(ParseMoveError::Notation);
        }
        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;
        if from == to {
            return Err(ParseMoveError::Notation);
        }
        if s.len() == 4 {
            return Ok(Move::Simple { from, to });
        }
        if s.as_bytes()[4] != b'=' {
            return Err(ParseMoveError::Notation);
        }
        let role = Role::from_char(s.as_bytes()[5] as char).ok_or(ParseMoveError::Promotion)?;
        if !role.is_promotable() {
            return Err(ParseMoveError::Promotion);
        }
        let color = match to.rank() {
            8 => Color::White,
            1 => Color::Black,
            _ => return Err(ParseMoveError::Promotion),
        };
        Ok(Move::Promotion {
            from,
            to,
            promotion: role.of(color),
        })
    }
}
