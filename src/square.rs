use core::{fmt, str::FromStr};

use thiserror::Error;

/// A coordinate on the board.
///
/// Files run from `A` (1) to `H` (8), ranks from `1` to `8`. Both
/// coordinates are always in range: construction from out-of-range values
/// yields `None`, so an invalid `Square` can never be stored.
///
/// # Examples
///
/// ```
/// use rocade::Square;
///
/// let sq = Square::from_coords(5, 4).unwrap();
/// assert_eq!(sq.to_string(), "E4");
/// assert_eq!(sq.offset(0, 0), Some(sq));
/// assert_eq!(sq.offset(4, 0), None);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Tries to build a square from 1-based file and rank indexes.
    pub const fn from_coords(file: u8, rank: u8) -> Option<Square> {
        if 1 <= file && file <= 8 && 1 <= rank && rank <= 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// 1-based file index, `1` for the A file.
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// 1-based rank index.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Letter of the file, `'A'` to `'H'`.
    pub const fn file_char(self) -> char {
        (b'A' + self.file - 1) as char
    }

    /// The square reached by moving `file_delta` files and `rank_delta`
    /// ranks, or `None` if that leaves the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file as i8 + file_delta;
        let rank = self.rank as i8 + rank_delta;
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, rank by rank from `A1`.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=8).flat_map(|rank| (1..=8).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// Error when parsing invalid square coordinates.
#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
#[error("invalid square coordinates")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        match s.as_bytes() {
            [file @ b'A'..=b'H', rank @ b'1'..=b'8'] => Ok(Square {
                file: file - b'A' + 1,
                rank: rank - b'0',
            }),
            _ => Err(ParseSquareError),
        }
    }
}

pub const A1: Square = Square { file: 1, rank: 1 };
pub const B1: Square = Square { file: 2, rank: 1 };
pub const C1: Square = Square { file: 3, rank: 1 };
pub const D1: Square = Square { file: 4, rank: 1 };
pub const E1: Square = Square { file: 5, rank: 1 };
pub const F1: Square = Square { file: 6, rank: 1 };
pub const G1: Square = Square { file: 7, rank: 1 };
pub const H1: Square = Square { file: 8, rank: 1 };
pub const A2: Square = Square { file: 1, rank: 2 };
pub const B2: Square = Square { file: 2, rank: 2 };
pub const C2: Square = Square { file: 3, rank: 2 };
pub const D2: Square = Square { file: 4, rank: 2 };
pub const E2: Square = Square { file: 5, rank: 2 };
pub const F2: Square = Square { file: 6, rank: 2 };
pub const G2: Square = Square { file: 7, rank: 2 };
pub const H2: Square = Square { file: 8, rank: 2 };
pub const A3: Square = Square { file: 1, rank: 3 };
pub const B3: Square = Square { file: 2, rank: 3 };
pub const C3: Square = Square { file: 3, rank: 3 };
pub const D3: Square = Square { file: 4, rank: 3 };
pub const E3: Square = Square { file: 5, rank: 3 };
pub const F3: Square = Square { file: 6, rank: 3 };
pub const G3: Square = Square { file: 7, rank: 3 };
pub const H3: Square = Square { file: 8, rank: 3 };
pub const A4: Square = Square { file: 1, rank: 4 };
pub const B4: Square = Square { file: 2, rank: 4 };
pub const C4: Square = Square { file: 3, rank: 4 };
pub const D4: Square = Square { file: 4, rank: 4 };
pub const E4: Square = Square { file: 5, rank: 4 };
pub const F4: Square = Square { file: 6, rank: 4 };
pub const G4: Square = Square { file: 7, rank: 4 };
pub const H4: Square = Square { file: 8, rank: 4 };
pub const A5: Square = Square { file: 1, rank: 5 };
pub const B5: Square = Square { file: 2, rank: 5 };
pub const C5: Square = Square { file: 3, rank: 5 };
pub const D5: Square = Square { file: 4, rank: 5 };
pub const E5: Square = Square { file: 5, rank: 5 };
pub const F5: Square = Square { file: 6, rank: 5 };
pub const G5: Square = Square { file: 7, rank: 5 };
pub const H5: Square = Square { file: 8, rank: 5 };
pub const A6: Square = Square { file: 1, rank: 6 };
pub const B6: Square = Square { file: 2, rank: 6 };
pub const C6: Square = Square { file: 3, rank: 6 };
pub const D6: Square = Square { file: 4, rank: 6 };
pub const E6: Square = Square { file: 5, rank: 6 };
pub const F6: Square = Square { file: 6, rank: 6 };
pub const G6: Square = Square { file: 7, rank: 6 };
pub const H6: Square = Square { file: 8, rank: 6 };
pub const A7: Square = Square { file: 1, rank: 7 };
pub const B7: Square = Square { file: 2, rank: 7 };
pub const C7: Square = Square { file: 3, rank: 7 };
pub const D7: Square = Square { file: 4, rank: 7 };
pub const E7: Square = Square { file: 5, rank: 7 };
pub const F7: Square = Square { file: 6, rank: 7 };
pub const G7: Square = Square { file: 7, rank: 7 };
pub const H7: Square = Square { file: 8, rank: 7 };
pub const A8: Square = Square { file: 1, rank: 8 };
pub const B8: Square = Square { file: 2, rank: 8 };
pub const C8: Square = Square { file: 3, rank: 8 };
pub const D8: Square = Square { file: 4, rank: 8 };
pub const E8: Square = Square { file: 5, rank: 8 };
pub const F8: Square = Square { file: 6, rank: 8 };
pub const G8: Square = Square { file: 7, rank: 8 };
pub const H8: Square = Square { file: 8, rank: 8 };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords() {
        for file in 1..=8 {
            for rank in 1..=8 {
                let sq = Square::from_coords(file, rank).unwrap();
                assert_eq!(sq.file(), file);
                assert_eq!(sq.rank(), rank);
            }
        }
        assert_eq!(Square::from_coords(0, 1), None);
        assert_eq!(Square::from_coords(9, 1), None);
        assert_eq!(Square::from_coords(1, 0), None);
        assert_eq!(Square::from_coords(1, 9), None);
    }

    #[test]
    fn test_offset_identity() {
        for sq in Square::all() {
            assert_eq!(sq.offset(0, 0), Some(sq));
        }
    }

    #[test]
    fn test_offset_bounds() {
        assert_eq!(A1.offset(-1, 0), None);
        assert_eq!(A1.offset(0, -1), None);
        assert_eq!(H8.offset(1, 0), None);
        assert_eq!(H8.offset(0, 1), None);
        assert_eq!(E4.offset(2, 1), Some(G5));
        assert_eq!(E4.offset(-4, -3), Some(A1));
    }

    #[test]
    fn test_parse() {
        assert_eq!("E4".parse(), Ok(E4));
        assert_eq!("A1".parse(), Ok(A1));
        assert_eq!("H8".parse(), Ok(H8));
        assert_eq!("e4".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("I1".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("A9".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("A10".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("".parse::<Square>(), Err(ParseSquareError));
    }

    #[test]
    fn test_display() {
        assert_eq!(E4.to_string(), "E4");
        assert_eq!(A8.to_string(), "A8");
    }
}
