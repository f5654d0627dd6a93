//! Bordered-grid board codec.
//!
//! Renders a [`Board`] as an 8x8 grid of Unicode figurines with `+---+`
//! borders, rank labels on the left and file labels underneath, and parses
//! the same layout back. [`parse`] is the exact inverse of [`render`].
//!
//! ```text
//!   +---+---+---+---+---+---+---+---+
//! 8 | ♜ | ♞ | ♝ | ♛ | ♚ | ♝ | ♞ | ♜ |
//!   +---+---+---+---+---+---+---+---+
//!   ...
//! ```

use thiserror::Error;

use crate::{board::Board, square::Square, types::Piece};

const BORDER: &str = "  +---+---+---+---+---+---+---+---+";
const FOOTER: &str = "    A   B   C   D   E   F   G   H";

/// Renders a board as a bordered grid, rank 8 at the top.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for rank in (1..=8).rev() {
        out.push_str(BORDER);
        out.push('\n');
        out.push_str(&format!("{rank} "));
        for file in 1..=8 {
            match Square::from_coords(file, rank).and_then(|sq| board.piece_at(sq)) {
                Some(piece) => out.push_str(&format!("| {piece} ")),
                None => out.push_str("|   "),
            }
        }
        out.push_str("|\n");
    }
    out.push_str(BORDER);
    out.push('\n');
    out.push_str(FOOTER);
    out.push('\n');
    out
}

/// Error when parsing a malformed board grid.
#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ParseBoardError {
    #[error("expected {expected} lines, got {actual}")]
    LineCount { expected: usize, actual: usize },
    #[error("malformed line {0}")]
    Line(usize),
    #[error("unknown piece symbol {0:?} on line {1}")]
    Symbol(char, usize),
}

/// Parses a board from the grid layout produced by [`render`].
pub fn parse(s: &str) -> Result<Board, ParseBoardError> {
    let lines: Vec<&str> = s.lines().collect();
    if lines.len() != 18 {
        return Err(ParseBoardError::LineCount {
            expected: 18,
            actual: lines.len(),
        });
    }

    let mut pieces = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let lineno = i + 1;
        if i == 17 {
            if *line != FOOTER {
                return Err(ParseBoardError::Line(lineno));
            }
            continue;
        }
        if i % 2 == 0 {
            if *line != BORDER {
                return Err(ParseBoardError::Line(lineno));
            }
            continue;
        }

        let rank = 8 - (i as u8) / 2;
        let cells: Vec<&str> = line.split('|').collect();
        if cells.len() != 10 || cells[0] != format!("{rank} ") || !cells[9].is_empty() {
            return Err(ParseBoardError::Line(lineno));
        }
        for (file, cell) in (1u8..).zip(&cells[1..9]) {
            let mut chars = cell.chars();
            let (Some(' '), Some(ch), Some(' '), None) =
                (chars.next(), chars.next(), chars.next(), chars.next())
            else {
                return Err(ParseBoardError::Line(lineno));
            };
            if ch == ' ' {
                continue;
            }
            let piece =
                Piece::from_symbol(ch).ok_or(ParseBoardError::Symbol(ch, lineno))?;
            if let Some(sq) = Square::from_coords(file, rank) {
                pieces.push((sq, piece));
            }
        }
    }
    Ok(pieces.into_iter().collect())
}
