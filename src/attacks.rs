//! Raw attack patterns.
//!
//! Answers whether a piece reaches a square under its bare movement rules,
//! ignoring whether the attacker's own king would be exposed. Used by
//! [`Board::is_attacked`](crate::Board::is_attacked) to test king safety;
//! full move legality lives in [`crate::game`].

use crate::{board::Board, color::Color, role::Role, square::Square, types::Piece};

/// Knight jump offsets.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
];

/// King step offsets.
pub const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Diagonal ray directions.
pub const BISHOP_DELTAS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal ray directions.
pub const ROOK_DELTAS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Whether `piece` standing on `from` attacks `target`.
///
/// Pawns attack diagonally forward only, never straight ahead. Sliders
/// ray-cast along their axes and stop at the first occupied square, which
/// is itself attacked.
pub fn is_targeting(piece: Piece, board: &Board, from: Square, target: Square) -> bool {
    match piece.role {
        Role::Pawn => pawn_targets(piece.color, from, target),
        Role::Knight => step_targets(from, target, &KNIGHT_DELTAS),
        Role::King => step_targets(from, target, &KING_DELTAS),
        Role::Bishop => ray_targets(board, from, target, &BISHOP_DELTAS),
        Role::Rook => ray_targets(board, from, target, &ROOK_DELTAS),
        Role::Queen => {
            ray_targets(board, from, target, &BISHOP_DELTAS)
                || ray_targets(board, from, target, &ROOK_DELTAS)
        }
    }
}

fn pawn_targets(color: Color, from: Square, target: Square) -> bool {
    let forward = color.forward();
    from.offset(-1, forward) == Some(target) || from.offset(1, forward) == Some(target)
}

fn step_targets(from: Square, target: Square, deltas: &[(i8, i8)]) -> bool {
    deltas
        .iter()
        .any(|&(df, dr)| from.offset(df, dr) == Some(target))
}

fn ray_targets(board: &Board, from: Square, target: Square, deltas: &[(i8, i8)]) -> bool {
    deltas
        .iter()
        .any(|&(df, dr)| ray_reaches(board, from, target, df, dr))
}

fn ray_reaches(board: &Board, from: Square, target: Square, df: i8, dr: i8) -> bool {
    let mut sq = from;
    while let Some(next) = sq.offset(df, dr) {
        if next == target {
            return true;
        }
        if board.piece_at(next).is_some() {
            return false;
        }
        sq = next;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square;

    #[test]
    fn test_pawn_attacks_diagonally_only() {
        let board = Board::empty();
        let pawn = Role::Pawn.of(Color::White);
        assert!(is_targeting(pawn, &board, square::E4, square::D5));
        assert!(is_targeting(pawn, &board, square::E4, square::F5));
        assert!(!is_targeting(pawn, &board, square::E4, square::E5));
        assert!(!is_targeting(pawn, &board, square::E4, square::D3));

        let pawn = Role::Pawn.of(Color::Black);
        assert!(is_targeting(pawn, &board, square::E4, square::D3));
        assert!(!is_targeting(pawn, &board, square::E4, square::D5));
    }

    #[test]
    fn test_knight_jumps() {
        let board = Board::empty();
        let knight = Role::Knight.of(Color::White);
        assert!(is_targeting(knight, &board, square::G1, square::F3));
        assert!(is_targeting(knight, &board, square::G1, square::H3));
        assert!(is_targeting(knight, &board, square::G1, square::E2));
        assert!(!is_targeting(knight, &board, square::G1, square::G3));
    }

    #[test]
    fn test_ray_stops_at_first_occupied_square_inclusive() {
        let board: Board = [
            (square::A1, Role::Rook.of(Color::White)),
            (square::A4, Role::Pawn.of(Color::Black)),
        ]
        .into_iter()
        .collect();
        let rook = Role::Rook.of(Color::White);
        assert!(is_targeting(rook, &board, square::A1, square::A3));
        assert!(is_targeting(rook, &board, square::A1, square::A4));
        assert!(!is_targeting(rook, &board, square::A1, square::A5));
        assert!(is_targeting(rook, &board, square::A1, square::H1));
        assert!(!is_targeting(rook, &board, square::A1, square::B2));
    }

    #[test]
    fn test_queen_covers_both_axes() {
        let board = Board::empty();
        let queen = Role::Queen.of(Color::Black);
        assert!(is_targeting(queen, &board, square::D8, square::D1));
        assert!(is_targeting(queen, &board, square::D8, square::H4));
        assert!(!is_targeting(queen, &board, square::D8, square::E6));
    }
}
