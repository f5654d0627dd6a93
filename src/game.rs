use thiserror::Error;

use crate::{
    attacks,
    board::{Board, MissingKingError},
    color::Color,
    m::{self, Move},
    role::Role,
    square::{self, Square},
    types::Piece,
};

/// Outcome classification of a position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    /// The side to move has at least one legal move.
    InGame,
    /// The side to move has no legal move and is in check.
    Checkmate,
    /// The side to move has no legal move and is not in check.
    Stalemate,
}

impl State {
    /// Whether the game is over.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, State::InGame)
    }
}

impl core::fmt::Display for State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            State::InGame => "in game",
            State::Checkmate => "checkmate",
            State::Stalemate => "stalemate",
        })
    }
}

/// A legal move paired with the board it produces.
///
/// Generation already simulated the move, so accepting it never reapplies
/// the rules.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ComputedMove {
    pub m: Move,
    pub board: Board,
}

/// Error when a move cannot be played.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum PlayError {
    #[error("no piece at {0}")]
    VacantSquare(Square),
    #[error("{m} played out of turn: {turn} to move")]
    WrongTurn { m: Move, turn: Color },
    #[error("illegal move {0}")]
    Illegal(Move),
    #[error(transparent)]
    MissingKing(#[from] MissingKingError),
}

/// A chess game: a move history and everything derived from it.
///
/// Values are immutable. [`Game::play`] returns a new game with one more
/// move; the receiver still describes the position before it. Each game
/// carries the full set of legal moves for the side to move, with the
/// board each one produces.
///
/// # Examples
///
/// ```
/// use rocade::{Game, Move, State, square};
///
/// let game = Game::new();
/// assert_eq!(game.legal_moves().len(), 20);
///
/// let game = game.play(Move::Simple { from: square::E2, to: square::E4 })?;
/// assert_eq!(game.state(), State::InGame);
/// assert_eq!(game.moves().len(), 1);
/// # Ok::<_, rocade::PlayError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Game {
    moves: Vec<Move>,
    board: Board,
    legals: Vec<ComputedMove>,
    state: State,
}

impl Game {
    /// A fresh game in the initial position, white to move.
    pub fn new() -> Game {
        Game::default()
    }

    /// Rebuilds a game from a recorded move history.
    ///
    /// Replay only checks that each move departs from an occupied square;
    /// it does not re-litigate legality of trusted records. Full legality
    /// is derived for the final position.
    pub fn from_moves<I>(moves: I) -> Result<Game, PlayError>
    where
        I: IntoIterator<Item = Move>,
    {
        let mut board = Board::default();
        let mut played = Vec::new();
        for m in moves {
            board = m
                .execute(&board, &played)
                .ok_or(PlayError::VacantSquare(m.from()))?;
            played.push(m);
        }
        Game::derive(played, board)
    }

    fn derive(moves: Vec<Move>, board: Board) -> Result<Game, PlayError> {
        let turn = turn_of(moves.len());
        let legals = legal_moves(&board, &moves, turn)?;
        let state = if !legals.is_empty() {
            State::InGame
        } else if board.is_check(turn)? {
            State::Checkmate
        } else {
            State::Stalemate
        };
        Ok(Game {
            moves,
            board,
            legals,
            state,
        })
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move history, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        turn_of(self.moves.len())
    }

    /// The outcome classification of the current position.
    pub fn state(&self) -> State {
        self.state
    }

    /// All legal moves for the side to move, in ascending [`Move`] order,
    /// each with its resulting board. Empty exactly when [`Game::state`]
    /// is terminal.
    pub fn legal_moves(&self) -> &[ComputedMove] {
        &self.legals
    }

    /// Whether the side to move may play `m`.
    pub fn is_legal(&self, m: Move) -> bool {
        self.legals.iter().any(|cm| cm.m == m)
    }

    /// Plays one move, returning the game after it.
    ///
    /// Distinguishes an empty origin square, a piece of the side not to
    /// move, and a plain illegal move, in that order.
    pub fn play(&self, m: Move) -> Result<Game, PlayError> {
        let piece = self
            .board
            .piece_at(m.from())
            .ok_or(PlayError::VacantSquare(m.from()))?;
        let turn = self.turn();
        if piece.color != turn {
            return Err(PlayError::WrongTurn { m, turn });
        }
        let computed = self
            .legals
            .iter()
            .find(|cm| cm.m == m)
            .ok_or(PlayError::Illegal(m))?;
        let mut moves = self.moves.clone();
        moves.push(m);
        Game::derive(moves, computed.board.clone())
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::from_moves([]).expect("initial position is playable")
    }
}

fn turn_of(plies: usize) -> Color {
    if plies % 2 == 0 {
        Color::White
    } else {
        Color::Black
    }
}

/// All legal moves for `color`, sorted for reproducible output.
///
/// Candidates come from the per-piece pattern generators; each is then
/// simulated and kept only if the mover's own king is safe afterwards.
fn legal_moves(
    board: &Board,
    history: &[Move],
    color: Color,
) -> Result<Vec<ComputedMove>, MissingKingError> {
    let mut candidates = Vec::new();
    for (from, piece) in board.pieces_of(color) {
        candidate_moves(board, history, from, piece, &mut candidates);
    }
    let mut legals = Vec::new();
    for m in candidates {
        let Some(next) = m.execute(board, history) else {
            continue;
        };
        if next.is_check(color)? {
            continue;
        }
        legals.push(ComputedMove { m, board: next });
    }
    legals.sort_by(|a, b| a.m.cmp(&b.m));
    Ok(legals)
}

fn candidate_moves(
    board: &Board,
    history: &[Move],
    from: Square,
    piece: Piece,
    acc: &mut Vec<Move>,
) {
    match piece.role {
        Role::Pawn => pawn_moves(board, history, from, piece.color, acc),
        Role::Knight => step_moves(board, from, piece.color, &attacks::KNIGHT_DELTAS, acc),
        Role::Bishop => ray_moves(board, from, piece.color, &attacks::BISHOP_DELTAS, acc),
        Role::Rook => ray_moves(board, from, piece.color, &attacks::ROOK_DELTAS, acc),
        Role::Queen => {
            ray_moves(board, from, piece.color, &attacks::BISHOP_DELTAS, acc);
            ray_moves(board, from, piece.color, &attacks::ROOK_DELTAS, acc);
        }
        Role::King => {
            step_moves(board, from, piece.color, &attacks::KING_DELTAS, acc);
            castling_moves(board, history, from, piece.color, acc);
        }
    }
}

/// Whether a piece of `color` may land on `to`: an empty square or an
/// enemy piece other than the king.
fn can_land(board: &Board, color: Color, to: Square) -> bool {
    match board.piece_at(to) {
        None => true,
        Some(p) => p.color != color && p.role != Role::King,
    }
}

fn step_moves(
    board: &Board,
    from: Square,
    color: Color,
    deltas: &[(i8, i8)],
    acc: &mut Vec<Move>,
) {
    for &(df, dr) in deltas {
        if let Some(to) = from.offset(df, dr) {
            if can_land(board, color, to) {
                acc.push(Move::Simple { from, to });
            }
        }
    }
}

fn ray_moves(board: &Board, from: Square, color: Color, deltas: &[(i8, i8)], acc: &mut Vec<Move>) {
    for &(df, dr) in deltas {
        let mut sq = from;
        while let Some(to) = sq.offset(df, dr) {
            if can_land(board, color, to) {
                acc.push(Move::Simple { from, to });
            }
            if board.piece_at(to).is_some() {
                break;
            }
            sq = to;
        }
    }
}

fn pawn_moves(board: &Board, history: &[Move], from: Square, color: Color, acc: &mut Vec<Move>) {
    let forward = color.forward();
    let mut targets = Vec::new();

    if let Some(to) = from.offset(0, forward) {
        if board.piece_at(to).is_none() {
            targets.push(to);
            if from.rank() == color.pawn_rank() {
                if let Some(two) = from.offset(0, 2 * forward) {
                    if board.piece_at(two).is_none() {
                        targets.push(two);
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let Some(to) = from.offset(df, forward) else {
            continue;
        };
        let capturable = match board.piece_at(to) {
            Some(p) => p.color != color && p.role != Role::King,
            None => m::en_passant_victim(board, color, from, to, history).is_some(),
        };
        if capturable {
            targets.push(to);
        }
    }

    for to in targets {
        if to.rank() == color.promotion_rank() {
            for role in Role::PROMOTABLE {
                acc.push(Move::Promotion {
                    from,
                    to,
                    promotion: role.of(color),
                });
            }
        } else {
            acc.push(Move::Simple { from, to });
        }
    }
}

/// Castling candidates for a king on `from`.
///
/// Requires the king on its home square with no history entry leaving it,
/// the rook physically on its home square with no history entry leaving
/// it, the squares between empty, and neither the king's current, transit
/// nor target square attacked.
fn castling_moves(
    board: &Board,
    history: &[Move],
    from: Square,
    color: Color,
    acc: &mut Vec<Move>,
) {
    let home = color.fold(square::E1, square::E8);
    if from != home
        || history.iter().any(|m| m.from() == home)
        || board.is_attacked(home, !color)
    {
        return;
    }

    let rank = home.rank();
    // (rook file, files between king and rook, king transit file, king target file)
    let kingside = (8, 6..=7, 6, 7);
    let queenside = (1, 2..=4, 4, 3);

    for (rook_file, between, transit_file, target_file) in [kingside, queenside] {
        let (Some(rook_home), Some(transit), Some(target)) = (
            Square::from_coords(rook_file, rank),
            Square::from_coords(transit_file, rank),
            Square::from_coords(target_file, rank),
        ) else {
            continue;
        };
        if board.piece_at(rook_home) != Some(Role::Rook.of(color)) {
            continue;
        }
        if history.iter().any(|m| m.from() == rook_home) {
            continue;
        }
        if between
            .filter_map(|file| Square::from_coords(file, rank))
            .any(|sq| board.piece_at(sq).is_some())
        {
            continue;
        }
        if board.is_attacked(transit, !color) || board.is_attacked(target, !color) {
            continue;
        }
        acc.push(Move::Simple { from: home, to: target });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let game = Game::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.state(), State::InGame);
        assert_eq!(game.moves(), &[]);
        // 16 pawn moves and 4 knight moves
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn test_legal_moves_are_sorted() {
        let game = Game::new();
        let moves: Vec<Move> = game.legal_moves().iter().map(|cm| cm.m).collect();
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_play_is_pure() {
        let game = Game::new();
        let next = game
            .play(Move::Simple {
                from: square::E2,
                to: square::E4,
            })
            .unwrap();
        assert_eq!(next.moves().len(), 1);
        assert_eq!(next.turn(), Color::Black);
        assert_eq!(game.moves().len(), 0);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_play_from_vacant_square() {
        let m = Move::Simple {
            from: square::E4,
            to: square::E5,
        };
        assert_eq!(Game::new().play(m), Err(PlayError::VacantSquare(square::E4)));
    }

    #[test]
    fn test_play_out_of_turn() {
        let m = Move::Simple {
            from: square::E7,
            to: square::E5,
        };
        assert_eq!(
            Game::new().play(m),
            Err(PlayError::WrongTurn {
                m,
                turn: Color::White
            })
        );
    }

    #[test]
    fn test_play_illegal_move() {
        let m = Move::Simple {
            from: square::E2,
            to: square::E5,
        };
        assert_eq!(Game::new().play(m), Err(PlayError::Illegal(m)));
    }

    #[test]
    fn test_from_moves_matches_played_game() {
        let moves = [
            Move::Simple {
                from: square::E2,
                to: square::E4,
            },
            Move::Simple {
                from: square::E7,
                to: square::E5,
            },
            Move::Simple {
                from: square::G1,
                to: square::F3,
            },
        ];
        let replayed = Game::from_moves(moves).unwrap();
        let played = moves
            .iter()
            .fold(Game::new(), |g, &m| g.play(m).unwrap());
        assert_eq!(replayed, played);
    }

    #[test]
    fn test_from_moves_rejects_vacant_origin() {
        let moves = [Move::Simple {
            from: square::E4,
            to: square::E5,
        }];
        assert_eq!(
            Game::from_moves(moves),
            Err(PlayError::VacantSquare(square::E4))
        );
    }

    #[test]
    fn test_king_may_not_be_captured() {
        // a rook pinning nothing still may not take the king itself
        let board: Board = [
            (square::E1, Role::King.of(Color::White)),
            (square::E8, Role::King.of(Color::Black)),
            (square::E4, Role::Rook.of(Color::White)),
        ]
        .into_iter()
        .collect();
        let legals = legal_moves(&board, &[], Color::White).unwrap();
        assert!(legals.iter().all(|cm| cm.m.to() != square::E8));
    }

    #[test]
    fn test_castling_requires_rook_at_home() {
        // clear history, but the rook stands on G1 instead of H1
        let board: Board = [
            (square::E1, Role::King.of(Color::White)),
            (square::G1, Role::Rook.of(Color::White)),
            (square::A8, Role::King.of(Color::Black)),
        ]
        .into_iter()
        .collect();
        let legals = legal_moves(&board, &[], Color::White).unwrap();
        let castle = Move::Simple {
            from: square::E1,
            to: square::G1,
        };
        assert!(!legals.iter().any(|cm| cm.m == castle));

        let board: Board = [
            (square::E1, Role::King.of(Color::White)),
            (square::H1, Role::Rook.of(Color::White)),
            (square::A8, Role::King.of(Color::Black)),
        ]
        .into_iter()
        .collect();
        let legals = legal_moves(&board, &[], Color::White).unwrap();
        assert!(legals.iter().any(|cm| cm.m == castle));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(State::InGame.to_string(), "in game");
        assert_eq!(State::Checkmate.to_string(), "checkmate");
        assert_eq!(State::Stalemate.to_string(), "stalemate");
        assert!(!State::InGame.is_terminal());
        assert!(State::Checkmate.is_terminal());
        assert!(State::Stalemate.is_terminal());
    }
}
