//! Chess rules and legal move generation over immutable values.
//!
//! A [`Game`] is a move history and everything derived from it: the
//! current [`Board`], the side to move, the full set of legal moves with
//! the board each one produces, and the outcome [`State`]. Playing a move
//! returns a new game, leaving the old one intact.
//!
//! # Examples
//!
//! Play from the initial position:
//!
//! ```
//! use rocade::{Game, Move, square};
//!
//! let game = Game::new();
//! assert_eq!(game.legal_moves().len(), 20);
//!
//! let game = game.play(Move::Simple { from: square::E2, to: square::E4 })?;
//! let game = game.play("E7E5".parse()?)?;
//! assert_eq!(game.moves().len(), 2);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Detect the end of a game:
//!
//! ```
//! use rocade::{Game, Move, State};
//!
//! let fools_mate: Vec<Move> = ["F2F3", "E7E5", "G2G4", "D8H4"]
//!     .iter()
//!     .map(|s| s.parse())
//!     .collect::<Result<_, _>>()?;
//!
//! let game = Game::from_moves(fools_mate)?;
//! assert_eq!(game.state(), State::Checkmate);
//! assert!(game.legal_moves().is_empty());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements `Serialize` and `Deserialize` for [`Square`],
//!   [`Color`], [`Role`], [`Piece`], [`Move`] and [`State`].

#![warn(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod ascii;
pub mod attacks;
mod board;
mod color;
mod game;
mod m;
mod role;
pub mod square;
mod types;

pub use board::{Board, MissingKingError};
pub use color::{Color, ParseColorError};
pub use game::{ComputedMove, Game, PlayError, State};
pub use m::{Move, ParseMoveError};
pub use role::Role;
pub use square::{ParseSquareError, Square};
pub use types::Piece;
