//! Chess rules engine
//!
//! Pure game logic with no rendering or I/O coupling: board state, legal move
//! generation, atomic move application, and turn and capture tracking.
//!
//! # Module Structure
//!
//! - `types` - squares, colors, piece kinds, stable piece ids, move candidates and results
//! - `board` - occupancy and live pieces
//! - `move_gen` - per-kind candidate generation, attack detection, legality filter
//! - `api` - the [`Game`] handle: lifecycle, move application, status queries
//! - `turn` / `captured` - side to move and per-side capture lists
//! - `builder` - custom positions
//! - `rules` - optional rule extensions (en passant, promotion)
//!
//! # Example
//!
//! ```
//! use chess_rules::{Game, Square};
//!
//! let mut game = Game::new();
//! let from: Square = "g1".parse().unwrap();
//! let targets: Vec<Square> = game.legal_moves(from).iter().map(|m| m.target).collect();
//! assert_eq!(targets.len(), 2);
//! game.apply_move(from, "f3".parse().unwrap()).unwrap();
//! ```

pub mod api;
pub mod board;
pub mod builder;
pub mod captured;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod rules;
pub mod turn;
pub mod types;

pub use api::{Game, GameStatus};
pub use board::{BoardState, EnPassantWindow};
pub use builder::PositionBuilder;
pub use captured::CaptureLists;
pub use error::{RulesError, RulesResult};
pub use rules::RuleSet;
pub use turn::TurnTracker;
pub use types::{
    CaptureRecord, CastlingDescriptor, CastlingRecord, Color, MoveCandidate, MoveResult, Piece,
    PieceId, PieceKind, Square,
};
