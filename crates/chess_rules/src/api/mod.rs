//! Public game API
//!
//! - `game` - the [`Game`] session state and its lifecycle
//! - `moves` - move application
//! - `state` - check, checkmate and stalemate queries

pub mod game;
pub mod moves;
pub mod state;


pub use game::Game;
pub use state::GameStatus;
