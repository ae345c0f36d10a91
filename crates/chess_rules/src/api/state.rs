//! Game state queries
//!
//! Check, checkmate and stalemate are read-only queries over the current
//! position. Nothing here ends the game: when the side to move has no legal
//! move, every `legal_moves` query is simply empty.

use crate::api::game::Game;
use crate::move_gen::{has_any_legal_move, is_in_check};
use crate::types::Color;

/// Outcome of the current position for the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The given color is to move and in check
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl Game {
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    pub fn status(&self) -> GameStatus {
        let color = self.turn.color;
        let in_check = is_in_check(&self.board, color);
        let can_move = has_any_legal_move(&self.board, color, self.rules);

        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate {
                winner: color.opposite(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check(color),
            (false, true) => GameStatus::InProgress,
        }
    }
}
