//! Error types for the rules engine
//!
//! Every fallible engine operation returns [`RulesResult`]. None of these errors
//! are retried: all operations are synchronous and deterministic, so a failure
//! means the caller asked for something the position does not allow, or a
//! programming error upstream.

use crate::types::{Color, Square};
use thiserror::Error;

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Coordinate outside the 8x8 board
    #[error("Invalid square: ({file}, {rank}) is outside the board (must be 0-7)")]
    InvalidSquare { file: i16, rank: i16 },

    /// Algebraic notation that does not name a square
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },

    /// Destination is not in the current legal set for the piece on `from`
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// No piece on the square an operation needs one on
    #[error("No piece at square {square}")]
    NoPieceAtSquare { square: Square },

    /// Relocation onto an occupied square (board invariant violation)
    #[error("Square {square} is already occupied by a {by} piece")]
    SquareOccupied { square: Square, by: Color },

    /// Position rejected by the position builder
    #[error("Invalid position: {reason}")]
    InvalidPosition { reason: String },
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_square_message_names_coordinates() {
        let err = RulesError::InvalidSquare { file: 8, rank: -1 };
        let text = err.to_string();
        assert!(text.contains('8'));
        assert!(text.contains("-1"));
    }

    #[test]
    fn test_illegal_move_uses_algebraic_squares() {
        let from = Square::new(4, 1).unwrap();
        let to = Square::new(4, 4).unwrap();
        let err = RulesError::IllegalMove { from, to };
        assert_eq!(err.to_string(), "Illegal move: e2 to e5");
    }

    #[test]
    fn test_square_occupied_names_color() {
        let err = RulesError::SquareOccupied {
            square: Square::new(0, 0).unwrap(),
            by: Color::White,
        };
        assert!(err.to_string().contains("a1"));
        assert!(err.to_string().contains("white"));
    }
}
