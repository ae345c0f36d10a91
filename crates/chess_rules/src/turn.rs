//! Turn tracking
//!
//! Single source of truth for whose turn it is. Updated only by the move
//! applicator, exactly once per applied move.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays → switch() → Black plays → switch() → Move 2: White plays
//! ```

use crate::types::Color;

/// Side to move and the move number in chess notation
///
/// The move number starts at 1 and increments only after Black completes
/// their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTracker {
    pub color: Color,
    pub move_number: u32,
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self {
            color: Color::White,
            move_number: 1,
        }
    }
}

impl TurnTracker {
    pub fn starting_with(color: Color) -> Self {
        Self {
            color,
            move_number: 1,
        }
    }

    /// Hand the move to the other side
    pub(crate) fn switch(&mut self) {
        self.color = match self.color {
            Color::White => Color::Black,
            Color::Black => {
                self.move_number += 1;
                Color::White
            }
        };
    }
}
