//! Optional rule extensions
//!
//! Capture and castling are always on. En passant and promotion ride on the
//! same candidate/result tagging and can be switched off per game.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleSet {
    pub en_passant: bool,
    /// Pawns reaching the last rank become queens
    pub promotion: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            en_passant: true,
            promotion: true,
        }
    }
}

impl RuleSet {
    /// Plain moves, captures and castling only
    pub fn basic() -> Self {
        Self {
            en_passant: false,
            promotion: false,
        }
    }
}
