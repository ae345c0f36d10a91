//! Game lifecycle management
//!
//! [`Game`] owns the board, the turn tracker and the capture lists. It is the
//! only handle through which they change.

use crate::board::BoardState;
use crate::builder::PositionBuilder;
use crate::captured::CaptureLists;
use crate::move_gen;
use crate::rules::RuleSet;
use crate::turn::TurnTracker;
use crate::types::{Color, MoveCandidate, Piece, Square};

/// Complete rules-engine state for one game
///
/// # Example
///
/// ```
/// use chess_rules::{Game, Square};
///
/// let game = Game::new();
/// let e2: Square = "e2".parse().unwrap();
/// let moves = game.legal_moves(e2);
/// assert_eq!(moves.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: BoardState,
    pub(crate) turn: TurnTracker,
    pub(crate) captured: CaptureLists,
    pub(crate) rules: RuleSet,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move, all rules enabled
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        PositionBuilder::starting_position().rules(rules).assemble()
    }

    /// Start building a custom position
    pub fn builder() -> PositionBuilder {
        PositionBuilder::new()
    }

    pub(crate) fn from_parts(board: BoardState, turn: TurnTracker, rules: RuleSet) -> Self {
        Self {
            board,
            turn,
            captured: CaptureLists::default(),
            rules,
        }
    }

    /// Back to the starting position, keeping the rule set
    pub fn reset(&mut self) {
        *self = Self::with_rules(self.rules);
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.board.piece_at(square)
    }

    pub fn active_color(&self) -> Color {
        self.turn.color
    }

    pub fn turn(&self) -> TurnTracker {
        self.turn
    }

    pub fn captured(&self) -> &CaptureLists {
        &self.captured
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Legal destinations for the piece on `from`
    ///
    /// Empty when `from` is empty or holds a piece of the side not to move.
    pub fn legal_moves(&self, from: Square) -> Vec<MoveCandidate> {
        move_gen::legal_moves(&self.board, from, self.turn.color, self.rules)
    }
}
