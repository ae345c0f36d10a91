//! Inbound picking events and interaction outcomes

use chess_rules::{MoveResult, PieceId, RulesError, Square};

/// What a pointer click hit
///
/// A picking layer reports the piece mesh when one is under the pointer, and
/// the square's marker otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pickable {
    Piece(PieceId),
    SquareMarker(Square),
}

/// Why an activation changed nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Destination activated while nothing is selected
    NoPieceSelected,
    /// Square is not among the current highlights
    NotHighlighted,
    /// Opponent's piece activated with no selection to capture it
    OpponentPiece,
    /// Piece id is not on the board (already captured)
    UnknownPiece,
    /// Raw coordinates outside the board
    InvalidSquare,
}

/// Result of handling one activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// A piece is now selected with this many highlighted destinations
    Selected { piece: PieceId, destinations: usize },
    /// A move was applied
    Moved(MoveResult),
    /// The engine refused the move; selection and highlights were reset
    Rejected(RulesError),
    Ignored(IgnoreReason),
}

impl InteractionOutcome {
    pub fn is_move(&self) -> bool {
        matches!(self, InteractionOutcome::Moved(_))
    }
}
