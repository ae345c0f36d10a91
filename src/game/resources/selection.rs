//! Selection state for the interaction controller

use chess_rules::{MoveCandidate, PieceId, Square};

/// Currently selected piece and its legal destinations
///
/// `highlights` holds exactly the destinations shown on the board, so it is
/// never populated while `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected {
        piece: PieceId,
        from: Square,
        highlights: Vec<MoveCandidate>,
    },
}

impl SelectionState {
    pub fn is_selected(&self) -> bool {
        matches!(self, SelectionState::Selected { .. })
    }

    pub fn selected_piece(&self) -> Option<PieceId> {
        match self {
            SelectionState::Selected { piece, .. } => Some(*piece),
            SelectionState::Idle => None,
        }
    }

    pub fn highlights(&self) -> &[MoveCandidate] {
        match self {
            SelectionState::Selected { highlights, .. } => highlights,
            SelectionState::Idle => &[],
        }
    }

    pub fn is_highlighted(&self, square: Square) -> bool {
        self.highlights().iter().any(|m| m.target == square)
    }

    /// Return to `Idle`, handing back the highlights that were shown
    pub fn clear(&mut self) -> Vec<MoveCandidate> {
        match std::mem::take(self) {
            SelectionState::Selected { highlights, .. } => highlights,
            SelectionState::Idle => Vec::new(),
        }
    }
}
