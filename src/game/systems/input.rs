//! Input handling: piece selection and destination activation
//!
//! [`SelectionController`] turns pick events into engine calls and engine
//! results into [`RenderSink`] commands. It holds no chess knowledge of its
//! own: legality comes from [`Game::legal_moves`] and every side effect from
//! [`Game::apply_move`].
//!
//! # State Machine
//!
//! ```text
//! Idle ──own piece──▶ Selected ──own piece──▶ Selected (highlights recomputed)
//!                        │
//!                        ├──highlighted square──▶ apply ──▶ Idle (highlights cleared)
//!                        └──anything else──────▶ Selected (no-op)
//! ```
//!
//! An enemy piece standing on a highlighted square counts as that square: the
//! picking layer hits the piece mesh before the marker under it.

use crate::game::events::{IgnoreReason, InteractionOutcome, Pickable};
use crate::game::resources::SelectionState;
use crate::rendering::RenderSink;
use chess_rules::{Game, MoveResult, PieceId, Square};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct SelectionController {
    selection: SelectionState,
    show_hints: bool,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SelectionController {
    /// With `show_hints` off, destinations are tracked but never drawn
    pub fn new(show_hints: bool) -> Self {
        Self {
            selection: SelectionState::Idle,
            show_hints,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Dispatch a pick event
    pub fn handle(
        &mut self,
        game: &mut Game,
        pick: Pickable,
        sink: &mut dyn RenderSink,
    ) -> InteractionOutcome {
        match pick {
            Pickable::Piece(piece) => self.on_piece_activated(game, piece, sink),
            Pickable::SquareMarker(square) => self.on_square_activated(game, square, sink),
        }
    }

    /// Handle a click on a piece
    pub fn on_piece_activated(
        &mut self,
        game: &mut Game,
        piece: PieceId,
        sink: &mut dyn RenderSink,
    ) -> InteractionOutcome {
        let Some(clicked) = game.board().piece(piece).copied() else {
            warn!("[INPUT] Clicked piece {piece} is not on the board");
            return InteractionOutcome::Ignored(IgnoreReason::UnknownPiece);
        };

        debug!("[INPUT] Clicked piece: {} at {}", clicked.id, clicked.square);

        // Case 1: own piece, (re)select it
        if clicked.color == game.active_color() {
            self.clear_highlights(sink);

            let highlights = game.legal_moves(clicked.square);
            if self.show_hints {
                for candidate in &highlights {
                    sink.set_highlight(candidate.target, candidate.capture);
                }
            }
            let destinations = highlights.len();
            self.selection = SelectionState::Selected {
                piece: clicked.id,
                from: clicked.square,
                highlights,
            };

            debug!(
                "[INPUT] Selected {} at {} ({} destinations)",
                clicked.id, clicked.square, destinations
            );
            return InteractionOutcome::Selected {
                piece: clicked.id,
                destinations,
            };
        }

        // Case 2: enemy piece on a highlighted square, treat as a capture click
        if self.selection.is_highlighted(clicked.square) {
            return self.on_square_activated(game, clicked.square, sink);
        }

        if self.selection.is_selected() {
            debug!("[INPUT] Enemy piece at {} is not a destination", clicked.square);
            InteractionOutcome::Ignored(IgnoreReason::NotHighlighted)
        } else {
            debug!("[INPUT] Enemy piece at {} with nothing selected", clicked.square);
            InteractionOutcome::Ignored(IgnoreReason::OpponentPiece)
        }
    }

    /// Handle a click on a square marker
    pub fn on_square_activated(
        &mut self,
        game: &mut Game,
        square: Square,
        sink: &mut dyn RenderSink,
    ) -> InteractionOutcome {
        let SelectionState::Selected { piece, from, .. } = self.selection else {
            debug!("[INPUT] Square {square} activated with no piece selected");
            return InteractionOutcome::Ignored(IgnoreReason::NoPieceSelected);
        };

        if !self.selection.is_highlighted(square) {
            debug!("[INPUT] Square {square} is not a destination of {piece}");
            return InteractionOutcome::Ignored(IgnoreReason::NotHighlighted);
        }

        let outcome = match game.apply_move(from, square) {
            Ok(result) => {
                sync_move(&result, sink);
                info!(
                    "[MOVE] {} {}→{}, {} to move ({:?})",
                    result.piece, result.from, result.new_square, result.active_color, result.status
                );
                InteractionOutcome::Moved(result)
            }
            Err(err) => {
                warn!("[INPUT] Move {from}→{square} refused: {err}");
                InteractionOutcome::Rejected(err)
            }
        };

        // Highlights go away whether or not the move landed
        self.clear_highlights(sink);
        outcome
    }

    /// Raw-coordinate entry point for picking layers that report board indices
    ///
    /// Out-of-range coordinates are a caller bug: they trip a debug assertion
    /// and are otherwise logged and ignored.
    pub fn square_activated_at(
        &mut self,
        game: &mut Game,
        file: u8,
        rank: u8,
        sink: &mut dyn RenderSink,
    ) -> InteractionOutcome {
        match Square::new(file, rank) {
            Ok(square) => self.on_square_activated(game, square, sink),
            Err(err) => {
                debug_assert!(false, "{err}");
                warn!("[INPUT] {err}");
                InteractionOutcome::Ignored(IgnoreReason::InvalidSquare)
            }
        }
    }

    /// Drop the selection and hide any shown markers
    pub fn clear_selection(&mut self, sink: &mut dyn RenderSink) {
        self.clear_highlights(sink);
    }

    fn clear_highlights(&mut self, sink: &mut dyn RenderSink) {
        let shown = self.selection.clear();
        if self.show_hints {
            for candidate in &shown {
                sink.clear_highlight(candidate.target);
            }
        }
        if !shown.is_empty() {
            debug!("[INPUT] Selection cleared");
        }
    }
}

/// Mirror an applied move onto the scene
///
/// The captured piece leaves its square before the mover arrives, and the
/// castling rook moves before the king.
fn sync_move(result: &MoveResult, sink: &mut dyn RenderSink) {
    if let Some(capture) = result.captured {
        sink.relocate_captured_piece(capture.piece, capture.slot, capture.side);
    }
    if let Some(castling) = result.castling {
        sink.relocate_piece(castling.rook, castling.rook_to);
    }
    sink.relocate_piece(result.piece, result.new_square);
    if let Some(kind) = result.promotion {
        sink.promote_piece(result.piece, kind);
    }
    sink.on_active_player_changed(result.active_color);
}
