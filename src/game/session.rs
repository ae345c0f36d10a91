//! Viewer session
//!
//! One [`Session`] per board on screen. It owns the [`Game`] and the
//! [`SelectionController`] so every interaction goes through a single `&mut`
//! handle; nothing is global.

use crate::core::ViewerSettings;
use crate::game::events::{InteractionOutcome, Pickable};
use crate::game::resources::SelectionState;
use crate::game::systems::SelectionController;
use crate::rendering::RenderSink;
use chess_rules::{Color, Game, PieceId, Square};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    /// Position [`Session::reset`] returns to
    initial: Game,
    controller: SelectionController,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Game::new())
    }
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self::with_controller(game, SelectionController::default())
    }

    pub fn with_controller(game: Game, controller: SelectionController) -> Self {
        Self {
            initial: game.clone(),
            game,
            controller,
        }
    }

    /// Standard start using the rule toggles and hint preference from `settings`
    pub fn from_settings(settings: &ViewerSettings) -> Self {
        Self::with_controller(
            Game::with_rules(settings.rules),
            SelectionController::new(settings.show_hints),
        )
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn selection(&self) -> &SelectionState {
        self.controller.selection()
    }

    /// Resolve what a click on `square` would hit: its piece, else its marker
    pub fn pick_at(&self, square: Square) -> Pickable {
        match self.game.piece_at(square) {
            Some(piece) => Pickable::Piece(piece.id),
            None => Pickable::SquareMarker(square),
        }
    }

    pub fn handle(&mut self, pick: Pickable, sink: &mut dyn RenderSink) -> InteractionOutcome {
        self.controller.handle(&mut self.game, pick, sink)
    }

    pub fn piece_activated(
        &mut self,
        piece: PieceId,
        sink: &mut dyn RenderSink,
    ) -> InteractionOutcome {
        self.controller.on_piece_activated(&mut self.game, piece, sink)
    }

    pub fn square_activated(
        &mut self,
        square: Square,
        sink: &mut dyn RenderSink,
    ) -> InteractionOutcome {
        self.controller.on_square_activated(&mut self.game, square, sink)
    }

    pub fn square_activated_at(
        &mut self,
        file: u8,
        rank: u8,
        sink: &mut dyn RenderSink,
    ) -> InteractionOutcome {
        self.controller
            .square_activated_at(&mut self.game, file, rank, sink)
    }

    /// Back to the position this session started from
    ///
    /// Every piece of that position is sent to its square, captured ones
    /// included, and any piece whose type changed since is redrawn.
    pub fn reset(&mut self, sink: &mut dyn RenderSink) {
        self.controller.clear_selection(sink);
        let captured = self.game.captured();
        let changed: Vec<PieceId> = self
            .game
            .board()
            .pieces()
            .iter()
            .chain(captured.by(Color::White))
            .chain(captured.by(Color::Black))
            .filter(|piece| {
                let start = self.initial.board().piece(piece.id).map(|p| p.kind);
                start.is_some_and(|kind| kind != piece.kind)
            })
            .map(|piece| piece.id)
            .collect();

        self.game = self.initial.clone();
        for piece in self.game.board().pieces() {
            sink.relocate_piece(piece.id, piece.square);
        }
        for id in changed {
            if let Some(piece) = self.game.board().piece(id) {
                sink.promote_piece(id, piece.kind);
            }
        }
        sink.on_active_player_changed(self.game.active_color());
        info!("[MOVE] Game reset");
    }
}
