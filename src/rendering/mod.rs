//! Rendering collaborator boundary
//!
//! The controller never touches a scene. It issues visual commands through
//! [`RenderSink`], keyed by [`PieceId`] and [`Square`], and a collaborator maps
//! them onto meshes, markers and the camera.
//!
//! - [`CommandRecorder`] - records commands in order (tests, replay)
//! - [`console::ConsoleRenderer`] - logs commands with world positions
//! - [`layout`] - square, capture pile and camera placement

pub mod console;
pub mod layout;

use chess_rules::{Color, PieceId, PieceKind, Square};
use std::collections::HashSet;

/// Outbound visual commands
///
/// Called only after the engine has confirmed the state change they reflect.
pub trait RenderSink {
    /// Show the destination marker on `square`, red when it is a capture
    fn set_highlight(&mut self, square: Square, capture: bool);

    fn clear_highlight(&mut self, square: Square);

    /// Move a live piece onto `square`
    fn relocate_piece(&mut self, piece: PieceId, square: Square);

    /// Move a captured piece into `side`'s pile at `slot`
    fn relocate_captured_piece(&mut self, piece: PieceId, slot: usize, side: Color);

    /// Turn changed; re-orient the camera toward `color`
    fn on_active_player_changed(&mut self, color: Color);

    /// Swap the visual of `piece` for `kind`
    fn promote_piece(&mut self, _piece: PieceId, _kind: PieceKind) {}
}

/// A single recorded [`RenderSink`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    SetHighlight { square: Square, capture: bool },
    ClearHighlight { square: Square },
    RelocatePiece { piece: PieceId, square: Square },
    RelocateCapturedPiece { piece: PieceId, slot: usize, side: Color },
    ActivePlayerChanged { color: Color },
    PromotePiece { piece: PieceId, kind: PieceKind },
}

/// [`RenderSink`] that keeps every command in call order
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<ViewCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[ViewCommand] {
        &self.commands
    }

    /// Drain the recorded commands
    pub fn take(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Squares whose marker is currently shown, replaying the log
    pub fn highlighted(&self) -> HashSet<Square> {
        let mut shown = HashSet::new();
        for command in &self.commands {
            match *command {
                ViewCommand::SetHighlight { square, .. } => {
                    shown.insert(square);
                }
                ViewCommand::ClearHighlight { square } => {
                    shown.remove(&square);
                }
                _ => {}
            }
        }
        shown
    }
}

impl RenderSink for CommandRecorder {
    fn set_highlight(&mut self, square: Square, capture: bool) {
        self.commands.push(ViewCommand::SetHighlight { square, capture });
    }

    fn clear_highlight(&mut self, square: Square) {
        self.commands.push(ViewCommand::ClearHighlight { square });
    }

    fn relocate_piece(&mut self, piece: PieceId, square: Square) {
        self.commands.push(ViewCommand::RelocatePiece { piece, square });
    }

    fn relocate_captured_piece(&mut self, piece: PieceId, slot: usize, side: Color) {
        self.commands
            .push(ViewCommand::RelocateCapturedPiece { piece, slot, side });
    }

    fn on_active_player_changed(&mut self, color: Color) {
        self.commands.push(ViewCommand::ActivePlayerChanged { color });
    }

    fn promote_piece(&mut self, piece: PieceId, kind: PieceKind) {
        self.commands.push(ViewCommand::PromotePiece { piece, kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_recorder_keeps_call_order() {
        let mut recorder = CommandRecorder::new();
        recorder.set_highlight(sq("e3"), false);
        recorder.on_active_player_changed(Color::Black);

        assert_eq!(
            recorder.commands(),
            &[
                ViewCommand::SetHighlight {
                    square: sq("e3"),
                    capture: false
                },
                ViewCommand::ActivePlayerChanged {
                    color: Color::Black
                },
            ]
        );
        assert_eq!(recorder.take().len(), 2);
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn test_highlighted_replays_set_and_clear() {
        let mut recorder = CommandRecorder::new();
        recorder.set_highlight(sq("e3"), false);
        recorder.set_highlight(sq("e4"), false);
        recorder.clear_highlight(sq("e3"));

        let shown = recorder.highlighted();
        assert_eq!(shown.len(), 1);
        assert!(shown.contains(&sq("e4")));
    }

    struct Silent;

    impl RenderSink for Silent {
        fn set_highlight(&mut self, _: Square, _: bool) {}
        fn clear_highlight(&mut self, _: Square) {}
        fn relocate_piece(&mut self, _: PieceId, _: Square) {}
        fn relocate_captured_piece(&mut self, _: PieceId, _: usize, _: Color) {}
        fn on_active_player_changed(&mut self, _: Color) {}
    }

    #[test]
    fn test_promote_piece_defaults_to_noop() {
        let mut sink = Silent;
        sink.promote_piece(PieceId::new(Color::White, PieceKind::Pawn, 0), PieceKind::Queen);
    }
}
