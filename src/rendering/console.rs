//! Console renderer
//!
//! Stands in for a 3D scene: every visual command is resolved to world
//! coordinates and logged under `[VIEW]`.

use crate::core::{CameraSettings, ViewerSettings};
use crate::rendering::layout::{BoardGeometry, CameraPose, CapturePileLayout};
use crate::rendering::RenderSink;
use chess_rules::{Color, PieceId, PieceKind, Square};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ConsoleRenderer {
    geometry: BoardGeometry,
    capture_pile: CapturePileLayout,
    camera: CameraSettings,
    pose: CameraPose,
}

impl ConsoleRenderer {
    pub fn new(settings: &ViewerSettings) -> Self {
        Self {
            geometry: BoardGeometry::default(),
            capture_pile: settings.capture_pile,
            camera: settings.camera,
            pose: CameraPose::from_settings(Color::White, &settings.camera),
        }
    }

    /// Current camera orientation
    pub fn pose(&self) -> CameraPose {
        self.pose
    }
}

impl RenderSink for ConsoleRenderer {
    fn set_highlight(&mut self, square: Square, capture: bool) {
        let at = self.geometry.marker_position(square);
        debug!(
            "[VIEW] Highlight {square} at {at}{}",
            if capture { " (capture)" } else { "" }
        );
    }

    fn clear_highlight(&mut self, square: Square) {
        debug!("[VIEW] Clear highlight {square}");
    }

    fn relocate_piece(&mut self, piece: PieceId, square: Square) {
        let at = self.geometry.square_center(square);
        info!("[VIEW] {piece} → {square} {at}");
    }

    fn relocate_captured_piece(&mut self, piece: PieceId, slot: usize, side: Color) {
        let at = self.capture_pile.position(side, slot);
        info!("[VIEW] {piece} → {side} capture pile slot {slot} {at}");
    }

    fn on_active_player_changed(&mut self, color: Color) {
        self.pose = CameraPose::from_settings(color, &self.camera);
        info!(
            "[VIEW] Camera rotates to {color}: azimuth {:.3}, polar {:.3}",
            self.pose.azimuth, self.pose.polar
        );
    }

    fn promote_piece(&mut self, piece: PieceId, kind: PieceKind) {
        info!("[VIEW] {piece} now shown as {kind}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_camera_follows_active_player() {
        let mut renderer = ConsoleRenderer::new(&ViewerSettings::default());
        assert_eq!(renderer.pose().azimuth, 0.0);

        renderer.on_active_player_changed(Color::Black);
        assert_eq!(renderer.pose().azimuth, PI);

        renderer.on_active_player_changed(Color::White);
        assert_eq!(renderer.pose(), CameraPose::for_color(Color::White));
    }
}
