//! Board, capture pile and camera layout
//!
//! World coordinates used by a scene collaborator:
//!
//! - the board is centred on the origin, one unit per square
//! - files run along +x (a-file at x = -3.5)
//! - White sits on +z, so rank 1 is at z = +3.5 and rank 8 at z = -3.5
//! - y is up; highlight markers float slightly above the squares
//!
//! Captured pieces are stacked in a line beside the board, one pile per
//! capturing side: White's captures at x = -5 growing toward +z from z = -4.25,
//! Black's at x = +5 growing toward -z from z = +4.25.

use chess_rules::{Color, Square};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_4, PI};
use std::fmt;

/// A point in scene space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPoint {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Square ↔ world mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    /// Edge length of one square
    pub square_size: f32,
    /// Height of a raised highlight marker
    pub marker_lift: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            square_size: 1.0,
            marker_lift: 0.01,
        }
    }
}

impl BoardGeometry {
    /// Centre of `square` on the board surface
    pub fn square_center(&self, square: Square) -> WorldPoint {
        WorldPoint::new(
            (f32::from(square.file()) - 3.5) * self.square_size,
            0.0,
            (3.5 - f32::from(square.rank())) * self.square_size,
        )
    }

    /// Where the highlight marker for `square` sits while shown
    pub fn marker_position(&self, square: Square) -> WorldPoint {
        WorldPoint {
            y: self.marker_lift,
            ..self.square_center(square)
        }
    }

    /// Square under a point on the board plane, if any
    pub fn square_at(&self, x: f32, z: f32) -> Option<Square> {
        let file = (x / self.square_size + 4.0).floor();
        let rank = (4.0 - z / self.square_size).floor();
        if !(0.0..8.0).contains(&file) || !(0.0..8.0).contains(&rank) {
            return None;
        }
        Square::new(file as u8, rank as u8).ok()
    }
}

/// Placement of captured pieces beside the board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapturePileLayout {
    /// Distance of each pile from the board's centre line along x
    pub side_offset: f32,
    /// Distance from the centre along z where each pile starts
    pub base: f32,
    /// Gap between consecutive captured pieces
    pub spacing: f32,
}

impl Default for CapturePileLayout {
    fn default() -> Self {
        Self {
            side_offset: 5.0,
            base: 4.25,
            spacing: 0.5,
        }
    }
}

impl CapturePileLayout {
    /// Position of the piece at 0-based `slot` in `side`'s capture list
    pub fn position(&self, side: Color, slot: usize) -> WorldPoint {
        let step = (slot as f32 + 1.0) * self.spacing;
        match side {
            Color::White => WorldPoint::new(-self.side_offset, 0.0, -self.base + step),
            Color::Black => WorldPoint::new(self.side_offset, 0.0, self.base - step),
        }
    }
}

/// Orbit-camera orientation around the board centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Rotation around the vertical axis, 0 looks from White's side
    pub azimuth: f32,
    /// Angle down from straight overhead
    pub polar: f32,
}

impl CameraPose {
    /// Default pose facing `color`'s side of the board
    pub fn for_color(color: Color) -> Self {
        let azimuth = match color {
            Color::White => 0.0,
            Color::Black => PI,
        };
        Self {
            azimuth,
            polar: FRAC_PI_4,
        }
    }

    pub fn from_settings(color: Color, camera: &crate::core::CameraSettings) -> Self {
        Self {
            azimuth: camera.azimuth_for(color),
            polar: camera.polar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_square_center_orientation() {
        //! a1 is front-left from White's side, h8 back-right
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.square_center(sq("a1")), WorldPoint::new(-3.5, 0.0, 3.5));
        assert_eq!(geometry.square_center(sq("h8")), WorldPoint::new(3.5, 0.0, -3.5));
        assert_eq!(geometry.square_center(sq("e4")), WorldPoint::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn test_marker_is_raised() {
        let geometry = BoardGeometry::default();
        assert!(geometry.marker_position(sq("d5")).y > 0.0);
    }

    #[test]
    fn test_square_at_inverts_center() {
        let geometry = BoardGeometry::default();
        for square in Square::all() {
            let center = geometry.square_center(square);
            assert_eq!(geometry.square_at(center.x, center.z), Some(square));
        }
        assert_eq!(geometry.square_at(4.5, 0.0), None);
        assert_eq!(geometry.square_at(0.0, -4.01), None);
    }

    #[test]
    fn test_capture_pile_first_slots() {
        let pile = CapturePileLayout::default();
        assert_eq!(pile.position(Color::White, 0), WorldPoint::new(-5.0, 0.0, -3.75));
        assert_eq!(pile.position(Color::White, 1), WorldPoint::new(-5.0, 0.0, -3.25));
        assert_eq!(pile.position(Color::Black, 0), WorldPoint::new(5.0, 0.0, 3.75));
    }

    #[test]
    fn test_camera_pose_per_color() {
        assert_eq!(CameraPose::for_color(Color::White).azimuth, 0.0);
        assert_eq!(CameraPose::for_color(Color::Black).azimuth, PI);
        assert_eq!(CameraPose::for_color(Color::Black).polar, FRAC_PI_4);
    }
}
