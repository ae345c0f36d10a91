//! Captured pieces tracking
//!
//! Per-side, append-only lists of the pieces each player has taken. List order
//! is capture order; the rendering layer stacks captured meshes by position in
//! the list (`base ± count × spacing`).
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! If White captured (Rook=5, Pawn=1) and Black captured (Knight=3), White's
//! advantage is (5+1) - 3 = +3 pawns.

use crate::types::{Color, Piece};

/// Captured pieces for both sides
///
/// - `white_captured`: black pieces that White has captured
/// - `black_captured`: white pieces that Black has captured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureLists {
    white_captured: Vec<Piece>,
    black_captured: Vec<Piece>,
}

impl CaptureLists {
    /// Record a captured piece, crediting the opposite color
    ///
    /// Returns the 0-based slot the piece occupies in the capturing side's list.
    pub(crate) fn add_capture(&mut self, captured: Piece) -> usize {
        let list = match captured.color {
            Color::White => &mut self.black_captured,
            Color::Black => &mut self.white_captured,
        };
        list.push(captured);
        list.len() - 1
    }

    /// Pieces taken by `capturer`, in capture order
    pub fn by(&self, capturer: Color) -> &[Piece] {
        match capturer {
            Color::White => &self.white_captured,
            Color::Black => &self.black_captured,
        }
    }

    pub fn total(&self) -> usize {
        self.white_captured.len() + self.black_captured.len()
    }

    /// Material difference in pawn units, positive when White is ahead
    pub fn material_advantage(&self) -> i32 {
        let score = |list: &[Piece]| list.iter().map(|p| p.kind.value()).sum::<i32>();
        score(&self.white_captured) - score(&self.black_captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceId, PieceKind, Square};

    fn taken(color: Color, kind: PieceKind, instance: u8) -> Piece {
        Piece {
            id: PieceId::new(color, kind, instance),
            kind,
            color,
            square: Square::new(0, 0).unwrap(),
            has_moved: true,
        }
    }

    #[test]
    fn test_captured_pieces_default() {
        let captured = CaptureLists::default();
        assert!(captured.by(Color::White).is_empty());
        assert!(captured.by(Color::Black).is_empty());
        assert_eq!(captured.material_advantage(), 0);
    }

    #[test]
    fn test_add_capture_credits_opposite_color() {
        //! A black piece taken goes to White's list
        let mut captured = CaptureLists::default();
        let slot = captured.add_capture(taken(Color::Black, PieceKind::Queen, 0));

        assert_eq!(slot, 0);
        assert_eq!(captured.by(Color::White).len(), 1);
        assert_eq!(captured.by(Color::White)[0].kind, PieceKind::Queen);
        assert!(captured.by(Color::Black).is_empty());
    }

    #[test]
    fn test_slots_follow_capture_order() {
        let mut captured = CaptureLists::default();
        assert_eq!(captured.add_capture(taken(Color::White, PieceKind::Pawn, 0)), 0);
        assert_eq!(captured.add_capture(taken(Color::Black, PieceKind::Pawn, 3)), 0);
        assert_eq!(captured.add_capture(taken(Color::White, PieceKind::Rook, 1)), 1);
        assert_eq!(captured.by(Color::Black)[1].id.kind, PieceKind::Rook);
        assert_eq!(captured.total(), 3);
    }

    #[test]
    fn test_material_advantage() {
        //! White takes Queen(9), Rook(5): Black takes Knight(3), Bishop(3)
        let mut captured = CaptureLists::default();
        captured.add_capture(taken(Color::Black, PieceKind::Queen, 0));
        captured.add_capture(taken(Color::Black, PieceKind::Rook, 0));
        captured.add_capture(taken(Color::White, PieceKind::Knight, 0));
        captured.add_capture(taken(Color::White, PieceKind::Bishop, 0));

        assert_eq!(captured.material_advantage(), 8);
    }
}
