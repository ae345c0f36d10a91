//! Fluent builder for constructing positions
//!
//! Allows creating positions piece by piece, for tests and for sessions that
//! start from a custom layout.
//!
//! # Example
//! ```
//! use chess_rules::{Color, PieceKind, PositionBuilder};
//!
//! let game = PositionBuilder::new()
//!     .piece(Color::White, PieceKind::King, "e1".parse().unwrap())
//!     .piece(Color::Black, PieceKind::King, "e8".parse().unwrap())
//!     .piece(Color::White, PieceKind::Pawn, "a2".parse().unwrap())
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.board().pieces().len(), 3);
//! ```

use crate::api::Game;
use crate::board::BoardState;
use crate::constants::BACK_RANK;
use crate::error::{RulesError, RulesResult};
use crate::rules::RuleSet;
use crate::turn::TurnTracker;
use crate::types::{Color, Piece, PieceId, PieceKind, Square};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug)]
struct Placement {
    color: Color,
    kind: PieceKind,
    square: Square,
    has_moved: bool,
}

/// A fluent builder for [`Game`] positions
///
/// Pieces are numbered per (color, kind) in the order they are added, which
/// gives each one its stable [`PieceId`]. Kings may be omitted for analysis
/// positions; at most one per color is accepted.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    placements: Vec<Placement>,
    side_to_move: Color,
    rules: RuleSet,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Empty board, White to move
    #[must_use]
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
            side_to_move: Color::White,
            rules: RuleSet::default(),
        }
    }

    /// The standard initial position
    ///
    /// Instance numbers run from file a to file h, so the a-file rook is
    /// rook 0 and the h-file rook is rook 1.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for color in Color::ALL {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                builder = builder.piece(color, kind, Square::at(file as u8, color.back_rank()));
            }
            for file in 0..8 {
                let square = Square::at(file, color.pawn_rank());
                builder = builder.piece(color, PieceKind::Pawn, square);
            }
        }
        builder
    }

    /// Place an unmoved piece, replacing whatever was on that square
    #[must_use]
    pub fn piece(self, color: Color, kind: PieceKind, square: Square) -> Self {
        self.placement(color, kind, square, false)
    }

    /// Place a piece that counts as having moved (no castling, no double-step)
    #[must_use]
    pub fn moved_piece(self, color: Color, kind: PieceKind, square: Square) -> Self {
        self.placement(color, kind, square, true)
    }

    fn placement(mut self, color: Color, kind: PieceKind, square: Square, has_moved: bool) -> Self {
        self.placements.retain(|p| p.square != square);
        self.placements.push(Placement {
            color,
            kind,
            square,
            has_moved,
        });
        self
    }

    #[must_use]
    pub fn remove(mut self, square: Square) -> Self {
        self.placements.retain(|p| p.square != square);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Validate and build the game
    ///
    /// # Errors
    ///
    /// [`RulesError::InvalidPosition`] when a color has more than one king.
    pub fn build(self) -> RulesResult<Game> {
        for color in Color::ALL {
            let kings = self
                .placements
                .iter()
                .filter(|p| p.color == color && p.kind == PieceKind::King)
                .count();
            if kings > 1 {
                return Err(RulesError::InvalidPosition {
                    reason: format!("{color} has {kings} kings"),
                });
            }
        }
        Ok(self.assemble())
    }

    /// Build without validation; squares are already unique by construction
    pub(crate) fn assemble(self) -> Game {
        let mut board = BoardState::empty();
        let mut instances: HashMap<(Color, PieceKind), u8> = HashMap::new();
        for p in &self.placements {
            let instance = instances.entry((p.color, p.kind)).or_insert(0);
            let piece = Piece {
                id: PieceId::new(p.color, p.kind, *instance),
                kind: p.kind,
                color: p.color,
                square: p.square,
                has_moved: p.has_moved,
            };
            *instance += 1;
            board.insert(piece);
        }
        Game::from_parts(board, TurnTracker::starting_with(self.side_to_move), self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_layout() {
        let game = PositionBuilder::starting_position().build().unwrap();
        let board = game.board();

        assert_eq!(board.pieces().len(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        let e1 = board.piece_at("e1".parse().unwrap()).unwrap();
        assert_eq!((e1.color, e1.kind), (Color::White, PieceKind::King));
        let d8 = board.piece_at("d8".parse().unwrap()).unwrap();
        assert_eq!((d8.color, d8.kind), (Color::Black, PieceKind::Queen));
    }

    #[test]
    fn test_starting_position_instance_numbering() {
        //! a-file rook is instance 0, h-file rook instance 1
        let game = PositionBuilder::starting_position().build().unwrap();
        let a1 = game.piece_at("a1".parse().unwrap()).unwrap();
        let h1 = game.piece_at("h1".parse().unwrap()).unwrap();
        assert_eq!(a1.id, PieceId::new(Color::White, PieceKind::Rook, 0));
        assert_eq!(h1.id, PieceId::new(Color::White, PieceKind::Rook, 1));
        let h7 = game.piece_at("h7".parse().unwrap()).unwrap();
        assert_eq!(h7.id, PieceId::new(Color::Black, PieceKind::Pawn, 7));
    }

    #[test]
    fn test_piece_replaces_existing_placement() {
        let square: Square = "d4".parse().unwrap();
        let game = PositionBuilder::new()
            .piece(Color::White, PieceKind::Knight, square)
            .piece(Color::Black, PieceKind::Bishop, square)
            .build()
            .unwrap();
        assert_eq!(game.board().pieces().len(), 1);
        assert_eq!(game.piece_at(square).unwrap().kind, PieceKind::Bishop);
    }

    #[test]
    fn test_two_kings_rejected() {
        let err = PositionBuilder::new()
            .piece(Color::White, PieceKind::King, "e1".parse().unwrap())
            .piece(Color::White, PieceKind::King, "d1".parse().unwrap())
            .build()
            .unwrap_err();
        assert!(matches!(err, RulesError::InvalidPosition { .. }));
    }

    #[test]
    fn test_moved_piece_flag_and_side_to_move() {
        let game = PositionBuilder::new()
            .moved_piece(Color::Black, PieceKind::Rook, "h8".parse().unwrap())
            .side_to_move(Color::Black)
            .build()
            .unwrap();
        assert!(game.piece_at("h8".parse().unwrap()).unwrap().has_moved);
        assert_eq!(game.active_color(), Color::Black);
    }
}
