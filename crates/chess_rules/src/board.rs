//! Board state representation
//!
//! An occupancy table plus the list of live pieces. This layer performs no rule
//! validation: the mutating primitives are crate-private and only the move
//! applicator calls them.

use crate::error::{RulesError, RulesResult};
use crate::types::{Color, Piece, PieceId, PieceKind, Square};
use std::fmt;

/// Pawn that just double-stepped and may be taken en passant on the next move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnPassantWindow {
    /// Square the pawn skipped over (where the capturing pawn lands)
    pub target: Square,
    /// Square the double-stepped pawn now stands on
    pub victim: Square,
}

/// Occupancy and live pieces
///
/// # Invariants
///
/// - `squares[sq]` is `Some(id)` exactly when a live piece with that id stands on `sq`
/// - no two live pieces share a square
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    squares: [Option<PieceId>; 64],
    pieces: Vec<Piece>,
    en_passant: Option<EnPassantWindow>,
}

impl BoardState {
    pub(crate) fn empty() -> Self {
        Self {
            squares: [None; 64],
            pieces: Vec::with_capacity(32),
            en_passant: None,
        }
    }

    /// Piece standing on `square`, if any
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.index()].and_then(|id| self.piece(id))
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }

    /// Live piece with the given id
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id == id)
    }

    /// All live pieces
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |piece| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.square)
    }

    pub fn en_passant(&self) -> Option<EnPassantWindow> {
        self.en_passant
    }

    /// Put a new piece on an empty square (position setup only)
    pub(crate) fn insert(&mut self, piece: Piece) {
        debug_assert!(self.is_empty(piece.square), "setup placed two pieces on {}", piece.square);
        self.squares[piece.square.index()] = Some(piece.id);
        self.pieces.push(piece);
    }

    /// Move the piece on `from` to the empty square `to`
    ///
    /// Captures must be removed first. Hitting an occupied target is a
    /// programming error and trips a debug assertion.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> RulesResult<PieceId> {
        let id = self.squares[from.index()].ok_or(RulesError::NoPieceAtSquare { square: from })?;
        if let Some(by) = self.color_at(to) {
            debug_assert!(false, "relocation onto occupied square {to}");
            return Err(RulesError::SquareOccupied { square: to, by });
        }
        self.squares[from.index()] = None;
        self.squares[to.index()] = Some(id);
        if let Some(piece) = self.piece_mut(id) {
            piece.square = to;
            piece.has_moved = true;
        }
        Ok(id)
    }

    /// Take the piece on `square` out of the live set
    pub(crate) fn remove(&mut self, square: Square) -> RulesResult<Piece> {
        let id = self.squares[square.index()].ok_or(RulesError::NoPieceAtSquare { square })?;
        self.squares[square.index()] = None;
        let position = self
            .pieces
            .iter()
            .position(|piece| piece.id == id)
            .ok_or(RulesError::NoPieceAtSquare { square })?;
        Ok(self.pieces.remove(position))
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|piece| piece.id == id)
    }

    pub(crate) fn set_en_passant(&mut self, window: Option<EnPassantWindow>) {
        self.en_passant = window;
    }
}

impl fmt::Display for BoardState {
    /// Text diagram, rank 8 at the top, White uppercase
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let symbol = self
                    .piece_at(Square::at(file, rank))
                    .map(|piece| piece.kind.symbol(piece.color))
                    .unwrap_or('.');
                write!(f, "{symbol} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
