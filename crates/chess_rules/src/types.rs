//! Core types for the rules engine
//!
//! Squares, colors, piece kinds and the stable [`PieceId`] key the rendering
//! layer uses to map engine pieces to its own visual objects.
//!
//! # Coordinate System
//!
//! - `file` is the column, 0 (file a) to 7 (file h)
//! - `rank` is the row, 0 (rank 1, White's back rank) to 7 (rank 8)
//! - Linear index is `rank * 8 + file`, so a1 = 0, h1 = 7, a8 = 56, h8 = 63

use crate::error::{RulesError, RulesResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank the pieces of this color start on
    #[inline]
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank the pawns of this color start on
    #[inline]
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank on which a pawn of this color promotes
    #[inline]
    pub fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Kind of chess piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value in pawns
    ///
    /// King has value 0: it is never captured.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Board diagram letter, uppercase for White
    pub fn symbol(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A square on the 8x8 board
///
/// Fields are private: every `Square` in existence is on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a square, failing with [`RulesError::InvalidSquare`] off the board
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::Square;
    ///
    /// let e4 = Square::new(4, 3).unwrap();
    /// assert_eq!(e4.to_string(), "e4");
    /// assert!(Square::new(8, 0).is_err());
    /// ```
    pub fn new(file: u8, rank: u8) -> RulesResult<Square> {
        if file > 7 || rank > 7 {
            return Err(RulesError::InvalidSquare {
                file: file as i16,
                rank: rank as i16,
            });
        }
        Ok(Square { file, rank })
    }

    /// Internal constructor for coordinates already known to be in range
    #[inline]
    pub(crate) const fn at(file: u8, rank: u8) -> Square {
        debug_assert!(file < 8 && rank < 8);
        Square { file, rank }
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Linear index 0-63 (`rank * 8 + file`)
    #[inline]
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Square for a linear index, `None` above 63
    pub fn from_index(index: usize) -> Option<Square> {
        if index < 64 {
            Some(Square::at((index % 8) as u8, (index / 8) as u8))
        } else {
            None
        }
    }

    /// Square reached by stepping `(df, dr)`, `None` if that leaves the board
    #[inline]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::at(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// All 64 squares, a1 first, rank by rank
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|i| Square::at((i % 8) as u8, (i / 8) as u8))
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = RulesError;

    fn try_from((file, rank): (u8, u8)) -> RulesResult<Square> {
        Square::new(file, rank)
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.file, square.rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = RulesError;

    fn from_str(s: &str) -> RulesResult<Square> {
        let invalid = || RulesError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square::at(file - b'a', rank - b'1'))
    }
}

/// Stable logical key for a piece
///
/// Color + starting kind + instance index. A promoted pawn keeps its pawn id,
/// so the rendering layer never has to re-key its visual objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId {
    pub color: Color,
    pub kind: PieceKind,
    pub instance: u8,
}

impl PieceId {
    pub const fn new(color: Color, kind: PieceKind, instance: u8) -> Self {
        Self {
            color,
            kind,
            instance,
        }
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.color, self.kind, self.instance)
    }
}

/// A live (or captured) piece and its movement history
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    /// Current kind; differs from `id.kind` only after promotion
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    /// Whether this piece has ever moved (castling and pawn double-step)
    pub has_moved: bool,
}

/// Rook relocation attached to a castling candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastlingDescriptor {
    pub rook_from: Square,
    pub rook_to: Square,
}

/// A provisional legal destination for a piece
///
/// Produced fresh on every [`crate::Game::legal_moves`] query; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveCandidate {
    pub target: Square,
    pub capture: bool,
    pub castling: Option<CastlingDescriptor>,
    /// Square of the pawn removed by an en passant capture
    pub en_passant: Option<Square>,
    /// Kind the pawn becomes on reaching the last rank
    pub promotion: Option<PieceKind>,
}

impl MoveCandidate {
    pub(crate) fn quiet(target: Square) -> Self {
        Self {
            target,
            capture: false,
            castling: None,
            en_passant: None,
            promotion: None,
        }
    }

    pub(crate) fn capture(target: Square) -> Self {
        Self {
            capture: true,
            ..Self::quiet(target)
        }
    }

    pub fn is_castling(&self) -> bool {
        self.castling.is_some()
    }
}

/// Captured piece as reported in a [`MoveResult`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureRecord {
    pub piece: PieceId,
    /// Square the piece stood on (differs from the target for en passant)
    pub square: Square,
    /// Color that made the capture, i.e. whose capture list grew
    pub side: Color,
    /// 0-based position in the capturing side's capture list
    pub slot: usize,
}

/// Rook relocation as reported in a [`MoveResult`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRecord {
    pub rook: PieceId,
    pub rook_from: Square,
    pub rook_to: Square,
}

/// Everything one applied move changed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub piece: PieceId,
    pub from: Square,
    pub new_square: Square,
    pub captured: Option<CaptureRecord>,
    pub castling: Option<CastlingRecord>,
    pub en_passant: bool,
    pub promotion: Option<PieceKind>,
    /// Side to move after this move
    pub active_color: Color,
    pub status: crate::api::GameStatus,
}

impl MoveResult {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
