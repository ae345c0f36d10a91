//! Attack detection and square checking
//!
//! Used by the legality filter (does this move leave the king attacked?) and by
//! castling (may the king leave or cross this square?).
//!
//! ## Algorithm
//!
//! Rather than generating every enemy move, look outward from the target
//! square: knight jumps, king steps and pawn diagonals are single probes, and
//! each sliding ray stops at the first piece it meets.

use crate::board::BoardState;
use crate::constants::{BISHOP_DIRS, KING_DIRS, KNIGHT_JUMPS, ROOK_DIRS};
use crate::types::{Color, PieceKind, Square};

/// Whether any piece of `by` attacks `square`
pub fn is_square_attacked(board: &BoardState, square: Square, by: Color) -> bool {
    // A pawn of `by` attacks diagonally forward, so look one rank behind
    let pawn_rank = -by.forward();
    if holds(board, square.offset(1, pawn_rank), by, &[PieceKind::Pawn])
        || holds(board, square.offset(-1, pawn_rank), by, &[PieceKind::Pawn])
    {
        return true;
    }

    if KNIGHT_JUMPS
        .iter()
        .any(|&(df, dr)| holds(board, square.offset(df, dr), by, &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_DIRS
        .iter()
        .any(|&(df, dr)| holds(board, square.offset(df, dr), by, &[PieceKind::King]))
    {
        return true;
    }

    ray_hits(board, square, &ROOK_DIRS, by, &[PieceKind::Rook, PieceKind::Queen])
        || ray_hits(board, square, &BISHOP_DIRS, by, &[PieceKind::Bishop, PieceKind::Queen])
}

/// Whether the king of `color` is currently attacked
pub fn is_in_check(board: &BoardState, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opposite()))
}

fn holds(board: &BoardState, square: Option<Square>, by: Color, kinds: &[PieceKind]) -> bool {
    square
        .and_then(|sq| board.piece_at(sq))
        .is_some_and(|piece| piece.color == by && kinds.contains(&piece.kind))
}

fn ray_hits(
    board: &BoardState,
    from: Square,
    dirs: &[(i8, i8)],
    by: Color,
    kinds: &[PieceKind],
) -> bool {
    dirs.iter().any(|&(df, dr)| {
        let mut current = from.offset(df, dr);
        while let Some(sq) = current {
            if let Some(piece) = board.piece_at(sq) {
                return piece.color == by && kinds.contains(&piece.kind);
            }
            current = sq.offset(df, dr);
        }
        false
    })
}
