//! King move generation
//!
//! Kings move one square in any direction, filtered by bounds and own-piece
//! occupancy. Squares attacked by the opponent are removed later by the
//! legality filter.
//!
//! ## Castling
//!
//! A castling candidate is generated for each same-colored rook on the king's
//! rank when:
//! - neither the king nor that rook has ever moved
//! - every square strictly between them is empty
//! - the king is not in check and the square it crosses is not attacked
//!
//! The king lands two squares toward the rook and the rook lands on the square
//! the king crossed. Whether the landing square is attacked is left to the
//! legality filter, like any other king move.

use super::attack::is_square_attacked;
use crate::board::BoardState;
use crate::constants::KING_DIRS;
use crate::types::{CastlingDescriptor, MoveCandidate, Piece, PieceKind, Square};

pub fn generate_king_moves(board: &BoardState, piece: &Piece, moves: &mut Vec<MoveCandidate>) {
    for &(df, dr) in &KING_DIRS {
        let Some(target) = piece.square.offset(df, dr) else {
            continue;
        };
        match board.color_at(target) {
            None => moves.push(MoveCandidate::quiet(target)),
            Some(color) if color != piece.color => moves.push(MoveCandidate::capture(target)),
            Some(_) => {}
        }
    }
}

pub fn generate_castling_moves(board: &BoardState, king: &Piece, moves: &mut Vec<MoveCandidate>) {
    if king.has_moved {
        return;
    }
    let enemy = king.color.opposite();
    if is_square_attacked(board, king.square, enemy) {
        return;
    }

    let rooks = board.pieces_of(king.color).filter(|p| {
        p.kind == PieceKind::Rook && !p.has_moved && p.square.rank() == king.square.rank()
    });

    for rook in rooks {
        let dir: i8 = if rook.square.file() > king.square.file() { 1 } else { -1 };
        if !path_is_empty(board, king.square, rook.square, dir) {
            continue;
        }
        let (Some(crossed), Some(landing)) =
            (king.square.offset(dir, 0), king.square.offset(2 * dir, 0))
        else {
            continue;
        };
        // Rook adjacent to the king: nowhere to land
        if crossed == rook.square {
            continue;
        }
        if is_square_attacked(board, crossed, enemy) {
            continue;
        }
        moves.push(MoveCandidate {
            castling: Some(CastlingDescriptor {
                rook_from: rook.square,
                rook_to: crossed,
            }),
            ..MoveCandidate::quiet(landing)
        });
    }
}

fn path_is_empty(board: &BoardState, from: Square, to: Square, dir: i8) -> bool {
    let mut current = from.offset(dir, 0);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(dir, 0);
    }
    false
}
