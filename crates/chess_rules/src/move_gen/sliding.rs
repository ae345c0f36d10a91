//! Sliding piece move generation (bishop, rook, queen)
//!
//! Each ray is walked until the board edge, an own piece (exclusive) or the
//! first enemy piece (inclusive, tagged capture).

use crate::board::BoardState;
use crate::constants::slider_dirs;
use crate::types::{MoveCandidate, Piece};

pub fn generate_sliding_moves(board: &BoardState, piece: &Piece, moves: &mut Vec<MoveCandidate>) {
    for &(df, dr) in slider_dirs(piece.kind) {
        let mut current = piece.square.offset(df, dr);
        while let Some(target) = current {
            match board.color_at(target) {
                None => moves.push(MoveCandidate::quiet(target)),
                Some(color) => {
                    if color != piece.color {
                        moves.push(MoveCandidate::capture(target));
                    }
                    break;
                }
            }
            current = target.offset(df, dr);
        }
    }
}
