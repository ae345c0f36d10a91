//! Knight move generation
//!
//! Fixed L-shaped jumps, filtered by board bounds and own-piece occupancy.
//! Knights jump, so nothing in between matters.

use crate::board::BoardState;
use crate::constants::KNIGHT_JUMPS;
use crate::types::{MoveCandidate, Piece};

pub fn generate_knight_moves(board: &BoardState, piece: &Piece, moves: &mut Vec<MoveCandidate>) {
    for &(df, dr) in &KNIGHT_JUMPS {
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
