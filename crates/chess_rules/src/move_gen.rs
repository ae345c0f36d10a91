//! Legal move generation
//!
//! Candidates are produced per piece kind (see the submodules), then passed
//! through the legality filter: each candidate is played on a scratch copy of
//! the board and discarded if the mover's own king is attacked afterwards.
//!
//! The returned `Vec` has set semantics. Callers must only rely on membership,
//! never on order.

mod attack;
mod king;
mod knight;
mod pawn;
mod sliding;


pub use attack::{is_in_check, is_square_attacked};

use crate::api::moves::play;
use crate::board::BoardState;
use crate::rules::RuleSet;
use crate::types::{Color, MoveCandidate, Piece, PieceKind, Square};

/// Candidates for `piece` before the legality filter
pub fn pseudo_legal_moves(board: &BoardState, piece: &Piece, rules: RuleSet) -> Vec<MoveCandidate> {
    let mut moves = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, piece, rules, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(board, piece, &mut moves),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            sliding::generate_sliding_moves(board, piece, &mut moves)
        }
        PieceKind::King => {
            king::generate_king_moves(board, piece, &mut moves);
            king::generate_castling_moves(board, piece, &mut moves);
        }
    }
    moves
}

/// Legal destinations for the piece on `from`
///
/// Empty when `from` is empty or holds a piece of the side not to move.
pub fn legal_moves(
    board: &BoardState,
    from: Square,
    active: Color,
    rules: RuleSet,
) -> Vec<MoveCandidate> {
    let Some(piece) = board.piece_at(from).copied() else {
        return Vec::new();
    };
    if piece.color != active {
        return Vec::new();
    }

    pseudo_legal_moves(board, &piece, rules)
        .into_iter()
        .filter(|candidate| !leaves_king_attacked(board, &piece, candidate, rules))
        .collect()
}

/// Whether `color` has at least one legal move
pub fn has_any_legal_move(board: &BoardState, color: Color, rules: RuleSet) -> bool {
    board.pieces_of(color).any(|piece| {
        pseudo_legal_moves(board, piece, rules)
            .iter()
            .any(|candidate| !leaves_king_attacked(board, piece, candidate, rules))
    })
}

fn leaves_king_attacked(
    board: &BoardState,
    piece: &Piece,
    candidate: &MoveCandidate,
    rules: RuleSet,
) -> bool {
    let mut scratch = board.clone();
    if play(&mut scratch, piece.square, candidate, rules).is_err() {
        return true;
    }
    // Positions built without a king have nothing to protect
    match scratch.king_square(piece.color) {
        Some(king) => is_square_attacked(&scratch, king, piece.color.opposite()),
        None => false,
    }
}
