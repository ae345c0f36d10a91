//! Pawn move generation
//!
//! - one step forward onto an empty square
//! - two steps from an unmoved pawn when both squares are empty
//! - diagonal forward capture, only onto an enemy piece
//! - en passant onto the square a double-stepped enemy pawn just skipped
//! - candidates reaching the last rank carry a queen promotion tag

use crate::board::BoardState;
use crate::rules::RuleSet;
use crate::types::{MoveCandidate, Piece, PieceKind};

pub fn generate_pawn_moves(
    board: &BoardState,
    piece: &Piece,
    rules: RuleSet,
    moves: &mut Vec<MoveCandidate>,
) {
    let forward = piece.color.forward();
    let promotes = |candidate: MoveCandidate| -> MoveCandidate {
        if rules.promotion && candidate.target.rank() == piece.color.promotion_rank() {
            MoveCandidate {
                promotion: Some(PieceKind::Queen),
                ..candidate
            }
        } else {
            candidate
        }
    };

    if let Some(one) = piece.square.offset(0, forward) {
        if board.is_empty(one) {
            moves.push(promotes(MoveCandidate::quiet(one)));

            if !piece.has_moved {
                if let Some(two) = one.offset(0, forward) {
                    if board.is_empty(two) {
                        moves.push(promotes(MoveCandidate::quiet(two)));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let Some(target) = piece.square.offset(df, forward) else {
            continue;
        };
        match board.color_at(target) {
            Some(color) if color != piece.color => {
                moves.push(promotes(MoveCandidate::capture(target)));
            }
            Some(_) => {}
            None => {
                if !rules.en_passant {
                    continue;
                }
                let Some(window) = board.en_passant() else {
                    continue;
                };
                let victim_is_enemy_pawn = board.piece_at(window.victim).is_some_and(|victim| {
                    victim.color != piece.color && victim.kind == PieceKind::Pawn
                });
                if window.target == target && victim_is_enemy_pawn {
                    moves.push(MoveCandidate {
                        en_passant: Some(window.victim),
                        ..MoveCandidate::capture(target)
                    });
                }
            }
        }
    }
}
