//! Move execution
//!
//! [`Game::apply_move`] revalidates the requested destination against the
//! current legal set, plays it on a copy of the board and only then commits.
//! Either every side effect lands (capture, relocation, castling rook,
//! promotion, has-moved flags, en passant window, turn flip) or none does.

use crate::api::game::Game;
use crate::board::{BoardState, EnPassantWindow};
use crate::error::{RulesError, RulesResult};
use crate::rules::RuleSet;
use crate::types::{
    CaptureRecord, CastlingRecord, MoveCandidate, MoveResult, Piece, PieceKind, Square,
};
use tracing::{debug, warn};

/// Board-level outcome of playing one candidate
#[derive(Debug, Clone, Copy)]
pub(crate) struct Played {
    pub mover: Piece,
    pub captured: Option<Piece>,
    pub rook: Option<CastlingRecord>,
}

/// Play `candidate` for the piece on `from`, without touching turn or captures
///
/// Shared by the legality filter (on a scratch board) and by
/// [`Game::apply_move`], so simulation and application cannot disagree.
pub(crate) fn play(
    board: &mut BoardState,
    from: Square,
    candidate: &MoveCandidate,
    rules: RuleSet,
) -> RulesResult<Played> {
    let captured = match (candidate.en_passant, candidate.capture) {
        (Some(victim), _) => Some(board.remove(victim)?),
        (None, true) => Some(board.remove(candidate.target)?),
        (None, false) => None,
    };

    // Rook first: the king may land where the rook started
    let rook = match candidate.castling {
        Some(castling) => {
            let rook = board.relocate(castling.rook_from, castling.rook_to)?;
            Some(CastlingRecord {
                rook,
                rook_from: castling.rook_from,
                rook_to: castling.rook_to,
            })
        }
        None => None,
    };

    let id = board.relocate(from, candidate.target)?;
    let mover = board
        .piece_mut(id)
        .ok_or(RulesError::NoPieceAtSquare { square: candidate.target })?;
    if let Some(kind) = candidate.promotion {
        mover.kind = kind;
    }
    let mover = *mover;

    let double_step =
        mover.kind == PieceKind::Pawn && from.rank().abs_diff(mover.square.rank()) == 2;
    let window = if rules.en_passant && double_step {
        from.offset(0, mover.color.forward()).map(|target| EnPassantWindow {
            target,
            victim: mover.square,
        })
    } else {
        None
    };
    board.set_en_passant(window);

    Ok(Played {
        mover,
        captured,
        rook,
    })
}

impl Game {
    /// Apply the move `from` → `to`
    ///
    /// `to` must be the target of one of `legal_moves(from)`; anything else is
    /// rejected with [`RulesError::IllegalMove`] and leaves the game untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::{Color, Game};
    ///
    /// let mut game = Game::new();
    /// let result = game
    ///     .apply_move("e2".parse().unwrap(), "e4".parse().unwrap())
    ///     .unwrap();
    /// assert_eq!(result.active_color, Color::Black);
    /// assert!(!result.is_capture());
    /// ```
    pub fn apply_move(&mut self, from: Square, to: Square) -> RulesResult<MoveResult> {
        let Some(candidate) = self
            .legal_moves(from)
            .into_iter()
            .find(|candidate| candidate.target == to)
        else {
            warn!("[RULES] Rejected move {from}→{to}: not in the legal set");
            return Err(RulesError::IllegalMove { from, to });
        };

        let mut next = self.board.clone();
        let played = play(&mut next, from, &candidate, self.rules)?;

        // Commit
        self.board = next;
        let captured = played.captured.map(|piece| CaptureRecord {
            piece: piece.id,
            square: piece.square,
            side: played.mover.color,
            slot: self.captured.add_capture(piece),
        });
        self.turn.switch();
        let status = self.status();

        debug!(
            "[MOVE] {} {from}→{to}{}{}{}",
            played.mover.id,
            if captured.is_some() { " (capture)" } else { "" },
            if played.rook.is_some() { " (castling)" } else { "" },
            if candidate.promotion.is_some() { " (promotion)" } else { "" },
        );

        Ok(MoveResult {
            piece: played.mover.id,
            from,
            new_square: to,
            captured,
            castling: played.rook,
            en_passant: candidate.en_passant.is_some(),
            promotion: candidate.promotion,
            active_color: self.turn.color,
            status,
        })
    }
}
