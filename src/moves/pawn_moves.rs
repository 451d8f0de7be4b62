//! Pawn movement: forward steps, diagonal captures, en passant and promotion.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::PROMOTION_PIECE;
use crate::game_state::chess_types::{MovePathShape, PieceKind};
use crate::moves::chess_move::{Move, MoveValidation};
use crate::piece_record::Piece;

pub fn validate_pawn_move(
    pawn: &Piece,
    shape: MovePathShape,
    mv: &Move,
    board: &Board,
) -> MoveValidation {
    if shape == MovePathShape::Jump {
        return MoveValidation::Invalid;
    }

    let color = pawn.color();
    let forward = color.pawn_direction();
    let source = mv.source();
    let target = mv.target();
    let d_x = target.x() - source.x();
    let d_y = target.y() - source.y();
    let target_piece = mv.piece_target();

    let valid = if d_x == 0 {
        let one_step = d_y == forward;
        let two_steps = d_y == 2 * forward
            && !pawn.has_moved()
            && source
                .offset(0, forward)
                .is_ok_and(|intermediate| !board.field(intermediate).has_piece());
        target_piece.is_none() && (one_step || two_steps)
    } else if d_x.abs() == 1 && d_y == forward {
        match target_piece {
            Some(occupant) => occupant.color() != color,
            None => is_en_passant_possible(board.last_move(), pawn, mv),
        }
    } else {
        false
    };

    if !valid {
        return MoveValidation::Invalid;
    }

    if target.y() == color.promotion_rank() {
        let promoted = Piece::new(PROMOTION_PIECE, color);
        return MoveValidation::ValidWithSubMove(Box::new(Move::placement(target, promoted)));
    }

    MoveValidation::Valid
}

/// En passant is possible right after an opposing pawn advanced two steps and
/// landed beside `pawn`, and `mv` steps diagonally onto that pawn's file.
fn is_en_passant_possible(last_move: Option<&Move>, pawn: &Piece, mv: &Move) -> bool {
    let Some(last_move) = last_move else {
        return false;
    };
    let passed = last_move.target();

    last_move.piece_source().kind() == PieceKind::Pawn
        && last_move.piece_source().color() != pawn.color()
        && (passed.y() - last_move.source().y()).abs() == 2
        && passed.y() == mv.source().y()
        && (passed.x() - mv.source().x()).abs() == 1
        && passed.x() == mv.target().x()
}
