//! King movement: single steps and castling.
//!
//! Castling is validated on piece state only (neither piece moved, nothing
//! between them). Whether the king leaves, crosses or lands on a threatened
//! field is decided by the board, see `legal_move_checks`.

use crate::board_location::Coordinates;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    CASTLING_KING_STEP, KINGSIDE_ROOK_FILE, KINGSIDE_ROOK_TARGET_FILE, QUEENSIDE_ROOK_FILE,
    QUEENSIDE_ROOK_TARGET_FILE,
};
use crate::game_state::chess_types::{MovePathShape, PieceKind};
use crate::moves::chess_move::{Move, MoveValidation};
use crate::piece_record::Piece;

pub fn validate_king_move(
    king: &Piece,
    shape: MovePathShape,
    mv: &Move,
    board: &Board,
) -> MoveValidation {
    let d_x = mv.target().x() - mv.source().x();
    let d_y = mv.target().y() - mv.source().y();

    if d_x.abs() == CASTLING_KING_STEP && shape == MovePathShape::Linear && !king.has_moved() {
        if let Some(rook_move) = castling_rook_move(king, mv.source(), d_x, board) {
            return MoveValidation::ValidWithSubMove(Box::new(rook_move));
        }
    }

    MoveValidation::from_bool(shape != MovePathShape::Jump && d_x.abs() <= 1 && d_y.abs() <= 1)
}

/// Returns true if `mv` has the shape of a castling: an unmoved king
/// travelling two files along its rank.
pub fn is_castling_attempt(mv: &Move) -> bool {
    mv.piece_source().kind() == PieceKind::King
        && !mv.piece_source().has_moved()
        && mv.source().y() == mv.target().y()
        && (mv.target().x() - mv.source().x()).abs() == CASTLING_KING_STEP
}

fn castling_rook_move(king: &Piece, king_field: Coordinates, d_x: i32, board: &Board) -> Option<Move> {
    let (rook_file, rook_target_file) = if d_x > 0 {
        (KINGSIDE_ROOK_FILE, KINGSIDE_ROOK_TARGET_FILE)
    } else {
        (QUEENSIDE_ROOK_FILE, QUEENSIDE_ROOK_TARGET_FILE)
    };
    let rank = king_field.y();
    let rook_field = Coordinates::new(rook_file, rank).ok()?;
    let rook = board.piece_at(rook_field)?;

    if rook.kind() != PieceKind::Rook || rook.color() != king.color() || rook.has_moved() {
        return None;
    }

    let step = d_x.signum();
    let mut file = king_field.x() + step;
    while file != rook_file {
        if board.field(Coordinates::new(file, rank).ok()?).has_piece() {
            return None;
        }
        file += step;
    }

    let rook_target = Coordinates::new(rook_target_file, rank).ok()?;
    Some(Move::from_parts(
        rook_field,
        rook_target,
        rook,
        board.piece_at(rook_target),
    ))
}
