//! Per-field move queries: where a piece may go and who attacks a field.

use crate::board_location::Coordinates;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::move_generation::legal_move_checks::{
    find_threatening_move_paths, is_castling_through_threat, is_king_destination_safe,
};
use crate::moves::chess_move::Move;
use crate::moves::king_moves::is_castling_attempt;
use crate::moves::move_path::find_all_move_paths;

/// Fields the piece on `source` may move to.
///
/// Kings are only offered fields on which they end up unthreatened. Other
/// pieces are not checked for pins; `Board::execute_move` rejects those moves.
pub fn find_possible_new_fields(board: &Board, source: Coordinates) -> Vec<Coordinates> {
    let Some(piece) = board.piece_at(source) else {
        return Vec::new();
    };

    let mut fields = Vec::new();
    for path in find_all_move_paths(board, source, true) {
        for &target in path.fields() {
            let occupant = board.piece_at(target);
            if occupant.is_some_and(|other| other.color() == piece.color()) {
                continue;
            }

            let candidate = Move::from_parts(source, target, piece, occupant);
            if !piece
                .is_move_valid(path.shape(), &candidate, board)
                .is_valid()
            {
                continue;
            }

            if piece.kind() == PieceKind::King {
                if is_castling_attempt(&candidate) && is_castling_through_threat(board, &candidate)
                {
                    continue;
                }
                if !is_king_destination_safe(board, source, target) {
                    continue;
                }
            }

            fields.push(target);
        }
    }
    fields
}

/// Fields holding a piece that threatens `field`.
///
/// The threatened side is the occupant's color, or the player on turn when
/// `field` is empty.
pub fn find_threatening_fields(board: &Board, field: Coordinates) -> Vec<Coordinates> {
    let threatened_color = board
        .piece_at(field)
        .map_or(board.active_color(), |piece| piece.color());

    find_threatening_move_paths(board, field, threatened_color, true)
        .iter()
        .filter_map(|path| path.last_field())
        .collect()
}
