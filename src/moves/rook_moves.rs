use crate::game_state::chess_types::MovePathShape;
use crate::moves::chess_move::MoveValidation;

/// Rooks slide along ranks and files; the path already enforces blocking.
#[inline]
pub fn validate_rook_move(shape: MovePathShape) -> MoveValidation {
    MoveValidation::from_bool(shape == MovePathShape::Linear)
}
