use crate::game_state::chess_types::MovePathShape;
use crate::moves::chess_move::MoveValidation;

/// Queens combine rook and bishop movement.
#[inline]
pub fn validate_queen_move(shape: MovePathShape) -> MoveValidation {
    MoveValidation::from_bool(shape != MovePathShape::Jump)
}
