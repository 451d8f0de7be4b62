use crate::game_state::chess_types::MovePathShape;
use crate::moves::chess_move::MoveValidation;

#[inline]
pub fn validate_bishop_move(shape: MovePathShape) -> MoveValidation {
    MoveValidation::from_bool(shape == MovePathShape::Diagonal)
}
