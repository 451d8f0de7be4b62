//! The piece value carried by a field.
//!
//! A `Piece` is plain data: its kind, its color and how often it has been
//! displaced. The per-kind movement rules live in `moves::*_moves` and are
//! dispatched here with an exhaustive `match`, so a new kind cannot be added
//! without deciding each rule for it.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, MovePathShape, PieceKind};
use crate::moves::bishop_moves::validate_bishop_move;
use crate::moves::chess_move::{Move, MoveValidation};
use crate::moves::king_moves::validate_king_move;
use crate::moves::knight_moves::validate_knight_move;
use crate::moves::pawn_moves::validate_pawn_move;
use crate::moves::queen_moves::validate_queen_move;
use crate::moves::rook_moves::validate_rook_move;

const LINEAR_ONLY: &[MovePathShape] = &[MovePathShape::Linear];
const DIAGONAL_ONLY: &[MovePathShape] = &[MovePathShape::Diagonal];
const JUMP_ONLY: &[MovePathShape] = &[MovePathShape::Jump];
const STRAIGHT: &[MovePathShape] = &[MovePathShape::Linear, MovePathShape::Diagonal];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    move_count: u16,
}

impl Piece {
    /// A piece that has never moved.
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            move_count: 0,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Number of times this piece has been displaced by an executed move.
    #[inline]
    pub const fn move_count(&self) -> u16 {
        self.move_count
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// The same piece after one more executed move.
    #[inline]
    pub(crate) const fn with_registered_move(self) -> Self {
        Piece {
            move_count: self.move_count.saturating_add(1),
            ..self
        }
    }

    /// Checks the kind-specific rules for `mv`, which runs along a path of `shape`.
    pub fn is_move_valid(&self, shape: MovePathShape, mv: &Move, board: &Board) -> MoveValidation {
        match self.kind {
            PieceKind::Pawn => validate_pawn_move(self, shape, mv, board),
            PieceKind::Knight => validate_knight_move(shape),
            PieceKind::Bishop => validate_bishop_move(shape),
            PieceKind::Rook => validate_rook_move(shape),
            PieceKind::Queen => validate_queen_move(shape),
            PieceKind::King => validate_king_move(self, shape, mv, board),
        }
    }

    /// Whether this piece may stand on a field an opponent threatens.
    pub const fn can_move_to_threatened_field(&self) -> bool {
        match self.kind {
            PieceKind::King => false,
            PieceKind::Pawn
            | PieceKind::Knight
            | PieceKind::Bishop
            | PieceKind::Rook
            | PieceKind::Queen => true,
        }
    }

    /// Path shapes this piece moves along.
    pub const fn valid_shapes(&self) -> &'static [MovePathShape] {
        match self.kind {
            PieceKind::Rook => LINEAR_ONLY,
            PieceKind::Bishop => DIAGONAL_ONLY,
            PieceKind::Knight => JUMP_ONLY,
            PieceKind::Queen | PieceKind::King | PieceKind::Pawn => STRAIGHT,
        }
    }
}
