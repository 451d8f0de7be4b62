//! Moves between two fields and their validation, execution and revert.
//!
//! A `Move` snapshots the pieces on its source and target when it is built,
//! so reverting restores those exact values (move counters included). A
//! validated move can own a sub-move: the rook relocation of a castling or
//! the queen placement of a promotion. Sub-moves run after their parent and
//! are reverted before it.

use std::mem;

use crate::board_location::Coordinates;
use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{MovePathShape, PieceKind};
use crate::moves::move_path::{create_jump_path, create_straight_path};
use crate::piece_record::Piece;

/// Outcome of validating a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveValidation {
    Invalid,
    Valid,
    /// Valid, and the given companion move has to run with it.
    ValidWithSubMove(Box<Move>),
}

impl MoveValidation {
    #[inline]
    pub fn from_bool(valid: bool) -> Self {
        if valid {
            MoveValidation::Valid
        } else {
            MoveValidation::Invalid
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !matches!(self, MoveValidation::Invalid)
    }

    pub fn sub_move(&self) -> Option<&Move> {
        match self {
            MoveValidation::ValidWithSubMove(sub_move) => Some(sub_move),
            MoveValidation::Invalid | MoveValidation::Valid => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum MoveStatus {
    Pending,
    Executed(MoveValidation),
    Reverted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    source: Coordinates,
    target: Coordinates,
    piece_source: Piece,
    piece_target: Option<Piece>,
    status: MoveStatus,
    // Pawn taken en passant: it does not stand on the target field.
    en_passant_capture: Option<(Coordinates, Piece)>,
}

impl Move {
    /// A move of the piece currently standing on `source` to `target`.
    pub fn new(board: &Board, source: Coordinates, target: Coordinates) -> ChessResult<Self> {
        let piece_source = board
            .piece_at(source)
            .ok_or(ChessErrors::NoValidSource(source))?;
        Ok(Move::from_parts(
            source,
            target,
            piece_source,
            board.piece_at(target),
        ))
    }

    pub(crate) fn from_parts(
        source: Coordinates,
        target: Coordinates,
        piece_source: Piece,
        piece_target: Option<Piece>,
    ) -> Self {
        Move {
            source,
            target,
            piece_source,
            piece_target,
            status: MoveStatus::Pending,
            en_passant_capture: None,
        }
    }

    /// Sets `piece` on `target` without a source field (pawn promotion).
    pub(crate) fn placement(target: Coordinates, piece: Piece) -> Self {
        Move::from_parts(target, target, piece, None)
    }

    #[inline]
    pub fn source(&self) -> Coordinates {
        self.source
    }

    #[inline]
    pub fn target(&self) -> Coordinates {
        self.target
    }

    /// The moving piece as it was before the move.
    #[inline]
    pub fn piece_source(&self) -> Piece {
        self.piece_source
    }

    /// The occupant of the target before the move.
    #[inline]
    pub fn piece_target(&self) -> Option<Piece> {
        self.piece_target
    }

    /// The companion move chosen when this move was executed.
    pub fn sub_move(&self) -> Option<&Move> {
        match &self.status {
            MoveStatus::Executed(validation) => validation.sub_move(),
            MoveStatus::Pending | MoveStatus::Reverted => None,
        }
    }

    #[inline]
    fn is_placement(&self) -> bool {
        self.source == self.target
    }

    /// Checks this move against the path geometry and the piece rules.
    pub fn validate(&self, board: &Board) -> MoveValidation {
        if let Some(piece_target) = self.piece_target {
            if piece_target.color() == self.piece_source.color() {
                return MoveValidation::Invalid;
            }
        }

        let d_x = self.target.x() - self.source.x();
        let d_y = self.target.y() - self.source.y();

        let path = if d_x != 0 && d_x.abs() == d_y.abs() {
            create_straight_path(board, self.source, d_x, d_y, MovePathShape::Diagonal)
        } else if (d_x == 0) != (d_y == 0) {
            create_straight_path(board, self.source, d_x, d_y, MovePathShape::Linear)
        } else if matches!((d_x.abs(), d_y.abs()), (1, 2) | (2, 1)) {
            create_jump_path(self.source, d_x, d_y)
        } else {
            return MoveValidation::Invalid;
        };

        if !path.contains(self.target) {
            return MoveValidation::Invalid;
        }

        self.piece_source.is_move_valid(path.shape(), self, board)
    }

    /// Validates and applies this move, including its sub-move.
    ///
    /// # Errors
    ///
    /// * `AlreadyExecuted` - the move ran before.
    /// * `NoValidTarget` - validation failed; the board is untouched.
    pub fn execute(&mut self, board: &mut Board) -> ChessResult<()> {
        if self.status != MoveStatus::Pending {
            return Err(ChessErrors::AlreadyExecuted);
        }

        let mut validation = self.validate(board);
        match &mut validation {
            MoveValidation::Invalid => {
                return Err(ChessErrors::NoValidTarget {
                    from: self.source,
                    to: self.target,
                })
            }
            MoveValidation::Valid => self.move_pieces(board),
            MoveValidation::ValidWithSubMove(sub_move) => {
                self.move_pieces(board);
                sub_move.move_pieces(board);
            }
        }

        self.status = MoveStatus::Executed(validation);
        Ok(())
    }

    /// Undoes a successful `execute`, sub-move first.
    ///
    /// # Errors
    ///
    /// * `MoveNotExecuted` - there is nothing to undo.
    pub fn revert_move(&mut self, board: &mut Board) -> ChessResult<()> {
        let validation = match mem::replace(&mut self.status, MoveStatus::Reverted) {
            MoveStatus::Executed(validation) => validation,
            other => {
                self.status = other;
                return Err(ChessErrors::MoveNotExecuted);
            }
        };

        if let Some(sub_move) = validation.sub_move() {
            sub_move.restore_pieces(board);
        }
        self.restore_pieces(board);
        Ok(())
    }

    fn move_pieces(&mut self, board: &mut Board) {
        let moved = self.piece_source.with_registered_move();
        if self.is_placement() {
            board.set_piece(self.target, Some(moved));
            return;
        }

        board.set_piece(self.source, None);
        board.set_piece(self.target, Some(moved));

        let diagonal_step = self.source.x() != self.target.x();
        if self.piece_source.kind() == PieceKind::Pawn && diagonal_step && self.piece_target.is_none() {
            // The passed pawn stands beside the source, on the target's file.
            if let Ok(passed) = Coordinates::new(self.target.x(), self.source.y()) {
                if let Some(captured) = board.piece_at(passed) {
                    self.en_passant_capture = Some((passed, captured));
                    board.set_piece(passed, None);
                }
            }
        }
    }

    fn restore_pieces(&self, board: &mut Board) {
        if self.is_placement() {
            board.set_piece(self.target, self.piece_target);
            return;
        }

        board.set_piece(self.source, Some(self.piece_source));
        board.set_piece(self.target, self.piece_target);
        if let Some((passed, captured)) = self.en_passant_capture {
            board.set_piece(passed, Some(captured));
        }
    }
}
