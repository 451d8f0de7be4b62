//! Bookkeeping that travels with a board: whose turn it is, where the kings
//! stand, how threatened the active king is, and the executed moves.

use crate::board_location::Coordinates;
use crate::game_state::chess_types::{Color, KingThreat};
use crate::moves::chess_move::Move;

#[derive(Clone, Debug)]
pub struct BoardState {
    active_color: Color,
    fields_of_kings: [Option<Coordinates>; 2],
    king_threat: KingThreat,
    moves: Vec<Move>,
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState {
            active_color: Color::White,
            fields_of_kings: [None; 2],
            king_threat: KingThreat::NoThreat,
            moves: Vec::new(),
        }
    }
}

/// What a caller learns after a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostMoveState {
    pub active_color: Color,
    pub king_threat: KingThreat,
}

impl BoardState {
    #[inline]
    pub fn has_turn(&self, color: Color) -> bool {
        self.active_color == color
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub(crate) fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
    }

    pub(crate) fn change_player(&mut self) {
        self.active_color = self.active_color.opposite();
    }

    /// Threat against the active player's king, as of the last update.
    #[inline]
    pub fn king_threat(&self) -> KingThreat {
        self.king_threat
    }

    pub(crate) fn set_king_threat(&mut self, king_threat: KingThreat) {
        self.king_threat = king_threat;
    }

    pub(crate) fn change_field_of_king(&mut self, color: Color, field: Coordinates) {
        self.fields_of_kings[color.index()] = Some(field);
    }

    #[inline]
    pub fn field_of_king(&self, color: Color) -> Option<Coordinates> {
        self.fields_of_kings[color.index()]
    }

    pub fn post_move_state(&self) -> PostMoveState {
        PostMoveState {
            active_color: self.active_color,
            king_threat: self.king_threat,
        }
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// The same state with an empty move history.
    pub(crate) fn without_history(&self) -> Self {
        BoardState {
            active_color: self.active_color,
            fields_of_kings: self.fields_of_kings,
            king_threat: self.king_threat,
            moves: Vec::new(),
        }
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.moves
    }

    pub(crate) fn add_move_to_history(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn remove_move_from_history(&mut self) -> Option<Move> {
        self.moves.pop()
    }
}
