//! Game facade: owns the current board and forwards its field changes to a
//! single listener.

use crate::board_location::Coordinates;
use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::board_state::PostMoveState;
use crate::game_state::field::FieldListener;

#[derive(Default)]
pub struct ChessGame {
    board: Option<Board>,
    listener: Option<Box<dyn FieldListener>>,
}

impl ChessGame {
    pub fn new() -> Self {
        ChessGame::default()
    }

    /// Discards any running game and sets up the starting position. The
    /// listener receives one change per placed piece right away.
    pub fn start_new_game(&mut self, listener: impl FieldListener + 'static) {
        self.board = Some(Board::new_game_with_field_journal());
        self.listener = Some(Box::new(listener));
        log::info!("new game started");
        self.forward_field_changes();
    }

    pub fn execute_move(
        &mut self,
        source: Coordinates,
        target: Coordinates,
    ) -> ChessResult<PostMoveState> {
        let result = self.board_mut()?.execute_move(source, target);
        self.forward_field_changes();
        result
    }

    pub fn revert_last_move(&mut self) -> ChessResult<()> {
        self.board_mut()?.revert_last_move();
        self.forward_field_changes();
        Ok(())
    }

    pub fn find_possible_new_fields(&self, coordinates: Coordinates) -> ChessResult<Vec<Coordinates>> {
        Ok(self.board()?.find_possible_new_fields(coordinates))
    }

    pub fn find_threatening_fields(&self, coordinates: Coordinates) -> ChessResult<Vec<Coordinates>> {
        Ok(self.board()?.find_threatening_fields(coordinates))
    }

    pub fn board(&self) -> ChessResult<&Board> {
        self.board.as_ref().ok_or(ChessErrors::GameNotStarted)
    }

    fn board_mut(&mut self) -> ChessResult<&mut Board> {
        self.board.as_mut().ok_or(ChessErrors::GameNotStarted)
    }

    fn forward_field_changes(&mut self) {
        let (Some(board), Some(listener)) = (self.board.as_mut(), self.listener.as_mut()) else {
            return;
        };
        for change in board.drain_field_changes() {
            listener.field_changed(&change);
        }
    }
}
