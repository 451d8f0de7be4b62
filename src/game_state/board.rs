//! The 8x8 grid of fields plus the state needed to referee a game on it.
//!
//! `Board` is the single owner of mutable game data. Pieces change only
//! through `set_piece`, which keeps the king locations current and, on a
//! board created with a field journal, records a `FieldChange`. Callers that
//! forward changes to a listener drain the journal after each call.

use std::fmt;

use crate::board_location::Coordinates;
use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board_state::{BoardState, PostMoveState};
use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, BOARD_SIZE};
use crate::game_state::chess_types::{Color, KingThreat, PieceKind};
use crate::game_state::field::{Field, FieldChange};
use crate::move_generation::legal_move_checks::{detect_king_threat, is_castling_through_threat};
use crate::move_generation::legal_move_generator::{
    find_possible_new_fields, find_threatening_fields,
};
use crate::moves::chess_move::Move;
use crate::moves::king_moves::is_castling_attempt;
use crate::piece_record::Piece;
use crate::utils::render_game_state::render_board;

#[derive(Clone, Debug)]
pub struct Board {
    // Indexed [x][y].
    fields: [[Field; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    state: BoardState,
    // Only kept while a consumer drains it.
    journal: Option<Vec<FieldChange>>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// An empty board with White to move.
    pub fn new() -> Self {
        let mut fields = [[Field::new(Coordinates::A1); BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for coordinates in Coordinates::all() {
            fields[coordinates.x() as usize][coordinates.y() as usize] = Field::new(coordinates);
        }

        Board {
            fields,
            state: BoardState::default(),
            journal: None,
        }
    }

    /// An empty board that records every field change until drained.
    pub fn with_field_journal() -> Self {
        Board {
            journal: Some(Vec::new()),
            ..Board::new()
        }
    }

    /// A board with the standard starting position and White to move.
    pub fn new_game() -> Self {
        let mut board = Board::new();
        board.place_starting_position();
        board
    }

    /// Like `new_game`, but journaled; the setup itself is the first batch
    /// of changes.
    pub fn new_game_with_field_journal() -> Self {
        let mut board = Board::with_field_journal();
        board.place_starting_position();
        board
    }

    /// Grid, turn and king bookkeeping without history or journal, for
    /// trying out a move.
    pub(crate) fn scratch_copy(&self) -> Self {
        Board {
            fields: self.fields,
            state: self.state.without_history(),
            journal: None,
        }
    }

    fn place_starting_position(&mut self) {
        for color in [Color::White, Color::Black] {
            let home_rank = color.home_rank();
            let pawn_rank = home_rank + color.pawn_direction();
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let file = file as i32;
                if let (Ok(home), Ok(pawn)) = (
                    Coordinates::new(file, home_rank),
                    Coordinates::new(file, pawn_rank),
                ) {
                    self.set_piece(home, Some(Piece::new(*kind, color)));
                    self.set_piece(pawn, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
    }

    #[inline]
    pub fn field(&self, coordinates: Coordinates) -> &Field {
        &self.fields[coordinates.x() as usize][coordinates.y() as usize]
    }

    #[inline]
    pub fn piece_at(&self, coordinates: Coordinates) -> Option<Piece> {
        self.field(coordinates).piece()
    }

    /// Places `piece` on a field (or clears it with `None`).
    ///
    /// Kings placed here become the tracked king of their color. A journaled
    /// board records every call as a `FieldChange`.
    pub fn set_piece(&mut self, coordinates: Coordinates, piece: Option<Piece>) {
        let change =
            self.fields[coordinates.x() as usize][coordinates.y() as usize].replace_piece(piece);
        if let Some(king) = piece.filter(|piece| piece.kind() == PieceKind::King) {
            self.state.change_field_of_king(king.color(), coordinates);
        }
        if let Some(journal) = self.journal.as_mut() {
            journal.push(change);
        }
    }

    #[inline]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        self.state.active_color()
    }

    /// Threat against the king of the player on turn.
    #[inline]
    pub fn king_threat(&self) -> KingThreat {
        self.state.king_threat()
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.state.last_move()
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.state.history().len()
    }

    #[cfg(test)]
    pub(crate) fn add_move_to_history(&mut self, mv: Move) {
        self.state.add_move_to_history(mv);
    }

    /// Field of the king of `color`, if that king is on the board.
    pub fn king_field(&self, color: Color) -> Option<Coordinates> {
        self.state.field_of_king(color).filter(|field| {
            self.piece_at(*field)
                .is_some_and(|piece| piece.kind() == PieceKind::King && piece.color() == color)
        })
    }

    /// Hands out the field changes recorded since the last drain. Always empty
    /// for a board without a field journal.
    pub fn drain_field_changes(&mut self) -> Vec<FieldChange> {
        self.journal.as_mut().map(std::mem::take).unwrap_or_default()
    }

    /// Moves the piece on `source` to `target` for the player on turn.
    ///
    /// # Errors
    ///
    /// * `NoValidSource` - `source` is empty.
    /// * `DoesNotHaveTurn` - the piece belongs to the waiting player.
    /// * `NoValidTarget` - the piece cannot reach `target`.
    /// * `KingChecked` - the move leaves or puts the mover's king under threat.
    ///
    /// On error the board, its history and its journal are as before the call.
    pub fn execute_move(
        &mut self,
        source: Coordinates,
        target: Coordinates,
    ) -> ChessResult<PostMoveState> {
        let piece = self
            .piece_at(source)
            .ok_or(ChessErrors::NoValidSource(source))?;
        let mover = piece.color();
        if !self.state.has_turn(mover) {
            return Err(ChessErrors::DoesNotHaveTurn(mover));
        }

        let mut mv = Move::new(self, source, target)?;
        if is_castling_attempt(&mv)
            && mv.validate(self).is_valid()
            && is_castling_through_threat(self, &mv)
        {
            // Starting in check reports the real threat level.
            let threat = match detect_king_threat(self, source) {
                KingThreat::NoThreat => KingThreat::Check,
                threat => threat,
            };
            log::debug!("{mover:?} castling {source} -> {target} rejected: king {threat:?}");
            return Err(ChessErrors::KingChecked(threat));
        }

        let journal_len = self.journal.as_ref().map(Vec::len);
        let previous_threat = self.state.king_threat();

        if let Err(error) = mv.execute(self) {
            log::debug!("{mover:?} move {source} -> {target} rejected: {error}");
            return Err(error);
        }
        self.state.add_move_to_history(mv);

        let own_threat = self.threat_for(mover);
        if own_threat != KingThreat::NoThreat {
            if let Some(mut rejected) = self.state.remove_move_from_history() {
                if let Err(error) = rejected.revert_move(self) {
                    log::warn!("could not take back {source} -> {target}: {error}");
                }
            }
            self.state.set_king_threat(previous_threat);
            if let (Some(journal), Some(len)) = (self.journal.as_mut(), journal_len) {
                journal.truncate(len);
            }
            log::debug!("{mover:?} move {source} -> {target} rejected: own king {own_threat:?}");
            return Err(ChessErrors::KingChecked(own_threat));
        }

        self.state.change_player();
        let threat = self.threat_for(self.state.active_color());
        self.state.set_king_threat(threat);

        log::debug!("{mover:?} moved {source} -> {target}, opponent king: {threat:?}");
        log::trace!("\n{}", self);
        Ok(self.state.post_move_state())
    }

    /// Takes back the most recent move. Does nothing on an empty history.
    pub fn revert_last_move(&mut self) {
        let Some(mut last) = self.state.remove_move_from_history() else {
            log::debug!("no move to revert");
            return;
        };

        if let Err(error) = last.revert_move(self) {
            log::warn!(
                "history entry {} -> {} could not be reverted: {error}",
                last.source(),
                last.target()
            );
        }

        let mover = last.piece_source().color();
        self.state.set_active_color(mover);
        let threat = self.threat_for(mover);
        self.state.set_king_threat(threat);
        log::debug!(
            "reverted {} -> {}, {mover:?} to move",
            last.source(),
            last.target()
        );
    }

    /// Classifies the threat against the king standing on `king_field`.
    ///
    /// Returns `NoThreat` when that field holds no king.
    pub fn detect_king_threat(&self, king_field: Coordinates) -> KingThreat {
        detect_king_threat(self, king_field)
    }

    /// Fields the piece on `coordinates` can legally move to.
    pub fn find_possible_new_fields(&self, coordinates: Coordinates) -> Vec<Coordinates> {
        find_possible_new_fields(self, coordinates)
    }

    /// Fields holding pieces that threaten `coordinates`.
    pub fn find_threatening_fields(&self, coordinates: Coordinates) -> Vec<Coordinates> {
        find_threatening_fields(self, coordinates)
    }

    fn threat_for(&self, color: Color) -> KingThreat {
        self.king_field(color)
            .map_or(KingThreat::NoThreat, |king_field| {
                detect_king_threat(self, king_field)
            })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
