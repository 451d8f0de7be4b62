//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. Every fallible
//! operation (coordinate construction, move validation and execution, the
//! game facade) returns `ChessResult<T>` so callers can match on the exact
//! failure and present it or recover from it.
//!
//! Usage guidelines:
//! - Input errors (`OutOfRange`, `InvalidAlgebraic`) are raised before the
//!   board is touched.
//! - Move errors (`NoValidSource`, `DoesNotHaveTurn`, `NoValidTarget`,
//!   `KingChecked`) leave the board exactly as it was before the call.
//! - `AlreadyExecuted` and `MoveNotExecuted` signal misuse of a `Move`
//!   value and are not expected from the `Board` or `ChessGame` surface.

use crate::board_location::Coordinates;
use crate::game_state::chess_types::{Color, KingThreat};

/// Unified error type for the rules engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Coordinates outside of the 8x8 board were requested.
    ///
    /// Payload: the offending (x, y) pair.
    #[error("coordinates ({x}, {y}) are outside the board")]
    OutOfRange { x: i32, y: i32 },

    /// A square in algebraic notation (for example `"e4"`) could not be parsed.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraic(String),

    /// The source field of a move holds no piece.
    #[error("no piece on source field {0}")]
    NoValidSource(Coordinates),

    /// The piece on the source field belongs to the player who is not on turn.
    ///
    /// Payload: the color of the piece that was asked to move.
    #[error("{0:?} does not have the turn")]
    DoesNotHaveTurn(Color),

    /// The move violates the path or piece rules.
    ///
    /// Payload: the requested origin and destination.
    #[error("{from} -> {to} is not a valid move")]
    NoValidTarget { from: Coordinates, to: Coordinates },

    /// The move would leave (or put) the mover's own king threatened.
    ///
    /// The move has already been reverted when this is returned.
    #[error("move leaves own king in {0:?}")]
    KingChecked(KingThreat),

    /// A `Move` value was executed a second time.
    #[error("move has already been executed")]
    AlreadyExecuted,

    /// A `Move` value was reverted without a successful execute.
    #[error("move has not been executed")]
    MoveNotExecuted,

    /// The game facade was used before `start_new_game`.
    #[error("no game has been started")]
    GameNotStarted,
}

/// Result alias used across the crate.
pub type ChessResult<T> = Result<T, ChessErrors>;
