//! Crate root module declarations for the chess referee.
//!
//! The crate validates and applies chess moves on a `Board`, tracks whose
//! turn it is, and classifies the threat against each king. `ChessGame` is
//! the entry point for callers that want field-change notifications.

pub mod board_location;
pub mod chess_errors;
pub mod chess_game;
pub mod piece_record;

pub mod game_state {
    pub mod board;
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod field;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_path;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
}

pub mod utils {
    pub mod render_game_state;
}
