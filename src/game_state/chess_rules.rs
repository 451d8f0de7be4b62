//! Canonical chess-rule constants.
//!
//! Board geometry, the starting layout and the special-move squares live
//! here so the move rules and the board setup read from one place.

use crate::game_state::chess_types::PieceKind;

/// Number of files and ranks.
pub const BOARD_SIZE: i32 = 8;

pub const WHITE_HOME_RANK: i32 = 0;
pub const BLACK_HOME_RANK: i32 = BOARD_SIZE - 1;

/// Back-rank layout from file a to file h, identical for both sides.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The only piece a pawn is promoted to.
pub const PROMOTION_PIECE: PieceKind = PieceKind::Queen;

/// Rook files used by castling, and where the rook lands.
pub const KINGSIDE_ROOK_FILE: i32 = 7;
pub const QUEENSIDE_ROOK_FILE: i32 = 0;
pub const KINGSIDE_ROOK_TARGET_FILE: i32 = 5;
pub const QUEENSIDE_ROOK_TARGET_FILE: i32 = 3;

/// File distance the king travels when castling.
pub const CASTLING_KING_STEP: i32 = 2;
