//! Small value types shared by every part of the rules engine.

use crate::game_state::chess_rules::{BLACK_HOME_RANK, WHITE_HOME_RANK};

/// Side owning a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step of a forward pawn move.
    #[inline]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding this side's king and rooks at the start of a game.
    #[inline]
    pub const fn home_rank(self) -> i32 {
        match self {
            Color::White => WHITE_HOME_RANK,
            Color::Black => BLACK_HOME_RANK,
        }
    }

    /// Rank on which this side's pawns are promoted.
    #[inline]
    pub const fn promotion_rank(self) -> i32 {
        self.opposite().home_rank()
    }
}

/// Piece kind (color is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// Geometric category of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovePathShape {
    /// Along a rank or a file.
    Linear,
    Diagonal,
    /// Knight L-shape.
    Jump,
}

/// How badly a king is threatened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KingThreat {
    #[default]
    NoThreat,
    Check,
    Checkmate,
}
