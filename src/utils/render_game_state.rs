//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and trace logs
//! in text environments.

use crate::board_location::Coordinates;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, PieceKind};

const FILE_LABELS: &str = "  a b c d e f g h";
const EMPTY_FIELD: char = '·';

/// Render the board to a Unicode string for terminal output.
///
/// Rank 8 is printed first, files run from a to h.
pub fn render_board(board: &Board) -> String {
    let rows = (0..BOARD_SIZE).rev().map(|rank| {
        let label = rank + 1;
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|file| {
                Coordinates::new(file, rank)
                    .ok()
                    .and_then(|field| board.piece_at(field))
                    .map_or(EMPTY_FIELD, |piece| piece_to_unicode(piece.color(), piece.kind()))
                    .to_string()
            })
            .collect();
        format!("{label} {} {label}", cells.join(" "))
    });

    std::iter::once(FILE_LABELS.to_owned())
        .chain(rows)
        .chain(std::iter::once(FILE_LABELS.to_owned()))
        .collect::<Vec<_>>()
        .join("\n")
}

// U+2654..=U+2659 are the white glyphs from king down to pawn, the black
// ones follow directly.
const WHITE_KING_GLYPH: u32 = 0x2654;
const BLACK_KING_GLYPH: u32 = 0x265A;

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    let king_glyph = match color {
        Color::White => WHITE_KING_GLYPH,
        Color::Black => BLACK_KING_GLYPH,
    };
    let offset = (PieceKind::King.index() - piece.index()) as u32;
    char::from_u32(king_glyph + offset).unwrap_or('?')
}
