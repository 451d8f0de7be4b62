//! Reachable-cell paths from a source field.
//!
//! A straight path walks one step at a time in a fixed direction and stops
//! after the first occupied cell, so that cell is reachable (and possibly
//! capturable) while everything behind it is not. A jump path holds the
//! single knight destination, if it is on the board.

use crate::board_location::Coordinates;
use crate::game_state::board::Board;
use crate::game_state::chess_types::MovePathShape;

pub const LINEAR_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

/// Ordered cells reachable from a source along one direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePath {
    shape: MovePathShape,
    fields: Vec<Coordinates>,
}

impl MovePath {
    fn new(shape: MovePathShape) -> Self {
        MovePath {
            shape,
            fields: Vec::new(),
        }
    }

    #[inline]
    pub fn shape(&self) -> MovePathShape {
        self.shape
    }

    /// Cells in walking order, nearest to the source first.
    #[inline]
    pub fn fields(&self) -> &[Coordinates] {
        &self.fields
    }

    /// The far end of the path; the only cell that can hold a piece.
    #[inline]
    pub fn last_field(&self) -> Option<Coordinates> {
        self.fields.last().copied()
    }

    #[inline]
    pub fn contains(&self, coordinates: Coordinates) -> bool {
        self.fields.contains(&coordinates)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Walks from `source` in the direction of `(d_x, d_y)` until the edge or the
/// first occupied cell. Only the signs of the deltas matter.
pub fn create_straight_path(
    board: &Board,
    source: Coordinates,
    d_x: i32,
    d_y: i32,
    shape: MovePathShape,
) -> MovePath {
    debug_assert!(shape != MovePathShape::Jump, "a jump is not a straight path");
    debug_assert!(d_x != 0 || d_y != 0, "a straight path needs a direction");

    let (step_x, step_y) = (d_x.signum(), d_y.signum());
    let mut path = MovePath::new(shape);
    if step_x == 0 && step_y == 0 {
        return path;
    }

    let mut current = source;
    while let Ok(next) = current.offset(step_x, step_y) {
        path.fields.push(next);
        if board.field(next).has_piece() {
            break;
        }
        current = next;
    }

    path
}

/// The knight destination `source + (d_x, d_y)`, if it is on the board.
pub fn create_jump_path(source: Coordinates, d_x: i32, d_y: i32) -> MovePath {
    let mut path = MovePath::new(MovePathShape::Jump);
    if let Ok(target) = source.offset(d_x, d_y) {
        path.fields.push(target);
    }
    path
}

/// All paths leaving `source`.
///
/// With `restrict_to_piece_shapes` only the shapes of the piece standing on
/// `source` are generated (none for an empty field). Without it every shape
/// is generated, which threat analysis uses to look outward from a field.
pub fn find_all_move_paths(
    board: &Board,
    source: Coordinates,
    restrict_to_piece_shapes: bool,
) -> Vec<MovePath> {
    const ALL_SHAPES: &[MovePathShape] = &[
        MovePathShape::Linear,
        MovePathShape::Diagonal,
        MovePathShape::Jump,
    ];

    let shapes: &[MovePathShape] = if restrict_to_piece_shapes {
        match board.piece_at(source) {
            Some(piece) => piece.valid_shapes(),
            None => &[],
        }
    } else {
        ALL_SHAPES
    };

    let mut paths = Vec::with_capacity(16);
    for &shape in shapes {
        match shape {
            MovePathShape::Linear => paths.extend(
                LINEAR_DIRECTIONS
                    .iter()
                    .map(|&(d_x, d_y)| create_straight_path(board, source, d_x, d_y, shape)),
            ),
            MovePathShape::Diagonal => paths.extend(
                DIAGONAL_DIRECTIONS
                    .iter()
                    .map(|&(d_x, d_y)| create_straight_path(board, source, d_x, d_y, shape)),
            ),
            MovePathShape::Jump => paths.extend(
                KNIGHT_JUMPS
                    .iter()
                    .map(|&(d_x, d_y)| create_jump_path(source, d_x, d_y)),
            ),
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::{create_jump_path, create_straight_path, find_all_move_paths};
    use crate::board_location::Coordinates;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, MovePathShape, PieceKind};
    use crate::piece_record::Piece;

    fn at(x: i32, y: i32) -> Coordinates {
        Coordinates::new(x, y).expect("test coordinates are on the board")
    }

    #[test]
    fn straight_path_runs_to_the_edge_on_an_empty_board() {
        let board = Board::new();
        let path = create_straight_path(&board, at(0, 0), 0, 5, MovePathShape::Linear);
        assert_eq!(path.fields().len(), 7);
        assert_eq!(path.last_field(), Some(at(0, 7)));
    }

    #[test]
    fn straight_path_includes_first_blocker_only() {
        let mut board = Board::new();
        board.set_piece(at(3, 3), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        board.set_piece(at(5, 5), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let path = create_straight_path(&board, at(0, 0), 1, 1, MovePathShape::Diagonal);
        assert_eq!(path.fields(), &[at(1, 1), at(2, 2), at(3, 3)]);
        assert!(!path.contains(at(4, 4)));
    }

    #[test]
    fn jump_path_off_the_board_is_empty() {
        assert!(create_jump_path(at(0, 0), -1, 2).is_empty());
        assert_eq!(create_jump_path(at(0, 0), 1, 2).last_field(), Some(at(1, 2)));
    }

    #[test]
    fn unrestricted_generation_yields_every_direction() {
        let board = Board::new();
        let paths = find_all_move_paths(&board, at(4, 4), false);
        assert_eq!(paths.len(), 16);
        let reachable: usize = paths.iter().map(|path| path.fields().len()).sum();
        // 14 linear, 13 diagonal and 8 knight cells from e5.
        assert_eq!(reachable, 14 + 13 + 8);
    }

    #[test]
    fn restricted_generation_follows_the_piece() {
        let mut board = Board::new();
        board.set_piece(at(2, 2), Some(Piece::new(PieceKind::Bishop, Color::White)));

        let paths = find_all_move_paths(&board, at(2, 2), true);
        assert_eq!(paths.len(), 4);
        assert!(paths
            .iter()
            .all(|path| path.shape() == MovePathShape::Diagonal));
        assert!(find_all_move_paths(&board, at(5, 5), true).is_empty());
    }
}
