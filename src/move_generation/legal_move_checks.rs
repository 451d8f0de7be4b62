//! Threat analysis around a field and king threat classification.
//!
//! Threats are found by walking every path away from a field and asking the
//! first piece met on each path whether it could make the reverse move.

use crate::board_location::Coordinates;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, KingThreat, PieceKind};
use crate::moves::chess_move::Move;
use crate::moves::king_moves::is_castling_attempt;
use crate::moves::move_path::{find_all_move_paths, MovePath};
use crate::piece_record::Piece;

/// Paths along which a piece not of `threatened_color` could move onto `field`.
///
/// The far end of each returned path holds the attacker. A king only counts
/// as an attacker if `field` is not protected by a piece of
/// `threatened_color`; that protection lookup runs with
/// `check_own_protection == false` and therefore never recurses further.
pub fn find_threatening_move_paths(
    board: &Board,
    field: Coordinates,
    threatened_color: Color,
    check_own_protection: bool,
) -> Vec<MovePath> {
    collect_threatening_paths(
        board,
        field,
        threatened_color,
        check_own_protection,
        board.piece_at(field),
    )
}

fn collect_threatening_paths(
    board: &Board,
    field: Coordinates,
    threatened_color: Color,
    check_own_protection: bool,
    occupant: Option<Piece>,
) -> Vec<MovePath> {
    find_all_move_paths(board, field, false)
        .into_iter()
        .filter(|path| {
            let Some(attacker_field) = path.last_field() else {
                return false;
            };
            let Some(attacker) = board.piece_at(attacker_field) else {
                return false;
            };
            if attacker.color() == threatened_color {
                return false;
            }

            let reverse = Move::from_parts(attacker_field, field, attacker, occupant);
            // Castling never captures.
            if is_castling_attempt(&reverse)
                || !attacker.is_move_valid(path.shape(), &reverse, board).is_valid()
            {
                return false;
            }

            attacker.can_move_to_threatened_field()
                || !check_own_protection
                || !is_protected(board, field, threatened_color, attacker)
        })
        .collect()
}

// Could a piece of `color` recapture on `field` after `attacker` moved there?
fn is_protected(board: &Board, field: Coordinates, color: Color, attacker: Piece) -> bool {
    !collect_threatening_paths(board, field, color.opposite(), false, Some(attacker)).is_empty()
}

/// Classifies the threat against the king on `king_field`.
///
/// * `NoThreat` - nothing attacks the king, or `king_field` holds no king.
/// * `Check` - the king can step to an unthreatened field, or a single
///   attack can be blocked or captured by another piece of its color.
/// * `Checkmate` - otherwise.
pub fn detect_king_threat(board: &Board, king_field: Coordinates) -> KingThreat {
    let Some(king) = board
        .piece_at(king_field)
        .filter(|piece| piece.kind() == PieceKind::King)
    else {
        return KingThreat::NoThreat;
    };

    let threats = find_threatening_move_paths(board, king_field, king.color(), true);
    if threats.is_empty() {
        return KingThreat::NoThreat;
    }

    if has_safe_escape(board, king_field, king) {
        return KingThreat::Check;
    }

    match threats.as_slice() {
        [single] if can_own_piece_protect_king(board, single, king.color()) => KingThreat::Check,
        _ => KingThreat::Checkmate,
    }
}

fn has_safe_escape(board: &Board, king_field: Coordinates, king: Piece) -> bool {
    find_all_move_paths(board, king_field, true)
        .iter()
        .flat_map(|path| path.fields().iter().map(move |field| (path.shape(), *field)))
        .any(|(shape, destination)| {
            let target = board.piece_at(destination);
            if target.is_some_and(|piece| piece.color() == king.color()) {
                return false;
            }
            let step = Move::from_parts(king_field, destination, king, target);
            !is_castling_attempt(&step)
                && king.is_move_valid(shape, &step, board).is_valid()
                && is_king_destination_safe(board, king_field, destination)
        })
}

/// Whether a piece of `color` other than the king can move onto any field of
/// `threat`, the attacker's own field included.
pub fn can_own_piece_protect_king(board: &Board, threat: &MovePath, color: Color) -> bool {
    threat.fields().iter().any(|field| {
        find_threatening_move_paths(board, *field, color.opposite(), false)
            .iter()
            .filter_map(MovePath::last_field)
            .filter_map(|defender_field| board.piece_at(defender_field))
            .any(|defender| defender.kind() != PieceKind::King)
    })
}

/// Plays the king move `source -> target` on a scratch copy of `board` and
/// reports whether the king stands unthreatened afterwards.
pub fn is_king_destination_safe(board: &Board, source: Coordinates, target: Coordinates) -> bool {
    let Some(king) = board.piece_at(source) else {
        return false;
    };
    let mut scratch = board.scratch_copy();
    let Ok(mut step) = Move::new(&scratch, source, target) else {
        return false;
    };
    if step.execute(&mut scratch).is_err() {
        return false;
    }
    find_threatening_move_paths(&scratch, target, king.color(), true).is_empty()
}

/// A castling may neither start from check nor cross a threatened field.
/// The landing field is judged like any other king destination.
pub fn is_castling_through_threat(board: &Board, castling: &Move) -> bool {
    let source = castling.source();
    let color = castling.piece_source().color();
    if !find_threatening_move_paths(board, source, color, true).is_empty() {
        return true;
    }

    let step = (castling.target().x() - source.x()).signum();
    source
        .offset(step, 0)
        .map_or(true, |crossed| !is_king_destination_safe(board, source, crossed))
}

#[cfg(test)]
mod tests {
    use super::{
        can_own_piece_protect_king, detect_king_threat, find_threatening_move_paths,
        is_castling_through_threat, is_king_destination_safe,
    };
    use crate::board_location::Coordinates;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, KingThreat, MovePathShape, PieceKind};
    use crate::moves::chess_move::Move;
    use crate::piece_record::Piece;

    fn at(x: i32, y: i32) -> Coordinates {
        Coordinates::new(x, y).expect("test coordinates are on the board")
    }

    fn put(board: &mut Board, x: i32, y: i32, kind: PieceKind, color: Color) {
        board.set_piece(at(x, y), Some(Piece::new(kind, color)));
    }

    #[test]
    fn rook_threatens_along_open_file() {
        let mut board = Board::new();
        put(&mut board, 3, 3, PieceKind::Knight, Color::White);
        put(&mut board, 3, 7, PieceKind::Rook, Color::Black);

        let paths = find_threatening_move_paths(&board, at(3, 3), Color::White, true);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].shape(), MovePathShape::Linear);
        assert_eq!(paths[0].last_field(), Some(at(3, 7)));
    }

    #[test]
    fn blocked_and_friendly_pieces_do_not_threaten() {
        let mut board = Board::new();
        put(&mut board, 3, 3, PieceKind::Knight, Color::White);
        put(&mut board, 3, 5, PieceKind::Pawn, Color::White);
        put(&mut board, 3, 7, PieceKind::Rook, Color::Black);
        put(&mut board, 5, 5, PieceKind::Bishop, Color::White);

        assert!(find_threatening_move_paths(&board, at(3, 3), Color::White, true).is_empty());
    }

    #[test]
    fn pawn_threatens_diagonally_forward_only() {
        let mut board = Board::new();
        put(&mut board, 3, 3, PieceKind::Knight, Color::White);
        put(&mut board, 4, 4, PieceKind::Pawn, Color::Black);
        put(&mut board, 3, 4, PieceKind::Pawn, Color::Black);
        put(&mut board, 2, 2, PieceKind::Pawn, Color::Black);

        let paths = find_threatening_move_paths(&board, at(3, 3), Color::White, true);
        let attackers: Vec<_> = paths.iter().filter_map(|p| p.last_field()).collect();
        assert_eq!(attackers, vec![at(4, 4)]);
    }

    #[test]
    fn king_does_not_threaten_protected_fields() {
        let mut board = Board::new();
        put(&mut board, 3, 3, PieceKind::Knight, Color::White);
        put(&mut board, 4, 4, PieceKind::King, Color::Black);
        assert_eq!(
            find_threatening_move_paths(&board, at(3, 3), Color::White, true).len(),
            1
        );

        put(&mut board, 3, 0, PieceKind::Rook, Color::White);
        assert!(find_threatening_move_paths(&board, at(3, 3), Color::White, true).is_empty());
        // Without the protection lookup the king counts again.
        assert_eq!(
            find_threatening_move_paths(&board, at(3, 3), Color::White, false).len(),
            1
        );
    }

    #[test]
    fn pawn_protects_against_a_king_capture() {
        let mut board = Board::new();
        put(&mut board, 3, 3, PieceKind::Knight, Color::White);
        put(&mut board, 2, 2, PieceKind::Pawn, Color::White);
        put(&mut board, 4, 4, PieceKind::King, Color::Black);

        assert!(find_threatening_move_paths(&board, at(3, 3), Color::White, true).is_empty());
    }

    #[test]
    fn no_threat_without_attackers() {
        let mut board = Board::new();
        put(&mut board, 4, 0, PieceKind::King, Color::White);
        put(&mut board, 0, 7, PieceKind::Rook, Color::Black);
        assert_eq!(detect_king_threat(&board, at(4, 0)), KingThreat::NoThreat);
    }

    #[test]
    fn rook_mate_on_back_rank() {
        let mut board = Board::new();
        put(&mut board, 0, 0, PieceKind::King, Color::White);
        put(&mut board, 0, 1, PieceKind::Pawn, Color::White);
        put(&mut board, 1, 1, PieceKind::Pawn, Color::White);
        put(&mut board, 4, 0, PieceKind::Rook, Color::Black);
        assert_eq!(detect_king_threat(&board, at(0, 0)), KingThreat::Checkmate);
    }

    #[test]
    fn capturing_the_attacker_is_a_defence() {
        let mut board = Board::new();
        put(&mut board, 0, 0, PieceKind::King, Color::White);
        put(&mut board, 0, 1, PieceKind::Pawn, Color::White);
        put(&mut board, 1, 1, PieceKind::Pawn, Color::White);
        put(&mut board, 4, 0, PieceKind::Rook, Color::Black);
        put(&mut board, 4, 5, PieceKind::Rook, Color::White);
        assert_eq!(detect_king_threat(&board, at(0, 0)), KingThreat::Check);
    }

    #[test]
    fn double_check_cannot_be_blocked() {
        let mut board = Board::new();
        put(&mut board, 0, 0, PieceKind::King, Color::White);
        put(&mut board, 0, 1, PieceKind::Pawn, Color::White);
        put(&mut board, 1, 1, PieceKind::Pawn, Color::White);
        put(&mut board, 4, 0, PieceKind::Rook, Color::Black);
        put(&mut board, 1, 2, PieceKind::Knight, Color::Black);
        // Could capture the rook, but the knight checks too.
        put(&mut board, 4, 5, PieceKind::Rook, Color::White);
        assert_eq!(detect_king_threat(&board, at(0, 0)), KingThreat::Checkmate);
    }

    #[test]
    fn only_non_king_pieces_protect() {
        let mut board = Board::new();
        put(&mut board, 0, 0, PieceKind::King, Color::White);
        put(&mut board, 4, 0, PieceKind::Rook, Color::Black);
        let paths = find_threatening_move_paths(&board, at(0, 0), Color::White, true);
        assert_eq!(paths.len(), 1);
        assert!(!can_own_piece_protect_king(&board, &paths[0], Color::White));

        put(&mut board, 2, 3, PieceKind::Rook, Color::White);
        assert!(can_own_piece_protect_king(&board, &paths[0], Color::White));
    }

    #[test]
    fn king_destination_is_judged_after_the_step() {
        let mut board = Board::new();
        put(&mut board, 3, 0, PieceKind::King, Color::White);
        put(&mut board, 7, 0, PieceKind::Rook, Color::Black);

        assert!(!is_king_destination_safe(&board, at(3, 0), at(2, 0)));
        assert!(is_king_destination_safe(&board, at(3, 0), at(3, 1)));
    }

    #[test]
    fn castling_past_a_covered_field_is_a_threat() {
        let mut board = Board::new();
        put(&mut board, 4, 0, PieceKind::King, Color::White);
        put(&mut board, 0, 0, PieceKind::Rook, Color::White);
        let castling = Move::new(&board, at(4, 0), at(2, 0)).expect("king on source");
        assert!(!is_castling_through_threat(&board, &castling));

        put(&mut board, 3, 5, PieceKind::Rook, Color::Black);
        assert!(is_castling_through_threat(&board, &castling));
    }
}
