//! Board cells and the events emitted when their occupant changes.

use crate::board_location::Coordinates;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::piece_record::Piece;

/// One of the 64 cells of a board. Holds at most one piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Field {
    coordinates: Coordinates,
    occupant: Option<Piece>,
}

impl Field {
    pub(crate) const fn new(coordinates: Coordinates) -> Self {
        Field {
            coordinates,
            occupant: None,
        }
    }

    #[inline]
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    #[inline]
    pub fn piece(&self) -> Option<Piece> {
        self.occupant
    }

    #[inline]
    pub fn has_piece(&self) -> bool {
        self.occupant.is_some()
    }

    /// Only the owning board may change the occupant, so it can keep its
    /// king bookkeeping and change journal current.
    pub(crate) fn replace_piece(&mut self, piece: Option<Piece>) -> FieldChange {
        self.occupant = piece;
        FieldChange::new(self.coordinates, piece)
    }
}

/// A piece was placed on or removed from a field.
///
/// `piece` and `color` are `None` when the field became empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldChange {
    pub coordinates: Coordinates,
    pub piece: Option<PieceKind>,
    pub color: Option<Color>,
}

impl FieldChange {
    pub fn new(coordinates: Coordinates, occupant: Option<Piece>) -> Self {
        FieldChange {
            coordinates,
            piece: occupant.map(|piece| piece.kind()),
            color: occupant.map(|piece| piece.color()),
        }
    }
}

/// Receiver of field changes. Any `FnMut(&FieldChange)` closure is a listener.
pub trait FieldListener {
    fn field_changed(&mut self, change: &FieldChange);
}

impl<F> FieldListener for F
where
    F: FnMut(&FieldChange),
{
    fn field_changed(&mut self, change: &FieldChange) {
        self(change)
    }
}
