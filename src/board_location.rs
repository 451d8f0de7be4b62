use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;

/// A validated position on the board.
///
/// `x` is the file (0 == a) and `y` is the rank (0 == White's back rank).
/// Both are guaranteed to lie in `0..BOARD_SIZE`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinates {
    x: i8,
    y: i8,
}

impl Coordinates {
    pub const A1: Coordinates = Coordinates { x: 0, y: 0 };

    /// Creates coordinates, failing with `OutOfRange` outside the board.
    pub fn new(x: i32, y: i32) -> ChessResult<Self> {
        if is_on_board(x, y) {
            Ok(Coordinates {
                x: x as i8,
                y: y as i8,
            })
        } else {
            Err(ChessErrors::OutOfRange { x, y })
        }
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.x as i32
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.y as i32
    }

    /// Moves these coordinates by a file and rank offset.
    ///
    /// # Returns
    ///
    /// * `ChessResult<Coordinates>` - the shifted coordinates if they are
    ///   still on the board, otherwise `OutOfRange`.
    pub fn offset(&self, d_x: i32, d_y: i32) -> ChessResult<Coordinates> {
        Coordinates::new(self.x() + d_x, self.y() + d_y)
    }

    /// Iterates over all 64 coordinates, file by file.
    pub fn all() -> impl Iterator<Item = Coordinates> {
        (0..BOARD_SIZE).flat_map(|x| {
            (0..BOARD_SIZE).map(move |y| Coordinates {
                x: x as i8,
                y: y as i8,
            })
        })
    }
}

#[inline]
fn is_on_board(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y)
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.x as u8) as char;
        let rank = (b'1' + self.y as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Coordinates {
    type Err = ChessErrors;

    /// Parses a square such as `"e2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessErrors::InvalidAlgebraic(s.to_owned());
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let x = match file {
            'a'..='h' => file as i32 - 'a' as i32,
            'A'..='H' => file as i32 - 'A' as i32,
            _ => return Err(invalid()),
        };
        let y = match rank {
            '1'..='8' => rank as i32 - '1' as i32,
            _ => return Err(invalid()),
        };
        Coordinates::new(x, y)
    }
}
