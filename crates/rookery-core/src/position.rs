//! Board coordinates and algebraic notation.

use std::fmt;
use std::str::FromStr;

use crate::error::PositionError;
use crate::offsets::Offset;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// One of the 64 squares, addressed by row and column.
///
/// Row 0 is rank 8 (Black's back rank) and column 0 is file a, so "a8" is
/// `(0, 0)` and "h1" is `(7, 7)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    rank_index: u8,
    file_index: u8,
}

impl Position {
    /// Create a position, failing if either index is outside `0..8`.
    pub fn new(rank_index: i16, file_index: i16) -> Result<Position, PositionError> {
        let size = BOARD_SIZE as i16;
        if !(0..size).contains(&rank_index) || !(0..size).contains(&file_index) {
            return Err(PositionError::OutOfBounds {
                rank_index,
                file_index,
            });
        }
        Ok(Position {
            rank_index: rank_index as u8,
            file_index: file_index as u8,
        })
    }

    /// Parse a two-character square such as "e4".
    pub fn from_algebraic_notation(notation: &str) -> Result<Position, PositionError> {
        let invalid = || PositionError::InvalidNotation {
            notation: notation.to_string(),
        };

        let bytes = notation.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return Err(invalid());
        }

        let rank_index = BOARD_SIZE - (rank_byte - b'0');
        let file_index = file_byte - b'a';
        Ok(Position {
            rank_index,
            file_index,
        })
    }

    /// Render this square as algebraic notation.
    pub fn to_algebraic_notation(self) -> String {
        self.to_string()
    }

    /// Return the position displaced by `offset`, or `OutOfBounds` past the edge.
    pub fn add_offset(self, offset: Offset) -> Result<Position, PositionError> {
        Position::new(
            self.rank_index as i16 + offset.d_rank as i16,
            self.file_index as i16 + offset.d_file as i16,
        )
    }

    /// Row index (0 = rank 8).
    #[inline]
    pub const fn rank_index(self) -> usize {
        self.rank_index as usize
    }

    /// Column index (0 = file a).
    #[inline]
    pub const fn file_index(self) -> usize {
        self.file_index as usize
    }

    /// Iterate over all 64 squares row by row, starting at a8.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|rank_index| {
            (0..BOARD_SIZE).map(move |file_index| Position {
                rank_index,
                file_index,
            })
        })
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Position, PositionError> {
        Position::from_algebraic_notation(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file_index) as char;
        let rank = BOARD_SIZE - self.rank_index;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position({}, {}, {})",
            self.rank_index, self.file_index, self
        )
    }
}
