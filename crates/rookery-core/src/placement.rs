//! Piece placement strings (the first field of FEN) for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::position::{BOARD_SIZE, Position};

/// The placement string for the standard starting layout.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = PlacementError;

    /// Parse a placement such as `"8/8/8/3N4/8/8/8/8"`, rank 8 first.
    ///
    /// Every parsed piece starts with `has_moved` unset.
    fn from_str(placement: &str) -> Result<Board, PlacementError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::new();
        for (rank_index, row) in rows.iter().enumerate() {
            let mut file_index = 0usize;

            for c in row.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    file_index += digit as usize;
                    continue;
                }

                let piece =
                    Piece::from_letter(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;
                let Ok(at) = Position::new(rank_index as i16, file_index as i16) else {
                    return Err(PlacementError::BadRowLength {
                        rank_index,
                        length: file_index + 1,
                    });
                };
                board.place(at, piece);
                file_index += 1;
            }

            if file_index != BOARD_SIZE as usize {
                return Err(PlacementError::BadRowLength {
                    rank_index,
                    length: file_index,
                });
            }
        }

        Ok(board)
    }
}

impl Board {
    /// Return a wrapper that displays this board as a placement string.
    pub fn placement(&self) -> Placement<'_> {
        Placement(self)
    }
}

/// Displays a board in placement notation.
pub struct Placement<'a>(&'a Board);

impl fmt::Display for Placement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let mut empty_run = 0;

        for (i, at) in Position::all().enumerate() {
            if i > 0 && at.file_index() == 0 {
                if empty_run > 0 {
                    write!(f, "{empty_run}")?;
                    empty_run = 0;
                }
                write!(f, "/")?;
            }
            match board.piece_at(at) {
                Some(piece) => {
                    if empty_run > 0 {
                        write!(f, "{empty_run}")?;
                        empty_run = 0;
                    }
                    write!(f, "{}", piece.letter())?;
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            write!(f, "{empty_run}")?;
        }
        Ok(())
    }
}
