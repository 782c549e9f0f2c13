//! Error types for square parsing, placement parsing, and move application.

use crate::position::Position;

/// Errors from constructing or parsing a [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The coordinates fall outside the 8x8 grid.
    #[error("position ({rank_index}, {file_index}) is out of bounds")]
    OutOfBounds {
        /// Requested row (0 = rank 8).
        rank_index: i16,
        /// Requested column (0 = file a).
        file_index: i16,
    },
    /// The text is not a two-character square such as "e4".
    #[error("invalid algebraic notation: \"{notation}\"")]
    InvalidNotation {
        /// The rejected text.
        notation: String,
    },
}

/// Errors from applying a move to a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// One of the endpoints could not be parsed.
    #[error(transparent)]
    Position(#[from] PositionError),
    /// There is no piece on the start square.
    #[error("empty start position: {at}")]
    EmptyStart {
        /// The empty square.
        at: Position,
    },
    /// The piece on the start square has nowhere to go.
    #[error("no possible moves from {at}")]
    NoPossibleMoves {
        /// The blocked piece's square.
        at: Position,
    },
    /// The destination is not among the generated moves.
    #[error("invalid move: {from} to {to}")]
    InvalidMove {
        /// Start square.
        from: Position,
        /// Rejected destination.
        to: Position,
    },
}

/// Errors that occur when parsing a piece placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 `/`-separated rows.
    #[error("expected 8 rows in placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {rank_index} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row index (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}
