//! Core chess types: board representation, offset-based move generation, and
//! move application.
//!
//! Generated moves are pseudo-legal: they respect piece geometry and square
//! occupancy but do not account for checks.

mod board;
mod color;
mod error;
mod make_move;
mod movegen;
mod offsets;
mod piece;
mod piece_kind;
mod placement;
mod position;

pub use board::{Board, Occupant, PrettyBoard};
pub use color::Color;
pub use error::{MoveError, PlacementError, PositionError};
pub use offsets::{Offset, OffsetTable};
pub use piece::{Piece, PieceState};
pub use piece_kind::PieceKind;
pub use placement::{Placement, STARTING_PLACEMENT};
pub use position::{BOARD_SIZE, Position};
