//! Pseudo-legal move generation.
//!
//! Moves are derived purely from a piece's [`OffsetTable`] and the occupancy
//! of the target squares. Whether a move leaves the mover's own king attacked
//! is not considered.
//!
//! [`OffsetTable`]: crate::offsets::OffsetTable

use std::collections::HashSet;

use tracing::trace;

use crate::board::{Board, Occupant};
use crate::error::PositionError;
use crate::offsets::Offset;
use crate::piece::Piece;
use crate::position::Position;

impl Board {
    /// Return every square the piece on `at` may move to.
    ///
    /// An empty square yields an empty set. Offsets that land off the board
    /// are skipped.
    pub fn possible_moves(&self, at: Position) -> HashSet<Position> {
        let mut moves = HashSet::new();
        let Some(piece) = self.piece_at(at) else {
            return moves;
        };

        let table = piece.offsets();
        let first_move: &[Offset] = if piece.has_moved() {
            &[]
        } else {
            table.first_move
        };

        for &offset in table.move_or_attack {
            if table.sliding {
                self.push_ray(at, offset, piece, &mut moves);
            } else {
                self.push_step(at, offset, piece, &mut moves);
            }
        }

        for &offset in first_move {
            self.push_step(at, offset, piece, &mut moves);
        }

        for &offset in table.special_attack {
            if let Ok(target) = at.add_offset(offset)
                && self.is_enemy_at(target, piece)
            {
                moves.insert(target);
            }
        }

        trace!(from = %at, piece = ?piece, count = moves.len(), "generated moves");
        moves
    }

    /// Parse `notation` and return the moves of the piece standing there.
    pub fn possible_moves_from(
        &self,
        notation: &str,
    ) -> Result<HashSet<Position>, PositionError> {
        let at = Position::from_algebraic_notation(notation)?;
        Ok(self.possible_moves(at))
    }

    /// Admit the single target `from + offset` if it is empty or an enemy.
    fn push_step(
        &self,
        from: Position,
        offset: Offset,
        piece: &Piece,
        moves: &mut HashSet<Position>,
    ) {
        if let Ok(target) = from.add_offset(offset)
            && self.is_available_for(target, piece)
        {
            moves.insert(target);
        }
    }

    /// Walk from `from` in direction `offset`, collecting empty squares and the
    /// first enemy. Stops before a friendly piece or at the edge.
    fn push_ray(
        &self,
        from: Position,
        offset: Offset,
        piece: &Piece,
        moves: &mut HashSet<Position>,
    ) {
        let mut current = from;
        while let Ok(target) = current.add_offset(offset) {
            match self.at(target) {
                Occupant::Empty => {
                    moves.insert(target);
                    current = target;
                }
                Occupant::Occupied(other) => {
                    if other.is_enemy_of(piece) {
                        moves.insert(target);
                    }
                    break;
                }
            }
        }
    }

    fn is_available_for(&self, target: Position, piece: &Piece) -> bool {
        match self.at(target) {
            Occupant::Empty => true,
            Occupant::Occupied(other) => other.is_enemy_of(piece),
        }
    }

    fn is_enemy_at(&self, target: Position, piece: &Piece) -> bool {
        self.piece_at(target).is_some_and(|other| other.is_enemy_of(piece))
    }
}
