//! Move application.

use tracing::debug;

use crate::board::{Board, Occupant};
use crate::error::MoveError;
use crate::position::Position;

impl Board {
    /// Move the piece on `start` to `end`, both given in algebraic notation.
    ///
    /// # Errors
    ///
    /// Fails if either square is malformed, or for any reason listed on
    /// [`Board::apply_move`]. The board is unchanged on failure.
    pub fn move_piece(&mut self, start: &str, end: &str) -> Result<(), MoveError> {
        let start = Position::from_algebraic_notation(start)?;
        let end = Position::from_algebraic_notation(end)?;
        self.apply_move(start, end)
    }

    /// Move the piece on `start` to `end`, capturing whatever stands there.
    ///
    /// Legality is decided by [`Board::possible_moves`] alone. On success the
    /// moved piece is marked as having moved.
    ///
    /// # Errors
    ///
    /// - [`MoveError::EmptyStart`] if `start` holds no piece.
    /// - [`MoveError::NoPossibleMoves`] if the piece cannot move anywhere.
    /// - [`MoveError::InvalidMove`] if `end` is not among its moves.
    pub fn apply_move(&mut self, start: Position, end: Position) -> Result<(), MoveError> {
        let Some(piece) = self.piece_at(start) else {
            debug!(from = %start, to = %end, "rejected move from empty square");
            return Err(MoveError::EmptyStart { at: start });
        };
        let (color, kind) = (piece.color(), piece.kind());

        let moves = self.possible_moves(start);
        if moves.is_empty() {
            debug!(from = %start, to = %end, %color, %kind, "rejected move of blocked piece");
            return Err(MoveError::NoPossibleMoves { at: start });
        }
        if !moves.contains(&end) {
            debug!(from = %start, to = %end, %color, %kind, "rejected invalid move");
            return Err(MoveError::InvalidMove {
                from: start,
                to: end,
            });
        }

        let mut moving = self.replace(start, Occupant::Empty);
        if let Occupant::Occupied(piece) = &mut moving {
            piece.mark_moved();
        }
        let captured = self.replace(end, moving);

        debug!(
            from = %start,
            to = %end,
            %color,
            %kind,
            captured = ?captured.piece(),
            "applied move"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::board::Board;
    use crate::color::Color;
    use crate::error::{MoveError, PositionError};
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn pawn_double_step_then_single() {
        let mut board = Board::starting_position();
        board.move_piece("e2", "e4").unwrap();

        assert!(board.at(pos("e2")).is_empty());
        let pawn = board.piece_at(pos("e4")).unwrap();
        assert_eq!(pawn.kind(), PieceKind::Pawn);
        assert_eq!(pawn.color(), Color::White);
        assert!(pawn.has_moved());

        assert_eq!(board.possible_moves(pos("e4")), HashSet::from([pos("e5")]));
    }

    #[test]
    fn invalid_destination_is_rejected() {
        let mut board = Board::starting_position();
        let before = board.clone();
        assert_eq!(
            board.move_piece("e2", "e5"),
            Err(MoveError::InvalidMove {
                from: pos("e2"),
                to: pos("e5")
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn empty_start_is_rejected() {
        let mut board = Board::starting_position();
        assert_eq!(
            board.move_piece("e4", "e5"),
            Err(MoveError::EmptyStart { at: pos("e4") })
        );
    }

    #[test]
    fn blocked_piece_is_rejected() {
        let mut board = Board::starting_position();
        let before = board.clone();
        assert_eq!(
            board.move_piece("a1", "a3"),
            Err(MoveError::NoPossibleMoves { at: pos("a1") })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn moving_onto_own_piece_is_rejected() {
        let mut board = Board::starting_position();
        assert_eq!(
            board.move_piece("b1", "d2"),
            Err(MoveError::InvalidMove {
                from: pos("b1"),
                to: pos("d2")
            })
        );
    }

    #[test]
    fn malformed_notation_is_rejected() {
        let mut board = Board::starting_position();
        let before = board.clone();
        assert_eq!(
            board.move_piece("e2", "e9"),
            Err(MoveError::Position(PositionError::InvalidNotation {
                notation: "e9".to_string()
            }))
        );
        assert!(board.move_piece("e", "e4").is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn capture_replaces_enemy() {
        let mut board = Board::new();
        board.place(pos("d4"), Piece::new(PieceKind::Pawn, Color::White));
        board.place(pos("e5"), Piece::new(PieceKind::Rook, Color::Black));

        board.move_piece("d4", "e5").unwrap();
        assert!(board.at(pos("d4")).is_empty());
        let pawn = board.piece_at(pos("e5")).unwrap();
        assert_eq!((pawn.kind(), pawn.color()), (PieceKind::Pawn, Color::White));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn moved_flag_survives_later_moves() {
        let mut board = Board::starting_position();
        board.move_piece("g1", "f3").unwrap();
        board.move_piece("f3", "g1").unwrap();
        assert!(board.piece_at(pos("g1")).unwrap().has_moved());
        assert_ne!(board, Board::starting_position());
    }

    #[test]
    fn pawn_loses_double_step_after_any_move() {
        let mut board = Board::starting_position();
        board.move_piece("d7", "d6").unwrap();
        assert_eq!(board.possible_moves(pos("d6")), HashSet::from([pos("d5")]));
    }
}
