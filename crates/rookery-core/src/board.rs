//! The 8x8 grid of occupants.

use std::fmt;
use std::mem;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::{BOARD_SIZE, Position};

/// The contents of a single cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Occupant {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Occupant {
    /// Return the piece in this cell, if any.
    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied(piece) => Some(piece),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Occupant::Empty)
    }
}

const EMPTY_ROW: [Occupant; BOARD_SIZE as usize] = [const { Occupant::Empty }; BOARD_SIZE as usize];

/// Board state: one [`Occupant`] per square.
///
/// The board owns every piece on it. Each game should own its own `Board`;
/// move application mutates cells and piece flags in place.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Indexed by `[rank_index][file_index]`, row 0 = rank 8.
    cells: [[Occupant; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Board {
        Board {
            cells: [EMPTY_ROW; BOARD_SIZE as usize],
        }
    }

    /// Return a fresh board in the standard starting layout.
    pub fn starting_position() -> Board {
        let mut board = Board::new();
        board.initialize_board();
        board
    }

    /// Reset the board to the standard starting layout.
    pub fn initialize_board(&mut self) {
        self.cells = [EMPTY_ROW; BOARD_SIZE as usize];
        for color in Color::ALL {
            let back = color.back_rank_index();
            let pawns = color.pawn_rank_index();
            for (file_index, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                self.cells[back][file_index] = Occupant::Occupied(Piece::new(kind, color));
                self.cells[pawns][file_index] =
                    Occupant::Occupied(Piece::new(PieceKind::Pawn, color));
            }
        }
    }

    /// Return the occupant of `at`.
    ///
    /// Every read of the grid goes through here, including move generation.
    #[inline]
    pub fn at(&self, at: Position) -> &Occupant {
        &self.cells[at.rank_index()][at.file_index()]
    }

    /// Return the piece on `at`, if any.
    #[inline]
    pub fn piece_at(&self, at: Position) -> Option<&Piece> {
        self.at(at).piece()
    }

    /// Put `piece` on `at`, returning whatever was there before.
    pub fn place(&mut self, at: Position, piece: Piece) -> Occupant {
        self.replace(at, Occupant::Occupied(piece))
    }

    /// Empty `at`, returning whatever was there before.
    pub fn clear(&mut self, at: Position) -> Occupant {
        self.replace(at, Occupant::Empty)
    }

    /// Swap the occupant of `at`, handing ownership of the old one to the caller.
    #[inline]
    pub(crate) fn replace(&mut self, at: Position, occupant: Occupant) -> Occupant {
        mem::replace(&mut self.cells[at.rank_index()][at.file_index()], occupant)
    }

    /// Iterate over every occupied square and its piece, row by row from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> {
        Position::all().filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid of piece glyphs.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for (rank_index, row) in board.cells.iter().enumerate() {
            write!(f, "{}  ", BOARD_SIZE as usize - rank_index)?;
            for (file_index, occupant) in row.iter().enumerate() {
                let c = occupant.piece().map_or('.', Piece::glyph);
                if file_index < row.len() - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Occupant};
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(Position::all().all(|p| board.at(p).is_empty()));
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.piece_at(pos("e1")),
            Some(&Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(pos("d8")),
            Some(&Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            board.piece_at(pos("g1")),
            Some(&Piece::new(PieceKind::Knight, Color::White))
        );
        assert_eq!(
            board.piece_at(pos("c7")),
            Some(&Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert!(board.at(pos("e4")).is_empty());
        assert!(board.pieces().all(|(_, piece)| !piece.has_moved()));
    }

    #[test]
    fn initialize_board_resets_existing_pieces() {
        let mut board = Board::new();
        board.place(pos("e4"), Piece::new(PieceKind::Queen, Color::White));
        board.initialize_board();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn place_and_clear_return_previous_occupant() {
        let mut board = Board::new();
        let knight = Piece::new(PieceKind::Knight, Color::Black);
        assert_eq!(board.place(pos("f6"), knight.clone()), Occupant::Empty);
        assert_eq!(board.piece_at(pos("f6")), Some(&knight));
        assert_eq!(board.clear(pos("f6")), Occupant::Occupied(knight));
        assert!(board.at(pos("f6")).is_empty());
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.starts_with("8  ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜"));
        assert!(output.contains("1  ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖"));
        assert!(output.contains("4  . . . . . . . ."));
        assert!(output.ends_with("a b c d e f g h"));
    }

    #[test]
    fn debug_shows_placement() {
        let board = Board::starting_position();
        assert_eq!(
            format!("{board:?}"),
            "Board(\"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR\")"
        );
    }
}
