//! Colored, stateful chess pieces.

use std::fmt;

use crate::color::Color;
use crate::offsets::OffsetTable;
use crate::piece_kind::PieceKind;

/// Mutable per-piece flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceState {
    /// Set once the piece has completed a move. Disables first-move offsets.
    pub has_moved: bool,
    /// Reserved for a pin-aware legality layer. Not consulted by move generation.
    pub pinned: bool,
}

/// A piece on the board.
///
/// Pieces are owned by exactly one board cell and are moved, not copied,
/// when a move is applied.
#[derive(Clone, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    state: PieceState,
}

impl Piece {
    /// Create a piece that has not moved yet.
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            color,
            kind,
            state: PieceState::default(),
        }
    }

    /// Build a piece from its letter code: uppercase is White, lowercase is Black.
    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn state(&self) -> &PieceState {
        &self.state
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.state.has_moved
    }

    /// Record that the piece has moved. Idempotent.
    #[inline]
    pub(crate) fn mark_moved(&mut self) {
        self.state.has_moved = true;
    }

    /// Return the static movement geometry for this piece.
    #[inline]
    pub fn offsets(&self) -> &'static OffsetTable {
        OffsetTable::for_piece(self.kind, self.color)
    }

    /// Return `true` if `other` belongs to the opposing side.
    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    /// Return the letter code: uppercase for White, lowercase for Black.
    pub fn letter(&self) -> char {
        let base = self.kind.letter();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Return the Unicode chess glyph for this piece.
    pub fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)?;
        if self.state.has_moved {
            write!(f, " (moved)")?;
        }
        Ok(())
    }
}
