//! Static movement geometry for each piece kind.
//!
//! A piece's movement is described declaratively by an [`OffsetTable`]: plain
//! moves that may also capture, extra moves allowed only before the piece has
//! moved, and capture-only moves. The move generator reads these tables and
//! never branches on the piece kind.

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A relative `(rank, file)` displacement.
///
/// Positive `d_rank` moves toward rank 1 (White's side); positive `d_file`
/// moves toward file h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub d_rank: i8,
    pub d_file: i8,
}

impl Offset {
    #[inline]
    pub const fn new(d_rank: i8, d_file: i8) -> Offset {
        Offset { d_rank, d_file }
    }
}

/// Candidate relative moves for one piece kind and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetTable {
    /// Reachable every turn. Target must be empty or hold an enemy.
    pub move_or_attack: &'static [Offset],
    /// Reachable only while the piece has not moved. Same occupancy rule.
    pub first_move: &'static [Offset],
    /// Reachable only to capture. Target must hold an enemy.
    pub special_attack: &'static [Offset],
    /// When set, each `move_or_attack` offset is a direction repeated until blocked.
    pub sliding: bool,
}

const STRAIGHT: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(0, 1),
    Offset::new(-1, 0),
    Offset::new(0, -1),
];

const DIAGONAL: [Offset; 4] = [
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
];

const STRAIGHT_AND_DIAGONAL: [Offset; 8] = [
    STRAIGHT[0],
    STRAIGHT[1],
    STRAIGHT[2],
    STRAIGHT[3],
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
];

const KNIGHT_JUMPS: [Offset; 8] = [
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(-2, 1),
    Offset::new(-2, -1),
    Offset::new(1, 2),
    Offset::new(1, -2),
    Offset::new(-1, 2),
    Offset::new(-1, -2),
];

impl OffsetTable {
    pub const KNIGHT: OffsetTable = OffsetTable {
        move_or_attack: &KNIGHT_JUMPS,
        first_move: &[],
        special_attack: &[],
        sliding: false,
    };

    pub const BISHOP: OffsetTable = OffsetTable {
        move_or_attack: &DIAGONAL,
        first_move: &[],
        special_attack: &[],
        sliding: true,
    };

    pub const ROOK: OffsetTable = OffsetTable {
        move_or_attack: &STRAIGHT,
        first_move: &[],
        special_attack: &[],
        sliding: true,
    };

    pub const QUEEN: OffsetTable = OffsetTable {
        move_or_attack: &STRAIGHT_AND_DIAGONAL,
        first_move: &[],
        special_attack: &[],
        sliding: true,
    };

    pub const KING: OffsetTable = OffsetTable {
        move_or_attack: &STRAIGHT_AND_DIAGONAL,
        first_move: &[],
        special_attack: &[],
        sliding: false,
    };

    /// White pawns advance toward row 0 (rank 8).
    pub const WHITE_PAWN: OffsetTable = OffsetTable {
        move_or_attack: &[Offset::new(-1, 0)],
        first_move: &[Offset::new(-2, 0)],
        special_attack: &[Offset::new(-1, 1), Offset::new(-1, -1)],
        sliding: false,
    };

    /// Black pawns advance toward row 7 (rank 1).
    pub const BLACK_PAWN: OffsetTable = OffsetTable {
        move_or_attack: &[Offset::new(1, 0)],
        first_move: &[Offset::new(2, 0)],
        special_attack: &[Offset::new(1, 1), Offset::new(1, -1)],
        sliding: false,
    };

    /// Look up the table for a piece kind. Only pawns depend on color.
    pub const fn for_piece(kind: PieceKind, color: Color) -> &'static OffsetTable {
        match (kind, color) {
            (PieceKind::Pawn, Color::White) => &Self::WHITE_PAWN,
            (PieceKind::Pawn, Color::Black) => &Self::BLACK_PAWN,
            (PieceKind::Knight, _) => &Self::KNIGHT,
            (PieceKind::Bishop, _) => &Self::BISHOP,
            (PieceKind::Rook, _) => &Self::ROOK,
            (PieceKind::Queen, _) => &Self::QUEEN,
            (PieceKind::King, _) => &Self::KING,
        }
    }
}
