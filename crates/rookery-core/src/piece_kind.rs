//! Chess piece kinds.

use std::fmt;

/// The kind of a chess piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Back-rank order from file a to file h.
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Return the single-letter code for this kind (lowercase).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a single-letter code (case-insensitive).
    pub fn from_letter(c: char) -> Option<PieceKind> {
        let c = c.to_ascii_lowercase();
        PieceKind::ALL.into_iter().find(|kind| kind.letter() == c)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn back_rank_spells_out_the_home_row() {
        let row: String = PieceKind::BACK_RANK.iter().map(|kind| kind.letter()).collect();
        assert_eq!(row, "rnbqkbnr");

        let parsed: Vec<_> = "RNBQKBNR".chars().filter_map(PieceKind::from_letter).collect();
        assert_eq!(parsed, PieceKind::BACK_RANK);
        assert_eq!(PieceKind::from_letter('p'), Some(PieceKind::Pawn));
        assert_eq!(PieceKind::from_letter('x'), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Pawn), "pawn");
        assert_eq!(format!("{}", PieceKind::King), "king");
    }
}
