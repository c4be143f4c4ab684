//! Attack lookups consumed by the position and the move generator.
//!
//! The [`Attacks`] trait is the seam between the rules and the lookup
//! strategy. [`MagicTables`] is the production implementation (magic
//! bitboards plus precomputed square-pair tables); [`RayTables`] computes
//! everything by walking rays and serves as an independent reference.
//!
//! Leaper attacks (knight, king, pawn) are plain `const` tables shared by
//! both implementations.

mod magics;
mod rays;

pub use magics::MagicTables;
pub use rays::RayTables;

use crate::Bitboard;
use chess_core::{Color, Square};

/// Read-only attack lookup service.
///
/// Sliding attacks stop at and include the first occupied square in each
/// direction. Implementations must be pure: identical inputs always give
/// identical outputs, which is what keeps encoder and decoder in sync.
pub trait Attacks {
    /// Squares a knight on `sq` attacks.
    fn knight_attacks(&self, sq: Square) -> Bitboard;

    /// Squares a king on `sq` attacks.
    fn king_attacks(&self, sq: Square) -> Bitboard;

    /// Squares a pawn of `color` on `sq` attacks.
    fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard;

    /// Rook attacks from `sq` given `occupied`.
    fn rook_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard;

    /// Bishop attacks from `sq` given `occupied`.
    fn bishop_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard;

    /// Squares strictly between `a` and `b` if they share a line, else empty.
    fn between(&self, a: Square, b: Square) -> Bitboard;

    /// The full edge-to-edge line through `a` and `b` if they share a line,
    /// else empty.
    fn ray(&self, a: Square, b: Square) -> Bitboard;

    /// Queen attacks from `sq` given `occupied`.
    #[inline]
    fn queen_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.rook_attacks(sq, occupied) | self.bishop_attacks(sq, occupied)
    }

    /// True if the three squares lie on one rank, file or diagonal.
    #[inline]
    fn aligned(&self, a: Square, b: Square, c: Square) -> bool {
        self.ray(a, b).contains(c)
    }
}

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
    (1, -2),
    (-1, -2),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const WHITE_PAWN_DELTAS: [(i8, i8); 2] = [(-1, 1), (1, 1)];
const BLACK_PAWN_DELTAS: [(i8, i8); 2] = [(-1, -1), (1, -1)];

pub(crate) const KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_DELTAS);
pub(crate) const KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_DELTAS);
pub(crate) const PAWN_ATTACKS: [[Bitboard; 64]; 2] = [
    leaper_table(&WHITE_PAWN_DELTAS),
    leaper_table(&BLACK_PAWN_DELTAS),
];

/// Builds a per-square table for a piece that jumps by fixed (file, rank)
/// deltas, dropping targets that fall off the board.
const fn leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut bb = 0u64;

        let mut i = 0;
        while i < deltas.len() {
            let (df, dr) = deltas[i];
            let f = file + df;
            let r = rank + dr;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                bb |= 1u64 << (r * 8 + f);
            }
            i += 1;
        }

        table[sq] = Bitboard(bb);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{File, Rank};

    #[test]
    fn knight_attacks_center_corner_edge() {
        let d4 = Square::new(File::D, Rank::R4);
        let a4 = Square::new(File::A, Rank::R4);
        assert_eq!(KNIGHT_ATTACKS[d4.index() as usize].count(), 8);
        assert_eq!(KNIGHT_ATTACKS[Square::A1.index() as usize].count(), 2);
        assert_eq!(KNIGHT_ATTACKS[a4.index() as usize].count(), 4);
    }

    #[test]
    fn knight_specific_squares() {
        let e4 = Square::new(File::E, Rank::R4);
        let attacks = KNIGHT_ATTACKS[e4.index() as usize];
        for name in ["d6", "f6", "g5", "g3", "f2", "d2", "c3", "c5"] {
            assert!(
                attacks.contains(Square::from_algebraic(name).unwrap()),
                "knight on e4 should attack {}",
                name
            );
        }
    }

    #[test]
    fn king_attacks_center_corner_edge() {
        let d4 = Square::new(File::D, Rank::R4);
        let a4 = Square::new(File::A, Rank::R4);
        assert_eq!(KING_ATTACKS[d4.index() as usize].count(), 8);
        assert_eq!(KING_ATTACKS[Square::A1.index() as usize].count(), 3);
        assert_eq!(KING_ATTACKS[a4.index() as usize].count(), 5);
    }

    #[test]
    fn pawn_attacks_by_color() {
        let d4 = Square::new(File::D, Rank::R4);
        let white = PAWN_ATTACKS[Color::White.index()][d4.index() as usize];
        let black = PAWN_ATTACKS[Color::Black.index()][d4.index() as usize];
        assert!(white.contains(Square::new(File::C, Rank::R5)));
        assert!(white.contains(Square::new(File::E, Rank::R5)));
        assert!(black.contains(Square::new(File::C, Rank::R3)));
        assert!(black.contains(Square::new(File::E, Rank::R3)));
        assert_eq!(white.count(), 2);
        assert_eq!(black.count(), 2);
    }

    #[test]
    fn pawn_attacks_edges() {
        let a4 = Square::new(File::A, Rank::R4);
        assert_eq!(PAWN_ATTACKS[Color::White.index()][a4.index() as usize].count(), 1);
        assert!(PAWN_ATTACKS[Color::White.index()][Square::D8.index() as usize].is_empty());
    }

    #[test]
    fn implementations_agree_on_leapers() {
        let magic = MagicTables::global();
        for sq in Square::iter() {
            assert_eq!(magic.knight_attacks(sq), RayTables.knight_attacks(sq));
            assert_eq!(magic.king_attacks(sq), RayTables.king_attacks(sq));
            for color in Color::ALL {
                assert_eq!(
                    magic.pawn_attacks(color, sq),
                    RayTables.pawn_attacks(color, sq)
                );
            }
        }
    }
}
