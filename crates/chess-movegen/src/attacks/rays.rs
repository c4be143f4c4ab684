//! Attack computation by walking rays square by square.
//!
//! Slow, but simple enough to trust. The magic tables are built from these
//! functions and tested against them.

use super::{Attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
use crate::Bitboard;
use chess_core::{Color, Square};

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Attack lookups without any precomputed sliding tables.
///
/// Zero-sized; every query recomputes its answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RayTables;

impl Attacks for RayTables {
    #[inline]
    fn knight_attacks(&self, sq: Square) -> Bitboard {
        KNIGHT_ATTACKS[sq.index() as usize]
    }

    #[inline]
    fn king_attacks(&self, sq: Square) -> Bitboard {
        KING_ATTACKS[sq.index() as usize]
    }

    #[inline]
    fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        PAWN_ATTACKS[color.index()][sq.index() as usize]
    }

    fn rook_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        slide(sq, occupied, &ROOK_DIRECTIONS)
    }

    fn bishop_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        slide(sq, occupied, &BISHOP_DIRECTIONS)
    }

    fn between(&self, a: Square, b: Square) -> Bitboard {
        scan_between(a, b)
    }

    fn ray(&self, a: Square, b: Square) -> Bitboard {
        scan_ray(a, b)
    }
}

#[inline]
fn step(sq: Square, (df, dr): (i8, i8)) -> Option<Square> {
    let file = sq.file().index() as i8 + df;
    let rank = sq.rank().index() as i8 + dr;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Square::from_coords(file as u8, rank as u8)
    } else {
        None
    }
}

/// Squares reachable from `sq` along `directions`, stopping at (and
/// including) the first occupied square.
pub(crate) fn slide(sq: Square, occupied: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &dir in directions {
        let mut cur = sq;
        while let Some(next) = step(cur, dir) {
            attacks.set(next);
            if occupied.contains(next) {
                break;
            }
            cur = next;
        }
    }
    attacks
}

/// Squares whose occupancy can change a slider's attacks from `sq`.
///
/// The last square in each direction never matters, so it is left out.
pub(crate) fn relevant_mask(sq: Square, directions: &[(i8, i8)]) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    for &dir in directions {
        let mut cur = sq;
        while let Some(next) = step(cur, dir) {
            if step(next, dir).is_none() {
                break;
            }
            mask.set(next);
            cur = next;
        }
    }
    mask
}

/// Unit step from `a` toward `b`, if the two share a rank, file or diagonal.
fn direction(a: Square, b: Square) -> Option<(i8, i8)> {
    if a == b {
        return None;
    }
    let df = b.file().index() as i8 - a.file().index() as i8;
    let dr = b.rank().index() as i8 - a.rank().index() as i8;
    if df == 0 || dr == 0 || df.abs() == dr.abs() {
        Some((df.signum(), dr.signum()))
    } else {
        None
    }
}

pub(crate) fn scan_between(a: Square, b: Square) -> Bitboard {
    let Some(dir) = direction(a, b) else {
        return Bitboard::EMPTY;
    };
    let mut squares = Bitboard::EMPTY;
    let mut cur = a;
    while let Some(next) = step(cur, dir) {
        if next == b {
            break;
        }
        squares.set(next);
        cur = next;
    }
    squares
}

pub(crate) fn scan_ray(a: Square, b: Square) -> Bitboard {
    let Some((df, dr)) = direction(a, b) else {
        return Bitboard::EMPTY;
    };
    let mut line = Bitboard::from_square(a);
    for dir in [(df, dr), (-df, -dr)] {
        let mut cur = a;
        while let Some(next) = step(cur, dir) {
            line.set(next);
            cur = next;
        }
    }
    line
}
