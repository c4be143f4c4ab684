//! Magic bitboard tables for sliding piece attack generation.
//!
//! Magic bitboards use a perfect hashing technique to map blocker
//! configurations to precomputed attack bitboards in O(1) time. The magic
//! multipliers are found at construction by a seeded search, so the tables
//! are identical on every run.

use super::rays::{relevant_mask, scan_between, scan_ray, slide, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
use crate::Bitboard;
use chess_core::{Color, Square};
use std::sync::OnceLock;

/// Magic entry for a single square.
#[derive(Clone, Copy, Debug, Default)]
struct Magic {
    /// Relevant blocker squares (edges excluded).
    mask: Bitboard,
    magic: u64,
    /// 64 minus the number of bits in `mask`.
    shift: u32,
    /// Offset of this square's slice in the shared attack table.
    offset: usize,
}

impl Magic {
    #[inline]
    fn index(&self, occupied: Bitboard) -> usize {
        let relevant = occupied & self.mask;
        self.offset + (relevant.0.wrapping_mul(self.magic) >> self.shift) as usize
    }
}

/// Precomputed attack tables.
///
/// Build once with [`MagicTables::new`] or share the process-wide instance
/// from [`MagicTables::global`]. Read-only after construction, so a single
/// instance may be shared across threads.
pub struct MagicTables {
    rook_magics: [Magic; 64],
    bishop_magics: [Magic; 64],
    /// Rook and bishop attack sets for every relevant blocker subset.
    sliders: Vec<Bitboard>,
    between: Vec<[Bitboard; 64]>,
    rays: Vec<[Bitboard; 64]>,
}

static GLOBAL_TABLES: OnceLock<MagicTables> = OnceLock::new();

impl MagicTables {
    /// Builds all tables from scratch.
    pub fn new() -> Self {
        let mut rng = SparseRng::new(0x2545_f491_4f6c_dd1d);
        let mut sliders = Vec::new();

        let rook_magics = find_magics(&ROOK_DIRECTIONS, &mut rng, &mut sliders);
        let bishop_magics = find_magics(&BISHOP_DIRECTIONS, &mut rng, &mut sliders);

        let between = Square::iter()
            .map(|a| {
                let mut row = [Bitboard::EMPTY; 64];
                for b in Square::iter() {
                    row[b.index() as usize] = scan_between(a, b);
                }
                row
            })
            .collect();
        let rays = Square::iter()
            .map(|a| {
                let mut row = [Bitboard::EMPTY; 64];
                for b in Square::iter() {
                    row[b.index() as usize] = scan_ray(a, b);
                }
                row
            })
            .collect();

        MagicTables {
            rook_magics,
            bishop_magics,
            sliders,
            between,
            rays,
        }
    }

    /// Process-wide tables, built on first use.
    pub fn global() -> &'static MagicTables {
        GLOBAL_TABLES.get_or_init(MagicTables::new)
    }
}

impl Default for MagicTables {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MagicTables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MagicTables")
            .field("slider_entries", &self.sliders.len())
            .finish()
    }
}

impl Attacks for MagicTables {
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

    #[inline]
    fn rook_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.sliders[self.rook_magics[sq.index() as usize].index(occupied)]
    }

    #[inline]
    fn bishop_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.sliders[self.bishop_magics[sq.index() as usize].index(occupied)]
    }

    #[inline]
    fn between(&self, a: Square, b: Square) -> Bitboard {
        self.between[a.index() as usize][b.index() as usize]
    }

    #[inline]
    fn ray(&self, a: Square, b: Square) -> Bitboard {
        self.rays[a.index() as usize][b.index() as usize]
    }
}

/// Finds a collision-free magic for every square and appends the attack
/// slices to `table`.
fn find_magics(directions: &[(i8, i8)], rng: &mut SparseRng, table: &mut Vec<Bitboard>) -> [Magic; 64] {
    let mut magics = [Magic::default(); 64];

    for sq in Square::iter() {
        let mask = relevant_mask(sq, directions);
        let bits = mask.count();
        let size = 1usize << bits;
        let offset = table.len();
        table.resize(offset + size, Bitboard::EMPTY);

        // Carry-Rippler enumeration of every subset of the mask
        let mut occupancies = Vec::with_capacity(size);
        let mut references = Vec::with_capacity(size);
        let mut subset = Bitboard::EMPTY;
        loop {
            occupancies.push(subset);
            references.push(slide(sq, subset, directions));
            subset = Bitboard(subset.0.wrapping_sub(mask.0) & mask.0);
            if subset.is_empty() {
                break;
            }
        }

        let mut entry = Magic {
            mask,
            magic: 0,
            shift: 64 - bits,
            offset,
        };

        // Slots stamped with an older attempt number count as free.
        let mut epoch = vec![0u32; size];
        let mut attempt = 0u32;
        loop {
            let candidate = rng.sparse();
            if (mask.0.wrapping_mul(candidate) >> 56).count_ones() < 6 {
                continue;
            }
            attempt += 1;
            entry.magic = candidate;

            let mut collision = false;
            for (&occ, &attacks) in occupancies.iter().zip(&references) {
                let slot = entry.index(occ);
                let local = slot - offset;
                if epoch[local] < attempt {
                    epoch[local] = attempt;
                    table[slot] = attacks;
                } else if table[slot] != attacks {
                    collision = true;
                    break;
                }
            }
            if !collision {
                break;
            }
        }

        magics[sq.index() as usize] = entry;
    }

    magics
}

/// xorshift64* generator biased toward few set bits.
struct SparseRng(u64);

impl SparseRng {
    fn new(seed: u64) -> Self {
        SparseRng(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        self.0.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    fn sparse(&mut self) -> u64 {
        self.next() & self.next() & self.next()
    }
}
