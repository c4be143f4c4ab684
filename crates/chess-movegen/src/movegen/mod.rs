//! Legal move generation.
//!
//! Moves come out in one fixed order, which both sides of the move index
//! codec rely on:
//!
//! 1. en passant captures
//! 2. pawn captures by origin, then single pushes and double pushes by
//!    destination (promotions as queen, knight, rook, bishop)
//! 3. knight, bishop, rook and queen moves by origin, then destination
//! 4. king moves, then castling
//!
//! In check, king evasions come right after the en passant group and before
//! the captures and interpositions of the other pieces. Candidates are
//! produced pseudo-legally and then filtered in place, so filtering never
//! reorders the list.

pub mod perft;

use crate::attacks::Attacks;
use crate::{Bitboard, Position};
use chess_core::{Move, Role, Square};

/// A list of moves with a fixed maximum capacity.
///
/// Chess positions have at most 218 legal moves, so we use a fixed-size
/// array to avoid heap allocations during move generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Upper bound on the moves of any position, with headroom.
    pub const MAX_MOVES: usize = 256;

    /// Fills unused slots; never observable through the public API.
    const VACANT: Move = Move::EnPassant {
        from: Square::A1,
        to: Square::A1,
    };

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Self::VACANT; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Returns true if an equal move is in the list.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.as_slice().contains(m)
    }

    /// Index of the first equal move.
    #[inline]
    pub fn position_of(&self, m: &Move) -> Option<usize> {
        self.as_slice().iter().position(|x| x == m)
    }

    /// Retains only moves for which the predicate returns true, keeping
    /// their relative order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl Position {
    /// All legal moves of the side to move, in generation order.
    pub fn legal_moves<A: Attacks + ?Sized>(&self, tables: &A) -> MoveList {
        let mut moves = MoveList::new();
        generate_moves(self, tables, &mut moves);
        moves
    }
}

/// Replaces the contents of `moves` with the legal moves of `position`.
///
/// A position without a king for the side to move has no moves.
pub fn generate_moves<A: Attacks + ?Sized>(position: &Position, tables: &A, moves: &mut MoveList) {
    moves.clear();

    let Some(king) = position.king_of(position.turn()) else {
        debug_assert!(false, "side to move has no king");
        return;
    };

    let has_ep = gen_en_passant(position, tables, moves);

    let checkers = position.attackers_of(tables, king, position.turn().opposite());
    if checkers.is_empty() {
        let target = !position.us();
        gen_non_king(position, tables, target, moves);
        gen_safe_king(position, tables, king, target, moves);
        gen_castling(position, tables, king, moves);
    } else {
        gen_evasions(position, tables, king, checkers, moves);
    }

    let blockers = position.slider_blockers(tables, king);
    if blockers.is_not_empty() || has_ep {
        moves.retain(|m| is_safe(position, tables, king, m, blockers));
    }
}

fn gen_en_passant<A: Attacks + ?Sized>(position: &Position, tables: &A, moves: &mut MoveList) -> bool {
    let Some(ep) = position.ep_square() else {
        return false;
    };

    let pawns = position.pieces(position.turn(), Role::Pawn)
        & tables.pawn_attacks(position.turn().opposite(), ep);
    for from in pawns {
        moves.push(Move::EnPassant { from, to: ep });
    }
    pawns.is_not_empty()
}

/// Pawn, knight, bishop, rook and queen moves landing in `mask`.
fn gen_non_king<A: Attacks + ?Sized>(position: &Position, tables: &A, mask: Bitboard, moves: &mut MoveList) {
    gen_pawn(position, tables, mask, moves);

    let occupied = position.occupied();
    let us = position.turn();

    for role in [Role::Knight, Role::Bishop, Role::Rook, Role::Queen] {
        for from in position.pieces(us, role) {
            let targets = match role {
                Role::Knight => tables.knight_attacks(from),
                Role::Bishop => tables.bishop_attacks(from, occupied),
                Role::Rook => tables.rook_attacks(from, occupied),
                _ => tables.queen_attacks(from, occupied),
            } & mask;

            for to in targets {
                moves.push(Move::Normal {
                    role,
                    from,
                    capture: occupied.contains(to),
                    to,
                    promotion: None,
                });
            }
        }
    }
}

fn gen_pawn<A: Attacks + ?Sized>(position: &Position, tables: &A, mask: Bitboard, moves: &mut MoveList) {
    let us = position.turn();
    let pawns = position.pieces(us, Role::Pawn);

    for from in pawns {
        let targets = tables.pawn_attacks(us, from) & position.them() & mask;
        for to in targets {
            add_pawn_moves(position, from, true, to, moves);
        }
    }

    let empty = !position.occupied();
    let singles = pawns.forward(us) & empty;
    let doubles = singles.forward(us) & empty & Bitboard::relative_rank(us, 3);
    let back = us.fold(-8, 8);

    for to in singles & mask {
        if let Some(from) = to.offset(back) {
            add_pawn_moves(position, from, false, to, moves);
        }
    }

    for to in doubles & mask {
        if let Some(from) = to.offset(2 * back) {
            moves.push(Move::Normal {
                role: Role::Pawn,
                from,
                capture: false,
                to,
                promotion: None,
            });
        }
    }
}

fn add_pawn_moves(position: &Position, from: Square, capture: bool, to: Square, moves: &mut MoveList) {
    if to.rank().index() == position.turn().promotion_rank() {
        for promotion in Role::PROMOTIONS {
            moves.push(Move::Normal {
                role: Role::Pawn,
                from,
                capture,
                to,
                promotion: Some(promotion),
            });
        }
    } else {
        moves.push(Move::Normal {
            role: Role::Pawn,
            from,
            capture,
            to,
            promotion: None,
        });
    }
}

/// King steps into `mask` that are not attacked on the current board.
fn gen_safe_king<A: Attacks + ?Sized>(
    position: &Position,
    tables: &A,
    king: Square,
    mask: Bitboard,
    moves: &mut MoveList,
) {
    let them = position.turn().opposite();
    for to in tables.king_attacks(king) & mask {
        if position.attackers_of(tables, to, them).is_empty() {
            moves.push(Move::Normal {
                role: Role::King,
                from: king,
                capture: position.occupied().contains(to),
                to,
                promotion: None,
            });
        }
    }
}

fn gen_evasions<A: Attacks + ?Sized>(
    position: &Position,
    tables: &A,
    king: Square,
    checkers: Bitboard,
    moves: &mut MoveList,
) {
    let sliders = checkers
        & (position.by_role(Role::Bishop) | position.by_role(Role::Rook) | position.by_role(Role::Queen));

    // The king cannot step back along a checking slider's line: the king
    // itself hides those squares from the attack lookup.
    let mut attacked = Bitboard::EMPTY;
    for slider in sliders {
        attacked |= tables.ray(king, slider).without(slider);
    }

    gen_safe_king(position, tables, king, !position.us() & !attacked, moves);

    if let Some(checker) = checkers.single_square() {
        let target = tables.between(king, checker).with(checker);
        gen_non_king(position, tables, target, moves);
    }
}

fn gen_castling<A: Attacks + ?Sized>(position: &Position, tables: &A, king: Square, moves: &mut MoveList) {
    let us = position.turn();
    let them = us.opposite();
    let occupied = position.occupied();
    let rooks = position.castling_rights()
        & Bitboard::relative_rank(us, 0)
        & position.pieces(us, Role::Rook);

    for rook in rooks {
        if (tables.between(king, rook) & occupied).is_not_empty() {
            continue;
        }

        let (king_to, rook_to) = Move::castling_targets(king, rook);

        // Stricter than a plain king-transit test: the rook path, and the
        // king's landing square once the rook has moved, are checked too.
        // In some Chess960 setups this drops a castle that a generator
        // without these checks would list, shifting later indices.
        let others = occupied.without(king).without(rook);
        let king_path = tables.between(king, king_to).with(king_to);
        let rook_path = tables.between(rook, rook_to).with(rook_to);
        if ((king_path | rook_path) & others).is_not_empty() {
            continue;
        }

        let without_king = occupied.without(king);
        let transit_attacked = king_path
            .with(king)
            .into_iter()
            .any(|sq| position.attacks_to(tables, sq, them, without_king).is_not_empty());
        if transit_attacked {
            continue;
        }

        // the lifted rook may have been shielding the destination
        let after = others.with(king_to).with(rook_to);
        if position.attacks_to(tables, king_to, them, after).is_not_empty() {
            continue;
        }

        moves.push(Move::Castle { king, rook });
    }
}

/// Whether a pseudo-legal candidate keeps the own king out of check.
fn is_safe<A: Attacks + ?Sized>(
    position: &Position,
    tables: &A,
    king: Square,
    m: &Move,
    blockers: Bitboard,
) -> bool {
    match *m {
        Move::Normal { from, to, .. } => {
            !(position.us() & blockers).contains(from) || tables.aligned(from, to, king)
        }
        Move::EnPassant { from, to } => {
            let captured = Square::combine(to, from);
            let occupied = position.occupied().without(from).without(captured).with(to);
            let them = position.them();
            let rooks = (position.by_role(Role::Rook) | position.by_role(Role::Queen)) & them;
            let bishops = (position.by_role(Role::Bishop) | position.by_role(Role::Queen)) & them;
            (tables.rook_attacks(king, occupied) & rooks).is_empty()
                && (tables.bishop_attacks(king, occupied) & bishops).is_empty()
        }
        Move::Castle { .. } => true,
    }
}
