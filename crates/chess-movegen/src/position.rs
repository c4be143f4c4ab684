//! Chess position representation.
//!
//! A [`Position`] is the minimal state needed to enumerate legal moves:
//! piece placement, side to move, the en passant target and the castling
//! rights. Move counters and repetition history are not tracked.

use chess_core::{CastlingToken, Color, Fen, FenError, File, Move, Rank, Role, Square};
use std::fmt;
use thiserror::Error;

use crate::attacks::Attacks;
use crate::Bitboard;

/// Errors from setting up a position from FEN.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error("expected exactly one {color} king, found {count}")]
    KingCount { color: Color, count: u32 },
}

/// Terminal state of a position with no legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner: Color::White } => write!(f, "1-0"),
            Outcome::Checkmate { winner: Color::Black } => write!(f, "0-1"),
            Outcome::Stalemate => write!(f, "1/2-1/2"),
        }
    }
}

/// A chess position.
///
/// Role and color sets are each pairwise disjoint and both partition
/// `occupied`. Castling rights are kept as the set of rook origin squares
/// still allowed to castle, which covers standard and Chess960 layouts alike.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Position {
    by_role: [Bitboard; 6],
    by_color: [Bitboard; 2],
    occupied: Bitboard,
    turn: Color,
    ep_square: Option<Square>,
    castling_rights: Bitboard,
}

impl Position {
    /// The standard starting position, White to move.
    pub fn new() -> Self {
        Position {
            by_role: [
                Bitboard(0x00ff_0000_0000_ff00),
                Bitboard(0x4200_0000_0000_0042),
                Bitboard(0x2400_0000_0000_0024),
                Bitboard(0x8100_0000_0000_0081),
                Bitboard(0x0800_0000_0000_0008),
                Bitboard(0x1000_0000_0000_0010),
            ],
            by_color: [Bitboard(0x0000_0000_0000_ffff), Bitboard(0xffff_0000_0000_0000)],
            occupied: Bitboard(0xffff_0000_0000_ffff),
            turn: Color::White,
            ep_square: None,
            castling_rights: Bitboard(0x8100_0000_0000_0081),
        }
    }

    /// Assembles a position from raw sets.
    ///
    /// The caller guarantees the sets are consistent (disjoint roles and
    /// colors covering the same squares, one king per side). This is checked
    /// in debug builds only.
    pub fn from_parts(
        by_role: [Bitboard; 6],
        by_color: [Bitboard; 2],
        turn: Color,
        ep_square: Option<Square>,
        castling_rights: Bitboard,
    ) -> Self {
        let occupied = by_color[0] | by_color[1];
        debug_assert!((by_color[0] & by_color[1]).is_empty());
        debug_assert_eq!(
            by_role.iter().fold(Bitboard::EMPTY, |acc, &bb| acc | bb),
            occupied
        );
        debug_assert_eq!(
            by_role.iter().map(|bb| bb.count()).sum::<u32>(),
            occupied.count()
        );

        Position {
            by_role,
            by_color,
            occupied,
            turn,
            ep_square,
            castling_rights,
        }
    }

    /// Sets up a position from FEN.
    ///
    /// Half-move and full-move counters are accepted and ignored. The en
    /// passant square is kept only if a pawn could actually have just
    /// double-stepped past it. Castling tokens that name no rook on the back
    /// rank are dropped.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let parsed = Fen::parse(fen)?;

        let mut by_role = [Bitboard::EMPTY; 6];
        let mut by_color = [Bitboard::EMPTY; 2];
        for &(sq, role, color) in &parsed.pieces {
            by_role[role.index()].set(sq);
            by_color[color.index()].set(sq);
        }

        let kings = by_role[Role::King.index()];
        for color in Color::ALL {
            let count = (kings & by_color[color.index()]).count();
            if count != 1 {
                return Err(PositionError::KingCount { color, count });
            }
        }

        let mut pos = Position::from_parts(by_role, by_color, parsed.turn, None, Bitboard::EMPTY);

        for token in &parsed.castling {
            if let Some(rook) = pos.resolve_castling(*token) {
                pos.castling_rights.set(rook);
            }
        }

        pos.ep_square = parsed.en_passant.filter(|&ep| pos.is_plausible_ep(ep));

        Ok(pos)
    }

    fn resolve_castling(&self, token: CastlingToken) -> Option<Square> {
        let color = token.color();
        let back_rank = Bitboard::relative_rank(color, 0);
        let king = self.king_of(color)?;
        if !back_rank.contains(king) {
            return None;
        }
        let rooks = self.pieces(color, Role::Rook) & back_rank;

        match token {
            CastlingToken::KingSide(_) => rooks.into_iter().filter(|&r| r > king).last(),
            CastlingToken::QueenSide(_) => rooks.into_iter().find(|&r| r < king),
            CastlingToken::File(_, file) => {
                let sq = Square::combine(Square::new(file, Rank::R1), king);
                rooks.contains(sq).then_some(sq)
            }
        }
    }

    /// An en passant target is plausible when it sits on the sixth rank of
    /// the side to move, is empty, and has an enemy pawn right in front of it.
    fn is_plausible_ep(&self, ep: Square) -> bool {
        if !Bitboard::relative_rank(self.turn, 5).contains(ep) || self.occupied.contains(ep) {
            return false;
        }
        let pushed = match self.turn {
            Color::White => ep.offset(-8),
            Color::Black => ep.offset(8),
        };
        pushed.is_some_and(|sq| self.pieces(self.turn.opposite(), Role::Pawn).contains(sq))
    }

    /// Writes the position as FEN, with `0 1` move counters.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in Rank::ALL.into_iter().rev() {
            let mut empty_count = 0;
            for file in File::ALL {
                let sq = Square::new(file, rank);
                if let Some((color, role)) = self.piece_at(sq) {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(role.to_fen_char(color));
                } else {
                    empty_count += 1;
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank != Rank::R1 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(self.turn.to_char());

        fen.push(' ');
        let castling = self.castling_fen();
        if castling.is_empty() {
            fen.push('-');
        } else {
            fen.push_str(&castling);
        }

        fen.push(' ');
        match self.ep_square {
            Some(sq) => fen.push_str(&sq.to_algebraic()),
            None => fen.push('-'),
        }

        fen.push_str(" 0 1");
        fen
    }

    fn castling_fen(&self) -> String {
        let mut out = String::new();
        for color in Color::ALL {
            let Some(king) = self.king_of(color) else {
                continue;
            };
            let back_rank = Bitboard::relative_rank(color, 0);
            let rooks = self.pieces(color, Role::Rook) & back_rank;
            let rights = self.castling_rights & back_rank;

            // Highest square first, so king side precedes queen side.
            let mut squares: Vec<Square> = rights.into_iter().collect();
            squares.reverse();

            for rook in squares {
                let outermost = if rook > king {
                    rooks.into_iter().filter(|&r| r > king).last() == Some(rook)
                } else {
                    rooks.into_iter().find(|&r| r < king) == Some(rook)
                };
                let c = match (outermost, rook > king) {
                    (true, true) => 'k',
                    (true, false) => 'q',
                    (false, _) => rook.file().to_char(),
                };
                out.push(match color {
                    Color::White => c.to_ascii_uppercase(),
                    Color::Black => c,
                });
            }
        }
        out
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn ep_square(&self) -> Option<Square> {
        self.ep_square
    }

    /// Rook origin squares that may still castle.
    #[inline]
    pub fn castling_rights(&self) -> Bitboard {
        self.castling_rights
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    pub fn by_role(&self, role: Role) -> Bitboard {
        self.by_role[role.index()]
    }

    #[inline]
    pub fn by_color(&self, color: Color) -> Bitboard {
        self.by_color[color.index()]
    }

    /// Pieces of the given color and role.
    #[inline]
    pub fn pieces(&self, color: Color, role: Role) -> Bitboard {
        self.by_role[role.index()] & self.by_color[color.index()]
    }

    /// Pieces of the side to move.
    #[inline]
    pub fn us(&self) -> Bitboard {
        self.by_color(self.turn)
    }

    /// Pieces of the side not to move.
    #[inline]
    pub fn them(&self) -> Bitboard {
        self.by_color(self.turn.opposite())
    }

    /// The king square of `color`, if that side has a king.
    #[inline]
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.pieces(color, Role::King).lsb()
    }

    /// Returns the color and role on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Role)> {
        if !self.occupied.contains(sq) {
            return None;
        }
        let color = if self.by_color[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        Role::ALL
            .into_iter()
            .find(|role| self.by_role[role.index()].contains(sq))
            .map(|role| (color, role))
    }

    #[inline]
    fn rooks_and_queens(&self) -> Bitboard {
        self.by_role[Role::Rook.index()] | self.by_role[Role::Queen.index()]
    }

    #[inline]
    fn bishops_and_queens(&self) -> Bitboard {
        self.by_role[Role::Bishop.index()] | self.by_role[Role::Queen.index()]
    }

    /// Pieces of `attacker` that attack `sq` when the board holds `occupied`.
    pub fn attacks_to<A: Attacks + ?Sized>(
        &self,
        tables: &A,
        sq: Square,
        attacker: Color,
        occupied: Bitboard,
    ) -> Bitboard {
        self.by_color[attacker.index()]
            & ((tables.rook_attacks(sq, occupied) & self.rooks_and_queens())
                | (tables.bishop_attacks(sq, occupied) & self.bishops_and_queens())
                | (tables.knight_attacks(sq) & self.by_role[Role::Knight.index()])
                | (tables.king_attacks(sq) & self.by_role[Role::King.index()])
                | (tables.pawn_attacks(attacker.opposite(), sq) & self.by_role[Role::Pawn.index()]))
    }

    /// Pieces of `attacker` that attack `sq` on the current board.
    #[inline]
    pub fn attackers_of<A: Attacks + ?Sized>(&self, tables: &A, sq: Square, attacker: Color) -> Bitboard {
        self.attacks_to(tables, sq, attacker, self.occupied)
    }

    /// Opponent pieces giving check to the side to move.
    pub fn checkers<A: Attacks + ?Sized>(&self, tables: &A) -> Bitboard {
        match self.king_of(self.turn) {
            Some(king) => self.attackers_of(tables, king, self.turn.opposite()),
            None => Bitboard::EMPTY,
        }
    }

    /// Returns true if the side to move is in check.
    #[inline]
    pub fn is_check<A: Attacks + ?Sized>(&self, tables: &A) -> bool {
        self.checkers(tables).is_not_empty()
    }

    /// Pieces of either color that are the only piece between `king` and an
    /// enemy slider aimed at it.
    pub fn slider_blockers<A: Attacks + ?Sized>(&self, tables: &A, king: Square) -> Bitboard {
        let snipers = self.them()
            & ((tables.rook_attacks(king, Bitboard::EMPTY) & self.rooks_and_queens())
                | (tables.bishop_attacks(king, Bitboard::EMPTY) & self.bishops_and_queens()));

        let mut blockers = Bitboard::EMPTY;
        for sniper in snipers {
            let between = tables.between(king, sniper) & self.occupied;
            if !between.more_than_one() {
                blockers |= between;
            }
        }
        blockers
    }

    /// Checkmate or stalemate if the side to move has no legal move.
    pub fn outcome<A: Attacks + ?Sized>(&self, tables: &A) -> Option<Outcome> {
        if !self.legal_moves(tables).is_empty() {
            return None;
        }
        Some(if self.is_check(tables) {
            Outcome::Checkmate {
                winner: self.turn.opposite(),
            }
        } else {
            Outcome::Stalemate
        })
    }

    fn discard(&mut self, sq: Square, color: Color, role: Role) {
        self.by_role[role.index()].clear(sq);
        self.by_color[color.index()].clear(sq);
        self.occupied.clear(sq);
    }

    /// Places a piece of the side to move on `sq`, removing anything there.
    fn put(&mut self, sq: Square, role: Role) {
        for bb in self.by_role.iter_mut().chain(self.by_color.iter_mut()) {
            bb.clear(sq);
        }
        self.by_role[role.index()].set(sq);
        self.by_color[self.turn.index()].set(sq);
        self.occupied.set(sq);
    }

    /// Plays a move generated for this exact position.
    ///
    /// No legality checks are made; anything else leaves the position in an
    /// unspecified (but memory-safe) state.
    pub fn play(&mut self, mv: Move) {
        debug_assert!(self.us().contains(mv.from()), "no own piece on {}", mv.from());

        let turn = self.turn;
        self.ep_square = None;

        match mv {
            Move::Normal {
                role,
                from,
                capture,
                to,
                promotion,
            } => {
                if role == Role::Pawn && from.index().abs_diff(to.index()) == 16 {
                    self.ep_square = match turn {
                        Color::White => from.offset(8),
                        Color::Black => from.offset(-8),
                    };
                }

                if self.castling_rights.is_not_empty() {
                    if role == Role::King {
                        self.castling_rights &= !Bitboard::relative_rank(turn, 0);
                    } else if role == Role::Rook {
                        self.castling_rights.clear(from);
                    }
                    if capture {
                        self.castling_rights.clear(to);
                    }
                }

                self.discard(from, turn, role);
                self.put(to, promotion.unwrap_or(role));
            }
            Move::Castle { king, rook } => {
                self.castling_rights &= !Bitboard::relative_rank(turn, 0);
                let (king_to, rook_to) = Move::castling_targets(king, rook);
                self.discard(king, turn, Role::King);
                self.discard(rook, turn, Role::Rook);
                self.put(rook_to, Role::Rook);
                self.put(king_to, Role::King);
            }
            Move::EnPassant { from, to } => {
                self.discard(Square::combine(to, from), turn.opposite(), Role::Pawn);
                self.discard(from, turn, Role::Pawn);
                self.put(to, Role::Pawn);
            }
        }

        self.turn = turn.opposite();
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_fen())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in File::ALL {
                let sq = Square::new(file, Rank::ALL[rank as usize]);
                let c = self
                    .piece_at(sq)
                    .map_or('.', |(color, role)| role.to_fen_char(color));
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attacks::MagicTables;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn tables() -> &'static MagicTables {
        MagicTables::global()
    }

    #[test]
    fn startpos_matches_fen() {
        assert_eq!(Position::new(), Position::from_fen(Fen::STARTPOS).unwrap());
        assert_eq!(Position::default().to_fen(), Fen::STARTPOS);
    }

    #[test]
    fn custom_fen_roundtrip() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 1";
        assert_eq!(Position::from_fen(fen).unwrap().to_fen(), fen);
    }

    #[test]
    fn missing_counters_are_accepted() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
        assert_eq!(pos.to_fen(), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    }

    #[test]
    fn king_count_is_checked() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(PositionError::KingCount {
                color: Color::Black,
                count: 0
            })
        );
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"),
            Err(PositionError::KingCount {
                color: Color::White,
                count: 2
            })
        );
    }

    #[test]
    fn fen_errors_pass_through() {
        assert!(matches!(
            Position::from_fen("not a fen"),
            Err(PositionError::Fen(_))
        ));
    }

    #[test]
    fn piece_at() {
        let pos = Position::new();
        assert_eq!(pos.piece_at(Square::E1), Some((Color::White, Role::King)));
        assert_eq!(pos.piece_at(Square::D8), Some((Color::Black, Role::Queen)));
        assert_eq!(pos.piece_at(sq("e4")), None);
    }

    #[test]
    fn pieces_and_sides() {
        let pos = Position::new();
        assert_eq!(pos.occupied().count(), 32);
        assert_eq!(pos.pieces(Color::White, Role::Pawn).count(), 8);
        assert_eq!(pos.us(), pos.by_color(Color::White));
        assert_eq!(pos.them(), pos.by_color(Color::Black));
        assert_eq!(pos.king_of(Color::Black), Some(Square::E8));
    }

    #[test]
    fn castling_rights_from_kqkq() {
        let pos = Position::new();
        let rights: Vec<Square> = pos.castling_rights().into_iter().collect();
        assert_eq!(rights, vec![Square::A1, Square::H1, Square::A8, Square::H8]);
    }

    #[test]
    fn castling_rights_shredder_style() {
        let fen = "bqnb1rkr/pp3ppp/3ppn2/2p5/5P2/P2P4/NPP1P1PP/BQ1BNRKR w HFhf - 2 9";
        let pos = Position::from_fen(fen).unwrap();
        let rights: Vec<Square> = pos.castling_rights().into_iter().collect();
        assert_eq!(rights, vec![Square::F1, Square::H1, Square::F8, Square::H8]);
        // each rook is the outermost on its side of the g-file king
        assert_eq!(
            pos.to_fen(),
            "bqnb1rkr/pp3ppp/3ppn2/2p5/5P2/P2P4/NPP1P1PP/BQ1BNRKR w KQkq - 0 1"
        );
    }

    #[test]
    fn castling_without_rook_is_dropped() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w KQkq - 0 1").unwrap();
        assert!(pos.castling_rights().is_empty());
    }

    #[test]
    fn en_passant_kept_only_when_plausible() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(pos.ep_square(), Some(sq("e3")));
        assert_eq!(pos.to_fen(), fen);

        let bogus = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - e3 0 1").unwrap();
        assert_eq!(bogus.ep_square(), None);
    }

    #[test]
    fn play_double_push_sets_ep() {
        let mut pos = Position::new();
        pos.play(Move::Normal {
            role: Role::Pawn,
            from: sq("e2"),
            capture: false,
            to: sq("e4"),
            promotion: None,
        });
        assert_eq!(pos.ep_square(), Some(sq("e3")));
        assert_eq!(pos.turn(), Color::Black);
        assert_eq!(
            pos.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );

        pos.play(Move::Normal {
            role: Role::Knight,
            from: Square::G8,
            capture: false,
            to: sq("f6"),
            promotion: None,
        });
        assert_eq!(pos.ep_square(), None);
    }

    #[test]
    fn play_king_move_clears_own_rights() {
        let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        pos.play(Move::Normal {
            role: Role::King,
            from: Square::E1,
            capture: false,
            to: Square::F1,
            promotion: None,
        });
        assert_eq!(
            pos.castling_rights(),
            Bitboard::from_square(Square::A8) | Bitboard::from_square(Square::H8)
        );
    }

    #[test]
    fn play_rook_capture_clears_both_rights() {
        let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        pos.play(Move::Normal {
            role: Role::Rook,
            from: Square::H1,
            capture: true,
            to: Square::H8,
            promotion: None,
        });
        assert!(!pos.castling_rights().contains(Square::H1));
        assert!(!pos.castling_rights().contains(Square::H8));
        assert!(pos.castling_rights().contains(Square::A1));
        assert!(pos.castling_rights().contains(Square::A8));
        assert_eq!(pos.piece_at(Square::H8), Some((Color::White, Role::Rook)));
        // Black to move, left with king and a8 rook
        assert_eq!(pos.us().count(), 2);
        assert_eq!(pos.them().count(), 3);
    }

    #[test]
    fn play_castle_places_king_and_rook() {
        let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        pos.play(Move::Castle {
            king: Square::E1,
            rook: Square::A1,
        });
        assert_eq!(pos.to_fen(), "r3k2r/8/8/8/8/8/8/2KR3R b kq - 0 1");

        pos.play(Move::Castle {
            king: Square::E8,
            rook: Square::H8,
        });
        assert_eq!(pos.to_fen(), "r4rk1/8/8/8/8/8/8/2KR3R w - - 0 1");
    }

    #[test]
    fn play_en_passant_removes_pawn() {
        let mut pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        pos.play(Move::EnPassant {
            from: sq("e5"),
            to: sq("d6"),
        });
        assert_eq!(pos.to_fen(), "4k3/8/3P4/8/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn play_promotion_replaces_pawn() {
        let mut pos = Position::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        pos.play(Move::Normal {
            role: Role::Pawn,
            from: sq("a7"),
            capture: true,
            to: Square::B8,
            promotion: Some(Role::Knight),
        });
        assert_eq!(pos.piece_at(Square::B8), Some((Color::White, Role::Knight)));
        assert!(pos.by_role(Role::Pawn).is_empty());
        assert_eq!(pos.to_fen(), "1N2k3/8/8/8/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn attacks_and_check() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").unwrap();
        assert!(pos.is_check(tables()));
        assert_eq!(pos.checkers(tables()), Bitboard::from_square(sq("e2")));
        assert!(!Position::new().is_check(tables()));

        // a piece on e3 shields e4 from the rook
        let blocked = pos.occupied().with(sq("e3"));
        assert!(pos
            .attacks_to(tables(), sq("e4"), Color::Black, blocked)
            .is_empty());
        assert!(pos
            .attackers_of(tables(), sq("e3"), Color::Black)
            .contains(sq("e2")));
    }

    #[test]
    fn slider_blockers_include_both_colors() {
        // white bishop pinned on e2, black knight alone on the a5-e1 diagonal
        let pos = Position::from_fen("k3r3/8/8/b7/8/2n5/4B3/4K3 w - - 0 1").unwrap();
        let blockers = pos.slider_blockers(tables(), Square::E1);
        assert!(blockers.contains(sq("e2")));
        assert!(blockers.contains(sq("c3")));
        assert_eq!(blockers.count(), 2);
    }

    #[test]
    fn outcome_distinguishes_mate_and_stalemate() {
        let mate = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(
            mate.outcome(tables()),
            Some(Outcome::Checkmate {
                winner: Color::White
            })
        );

        let stale = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(stale.outcome(tables()), Some(Outcome::Stalemate));

        assert_eq!(Position::new().outcome(tables()), None);
    }
}
