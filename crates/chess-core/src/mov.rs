//! Move representation.

use crate::{Role, Square};
use std::fmt;

/// A chess move as produced by the legal move generator.
///
/// Two moves with equal fields are interchangeable; the encoder and decoder
/// rely on value equality to map a move to its index in the move list.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Any move that is not en passant or castling, including promotions.
    Normal {
        role: Role,
        from: Square,
        capture: bool,
        to: Square,
        promotion: Option<Role>,
    },
    /// A pawn capturing en passant; `to` is the square behind the captured pawn.
    EnPassant { from: Square, to: Square },
    /// Castling, keyed by the king's and the rook's origin squares.
    Castle { king: Square, rook: Square },
}

impl Move {
    /// Returns the role of the moving piece.
    #[inline]
    pub const fn role(self) -> Role {
        match self {
            Move::Normal { role, .. } => role,
            Move::EnPassant { .. } => Role::Pawn,
            Move::Castle { .. } => Role::King,
        }
    }

    /// Returns the origin square (the king's square for castling).
    #[inline]
    pub const fn from(self) -> Square {
        match self {
            Move::Normal { from, .. } | Move::EnPassant { from, .. } => from,
            Move::Castle { king, .. } => king,
        }
    }

    /// Returns the nominal destination square.
    ///
    /// For castling this is the rook's origin, not where the king lands.
    #[inline]
    pub const fn to(self) -> Square {
        match self {
            Move::Normal { to, .. } | Move::EnPassant { to, .. } => to,
            Move::Castle { rook, .. } => rook,
        }
    }

    /// Returns the promotion role, if any.
    #[inline]
    pub const fn promotion(self) -> Option<Role> {
        match self {
            Move::Normal { promotion, .. } => promotion,
            _ => None,
        }
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    /// Where king and rook end up after castling, as `(king_to, rook_to)`.
    ///
    /// The king lands on the c- or g-file and the rook on the d- or f-file
    /// of the back rank, depending on which side of the king the rook
    /// stands. This holds for any starting files.
    #[inline]
    pub const fn castling_targets(king: Square, rook: Square) -> (Square, Square) {
        if rook.index() < king.index() {
            (Square::combine(Square::C1, king), Square::combine(Square::D1, rook))
        } else {
            (Square::combine(Square::G1, king), Square::combine(Square::F1, rook))
        }
    }

    /// Returns the UCI notation (e.g., "e2e4", "e7e8q", "e1g1").
    ///
    /// Castling is written king-to-destination, as standard UCI expects.
    pub fn to_uci(self) -> String {
        match self {
            Move::Castle { king, rook } => {
                let (king_to, _) = Move::castling_targets(king, rook);
                format!("{}{}", king, king_to)
            }
            _ => self.to_uci_chess960(),
        }
    }

    /// Returns the UCI notation with castling written king-to-rook.
    pub fn to_uci_chess960(self) -> String {
        match self.promotion() {
            Some(role) => format!("{}{}{}", self.from(), self.to(), role.char()),
            None => format!("{}{}", self.from(), self.to()),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

/// A move as written in UCI notation, before it is resolved against a
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UciMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl UciMove {
    /// Parses a move from UCI notation.
    pub fn parse(s: &str) -> Option<Self> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match Role::from_char(c.to_ascii_lowercase())? {
                Role::Pawn | Role::King => return None,
                role => Some(role),
            },
        };
        Some(UciMove {
            from,
            to,
            promotion,
        })
    }

    /// Returns true if `m` is written as this UCI string.
    ///
    /// Castling matches both the king-to-destination and the king-to-rook
    /// spelling.
    pub fn matches(&self, m: &Move) -> bool {
        match *m {
            Move::Normal {
                from,
                to,
                promotion,
                ..
            } => self.from == from && self.to == to && self.promotion == promotion,
            Move::EnPassant { from, to } => {
                self.from == from && self.to == to && self.promotion.is_none()
            }
            Move::Castle { king, rook } => {
                let (king_to, _) = Move::castling_targets(king, rook);
                self.from == king
                    && (self.to == rook || self.to == king_to)
                    && self.promotion.is_none()
            }
        }
    }
}

impl fmt::Display for UciMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn normal_move_accessors() {
        let m = Move::Normal {
            role: Role::Knight,
            from: sq("g1"),
            capture: false,
            to: sq("f3"),
            promotion: None,
        };
        assert_eq!(m.role(), Role::Knight);
        assert_eq!(m.from(), sq("g1"));
        assert_eq!(m.to(), sq("f3"));
        assert_eq!(m.to_uci(), "g1f3");
    }

    #[test]
    fn promotion_uci() {
        let m = Move::Normal {
            role: Role::Pawn,
            from: sq("e7"),
            capture: true,
            to: sq("d8"),
            promotion: Some(Role::Knight),
        };
        assert_eq!(m.to_uci(), "e7d8n");
        assert_eq!(m.promotion(), Some(Role::Knight));
    }

    #[test]
    fn castle_targets_standard() {
        assert_eq!(
            Move::castling_targets(Square::E1, Square::H1),
            (Square::G1, Square::F1)
        );
        assert_eq!(
            Move::castling_targets(Square::E8, Square::A8),
            (Square::C8, Square::D8)
        );
    }

    #[test]
    fn castle_targets_shifted_files() {
        // king on b1, rook on a1: king to c1, rook to d1
        assert_eq!(
            Move::castling_targets(Square::B1, Square::A1),
            (Square::C1, Square::D1)
        );
        // king on f8, rook on g8
        assert_eq!(
            Move::castling_targets(Square::F8, Square::G8),
            (Square::G8, Square::F8)
        );
    }

    #[test]
    fn castle_uci_spellings() {
        let m = Move::Castle {
            king: Square::E1,
            rook: Square::H1,
        };
        assert_eq!(m.to_uci(), "e1g1");
        assert_eq!(m.to_uci_chess960(), "e1h1");
        assert_eq!(m.role(), Role::King);
        assert_eq!(m.to(), Square::H1);
    }

    #[test]
    fn en_passant_accessors() {
        let m = Move::EnPassant {
            from: sq("e5"),
            to: sq("d6"),
        };
        assert!(m.is_en_passant());
        assert_eq!(m.role(), Role::Pawn);
    }

    #[test]
    fn uci_parse() {
        let u = UciMove::parse("e7e8q").unwrap();
        assert_eq!(u.from, sq("e7"));
        assert_eq!(u.to, sq("e8"));
        assert_eq!(u.promotion, Some(Role::Queen));
        assert_eq!(u.to_string(), "e7e8q");

        assert!(UciMove::parse("e2").is_none());
        assert!(UciMove::parse("e2e4qq").is_none());
        assert!(UciMove::parse("e2e9").is_none());
        assert!(UciMove::parse("e7e8k").is_none());
        assert!(UciMove::parse("e7e8x").is_none());
    }

    #[test]
    fn uci_matches_castle_both_ways() {
        let castle = Move::Castle {
            king: Square::E1,
            rook: Square::A1,
        };
        assert!(UciMove::parse("e1c1").unwrap().matches(&castle));
        assert!(UciMove::parse("e1a1").unwrap().matches(&castle));
        assert!(!UciMove::parse("e1d1").unwrap().matches(&castle));
    }

    #[test]
    fn uci_matches_requires_promotion() {
        let m = Move::Normal {
            role: Role::Pawn,
            from: sq("a7"),
            capture: false,
            to: sq("a8"),
            promotion: Some(Role::Rook),
        };
        assert!(UciMove::parse("a7a8r").unwrap().matches(&m));
        assert!(!UciMove::parse("a7a8").unwrap().matches(&m));
        assert!(!UciMove::parse("a7a8q").unwrap().matches(&m));
    }

    #[test]
    fn move_debug_display() {
        let m = Move::Normal {
            role: Role::Pawn,
            from: sq("e2"),
            capture: false,
            to: sq("e4"),
            promotion: None,
        };
        assert_eq!(format!("{:?}", m), "Move(e2e4)");
        assert_eq!(format!("{}", m), "e2e4");
    }
}
