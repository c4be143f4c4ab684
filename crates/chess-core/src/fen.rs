//! FEN (Forsyth-Edwards Notation) field reader.
//!
//! Reads the text fields into typed values. Turning them into a playable
//! position (and resolving `KQkq` into rook squares) is left to the engine.

use crate::{Color, File, Rank, Role, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 or 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// One token of the castling field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingToken {
    /// `K` / `k`: the outermost rook on the h-side of the king.
    KingSide(Color),
    /// `Q` / `q`: the outermost rook on the a-side of the king.
    QueenSide(Color),
    /// `A`-`H` / `a`-`h` (Shredder-FEN): the rook on this file.
    File(Color, File),
}

impl CastlingToken {
    /// The side this right belongs to.
    pub fn color(self) -> Color {
        match self {
            CastlingToken::KingSide(c) | CastlingToken::QueenSide(c) | CastlingToken::File(c, _) => c,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match c.to_ascii_lowercase() {
            'k' => Some(CastlingToken::KingSide(color)),
            'q' => Some(CastlingToken::QueenSide(color)),
            other => File::from_char(other).map(|file| CastlingToken::File(color, file)),
        }
    }
}

/// Parsed FEN fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Pieces on the board, in a8..h1 reading order.
    pub pieces: Vec<(Square, Role, Color)>,
    /// Side to move.
    pub turn: Color,
    /// Castling tokens in the order they appeared.
    pub castling: Vec<CastlingToken>,
    /// En passant target square, if any.
    pub en_passant: Option<Square>,
    /// Halfmove clock (0 when the field is omitted).
    pub halfmove_clock: u32,
    /// Fullmove number (1 when the field is omitted).
    pub fullmove_number: u32,
}

impl Fen {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    ///
    /// The move counters may be omitted (4-field EPD style).
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 4 && parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let pieces = Self::parse_placement(parts[0])?;

        let mut turn_chars = parts[1].chars();
        let turn = match (turn_chars.next().and_then(Color::from_char), turn_chars.next()) {
            (Some(color), None) => color,
            _ => return Err(FenError::InvalidActiveColor(parts[1].to_string())),
        };

        let castling = Self::parse_castling(parts[2])?;
        let en_passant = Self::parse_en_passant(parts[3])?;

        let (halfmove_clock, fullmove_number) = if parts.len() == 6 {
            let halfmove = parts[4]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;
            let fullmove = parts[5]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;
            (halfmove, fullmove)
        } else {
            (0, 1)
        };

        Ok(Fen {
            pieces,
            turn,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn parse_placement(placement: &str) -> Result<Vec<(Square, Role, Color)>, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut pieces = Vec::with_capacity(32);
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as u8;
                    if file > 8 {
                        return Err(FenError::InvalidPiecePlacement(format!(
                            "rank {} is too long",
                            rank + 1
                        )));
                    }
                } else if let Some((role, color)) = Role::from_fen_char(c) {
                    let sq = Square::from_coords(file, rank).ok_or_else(|| {
                        FenError::InvalidPiecePlacement(format!("rank {} is too long", rank + 1))
                    })?;
                    pieces.push((sq, role, color));
                    file += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        rank + 1
                    )));
                }
            }
            if file != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    rank + 1,
                    file
                )));
            }
        }

        Ok(pieces)
    }

    fn parse_castling(castling: &str) -> Result<Vec<CastlingToken>, FenError> {
        if castling == "-" {
            return Ok(Vec::new());
        }

        castling
            .chars()
            .map(|c| {
                CastlingToken::from_char(c).ok_or_else(|| {
                    FenError::InvalidCastlingRights(format!("invalid character '{}'", c))
                })
            })
            .collect()
    }

    fn parse_en_passant(ep: &str) -> Result<Option<Square>, FenError> {
        if ep == "-" {
            return Ok(None);
        }

        match Square::from_algebraic(ep) {
            Some(sq) if sq.rank() == Rank::R3 || sq.rank() == Rank::R6 => Ok(Some(sq)),
            _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
        }
    }
}
