//! Move index codec.
//!
//! A move is stored as its index in the ordered legal-move list of the
//! position it was played from. Replaying a game from the same start
//! position recovers every move. The index stream is what a compressor
//! entropy-codes; bit packing is not done here.

use chess_core::{Move, UciMove};
use thiserror::Error;

use crate::attacks::Attacks;
use crate::movegen::{generate_moves, MoveList};
use crate::Position;

/// Errors while turning moves into indices or back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("ply {ply}: {mv} is not a legal move")]
    IllegalMove { ply: usize, mv: Move },

    #[error("ply {ply}: index {index} out of range, position has {len} legal moves")]
    IndexOutOfRange { ply: usize, index: usize, len: usize },

    #[error("ply {ply}: cannot read UCI move '{uci}'")]
    InvalidUci { ply: usize, uci: String },

    #[error("ply {ply}: game is already over")]
    GameOver { ply: usize },
}

/// Index of `mv` among the legal moves of `position`.
pub fn move_to_index<A: Attacks + ?Sized>(
    position: &Position,
    tables: &A,
    mv: &Move,
) -> Result<usize, CodecError> {
    index_at_ply(&position.legal_moves(tables), mv, 0)
}

/// The legal move of `position` at `index`.
pub fn index_to_move<A: Attacks + ?Sized>(
    position: &Position,
    tables: &A,
    index: usize,
) -> Result<Move, CodecError> {
    move_at_ply(&position.legal_moves(tables), index, 0)
}

fn index_at_ply(moves: &MoveList, mv: &Move, ply: usize) -> Result<usize, CodecError> {
    if moves.is_empty() {
        tracing::debug!(ply, "no legal moves left to encode against");
        return Err(CodecError::GameOver { ply });
    }
    moves.position_of(mv).ok_or_else(|| {
        tracing::debug!(ply, mv = %mv, "rejecting illegal move");
        CodecError::IllegalMove { ply, mv: *mv }
    })
}

fn move_at_ply(moves: &MoveList, index: usize, ply: usize) -> Result<Move, CodecError> {
    if moves.is_empty() {
        tracing::debug!(ply, "no legal moves left to decode against");
        return Err(CodecError::GameOver { ply });
    }
    moves.as_slice().get(index).copied().ok_or_else(|| {
        tracing::debug!(ply, index, len = moves.len(), "rejecting index");
        CodecError::IndexOutOfRange {
            ply,
            index,
            len: moves.len(),
        }
    })
}

/// Resolves a UCI string against the legal moves.
///
/// An exact non-castling match wins; otherwise castling is matched in either
/// the king-to-destination or the king-to-rook spelling.
fn resolve_uci(moves: &MoveList, uci: &str, ply: usize) -> Result<Move, CodecError> {
    let parsed = UciMove::parse(uci).ok_or_else(|| CodecError::InvalidUci {
        ply,
        uci: uci.to_string(),
    })?;

    moves
        .iter()
        .find(|m| !m.is_castle() && parsed.matches(m))
        .or_else(|| moves.iter().find(|m| m.is_castle() && parsed.matches(m)))
        .copied()
        .ok_or_else(|| {
            tracing::debug!(ply, uci, "no legal move matches");
            CodecError::InvalidUci {
                ply,
                uci: uci.to_string(),
            }
        })
}

/// Encodes a game played from `start` as one index per ply.
pub fn encode_game<A: Attacks + ?Sized>(
    start: &Position,
    tables: &A,
    moves: &[Move],
) -> Result<Vec<u16>, CodecError> {
    let mut position = start.clone();
    let mut legal = MoveList::new();
    let mut indices = Vec::with_capacity(moves.len());

    for (ply, mv) in moves.iter().enumerate() {
        generate_moves(&position, tables, &mut legal);
        indices.push(index_at_ply(&legal, mv, ply)? as u16);
        position.play(*mv);
    }

    Ok(indices)
}

/// Decodes an index stream produced by [`encode_game`] from the same start.
pub fn decode_game<A: Attacks + ?Sized>(
    start: &Position,
    tables: &A,
    indices: &[u16],
) -> Result<Vec<Move>, CodecError> {
    let mut position = start.clone();
    let mut legal = MoveList::new();
    let mut moves = Vec::with_capacity(indices.len());

    for (ply, &index) in indices.iter().enumerate() {
        generate_moves(&position, tables, &mut legal);
        let mv = move_at_ply(&legal, index as usize, ply)?;
        position.play(mv);
        moves.push(mv);
    }

    Ok(moves)
}

/// Encodes a game given as UCI strings.
pub fn encode_uci_game<A, S>(start: &Position, tables: &A, moves: &[S]) -> Result<Vec<u16>, CodecError>
where
    A: Attacks + ?Sized,
    S: AsRef<str>,
{
    let mut position = start.clone();
    let mut legal = MoveList::new();
    let mut indices = Vec::with_capacity(moves.len());

    for (ply, uci) in moves.iter().enumerate() {
        generate_moves(&position, tables, &mut legal);
        if legal.is_empty() {
            return Err(CodecError::GameOver { ply });
        }
        let mv = resolve_uci(&legal, uci.as_ref(), ply)?;
        indices.push(index_at_ply(&legal, &mv, ply)? as u16);
        position.play(mv);
    }

    Ok(indices)
}

/// Decodes an index stream into UCI strings (castling as king to
/// destination).
pub fn decode_uci_game<A: Attacks + ?Sized>(
    start: &Position,
    tables: &A,
    indices: &[u16],
) -> Result<Vec<String>, CodecError> {
    Ok(decode_game(start, tables, indices)?
        .into_iter()
        .map(Move::to_uci)
        .collect())
}

/// Information content of a game under a uniform model over legal moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitsSummary {
    pub plies: usize,
    /// Sum of log2(number of legal moves) over all plies.
    pub total_bits: f64,
}

impl BitsSummary {
    /// Average bits per ply, zero for an empty game.
    pub fn mean(&self) -> f64 {
        if self.plies == 0 {
            0.0
        } else {
            self.total_bits / self.plies as f64
        }
    }
}

/// Ideal code length of a game if every legal move were equally likely.
pub fn bits_per_move<A: Attacks + ?Sized>(
    start: &Position,
    tables: &A,
    moves: &[Move],
) -> Result<BitsSummary, CodecError> {
    let mut position = start.clone();
    let mut legal = MoveList::new();
    let mut total_bits = 0.0;

    for (ply, mv) in moves.iter().enumerate() {
        generate_moves(&position, tables, &mut legal);
        index_at_ply(&legal, mv, ply)?;
        total_bits += (legal.len() as f64).log2();
        position.play(*mv);
    }

    Ok(BitsSummary {
        plies: moves.len(),
        total_bits,
    })
}
