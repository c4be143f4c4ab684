//! Legal move generation for the move-index oracle.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit square sets
//! - [`Attacks`] - attack lookups, backed by [`MagicTables`] or [`RayTables`]
//! - [`Position`] - board state, move application and check queries
//! - [`generate_moves`] - legal moves in a fixed, reproducible order
//! - [`codec`] - moves to indices and back
//! - [`perft`] - node counting for validating the generator
//!
//! # Example
//!
//! ```
//! use chess_movegen::{codec, MagicTables, Position};
//!
//! let tables = MagicTables::global();
//! let start = Position::new();
//!
//! let indices = codec::encode_uci_game(&start, tables, &["e2e4", "e7e5"]).unwrap();
//! assert_eq!(indices, vec![12, 12]);
//!
//! let moves = codec::decode_uci_game(&start, tables, &indices).unwrap();
//! assert_eq!(moves, vec!["e2e4", "e7e5"]);
//! ```

pub mod attacks;
mod bitboard;
pub mod codec;
pub mod movegen;
mod position;

pub use attacks::{Attacks, MagicTables, RayTables};
pub use bitboard::{Bitboard, BitboardIter};
pub use codec::CodecError;
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{generate_moves, MoveList};
pub use position::{Outcome, Position, PositionError};
