//! Core value types for the move-index oracle.
//!
//! This crate provides the small immutable types shared by the generator and
//! its consumers:
//! - [`Role`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for generated moves and [`UciMove`] for moves written as text
//! - [`Fen`] for reading FEN fields

mod color;
mod fen;
mod mov;
mod role;
mod square;

pub use color::Color;
pub use fen::{CastlingToken, Fen, FenError};
pub use mov::{Move, UciMove};
pub use role::Role;
pub use square::{File, Rank, Square};
