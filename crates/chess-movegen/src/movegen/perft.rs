//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use super::{generate_moves, MoveList};
use crate::attacks::Attacks;
use crate::Position;

/// Counts the number of leaf nodes at the given depth.
pub fn perft<A: Attacks + ?Sized>(position: &Position, tables: &A, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveList::new();
    generate_moves(position, tables, &mut moves);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let mut child = position.clone();
        child.play(*m);
        nodes += perft(&child, tables, depth - 1);
    }
    nodes
}

/// Node counts below each root move, labelled in UCI and sorted by label.
/// Useful for narrowing down which move subtree disagrees with a reference.
pub fn perft_divide<A: Attacks + ?Sized>(position: &Position, tables: &A, depth: u32) -> Vec<(String, u64)> {
    let moves = position.legal_moves(tables);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let mut child = position.clone();
        child.play(*m);
        let nodes = perft(&child, tables, depth.saturating_sub(1));
        tracing::trace!(mv = %m, nodes, "perft root move");
        results.push((m.to_uci(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
