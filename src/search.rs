//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! The search walks the game tree depth-first, applying and undoing moves on
//! the caller's position. Leaves are scored with [`leaf_value`]. Nodes with no
//! legal moves are not treated specially: they return the untouched sentinel,
//! so mate and stalemate are only "seen" through the evaluator and the depth
//! bound.
//!
//! Every apply is paired with an undo before the frame returns, including on
//! a cutoff, so the position comes back exactly as it went in. A rules error
//! ends the search immediately; the position is then in an unspecified state.
//! A frame still tries its undo when the line below it failed, but the error
//! from deeper in the tree is the one returned.

use log::trace;

use crate::constants::SENTINEL;
use crate::eval::leaf_value;
use crate::rules::{Rules, RulesError};

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, leaves included
    pub nodes: u64,
    /// Positions scored by the evaluator
    pub leaves: u64,
    /// Move loops abandoned early because `beta <= alpha`
    pub cutoffs: u64,
}

/// Minimax value of `pos` searched `depth` plies deep inside the window
/// (`alpha`, `beta`).
///
/// `maximizing` says whether the side to move at this node picks the largest
/// score. At depth zero the window and `maximizing` are ignored.
pub fn search<R: Rules>(
    pos: &mut R,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> Result<i32, RulesError> {
    let mut stats = SearchStats::default();
    search_with_stats(pos, depth, alpha, beta, maximizing, &mut stats)
}

/// Same as [`search`], also counting nodes, leaves and cutoffs into `stats`.
pub fn search_with_stats<R: Rules>(
    pos: &mut R,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> Result<i32, RulesError> {
    stats.nodes += 1;
    if depth == 0 {
        stats.leaves += 1;
        return Ok(leaf_value(pos));
    }

    let moves = pos.legal_moves(None);

    if maximizing {
        let mut best = -SENTINEL;
        for mv in &moves {
            pos.apply_move(mv)?;
            let value = search_with_stats(pos, depth - 1, alpha, beta, false, stats);
            let undone = pos.undo_move();
            let value = value?;
            undone?;
            best = best.max(value);
            alpha = alpha.max(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                trace!("beta cutoff at depth {depth}: best={best} alpha={alpha} beta={beta}");
                return Ok(best);
            }
        }
        Ok(best)
    } else {
        let mut best = SENTINEL;
        for mv in &moves {
            pos.apply_move(mv)?;
            let value = search_with_stats(pos, depth - 1, alpha, beta, true, stats);
            let undone = pos.undo_move();
            let value = value?;
            undone?;
            best = best.min(value);
            beta = beta.min(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                trace!("alpha cutoff at depth {depth}: best={best} alpha={alpha} beta={beta}");
                return Ok(best);
            }
        }
        Ok(best)
    }
}

/// Plain minimax over the full tree, no pruning.
///
/// Returns the value alpha-beta computes with a window wider than the
/// sentinel; useful to measure how much the pruning saves.
pub fn minimax<R: Rules>(
    pos: &mut R,
    depth: u32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> Result<i32, RulesError> {
    stats.nodes += 1;
    if depth == 0 {
        stats.leaves += 1;
        return Ok(leaf_value(pos));
    }

    let mut best = if maximizing { -SENTINEL } else { SENTINEL };
    for mv in &pos.legal_moves(None) {
        pos.apply_move(mv)?;
        let value = minimax(pos, depth - 1, !maximizing, stats);
        let undone = pos.undo_move();
        let value = value?;
        undone?;
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    Ok(best)
}
