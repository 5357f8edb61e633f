use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU64, Ordering};

use crate::board::position::Position;
use crate::search::line::Line;
use crate::search::movelist::MoveList;
use crate::search::negamax::{leaf_score, terminal_score};
use crate::search::eval::SCORE_INF;

// Shared state of a splitting node. Alpha is raised monotonically with a CAS
// loop; the cancel flag is advisory and sampled between sibling iterations,
// so a worker already inside a recursive call finishes it and its result is
// still folded in (a late arrival cannot worsen the best).
pub(crate) struct NodeShared {
    alpha: AtomicI32,
    cancel: AtomicBool,
}

impl NodeShared {
    pub(crate) fn new(alpha: i32) -> Self {
        Self { alpha: AtomicI32::new(alpha), cancel: AtomicBool::new(false) }
    }

    // Snapshot read, taken without any lock held. A stale (smaller) alpha
    // only widens the child window and never changes the folded score.
    #[inline]
    pub(crate) fn alpha(&self) -> i32 { self.alpha.load(Ordering::Relaxed) }

    #[inline]
    pub(crate) fn cancelled(&self) -> bool { self.cancel.load(Ordering::Relaxed) }

    #[inline]
    pub(crate) fn cancel(&self) { self.cancel.store(true, Ordering::Relaxed); }

    pub(crate) fn raise_alpha(&self, score: i32) {
        let mut cur = self.alpha.load(Ordering::Relaxed);
        while score > cur {
            match self.alpha.compare_exchange(cur, score, Ordering::Relaxed, Ordering::Relaxed) {
                Ok(_) => break,
                Err(observed) => {
                    if observed >= score { break; }
                    cur = observed;
                }
            }
        }
    }
}

// Fold sibling results after the join, in list order. Ties on score resolve
// to the lowest sibling index; this is the documented tie-break for the
// best line, and it makes the folded score the deterministic maximum.
pub(crate) fn fold_results(
    mut best_score: i32,
    mut best_line: Line,
    mut results: Vec<(usize, Line, i32)>,
) -> (Line, i32) {
    results.sort_by_key(|&(i, _, _)| i);
    for (_, line, score) in results {
        if score > best_score {
            best_score = score;
            best_line = line;
        }
    }
    (best_line, best_score)
}

/// Naive parallel alpha-beta: every sibling is distributed over the worker
/// team, at every interior node, each worker recursing on a private copy of
/// the position. Siblings share alpha through [`NodeShared`].
pub(crate) fn naive_node(pos: &Position, alpha0: i32, beta: i32, depth: u32, nodes: &AtomicU64) -> (Line, i32) {
    nodes.fetch_add(1, Ordering::Relaxed);
    let moves = MoveList::legal(pos);
    if moves.is_empty() {
        return (Line::empty(), terminal_score(pos, depth));
    }
    if depth == 0 {
        return (Line::empty(), leaf_score(pos));
    }
    let shared = NodeShared::new(alpha0);
    let results: Vec<(usize, Line, i32)> = moves
        .as_slice()
        .par_iter()
        .enumerate()
        .filter_map(|(i, &m)| {
            if shared.cancelled() {
                return None;
            }
            let mut worker = pos.clone();
            let _ = worker.make(m);
            let snapshot = shared.alpha();
            let (child_line, child_score) = naive_node(&worker, -beta, -snapshot, depth - 1, nodes);
            let child_score = -child_score;
            shared.raise_alpha(child_score);
            if child_score >= beta {
                shared.cancel();
            }
            Some((i, Line::stitch(m, &child_line, depth), child_score))
        })
        .collect();
    fold_results(-SCORE_INF, Line::empty(), results)
}

/// Parallel minimax: the all-node fork of the sequential minimax with no
/// windows and no cancellation; siblings share nothing but the folded best.
pub(crate) fn parallel_minimax_node(pos: &Position, depth: u32, nodes: &AtomicU64) -> (Line, i32) {
    nodes.fetch_add(1, Ordering::Relaxed);
    let moves = MoveList::legal(pos);
    if moves.is_empty() {
        return (Line::empty(), terminal_score(pos, depth));
    }
    if depth == 0 {
        return (Line::empty(), leaf_score(pos));
    }
    let results: Vec<(usize, Line, i32)> = moves
        .as_slice()
        .par_iter()
        .enumerate()
        .map(|(i, &m)| {
            let mut worker = pos.clone();
            let _ = worker.make(m);
            let (child_line, child_score) = parallel_minimax_node(&worker, depth - 1, nodes);
            (i, Line::stitch(m, &child_line, depth), -child_score)
        })
        .collect();
    fold_results(-SCORE_INF, Line::empty(), results)
}
