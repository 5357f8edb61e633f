use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::board::position::Position;
use crate::search::line::Line;
use crate::search::movelist::MoveList;
use crate::search::negamax::{leaf_score, terminal_score};
use crate::search::parallel::{fold_results, naive_node, NodeShared};

// Principal Variation Search, parallel form: the PV child is searched
// serially with the full window, recursing into PVS; the remaining siblings
// run in parallel under the tightened window and recurse into the naive
// parallel alpha-beta instead of PVS. The PV benefit lives on the spine;
// sub-PV siblings gain more from flat work parallelism than from further
// PV splitting.
pub(crate) fn pvs_node(pos: &mut Position, mut alpha: i32, beta: i32, depth: u32, nodes: &AtomicU64) -> (Line, i32) {
    nodes.fetch_add(1, Ordering::Relaxed);
    let moves = MoveList::legal(pos);
    if moves.is_empty() {
        return (Line::empty(), terminal_score(pos, depth));
    }
    if depth == 0 {
        return (Line::empty(), leaf_score(pos));
    }

    // PV child on the live window.
    let pv = moves[0];
    let undo = pos.make(pv);
    let (child_line, child_score) = pvs_node(pos, -beta, -alpha, depth - 1, nodes);
    let child_score = -child_score;
    pos.undo(undo);
    let best_score = child_score;
    let best_line = Line::stitch(pv, &child_line, depth);
    alpha = alpha.max(child_score);
    if beta <= alpha || moves.count() == 1 {
        return (best_line, best_score);
    }

    let parent: &Position = pos;
    let shared = NodeShared::new(alpha);
    let results: Vec<(usize, Line, i32)> = moves.as_slice()[1..]
        .par_iter()
        .enumerate()
        .filter_map(|(i, &m)| {
            if shared.cancelled() {
                return None;
            }
            let mut worker = parent.clone();
            let _ = worker.make(m);
            let snapshot = shared.alpha();
            let (tail_line, tail_score) = naive_node(&worker, -beta, -snapshot, depth - 1, nodes);
            let tail_score = -tail_score;
            shared.raise_alpha(tail_score);
            if tail_score >= beta {
                shared.cancel();
            }
            Some((i, Line::stitch(m, &tail_line, depth), tail_score))
        })
        .collect();
    fold_results(best_score, best_line, results)
}
