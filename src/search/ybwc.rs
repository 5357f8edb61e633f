use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::board::position::Position;
use crate::search::line::Line;
use crate::search::movelist::MoveList;
use crate::search::negamax::{leaf_score, terminal_score};
use crate::search::parallel::{fold_results, NodeShared};

// Young Brothers Wait: the eldest sibling is searched serially on the live
// window to tighten alpha before the younger siblings fork. The serial
// prefix recurses into YBWC itself, so a serial spine runs down the PV at
// every level while the rest of the tree splits.
pub(crate) fn ybwc_node(pos: &mut Position, mut alpha: i32, beta: i32, depth: u32, nodes: &AtomicU64) -> (Line, i32) {
    nodes.fetch_add(1, Ordering::Relaxed);
    let moves = MoveList::legal(pos);
    if moves.is_empty() {
        return (Line::empty(), terminal_score(pos, depth));
    }
    if depth == 0 {
        return (Line::empty(), leaf_score(pos));
    }

    // Eldest brother, in place on the shared position.
    let eldest = moves[0];
    let undo = pos.make(eldest);
    let (child_line, child_score) = ybwc_node(pos, -beta, -alpha, depth - 1, nodes);
    let child_score = -child_score;
    pos.undo(undo);
    let best_score = child_score;
    let best_line = Line::stitch(eldest, &child_line, depth);
    alpha = alpha.max(child_score);
    if beta <= alpha || moves.count() == 1 {
        return (best_line, best_score);
    }

    // Younger brothers in parallel, each on a private copy, recursing into
    // YBWC with the alpha snapshot taken just before the recursive call.
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
            let (tail_line, tail_score) = ybwc_node(&mut worker, -beta, -snapshot, depth - 1, nodes);
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
