pub mod eval;
pub mod line;
pub mod movelist;
mod negamax;
mod parallel;
pub mod pool;
mod pvs;
mod ybwc;

use cozy_chess::Move;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::AtomicU64;

use crate::board::position::Position;
use crate::search::eval::SCORE_INF;
use crate::search::line::{Line, MAX_DEPTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Minimax,
    ParallelMinimax,
    AlphaBeta,
    NaiveParallel,
    Ybwc,
    Pvs,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Minimax,
        Variant::ParallelMinimax,
        Variant::AlphaBeta,
        Variant::NaiveParallel,
        Variant::Ybwc,
        Variant::Pvs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Minimax => "minimax",
            Variant::ParallelMinimax => "parallel-minimax",
            Variant::AlphaBeta => "alphabeta",
            Variant::NaiveParallel => "naive-parallel",
            Variant::Ybwc => "ybwc",
            Variant::Pvs => "pvs",
        }
    }

    pub fn is_parallel(self) -> bool {
        matches!(self, Variant::ParallelMinimax | Variant::NaiveParallel | Variant::Ybwc | Variant::Pvs)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Variant::Minimax),
            "parallel-minimax" => Ok(Variant::ParallelMinimax),
            "alphabeta" | "alpha-beta" => Ok(Variant::AlphaBeta),
            "naive-parallel" | "naive" => Ok(Variant::NaiveParallel),
            "ybwc" => Ok(Variant::Ybwc),
            "pvs" => Ok(Variant::Pvs),
            other => Err(format!("unknown search variant: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SearchParams {
    pub variant: Variant,
    pub depth: u32,
    pub threads: usize,
    pub alpha: i32,
    pub beta: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { variant: Variant::AlphaBeta, depth: 4, threads: 1, alpha: -SCORE_INF, beta: SCORE_INF }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    pub line: Line,
    pub score_cp: i32,
    pub nodes: u64,
}

impl SearchResult {
    pub fn bestmove(&self) -> Option<Move> { self.line.best() }

    pub fn bestmove_uci(&self) -> Option<String> { self.line.best().map(|m| format!("{}", m)) }
}

/// Entry points for the search family. A `Searcher` holds only the worker
/// team size; all per-search state lives on the stack of the call.
#[derive(Clone, Copy, Debug)]
pub struct Searcher {
    threads: usize,
}

impl Default for Searcher {
    fn default() -> Self { Self { threads: 1 } }
}

impl Searcher {
    pub fn new() -> Self { Self::default() }

    pub fn set_threads(&mut self, t: usize) { self.threads = t.max(1); }

    pub fn get_threads(&self) -> usize { self.threads }

    pub fn minimax(&self, pos: &Position, depth: u32) -> SearchResult {
        check_depth(depth);
        let mut nodes = 0u64;
        let mut root = pos.clone();
        let (line, score) = negamax::minimax_node(&mut root, depth, &mut nodes);
        SearchResult { line, score_cp: score, nodes }
    }

    pub fn alphabeta(&self, pos: &Position, alpha: i32, beta: i32, depth: u32) -> SearchResult {
        check_depth(depth);
        let mut nodes = 0u64;
        let mut root = pos.clone();
        let (line, score) = negamax::alphabeta_node(&mut root, alpha, beta, depth, &mut nodes);
        SearchResult { line, score_cp: score, nodes }
    }

    pub fn parallel_minimax(&self, pos: &Position, depth: u32) -> SearchResult {
        check_depth(depth);
        let nodes = AtomicU64::new(0);
        let (line, score) = pool::with_team(self.threads, || parallel::parallel_minimax_node(pos, depth, &nodes));
        SearchResult { line, score_cp: score, nodes: nodes.into_inner() }
    }

    pub fn naive_parallel(&self, pos: &Position, alpha: i32, beta: i32, depth: u32) -> SearchResult {
        check_depth(depth);
        let nodes = AtomicU64::new(0);
        let (line, score) = pool::with_team(self.threads, || parallel::naive_node(pos, alpha, beta, depth, &nodes));
        SearchResult { line, score_cp: score, nodes: nodes.into_inner() }
    }

    pub fn ybwc(&self, pos: &Position, alpha: i32, beta: i32, depth: u32) -> SearchResult {
        check_depth(depth);
        let nodes = AtomicU64::new(0);
        let mut root = pos.clone();
        let (line, score) = pool::with_team(self.threads, || ybwc::ybwc_node(&mut root, alpha, beta, depth, &nodes));
        SearchResult { line, score_cp: score, nodes: nodes.into_inner() }
    }

    pub fn pvs(&self, pos: &Position, alpha: i32, beta: i32, depth: u32) -> SearchResult {
        check_depth(depth);
        let nodes = AtomicU64::new(0);
        let mut root = pos.clone();
        let (line, score) = pool::with_team(self.threads, || pvs::pvs_node(&mut root, alpha, beta, depth, &nodes));
        SearchResult { line, score_cp: score, nodes: nodes.into_inner() }
    }

    pub fn search_with_params(&mut self, pos: &Position, p: SearchParams) -> SearchResult {
        self.set_threads(p.threads);
        match p.variant {
            Variant::Minimax => self.minimax(pos, p.depth),
            Variant::ParallelMinimax => self.parallel_minimax(pos, p.depth),
            Variant::AlphaBeta => self.alphabeta(pos, p.alpha, p.beta, p.depth),
            Variant::NaiveParallel => self.naive_parallel(pos, p.alpha, p.beta, p.depth),
            Variant::Ybwc => self.ybwc(pos, p.alpha, p.beta, p.depth),
            Variant::Pvs => self.pvs(pos, p.alpha, p.beta, p.depth),
        }
    }
}

// The minimum valid depth at entry is 1; depth 0 exists only inside the
// recursion. The upper bound is the line capacity.
fn check_depth(depth: u32) {
    assert!(depth >= 1, "search depth must be at least 1");
    assert!(depth as usize <= MAX_DEPTH, "search depth {depth} exceeds line capacity {MAX_DEPTH}");
}
