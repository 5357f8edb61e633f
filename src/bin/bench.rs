use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use jambot::board::position::Position;
use jambot::search::eval::SCORE_INF;
use jambot::search::{SearchParams, Searcher, Variant};

// Mate-in-3 suite used for timing comparisons across variants and team sizes.
const MATE_SUITE: &[&str] = &[
    "7k/8/3NK3/5BN1/8/8/8/8 w - - 0 1",
    "k7/3K4/3N4/2N5/8/3B4/8/8 w - - 0 1",
    "8/8/2K5/7r/6r1/8/6k1/8 b - - 0 1",
    "8/K7/7r/8/2k5/5bb1/8/8 b - - 0 1",
    "8/K7/P6r/8/2k5/5bb1/8/8 b - - 0 1",
    "8/8/8/8/k7/4Q3/3K4/8 w - - 0 1",
    "8/8/k7/2K5/8/2Q5/b1R5/n7 w - - 0 1",
    "8/8/k1K1b3/2n5/8/8/8/2R5 w - - 0 1",
    "8/7P/k1K1b3/2n5/8/8/8/2R5 w - - 0 1",
    "7k/7n/8/8/8/7B/7R/6RK w - - 0 1",
];

#[derive(Parser, Debug)]
#[command(name = "jambot-bench", version, about = "Benchmark the search variants over the mate suite")]
struct Args {
    /// Search depth for every timed run
    #[arg(long, default_value_t = 5)]
    depth: u32,

    /// Timed repetitions per (variant, threads) cell
    #[arg(long, default_value_t = 3)]
    runs: usize,

    /// Largest team size; parallel variants sweep powers of two up to this
    #[arg(long, default_value_t = 8)]
    max_threads: usize,

    /// Output CSV path
    #[arg(long, default_value = "bench.csv")]
    out: String,

    /// Benchmark a single FEN instead of the mate suite
    #[arg(long)]
    fen: Option<String>,

    /// Skip the minimax rows (slow at depth > 5)
    #[arg(long, default_value_t = false)]
    skip_minimax: bool,

    /// Print visited-node counts of minimax vs alpha-beta per position
    #[arg(long, default_value_t = false)]
    node_counts: bool,
}

fn positions(args: &Args) -> Result<Vec<Position>> {
    let fens: Vec<&str> = match &args.fen {
        Some(f) => vec![f.as_str()],
        None => MATE_SUITE.to_vec(),
    };
    fens.iter()
        .map(|f| Position::from_fen(f).map_err(anyhow::Error::msg))
        .collect()
}

fn team_sizes(variant: Variant, max_threads: usize) -> Vec<usize> {
    if !variant.is_parallel() {
        return vec![1];
    }
    let mut teams = Vec::new();
    let mut t = 1;
    while t <= max_threads {
        teams.push(t);
        t *= 2;
    }
    teams
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let positions = positions(&args)?;

    if args.node_counts {
        // Cutoff accounting: alpha-beta must never visit more nodes than minimax.
        let searcher = Searcher::new();
        for pos in &positions {
            let mm = searcher.minimax(pos, args.depth);
            let ab = searcher.alphabeta(pos, -SCORE_INF, SCORE_INF, args.depth);
            println!(
                "nodes at depth {}: minimax={} alphabeta={} (best {})",
                args.depth,
                mm.nodes,
                ab.nodes,
                ab.bestmove_uci().unwrap_or_else(|| "-".to_string()),
            );
        }
    }

    let mut csv = File::create(&args.out)?;
    writeln!(csv, "variant,threads,avg_time_s")?;

    for variant in Variant::ALL {
        if args.skip_minimax && matches!(variant, Variant::Minimax | Variant::ParallelMinimax) {
            continue;
        }
        for threads in team_sizes(variant, args.max_threads) {
            let mut searcher = Searcher::new();
            searcher.set_threads(threads);
            let params = SearchParams {
                variant,
                depth: args.depth,
                threads,
                alpha: -SCORE_INF,
                beta: SCORE_INF,
            };
            let mut total = 0.0f64;
            for _ in 0..args.runs {
                let t0 = Instant::now();
                for pos in &positions {
                    let res = searcher.search_with_params(pos, params);
                    std::hint::black_box(res.score_cp);
                }
                total += t0.elapsed().as_secs_f64();
            }
            let avg = total / args.runs as f64;
            println!("{:<18} threads={:<3} avg {:.4}s", variant.name(), threads, avg);
            writeln!(csv, "{},{},{:.6}", variant.name(), threads, avg)?;
        }
    }
    log::info!("wrote {}", args.out);
    Ok(())
}
