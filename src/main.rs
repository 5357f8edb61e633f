use anyhow::{anyhow, bail, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use jambot::board::position::Position;
use jambot::search::eval::SCORE_INF;
use jambot::search::line::MAX_DEPTH;
use jambot::search::{SearchParams, Searcher, Variant};

#[derive(Parser, Debug)]
#[command(name = "jambot", version, about = "Parallel alpha-beta chess search driver")]
struct Args {
    /// Search depth in plies (positive)
    depth: u32,

    /// FEN string or 'startpos'
    #[arg(long, default_value = "startpos")]
    fen: String,

    /// Worker team size (applies to the parallel variants only)
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Search variant: minimax | parallel-minimax | alphabeta | naive-parallel | ybwc | pvs.
    /// Prompts interactively when omitted.
    #[arg(long)]
    variant: Option<String>,
}

fn prompt_variant() -> Result<Variant> {
    let stdin = io::stdin();
    loop {
        println!("Select search algorithm:");
        for (i, v) in Variant::ALL.iter().enumerate() {
            println!("  {}) {}", i + 1, v);
        }
        print!("> ");
        io::stdout().flush()?;
        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            bail!("no variant selected");
        }
        match input.trim().parse::<usize>() {
            Ok(n) if (1..=Variant::ALL.len()).contains(&n) => return Ok(Variant::ALL[n - 1]),
            _ => eprintln!("Invalid choice. Please enter 1 to {}.", Variant::ALL.len()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.depth == 0 || args.depth as usize > MAX_DEPTH {
        bail!("invalid depth {}: must be between 1 and {}", args.depth, MAX_DEPTH);
    }

    let pos = if args.fen == "startpos" {
        Position::startpos()
    } else {
        Position::from_fen(&args.fen).map_err(|e| anyhow!(e))?
    };

    let variant = match args.variant.as_deref() {
        Some(s) => s.parse::<Variant>().map_err(|e| anyhow!(e))?,
        None => prompt_variant()?,
    };

    println!("Starting {} with depth: {}", variant, args.depth);
    log::info!("variant={} depth={} threads={}", variant, args.depth, args.threads);

    let mut searcher = Searcher::new();
    searcher.set_threads(args.threads);
    let params = SearchParams {
        variant,
        depth: args.depth,
        threads: args.threads,
        alpha: -SCORE_INF,
        beta: SCORE_INF,
    };

    let t0 = Instant::now();
    let res = searcher.search_with_params(&pos, params);
    let elapsed = t0.elapsed();

    match res.bestmove() {
        Some(m) => {
            println!("Best move: {} with score {}", m, res.score_cp);
            println!("Best line: {}", res.line);
        }
        None => println!("No moves available (score {}).", res.score_cp),
    }
    println!("Nodes: {}  time: {:.3}s", res.nodes, elapsed.as_secs_f64());
    Ok(())
}
