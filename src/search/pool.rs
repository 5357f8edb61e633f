use rayon::ThreadPoolBuilder;

// One worker team per root call; no queue outlives the call. Nested splits
// inside the closure reuse the same pool through work stealing, so recursive
// YBWC forks never oversubscribe the team.
pub fn with_team<F, R>(threads: usize, f: F) -> R
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .build()
        .expect("failed to build search worker team");
    pool.install(f)
}
