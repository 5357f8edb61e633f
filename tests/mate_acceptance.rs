use jambot::board::position::Position;
use jambot::search::eval::{MATE_SCORE, SCORE_INF};
use jambot::search::movelist::MoveList;
use jambot::search::{SearchParams, SearchResult, Searcher, Variant};

fn run(pos: &Position, variant: Variant, depth: u32, threads: usize) -> SearchResult {
    let mut s = Searcher::new();
    s.search_with_params(pos, SearchParams { variant, depth, threads, alpha: -SCORE_INF, beta: SCORE_INF })
}

// Replay the returned line from the root: every move must be legal, and a
// mate-scored line must end in checkmate.
fn assert_line_mates(fen: &str, res: &SearchResult) {
    let mut pos = Position::from_fen(fen).expect("valid FEN");
    for m in res.line.moves() {
        assert!(MoveList::legal(&pos).contains(m), "PV move {m} illegal on {fen}");
        let _ = pos.make(m);
    }
    assert!(pos.is_checkmate(), "PV on {fen} does not end in checkmate: {}", res.line);
}

#[test]
fn back_rank_mate_in_one_scores_exactly() {
    // Ra8# is the only mate; at depth d a mate after one ply scores
    // MATE_SCORE + d - 1.
    let fen = "6k1/5ppp/8/8/8/8/8/R6K w - - 0 1";
    let pos = Position::from_fen(fen).expect("valid FEN");
    for (depth, want) in [(1u32, MATE_SCORE), (3u32, MATE_SCORE + 2)] {
        for variant in Variant::ALL {
            let res = run(&pos, variant, depth, 4);
            assert_eq!(
                res.score_cp, want,
                "{variant} at depth {depth} missed the mate score on {fen}"
            );
            assert_eq!(
                res.bestmove_uci().as_deref(),
                Some("a1a8"),
                "{variant} at depth {depth} did not pick Ra8#"
            );
            assert_line_mates(fen, &res);
        }
    }
}

#[test]
fn pvs_finds_black_mate_in_one_at_depth_one() {
    // Mirrored back-rank mate with Black to move; single thread, depth 1.
    let fen = "r6k/8/8/8/8/8/5PPP/6K1 b - - 0 1";
    let pos = Position::from_fen(fen).expect("valid FEN");
    let res = run(&pos, Variant::Pvs, 1, 1);
    assert_eq!(res.score_cp, MATE_SCORE, "mate-in-1 at depth 1 must score MATE_SCORE");
    assert_eq!(res.bestmove_uci().as_deref(), Some("a8a1"), "expected Ra1#");
    assert_line_mates(fen, &res);
}

#[test]
fn ybwc_finds_forced_mate_minor_pieces() {
    // Forced mate for White within the horizon; YBWC on a team of 4 must
    // agree with sequential alpha-beta and return a genuine mating line.
    let fen = "7k/8/3NK3/5BN1/8/8/8/8 w - - 0 1";
    let pos = Position::from_fen(fen).expect("valid FEN");
    let depth = 5;
    let seq = run(&pos, Variant::AlphaBeta, depth, 1);
    assert!(seq.score_cp >= MATE_SCORE, "expected a forced mate, got {}", seq.score_cp);
    assert_line_mates(fen, &seq);
    let res = run(&pos, Variant::Ybwc, depth, 4);
    assert_eq!(res.score_cp, seq.score_cp, "YBWC score drifted from sequential");
    assert_line_mates(fen, &res);
}

#[test]
fn knights_and_bishop_mate_found_by_all_parallel_variants() {
    let fen = "k7/3K4/3N4/2N5/8/3B4/8/8 w - - 0 1";
    let pos = Position::from_fen(fen).expect("valid FEN");
    let depth = 5;
    let seq = run(&pos, Variant::AlphaBeta, depth, 1);
    assert!(seq.score_cp >= MATE_SCORE, "expected a forced mate, got {}", seq.score_cp);
    for variant in [Variant::NaiveParallel, Variant::Ybwc, Variant::Pvs] {
        let res = run(&pos, variant, depth, 8);
        assert_eq!(res.score_cp, seq.score_cp, "{variant} score drifted from sequential");
        assert_line_mates(fen, &res);
    }
}

#[test]
fn attacker_takes_the_shallowest_mate() {
    // At depth 4 the immediate Ra8# scores MATE_SCORE + 3; any delayed mate
    // would score lower, so the exact value proves the quickest mate won.
    let fen = "6k1/5ppp/8/8/8/8/8/R6K w - - 0 1";
    let pos = Position::from_fen(fen).expect("valid FEN");
    let res = run(&pos, Variant::AlphaBeta, 4, 1);
    assert_eq!(res.score_cp, MATE_SCORE + 3, "attacker must take the shallowest mate");
    let mirrored = Position::from_fen("r6k/8/8/8/8/8/5PPP/6K1 b - - 0 1").expect("valid FEN");
    let res = run(&mirrored, Variant::AlphaBeta, 4, 1);
    assert_eq!(res.score_cp, MATE_SCORE + 3, "mirrored position must score identically");
}
