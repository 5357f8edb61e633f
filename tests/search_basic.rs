use jambot::board::position::Position;

#[test]
fn eval_startpos_is_zero() {
    use jambot::search::eval::eval_white_cp;
    let pos = Position::startpos();
    // Symmetric position: material and placement terms cancel exactly.
    assert_eq!(eval_white_cp(&pos), 0, "startpos must evaluate to zero");
}

#[test]
fn eval_is_white_positive() {
    use jambot::search::eval::eval_white_cp;
    // White queen vs bare king: strongly positive regardless of side to move.
    let w = Position::from_fen("8/8/8/8/k7/4Q3/3K4/8 w - - 0 1").expect("valid fen");
    let b = Position::from_fen("8/8/8/8/k7/4Q3/3K4/8 b - - 0 1").expect("valid fen");
    assert!(eval_white_cp(&w) > 800, "queen up should be White-positive");
    assert_eq!(eval_white_cp(&w), eval_white_cp(&b), "eval must not depend on side to move");
}

#[test]
fn search_returns_legal_move_startpos() {
    use jambot::search::Searcher;
    use jambot::search::movelist::MoveList;
    let pos = Position::startpos();
    let s = Searcher::new();
    let res = s.minimax(&pos, 1);
    let best = res.bestmove().expect("no move found at depth 1");
    assert!(MoveList::legal(&pos).contains(best), "best move {best} not legal at startpos");
}

#[test]
fn search_prefers_winning_queen_capture() {
    use jambot::search::eval::SCORE_INF;
    use jambot::search::Searcher;
    // Qe2xd2 wins a queen outright.
    let pos = Position::from_fen("k7/8/8/8/8/8/3qQ3/7K w - - 0 1").expect("valid fen");
    let s = Searcher::new();
    let res = s.alphabeta(&pos, -SCORE_INF, SCORE_INF, 1);
    let bm = res.bestmove_uci().expect("expected a best move");
    assert_eq!(bm, "e2d2", "expected Qe2xd2 as best move, got {bm}");
    assert!(res.score_cp > 800, "queen capture should score near +900, got {}", res.score_cp);
}

#[test]
fn single_legal_move_heads_the_line() {
    use jambot::search::eval::SCORE_INF;
    use jambot::search::Searcher;
    // Black in check from Rh1 with g8 as the only escape.
    let pos = Position::from_fen("7k/8/5K2/8/8/8/8/7R b - - 0 1").expect("valid fen");
    let s = Searcher::new();
    for depth in [1, 3] {
        let res = s.alphabeta(&pos, -SCORE_INF, SCORE_INF, depth);
        let bm = res.bestmove_uci().expect("expected the forced move");
        assert_eq!(bm, "h8g8", "single legal move must head the line at depth {depth}");
    }
}

#[test]
fn stalemate_scores_zero_with_empty_line() {
    use jambot::search::eval::{DRAW_SCORE, SCORE_INF};
    use jambot::search::Searcher;
    let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("valid fen");
    assert!(pos.is_stalemate(), "fixture must be stalemate");
    let s = Searcher::new();
    for depth in [1, 3] {
        let res = s.alphabeta(&pos, -SCORE_INF, SCORE_INF, depth);
        assert_eq!(res.score_cp, DRAW_SCORE, "stalemate must score 0 at depth {depth}");
        assert!(res.line.is_empty(), "stalemate must return the empty line");
        assert_eq!(res.bestmove(), None);
    }
}

#[test]
fn startpos_depth4_stays_within_a_pawn() {
    use jambot::search::eval::SCORE_INF;
    use jambot::search::Searcher;
    use jambot::search::movelist::MoveList;
    let pos = Position::startpos();
    let s = Searcher::new();
    let res = s.alphabeta(&pos, -SCORE_INF, SCORE_INF, 4);
    assert!(res.score_cp.abs() <= 100, "startpos depth-4 score out of range: {}", res.score_cp);
    let best = res.bestmove().expect("expected an opening move");
    assert!(MoveList::legal(&pos).contains(best), "opening move {best} not legal");
}

#[test]
#[should_panic(expected = "search depth must be at least 1")]
fn depth_zero_entry_is_rejected() {
    use jambot::search::Searcher;
    let pos = Position::startpos();
    let s = Searcher::new();
    let _ = s.minimax(&pos, 0);
}
