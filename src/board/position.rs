use cozy_chess::{Board, Color, Move};

/// A chess position with make/undo semantics over the cozy-chess backend.
///
/// cozy-chess is copy-make: a played move cannot be reversed in place, so the
/// undo token snapshots the pre-move board and `undo` restores it bit-exact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
}

/// Token returned by [`Position::make`]; consumed by [`Position::undo`].
#[derive(Clone, Debug)]
pub struct Undo {
    prev: Board,
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: Board::default() }
    }

    pub fn from_fen(fen: &str) -> Result<Self, String> {
        Board::from_fen(fen, false).map(|b| Self { board: b }).map_err(|e| format!("FEN error: {e:?}"))
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn side_to_move(&self) -> Color { self.board.side_to_move() }

    // Whether the side to move is in check. The search never asks about the
    // side that just moved; move generation only yields legal moves.
    pub fn in_check(&self) -> bool { !self.board.checkers().is_empty() }

    /// Apply `mv` in place. Panics on an illegal move: feeding the adapter a
    /// move that did not come from move generation is a contract violation.
    pub fn make(&mut self, mv: Move) -> Undo {
        let prev = self.board.clone();
        self.board.play(mv);
        Undo { prev }
    }

    /// Reverse the mutation of the matching [`Position::make`].
    pub fn undo(&mut self, undo: Undo) {
        self.board = undo.prev;
    }

    pub fn find_move_uci(&self, uci: &str) -> Option<Move> {
        let mut found = None;
        self.board.generate_moves(|ml| {
            for m in ml { if format!("{}", m) == uci { found = Some(m); break; } }
            found.is_some()
        });
        found
    }

    pub fn has_legal_moves(&self) -> bool {
        let mut any = false;
        self.board.generate_moves(|_| { any = true; true });
        any
    }

    pub fn is_checkmate(&self) -> bool { !self.has_legal_moves() && self.in_check() }

    pub fn is_stalemate(&self) -> bool { !self.has_legal_moves() && !self.in_check() }
}

impl Default for Position {
    fn default() -> Self { Self::startpos() }
}
