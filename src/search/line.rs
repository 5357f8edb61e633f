use cozy_chess::Move;
use std::fmt;

/// Line capacity and the upper bound on the search depth accepted at entry.
pub const MAX_DEPTH: usize = 25;

/// A principal variation: a fixed-capacity move sequence filled from index 0.
/// Empty slots mark the end of the line, so the value stays `Copy` and can be
/// handed between workers without allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    slots: [Option<Move>; MAX_DEPTH],
}

impl Line {
    pub const fn empty() -> Self {
        Self { slots: [None; MAX_DEPTH] }
    }

    // The best move from the node that produced this line.
    pub fn best(&self) -> Option<Move> { self.slots[0] }

    /// Prefix `head` onto the continuation reported by the child call: the
    /// child contributes at most `depth - 1` further moves.
    pub fn stitch(head: Move, tail: &Line, depth: u32) -> Self {
        let mut line = Line::empty();
        line.slots[0] = Some(head);
        let take = (depth as usize).saturating_sub(1).min(MAX_DEPTH - 1);
        line.slots[1..1 + take].copy_from_slice(&tail.slots[..take]);
        line
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.slots.iter().copied().take_while(Option::is_some).flatten()
    }

    pub fn len(&self) -> usize { self.moves().count() }

    pub fn is_empty(&self) -> bool { self.slots[0].is_none() }
}

impl Default for Line {
    fn default() -> Self { Self::empty() }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for m in self.moves() {
            write!(f, "{sep}{m}")?;
            sep = " ";
        }
        Ok(())
    }
}
