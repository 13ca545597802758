//! Run score: the additive heuristic that values contiguous runs of a mark.
//!
//! Every row is scanned left to right and every column top to bottom. A running
//! count of consecutive cells holding the mark resets to zero on any other cell
//! (empty or the opponent's). At each cell, once the count is updated:
//!
//! - [`PAIR_POINTS`] are added if the count is at least 2
//! - [`TRIPLE_POINTS`] are added on top if the count is at least 3
//!
//! The contributions stack, so a run of length `L` in one line is worth
//! `2·(L-1) + 3·(L-2)` points: three in a row gives 0 + 2 + 5 = 7, four in a
//! row gives 12. Longer runs earn progressively more per extra cell.

use rowmax_engine::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Points added at every cell where the running count reaches 2 or more.
pub const PAIR_POINTS: u32 = 2;
/// Extra points added at every cell where the running count reaches 3 or more.
pub const TRIPLE_POINTS: u32 = 3;

/// Scores a single line (row or column) for `mark`.
pub fn line_score<I>(line: I, mark: Mark) -> u32
where
    I: IntoIterator<Item = Mark>,
{
    let mut score = 0;
    let mut run = 0;
    for cell in line {
        run = if cell == mark { run + 1 } else { 0 };
        if run >= 2 {
            score += PAIR_POINTS;
        }
        if run >= 3 {
            score += TRIPLE_POINTS;
        }
    }
    score
}

/// Total run score of `mark`: the sum over all rows plus all columns.
#[must_use]
pub fn score(board: &Board, mark: Mark) -> u32 {
    let rows: u32 = board
        .rows()
        .map(|row| line_score(row.iter().copied(), mark))
        .sum();
    let columns: u32 = board.columns().map(|column| line_score(column, mark)).sum();
    rows + columns
}

/// Run scores of both sides for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub computer: u32,
    pub player: u32,
}

impl Scores {
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self {
            computer: score(board, Mark::Computer),
            player: score(board, Mark::Player),
        }
    }

    /// Returns the mark with the strictly higher score, or `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Mark> {
        match self.computer.cmp(&self.player) {
            std::cmp::Ordering::Greater => Some(Mark::Computer),
            std::cmp::Ordering::Less => Some(Mark::Player),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns `(leading score, trailing score)`, or `None` when tied.
    #[must_use]
    pub fn lead(&self) -> Option<(u32, u32)> {
        self.leader().map(|_| {
            (
                self.computer.max(self.player),
                self.computer.min(self.player),
            )
        })
    }
}
