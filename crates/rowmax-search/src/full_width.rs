//! Unpruned minimax.
//!
//! Visits every node the cutoff rule lets through. It is exponentially slower
//! than [`SearchEngine`](crate::SearchEngine) and exists to check that pruning
//! does not change results: with the window `(NEG_INFINITY, POS_INFINITY)`
//! both searches must agree exactly.

use rowmax_engine::{Board, Mark, Pos};

use crate::{
    config::SearchConfig,
    cutoff::CutoffRule,
    minimax::{Level, TIED_VALUE},
};

/// Exact minimax value of `board` with `level` to move.
#[must_use]
pub fn minimax(
    rule: &dyn CutoffRule,
    config: &SearchConfig,
    board: &Board,
    level: Level,
    depth: usize,
) -> i32 {
    if let Some(value) = rule.cutoff(board, depth, config) {
        return value;
    }
    if config.recursion_limit.is_some_and(|limit| depth >= limit) {
        return TIED_VALUE;
    }
    let values = board
        .children(level.mark())
        .map(|child| minimax(rule, config, &child.board, level.next(), depth + 1));
    match level {
        Level::Maximizing => values.max(),
        Level::Minimizing => values.min(),
    }
    .unwrap_or(level.sentinel())
}

/// Best computer move by exact minimax value, the first one on ties.
#[must_use]
pub fn select_move(
    rule: &dyn CutoffRule,
    config: &SearchConfig,
    board: &Board,
) -> Option<(Pos, i32)> {
    board
        .children(Mark::Computer)
        .map(|child| {
            let value = minimax(rule, config, &child.board, Level::Minimizing, 0);
            (child.pos, value)
        })
        .fold(None, |best, (pos, value)| match best {
            Some((_, best_value)) if value <= best_value => best,
            _ => Some((pos, value)),
        })
}
