//! Depth-counted minimax with fail-soft alpha-beta pruning.

use std::time::Instant;

use rowmax_engine::{Board, Mark};

use crate::{
    config::SearchConfig,
    cutoff::{CutoffRule, DecisiveMargin},
};

/// Value of a maximizing node with no children.
pub const NEG_INFINITY: i32 = i32::MIN;
/// Value of a minimizing node with no children.
pub const POS_INFINITY: i32 = i32::MAX;
/// Value of a node stopped by the recursion limit.
pub const TIED_VALUE: i32 = 0;

/// Which side is to move at a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// The computer moves and the node takes the largest child value.
    Maximizing,
    /// The player moves and the node takes the smallest child value.
    Minimizing,
}

impl Level {
    /// Mark placed by the side moving at this level.
    #[must_use]
    pub fn mark(self) -> Mark {
        match self {
            Level::Maximizing => Mark::Computer,
            Level::Minimizing => Mark::Player,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Level::Maximizing => Level::Minimizing,
            Level::Minimizing => Level::Maximizing,
        }
    }

    /// Value returned when the node has no children.
    #[must_use]
    pub fn sentinel(self) -> i32 {
        match self {
            Level::Maximizing => NEG_INFINITY,
            Level::Minimizing => POS_INFINITY,
        }
    }
}

/// Counters collected over one search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, including cut-off nodes.
    pub nodes: u64,
    /// Nodes evaluated by the cutoff rule instead of being expanded.
    pub cutoffs: u64,
    /// Nodes that returned before visiting all of their children.
    pub prunes: u64,
    /// Deepest ply reached.
    pub max_depth: usize,
    /// Whether the time limit stopped the search early.
    pub timed_out: bool,
}

/// Mutable state shared by every node of one search.
#[derive(Debug)]
pub(crate) struct SearchContext {
    deadline: Option<Instant>,
    pub(crate) stats: SearchStats,
}

impl SearchContext {
    pub(crate) fn new(config: &SearchConfig) -> Self {
        Self {
            deadline: config.time_limit.map(|limit| Instant::now() + limit),
            stats: SearchStats::default(),
        }
    }

    /// Returns `true` (and records the timeout) once the deadline has passed.
    pub(crate) fn check_expired(&mut self) -> bool {
        let expired = self
            .deadline
            .is_some_and(|deadline| Instant::now() >= deadline);
        if expired {
            self.stats.timed_out = true;
        }
        expired
    }
}

/// Minimax search engine for the computer side.
///
/// Holds the search configuration and the [`CutoffRule`] that decides when a
/// node stops being expanded.
#[derive(Debug)]
pub struct SearchEngine {
    config: SearchConfig,
    cutoff: Box<dyn CutoffRule>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default(), Box::new(DecisiveMargin))
    }
}

impl SearchEngine {
    #[must_use]
    pub fn new(config: SearchConfig, cutoff: Box<dyn CutoffRule>) -> Self {
        Self { config, cutoff }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn cutoff_rule(&self) -> &dyn CutoffRule {
        self.cutoff.as_ref()
    }

    /// Evaluates `board` with `level` to move.
    ///
    /// `depth` is the ply count of `board` below the root and `alpha`/`beta`
    /// the search window. The result follows the fail-soft contract: if it
    /// lies strictly inside the window it is the exact minimax value,
    /// otherwise it is a bound on that value.
    #[must_use]
    pub fn minimax(
        &self,
        board: &Board,
        level: Level,
        depth: usize,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.minimax_with_stats(board, level, depth, alpha, beta).0
    }

    /// Like [`minimax`](Self::minimax), also returning the search counters.
    #[must_use]
    pub fn minimax_with_stats(
        &self,
        board: &Board,
        level: Level,
        depth: usize,
        alpha: i32,
        beta: i32,
    ) -> (i32, SearchStats) {
        let mut ctx = SearchContext::new(&self.config);
        let value = self.search(&mut ctx, board, level, depth, alpha, beta);
        (value, ctx.stats)
    }

    pub(crate) fn search(
        &self,
        ctx: &mut SearchContext,
        board: &Board,
        level: Level,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        ctx.stats.nodes += 1;
        ctx.stats.max_depth = ctx.stats.max_depth.max(depth);

        if let Some(value) = self.cutoff.cutoff(board, depth, &self.config) {
            ctx.stats.cutoffs += 1;
            return value;
        }
        if self
            .config
            .recursion_limit
            .is_some_and(|limit| depth >= limit)
        {
            return TIED_VALUE;
        }

        let mut best = level.sentinel();
        for (i, child) in board.children(level.mark()).enumerate() {
            if i > 0 && ctx.check_expired() {
                break;
            }
            let value = self.search(ctx, &child.board, level.next(), depth + 1, alpha, beta);
            match level {
                Level::Maximizing => {
                    best = best.max(value);
                    if best >= beta {
                        ctx.stats.prunes += 1;
                        return best;
                    }
                    alpha = alpha.max(best);
                }
                Level::Minimizing => {
                    best = best.min(value);
                    if best <= alpha {
                        ctx.stats.prunes += 1;
                        return best;
                    }
                    beta = beta.min(best);
                }
            }
        }
        best
    }
}
