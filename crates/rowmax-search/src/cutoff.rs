//! Terminal tests: when a search node is evaluated instead of expanded.

use std::fmt;

use rowmax_engine::{Board, Mark};
use rowmax_evaluator::{margin::Tier, run_score::Scores};

use crate::config::SearchConfig;

/// Decides whether a node is evaluated statically.
///
/// Returning `Some(value)` stops the search at this node. Returning `None`
/// lets the engine expand the node's children.
pub trait CutoffRule: fmt::Debug + Send + Sync {
    fn cutoff(&self, board: &Board, depth: usize, config: &SearchConfig) -> Option<i32>;
}

/// Stops as soon as the two run scores differ.
///
/// The value is the [`Tier`] of the leader's margin over the trailer,
/// regardless of which side leads: a position where the player dominates is
/// worth as much to the computer as one where the computer dominates.
///
/// Tied nodes are always expanded. When a tied node is at or past the depth
/// limit nothing changes either; the depth is accepted but has no effect, so
/// ties recurse until the board fills.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecisiveMargin;

impl CutoffRule for DecisiveMargin {
    fn cutoff(&self, board: &Board, _depth: usize, _config: &SearchConfig) -> Option<i32> {
        let (winner, loser) = Scores::from_board(board).lead()?;
        Some(Tier::classify(winner, loser).value())
    }
}

/// Stops on a full board or at the depth limit, with a signed evaluation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Horizon;

impl CutoffRule for Horizon {
    fn cutoff(&self, board: &Board, depth: usize, config: &SearchConfig) -> Option<i32> {
        (board.is_full() || depth >= config.depth_limit)
            .then(|| signed_margin(&Scores::from_board(board)))
    }
}

/// `+tier` when the computer leads, `-tier` when the player leads, `0` when tied.
#[must_use]
pub fn signed_margin(scores: &Scores) -> i32 {
    let Some((winner, loser)) = scores.lead() else {
        return 0;
    };
    let tier = Tier::classify(winner, loser).value();
    match scores.leader() {
        Some(Mark::Player) => -tier,
        _ => tier,
    }
}
