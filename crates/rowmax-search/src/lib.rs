//! Move search for the computer side.
//!
//! The computer (maximizing, `X`) picks its move with depth-counted minimax and
//! alpha-beta pruning. Nodes are compared by margin [`Tier`](rowmax_evaluator::margin::Tier),
//! not by raw run score.
//!
//! # Modules
//!
//! - [`minimax`] - [`SearchEngine`] and the recursive alpha-beta search
//! - [`selection`] - Top-level move choice over the computer's candidate boards
//! - [`cutoff`] - When a node is not expanded ([`DecisiveMargin`] by default)
//! - [`config`] - Search limits and the initial alpha/beta window
//! - [`full_width`] - Unpruned reference minimax, used to check pruning
//!
//! # Search Contract
//!
//! At every node the cutoff rule is consulted first. With the default
//! [`DecisiveMargin`] rule, a node whose two run scores differ is not expanded:
//! it evaluates to the tier of the leader's margin, whichever side leads.
//! Tied nodes are expanded until the scores diverge or the board fills, at
//! which point the empty child list yields [`NEG_INFINITY`] (maximizing) or
//! [`POS_INFINITY`] (minimizing).
//!
//! Each candidate search is seeded with [`SearchConfig::initial_alpha`] and
//! [`SearchConfig::initial_beta`], which default to `0` and `0`. This narrow
//! window prunes far more than the textbook `(-∞, +∞)` and changes which moves
//! are chosen; [`SearchConfig::full_window`] restores the textbook bounds.
//!
//! # Example
//!
//! ```
//! use rowmax_engine::{Board, Pos};
//! use rowmax_search::SearchEngine;
//!
//! let board: Board = ".OO/XO./.XX".parse().unwrap();
//! let engine = SearchEngine::default();
//!
//! let selection = engine.select_move(&board).unwrap();
//! assert_eq!(selection.pos, Pos::new(2, 0));
//! ```

pub use self::{
    config::{CutoffKind, SearchConfig},
    cutoff::{CutoffRule, DecisiveMargin, Horizon},
    minimax::{Level, NEG_INFINITY, POS_INFINITY, SearchEngine, SearchStats, TIED_VALUE},
    selection::{CandidateValue, MoveSelection, best_candidate},
};

pub mod config;
pub mod cutoff;
pub mod full_width;
pub mod minimax;
pub mod selection;
