//! Board scoring for the run-building game.
//!
//! This crate turns a board into numbers at three levels:
//!
//! 1. **Run Score** ([`run_score`]) - An additive heuristic per mark that rewards
//!    contiguous runs along rows and columns.
//! 2. **Margin Tier** ([`margin`]) - A coarse {1, 2, 3} classification of how far
//!    one side's run score leads the other's. Search compares these tiers, never
//!    raw scores.
//! 3. **Game Result** ([`game_result`]) - The final verdict on a full board, decided
//!    by comparing raw run scores directly.
//!
//! # Architecture
//!
//! ```text
//! Game Result (who won the finished game)
//!     ↓ uses
//! Run Score (points per mark)
//!     ↑ used by
//! Margin Tier (how decisive the lead is, consumed by search)
//! ```
//!
//! # Example
//!
//! ```
//! use rowmax_engine::Board;
//! use rowmax_evaluator::{margin::Tier, run_score::Scores};
//!
//! let board: Board = "XXX/OO./...".parse().unwrap();
//! let scores = Scores::from_board(&board);
//!
//! assert_eq!(scores.computer, 7);
//! assert_eq!(scores.player, 2);
//! assert_eq!(Tier::classify(scores.computer, scores.player), Tier::Dominant);
//! ```

pub mod game_result;
pub mod margin;
pub mod run_score;
