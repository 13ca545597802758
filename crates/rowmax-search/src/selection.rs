//! Choosing the computer's move.

use rowmax_engine::{Board, Mark, Pos};
use serde::{Deserialize, Serialize};

use crate::minimax::{Level, SearchContext, SearchEngine, SearchStats};

/// The move chosen by [`SearchEngine::select_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSelection {
    pub pos: Pos,
    /// Board after the computer's mark is placed at `pos`.
    pub board: Board,
    pub value: i32,
    pub stats: SearchStats,
}

/// Search value of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateValue {
    pub pos: Pos,
    pub value: i32,
}

impl SearchEngine {
    /// Picks the computer's move on `board`.
    ///
    /// Every empty cell is tried in row-major order. Each resulting board is
    /// searched with the player to move at depth 0, starting from the
    /// configured initial window, and the first candidate with the strictly
    /// greatest value is chosen. Returns `None` on a full board.
    #[must_use]
    pub fn select_move(&self, board: &Board) -> Option<MoveSelection> {
        let (candidates, stats) = self.candidate_values_with_stats(board);
        let CandidateValue { pos, value } = best_candidate(&candidates)?;
        let board = board.place(pos, Mark::Computer);
        tracing::debug!(
            %pos,
            value,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            timed_out = stats.timed_out,
            "selected computer move"
        );
        Some(MoveSelection {
            pos,
            board,
            value,
            stats,
        })
    }

    /// Search value of every candidate move, in row-major order.
    ///
    /// Candidates skipped because the time limit expired are not listed.
    #[must_use]
    pub fn candidate_values(&self, board: &Board) -> Vec<CandidateValue> {
        self.candidate_values_with_stats(board).0
    }

    /// Like [`candidate_values`](Self::candidate_values), also returning the
    /// counters of the search that produced them.
    #[must_use]
    pub fn candidate_values_with_stats(
        &self,
        board: &Board,
    ) -> (Vec<CandidateValue>, SearchStats) {
        let alpha = self.config().initial_alpha;
        let beta = self.config().initial_beta;
        let mut ctx = SearchContext::new(self.config());
        let mut candidates = Vec::new();
        for (i, child) in board.children(Mark::Computer).enumerate() {
            if i > 0 && ctx.check_expired() {
                break;
            }
            let value = self.search(&mut ctx, &child.board, Level::Minimizing, 0, alpha, beta);
            tracing::trace!(pos = %child.pos, value, "evaluated candidate");
            candidates.push(CandidateValue {
                pos: child.pos,
                value,
            });
        }
        (candidates, ctx.stats)
    }
}

/// The first candidate with the strictly greatest value.
///
/// The first candidate is kept even when every value is
/// [`NEG_INFINITY`](crate::NEG_INFINITY). Returns `None` for an empty list.
#[must_use]
pub fn best_candidate(candidates: &[CandidateValue]) -> Option<CandidateValue> {
    candidates.iter().copied().fold(None, |best, candidate| match best {
        Some(best) if candidate.value <= best.value => Some(best),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;
    use crate::{
        config::SearchConfig,
        cutoff::{CutoffRule, DecisiveMargin, Horizon},
        full_width,
        minimax::{NEG_INFINITY, POS_INFINITY},
    };

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_best_candidate_keeps_first_of_equals() {
        let candidates = [
            CandidateValue {
                pos: Pos::new(0, 0),
                value: 2,
            },
            CandidateValue {
                pos: Pos::new(0, 1),
                value: 3,
            },
            CandidateValue {
                pos: Pos::new(1, 0),
                value: 3,
            },
        ];
        assert_eq!(best_candidate(&candidates), Some(candidates[1]));
        assert_eq!(best_candidate(&[]), None);
    }

    #[test]
    fn test_selection_and_candidates_share_one_search() {
        let engine = SearchEngine::default();
        let b = board(".OO/XO./.XX");
        let (candidates, stats) = engine.candidate_values_with_stats(&b);
        let selection = engine.select_move(&b).unwrap();
        assert_eq!(stats, selection.stats);
        assert_eq!(
            best_candidate(&candidates).map(|c| (c.pos, c.value)),
            Some((selection.pos, selection.value))
        );
    }

    #[test]
    fn test_full_board_has_no_move() {
        let engine = SearchEngine::default();
        assert!(engine.select_move(&board("XO/OX")).is_none());
        assert!(engine.candidate_values(&board("XO/OX")).is_empty());
    }

    #[test]
    fn test_prefers_completing_three_in_a_row() {
        let engine = SearchEngine::default();
        // computer 2, player 4 before the move
        let b = board(".OO/XO./.XX");
        let values: Vec<_> = engine
            .candidate_values(&b)
            .into_iter()
            .map(|c| (c.pos, c.value))
            .collect();
        assert_eq!(
            values,
            [
                (Pos::new(0, 0), 2),
                (Pos::new(1, 2), 2),
                (Pos::new(2, 0), 3)
            ]
        );

        let selection = engine.select_move(&b).unwrap();
        assert_eq!(selection.pos, Pos::new(2, 0));
        assert_eq!(selection.value, 3);
        assert_eq!(selection.board, board(".OO/XO./XXX"));

        let full = SearchEngine::new(
            SearchConfig::default().full_window(),
            Box::new(DecisiveMargin),
        );
        assert_eq!(full.select_move(&b).unwrap().pos, Pos::new(2, 0));
    }

    #[test]
    fn test_ties_go_to_first_candidate() {
        let engine = SearchEngine::default();
        // every reply leaves the computer's pair ahead
        let selection = engine.select_move(&board("XX./.../...")).unwrap();
        assert_eq!(selection.pos, Pos::new(0, 2));
        assert_eq!(selection.value, 3);
    }

    #[test]
    fn test_all_negative_infinity_picks_first_child() {
        let engine = SearchEngine::default();
        // Either computer move ties the scores at 25, and the player's forced
        // reply fills the board without breaking the tie.
        let b = board(".XX./XXXX/OOOO/XOOO");
        let values = engine.candidate_values(&b);
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|c| c.value == NEG_INFINITY));

        let selection = engine.select_move(&b).unwrap();
        assert_eq!(selection.pos, Pos::new(0, 0));
        assert_eq!(selection.value, NEG_INFINITY);
    }

    #[test]
    fn test_tied_full_reply_is_positive_infinity() {
        let engine = SearchEngine::default();
        let selection = engine.select_move(&board("XO/O.")).unwrap();
        assert_eq!(selection.pos, Pos::new(1, 1));
        assert_eq!(selection.value, POS_INFINITY);
    }

    #[test]
    fn test_expired_time_limit_keeps_first_candidate() {
        let config = SearchConfig {
            time_limit: Some(Duration::ZERO),
            ..SearchConfig::default()
        };
        let engine = SearchEngine::new(config, Box::new(DecisiveMargin));
        let selection = engine.select_move(&Board::new(3).unwrap()).unwrap();
        assert_eq!(selection.pos, Pos::new(0, 0));
        assert!(selection.stats.timed_out);
        assert_eq!(engine.candidate_values(&Board::new(3).unwrap()).len(), 1);
    }

    #[test]
    fn test_full_window_selection_matches_full_width_argmax() {
        let mut rng = Pcg32::seed_from_u64(77);
        let config = SearchConfig {
            depth_limit: 4,
            ..SearchConfig::default()
        }
        .full_window();
        let rules: [Box<dyn CutoffRule>; 2] = [Box::new(DecisiveMargin), Box::new(Horizon)];
        for rule in rules {
            let engine = SearchEngine::new(config.clone(), rule);
            for _ in 0..25 {
                let mut b = Board::new(3).unwrap();
                for pos in b.positions().collect::<Vec<_>>() {
                    match rng.random_range(0..3) {
                        0 => b = b.place(pos, Mark::Computer),
                        1 => b = b.place(pos, Mark::Player),
                        _ => {}
                    }
                }
                let expected = full_width::select_move(engine.cutoff_rule(), &config, &b);
                let actual = engine.select_move(&b).map(|s| (s.pos, s.value));
                assert_eq!(actual, expected, "\n{b}");
            }
        }
    }
}
