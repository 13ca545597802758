//! Final verdict of a finished game.
//!
//! Unlike search, which compares [`Tier`](crate::margin::Tier)s, the winner is
//! decided by comparing raw run scores: strictly greater wins, equal is a tie.

use rowmax_engine::Board;
use serde::{Deserialize, Serialize};

use crate::run_score::Scores;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
pub enum Winner {
    Player,
    Computer,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub scores: Scores,
    pub winner: Winner,
}

impl GameResult {
    #[must_use]
    pub fn from_scores(scores: Scores) -> Self {
        let winner = match scores.player.cmp(&scores.computer) {
            std::cmp::Ordering::Greater => Winner::Player,
            std::cmp::Ordering::Less => Winner::Computer,
            std::cmp::Ordering::Equal => Winner::Tie,
        };
        Self { scores, winner }
    }

    /// Scores both marks on `board` and picks the winner.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self::from_scores(Scores::from_board(board))
    }

    /// Line reporting both final scores: `player scored: P    computer scored: C`.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!(
            "player scored: {}    computer scored: {}",
            self.scores.player, self.scores.computer
        )
    }

    /// Line announcing the winner, as written at the end of a transcript.
    #[must_use]
    pub fn announcement(&self) -> &'static str {
        match self.winner {
            Winner::Player => "player wins!!",
            Winner::Computer => "Computer wins",
            Winner::Tie => "Tie game!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_raw_score_wins() {
        let board: Board = "XXX/OOX/OXO".parse().unwrap();
        let result = GameResult::from_board(&board);
        // X: row 0 (7) + column 2 "XXO" (2); O: row 1 "OOX" (2) + column 0 "XOO" (2)
        assert_eq!(result.scores.computer, 9);
        assert_eq!(result.scores.player, 4);
        assert_eq!(result.winner, Winner::Computer);
        assert_eq!(result.announcement(), "Computer wins");
        assert_eq!(result.score_line(), "player scored: 4    computer scored: 9");
    }

    #[test]
    fn test_player_win() {
        let result = GameResult::from_scores(Scores {
            computer: 4,
            player: 5,
        });
        assert!(result.winner.is_player());
        assert_eq!(result.announcement(), "player wins!!");
    }

    #[test]
    fn test_equal_scores_tie() {
        let board: Board = "XO/OX".parse().unwrap();
        let result = GameResult::from_board(&board);
        assert!(result.winner.is_tie());
        assert_eq!(result.announcement(), "Tie game!");
    }

    #[test]
    fn test_serde_round_trip() {
        let result = GameResult::from_scores(Scores {
            computer: 9,
            player: 2,
        });
        let json = serde_json::to_string(&result).unwrap();
        let back: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
