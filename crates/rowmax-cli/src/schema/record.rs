use chrono::{DateTime, Utc};
use rowmax_engine::{Board, MoveRecord};
use rowmax_evaluator::game_result::GameResult;
use rowmax_search::{CutoffKind, SearchConfig, SearchEngine};
use serde::{Deserialize, Serialize};

/// A finished game with enough metadata to replay it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedGame {
    /// Timestamp when the recording was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Side length of the board
    pub size: usize,
    /// Who played against the computer
    pub opponent: OpponentInfo,
    /// Search settings the computer used
    pub search: SearchSettings,
    /// Every move in order, starting with the player's first move
    pub moves: Vec<MoveRecord>,
    pub final_board: Board,
    pub result: GameResult,
}

/// Information about the computer's opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentInfo {
    /// Moves typed in by a human
    Human,
    /// Uniformly random empty cells from a seeded generator
    Random { seed: u64, game_index: usize },
}

/// Which cutoff rule and search configuration the computer uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub cutoff: CutoffKind,
    #[serde(flatten)]
    pub config: SearchConfig,
}

impl SearchSettings {
    pub fn build_engine(&self) -> SearchEngine {
        SearchEngine::new(self.config.clone(), self.cutoff.rule())
    }
}
