use std::{
    fs::{self, File},
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::Utc;
use rowmax_engine::GameSession;
use rowmax_evaluator::game_result::GameResult;

use crate::schema::record::{OpponentInfo, RecordedGame, SearchSettings};

impl RecordedGame {
    /// Captures a finished session.
    pub fn from_session(
        session: &GameSession,
        opponent: OpponentInfo,
        search: SearchSettings,
    ) -> Self {
        let final_board = session.board().clone();
        Self {
            recorded_at: Utc::now(),
            size: final_board.size(),
            opponent,
            search,
            moves: session.history().to_vec(),
            result: GameResult::from_board(&final_board),
            final_board,
        }
    }

    /// File name derived from the recording time: `game-{YYYYMMDD_HHMMSS_mmm}.json`.
    ///
    /// Games from a random opponent also carry their index so that several
    /// games finished within the same millisecond do not collide.
    pub fn file_name(&self) -> String {
        let timestamp = self.recorded_at.format("%Y%m%d_%H%M%S_%3f");
        match self.opponent {
            OpponentInfo::Human => format!("game-{timestamp}.json"),
            OpponentInfo::Random { game_index, .. } => {
                format!("game-{timestamp}-{game_index:04}.json")
            }
        }
    }

    /// Saves the recording as pretty-printed JSON into `record_dir`.
    ///
    /// The directory is created if it doesn't exist. Returns the path written.
    pub fn save(&self, record_dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(record_dir)
            .with_context(|| format!("Failed to create directory {}", record_dir.display()))?;

        let filepath = record_dir.join(self.file_name());
        let file = File::create(&filepath)
            .with_context(|| format!("Failed to create file: {}", filepath.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to write JSON to {}", filepath.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", filepath.display()))?;

        Ok(filepath)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use chrono::TimeZone as _;
    use rowmax_engine::{Board, Pos, Side};

    use super::*;
    use crate::util;

    fn finished_session() -> GameSession {
        let mut session = GameSession::new(2).unwrap();
        for pos in [
            Pos::new(0, 0),
            Pos::new(0, 1),
            Pos::new(1, 1),
            Pos::new(1, 0),
        ] {
            session.apply_move(pos).unwrap();
        }
        session
    }

    #[test]
    fn test_from_session_captures_moves_and_result() {
        let session = finished_session();
        let settings = SearchSettings {
            cutoff: rowmax_search::CutoffKind::Margin,
            config: rowmax_search::SearchConfig::default(),
        };
        let game = RecordedGame::from_session(&session, OpponentInfo::Human, settings);

        assert_eq!(game.size, 2);
        assert_eq!(game.moves.len(), 4);
        assert_eq!(game.moves[1].side, Side::Computer);
        assert_eq!(game.final_board, "OX/XO".parse::<Board>().unwrap());
        assert!(game.result.winner.is_tie());
    }

    #[test]
    fn test_file_name_uses_timestamp() {
        let session = finished_session();
        let settings = SearchSettings {
            cutoff: rowmax_search::CutoffKind::Margin,
            config: rowmax_search::SearchConfig::default(),
        };
        let mut game = RecordedGame::from_session(&session, OpponentInfo::Human, settings);
        game.recorded_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(game.file_name(), "game-20260102_030405_000.json");

        game.opponent = OpponentInfo::Random {
            seed: 1,
            game_index: 7,
        };
        assert_eq!(game.file_name(), "game-20260102_030405_000-0007.json");
    }

    #[test]
    fn test_save_and_read_back() {
        let dir = env::temp_dir().join(format!("rowmax-record-test-{}", std::process::id()));
        let session = finished_session();
        let settings = SearchSettings {
            cutoff: rowmax_search::CutoffKind::Horizon,
            config: rowmax_search::SearchConfig::default(),
        };
        let game = RecordedGame::from_session(&session, OpponentInfo::Human, settings);

        let path = game.save(&dir).unwrap();
        let loaded: RecordedGame = util::read_json_file("recording", &path).unwrap();
        assert_eq!(loaded, game);

        fs::remove_dir_all(&dir).unwrap();
    }
}
