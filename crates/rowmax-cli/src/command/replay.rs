use std::{
    io::{self, Write},
    path::PathBuf,
};

use rowmax_engine::GameSession;
use rowmax_evaluator::{game_result::GameResult, run_score::Scores};

use crate::{
    schema::record::{OpponentInfo, RecordedGame},
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub struct ReplayArg {
    /// Path to the recording file (JSON format)
    recording_file: PathBuf,
}

pub fn run(arg: &ReplayArg) -> anyhow::Result<()> {
    let ReplayArg { recording_file } = arg;

    eprintln!("Loading recording from {}", recording_file.display());
    let game = util::read_recording_file(recording_file)?;

    eprintln!("Loaded {} moves", game.moves.len());

    replay(&game, &mut io::stdout().lock())?;

    Ok(())
}

/// Re-applies every recorded move, printing each board with the running scores.
fn replay<W>(game: &RecordedGame, out: &mut W) -> anyhow::Result<GameResult>
where
    W: Write,
{
    let opponent = match game.opponent {
        OpponentInfo::Human => "human".to_owned(),
        OpponentInfo::Random { seed, game_index } => {
            format!("random (seed {seed}, game {game_index})")
        }
    };
    writeln!(
        out,
        "{size}x{size} game recorded at {} against {opponent}, cutoff {}",
        game.recorded_at.format("%Y-%m-%d %H:%M:%S"),
        game.search.cutoff,
        size = game.size,
    )?;
    writeln!(out)?;

    let mut session = GameSession::new(game.size)?;
    for record in &game.moves {
        anyhow::ensure!(
            record.side == session.next_side(),
            "move {} was recorded for the {} but the {} is to move",
            record.turn,
            record.side,
            session.next_side()
        );
        anyhow::ensure!(
            session.board().contains(record.pos),
            "move {} at ({}) is outside the board",
            record.turn,
            record.pos
        );
        session.apply_move(record.pos)?;

        let scores = Scores::from_board(session.board());
        writeln!(out, "Turn {}: {} plays {}", record.turn + 1, record.side, record.pos)?;
        writeln!(out, "{}", session.board())?;
        writeln!(
            out,
            "player: {}    computer: {}",
            scores.player, scores.computer
        )?;
        writeln!(out)?;
    }

    anyhow::ensure!(
        *session.board() == game.final_board,
        "replayed board does not match the recorded final board"
    );

    let result = GameResult::from_board(session.board());
    if result != game.result {
        tracing::warn!(
            recorded = ?game.result,
            replayed = ?result,
            "recorded result differs from the replayed board"
        );
    }
    writeln!(out, "{}", result.score_line())?;
    writeln!(out, "{}", result.announcement())?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rowmax_engine::{Board, MoveRecord, Pos, Side};
    use rowmax_search::{CutoffKind, SearchConfig};

    use super::*;
    use crate::schema::record::SearchSettings;

    fn recorded(moves: &[(Side, Pos)], final_board: &str) -> RecordedGame {
        let final_board: Board = final_board.parse().unwrap();
        RecordedGame {
            recorded_at: Utc::now(),
            size: final_board.size(),
            opponent: OpponentInfo::Human,
            search: SearchSettings {
                cutoff: CutoffKind::Margin,
                config: SearchConfig::default(),
            },
            moves: moves
                .iter()
                .enumerate()
                .map(|(turn, &(side, pos))| MoveRecord { turn, side, pos })
                .collect(),
            result: GameResult::from_board(&final_board),
            final_board,
        }
    }

    #[test]
    fn test_replay_prints_each_move() {
        let game = recorded(
            &[
                (Side::Player, Pos::new(0, 0)),
                (Side::Computer, Pos::new(0, 1)),
                (Side::Player, Pos::new(1, 0)),
                (Side::Computer, Pos::new(1, 1)),
            ],
            "OX/OX",
        );
        let mut out = Vec::new();
        let result = replay(&game, &mut out).unwrap();

        assert!(result.winner.is_tie());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Turn 1: Player plays 0 0\nO.\n..\nplayer: 0    computer: 0\n"));
        assert!(text.contains("Turn 3: Player plays 1 0\nOX\nO.\nplayer: 2    computer: 0\n"));
        assert!(text.ends_with("player scored: 2    computer scored: 2\nTie game!\n"));
    }

    #[test]
    fn test_replay_rejects_mismatched_final_board() {
        let game = recorded(
            &[
                (Side::Player, Pos::new(0, 0)),
                (Side::Computer, Pos::new(0, 1)),
                (Side::Player, Pos::new(1, 0)),
                (Side::Computer, Pos::new(1, 1)),
            ],
            "XX/OO",
        );
        assert!(replay(&game, &mut io::sink()).is_err());
    }

    #[test]
    fn test_replay_rejects_out_of_turn_move() {
        let game = recorded(&[(Side::Computer, Pos::new(0, 0))], "X./..");
        assert!(replay(&game, &mut io::sink()).is_err());
    }
}
