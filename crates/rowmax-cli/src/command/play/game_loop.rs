use std::io::Write;

use anyhow::Context;
use rowmax_engine::{GameSession, Side};
use rowmax_evaluator::game_result::{GameResult, Winner};
use rowmax_search::SearchEngine;

use super::{opponent::Opponent, transcript::Transcript};

#[derive(Debug)]
pub(crate) struct GameOutcome {
    pub(crate) session: GameSession,
    pub(crate) result: GameResult,
}

/// Alternates the opponent and the computer until the board is full.
///
/// Boards are echoed to `display` after every move and the final scores and
/// verdict are printed once the game ends.
pub(crate) fn play_game<O, D, T>(
    mut session: GameSession,
    opponent: &mut O,
    engine: &SearchEngine,
    display: &mut D,
    transcript: &mut Transcript<T>,
) -> anyhow::Result<GameOutcome>
where
    O: Opponent + ?Sized,
    D: Write + ?Sized,
    T: Write,
{
    while !session.is_finished() {
        match session.next_side() {
            Side::Player => {
                let pos = opponent.choose_move(session.board())?;
                session.apply_move(pos)?;
                writeln!(display, "{}", session.board())?;
                transcript
                    .player_move(pos, session.board())
                    .context("Failed to write transcript")?;
            }
            Side::Computer => {
                let selection = engine
                    .select_move(session.board())
                    .context("no empty cell left for the computer")?;
                session.apply_move(selection.pos)?;
                writeln!(display, "Computer move:\n{}", session.board())?;
                transcript
                    .computer_move(session.board())
                    .context("Failed to write transcript")?;
            }
        }
    }

    let result = GameResult::from_board(session.board());
    writeln!(display, "{}", result.score_line())?;
    writeln!(display, "{}", result.announcement())?;
    display.flush()?;
    transcript
        .result(&result)
        .context("Failed to write transcript")?;

    Ok(GameOutcome { session, result })
}

/// Win and tie counts over several games.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tally {
    pub(crate) player_wins: usize,
    pub(crate) computer_wins: usize,
    pub(crate) ties: usize,
}

impl Tally {
    pub(crate) fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Player => self.player_wins += 1,
            Winner::Computer => self.computer_wins += 1,
            Winner::Tie => self.ties += 1,
        }
    }

    pub(crate) fn games(&self) -> usize {
        self.player_wins + self.computer_wins + self.ties
    }
}
