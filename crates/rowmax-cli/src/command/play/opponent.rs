use std::io::{BufRead, Write};

use anyhow::Context;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use rowmax_engine::{Board, Pos};

use crate::schema::record::OpponentInfo;

/// The side playing against the computer.
pub(crate) trait Opponent {
    fn info(&self) -> OpponentInfo;

    /// Chooses where to place the next mark. The position must be on the board.
    fn choose_move(&mut self, board: &Board) -> anyhow::Result<Pos>;
}

#[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum ParsePosError {
    #[display("expected two numbers: row col")]
    Format,
    #[display("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },
}

/// Parses a `row col` line and checks it against the board size.
///
/// Occupied cells are accepted: the game does not check for illegal moves.
pub(crate) fn parse_pos(line: &str, size: usize) -> Result<Pos, ParsePosError> {
    let mut fields = line.split_whitespace().map(str::parse::<usize>);
    let (Some(Ok(row)), Some(Ok(col)), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ParsePosError::Format);
    };
    if row >= size || col >= size {
        return Err(ParsePosError::OutOfRange { row, col, size });
    }
    Ok(Pos::new(row, col))
}

/// Reads moves typed by a human, re-prompting on invalid input.
#[derive(Debug)]
pub(crate) struct HumanOpponent<R, W> {
    input: R,
    output: W,
}

impl<R, W> HumanOpponent<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R, W> Opponent for HumanOpponent<R, W>
where
    R: BufRead,
    W: Write,
{
    fn info(&self) -> OpponentInfo {
        OpponentInfo::Human
    }

    fn choose_move(&mut self, board: &Board) -> anyhow::Result<Pos> {
        loop {
            write!(self.output, "Player move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read player move")?;
            if read == 0 {
                anyhow::bail!("input ended before the game finished");
            }

            match parse_pos(&line, board.size()) {
                Ok(pos) => return Ok(pos),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}

/// Plays a uniformly random empty cell.
#[derive(Debug)]
pub(crate) struct RandomOpponent {
    seed: u64,
    game_index: usize,
    rng: Pcg32,
}

impl RandomOpponent {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            seed,
            game_index: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Marks the start of the next game. The generator keeps its state.
    pub(crate) fn start_game(&mut self, game_index: usize) {
        self.game_index = game_index;
    }
}

impl Opponent for RandomOpponent {
    fn info(&self) -> OpponentInfo {
        OpponentInfo::Random {
            seed: self.seed,
            game_index: self.game_index,
        }
    }

    fn choose_move(&mut self, board: &Board) -> anyhow::Result<Pos> {
        let empty: Vec<Pos> = board.empty_positions().collect();
        anyhow::ensure!(!empty.is_empty(), "no empty cell left for the opponent");
        Ok(empty[self.rng.random_range(0..empty.len())])
    }
}
