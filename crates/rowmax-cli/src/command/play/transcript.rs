use std::io::{self, Write};

use rowmax_engine::{Board, Pos};
use rowmax_evaluator::game_result::GameResult;

/// Plain-text log of a game.
///
/// ```text
/// Player move: 1 1
/// ...
/// .O.
/// ...
///
/// Computer move:
/// X..
/// .O.
/// ...
///
/// player scored: 4    computer scored: 9
/// Computer wins
/// ```
#[derive(Debug)]
pub(crate) struct Transcript<W> {
    writer: W,
}

impl Transcript<io::Sink> {
    /// A transcript that discards everything.
    pub(crate) fn disabled() -> Self {
        Self::new(io::sink())
    }
}

impl<W> Transcript<W>
where
    W: Write,
{
    pub(crate) fn new(writer: W) -> Self {
        Self { writer }
    }

    pub(crate) fn player_move(&mut self, pos: Pos, board: &Board) -> io::Result<()> {
        writeln!(self.writer, "Player move: {pos}")?;
        self.board(board)
    }

    pub(crate) fn computer_move(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.writer, "Computer move:")?;
        self.board(board)
    }

    pub(crate) fn result(&mut self, result: &GameResult) -> io::Result<()> {
        writeln!(self.writer, "{}", result.score_line())?;
        write!(self.writer, "{}", result.announcement())?;
        self.writer.flush()
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.writer
    }

    fn board(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.writer, "{board}")?;
        writeln!(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use rowmax_engine::Mark;

    use super::*;

    #[test]
    fn test_transcript_layout() {
        let mut transcript = Transcript::new(Vec::new());
        let board = Board::new(2).unwrap().place(Pos::new(1, 0), Mark::Player);
        transcript.player_move(Pos::new(1, 0), &board).unwrap();
        let board = board.place(Pos::new(0, 0), Mark::Computer);
        transcript.computer_move(&board).unwrap();
        let board: Board = "XX/OO".parse().unwrap();
        transcript.result(&GameResult::from_board(&board)).unwrap();

        let text = String::from_utf8(transcript.into_inner()).unwrap();
        assert_eq!(
            text,
            "Player move: 1 0\n..\nO.\n\n\
             Computer move:\nX.\nO.\n\n\
             player scored: 2    computer scored: 2\n\
             Tie game!"
        );
    }
}
