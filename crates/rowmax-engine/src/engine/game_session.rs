use serde::{Deserialize, Serialize};

use crate::{
    BoardSizeError, GameFinishedError,
    core::{
        board::{Board, Pos},
        mark::Mark,
    },
};

/// One of the two participants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Returns the mark this side places.
    #[must_use]
    pub const fn mark(self) -> Mark {
        match self {
            Side::Player => Mark::Player,
            Side::Computer => Mark::Computer,
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// A move that has been applied to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number (0-indexed, increments with each applied move)
    pub turn: usize,
    pub side: Side,
    pub pos: Pos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Finished,
}

/// A game in progress: the current board, the side to move and the moves so far.
///
/// The session alternates sides after every move and finishes once the board
/// is full. It performs no legality check beyond that: placing onto an
/// occupied cell is accepted and still passes the turn.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    next_side: Side,
    history: Vec<MoveRecord>,
}

impl GameSession {
    /// Starts a game on an empty `size × size` board with the player to move.
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        Ok(Self::from_board(Board::new(size)?, Side::Player))
    }

    /// Resumes a game from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, next_side: Side) -> Self {
        Self {
            board,
            next_side,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn next_side(&self) -> Side {
        self.next_side
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the number of moves applied so far.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        if self.board.is_full() {
            SessionState::Finished
        } else {
            SessionState::Playing
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session_state().is_finished()
    }

    /// Places the mark of the side to move at `pos` and passes the turn.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board. Callers reading positions from
    /// untrusted input should check [`Board::contains`] first.
    pub fn apply_move(&mut self, pos: Pos) -> Result<MoveRecord, GameFinishedError> {
        if self.is_finished() {
            return Err(GameFinishedError);
        }

        let record = MoveRecord {
            turn: self.turn(),
            side: self.next_side,
            pos,
        };
        self.board = self.board.place(pos, self.next_side.mark());
        self.history.push(record);
        self.next_side = self.next_side.opponent();

        tracing::debug!(turn = record.turn, side = %record.side, %pos, "applied move");
        Ok(record)
    }
}
