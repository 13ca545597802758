//! Game state above a single board.
//!
//! - [`GameSession`] - the board being played, whose turn it is, and the move history
//! - [`Side`] - one of the two participants
//! - [`MoveRecord`] - a single applied move, used for transcripts and recordings
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] with the board size (the player moves first)
//! 2. The side returned by [`GameSession::next_side`] chooses a position
//! 3. [`GameSession::apply_move`] places that side's mark and passes the turn
//! 4. Repeat until [`GameSession::is_finished`] (the board is full)
//!
//! # Example
//!
//! ```
//! use rowmax_engine::{GameSession, Pos, Side};
//!
//! let mut session = GameSession::new(3).unwrap();
//! assert_eq!(session.next_side(), Side::Player);
//!
//! session.apply_move(Pos::new(0, 0)).unwrap();
//! assert_eq!(session.next_side(), Side::Computer);
//! assert_eq!(session.history().len(), 1);
//! ```

pub use self::game_session::*;

mod game_session;
