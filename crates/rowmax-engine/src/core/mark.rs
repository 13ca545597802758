use std::fmt;

use serde::{Deserialize, Serialize};

/// Content of a single board cell.
///
/// Every cell always holds exactly one mark. The computer plays `X` and the
/// human player plays `O`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::IsVariant,
)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// Cell taken by the computer (maximizing side).
    Computer,
    /// Cell taken by the human player (minimizing side).
    Player,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid mark symbol {symbol:?}")]
pub struct ParseMarkError {
    symbol: char,
}

impl Mark {
    pub const ALL: [Mark; 3] = [Mark::Empty, Mark::Computer, Mark::Player];

    /// Returns the character used when rendering this mark.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Computer => 'X',
            Mark::Player => 'O',
        }
    }

    /// Parses a single board character.
    ///
    /// Besides the rendered symbols this accepts `' '` and `'_'` for empty cells,
    /// lowercase letters, and `'0'` for the player.
    pub fn from_symbol(symbol: char) -> Result<Self, ParseMarkError> {
        match symbol {
            '.' | ' ' | '_' => Ok(Mark::Empty),
            'X' | 'x' => Ok(Mark::Computer),
            'O' | 'o' | '0' => Ok(Mark::Player),
            _ => Err(ParseMarkError { symbol }),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
