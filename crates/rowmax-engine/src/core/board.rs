use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::BoardSizeError;

use super::mark::{Mark, ParseMarkError};

/// Zero-based cell coordinates.
///
/// The derived ordering is row-major, matching the order in which
/// [`Board::positions`] and [`Board::children`] enumerate cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("board text contains no rows")]
    Empty,
    #[display("row {row} has {actual} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[display("invalid cell at ({row}, {col}): {source}")]
    InvalidMark {
        row: usize,
        col: usize,
        source: ParseMarkError,
    },
}

/// Square grid of [`Mark`]s.
///
/// A `Board` is a value: every transformation ([`place`](Self::place),
/// [`children`](Self::children)) returns a new board and leaves the receiver
/// untouched. This lets a search tree hold many sibling states at once without
/// any of them observing another's changes.
///
/// The dimensions are fixed at construction. Cells are stored row-major.
///
/// # Example
///
/// ```
/// use rowmax_engine::{Board, Mark, Pos};
///
/// let board = Board::new(3).unwrap();
/// let next = board.place(Pos::new(1, 1), Mark::Computer);
///
/// assert_eq!(board.get(Pos::new(1, 1)), Mark::Empty);
/// assert_eq!(next.get(Pos::new(1, 1)), Mark::Computer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Box<[Mark]>,
}

impl Board {
    /// Creates an all-empty `size × size` board.
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if size == 0 {
            return Err(BoardSizeError::Zero);
        }
        let len = size
            .checked_mul(size)
            .ok_or(BoardSizeError::TooLarge { size })?;
        Ok(Self {
            size,
            cells: vec![Mark::Empty; len].into_boxed_slice(),
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "position ({pos}) is outside the {n}x{n} board",
            n = self.size
        );
        pos.row * self.size + pos.col
    }

    /// Returns the mark at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[self.index(pos)]
    }

    /// Returns a copy of this board with the cell at `pos` set to `mark`.
    ///
    /// No legality check is made: an occupied cell is simply overwritten.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range.
    #[must_use]
    pub fn place(&self, pos: Pos, mark: Mark) -> Board {
        let index = self.index(pos);
        let mut board = self.clone();
        board.cells[index] = mark;
        board
    }

    /// Returns `true` when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Mark::Empty)
    }

    /// Counts the cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == mark).count()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Iterates over the cells of column `col`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Mark> + '_ {
        assert!(col < self.size, "column {col} is outside the board");
        self.cells.iter().skip(col).step_by(self.size).copied()
    }

    /// Iterates over the columns, left to right.
    pub fn columns(&self) -> impl Iterator<Item = impl Iterator<Item = Mark> + '_> + '_ {
        (0..self.size).map(|col| self.column(col))
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Iterates over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(|pos| self.get(*pos).is_empty())
    }

    /// Renders the board as a single line with rows separated by `/`.
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        let mut s = String::with_capacity(self.cells.len() + self.size);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                s.push('/');
            }
            s.extend(row.iter().map(|mark| mark.symbol()));
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for mark in row {
                write!(f, "{mark}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses one row per line, or rows separated by `/`.
    ///
    /// Blank lines are skipped. The number of rows determines the board size
    /// and every row must have exactly that many cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['\n', '/'])
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(ParseBoardError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let actual = line.chars().count();
            if actual != size {
                return Err(ParseBoardError::RowLength {
                    row,
                    expected: size,
                    actual,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let mark = Mark::from_symbol(symbol)
                    .map_err(|source| ParseBoardError::InvalidMark { row, col, source })?;
                cells.push(mark);
            }
        }

        Ok(Self {
            size,
            cells: cells.into_boxed_slice(),
        })
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Format: "X.O/.X./..O"
        serializer.serialize_str(&self.to_compact_string())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid board {s:?}: {e}")))
    }
}
