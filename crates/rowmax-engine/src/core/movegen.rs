use std::iter::FusedIterator;

use super::{
    board::{Board, Pos},
    mark::Mark,
};

/// A board reachable by one placement, together with the cell that was filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub pos: Pos,
    pub board: Board,
}

/// Iterator over every board obtainable by placing one mark in an empty cell.
///
/// Cells are visited in row-major order, so the first child is the one filling
/// the top-left-most empty cell. Ties during search are resolved in this order.
///
/// The iterator is created by [`Board::children`] and is single-pass: call
/// `children` again to enumerate the candidates a second time.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    board: &'a Board,
    mark: Mark,
    next_index: usize,
}

impl Board {
    /// Enumerates the boards produced by placing `mark` into each empty cell.
    ///
    /// A full board yields nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use rowmax_engine::{Board, Mark, Pos};
    ///
    /// let board: Board = "X./..".parse().unwrap();
    /// let children: Vec<_> = board.children(Mark::Player).collect();
    ///
    /// assert_eq!(children.len(), 3);
    /// assert_eq!(children[0].pos, Pos::new(0, 1));
    /// assert_eq!(children[0].board.to_compact_string(), "XO/..");
    /// ```
    #[must_use]
    pub fn children(&self, mark: Mark) -> Children<'_> {
        Children {
            board: self,
            mark,
            next_index: 0,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = Child;

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.board.size();
        while self.next_index < size * size {
            let pos = Pos::new(self.next_index / size, self.next_index % size);
            self.next_index += 1;
            if self.board.get(pos).is_empty() {
                return Some(Child {
                    pos,
                    board: self.board.place(pos, self.mark),
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.board.size();
        (0, Some(size * size - self.next_index))
    }
}

impl FusedIterator for Children<'_> {}
