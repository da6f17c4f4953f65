//! Board position (row, column) coordinates.

use std::fmt;

use crate::GridSize;

/// A position on the bingo board, identified by row and column.
///
/// Positions use row-major index conversion: the phrase entered at index
/// `i` on a board of size N occupies row `i / N`, column `i % N`. This
/// matches the order phrases were entered during collection.
///
/// # Examples
///
/// ```
/// use wordbingo_core::{GridSize, Position};
///
/// let size = GridSize::new(3);
/// let pos = Position::from_index(5, size);
/// assert_eq!(pos, Position::new(1, 2));
/// assert_eq!(pos.index(size), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from row and column coordinates.
    ///
    /// Bounds are relative to a board size; use [`Position::in_bounds`] to
    /// check a position against a specific [`GridSize`].
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `size.cell_count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbingo_core::{GridSize, Position};
    ///
    /// let size = GridSize::new(2);
    /// assert_eq!(Position::from_index(0, size), Position::new(0, 0));
    /// assert_eq!(Position::from_index(3, size), Position::new(1, 1));
    /// ```
    #[must_use]
    pub fn from_index(index: usize, size: GridSize) -> Self {
        assert!(index < size.cell_count(), "cell index out of range");
        Self {
            row: index / size.side(),
            col: index % size.side(),
        }
    }

    /// Returns the row-major cell index of this position.
    #[must_use]
    pub const fn index(&self, size: GridSize) -> usize {
        self.row * size.side() + self.col
    }

    /// Returns the row coordinate (0-based, top to bottom).
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the column coordinate (0-based, left to right).
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Returns whether both coordinates fall inside a board of `size`.
    #[must_use]
    pub const fn in_bounds(&self, size: GridSize) -> bool {
        self.row < size.side() && self.col < size.side()
    }

    /// Returns the position one row up, if any.
    #[must_use]
    pub const fn up(&self) -> Option<Self> {
        match self.row.checked_sub(1) {
            Some(row) => Some(Self { row, col: self.col }),
            None => None,
        }
    }

    /// Returns the position one row down, if it is inside a board of `size`.
    #[must_use]
    pub fn down(&self, size: GridSize) -> Option<Self> {
        let moved = Self {
            row: self.row + 1,
            col: self.col,
        };
        moved.in_bounds(size).then_some(moved)
    }

    /// Returns the position one column left, if any.
    #[must_use]
    pub const fn left(&self) -> Option<Self> {
        match self.col.checked_sub(1) {
            Some(col) => Some(Self { row: self.row, col }),
            None => None,
        }
    }

    /// Returns the position one column right, if it is inside a board of `size`.
    #[must_use]
    pub fn right(&self, size: GridSize) -> Option<Self> {
        let moved = Self {
            row: self.row,
            col: self.col + 1,
        };
        moved.in_bounds(size).then_some(moved)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
