//! Board dimension representation.

use std::{fmt, str::FromStr};

use crate::Position;

/// The side length of a square bingo board.
///
/// A board of size N has N×N cells and therefore requires N×N phrases.
/// The size is chosen once and is immutable afterward; every valid size is
/// at least 1.
///
/// # Examples
///
/// ```
/// use wordbingo_core::GridSize;
///
/// let size = GridSize::new(3);
/// assert_eq!(size.side(), 3);
/// assert_eq!(size.cell_count(), 9);
///
/// // User input is parsed with validation.
/// let parsed: GridSize = "3".parse().unwrap();
/// assert_eq!(parsed, size);
/// assert!("0".parse::<GridSize>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSize(usize);

impl GridSize {
    /// Creates a grid size from a side length.
    ///
    /// # Panics
    ///
    /// Panics if `side` is 0. Use [`str::parse`] for fallible construction
    /// from user input.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbingo_core::GridSize;
    ///
    /// let size = GridSize::new(5);
    /// assert_eq!(size.side(), 5);
    /// ```
    ///
    /// ```should_panic
    /// use wordbingo_core::GridSize;
    ///
    /// // This will panic
    /// let _ = GridSize::new(0);
    /// ```
    #[must_use]
    pub fn new(side: usize) -> Self {
        assert!(side >= 1, "grid size must be at least 1");
        Self(side)
    }

    /// Returns the side length of the board.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.0
    }

    /// Returns the total number of cells (and required phrases): N×N.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbingo_core::GridSize;
    ///
    /// assert_eq!(GridSize::new(1).cell_count(), 1);
    /// assert_eq!(GridSize::new(4).cell_count(), 16);
    /// ```
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.0 * self.0
    }

    /// Returns an iterator over all board positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbingo_core::{GridSize, Position};
    ///
    /// let positions: Vec<_> = GridSize::new(2).positions().collect();
    /// assert_eq!(
    ///     positions,
    ///     [
    ///         Position::new(0, 0),
    ///         Position::new(0, 1),
    ///         Position::new(1, 0),
    ///         Position::new(1, 1),
    ///     ]
    /// );
    /// ```
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = *self;
        (0..size.cell_count()).map(move |index| Position::from_index(index, size))
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when parsing a grid size from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSizeError {
    /// The input was empty or whitespace-only.
    #[display("grid size cannot be empty")]
    Blank,
    /// The input did not parse as an integer.
    #[display("grid size must be a positive integer")]
    NotANumber,
    /// The input parsed as an integer, but was 0 or negative.
    #[display("grid size must be a positive integer")]
    NotPositive,
}

impl FromStr for GridSize {
    type Err = ParseSizeError;

    /// Parses a grid size from free text.
    ///
    /// Surrounding whitespace is ignored. Blank input, non-integer input,
    /// and non-positive integers are rejected with distinct errors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseSizeError::Blank);
        }
        let value: i64 = trimmed.parse().map_err(|_| ParseSizeError::NotANumber)?;
        if value < 1 {
            return Err(ParseSizeError::NotPositive);
        }
        let side = usize::try_from(value).map_err(|_| ParseSizeError::NotANumber)?;
        Ok(Self(side))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parse_accepts_positive_integers() {
        assert_eq!("1".parse::<GridSize>(), Ok(GridSize::new(1)));
        assert_eq!("3".parse::<GridSize>(), Ok(GridSize::new(3)));
        assert_eq!("  12  ".parse::<GridSize>(), Ok(GridSize::new(12)));
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!("".parse::<GridSize>(), Err(ParseSizeError::Blank));
        assert_eq!("   ".parse::<GridSize>(), Err(ParseSizeError::Blank));
        assert_eq!("\t\n".parse::<GridSize>(), Err(ParseSizeError::Blank));
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        assert_eq!("three".parse::<GridSize>(), Err(ParseSizeError::NotANumber));
        assert_eq!("3.5".parse::<GridSize>(), Err(ParseSizeError::NotANumber));
        assert_eq!("3x3".parse::<GridSize>(), Err(ParseSizeError::NotANumber));
    }

    #[test]
    fn parse_rejects_non_positive_input() {
        assert_eq!("0".parse::<GridSize>(), Err(ParseSizeError::NotPositive));
        assert_eq!("-3".parse::<GridSize>(), Err(ParseSizeError::NotPositive));
    }

    #[test]
    fn positions_cover_the_board_in_row_major_order() {
        let size = GridSize::new(3);
        let positions: Vec<_> = size.positions().collect();
        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[4], Position::new(1, 1));
        assert_eq!(positions[8], Position::new(2, 2));
    }

    proptest! {
        #[test]
        fn cell_count_is_side_squared(side in 1_usize..=64) {
            let size = GridSize::new(side);
            prop_assert_eq!(size.cell_count(), side * side);
            prop_assert_eq!(size.positions().count(), side * side);
        }

        #[test]
        fn parse_display_roundtrip(side in 1_usize..=1000) {
            let size = GridSize::new(side);
            prop_assert_eq!(size.to_string().parse::<GridSize>(), Ok(size));
        }
    }
}
