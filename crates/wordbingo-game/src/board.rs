use wordbingo_core::{GridSize, Phrase, Position};

/// A frozen N×N bingo board.
///
/// The board is built exactly once from a grid size and exactly N×N
/// phrases; the phrase entered at index `i` occupies row `i / N`, column
/// `i % N`. After construction, the per-cell crossed flags are the only
/// state that mutates; phrases and layout never change, and no cell
/// depends on any other (there is no win-line detection).
///
/// # Examples
///
/// ```
/// use wordbingo_core::{GridSize, Phrase, Position};
/// use wordbingo_game::Board;
///
/// let phrases: Vec<_> = ["a", "b", "c", "d"]
///     .into_iter()
///     .map(|text| Phrase::new(text).unwrap())
///     .collect();
/// let mut board = Board::new(GridSize::new(2), phrases).unwrap();
///
/// let pos = Position::new(0, 1);
/// assert_eq!(board.cell(pos).unwrap().phrase().as_str(), "b");
/// assert!(board.toggle(pos).unwrap());
/// assert!(board.cell(pos).unwrap().is_crossed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: GridSize,
    cells: Vec<BoardCell>,
}

impl Board {
    /// Builds a board from a grid size and the collected phrases.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PhraseCountMismatch`] unless exactly
    /// `size.cell_count()` phrases are supplied.
    pub fn new(size: GridSize, phrases: Vec<Phrase>) -> Result<Self, BoardError> {
        if phrases.len() != size.cell_count() {
            return Err(BoardError::PhraseCountMismatch {
                expected: size.cell_count(),
                actual: phrases.len(),
            });
        }
        let cells = phrases
            .into_iter()
            .map(|phrase| BoardCell {
                phrase,
                crossed: false,
            })
            .collect();
        Ok(Self { size, cells })
    }

    /// Returns the board size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cell at `pos`, or `None` if `pos` is outside the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&BoardCell> {
        pos.in_bounds(self.size)
            .then(|| &self.cells[pos.index(self.size)])
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    /// Flips the crossed flag of the cell at `pos` and returns the new
    /// state.
    ///
    /// No other cell is affected; toggling the same cell again restores
    /// its previous state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `pos` is outside the board.
    pub fn toggle(&mut self, pos: Position) -> Result<bool, BoardError> {
        if !pos.in_bounds(self.size) {
            return Err(BoardError::OutOfBounds { position: pos });
        }
        let cell = &mut self.cells[pos.index(self.size)];
        cell.crossed = !cell.crossed;
        Ok(cell.crossed)
    }
}

/// One board cell: a phrase paired with its crossed flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCell {
    phrase: Phrase,
    crossed: bool,
}

impl BoardCell {
    /// Returns the phrase occupying this cell.
    #[must_use]
    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    /// Returns whether this cell is currently crossed out.
    #[must_use]
    pub fn is_crossed(&self) -> bool {
        self.crossed
    }
}

/// Errors that can occur when building or mutating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The phrase count does not match the board's cell count.
    #[display("the board needs exactly {expected} phrases, got {actual}")]
    PhraseCountMismatch {
        /// The cell count of the board, N×N.
        expected: usize,
        /// The number of phrases supplied.
        actual: usize,
    },
    /// The position lies outside the board.
    #[display("position {position} is outside the board")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
    },
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn phrases(texts: &[&str]) -> Vec<Phrase> {
        texts
            .iter()
            .map(|text| Phrase::new(*text).unwrap())
            .collect()
    }

    fn numbered_phrases(count: usize) -> Vec<Phrase> {
        (0..count)
            .map(|i| Phrase::new(format!("phrase {i}")).unwrap())
            .collect()
    }

    #[test]
    fn new_requires_exactly_cell_count_phrases() {
        let size = GridSize::new(2);
        assert!(matches!(
            Board::new(size, phrases(&["a", "b", "c"])),
            Err(BoardError::PhraseCountMismatch {
                expected: 4,
                actual: 3,
            })
        ));
        assert!(Board::new(size, phrases(&["a", "b", "c", "d"])).is_ok());
    }

    #[test]
    fn phrase_to_cell_mapping_is_row_major() {
        let size = GridSize::new(3);
        let board = Board::new(size, numbered_phrases(9)).unwrap();
        for (i, pos) in size.positions().enumerate() {
            assert_eq!(
                board.cell(pos).unwrap().phrase().as_str(),
                format!("phrase {i}")
            );
        }
        assert_eq!(
            board.cell(Position::new(2, 2)).unwrap().phrase().as_str(),
            "phrase 8"
        );
    }

    #[test]
    fn toggle_flips_only_the_targeted_cell() {
        let size = GridSize::new(3);
        let mut board = Board::new(size, numbered_phrases(9)).unwrap();
        let target = Position::new(1, 1);

        assert_eq!(board.toggle(target), Ok(true));
        for pos in size.positions() {
            let expected = pos == target;
            assert_eq!(board.cell(pos).unwrap().is_crossed(), expected);
        }

        assert_eq!(board.toggle(target), Ok(false));
        for pos in size.positions() {
            assert!(!board.cell(pos).unwrap().is_crossed());
        }
    }

    #[test]
    fn toggle_rejects_out_of_bounds_positions() {
        let size = GridSize::new(2);
        let mut board = Board::new(size, numbered_phrases(4)).unwrap();
        let outside = Position::new(2, 0);
        assert_eq!(
            board.toggle(outside),
            Err(BoardError::OutOfBounds { position: outside })
        );
        assert_eq!(board.cell(outside), None);
    }

    proptest! {
        #[test]
        fn board_has_n_rows_of_n_cells(side in 1_usize..=8) {
            let size = GridSize::new(side);
            let board = Board::new(size, numbered_phrases(size.cell_count())).unwrap();
            prop_assert_eq!(board.cells().len(), side * side);
            for row in 0..side {
                for col in 0..side {
                    prop_assert!(board.cell(Position::new(row, col)).is_some());
                }
            }
            prop_assert!(board.cell(Position::new(side, 0)).is_none());
            prop_assert!(board.cell(Position::new(0, side)).is_none());
        }

        #[test]
        fn toggle_is_independent_per_cell(side in 1_usize..=5, toggle_seeds: Vec<usize>) {
            let size = GridSize::new(side);
            let mut board = Board::new(size, numbered_phrases(size.cell_count())).unwrap();
            let mut expected = vec![false; size.cell_count()];
            for seed in toggle_seeds {
                let index = seed % size.cell_count();
                let pos = Position::from_index(index, size);
                expected[index] = !expected[index];
                prop_assert_eq!(board.toggle(pos), Ok(expected[index]));
            }
            for (index, crossed) in expected.iter().enumerate() {
                let pos = Position::from_index(index, size);
                prop_assert_eq!(board.cell(pos).unwrap().is_crossed(), *crossed);
            }
        }
    }
}
