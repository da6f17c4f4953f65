use wordbingo_core::{BlankPhraseError, GridSize, Phrase};

/// An ordered list of phrases being gathered for a board of a fixed size.
///
/// The list is bounded above by `size.cell_count()` entries and is mutable
/// only during collection: phrases are appended at the end and removed by
/// index. Once the session advances to play, the collector is consumed and
/// the list becomes immutable.
///
/// # Examples
///
/// ```
/// use wordbingo_core::GridSize;
/// use wordbingo_game::PhraseCollector;
///
/// let mut collector = PhraseCollector::new(GridSize::new(2));
/// collector.add("Red Flag").unwrap();
/// assert_eq!(collector.filled(), 1);
/// assert_eq!(collector.required(), 4);
/// assert!(!collector.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseCollector {
    size: GridSize,
    phrases: Vec<Phrase>,
}

impl PhraseCollector {
    /// Creates an empty collector for a board of the given size.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            phrases: Vec::with_capacity(size.cell_count()),
        }
    }

    /// Returns the board size this collector gathers phrases for.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the phrases collected so far, in entry order.
    #[must_use]
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Returns the number of phrases collected so far.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.phrases.len()
    }

    /// Returns the number of phrases the board requires: N×N.
    #[must_use]
    pub fn required(&self) -> usize {
        self.size.cell_count()
    }

    /// Returns whether exactly N×N phrases have been collected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.filled() == self.required()
    }

    /// Appends a phrase at the end of the list.
    ///
    /// The capacity check runs before the blank check, so a full collector
    /// reports [`CollectError::Full`] even for blank input.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Full`] if the list already holds N×N
    /// entries, and [`CollectError::Blank`] if the text is blank.
    pub fn add(&mut self, text: &str) -> Result<(), CollectError> {
        if self.is_complete() {
            return Err(CollectError::Full {
                capacity: self.required(),
            });
        }
        let phrase = Phrase::new(text)?;
        self.phrases.push(phrase);
        Ok(())
    }

    /// Removes and returns the phrase at `index`.
    ///
    /// The relative order of the remaining phrases is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::OutOfRange`] if `index` is not a valid
    /// position in the list.
    pub fn remove(&mut self, index: usize) -> Result<Phrase, CollectError> {
        if index >= self.phrases.len() {
            return Err(CollectError::OutOfRange {
                index,
                len: self.phrases.len(),
            });
        }
        Ok(self.phrases.remove(index))
    }

    /// Consumes the collector, returning the collected phrases.
    #[must_use]
    pub fn into_phrases(self) -> Vec<Phrase> {
        self.phrases
    }
}

/// Errors that can occur while collecting phrases.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum CollectError {
    /// The phrase text was empty or whitespace-only.
    #[display("{_0}")]
    Blank(#[from] BlankPhraseError),
    /// The list already holds all N×N phrases.
    #[display("all {capacity} phrases are already filled in")]
    #[from(skip)]
    Full {
        /// The list capacity, N×N.
        capacity: usize,
    },
    /// The removal index does not refer to a collected phrase.
    #[display("no phrase at index {index} (the list has {len})")]
    #[from(skip)]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
    /// Fewer than N×N phrases were collected when the board was requested.
    #[display("only {filled} of {required} phrases are filled in")]
    #[from(skip)]
    Incomplete {
        /// The number of phrases collected so far.
        filled: usize,
        /// The number of phrases the board requires.
        required: usize,
    },
}
