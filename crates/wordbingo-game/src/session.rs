use std::mem;

use wordbingo_core::{GridSize, ParseSizeError, Phrase, Position};

use crate::{Board, BoardError, CollectError, PhraseCollector};

/// A complete bingo session: the three-phase flow from size selection to
/// play.
///
/// The session is a forward-only state machine. Each phase freezes the
/// state produced by the previous one: the grid size is frozen when
/// collection starts, and the phrase list is frozen when the board is
/// built. There are no backward transitions, and operations issued in the
/// wrong phase fail with [`SessionError::WrongPhase`].
///
/// Play has no end state; cells can be toggled indefinitely until the
/// session value is dropped.
///
/// # Examples
///
/// ```
/// use wordbingo_core::Position;
/// use wordbingo_game::Session;
///
/// let mut session = Session::new();
/// assert!(session.is_size_select());
///
/// session.submit_size("2").unwrap();
/// assert!(session.is_collect());
///
/// for phrase in ["a", "b", "c", "d"] {
///     session.add_phrase(phrase).unwrap();
/// }
/// session.start_board().unwrap();
/// assert!(session.is_play());
///
/// assert_eq!(session.toggle_cell(Position::new(0, 0)), Ok(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Session {
    /// Waiting for the user to choose a grid size.
    SizeSelect,
    /// Gathering phrases for a board of the frozen size.
    Collect(PhraseCollector),
    /// Playing on the frozen board.
    Play(Board),
}

impl Session {
    /// Creates a session in the size-selection phase.
    #[must_use]
    pub fn new() -> Self {
        Self::SizeSelect
    }

    /// Returns the collector while the session is in the collection phase.
    #[must_use]
    pub fn collector(&self) -> Option<&PhraseCollector> {
        match self {
            Self::Collect(collector) => Some(collector),
            Self::SizeSelect | Self::Play(_) => None,
        }
    }

    /// Returns the board while the session is in the play phase.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        match self {
            Self::Play(board) => Some(board),
            Self::SizeSelect | Self::Collect(_) => None,
        }
    }

    /// Parses a grid size from user input and advances to collection.
    ///
    /// On failure, the session stays in the size-selection phase.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Size`] if the text is blank, non-numeric,
    /// or non-positive, and [`SessionError::WrongPhase`] outside the
    /// size-selection phase.
    pub fn submit_size(&mut self, text: &str) -> Result<GridSize, SessionError> {
        if !self.is_size_select() {
            return Err(SessionError::WrongPhase);
        }
        let size: GridSize = text.parse()?;
        *self = Self::Collect(PhraseCollector::new(size));
        Ok(size)
    }

    /// Appends a phrase to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Collect`] if the list is full or the text
    /// is blank, and [`SessionError::WrongPhase`] outside the collection
    /// phase.
    pub fn add_phrase(&mut self, text: &str) -> Result<(), SessionError> {
        let Self::Collect(collector) = self else {
            return Err(SessionError::WrongPhase);
        };
        collector.add(text)?;
        Ok(())
    }

    /// Removes and returns the phrase at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Collect`] if `index` is out of range, and
    /// [`SessionError::WrongPhase`] outside the collection phase.
    pub fn remove_phrase(&mut self, index: usize) -> Result<Phrase, SessionError> {
        let Self::Collect(collector) = self else {
            return Err(SessionError::WrongPhase);
        };
        Ok(collector.remove(index)?)
    }

    /// Freezes the phrase list into a board and advances to play.
    ///
    /// On failure, the session stays in the collection phase with the
    /// list unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Incomplete`] (wrapped in
    /// [`SessionError::Collect`]) if fewer than N×N phrases have been
    /// collected, and [`SessionError::WrongPhase`] outside the collection
    /// phase.
    pub fn start_board(&mut self) -> Result<(), SessionError> {
        let Self::Collect(collector) = self else {
            return Err(SessionError::WrongPhase);
        };
        if !collector.is_complete() {
            return Err(CollectError::Incomplete {
                filled: collector.filled(),
                required: collector.required(),
            }
            .into());
        }
        let collector = match mem::replace(self, Self::SizeSelect) {
            Self::Collect(collector) => collector,
            Self::SizeSelect | Self::Play(_) => {
                unreachable!("phase was checked above");
            }
        };
        let board = match Board::new(collector.size(), collector.into_phrases()) {
            Ok(board) => board,
            Err(_) => unreachable!("a complete collector holds exactly the required phrases"),
        };
        *self = Self::Play(board);
        Ok(())
    }

    /// Flips the crossed flag of the cell at `pos` and returns the new
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Board`] if `pos` is outside the board, and
    /// [`SessionError::WrongPhase`] outside the play phase.
    pub fn toggle_cell(&mut self, pos: Position) -> Result<bool, SessionError> {
        let Self::Play(board) = self else {
            return Err(SessionError::WrongPhase);
        };
        Ok(board.toggle(pos)?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when operating a session.
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
pub enum SessionError {
    /// The grid size input was rejected.
    #[display("{_0}")]
    Size(#[from] ParseSizeError),
    /// A phrase collection operation was rejected.
    #[display("{_0}")]
    Collect(#[from] CollectError),
    /// A board operation was rejected.
    #[display("{_0}")]
    Board(#[from] BoardError),
    /// The operation is not available in the current phase.
    #[display("operation is not available in the current phase")]
    WrongPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_in_collect(side: usize) -> Session {
        let mut session = Session::new();
        session.submit_size(&side.to_string()).unwrap();
        session
    }

    fn session_in_play(side: usize) -> Session {
        let mut session = session_in_collect(side);
        for i in 0..side * side {
            session.add_phrase(&format!("phrase {i}")).unwrap();
        }
        session.start_board().unwrap();
        session
    }

    #[test]
    fn submit_size_freezes_the_size_and_advances() {
        let mut session = Session::new();
        assert_eq!(session.submit_size("3"), Ok(GridSize::new(3)));
        let collector = session.collector().unwrap();
        assert_eq!(collector.size(), GridSize::new(3));
        assert_eq!(collector.required(), 9);
    }

    #[test]
    fn submit_size_failure_stays_on_size_select() {
        let mut session = Session::new();
        assert_eq!(
            session.submit_size(""),
            Err(SessionError::Size(ParseSizeError::Blank))
        );
        assert_eq!(
            session.submit_size("abc"),
            Err(SessionError::Size(ParseSizeError::NotANumber))
        );
        assert_eq!(
            session.submit_size("0"),
            Err(SessionError::Size(ParseSizeError::NotPositive))
        );
        assert!(session.is_size_select());
    }

    #[test]
    fn premature_start_stays_in_collection() {
        let mut session = session_in_collect(2);
        session.add_phrase("a").unwrap();
        assert_eq!(
            session.start_board(),
            Err(SessionError::Collect(CollectError::Incomplete {
                filled: 1,
                required: 4,
            }))
        );
        assert!(session.is_collect());
        assert_eq!(session.collector().unwrap().filled(), 1);
    }

    #[test]
    fn complete_collection_builds_the_board() {
        let session = session_in_play(3);
        let board = session.board().unwrap();
        assert_eq!(board.size(), GridSize::new(3));
        assert_eq!(board.cells().len(), 9);
        assert_eq!(
            board.cell(Position::new(2, 2)).unwrap().phrase().as_str(),
            "phrase 8"
        );
    }

    #[test]
    fn operations_outside_their_phase_are_rejected() {
        let mut session = Session::new();
        assert_eq!(session.add_phrase("a"), Err(SessionError::WrongPhase));
        assert_eq!(session.remove_phrase(0), Err(SessionError::WrongPhase));
        assert_eq!(session.start_board(), Err(SessionError::WrongPhase));
        assert_eq!(
            session.toggle_cell(Position::new(0, 0)),
            Err(SessionError::WrongPhase)
        );

        let mut session = session_in_play(1);
        assert_eq!(session.submit_size("2"), Err(SessionError::WrongPhase));
        assert_eq!(session.add_phrase("a"), Err(SessionError::WrongPhase));
        assert!(session.is_play());
    }

    #[test]
    fn toggle_cell_round_trips() {
        let mut session = session_in_play(2);
        let pos = Position::new(1, 0);
        assert_eq!(session.toggle_cell(pos), Ok(true));
        assert_eq!(session.toggle_cell(pos), Ok(false));
    }

    #[test]
    fn full_session_flow() {
        let phrases = [
            "Red Flag",
            "Safety Car",
            "Pit Stop",
            "DNF",
            "Fastest Lap",
            "Podium",
            "Pole Position",
            "Overtake",
            "Yellow Flag",
        ];

        let mut session = Session::new();
        session.submit_size("3").unwrap();
        for phrase in phrases {
            session.add_phrase(phrase).unwrap();
        }
        session.start_board().unwrap();

        let board = session.board().unwrap();
        assert_eq!(
            board.cell(Position::new(0, 0)).unwrap().phrase().as_str(),
            "Red Flag"
        );
        assert_eq!(
            board.cell(Position::new(2, 2)).unwrap().phrase().as_str(),
            "Yellow Flag"
        );

        let center = Position::new(1, 1);
        assert_eq!(
            session.board().unwrap().cell(center).unwrap().phrase().as_str(),
            "Fastest Lap"
        );

        assert_eq!(session.toggle_cell(center), Ok(true));
        let board = session.board().unwrap();
        for pos in board.size().positions() {
            let expected = pos == center;
            assert_eq!(board.cell(pos).unwrap().is_crossed(), expected);
        }

        assert_eq!(session.toggle_cell(center), Ok(false));
        let board = session.board().unwrap();
        for pos in board.size().positions() {
            assert!(!board.cell(pos).unwrap().is_crossed());
        }
    }
}
