use std::mem;

use wordbingo_core::{GridSize, Position};

pub(crate) mod handler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Validate the size draft and advance to phrase collection.
    SubmitSize,
    /// Append the phrase draft to the collection.
    AddPhrase,
    /// Remove the collected phrase at the given list index.
    RemovePhrase(usize),
    /// Freeze the collection into a board and advance to play.
    StartBoard,
    /// Cross or uncross the cell at the given position.
    ToggleCell(Position),
    /// Cross or uncross the keyboard-selected cell.
    ToggleSelected,
    /// Move the keyboard selection on the board.
    MoveSelection(MoveDirection),
    /// Drop the keyboard selection.
    ClearSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    pub(crate) fn apply_to(self, pos: Position, size: GridSize) -> Option<Position> {
        match self {
            Self::Up => pos.up(),
            Self::Down => pos.down(size),
            Self::Left => pos.left(),
            Self::Right => pos.right(size),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
