use wordbingo_core::{ParseSizeError, Position};
use wordbingo_game::{CollectError, SessionError};

use crate::{
    action::{Action, ActionRequestQueue, MoveDirection},
    state::{AppState, Notice, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };

    // Every handled action supersedes the previous transient notice.
    ctx.ui_state.notice = None;

    match action {
        Action::SubmitSize => ctx.submit_size(),
        Action::AddPhrase => ctx.add_phrase(),
        Action::RemovePhrase(index) => ctx.remove_phrase(index),
        Action::StartBoard => ctx.start_board(),
        Action::ToggleCell(pos) => ctx.toggle_cell(pos),
        Action::ToggleSelected => ctx.toggle_selected(),
        Action::MoveSelection(direction) => ctx.move_selection(direction),
        Action::ClearSelection => ctx.app_state.selected_cell = None,
    }
}

impl ActionContext<'_> {
    fn submit_size(&mut self) {
        match self.app_state.session.submit_size(&self.ui_state.drafts.size) {
            Ok(size) => {
                log::debug!("grid size accepted: {size}");
                self.ui_state.drafts.size.clear();
            }
            Err(SessionError::Size(ParseSizeError::Blank)) => {
                self.ui_state.notice = Some(Notice::SizeMissing);
            }
            Err(SessionError::Size(_)) => {
                self.ui_state.notice = Some(Notice::SizeInvalid);
            }
            Err(err) => log::warn!("size submission rejected: {err}"),
        }
    }

    fn add_phrase(&mut self) {
        match self.app_state.session.add_phrase(&self.ui_state.drafts.phrase) {
            Ok(()) => self.ui_state.drafts.phrase.clear(),
            // Blank input is dropped without a notice; the field keeps
            // whatever whitespace was typed.
            Err(SessionError::Collect(CollectError::Blank(_))) => {}
            Err(SessionError::Collect(CollectError::Full { capacity })) => {
                self.ui_state.notice = Some(Notice::CollectorFull { capacity });
            }
            Err(err) => log::warn!("phrase rejected: {err}"),
        }
    }

    fn remove_phrase(&mut self, index: usize) {
        if let Err(err) = self.app_state.session.remove_phrase(index) {
            log::warn!("phrase removal rejected: {err}");
        }
    }

    fn start_board(&mut self) {
        match self.app_state.session.start_board() {
            Ok(()) => {
                log::debug!("board started");
                self.app_state.selected_cell = None;
            }
            Err(SessionError::Collect(CollectError::Incomplete { filled, required })) => {
                self.ui_state.notice = Some(Notice::BoardIncomplete { filled, required });
            }
            Err(err) => log::warn!("board start rejected: {err}"),
        }
    }

    fn toggle_cell(&mut self, pos: Position) {
        match self.app_state.session.toggle_cell(pos) {
            Ok(_) => self.app_state.selected_cell = Some(pos),
            Err(err) => log::warn!("cell toggle rejected: {err}"),
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(pos) = self.app_state.selected_cell
            && let Err(err) = self.app_state.session.toggle_cell(pos)
        {
            log::warn!("cell toggle rejected: {err}");
        }
    }

    fn move_selection(&mut self, direction: MoveDirection) {
        let Some(board) = self.app_state.session.board() else {
            return;
        };
        let size = board.size();
        let pos = self
            .app_state
            .selected_cell
            .get_or_insert(Position::new(0, 0));
        if let Some(new_pos) = direction.apply_to(*pos, size) {
            *pos = new_pos;
        }
    }
}
