use wordbingo_core::Position;
use wordbingo_game::{Board, PhraseCollector, Session};

use crate::{
    state::{AppState, UiState},
    ui::{
        board_screen::BoardScreenViewModel,
        collect_screen::CollectScreenViewModel,
        grid::{CellVisualState, GridCell, GridViewModel},
        notice::NoticeViewModel,
    },
};

#[derive(Debug, Clone)]
pub(crate) enum ScreenViewModel {
    SizeSelect,
    Collect(CollectScreenViewModel),
    Play(BoardScreenViewModel),
}

#[must_use]
pub(crate) fn build_screen_view_model(app_state: &AppState) -> ScreenViewModel {
    match &app_state.session {
        Session::SizeSelect => ScreenViewModel::SizeSelect,
        Session::Collect(collector) => ScreenViewModel::Collect(build_collect_vm(collector)),
        Session::Play(board) => ScreenViewModel::Play(BoardScreenViewModel::new(build_grid(
            board,
            app_state.selected_cell,
        ))),
    }
}

#[must_use]
pub(crate) fn build_notice_view_model(ui_state: &UiState) -> Option<NoticeViewModel> {
    ui_state
        .notice
        .map(|notice| NoticeViewModel::new(notice.to_string()))
}

fn build_collect_vm(collector: &PhraseCollector) -> CollectScreenViewModel {
    let phrases = collector
        .phrases()
        .iter()
        .map(|phrase| phrase.as_str().to_owned())
        .collect();
    CollectScreenViewModel::new(collector.filled(), collector.required(), phrases)
}

fn build_grid(board: &Board, selected_cell: Option<Position>) -> GridViewModel {
    let size = board.size();
    let cells = board
        .cells()
        .iter()
        .zip(size.positions())
        .map(|(cell, pos)| {
            let mut visual_state = CellVisualState::empty();
            if cell.is_crossed() {
                visual_state.insert(CellVisualState::CROSSED);
            }
            if selected_cell == Some(pos) {
                visual_state.insert(CellVisualState::SELECTED);
            }
            GridCell {
                text: cell.phrase().as_str().to_owned(),
                visual_state,
            }
        })
        .collect();
    GridViewModel::new(size.side(), cells)
}

#[cfg(test)]
mod tests {
    use wordbingo_core::Position;
    use wordbingo_game::Session;

    use super::{ScreenViewModel, build_notice_view_model, build_screen_view_model};
    use crate::{
        state::{AppState, Notice, UiState},
        ui::grid::CellVisualState,
    };

    fn play_state(side: usize) -> AppState {
        let mut session = Session::new();
        session.submit_size(&side.to_string()).unwrap();
        for i in 0..side * side {
            session.add_phrase(&format!("phrase {i}")).unwrap();
        }
        session.start_board().unwrap();
        AppState {
            session,
            selected_cell: None,
        }
    }

    #[test]
    fn fresh_state_builds_the_size_screen() {
        let app_state = AppState::new();
        assert!(matches!(
            build_screen_view_model(&app_state),
            ScreenViewModel::SizeSelect
        ));
    }

    #[test]
    fn collect_vm_reports_progress_and_entries() {
        let mut app_state = AppState::new();
        app_state.session.submit_size("2").unwrap();
        app_state.session.add_phrase("Red Flag").unwrap();

        let ScreenViewModel::Collect(vm) = build_screen_view_model(&app_state) else {
            panic!("expected the collect screen");
        };
        assert_eq!(vm.filled, 1);
        assert_eq!(vm.required, 4);
        assert!(vm.can_start);
        assert_eq!(vm.phrases, ["Red Flag"]);
    }

    #[test]
    fn empty_collection_hides_the_start_control() {
        let mut app_state = AppState::new();
        app_state.session.submit_size("2").unwrap();

        let ScreenViewModel::Collect(vm) = build_screen_view_model(&app_state) else {
            panic!("expected the collect screen");
        };
        assert!(!vm.can_start);
    }

    #[test]
    fn grid_vm_marks_crossed_and_selected_cells() {
        let mut app_state = play_state(2);
        let crossed = Position::new(1, 0);
        app_state.session.toggle_cell(crossed).unwrap();
        app_state.selected_cell = Some(Position::new(0, 1));

        let ScreenViewModel::Play(vm) = build_screen_view_model(&app_state) else {
            panic!("expected the board screen");
        };
        let grid = &vm.grid_vm;
        assert_eq!(grid.side(), 2);
        assert_eq!(grid.cell(1, 0).text, "phrase 2");
        assert!(grid.cell(1, 0).visual_state.contains(CellVisualState::CROSSED));
        assert!(grid.cell(0, 1).visual_state.contains(CellVisualState::SELECTED));
        assert_eq!(grid.cell(0, 0).visual_state, CellVisualState::empty());
    }

    #[test]
    fn notice_vm_renders_the_active_notice_only() {
        let mut ui_state = UiState::new();
        assert!(build_notice_view_model(&ui_state).is_none());

        ui_state.notice = Some(Notice::SizeInvalid);
        let vm = build_notice_view_model(&ui_state).unwrap();
        assert_eq!(vm.text(), "Grid size must be a positive integer");
    }
}
