//! Wordbingo desktop application UI.
//!
//! # Design Notes
//! - Three sequential screens: size selection, phrase collection, board play.
//! - All state changes flow through the action queue; the UI only renders
//!   view models and requests actions.
//! - The board supports mouse clicks and keyboard play (arrows + Space).

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, TopBottomPanel},
};

use crate::{
    action::{self, ActionRequestQueue},
    state::{AppState, UiState},
    ui,
    view_model_builder::{self, ScreenViewModel},
};

#[derive(Debug)]
pub struct WordbingoApp {
    app_state: AppState,
    ui_state: UiState,
}

impl WordbingoApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            app_state: AppState::new(),
            ui_state: UiState::new(),
        }
    }
}

impl App for WordbingoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        // Keyboard play is only live on the board; on the earlier screens
        // the text fields own the keyboard.
        if self.app_state.session.is_play() {
            ctx.input(|i| {
                ui::input::handle_board_input(i, &mut action_queue);
            });
            action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        }

        let screen_vm = view_model_builder::build_screen_view_model(&self.app_state);
        let notice_vm = view_model_builder::build_notice_view_model(&self.ui_state);

        if let Some(notice_vm) = &notice_vm {
            TopBottomPanel::bottom("notice").show(ctx, |ui| {
                ui::notice::show(ui, notice_vm);
            });
        }

        CentralPanel::default().show(ctx, |ui| match &screen_vm {
            ScreenViewModel::SizeSelect => {
                ui::size_screen::show(ui, &mut self.ui_state.drafts.size, &mut action_queue);
            }
            ScreenViewModel::Collect(vm) => {
                ui::collect_screen::show(ui, vm, &mut self.ui_state.drafts.phrase, &mut action_queue);
            }
            ScreenViewModel::Play(vm) => {
                ui::board_screen::show(ui, vm, &mut action_queue);
            }
        });

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
    }
}
