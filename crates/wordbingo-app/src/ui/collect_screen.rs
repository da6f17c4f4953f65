use eframe::egui::{Key, Label, ScrollArea, Sense, TextEdit, Ui};
use egui_extras::{Size, StripBuilder};

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone)]
pub(crate) struct CollectScreenViewModel {
    pub(crate) filled: usize,
    pub(crate) required: usize,
    pub(crate) can_start: bool,
    pub(crate) phrases: Vec<String>,
}

impl CollectScreenViewModel {
    #[must_use]
    pub(crate) fn new(filled: usize, required: usize, phrases: Vec<String>) -> Self {
        Self {
            filled,
            required,
            can_start: filled > 0,
            phrases,
        }
    }
}

const START_ROW_HEIGHT: f32 = 36.0;

pub(crate) fn show(
    ui: &mut Ui,
    vm: &CollectScreenViewModel,
    phrase_draft: &mut String,
    action_queue: &mut ActionRequestQueue,
) {
    ui.vertical_centered(|ui| {
        ui.heading("Fill in your phrases");
        ui.label(format!("Entered phrases: {} / {}", vm.filled, vm.required));
        ui.label("Click a phrase to remove it");
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let add_width = 48.0;
        let response = ui.add(
            TextEdit::singleline(phrase_draft)
                .hint_text("Enter phrase text")
                .desired_width(ui.available_width() - add_width),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        if ui.button("Add").clicked() || submitted {
            action_queue.request(Action::AddPhrase);
            if submitted {
                // Keep the field focused so phrases can be typed in a row.
                response.request_focus();
            }
        }
    });
    ui.add_space(8.0);

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(START_ROW_HEIGHT))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    for (index, phrase) in vm.phrases.iter().enumerate() {
                        let entry = Label::new(format!("{}. {phrase}", index + 1))
                            .sense(Sense::click())
                            .truncate();
                        if ui.add(entry).clicked() {
                            action_queue.request(Action::RemovePhrase(index));
                        }
                        ui.separator();
                    }
                });
            });
            strip.cell(|ui| {
                if vm.can_start {
                    ui.vertical_centered(|ui| {
                        if ui.button("Start bingo").clicked() {
                            action_queue.request(Action::StartBoard);
                        }
                    });
                }
            });
        });
}
