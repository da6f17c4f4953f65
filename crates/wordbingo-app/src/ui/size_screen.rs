use eframe::egui::{Key, TextEdit, Ui};

use crate::action::{Action, ActionRequestQueue};

pub(crate) fn show(ui: &mut Ui, size_draft: &mut String, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.heading("Wordbingo");
        ui.add_space(12.0);
        ui.label("Choose a grid size. A board of size N needs N x N phrases.");
        ui.add_space(8.0);

        let response = ui.add(
            TextEdit::singleline(size_draft)
                .hint_text("Enter size")
                .desired_width(120.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        ui.add_space(8.0);
        if ui.button("Create bingo cards").clicked() || submitted {
            action_queue.request(Action::SubmitSize);
        }
    });
}
