use eframe::egui::Ui;

#[derive(Debug, Clone)]
pub(crate) struct NoticeViewModel {
    text: String,
}

impl NoticeViewModel {
    #[must_use]
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    #[must_use]
    pub(crate) fn text(&self) -> &str {
        &self.text
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &NoticeViewModel) {
    let color = ui.visuals().warn_fg_color;
    ui.colored_label(color, vm.text());
}
