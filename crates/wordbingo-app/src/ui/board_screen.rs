use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::grid;
use crate::{action::ActionRequestQueue, ui::grid::GridViewModel};

#[derive(Debug, Clone)]
pub(crate) struct BoardScreenViewModel {
    pub(crate) grid_vm: GridViewModel,
}

impl BoardScreenViewModel {
    #[must_use]
    pub(crate) fn new(grid_vm: GridViewModel) -> Self {
        Self { grid_vm }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &BoardScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let spacing = ui.spacing().item_spacing;
    let grid_side = (ui.available_size() - spacing * 2.0).min_elem();

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(grid_side))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(grid_side))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            grid::show(ui, &vm.grid_vm, action_queue);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
