use std::sync::Arc;

use eframe::egui::{FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use wordbingo_core::Position;

use crate::action::{Action, ActionRequestQueue};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct CellVisualState: u8 {
        const CROSSED = 0b0000_0001;
        const SELECTED = 0b0000_0010;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) text: String,
    pub(crate) visual_state: CellVisualState,
}

#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    side: usize,
    cells: Vec<GridCell>,
}

impl GridViewModel {
    #[must_use]
    pub(crate) fn new(side: usize, cells: Vec<GridCell>) -> Self {
        assert_eq!(cells.len(), side * side, "grid cells must fill the board");
        Self { side, cells }
    }

    #[must_use]
    pub(crate) fn side(&self) -> usize {
        self.side
    }

    #[must_use]
    pub(crate) fn cell(&self, row: usize, col: usize) -> &GridCell {
        &self.cells[row * self.side + col]
    }
}

const CELL_BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const THIN_BORDER_WIDTH_RATIO: f32 = 1.0;
const SELECTED_BORDER_WIDTH_RATIO: f32 = 3.0;
const CROSS_WIDTH_RATIO: f32 = 2.0;
const TEXT_SIZE_RATIO: f32 = 0.12;
const TEXT_WRAP_RATIO: f32 = 0.85;

#[expect(clippy::cast_precision_loss)]
pub(crate) fn show(ui: &mut Ui, vm: &GridViewModel, action_queue: &mut ActionRequestQueue) {
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;

    let side = vm.side() as f32;
    let grid_side = ui.available_size().min_elem();
    let cell_size = grid_side / side;
    let base_border = f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0);
    let font = FontId::proportional(f32::max(cell_size * TEXT_SIZE_RATIO, 9.0));

    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(grid_side), Sense::hover());
    let painter = ui.painter();

    for row in 0..vm.side() {
        for col in 0..vm.side() {
            let cell = vm.cell(row, col);
            let crossed = cell.visual_state.contains(CellVisualState::CROSSED);
            let selected = cell.visual_state.contains(CellVisualState::SELECTED);

            let cell_min =
                rect.min + Vec2::new(cell_size * col as f32, cell_size * row as f32);
            let cell_rect = Rect::from_min_size(cell_min, Vec2::splat(cell_size));

            let fill = if crossed {
                visuals.extreme_bg_color
            } else {
                visuals.faint_bg_color
            };
            painter.rect_filled(cell_rect, 0.0, fill);

            let text_color = if crossed {
                visuals.weak_text_color()
            } else {
                visuals.strong_text_color()
            };
            let galley = painter.layout(
                cell.text.clone(),
                font.clone(),
                text_color,
                cell_size * TEXT_WRAP_RATIO,
            );
            let text_pos = cell_rect.center() - galley.size() / 2.0;
            painter.galley(text_pos, galley, text_color);

            if crossed {
                let stroke = Stroke::new(
                    f32::max(base_border * CROSS_WIDTH_RATIO, 2.0),
                    visuals.error_fg_color,
                );
                let inner = cell_rect.shrink(base_border);
                painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
                painter.line_segment([inner.left_bottom(), inner.right_top()], stroke);
            }

            let border = if selected {
                Stroke::new(
                    base_border * SELECTED_BORDER_WIDTH_RATIO,
                    visuals.selection.stroke.color,
                )
            } else {
                Stroke::new(
                    base_border * THIN_BORDER_WIDTH_RATIO,
                    visuals.widgets.noninteractive.bg_stroke.color,
                )
            };
            painter.rect_stroke(cell_rect, 0.0, border, StrokeKind::Inside);

            let response = ui.interact(cell_rect, ui.id().with((row, col)), Sense::click());
            if response.clicked() {
                action_queue.request(Action::ToggleCell(Position::new(row, col)));
            }
        }
    }
}
