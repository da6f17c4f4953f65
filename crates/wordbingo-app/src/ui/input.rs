use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue, MoveDirection};

struct Shortcut {
    key: Key,
    action: Action,
}

impl Shortcut {
    const fn new(key: Key, action: Action) -> Self {
        Self { key, action }
    }
}

const SHORTCUTS: [Shortcut; 7] = [
    Shortcut::new(Key::ArrowUp, Action::MoveSelection(MoveDirection::Up)),
    Shortcut::new(Key::ArrowDown, Action::MoveSelection(MoveDirection::Down)),
    Shortcut::new(Key::ArrowLeft, Action::MoveSelection(MoveDirection::Left)),
    Shortcut::new(Key::ArrowRight, Action::MoveSelection(MoveDirection::Right)),
    Shortcut::new(Key::Escape, Action::ClearSelection),
    Shortcut::new(Key::Space, Action::ToggleSelected),
    Shortcut::new(Key::Enter, Action::ToggleSelected),
];

/// Keyboard play on the board screen: arrows move the selection,
/// Space/Enter toggles it, Escape clears it.
pub(crate) fn handle_board_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.key) && i.modifiers.is_none() {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
