//! Keyboard shortcut handling

use eframe::egui;

use super::menus::MenuAction;
use crate::input::{ArrowKey, InputEvent};
use crate::state::EditorState;

/// Arrow keys nudge the selected block; Ctrl+S saves.
pub fn handle_keyboard(ctx: &egui::Context, state: &mut EditorState) -> Vec<MenuAction> {
    let mut actions = Vec::new();

    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return actions;
    }

    let (keys, save) = ctx.input(|i| {
        let keys: Vec<ArrowKey> = [
            (egui::Key::ArrowLeft, ArrowKey::Left),
            (egui::Key::ArrowRight, ArrowKey::Right),
            (egui::Key::ArrowUp, ArrowKey::Up),
            (egui::Key::ArrowDown, ArrowKey::Down),
        ]
        .into_iter()
        .filter(|(key, _)| i.key_pressed(*key))
        .map(|(_, arrow)| arrow)
        .collect();
        (keys, i.modifiers.command && i.key_pressed(egui::Key::S))
    });

    for key in keys {
        state.handle_event(InputEvent::Key(key));
    }
    if save {
        actions.push(MenuAction::Save);
    }
    actions
}
