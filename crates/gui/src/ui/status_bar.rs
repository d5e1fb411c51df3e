use egui::Ui;

use crate::i18n::t;
use crate::state::EditorState;
use super::toolbar::mode_label;

pub fn show(ui: &mut Ui, state: &EditorState, dirty: bool) {
    ui.horizontal(|ui| {
        ui.weak(format!("{}: {}", t("status.blocks"), state.scene.len()));

        ui.separator();
        ui.label(mode_label(state.mode));
        ui.separator();

        if state.interaction.is_dragging() {
            ui.colored_label(egui::Color32::from_rgb(200, 120, 0), t("status.dragging"));
        } else if let Some((index, view)) = state.selection.current() {
            let name = state.scene.block(index).map(|b| b.name()).unwrap_or_default();
            ui.label(format!("{}: #{index} {name} ({})", t("status.selected"), view.name()));
            ui.separator();
            ui.weak(format!("{}: {:.1}", t("status.zoom"), state.camera(view).scale));
        } else {
            ui.weak(t("status.ready"));
        }

        // Right-aligned map path
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let path = state.map_path.display().to_string();
            if dirty {
                ui.weak(format!("{path} ({})", t("status.unsaved")));
            } else {
                ui.weak(path);
            }
        });
    });
}
