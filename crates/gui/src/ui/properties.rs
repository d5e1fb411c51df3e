//! Read-only inspector for the selected block

use egui::Ui;
use shared::Axis;

use crate::i18n::t;
use crate::state::EditorState;

pub fn show(ui: &mut Ui, state: &EditorState) {
    let Some((index, _)) = state.selection.current() else {
        ui.weak(t("hint.cycle"));
        return;
    };
    let Some(block) = state.scene.block(index) else {
        return;
    };

    egui::Grid::new("block_props")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label(t("prop.name"));
            ui.label(block.name());
            ui.end_row();

            ui.label(t("prop.material"));
            ui.label(block.material());
            ui.end_row();

            let rows: [(&str, fn(&shared::Block, Axis) -> f64); 3] = [
                ("prop.position", shared::Block::position),
                ("prop.size", shared::Block::size),
                ("prop.rotation", shared::Block::rotation),
            ];
            for (key, get) in rows {
                ui.label(t(key));
                let values = Axis::ALL.map(|a| format!("{:.2}", get(block, a)));
                ui.monospace(values.join("  "));
                ui.end_row();
            }
        });
}
