//! Tool panel: gizmo mode and selection

use egui::Ui;

use crate::i18n::t;
use crate::state::EditorState;
use wallplast_editor_lib::viewport::gizmo::GizmoMode;

pub fn mode_label(mode: GizmoMode) -> &'static str {
    match mode {
        GizmoMode::Move => t("mode.move"),
        GizmoMode::Scale => t("mode.scale"),
        GizmoMode::Rotate => t("mode.rotate"),
    }
}

pub fn show(ui: &mut Ui, state: &mut EditorState) {
    ui.heading(t("tb.tool"));
    for mode in GizmoMode::ALL {
        if ui.radio(state.mode == mode, mode_label(mode)).clicked() {
            state.set_mode(mode);
        }
    }

    ui.add_space(8.0);
    ui.heading(t("tb.selection"));
    if ui
        .add_enabled(
            state.selection.current().is_some(),
            egui::Button::new(t("tb.deselect")),
        )
        .clicked()
    {
        state.selection.clear();
    }
}
