//! Application menu bar and notices

use eframe::egui;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::EditorState;
use crate::viewport::camera::ViewCamera;
use crate::viewport::view::View;

/// Menu commands the app runs after the frame's UI is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Save,
    Reload,
    Quit,
}

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui) -> Option<MenuAction> {
    let mut action = None;
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.save")).clicked() {
            action = Some(MenuAction::Save);
            ui.close_menu();
        }
        if ui.button(t("menu.reload")).clicked() {
            action = Some(MenuAction::Reload);
            ui.close_menu();
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            action = Some(MenuAction::Quit);
            ui.close_menu();
        }
    });
    action
}

/// Show the view menu: grid, cameras, language
pub fn view_menu(ui: &mut egui::Ui, state: &mut EditorState) {
    ui.menu_button(t("menu.view"), |ui| {
        if ui.checkbox(&mut state.settings.grid.visible, t("menu.grid")).changed() {
            persist_settings(state);
        }
        if ui.button(t("menu.reset_cameras")).clicked() {
            let scale = state.settings.camera.default_scale;
            for view in View::ALL {
                *state.camera_mut(view) = ViewCamera::new(scale);
            }
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            for (l, label) in [(Lang::Ru, "Русский"), (Lang::En, "English")] {
                if ui.radio(lang() == l, label).clicked() {
                    set_lang(l);
                    state.settings.ui.language = l;
                    persist_settings(state);
                    ui.close_menu();
                }
            }
        });
    });
}

fn persist_settings(state: &EditorState) {
    if let Err(e) = state.settings.save() {
        tracing::warn!("Failed to save settings: {e}");
    }
}

fn notice(level: rfd::MessageLevel, text: String) {
    rfd::MessageDialog::new()
        .set_level(level)
        .set_title(t("msg.title"))
        .set_description(text)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Save the map and tell the user how it went
pub fn save_with_notice(state: &EditorState) -> bool {
    match state.save() {
        Ok(()) => {
            notice(
                rfd::MessageLevel::Info,
                format!("{}: {}", t("msg.saved"), state.map_path.display()),
            );
            true
        }
        Err(e) => {
            tracing::error!("Save failed: {e}");
            notice(rfd::MessageLevel::Error, format!("{}\n{e}", t("msg.save_failed")));
            false
        }
    }
}

/// Re-read the map from disk, reporting failures
pub fn reload_with_notice(state: &mut EditorState) -> bool {
    match state.reload() {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Reload failed: {e}");
            notice(rfd::MessageLevel::Error, format!("{}\n{e}", t("msg.reload_failed")));
            false
        }
    }
}
