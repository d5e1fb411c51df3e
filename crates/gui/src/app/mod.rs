//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::input::InputEvent;
use crate::state::EditorState;
use crate::ui::{properties, status_bar, toolbar};
use crate::viewport::view::View;
use crate::viewport::ViewPanel;
use menus::MenuAction;

/// Main application
pub struct MapEditorApp {
    state: EditorState,
    panels: [ViewPanel; 3],
    /// Window focus in the previous frame
    was_focused: bool,
    /// Scene version at the last successful save or load
    last_saved_version: u64,
}

impl MapEditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: EditorState) -> Self {
        styles::configure_styles(&cc.egui_ctx);
        crate::i18n::set_lang(state.settings.ui.language);
        tracing::info!(
            "Editing {} ({} blocks)",
            state.map_path.display(),
            state.scene.len()
        );

        let last_saved_version = state.scene.version();
        Self {
            state,
            panels: View::ALL.map(ViewPanel::new),
            was_focused: true,
            last_saved_version,
        }
    }

    fn is_dirty(&self) -> bool {
        self.state.scene.version() != self.last_saved_version
    }

    fn apply(&mut self, ctx: &egui::Context, action: MenuAction) {
        match action {
            MenuAction::Save => {
                if menus::save_with_notice(&self.state) {
                    self.last_saved_version = self.state.scene.version();
                }
            }
            MenuAction::Reload => {
                if menus::reload_with_notice(&mut self.state) {
                    self.last_saved_version = self.state.scene.version();
                }
            }
            MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    /// Losing window focus ends drags and pans; their release never arrives.
    fn track_focus(&mut self, ctx: &egui::Context) {
        let focused = ctx.input(|i| i.focused);
        if self.was_focused && !focused {
            self.state.handle_event(InputEvent::FocusLost);
            for panel in &mut self.panels {
                panel.reset();
            }
        }
        self.was_focused = focused;
    }
}

impl eframe::App for MapEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.track_focus(ctx);

        let mut actions = keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                if let Some(action) = menus::file_menu(ui) {
                    actions.push(action);
                }
                menus::view_menu(ui, &mut self.state);
            });
        });

        // ── Status bar ───────────────────────────────────────
        let dirty = self.is_dirty();
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state, dirty);
            });

        // ── Right panel: tool + selected block ───────────────
        egui::SidePanel::right("tool_panel")
            .default_width(220.0)
            .resizable(false)
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)))
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
                ui.separator();
                properties::show(ui, &self.state);
            });

        // ── Central panel: three view canvases ───────────────
        let mut redraw = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for panel in &mut self.panels {
                        ui.vertical(|ui| {
                            redraw |= panel.show(ui, &mut self.state);
                        });
                    }
                });
            });
        });
        if redraw {
            ctx.request_repaint();
        }

        for action in actions {
            self.apply(ctx, action);
        }
    }
}
