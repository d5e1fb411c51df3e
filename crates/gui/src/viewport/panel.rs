//! One view canvas: turns egui pointer events into editor input events
//! and paints the view.

use egui::{Event, Pos2, Rect, Sense, Ui};

use crate::i18n::t;
use crate::input::{InputEvent, PointerButton};
use crate::state::EditorState;
use super::render::render_view;
use super::surface::EguiSurface;
use super::view::View;

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        _ => None,
    }
}

pub struct ViewPanel {
    view: View,
    /// Button pressed inside this canvas and not yet released
    pressed: Option<PointerButton>,
}

impl ViewPanel {
    pub fn new(view: View) -> Self {
        Self { view, pressed: None }
    }

    /// Forget a press whose release will never arrive (window lost focus)
    pub fn reset(&mut self) {
        self.pressed = None;
    }

    fn title(&self) -> String {
        let name = match self.view {
            View::Top => t("view.top"),
            View::Front => t("view.front"),
            View::Right => t("view.right"),
        };
        format!("{name} ({})", self.view.plane_label())
    }

    /// Show the canvas. Returns true if editor state changed visibly.
    pub fn show(&mut self, ui: &mut Ui, state: &mut EditorState) -> bool {
        ui.strong(self.title());
        let (rect, response) = ui.allocate_exact_size(state.canvas(), Sense::click_and_drag());

        let mut redraw = false;
        for event in self.collect_events(ui, rect, response.hovered()) {
            redraw |= state.handle_event(event);
        }

        if ui.is_rect_visible(rect) {
            let mut surface = EguiSurface::new(ui.painter_at(rect), rect);
            render_view(state, self.view, &mut surface);
        }
        redraw
    }

    fn collect_events(&mut self, ui: &Ui, rect: Rect, hovered: bool) -> Vec<InputEvent> {
        let view = self.view;
        let local = |p: Pos2| (p - rect.min).to_pos2();
        let (raw, scroll) = ui.input(|i| (i.events.clone(), i.raw_scroll_delta.y));

        let mut out = Vec::new();
        for event in raw {
            match event {
                Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } if rect.contains(pos) && self.pressed.is_none() => {
                    if let Some(button) = map_button(button) {
                        self.pressed = Some(button);
                        out.push(InputEvent::PointerDown { view, pos: local(pos), button });
                    }
                }
                Event::PointerButton {
                    pos,
                    button,
                    pressed: false,
                    ..
                } => {
                    let button = map_button(button);
                    if button.is_some() && button == self.pressed {
                        self.pressed = None;
                        if let Some(button) = button {
                            out.push(InputEvent::PointerUp { view, pos: local(pos), button });
                        }
                    }
                }
                // Drags keep reporting outside the canvas until release
                Event::PointerMoved(pos) => match self.pressed {
                    Some(button) => out.push(InputEvent::PointerDrag { view, pos: local(pos), button }),
                    None if rect.contains(pos) => out.push(InputEvent::PointerMove { view, pos: local(pos) }),
                    None => {}
                },
                _ => {}
            }
        }

        if hovered && scroll != 0.0 {
            out.push(InputEvent::Scroll { view, delta: scroll });
        }
        out
    }
}
