//! Pointer/keyboard state machine.
//!
//! `Idle` → `Hovering(handle)` while the pointer is over a gizmo handle,
//! `Dragging(action)` from a primary press on a handle until release.
//! Presses elsewhere go to click selection. Panning and zoom run beside it.

use egui::Pos2;
use shared::Axis;

use super::EditorState;
use crate::input::{ArrowKey, InputEvent, PointerButton};
use crate::viewport::gizmo::{DragStep, GizmoMode, Handle};
use crate::viewport::picking::blocks_under;
use crate::viewport::projection::block_screen_center;
use crate::viewport::view::View;

/// An in-progress gizmo drag. Exists from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAction {
    /// Tool the drag was started with
    pub mode: GizmoMode,
    pub block: usize,
    pub view: View,
    pub handle: Handle,
    /// Pointer position at the previous step
    pub last: Pos2,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Hovering(Handle),
    Dragging(DragAction),
}

impl Interaction {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging(_))
    }
}

impl EditorState {
    /// Feed one input event. Returns true when the views need a redraw.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerMove { view, pos } => self.on_pointer_move(view, pos),
            InputEvent::PointerDown {
                view,
                pos,
                button: PointerButton::Primary,
            } => self.on_primary_down(view, pos),
            InputEvent::PointerDown {
                view,
                pos,
                button: PointerButton::Secondary,
            } => {
                self.pan = Some((view, self.camera(view).begin_pan(pos)));
                false
            }
            InputEvent::PointerDrag {
                view,
                pos,
                button: PointerButton::Primary,
            } => self.on_primary_drag(view, pos),
            InputEvent::PointerDrag {
                view,
                pos,
                button: PointerButton::Secondary,
            } => self.on_pan_drag(view, pos),
            InputEvent::PointerUp {
                button: PointerButton::Primary,
                ..
            } => self.end_drag(),
            InputEvent::PointerUp {
                button: PointerButton::Secondary,
                ..
            } => {
                self.pan = None;
                false
            }
            InputEvent::Scroll { view, delta } => {
                let before = self.camera(view).scale;
                self.cameras[view.index()].zoom(delta, &self.settings.camera);
                self.camera(view).scale != before
            }
            InputEvent::Key(key) => self.on_arrow_key(key),
            InputEvent::FocusLost => {
                let busy = self.interaction.is_dragging() || self.pan.is_some();
                self.interaction = Interaction::Idle;
                self.pan = None;
                busy
            }
        }
    }

    /// Gizmo handle of the current tool under `pos` in `view`
    pub fn handle_under(&self, view: View, pos: Pos2) -> Option<Handle> {
        let frame = self.gizmo_frame(view)?;
        self.mode.tool().hit_test(&frame, pos)
    }

    fn on_pointer_move(&mut self, view: View, pos: Pos2) -> bool {
        if self.interaction.is_dragging() {
            return false;
        }
        let next = match self.handle_under(view, pos) {
            Some(handle) => Interaction::Hovering(handle),
            None => Interaction::Idle,
        };
        let changed = next != self.interaction;
        self.interaction = next;
        changed
    }

    fn on_primary_down(&mut self, view: View, pos: Pos2) -> bool {
        if self.interaction.is_dragging() {
            return false;
        }
        if let (Some(handle), Some(block)) = (self.handle_under(view, pos), self.selection.in_view(view)) {
            tracing::debug!("Drag start: {} {:?} on block {block} in {}", self.mode.name(), handle, view.name());
            self.interaction = Interaction::Dragging(DragAction {
                mode: self.mode,
                block,
                view,
                handle,
                last: pos,
            });
            return true;
        }
        self.click_select(view, pos);
        true
    }

    fn click_select(&mut self, view: View, pos: Pos2) {
        let candidates = blocks_under(
            self.scene.blocks(),
            view,
            self.camera(view),
            self.canvas(),
            pos,
        );
        self.selection.click(&candidates, view);
        tracing::debug!("Click in {}: candidates {:?}, selected {:?}", view.name(), candidates, self.selection.current());
    }

    fn on_primary_drag(&mut self, view: View, pos: Pos2) -> bool {
        let Interaction::Dragging(action) = self.interaction else {
            return false;
        };
        if action.view != view {
            return false;
        }
        let Some(block) = self.scene.block(action.block) else {
            return false;
        };
        let step = DragStep {
            view,
            handle: action.handle,
            origin: block_screen_center(block, view, self.camera(view), self.canvas()),
            from: action.last,
            to: pos,
            scale: self.camera(view).scale,
        };
        self.scene.apply_gizmo_step(action.block, action.mode, &step);
        self.interaction = Interaction::Dragging(DragAction { last: pos, ..action });
        true
    }

    fn end_drag(&mut self) -> bool {
        if !self.interaction.is_dragging() {
            return false;
        }
        tracing::debug!("Drag end");
        self.interaction = Interaction::Idle;
        true
    }

    fn on_pan_drag(&mut self, view: View, pos: Pos2) -> bool {
        let Some((pan_view, gesture)) = self.pan else {
            return false;
        };
        if pan_view != view {
            return false;
        }
        self.camera_mut(view).pan_to(&gesture, pos);
        true
    }

    fn on_arrow_key(&mut self, key: ArrowKey) -> bool {
        if self.interaction.is_dragging() {
            return false;
        }
        let Some((index, view)) = self.selection.current() else {
            return false;
        };
        let [horizontal, vertical]: [Axis; 2] = view.plane_axes();
        let (axis, sign) = match key {
            ArrowKey::Left => (horizontal, -1.0),
            ArrowKey::Right => (horizontal, 1.0),
            ArrowKey::Up => (vertical, 1.0),
            ArrowKey::Down => (vertical, -1.0),
        };
        let delta = sign * self.settings.keyboard.nudge_step;
        match self.mode {
            GizmoMode::Move => self.scene.translate_block(index, axis, delta),
            GizmoMode::Scale => self.scene.resize_block(index, axis, delta),
            GizmoMode::Rotate => false,
        }
    }
}
