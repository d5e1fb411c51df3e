//! Headless test harness for driving the editor without a window.
//!
//! Wraps an [`EditorState`] and speaks in view-local screen coordinates, the
//! same way the canvas panels do.

use egui::{Pos2, Vec2};
use shared::{Block, MapFile};

use crate::input::{ArrowKey, InputEvent, PointerButton};
use crate::state::EditorState;
use crate::viewport::camera::ViewCamera;
use crate::viewport::draw::DrawList;
use crate::viewport::gizmo::{GizmoMode, Handle};
use crate::viewport::projection::block_screen_center;
use crate::viewport::render::render_view;
use crate::viewport::view::View;

/// Headless harness owning one editor session
pub struct TestHarness {
    pub state: EditorState,
}

impl TestHarness {
    /// Create a new empty harness with default settings.
    pub fn new() -> Self {
        Self {
            state: EditorState::default(),
        }
    }

    /// Harness preloaded with `map`.
    pub fn with_map(map: MapFile) -> Self {
        let mut h = Self::new();
        h.state.load_map(map);
        h
    }

    // ── Blocks ────────────────────────────────────────────────

    pub fn add_block(&mut self, block: Block) -> usize {
        self.state.scene.add_block(block)
    }

    pub fn block(&self, index: usize) -> &Block {
        &self.state.scene.blocks()[index]
    }

    pub fn block_count(&self) -> usize {
        self.state.scene.len()
    }

    /// Load a map from JSON string
    pub fn load_map_json(&mut self, json: &str) -> Result<(), String> {
        let map: MapFile =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        self.state.load_map(map);
        Ok(())
    }

    /// Export the current map as JSON
    pub fn export_map_json(&self) -> String {
        serde_json::to_string_pretty(&self.state.scene.map).unwrap_or_default()
    }

    // ── Tool and selection ────────────────────────────────────

    pub fn set_mode(&mut self, mode: GizmoMode) {
        self.state.set_mode(mode);
    }

    pub fn selected(&self) -> Option<(usize, View)> {
        self.state.selection.current()
    }

    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    pub fn camera(&self, view: View) -> &ViewCamera {
        self.state.camera(view)
    }

    // ── Screen geometry ───────────────────────────────────────

    /// Screen center of a block in a view.
    pub fn screen_pos(&self, index: usize, view: View) -> Pos2 {
        block_screen_center(self.block(index), view, self.camera(view), self.state.canvas())
    }

    /// A point on `handle` of the gizmo in `view`, if one is shown there.
    pub fn handle_pos(&self, view: View, handle: Handle) -> Option<Pos2> {
        let frame = self.state.gizmo_frame(view)?;
        let s = &self.state.settings.gizmo;
        match handle {
            Handle::Axis(axis) => {
                let dir = view.handle_dir(axis)?;
                Some(frame.origin + dir * (s.handle_length * 0.5))
            }
            Handle::Ring => Some(frame.origin + Vec2::new(s.ring_radius, 0.0)),
        }
    }

    // ── Input ─────────────────────────────────────────────────

    pub fn send(&mut self, event: InputEvent) -> bool {
        self.state.handle_event(event)
    }

    pub fn move_pointer(&mut self, view: View, pos: Pos2) -> bool {
        self.send(InputEvent::PointerMove { view, pos })
    }

    /// Primary press and release at one point.
    pub fn click(&mut self, view: View, pos: Pos2) -> bool {
        let button = PointerButton::Primary;
        let redraw = self.send(InputEvent::PointerDown { view, pos, button });
        self.send(InputEvent::PointerUp { view, pos, button });
        redraw
    }

    pub fn click_block(&mut self, index: usize, view: View) -> bool {
        let pos = self.screen_pos(index, view);
        self.click(view, pos)
    }

    /// Primary press at `from`, `steps` drag events ending at `to`, release.
    pub fn drag(&mut self, view: View, from: Pos2, to: Pos2, steps: u32) {
        self.button_drag(view, from, to, steps, PointerButton::Primary);
    }

    /// Drag the handle of the current gizmo by `delta` pixels.
    /// Returns false if the handle is not shown in `view`.
    pub fn drag_handle(&mut self, view: View, handle: Handle, delta: Vec2, steps: u32) -> bool {
        let Some(from) = self.handle_pos(view, handle) else {
            return false;
        };
        self.drag(view, from, from + delta, steps);
        true
    }

    /// Secondary-button pan from `from` to `to`.
    pub fn pan(&mut self, view: View, from: Pos2, to: Pos2) {
        self.button_drag(view, from, to, 1, PointerButton::Secondary);
    }

    /// Wheel ticks: positive zooms in
    pub fn scroll(&mut self, view: View, ticks: i32) {
        let delta = if ticks >= 0 { 120.0 } else { -120.0 };
        for _ in 0..ticks.unsigned_abs() {
            self.send(InputEvent::Scroll { view, delta });
        }
    }

    pub fn key(&mut self, key: ArrowKey) -> bool {
        self.send(InputEvent::Key(key))
    }

    // ── Rendering ─────────────────────────────────────────────

    pub fn render(&self, view: View) -> DrawList {
        let mut list = DrawList::new();
        render_view(&self.state, view, &mut list);
        list
    }

    fn button_drag(&mut self, view: View, from: Pos2, to: Pos2, steps: u32, button: PointerButton) {
        let steps = steps.max(1);
        self.send(InputEvent::PointerDown { view, pos: from, button });
        for k in 1..=steps {
            let pos = from + (to - from) * (k as f32 / steps as f32);
            self.send(InputEvent::PointerDrag { view, pos, button });
        }
        self.send(InputEvent::PointerUp { view, pos: to, button });
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
