pub mod interaction;
pub mod scene;
pub mod selection;
pub mod settings;

use std::path::PathBuf;

use shared::MapFile;

pub use interaction::{DragAction, Interaction};
pub use scene::SceneState;
pub use selection::SelectionState;
pub use settings::EditorSettings;

use crate::viewport::camera::{PanGesture, ViewCamera};
use crate::viewport::gizmo::{GizmoFrame, GizmoMode, Handle};
use crate::viewport::projection::{block_screen_center, project};
use crate::viewport::view::View;

/// Whole editor session: blocks, per-view cameras, selection, tool and
/// the transient pointer state.
pub struct EditorState {
    pub scene: SceneState,
    /// Indexed by [`View::index`]
    pub cameras: [ViewCamera; 3],
    pub selection: SelectionState,
    pub mode: GizmoMode,
    pub interaction: Interaction,
    /// Pan in progress and the view it started in
    pub pan: Option<(View, PanGesture)>,
    pub settings: EditorSettings,
    /// Where `save` writes
    pub map_path: PathBuf,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl EditorState {
    pub fn new(settings: EditorSettings) -> Self {
        let scale = settings.camera.default_scale;
        Self {
            scene: SceneState::default(),
            cameras: [ViewCamera::new(scale), ViewCamera::new(scale), ViewCamera::new(scale)],
            selection: SelectionState::default(),
            mode: GizmoMode::default(),
            interaction: Interaction::Idle,
            pan: None,
            settings,
            map_path: PathBuf::from(scene::DEFAULT_MAP_FILE),
        }
    }

    /// Open a map file, creating it if it does not exist yet
    pub fn open(path: impl Into<PathBuf>, settings: EditorSettings) -> Result<Self, String> {
        let path = path.into();
        let mut state = Self::new(settings);
        state.scene = SceneState::load_from(&path)?;
        state.map_path = path;
        Ok(state)
    }

    pub fn camera(&self, view: View) -> &ViewCamera {
        &self.cameras[view.index()]
    }

    pub fn camera_mut(&mut self, view: View) -> &mut ViewCamera {
        &mut self.cameras[view.index()]
    }

    /// Canvas size shared by all views
    pub fn canvas(&self) -> egui::Vec2 {
        self.settings.canvas.size()
    }

    /// Switch tool. A drag already in progress keeps its own mode until release.
    pub fn set_mode(&mut self, mode: GizmoMode) -> bool {
        if self.mode == mode {
            return false;
        }
        tracing::info!("Tool mode: {}", mode.name());
        self.mode = mode;
        if let Interaction::Hovering(_) = self.interaction {
            self.interaction = Interaction::Idle;
        }
        true
    }

    /// Gizmo placement in `view`, if a block is selected there
    pub fn gizmo_frame(&self, view: View) -> Option<GizmoFrame<'_>> {
        let index = self.selection.in_view(view)?;
        let block = self.scene.block(index)?;
        Some(GizmoFrame {
            view,
            origin: block_screen_center(block, view, self.camera(view), self.canvas()),
            angle: project(block, view).angle,
            settings: &self.settings.gizmo,
        })
    }

    /// Handle drawn highlighted: hovered, or being dragged
    pub fn highlighted_handle(&self) -> Option<Handle> {
        match self.interaction {
            Interaction::Idle => None,
            Interaction::Hovering(handle) => Some(handle),
            Interaction::Dragging(action) => Some(action.handle),
        }
    }

    /// Replace the blocks, dropping selection and pointer state
    pub fn load_map(&mut self, map: MapFile) {
        self.scene.set_map(map);
        self.selection.clear();
        self.interaction = Interaction::Idle;
        self.pan = None;
    }

    /// Write blocks to `map_path`. In-memory state is untouched on failure.
    pub fn save(&self) -> Result<(), String> {
        self.scene.save_to(&self.map_path)
    }

    /// Re-read `map_path`
    pub fn reload(&mut self) -> Result<(), String> {
        let map = scene::load_map_file(&self.map_path)?;
        self.load_map(map);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Block;

    #[test]
    fn test_new_uses_default_scale() {
        let s = EditorState::default();
        for view in View::ALL {
            assert_eq!(s.camera(view).scale, 20.0);
        }
        assert_eq!(s.mode, GizmoMode::Move);
        assert_eq!(s.map_path, PathBuf::from("map.wpm"));
    }

    #[test]
    fn test_gizmo_frame_only_in_selected_view() {
        let mut s = EditorState::default();
        s.scene.add_block(Block::named("a").with_position([1.0, 0.0, 0.0]));
        assert!(s.gizmo_frame(View::Top).is_none());

        s.selection.select(0, View::Top);
        let f = s.gizmo_frame(View::Top).unwrap();
        assert_eq!(f.origin, egui::pos2(220.0, 150.0));
        assert!(s.gizmo_frame(View::Front).is_none());
    }

    #[test]
    fn test_set_mode_clears_hover() {
        let mut s = EditorState::default();
        s.interaction = Interaction::Hovering(Handle::Ring);
        assert!(s.set_mode(GizmoMode::Scale));
        assert_eq!(s.interaction, Interaction::Idle);
        assert!(!s.set_mode(GizmoMode::Scale));
    }

    #[test]
    fn test_load_map_resets_selection() {
        let mut s = EditorState::default();
        s.scene.add_block(Block::default());
        s.selection.select(0, View::Right);
        s.load_map(MapFile::new(vec![Block::named("x"), Block::named("y")]));
        assert!(s.selection.current().is_none());
        assert_eq!(s.scene.len(), 2);
    }

    #[test]
    fn test_failed_save_keeps_state() {
        let mut s = EditorState::default();
        s.scene.add_block(Block::named("keep"));
        s.map_path = std::env::temp_dir()
            .join("wallplast-missing-dir-for-save")
            .join("map.wpm");
        assert!(s.save().is_err());
        assert_eq!(s.scene.blocks()[0].name(), "keep");
    }
}
