// Library crate: the interaction core (views, cameras, picking, gizmo tools,
// editor state) plus the headless harness used by integration tests.
// The egui shell (app, ui, canvas panels) stays in the binary crate.

pub mod command;
pub mod fixtures;
pub mod harness;
pub mod input;
pub mod state;

/// View geometry and rendering that does not depend on a live GUI.
pub mod viewport {
    pub mod camera;
    pub mod draw;
    pub mod gizmo;
    pub mod picking;
    pub mod projection;
    pub mod render;
    pub mod view;
}
