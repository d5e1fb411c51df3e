//! Canvas panels: one egui canvas per orthographic view

mod panel;
mod surface;

pub use panel::ViewPanel;
pub use wallplast_editor_lib::viewport::{camera, render, view};
