//! Transform operations on single blocks

use shared::Axis;

use super::SceneState;
use crate::viewport::gizmo::{DragStep, GizmoMode};

impl SceneState {
    /// Apply one drag step of `mode`'s tool to a block
    pub fn apply_gizmo_step(&mut self, index: usize, mode: GizmoMode, step: &DragStep) -> bool {
        self.mutate_block(index, |block| mode.tool().apply_delta(block, step))
    }

    pub fn translate_block(&mut self, index: usize, axis: Axis, delta: f64) -> bool {
        self.mutate_block(index, |block| block.set_position(axis, block.position(axis) + delta))
    }

    /// Grow or shrink along one axis, never below the minimum size
    pub fn resize_block(&mut self, index: usize, axis: Axis, delta: f64) -> bool {
        self.mutate_block(index, |block| block.set_size(axis, block.size(axis) + delta))
    }

    pub fn rotate_block(&mut self, index: usize, axis: Axis, degrees: f64) -> bool {
        self.mutate_block(index, |block| block.set_rotation(axis, block.rotation(axis) + degrees))
    }
}
