//! Block picking in a 2D view and click-to-cycle selection.

use egui::{Pos2, Vec2};
use shared::Block;

use super::camera::ViewCamera;
use super::projection::block_screen_rect;
use super::view::View;

/// Indices of blocks whose screen box contains `point`, in store order.
/// Rotation is ignored.
pub fn blocks_under(
    blocks: &[Block],
    view: View,
    camera: &ViewCamera,
    canvas: Vec2,
    point: Pos2,
) -> Vec<usize> {
    blocks
        .iter()
        .enumerate()
        .filter(|(_, b)| block_screen_rect(b, view, camera, canvas).contains(point))
        .map(|(i, _)| i)
        .collect()
}

/// Pick from an overlap stack: the candidate after `current` (wrapping) when
/// `current` is in the stack, otherwise the first one.
pub fn cycle_pick(candidates: &[usize], current: Option<usize>) -> Option<usize> {
    let first = *candidates.first()?;
    let next = current
        .and_then(|cur| candidates.iter().position(|&c| c == cur))
        .map(|pos| candidates[(pos + 1) % candidates.len()]);
    Some(next.unwrap_or(first))
}
