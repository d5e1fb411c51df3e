//! Mapping 3D block state into a single view's 2D plane.

use egui::{Pos2, Rect, Vec2};
use glam::DVec2;
use shared::Block;

use super::camera::ViewCamera;
use super::view::View;

/// A block as seen in one view, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub center: DVec2,
    /// Full extent along the view's horizontal/vertical axes
    pub size: DVec2,
    /// In-plane rotation, degrees
    pub angle: f64,
}

pub fn project(block: &Block, view: View) -> Projected {
    let axes = view.axes();
    Projected {
        center: DVec2::new(block.position(axes.horizontal), block.position(axes.vertical)),
        size: DVec2::new(block.size(axes.horizontal), block.size(axes.vertical)),
        angle: block.rotation(axes.rotation),
    }
}

/// Screen-space bounding box of a block, ignoring rotation.
pub fn block_screen_rect(block: &Block, view: View, camera: &ViewCamera, canvas: Vec2) -> Rect {
    let p = project(block, view);
    camera.world_rect_to_screen(p.center, p.size, canvas)
}

/// Screen-space center of a block.
pub fn block_screen_center(block: &Block, view: View, camera: &ViewCamera, canvas: Vec2) -> Pos2 {
    camera.world_to_screen(project(block, view).center, canvas)
}

/// Corners of `rect` rotated about its center by `angle_deg`.
///
/// Positive angles turn counterclockwise on screen, the same sense as the
/// rotate handle.
pub fn rotated_corners(rect: Rect, angle_deg: f64) -> [Pos2; 4] {
    let c = rect.center();
    let (sin, cos) = (angle_deg.to_radians().sin() as f32, angle_deg.to_radians().cos() as f32);
    let h = rect.size() * 0.5;
    [
        Vec2::new(-h.x, -h.y),
        Vec2::new(h.x, -h.y),
        Vec2::new(h.x, h.y),
        Vec2::new(-h.x, h.y),
    ]
    .map(|d| Pos2::new(c.x + d.x * cos + d.y * sin, c.y - d.x * sin + d.y * cos))
}
