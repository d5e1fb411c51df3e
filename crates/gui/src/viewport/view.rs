//! The three fixed orthographic views and their axis mapping.

use serde::{Deserialize, Serialize};
use shared::Axis;

/// One of the three orthographic projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Top,
    Front,
    Right,
}

/// Everything view-dependent, in one place.
#[derive(Debug, Clone, Copy)]
pub struct ViewAxes {
    /// World axis shown left→right on screen
    pub horizontal: Axis,
    /// World axis shown bottom→top on screen
    pub vertical: Axis,
    /// Rotation component edited in this view's plane
    pub rotation: Axis,
    /// Unit screen directions of the two gizmo handles, `[horizontal, vertical]`
    pub handle_dirs: [egui::Vec2; 2],
}

// Screen Y grows downward, so "up" is -Y.
const RIGHTWARD: egui::Vec2 = egui::Vec2::new(1.0, 0.0);
const UPWARD: egui::Vec2 = egui::Vec2::new(0.0, -1.0);

static VIEW_TABLE: [ViewAxes; 3] = [
    // Top: x/z, rotation about y
    ViewAxes {
        horizontal: Axis::X,
        vertical: Axis::Z,
        rotation: Axis::Y,
        handle_dirs: [RIGHTWARD, UPWARD],
    },
    // Front: x/y, rotation about z
    ViewAxes {
        horizontal: Axis::X,
        vertical: Axis::Y,
        rotation: Axis::Z,
        handle_dirs: [RIGHTWARD, UPWARD],
    },
    // Right: z/y, rotation about x
    ViewAxes {
        horizontal: Axis::Z,
        vertical: Axis::Y,
        rotation: Axis::X,
        handle_dirs: [RIGHTWARD, UPWARD],
    },
];

impl View {
    pub const ALL: [View; 3] = [View::Top, View::Front, View::Right];

    /// Position of this view in per-view arrays.
    pub fn index(self) -> usize {
        match self {
            View::Top => 0,
            View::Front => 1,
            View::Right => 2,
        }
    }

    pub fn axes(self) -> &'static ViewAxes {
        &VIEW_TABLE[self.index()]
    }

    /// The two mapped world axes, `[horizontal, vertical]`.
    pub fn plane_axes(self) -> [Axis; 2] {
        let a = self.axes();
        [a.horizontal, a.vertical]
    }

    /// Screen direction of the handle for `axis`, if this view shows it.
    pub fn handle_dir(self, axis: Axis) -> Option<egui::Vec2> {
        let a = self.axes();
        if axis == a.horizontal {
            Some(a.handle_dirs[0])
        } else if axis == a.vertical {
            Some(a.handle_dirs[1])
        } else {
            None
        }
    }

    /// Short label such as `XZ`, used in panel titles.
    pub fn plane_label(self) -> String {
        let a = self.axes();
        format!("{}{}", a.horizontal.name(), a.vertical.name()).to_uppercase()
    }

    pub fn name(self) -> &'static str {
        match self {
            View::Top => "top",
            View::Front => "front",
            View::Right => "right",
        }
    }
}
