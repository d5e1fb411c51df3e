//! Manipulation gizmos for the selected block.
//!
//! Each tool mode is a [`GizmoTool`]: it draws its handles, hit-tests them and
//! turns one drag step into a block mutation.

use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use serde::{Deserialize, Serialize};
use shared::{Axis, Block};

use super::draw::DrawSurface;
use super::view::View;
use crate::state::settings::GizmoSettings;

/// Active transform tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GizmoMode {
    #[default]
    Move,
    Scale,
    Rotate,
}

/// Which part of a gizmo is under the pointer or being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Axis(Axis),
    Ring,
}

/// Where the gizmo sits on screen for the current frame.
pub struct GizmoFrame<'a> {
    pub view: View,
    /// Screen center of the selected block
    pub origin: Pos2,
    /// Current in-plane rotation, degrees
    pub angle: f64,
    pub settings: &'a GizmoSettings,
}

/// One pointer step of an active drag.
#[derive(Debug, Clone, Copy)]
pub struct DragStep {
    pub view: View,
    pub handle: Handle,
    pub origin: Pos2,
    pub from: Pos2,
    pub to: Pos2,
    /// Camera pixels per world unit
    pub scale: f64,
}

pub trait GizmoTool: Sync {
    fn render_handles(
        &self,
        frame: &GizmoFrame<'_>,
        highlighted: Option<Handle>,
        surface: &mut dyn DrawSurface,
    );

    fn hit_test(&self, frame: &GizmoFrame<'_>, pointer: Pos2) -> Option<Handle>;

    fn apply_delta(&self, block: &mut Block, step: &DragStep);
}

pub struct MoveTool;
pub struct ScaleTool;
pub struct RotateTool;

impl GizmoMode {
    pub const ALL: [GizmoMode; 3] = [GizmoMode::Move, GizmoMode::Scale, GizmoMode::Rotate];

    pub fn tool(self) -> &'static dyn GizmoTool {
        match self {
            GizmoMode::Move => &MoveTool,
            GizmoMode::Scale => &ScaleTool,
            GizmoMode::Rotate => &RotateTool,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GizmoMode::Move => "move",
            GizmoMode::Scale => "scale",
            GizmoMode::Rotate => "rotate",
        }
    }
}

const HIGHLIGHT: Color32 = Color32::from_rgb(255, 165, 0);
const DARK_RED: Color32 = Color32::from_rgb(139, 0, 0);
const PURPLE: Color32 = Color32::from_rgb(128, 0, 128);
const HANDLE_WIDTH: f32 = 5.0;

impl GizmoTool for MoveTool {
    fn render_handles(
        &self,
        frame: &GizmoFrame<'_>,
        highlighted: Option<Handle>,
        surface: &mut dyn DrawSurface,
    ) {
        draw_axis_handles(frame, highlighted, surface, |axis| match axis {
            Axis::X => DARK_RED,
            Axis::Y => PURPLE,
            Axis::Z => Color32::BLUE,
        });
    }

    fn hit_test(&self, frame: &GizmoFrame<'_>, pointer: Pos2) -> Option<Handle> {
        hit_axis_handles(frame, pointer)
    }

    fn apply_delta(&self, block: &mut Block, step: &DragStep) {
        if let Some((axis, d)) = axis_world_delta(step) {
            block.set_position(axis, block.position(axis) + d);
        }
    }
}

impl GizmoTool for ScaleTool {
    fn render_handles(
        &self,
        frame: &GizmoFrame<'_>,
        highlighted: Option<Handle>,
        surface: &mut dyn DrawSurface,
    ) {
        draw_axis_handles(frame, highlighted, surface, |_| PURPLE);
    }

    fn hit_test(&self, frame: &GizmoFrame<'_>, pointer: Pos2) -> Option<Handle> {
        hit_axis_handles(frame, pointer)
    }

    fn apply_delta(&self, block: &mut Block, step: &DragStep) {
        if let Some((axis, d)) = axis_world_delta(step) {
            block.set_size(axis, block.size(axis) + d);
        }
    }
}

impl GizmoTool for RotateTool {
    fn render_handles(
        &self,
        frame: &GizmoFrame<'_>,
        highlighted: Option<Handle>,
        surface: &mut dyn DrawSurface,
    ) {
        let s = frame.settings;
        let width = if highlighted == Some(Handle::Ring) { 6.0 } else { 4.0 };
        surface.arc(
            frame.origin,
            s.ring_radius,
            s.ring_start_deg,
            s.ring_extent_deg,
            Stroke::new(width, PURPLE),
        );

        let a = frame.angle.to_radians() as f32;
        let dot = frame.origin + Vec2::new(a.cos(), -a.sin()) * s.ring_radius;
        surface.oval(
            Rect::from_center_size(dot, Vec2::splat(s.indicator_radius * 2.0)),
            Color32::BLACK,
        );
    }

    fn hit_test(&self, frame: &GizmoFrame<'_>, pointer: Pos2) -> Option<Handle> {
        let dist = pointer.distance(frame.origin);
        let s = frame.settings;
        (dist > s.ring_inner && dist < s.ring_outer).then_some(Handle::Ring)
    }

    fn apply_delta(&self, block: &mut Block, step: &DragStep) {
        if step.handle != Handle::Ring {
            return;
        }
        let delta = (screen_angle(step.origin, step.to) - screen_angle(step.origin, step.from))
            .to_degrees();
        let axis = step.view.axes().rotation;
        block.set_rotation(axis, block.rotation(axis) + delta);
    }
}

// ── Helpers ──────────────────────────────────────────────────

/// Math-convention angle (radians, Y up) of `p` around `origin`.
fn screen_angle(origin: Pos2, p: Pos2) -> f64 {
    let dx = (p.x - origin.x) as f64;
    let dy = -(p.y - origin.y) as f64;
    dy.atan2(dx)
}

fn draw_axis_handles(
    frame: &GizmoFrame<'_>,
    highlighted: Option<Handle>,
    surface: &mut dyn DrawSurface,
    color_of: impl Fn(Axis) -> Color32,
) {
    for axis in frame.view.plane_axes() {
        let Some(dir) = frame.view.handle_dir(axis) else {
            continue;
        };
        let color = if highlighted == Some(Handle::Axis(axis)) {
            HIGHLIGHT
        } else {
            color_of(axis)
        };
        let tip = frame.origin + dir * frame.settings.handle_length;
        surface.line(frame.origin, tip, Stroke::new(HANDLE_WIDTH, color), true);
    }
}

fn hit_axis_handles(frame: &GizmoFrame<'_>, pointer: Pos2) -> Option<Handle> {
    let rel = pointer - frame.origin;
    frame.view.plane_axes().into_iter().find_map(|axis| {
        let dir = frame.view.handle_dir(axis)?;
        let along = rel.dot(dir);
        let perp = (rel.x * dir.y - rel.y * dir.x).abs();
        let hit = perp < frame.settings.handle_pick_radius
            && along > 0.0
            && along < frame.settings.handle_length;
        hit.then_some(Handle::Axis(axis))
    })
}

/// World-space change along the dragged axis for one step.
fn axis_world_delta(step: &DragStep) -> Option<(Axis, f64)> {
    let Handle::Axis(axis) = step.handle else {
        return None;
    };
    let dir = step.view.handle_dir(axis)?;
    let pixels = (step.to - step.from).dot(dir) as f64;
    Some((axis, pixels / step.scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::draw::{DrawCommand, DrawList};

    const ORIGIN: Pos2 = Pos2::new(200.0, 150.0);

    fn frame(view: View, settings: &GizmoSettings) -> GizmoFrame<'_> {
        GizmoFrame {
            view,
            origin: ORIGIN,
            angle: 0.0,
            settings,
        }
    }

    fn step(view: View, handle: Handle, from: Pos2, to: Pos2) -> DragStep {
        DragStep {
            view,
            handle,
            origin: ORIGIN,
            from,
            to,
            scale: 20.0,
        }
    }

    #[test]
    fn test_axis_hit_test() {
        let s = GizmoSettings::default();
        let f = frame(View::Top, &s);
        let tool = GizmoMode::Move.tool();
        assert_eq!(tool.hit_test(&f, Pos2::new(230.0, 155.0)), Some(Handle::Axis(Axis::X)));
        assert_eq!(tool.hit_test(&f, Pos2::new(196.0, 120.0)), Some(Handle::Axis(Axis::Z)));
        // Beyond the tip, behind the origin, too far sideways
        assert_eq!(tool.hit_test(&f, Pos2::new(245.0, 150.0)), None);
        assert_eq!(tool.hit_test(&f, Pos2::new(190.0, 150.0)), None);
        assert_eq!(tool.hit_test(&f, Pos2::new(220.0, 165.0)), None);
    }

    #[test]
    fn test_front_view_vertical_handle_is_y() {
        let s = GizmoSettings::default();
        let f = frame(View::Front, &s);
        assert_eq!(
            GizmoMode::Scale.tool().hit_test(&f, Pos2::new(200.0, 130.0)),
            Some(Handle::Axis(Axis::Y))
        );
    }

    #[test]
    fn test_ring_hit_test() {
        let s = GizmoSettings::default();
        let f = frame(View::Right, &s);
        let tool = GizmoMode::Rotate.tool();
        assert_eq!(tool.hit_test(&f, Pos2::new(250.0, 150.0)), Some(Handle::Ring));
        assert_eq!(tool.hit_test(&f, Pos2::new(242.0, 150.0)), None);
        assert_eq!(tool.hit_test(&f, Pos2::new(262.0, 150.0)), None);
        assert_eq!(tool.hit_test(&f, ORIGIN), None);
    }

    #[test]
    fn test_move_drag_converts_pixels_to_world() {
        let mut b = Block::default();
        let tool = GizmoMode::Move.tool();
        let s = step(View::Top, Handle::Axis(Axis::X), ORIGIN, ORIGIN + Vec2::new(50.0, 0.0));
        tool.apply_delta(&mut b, &s);
        assert_eq!(b.position(Axis::X), 2.5);

        let back = step(View::Top, Handle::Axis(Axis::X), s.to, ORIGIN);
        tool.apply_delta(&mut b, &back);
        assert_eq!(b.position(Axis::X), 0.0);
        assert!(b.size.is_none());
    }

    #[test]
    fn test_move_drag_up_increases_vertical_axis() {
        let mut b = Block::default();
        let s = step(View::Front, Handle::Axis(Axis::Y), ORIGIN, ORIGIN + Vec2::new(7.0, -40.0));
        GizmoMode::Move.tool().apply_delta(&mut b, &s);
        assert_eq!(b.position(Axis::Y), 2.0);
        assert_eq!(b.position(Axis::X), 0.0);
    }

    #[test]
    fn test_scale_drag_clamps_at_minimum() {
        let mut b = Block::default();
        let s = step(View::Top, Handle::Axis(Axis::Z), ORIGIN, ORIGIN + Vec2::new(0.0, 500.0));
        GizmoMode::Scale.tool().apply_delta(&mut b, &s);
        assert_eq!(b.size(Axis::Z), shared::MIN_BLOCK_SIZE);
        assert!(b.position.is_none());
    }

    #[test]
    fn test_rotate_wraps_past_360() {
        let mut b = Block::default().with_rotation([0.0, 350.0, 0.0]);
        let a = 20.0_f32.to_radians();
        let to = ORIGIN + Vec2::new(a.cos(), -a.sin()) * 50.0;
        let s = step(View::Top, Handle::Ring, ORIGIN + Vec2::new(50.0, 0.0), to);
        GizmoMode::Rotate.tool().apply_delta(&mut b, &s);
        assert!((b.rotation(Axis::Y) - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_rotate_across_atan2_seam_stays_in_range() {
        let mut b = Block::default();
        let s = step(
            View::Front,
            Handle::Ring,
            ORIGIN + Vec2::new(-50.0, -1.0),
            ORIGIN + Vec2::new(-50.0, 1.0),
        );
        GizmoMode::Rotate.tool().apply_delta(&mut b, &s);
        let r = b.rotation(Axis::Z);
        assert!((0.0..360.0).contains(&r));
        assert!(r > 0.0 && r < 3.0, "small counterclockwise turn, got {r}");
    }

    #[test]
    fn test_axis_tool_ignores_ring_step() {
        let mut b = Block::default();
        let s = step(View::Top, Handle::Ring, ORIGIN, ORIGIN + Vec2::new(30.0, 0.0));
        GizmoMode::Move.tool().apply_delta(&mut b, &s);
        assert_eq!(b, Block::default());
    }

    #[test]
    fn test_render_move_handles_highlight() {
        let s = GizmoSettings::default();
        let mut list = DrawList::new();
        GizmoMode::Move
            .tool()
            .render_handles(&frame(View::Top, &s), Some(Handle::Axis(Axis::Z)), &mut list);
        let arrows = list.arrows();
        assert_eq!(arrows.len(), 2);
        match arrows[1] {
            DrawCommand::Line { to, stroke, .. } => {
                assert_eq!(*to, Pos2::new(200.0, 110.0));
                assert_eq!(stroke.color, HIGHLIGHT);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_render_rotate_ring_and_indicator() {
        let s = GizmoSettings::default();
        let mut list = DrawList::new();
        let f = GizmoFrame {
            angle: 90.0,
            ..frame(View::Front, &s)
        };
        GizmoMode::Rotate.tool().render_handles(&f, None, &mut list);
        assert_eq!(list.arcs().len(), 1);
        let oval = list
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Oval { rect, .. } => Some(*rect),
                _ => None,
            })
            .unwrap();
        assert!((oval.center().x - 200.0).abs() < 1e-3);
        assert!((oval.center().y - 100.0).abs() < 1e-3);
    }
}
