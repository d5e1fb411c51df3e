//! Full redraw of one view onto a [`DrawSurface`].

use egui::{Color32, Pos2, Stroke};
use shared::{Axis, Block};

use super::draw::DrawSurface;
use super::projection::{block_screen_rect, project, rotated_corners};
use super::view::View;
use crate::state::EditorState;

const GRID_COLOR: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);
const SELECTED_OUTLINE: Color32 = Color32::RED;
const LABEL_OFFSET: f32 = 10.0;

pub fn render_view(state: &EditorState, view: View, surface: &mut dyn DrawSurface) {
    surface.clear(Color32::WHITE);

    if state.settings.grid.visible {
        draw_grid(state.canvas(), state.settings.grid.step_px, surface);
    }

    for index in draw_order(state.scene.blocks(), view) {
        draw_block(state, index, view, surface);
    }

    if let Some(frame) = state.gizmo_frame(view) {
        state
            .mode
            .tool()
            .render_handles(&frame, state.highlighted_handle(), surface);
    }
}

/// Top view paints large footprints first so small blocks stay visible on top.
pub fn draw_order(blocks: &[Block], view: View) -> Vec<usize> {
    let mut order: Vec<usize> = (0..blocks.len()).collect();
    if view == View::Top {
        let footprint = |b: &Block| (b.size(Axis::X) * b.size(Axis::Z)).abs();
        order.sort_by(|&a, &b| footprint(&blocks[b]).total_cmp(&footprint(&blocks[a])));
    }
    order
}

/// Fill color for a material name; unknown names fall back to gray.
pub fn material_color(material: &str) -> Color32 {
    if let Some(c) = parse_hex_rgb(material) {
        return c;
    }
    match material.to_ascii_lowercase().as_str() {
        "red" => Color32::from_rgb(255, 0, 0),
        "green" => Color32::from_rgb(0, 255, 0),
        "darkgreen" => Color32::from_rgb(0, 100, 0),
        "blue" => Color32::from_rgb(0, 0, 255),
        "lightblue" => Color32::from_rgb(173, 216, 230),
        "yellow" => Color32::from_rgb(255, 255, 0),
        "orange" => Color32::from_rgb(255, 165, 0),
        "brown" => Color32::from_rgb(165, 42, 42),
        "purple" => Color32::from_rgb(160, 32, 240),
        "pink" => Color32::from_rgb(255, 192, 203),
        "cyan" => Color32::from_rgb(0, 255, 255),
        "white" => Color32::WHITE,
        "black" => Color32::BLACK,
        "darkgray" | "darkgrey" => Color32::from_rgb(169, 169, 169),
        "lightgray" | "lightgrey" => Color32::from_rgb(211, 211, 211),
        _ => Color32::from_rgb(190, 190, 190),
    }
}

/// `#rrggbb`
fn parse_hex_rgb(s: &str) -> Option<Color32> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn draw_grid(canvas: egui::Vec2, step: f32, surface: &mut dyn DrawSurface) {
    if step <= 0.0 {
        return;
    }
    let stroke = Stroke::new(1.0, GRID_COLOR);
    let center = canvas * 0.5;
    let n = (canvas.x.max(canvas.y) / 2.0 / step).ceil() as i32;
    for i in -n..=n {
        let x = center.x + i as f32 * step;
        if (0.0..=canvas.x).contains(&x) {
            surface.line(Pos2::new(x, 0.0), Pos2::new(x, canvas.y), stroke, false);
        }
        let y = center.y - i as f32 * step;
        if (0.0..=canvas.y).contains(&y) {
            surface.line(Pos2::new(0.0, y), Pos2::new(canvas.x, y), stroke, false);
        }
    }
}

fn draw_block(state: &EditorState, index: usize, view: View, surface: &mut dyn DrawSurface) {
    let Some(block) = state.scene.block(index) else {
        return;
    };
    let rect = block_screen_rect(block, view, state.camera(view), state.canvas());
    let fill = material_color(block.material());
    let selected = state.selection.is_selected(index, view);
    let stroke = if selected {
        Stroke::new(4.0, SELECTED_OUTLINE)
    } else {
        Stroke::new(2.0, Color32::BLACK)
    };

    let angle = project(block, view).angle;
    if selected && angle != 0.0 {
        surface.polygon(&rotated_corners(rect, angle), fill, stroke);
    } else {
        surface.rect(rect, fill, stroke);
    }

    if !block.name().is_empty() {
        let label_pos = Pos2::new(rect.center().x, rect.min.y - LABEL_OFFSET);
        surface.text(label_pos, block.name(), Color32::BLACK);
    }
}
