//! [`DrawSurface`] over an egui painter

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};
use wallplast_editor_lib::viewport::draw::DrawSurface;

/// Degrees per segment when flattening arcs
const ARC_STEP_DEG: f32 = 5.0;

/// Paints view-local coordinates into a screen rect.
pub struct EguiSurface {
    painter: Painter,
    /// Screen position of the canvas top-left corner
    offset: Vec2,
}

impl EguiSurface {
    pub fn new(painter: Painter, canvas: Rect) -> Self {
        Self {
            painter,
            offset: canvas.min.to_vec2(),
        }
    }

    fn at(&self, p: Pos2) -> Pos2 {
        p + self.offset
    }
}

impl DrawSurface for EguiSurface {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke, arrow: bool) {
        let (a, b) = (self.at(from), self.at(to));
        if arrow {
            self.painter.arrow(a, b - a, stroke);
        } else {
            self.painter.line_segment([a, b], stroke);
        }
    }

    fn rect(&mut self, rect: Rect, fill: Color32, stroke: Stroke) {
        let rect = rect.translate(self.offset);
        self.painter.rect_filled(rect, 0.0, fill);
        self.painter.rect_stroke(rect, 0.0, stroke, egui::StrokeKind::Middle);
    }

    fn polygon(&mut self, points: &[Pos2], fill: Color32, stroke: Stroke) {
        let points: Vec<Pos2> = points.iter().map(|&p| self.at(p)).collect();
        self.painter.add(Shape::convex_polygon(points, fill, stroke));
    }

    fn arc(&mut self, center: Pos2, radius: f32, start_deg: f32, extent_deg: f32, stroke: Stroke) {
        let center = self.at(center);
        let segments = (extent_deg.abs() / ARC_STEP_DEG).ceil().max(2.0) as usize;
        let points: Vec<Pos2> = (0..=segments)
            .map(|i| {
                let a = (start_deg + extent_deg * i as f32 / segments as f32).to_radians();
                center + Vec2::new(a.cos(), -a.sin()) * radius
            })
            .collect();
        self.painter.add(Shape::line(points, stroke));
    }

    fn oval(&mut self, rect: Rect, fill: Color32) {
        let rect = rect.translate(self.offset);
        self.painter.circle_filled(rect.center(), rect.width().min(rect.height()) * 0.5, fill);
    }

    fn text(&mut self, pos: Pos2, text: &str, color: Color32) {
        self.painter.text(
            self.at(pos),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(12.0),
            color,
        );
    }
}
