//! Abstract drawing surface for one view canvas.
//!
//! The core renders through [`DrawSurface`]; the binary adapts it onto an egui
//! painter and tests record into a [`DrawList`].

use egui::{Color32, Pos2, Rect, Stroke};

pub trait DrawSurface {
    /// Fill the whole canvas with `color`
    fn clear(&mut self, color: Color32);
    /// Straight segment, optionally with an arrow head at `to`
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke, arrow: bool);
    fn rect(&mut self, rect: Rect, fill: Color32, stroke: Stroke);
    fn polygon(&mut self, points: &[Pos2], fill: Color32, stroke: Stroke);
    /// Circular arc; angles in degrees, counterclockwise from screen-right
    fn arc(&mut self, center: Pos2, radius: f32, start_deg: f32, extent_deg: f32, stroke: Stroke);
    fn oval(&mut self, rect: Rect, fill: Color32);
    /// Text centered on `pos`
    fn text(&mut self, pos: Pos2, text: &str, color: Color32);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color32),
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
        arrow: bool,
    },
    Rect {
        rect: Rect,
        fill: Color32,
        stroke: Stroke,
    },
    Polygon {
        points: Vec<Pos2>,
        fill: Color32,
        stroke: Stroke,
    },
    Arc {
        center: Pos2,
        radius: f32,
        start_deg: f32,
        extent_deg: f32,
        stroke: Stroke,
    },
    Oval {
        rect: Rect,
        fill: Color32,
    },
    Text {
        pos: Pos2,
        text: String,
        color: Color32,
    },
}

/// Surface that records every call, for headless inspection.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn arrows(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { arrow: true, .. }))
            .collect()
    }

    pub fn arcs(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Arc { .. }))
            .collect()
    }

    pub fn polygons(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .collect()
    }
}

impl DrawSurface for DrawList {
    fn clear(&mut self, color: Color32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke, arrow: bool) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke,
            arrow,
        });
    }

    fn rect(&mut self, rect: Rect, fill: Color32, stroke: Stroke) {
        self.commands.push(DrawCommand::Rect { rect, fill, stroke });
    }

    fn polygon(&mut self, points: &[Pos2], fill: Color32, stroke: Stroke) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill,
            stroke,
        });
    }

    fn arc(&mut self, center: Pos2, radius: f32, start_deg: f32, extent_deg: f32, stroke: Stroke) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_deg,
            extent_deg,
            stroke,
        });
    }

    fn oval(&mut self, rect: Rect, fill: Color32) {
        self.commands.push(DrawCommand::Oval { rect, fill });
    }

    fn text(&mut self, pos: Pos2, text: &str, color: Color32) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            color,
        });
    }
}
