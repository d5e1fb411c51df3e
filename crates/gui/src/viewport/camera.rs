use egui::{Pos2, Rect, Vec2};
use glam::DVec2;

use crate::state::settings::CameraSettings;

/// Pan/zoom camera for one orthographic view.
///
/// World Y grows upward, screen Y grows downward; `center` sits in the
/// middle of the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewCamera {
    /// Pixels per world unit
    pub scale: f64,
    /// World point shown at the canvas center
    pub center: DVec2,
}

/// In-progress pan: where the pointer went down and where the camera was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    pub start_screen: Pos2,
    pub start_center: DVec2,
}

impl ViewCamera {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            center: DVec2::ZERO,
        }
    }

    pub fn world_to_screen(&self, world: DVec2, canvas: Vec2) -> Pos2 {
        let offset = (world - self.center) * self.scale;
        Pos2::new(
            canvas.x * 0.5 + offset.x as f32,
            canvas.y * 0.5 - offset.y as f32,
        )
    }

    pub fn screen_to_world(&self, screen: Pos2, canvas: Vec2) -> DVec2 {
        let dx = (screen.x - canvas.x * 0.5) as f64;
        let dy = (canvas.y * 0.5 - screen.y) as f64;
        self.center + DVec2::new(dx, dy) / self.scale
    }

    /// Axis-aligned screen box of a world rectangle given by center and full size.
    pub fn world_rect_to_screen(&self, center: DVec2, size: DVec2, canvas: Vec2) -> Rect {
        let c = self.world_to_screen(center, canvas);
        let half = Vec2::new(
            (size.x * self.scale / 2.0) as f32,
            (size.y * self.scale / 2.0) as f32,
        );
        Rect::from_min_max(c - half, c + half)
    }

    /// One wheel tick: zoom in for positive `delta`, out for negative.
    /// Anchored at the canvas center.
    pub fn zoom(&mut self, delta: f32, limits: &CameraSettings) {
        if delta > 0.0 {
            self.scale *= limits.zoom_step;
        } else if delta < 0.0 {
            self.scale /= limits.zoom_step;
        } else {
            return;
        }
        self.scale = self.scale.clamp(limits.min_scale, limits.max_scale);
    }

    pub fn begin_pan(&self, screen: Pos2) -> PanGesture {
        PanGesture {
            start_screen: screen,
            start_center: self.center,
        }
    }

    /// Move the camera so the world point under the pan start follows the pointer.
    pub fn pan_to(&mut self, gesture: &PanGesture, screen: Pos2) {
        let d = screen - gesture.start_screen;
        self.center = DVec2::new(
            gesture.start_center.x - d.x as f64 / self.scale,
            gesture.start_center.y + d.y as f64 / self.scale,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Vec2 = Vec2::new(400.0, 300.0);

    #[test]
    fn test_origin_maps_to_canvas_center() {
        let cam = ViewCamera::new(20.0);
        assert_eq!(cam.world_to_screen(DVec2::ZERO, CANVAS), Pos2::new(200.0, 150.0));
    }

    #[test]
    fn test_vertical_axis_inverted() {
        let cam = ViewCamera::new(20.0);
        let p = cam.world_to_screen(DVec2::new(1.0, 1.0), CANVAS);
        assert_eq!(p, Pos2::new(220.0, 130.0));
    }

    #[test]
    fn test_screen_world_inverse() {
        let mut cam = ViewCamera::new(35.0);
        cam.center = DVec2::new(-3.5, 8.25);
        let w = DVec2::new(1.75, -2.0);
        let back = cam.screen_to_world(cam.world_to_screen(w, CANVAS), CANVAS);
        assert!((back - w).length() < 1e-4);
    }

    #[test]
    fn test_world_rect_half_extents() {
        let cam = ViewCamera::new(20.0);
        let r = cam.world_rect_to_screen(DVec2::ZERO, DVec2::new(2.0, 1.0), CANVAS);
        assert_eq!(r.min, Pos2::new(180.0, 140.0));
        assert_eq!(r.max, Pos2::new(220.0, 160.0));
    }

    #[test]
    fn test_zoom_in_out_is_inverse() {
        let limits = CameraSettings::default();
        let mut cam = ViewCamera::new(20.0);
        for _ in 0..5 {
            cam.zoom(120.0, &limits);
        }
        for _ in 0..5 {
            cam.zoom(-120.0, &limits);
        }
        assert!((cam.scale - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_clamped() {
        let limits = CameraSettings::default();
        let mut cam = ViewCamera::new(20.0);
        for _ in 0..200 {
            cam.zoom(1.0, &limits);
        }
        assert_eq!(cam.scale, 300.0);
        for _ in 0..200 {
            cam.zoom(-1.0, &limits);
        }
        assert_eq!(cam.scale, 2.0);
    }

    #[test]
    fn test_zero_delta_ignored() {
        let limits = CameraSettings::default();
        let mut cam = ViewCamera::new(20.0);
        cam.zoom(0.0, &limits);
        assert_eq!(cam.scale, 20.0);
    }

    #[test]
    fn test_pan_and_reverse_pan() {
        let mut cam = ViewCamera::new(20.0);
        cam.center = DVec2::new(1.0, -2.0);

        let g = cam.begin_pan(Pos2::new(100.0, 100.0));
        cam.pan_to(&g, Pos2::new(140.0, 80.0));
        assert!((cam.center.x - (1.0 - 2.0)).abs() < 1e-9);
        assert!((cam.center.y - (-2.0 - 1.0)).abs() < 1e-9);

        let g = cam.begin_pan(Pos2::new(140.0, 80.0));
        cam.pan_to(&g, Pos2::new(100.0, 100.0));
        assert!((cam.center - DVec2::new(1.0, -2.0)).length() < 1e-9);
    }
}
