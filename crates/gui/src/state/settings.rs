//! Editor settings

use serde::{Deserialize, Serialize};

/// Camera zoom limits and defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Initial pixels per world unit
    pub default_scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Scale factor applied per wheel tick
    pub zoom_step: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            default_scale: 20.0,
            min_scale: 2.0,
            max_scale: 300.0,
            zoom_step: 1.1,
        }
    }
}

/// Gizmo handle geometry, in screen pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoSettings {
    /// Length of a move/scale axis handle
    pub handle_length: f32,
    /// Max perpendicular distance from a handle that still hits it
    pub handle_pick_radius: f32,
    pub ring_radius: f32,
    /// Rotate ring hit band (exclusive bounds)
    pub ring_inner: f32,
    pub ring_outer: f32,
    pub ring_start_deg: f32,
    pub ring_extent_deg: f32,
    /// Radius of the angle indicator dot on the ring
    pub indicator_radius: f32,
}

impl Default for GizmoSettings {
    fn default() -> Self {
        Self {
            handle_length: 40.0,
            handle_pick_radius: 10.0,
            ring_radius: 50.0,
            ring_inner: 42.0,
            ring_outer: 62.0,
            ring_start_deg: 30.0,
            ring_extent_deg: 300.0,
            indicator_radius: 6.0,
        }
    }
}

/// Arrow-key nudging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardSettings {
    /// World units per key press
    pub nudge_step: f64,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self { nudge_step: 0.2 }
    }
}

/// Grid display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub visible: bool,
    /// Spacing between grid lines in pixels
    pub step_px: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            step_px: 50.0,
        }
    }
}

/// Size of each view canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
        }
    }
}

impl CanvasSettings {
    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(self.width, self.height)
    }
}

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub language: Language,
}

/// All editor settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub camera: CameraSettings,
    pub gizmo: GizmoSettings,
    pub keyboard: KeyboardSettings,
    pub grid: GridSettings,
    pub canvas: CanvasSettings,
    pub ui: UiSettings,
}

impl EditorSettings {
    fn config_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "wallplast", "wallplast-editor")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if let Ok(json) = std::fs::read_to_string(&path) {
                match serde_json::from_str(&json) {
                    Ok(settings) => return settings,
                    Err(e) => tracing::warn!("Ignoring malformed settings {}: {e}", path.display()),
                }
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path().ok_or("No config directory available")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;
        std::fs::write(&path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }
}
