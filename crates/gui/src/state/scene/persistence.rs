//! Map file load/save

use std::path::Path;

use shared::MapFile;

use super::SceneState;

pub const DEFAULT_MAP_FILE: &str = "map.wpm";

/// Read a map file. A missing file is created empty.
pub fn load_map_file(path: &Path) -> Result<MapFile, String> {
    if !path.exists() {
        let empty = MapFile::default();
        save_map_file(path, &empty)?;
        tracing::info!("Created empty map {}", path.display());
        return Ok(empty);
    }
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&json).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Write a map file as pretty-printed JSON.
pub fn save_map_file(path: &Path, map: &MapFile) -> Result<(), String> {
    let json = serde_json::to_string_pretty(map)
        .map_err(|e| format!("Failed to serialize map: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

impl SceneState {
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let map = load_map_file(path)?;
        tracing::info!("Loaded {} blocks from {}", map.blocks.len(), path.display());
        Ok(Self::new(map))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        save_map_file(path, &self.map)?;
        tracing::info!("Saved {} blocks to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Axis, Block};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("wallplast-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_missing_file_is_created_empty() {
        let path = temp_path("missing.wpm");
        let _ = std::fs::remove_file(&path);

        let map = load_map_file(&path).unwrap();
        assert!(map.blocks.is_empty());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"blocks\""));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip.wpm");
        let mut scene = SceneState::default();
        scene.add_block(Block::named("Стена").with_position([1.0, 2.0, 3.0]));
        scene.save_to(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Стена"), "non-ASCII names are written as-is");

        let loaded = SceneState::load_from(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.blocks()[0].position(Axis::Z), 3.0);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let path = temp_path("broken.wpm");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_map_file(&path).unwrap_err();
        assert!(err.contains("Failed to parse"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let path = temp_path("no-such-dir").join("map.wpm");
        let scene = SceneState::default();
        assert!(scene.save_to(&path).is_err());
    }
}
