//! Factory functions for creating test data.
//!
//! Convenient helpers to construct blocks and maps used in tests and by the
//! command protocol examples.

use shared::{Block, MapFile};

// ── Block factories ─────────────────────────────────────────────

/// Unit block at a position.
pub fn block_at(name: &str, pos: [f64; 3]) -> Block {
    Block::named(name).with_position(pos)
}

/// Block with explicit position and size.
pub fn sized_block(name: &str, pos: [f64; 3], size: [f64; 3]) -> Block {
    Block::named(name).with_position(pos).with_size(size)
}

/// Block with a material color.
pub fn colored_block(name: &str, material: &str, pos: [f64; 3], size: [f64; 3]) -> Block {
    sized_block(name, pos, size).with_material(material)
}

// ── Map factories ───────────────────────────────────────────────

/// Two unit blocks stacked on the origin: "A" (index 0) and "B" (index 1).
pub fn overlapping_pair() -> MapFile {
    MapFile::new(vec![block_at("A", [0.0; 3]), block_at("B", [0.0; 3])])
}

/// A small room: floor, two walls and a door.
pub fn sample_room() -> MapFile {
    MapFile::new(vec![
        colored_block("floor", "gray", [0.0, -0.05, 0.0], [8.0, 0.1, 6.0]),
        colored_block("north wall", "brown", [0.0, 1.5, -3.0], [8.0, 3.0, 0.2]),
        colored_block("east wall", "brown", [4.0, 1.5, 0.0], [0.2, 3.0, 6.0]),
        colored_block("door", "#8b4513", [4.0, 1.0, 1.0], [0.25, 2.0, 1.0]),
    ])
}

/// Raw map JSON with missing and malformed fields, as older tools wrote it.
pub fn sparse_map_json() -> &'static str {
    r#"{
  "blocks": [
    {"name": "bare"},
    {"position": {"x": 2}, "size": {"y": 3}, "material": "red"},
    {"position": "bad", "rotation": {"y": 90}, "name": "turned"}
  ]
}"#
}
