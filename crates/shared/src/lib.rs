use serde::{Deserialize, Serialize};

mod block;

pub use block::{wrap_degrees, Block, Vec3Fields, DEFAULT_MATERIAL, MIN_BLOCK_SIZE};

/// Ось мирового пространства
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Имя оси в нижнем регистре (как в файле карты)
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Файл карты: плоский список блоков
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapFile {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl MapFile {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_without_blocks_key_is_empty() {
        let map: MapFile = serde_json::from_str(r#"{"version": 2}"#).unwrap();
        assert!(map.blocks.is_empty());
    }

    #[test]
    fn test_map_roundtrip_keeps_order() {
        let json = r#"{"blocks": [{"name": "a"}, {"name": "b"}, {"name": "c"}]}"#;
        let map: MapFile = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = map.blocks.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        let back: MapFile = serde_json::from_str(&serde_json::to_string(&map).unwrap()).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_axis_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Axis::Z).unwrap(), r#""z""#);
        let a: Axis = serde_json::from_str(r#""y""#).unwrap();
        assert_eq!(a, Axis::Y);
    }
}
