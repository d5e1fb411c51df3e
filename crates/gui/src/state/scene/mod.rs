//! Block store
//!
//! Ordered list of blocks plus a version counter bumped on every mutation.

mod persistence;
mod transform_ops;

pub use persistence::{load_map_file, save_map_file, DEFAULT_MAP_FILE};

use shared::{Block, MapFile};

#[derive(Debug, Default, Clone)]
pub struct SceneState {
    /// Current map
    pub map: MapFile,
    /// Monotonically increasing version counter
    pub(crate) version: u64,
}

impl SceneState {
    pub fn new(map: MapFile) -> Self {
        Self { map, version: 0 }
    }

    /// Current version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn blocks(&self) -> &[Block] {
        &self.map.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.map.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.map.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.blocks.is_empty()
    }

    /// Append a block and return its index
    pub fn add_block(&mut self, block: Block) -> usize {
        self.map.blocks.push(block);
        self.version += 1;
        self.map.blocks.len() - 1
    }

    /// Replace the whole map
    pub fn set_map(&mut self, map: MapFile) {
        self.map = map;
        self.version += 1;
    }

    /// Run `f` on one block; returns false if the index is out of range
    pub(crate) fn mutate_block(&mut self, index: usize, f: impl FnOnce(&mut Block)) -> bool {
        match self.map.blocks.get_mut(index) {
            Some(block) => {
                f(block);
                self.version += 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_block_returns_index_and_bumps_version() {
        let mut s = SceneState::default();
        assert_eq!(s.add_block(Block::named("a")), 0);
        assert_eq!(s.add_block(Block::named("b")), 1);
        assert_eq!(s.len(), 2);
        assert_eq!(s.version(), 2);
    }

    #[test]
    fn test_mutate_out_of_range() {
        let mut s = SceneState::default();
        assert!(!s.mutate_block(0, |b| b.name = Some("x".into())));
        assert_eq!(s.version(), 0);
    }
}
