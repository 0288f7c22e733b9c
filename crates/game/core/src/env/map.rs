use crate::state::DungeonGrid;

/// Oracle providing the dungeon layout for each level.
///
/// Layout painting happens outside the core; the engine only asks for the
/// grid of the level the party is entering.
pub trait MapOracle: Send + Sync {
    /// Layout for dungeon level `depth` (1-based), or `None` if unavailable.
    fn layout(&self, depth: u32) -> Option<DungeonGrid>;
}

/// A fixed list of layouts, reused cyclically as the party descends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutMaps {
    layouts: Vec<DungeonGrid>,
}

impl LayoutMaps {
    pub fn new(layouts: Vec<DungeonGrid>) -> Self {
        Self { layouts }
    }

    pub fn single(layout: DungeonGrid) -> Self {
        Self::new(vec![layout])
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl MapOracle for LayoutMaps {
    fn layout(&self, depth: u32) -> Option<DungeonGrid> {
        if self.layouts.is_empty() {
            return None;
        }
        let index = (depth.max(1) as usize - 1) % self.layouts.len();
        Some(self.layouts[index].clone())
    }
}
