//! Dungeon layout loader.
//!
//! Layouts are ASCII rows stored in RON:
//!
//! ```ron
//! (
//!     name: "Entrance",
//!     rows: [
//!         "..E.",
//!         ".#T>",
//!     ],
//! )
//! ```
//!
//! Glyphs: `.` floor, `#` wall, `E` encounter, `T` treasure, `>` stairs.

use std::path::Path;

use game_core::DungeonGrid;
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Deserialize)]
struct MapDataRon {
    #[serde(default)]
    name: String,
    rows: Vec<String>,
}

/// Loader for dungeon layouts from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<DungeonGrid> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid map {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<DungeonGrid> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        DungeonGrid::from_rows(&data.rows).map_err(|e| {
            if data.name.is_empty() {
                anyhow::anyhow!(e)
            } else {
                anyhow::anyhow!("layout {:?}: {}", data.name, e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Position, Tile};

    #[test]
    fn parses_ascii_rows() {
        let grid = MapLoader::parse(r#"(name: "Hall", rows: [".E", "T>"])"#).unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.tile(Position::new(1, 0)), Some(Tile::Encounter));
        assert_eq!(grid.tile(Position::new(1, 1)), Some(Tile::Stairs));
    }

    #[test]
    fn reports_layout_defects() {
        let error = MapLoader::parse(r##"(name: "Bad", rows: ["#."])"##).unwrap_err();
        assert!(error.to_string().contains("Bad"));
        assert!(MapLoader::parse(r#"(rows: ["..", "."])"#).is_err());
    }
}
