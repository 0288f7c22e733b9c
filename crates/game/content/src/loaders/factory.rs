//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use game_core::{DungeonGrid, GameConfig, LayoutMaps, StaticTables};

use crate::loaders::{ConfigLoader, LoadResult, MapLoader, TablesLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── tables.toml
/// └── maps/
///     ├── 01_entrance.ron
///     └── 02_crypt.ron
/// ```
///
/// Layouts are used in file-name order, one per dungeon level, cycling
/// once the list runs out.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load class, spell and monster tables from `tables.toml`.
    pub fn load_tables(&self) -> LoadResult<StaticTables> {
        let path = self.data_dir.join("tables.toml");
        TablesLoader::load(&path)
    }

    /// Load a single layout from `maps/{map_name}.ron`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<DungeonGrid> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Load every `maps/*.ron` layout in file-name order.
    pub fn load_maps(&self) -> LoadResult<LayoutMaps> {
        let maps_dir = self.data_dir.join("maps");
        let entries = std::fs::read_dir(&maps_dir).map_err(|e| {
            anyhow::anyhow!("Failed to read maps directory {}: {}", maps_dir.display(), e)
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        let layouts = paths
            .iter()
            .map(|path| MapLoader::load(path))
            .collect::<LoadResult<Vec<_>>>()?;
        anyhow::ensure!(
            !layouts.is_empty(),
            "no layouts found in {}",
            maps_dir.display()
        );

        Ok(LayoutMaps::new(layouts))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
