//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            (0.0..=1.0).contains(&config.crit_base_chance),
            "crit_base_chance must lie in [0, 1], got {}",
            config.crit_base_chance
        );
        anyhow::ensure!(
            config.crit_multiplier >= 1.0,
            "crit_multiplier must be at least 1, got {}",
            config.crit_multiplier
        );

        Ok(config)
    }
}
