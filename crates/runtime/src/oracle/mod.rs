//! Runtime bundle of static game content oracles.
//!
//! The [`OracleManager`] holds the loaded tables, layouts and balance config
//! so the runtime can build [`game_core::Env`] snapshots on demand. The data
//! is immutable at runtime; dynamic state lives in
//! [`game_core::GameState`].

use std::sync::Arc;

use game_core::{Env, GameConfig, GameEnv, LayoutMaps, PcgRng, StaticTables};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) tables: Arc<StaticTables>,
    pub(crate) maps: Arc<LayoutMaps>,
    pub(crate) config: Arc<GameConfig>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(tables: Arc<StaticTables>, maps: Arc<LayoutMaps>, config: Arc<GameConfig>) -> Self {
        Self {
            tables,
            maps,
            config,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Built-in class, spell and monster tables over the given layouts.
    pub fn classic(maps: LayoutMaps) -> Self {
        Self::new(
            Arc::new(StaticTables::classic()),
            Arc::new(maps),
            Arc::new(GameConfig::default()),
        )
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(
            self.tables.as_ref(),
            self.maps.as_ref(),
            self.config.as_ref(),
            &self.rng,
        )
        .into_game_env()
    }

    pub fn tables(&self) -> &StaticTables {
        &self.tables
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
