//! Traits describing read-only world data.
//!
//! Oracles expose rule tables, dungeon layouts, balance constants and the
//! random source. The [`Env`] aggregate bundles them so the engine can access
//! everything it needs without hard coupling to concrete implementations.
mod config;
mod error;
mod map;
mod rng;
mod tables;

pub use config::ConfigOracle;
pub use error::OracleError;
pub use map::{LayoutMaps, MapOracle};
pub use rng::{PcgRng, RandomSource, RngOracle, SeededRolls, compute_seed};
pub use tables::{
    ClassTemplate, MonsterTemplate, SpellDefinition, SpellEffect, StaticTables, TablesOracle,
};

/// Aggregates read-only oracles required by the engine.
pub struct Env<'a, T, M, C, R>
where
    T: TablesOracle + ?Sized,
    M: MapOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    tables: Option<&'a T>,
    map: Option<&'a M>,
    config: Option<&'a C>,
    rng: Option<&'a R>,
}

impl<T, M, C, R> Clone for Env<'_, T, M, C, R>
where
    T: TablesOracle + ?Sized,
    M: MapOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

// Only references are held, so the bundle is copyable even over trait objects.
impl<T, M, C, R> Copy for Env<'_, T, M, C, R>
where
    T: TablesOracle + ?Sized,
    M: MapOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<
    'a,
    dyn TablesOracle + 'a,
    dyn MapOracle + 'a,
    dyn ConfigOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, T, M, C, R> Env<'a, T, M, C, R>
where
    T: TablesOracle + ?Sized,
    M: MapOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        tables: Option<&'a T>,
        map: Option<&'a M>,
        config: Option<&'a C>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            tables,
            map,
            config,
            rng,
        }
    }

    pub fn with_all(tables: &'a T, map: &'a M, config: &'a C, rng: &'a R) -> Self {
        Self::new(Some(tables), Some(map), Some(config), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            tables: None,
            map: None,
            config: None,
            rng: None,
        }
    }

    /// Returns the TablesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TablesNotAvailable` if no tables oracle was provided.
    pub fn tables(&self) -> Result<&'a T, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }

    /// Returns the MapOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` if no map oracle was provided.
    pub fn map(&self) -> Result<&'a M, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, T, M, C, R> Env<'a, T, M, C, R>
where
    T: TablesOracle + 'a,
    M: MapOracle + 'a,
    C: ConfigOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn into_game_env(self) -> GameEnv<'a> {
        let tables: Option<&'a dyn TablesOracle> = self.tables.map(|tables| tables as _);
        let map: Option<&'a dyn MapOracle> = self.map.map(|map| map as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(tables, map, config, rng)
    }
}
