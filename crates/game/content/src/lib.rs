//! Data-driven content definitions and loaders.
//!
//! This crate reads the static data the rules consult:
//! - Balance configuration (TOML)
//! - Class, spell and monster tables (TOML)
//! - Dungeon layouts (RON, one file per level)
//!
//! Content is consumed by runtime oracles and never appears in game state.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, MapLoader, TablesLoader};
