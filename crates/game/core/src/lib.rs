//! Deterministic rules for the dungeon crawler.
//!
//! `game-core` defines the canonical rules (combat math, progression, the
//! combat session state machine, exploration) and exposes pure APIs that the
//! runtime and offline tools reuse. All state mutation flows through
//! [`engine::GameEngine`]; static data is read through the oracles in [`env`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod progression;
pub mod state;

pub use combat::{ActionRejection, ResolvedAction, SessionOutcome};
pub use config::GameConfig;
pub use engine::{
    ActionOutcome, ActionReport, CombatEvent, ExecuteError, ExplorationOutcome, GameEngine,
    SelectionOutcome, Step, Turn,
};
pub use env::{
    ClassTemplate, ConfigOracle, Env, GameEnv, LayoutMaps, MapOracle, MonsterTemplate,
    OracleError, PcgRng, RandomSource, RngOracle, SeededRolls, SpellDefinition, SpellEffect,
    StaticTables, TablesOracle, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use progression::{LevelUp, apply_level_up, level_up_fully, xp_threshold};
pub use state::{
    ActionSelection, Character, ClassKey, CombatPhase, CombatState, DungeonGrid, DungeonState,
    EntityId, Facing, GamePhase, GameState, MapError, Monster, Party, PendingAction, Position,
    ResourceMeter, Tile, Verdict,
};
