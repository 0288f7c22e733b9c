pub mod character;
pub mod combat;
pub mod common;
pub mod dungeon;
pub mod monster;
pub mod party;

pub use character::{Character, ClassKey};
pub use combat::{ActionSelection, CombatPhase, CombatState, PendingAction, Verdict};
pub use common::{EntityId, Facing, Position, ResourceMeter};
pub use dungeon::{DungeonGrid, DungeonState, MapError, Tile};
pub use monster::Monster;
pub use party::Party;
