//! Authoritative game state representation.
//!
//! This module owns the data structures describing the party, the dungeon,
//! and the active combat session. Runtime layers clone or query this state but
//! mutate it exclusively through the engine.
pub mod types;

pub use types::{
    ActionSelection, Character, ClassKey, CombatPhase, CombatState, DungeonGrid, DungeonState,
    EntityId, Facing, MapError, Monster, Party, PendingAction, Position, ResourceMeter, Tile,
    Verdict,
};

/// Top-level phase of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GamePhase {
    #[default]
    PartyCreation,
    Exploring,
    Combat,
    GameOver,
}

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once when the state is created. Combined with `nonce` to derive a
    /// unique seed for each roll.
    pub game_seed: u64,

    /// Operation sequence number, advanced after every engine operation.
    pub nonce: u64,

    /// Sequential entity ID allocator (monotonically increasing, never reused).
    next_entity_id: u32,

    pub phase: GamePhase,
    pub party: Party,
    /// Present once the party has embarked.
    pub dungeon: Option<DungeonState>,
    /// Present exactly while `phase == Combat`.
    pub combat: Option<CombatState>,
}

impl GameState {
    /// Creates a fresh state in party creation.
    pub fn with_seed(game_seed: u64) -> Self {
        Self {
            game_seed,
            nonce: 0,
            next_entity_id: 1,
            phase: GamePhase::PartyCreation,
            party: Party::new(),
            dungeon: None,
            combat: None,
        }
    }

    /// Allocates a fresh entity id shared by characters and monsters.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    /// Living party members in roster order.
    pub fn alive_party(&self) -> Vec<&Character> {
        self.party.alive().collect()
    }

    /// Living monsters of the active session in spawn order (empty outside combat).
    pub fn alive_monsters(&self) -> Vec<&Monster> {
        self.combat
            .as_ref()
            .map(|combat| combat.alive_monsters().collect())
            .unwrap_or_default()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ids_are_never_reused() {
        let mut state = GameState::with_seed(7);
        let first = state.allocate_entity_id();
        let second = state.allocate_entity_id();
        assert_ne!(first, second);
        assert_eq!(first, EntityId(1));
    }

    #[test]
    fn fresh_state_has_no_combatants() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::PartyCreation);
        assert!(state.alive_party().is_empty());
        assert!(state.alive_monsters().is_empty());
    }
}
