//! Event payloads that have no counterpart in `game-core`.

use serde::{Deserialize, Serialize};

use game_core::{ClassKey, EntityId, Party, Verdict};

/// Party roster and lifecycle changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartyEvent {
    Recruited {
        id: EntityId,
        name: String,
        class: ClassKey,
    },
    Embarked {
        depth: u32,
    },
    /// Alive members were restored to full hp and mp.
    Rested {
        party: Party,
    },
    /// Run discarded; back to party creation.
    Reset,
}

/// Closing summary of a combat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub verdict: Verdict,
    pub total_xp: u64,
    pub total_gold: u64,
    /// Number of combat rounds the session lasted.
    pub rounds: u32,
}
