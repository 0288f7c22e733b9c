//! Outcomes and events produced by engine operations.
//!
//! Resolution is synchronous: each operation returns the full ordered list of
//! what happened, and presentation layers pace the display on their own.

use crate::combat::{ActionRejection, ResolvedAction};
use crate::progression::LevelUp;
use crate::state::{CombatPhase, EntityId, Facing, Monster, Position};

/// One step of a combat resolution, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CombatEvent {
    PhaseEntered {
        phase: CombatPhase,
    },
    AttackResolved {
        attacker: EntityId,
        target: EntityId,
        damage: u32,
        is_crit: bool,
    },
    SpellResolved {
        caster: EntityId,
        target: EntityId,
        spell: String,
        damage: u32,
    },
    HealResolved {
        caster: EntityId,
        target: EntityId,
        spell: String,
        amount: u32,
    },
    MonsterAttackResolved {
        monster: EntityId,
        target: EntityId,
        damage: u32,
    },
    /// A character or monster reached zero hp.
    EntityDefeated {
        entity: EntityId,
    },
    VictoryConcluded {
        total_xp: u64,
        total_gold: u64,
        level_ups: Vec<LevelUp>,
    },
    DefeatConcluded,
}

/// Everything a resolved player action caused.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionReport {
    pub action: ResolvedAction,
    pub events: Vec<CombatEvent>,
    /// Session phase after resolution.
    pub phase: CombatPhase,
    pub alive_party: Vec<EntityId>,
    pub alive_monsters: Vec<EntityId>,
}

/// Result of `attack` / `cast_spell`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    /// Nothing changed and nothing was emitted.
    Declined(ActionRejection),
    Resolved(ActionReport),
}

impl ActionOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn report(&self) -> Option<&ActionReport> {
        match self {
            Self::Resolved(report) => Some(report),
            Self::Declined(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&ActionRejection> {
        match self {
            Self::Declined(rejection) => Some(rejection),
            Self::Resolved(_) => None,
        }
    }
}

/// Result of a selection step that does not execute anything yet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionOutcome {
    Updated,
    Declined(ActionRejection),
}

/// Direction of a step relative to the current facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Step {
    Forward,
    Back,
}

/// Quarter turn in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Turn {
    Left,
    Right,
}

/// Result of an exploration command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ExplorationOutcome {
    /// Wall or edge of the map; nothing moved.
    Blocked { position: Position, facing: Facing },
    Turned { facing: Facing },
    Moved { position: Position },
    EncounterStarted {
        position: Position,
        monsters: Vec<Monster>,
    },
    TreasureFound {
        position: Position,
        gold: u64,
        share: u64,
    },
    Descended { depth: u32 },
}
