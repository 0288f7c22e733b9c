//! Resolved actions and session outcomes.

use crate::env::SpellEffect;
use crate::progression::LevelUp;
use crate::state::{EntityId, Verdict};

/// A player action that passed validation and was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolvedAction {
    Attack {
        attacker: EntityId,
        attacker_name: String,
        target: EntityId,
        target_name: String,
        damage: u32,
        is_crit: bool,
    },
    Spell {
        caster: EntityId,
        caster_name: String,
        spell: String,
        effect: SpellEffect,
        target: EntityId,
        target_name: String,
        /// Damage dealt or hit points restored, depending on `effect`.
        amount: u32,
    },
}

impl ResolvedAction {
    pub fn actor(&self) -> EntityId {
        match self {
            Self::Attack { attacker, .. } => *attacker,
            Self::Spell { caster, .. } => *caster,
        }
    }

    pub fn target(&self) -> EntityId {
        match self {
            Self::Attack { target, .. } | Self::Spell { target, .. } => *target,
        }
    }
}

/// Final result of a combat session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionOutcome {
    Victory {
        /// Sum over the full spawned roster; every survivor receives all of it.
        total_xp: u64,
        /// Rolled purse before it is split among survivors.
        total_gold: u64,
        level_ups: Vec<LevelUp>,
    },
    Defeat,
}

impl SessionOutcome {
    pub fn verdict(&self) -> Verdict {
        match self {
            Self::Victory { .. } => Verdict::Victory,
            Self::Defeat => Verdict::Defeat,
        }
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, Self::Victory { .. })
    }
}
