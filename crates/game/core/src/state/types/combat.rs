use arrayvec::ArrayVec;

use crate::combat::SessionOutcome;
use crate::config::GameConfig;

use super::common::EntityId;
use super::monster::Monster;

/// How a concluded session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Victory,
    Defeat,
}

/// Phase of the combat session state machine.
///
/// ```text
/// AwaitingPlayerAction → ActionResolving → (MonsterTurnResolving)*
///                      → AwaitingPlayerAction | Concluded(Victory | Defeat)
/// ```
///
/// Resolution is synchronous, so callers only ever observe
/// `AwaitingPlayerAction` or `Concluded` between operations. The transient
/// phases show up in the event stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatPhase {
    #[default]
    AwaitingPlayerAction,
    ActionResolving,
    MonsterTurnResolving,
    Concluded(Verdict),
}

impl CombatPhase {
    pub const fn is_concluded(self) -> bool {
        matches!(self, Self::Concluded(_))
    }
}

/// Action picked for the selected member, waiting for a target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PendingAction {
    Attack,
    CastSpell { spell: String },
}

/// Player choice that has not been executed yet.
///
/// Cancelling from any step returns to `Idle` without touching the fight.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionSelection {
    #[default]
    Idle,
    MemberSelected {
        member: EntityId,
    },
    ActionChosen {
        member: EntityId,
        action: PendingAction,
    },
}

/// One combat engagement, from encounter to conclusion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    /// Full spawned roster in spawn order; defeated monsters stay listed.
    pub monsters: ArrayVec<Monster, { GameConfig::MAX_MONSTERS }>,
    pub phase: CombatPhase,
    pub selection: ActionSelection,
    /// Completed player actions.
    pub round: u32,
    /// Set once the session reaches `Concluded`.
    pub outcome: Option<SessionOutcome>,
}

impl CombatState {
    pub fn new(monsters: ArrayVec<Monster, { GameConfig::MAX_MONSTERS }>) -> Self {
        Self {
            monsters,
            phase: CombatPhase::AwaitingPlayerAction,
            selection: ActionSelection::Idle,
            round: 0,
            outcome: None,
        }
    }

    pub fn monster(&self, id: EntityId) -> Option<&Monster> {
        self.monsters.iter().find(|monster| monster.id == id)
    }

    pub fn monster_mut(&mut self, id: EntityId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|monster| monster.id == id)
    }

    /// Living monsters in spawn order.
    pub fn alive_monsters(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.iter().filter(|monster| monster.is_alive())
    }

    pub fn alive_ids(&self) -> Vec<EntityId> {
        self.alive_monsters().map(|monster| monster.id).collect()
    }

    pub fn all_defeated(&self) -> bool {
        self.alive_monsters().next().is_none()
    }

    /// Experience for the whole spawned roster, including monsters felled
    /// in earlier rounds.
    pub fn total_xp(&self) -> u64 {
        self.monsters.iter().map(|monster| monster.xp).sum()
    }
}
