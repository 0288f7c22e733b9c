use crate::env::MonsterTemplate;

use super::common::{EntityId, ResourceMeter};

/// A spawned monster engaged in the current combat session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub id: EntityId,
    pub name: String,
    pub icon: String,
    /// `maximum` is the template hp, `current` the remaining hp.
    pub hp: ResourceMeter,
    /// Base magnitude of the monster's attack roll.
    pub damage: u32,
    /// Experience awarded to each survivor on victory.
    pub xp: u64,
}

impl Monster {
    pub fn spawn(id: EntityId, template: &MonsterTemplate) -> Self {
        Self {
            id,
            name: template.name.clone(),
            icon: template.icon.clone(),
            hp: ResourceMeter::full(template.hp),
            damage: template.damage,
            xp: template.xp,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.hp.is_empty()
    }

    /// Applies damage clamped at zero. Returns the hp actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp.drain(amount)
    }
}
