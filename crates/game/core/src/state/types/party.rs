use arrayvec::ArrayVec;

use crate::config::GameConfig;

use super::character::Character;
use super::common::EntityId;

/// Ordered party roster (creation order).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    members: ArrayVec<Character, { GameConfig::MAX_PARTY_SIZE }>,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.is_full()
    }

    /// Adds a member, handing it back if the roster is at capacity.
    pub fn push(&mut self, member: Character) -> Result<(), Character> {
        self.members.try_push(member).map_err(|err| err.element())
    }

    pub fn members(&self) -> &[Character] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Character> {
        self.members.iter_mut()
    }

    pub fn get(&self, id: EntityId) -> Option<&Character> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Character> {
        self.members.iter_mut().find(|member| member.id == id)
    }

    /// Living members in roster order.
    pub fn alive(&self) -> impl Iterator<Item = &Character> {
        self.members.iter().filter(|member| member.is_alive())
    }

    pub fn alive_ids(&self) -> Vec<EntityId> {
        self.alive().map(|member| member.id).collect()
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    pub fn is_wiped(&self) -> bool {
        self.alive_count() == 0
    }

    /// Returns the party after a rest: living members fully restored.
    pub fn rested(&self) -> Self {
        Self {
            members: self.members.iter().map(Character::rested).collect(),
        }
    }

    /// Splits `gold` evenly between living members, dropping the remainder.
    ///
    /// Returns the share each member received.
    pub fn share_gold(&mut self, gold: u64) -> u64 {
        let alive = self.alive_count() as u64;
        if alive == 0 {
            return 0;
        }
        let share = gold / alive;
        for member in self.members.iter_mut().filter(|m| m.is_alive()) {
            member.gold += share;
        }
        share
    }
}
