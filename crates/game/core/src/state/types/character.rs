use crate::env::ClassTemplate;

use super::common::{EntityId, ResourceMeter};

/// Character classes available at party creation.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ClassKey {
    Fighter,
    Mage,
    Priest,
    Thief,
    Ranger,
    Paladin,
}

/// A party member.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    pub class: ClassKey,
    pub level: u32,
    pub xp: u64,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub strength: u32,
    pub intellect: u32,
    pub dexterity: u32,
    pub gold: u64,
    /// Cleared when hp reaches zero. Nothing in the rules sets it again.
    pub alive: bool,
}

impl Character {
    /// Creates a level-1 character with full resources from a class template.
    pub fn from_template(
        id: EntityId,
        name: impl Into<String>,
        class: ClassKey,
        template: &ClassTemplate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            class,
            level: 1,
            xp: 0,
            hp: ResourceMeter::full(template.hp),
            mp: ResourceMeter::full(template.mp),
            strength: template.strength,
            intellect: template.intellect,
            dexterity: template.dexterity,
            gold: 0,
            alive: true,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Applies damage; the character dies exactly when hp reaches zero.
    ///
    /// Returns the hp actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let removed = self.hp.drain(amount);
        if self.hp.is_empty() {
            self.alive = false;
        }
        removed
    }

    /// Restores hp up to the maximum. Returns the hp actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp.restore(amount)
    }

    /// Spends mana if enough is available.
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        if self.mp.current < cost {
            return false;
        }
        self.mp.current -= cost;
        true
    }

    /// Full hp/mp restore for the living; the dead stay as they are.
    pub fn rested(&self) -> Self {
        let mut rested = self.clone();
        if rested.alive {
            rested.hp.refill();
            rested.mp.refill();
        }
        rested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn fighter() -> Character {
        let template = ClassTemplate::new("Fighter", 12, 0, 15, 8, 12);
        Character::from_template(EntityId(1), "Aria", ClassKey::Fighter, &template)
    }

    #[test]
    fn parses_class_keys_case_insensitively() {
        assert_eq!(ClassKey::from_str("PALADIN").unwrap(), ClassKey::Paladin);
        assert_eq!(ClassKey::from_str("mage").unwrap(), ClassKey::Mage);
        assert!(ClassKey::from_str("BARD").is_err());
        assert_eq!(ClassKey::Ranger.to_string(), "RANGER");
    }

    #[test]
    fn template_sets_full_resources() {
        let aria = fighter();
        assert_eq!(aria.level, 1);
        assert_eq!(aria.hp, ResourceMeter::full(12));
        assert_eq!(aria.mp, ResourceMeter::full(0));
        assert_eq!(aria.strength, 15);
        assert!(aria.is_alive());
    }

    #[test]
    fn lethal_damage_kills_and_clamps() {
        let mut aria = fighter();
        assert_eq!(aria.take_damage(30), 12);
        assert_eq!(aria.hp.current, 0);
        assert!(!aria.is_alive());
    }

    #[test]
    fn rest_does_not_revive() {
        let mut aria = fighter();
        aria.take_damage(12);
        let rested = aria.rested();
        assert_eq!(rested, aria);
    }

    #[test]
    fn spend_mana_refuses_when_short() {
        let mut aria = fighter();
        assert!(!aria.spend_mana(3));
        assert_eq!(aria.mp.current, 0);
    }
}
