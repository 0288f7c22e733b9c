use std::collections::BTreeMap;

use crate::state::ClassKey;

/// Oracle providing the static rule tables: class templates, class spell
/// lists and the monster roster.
///
/// This oracle defines entity data only. Balance constants live in
/// [`super::ConfigOracle`].
pub trait TablesOracle: Send + Sync {
    fn class_template(&self, class: ClassKey) -> Option<&ClassTemplate>;

    /// Spells known by `class`, in menu order (empty for non-casters).
    fn spells(&self, class: ClassKey) -> &[SpellDefinition];

    /// Monster templates ordered from weakest to strongest.
    fn monsters(&self) -> &[MonsterTemplate];

    fn spell(&self, class: ClassKey, name: &str) -> Option<&SpellDefinition> {
        self.spells(class).iter().find(|spell| spell.name == name)
    }
}

/// Base statistics of a character class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    pub hp: u32,
    pub mp: u32,
    pub strength: u32,
    pub intellect: u32,
    pub dexterity: u32,
}

impl ClassTemplate {
    pub fn new(
        name: impl Into<String>,
        hp: u32,
        mp: u32,
        strength: u32,
        intellect: u32,
        dexterity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            icon: String::new(),
            hp,
            mp,
            strength,
            intellect,
            dexterity,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// What a spell does to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum SpellEffect {
    /// Restores hp of a living party member.
    Heal,
    /// Deals magic damage to a living monster.
    Damage,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellDefinition {
    pub name: String,
    pub effect: SpellEffect,
}

impl SpellDefinition {
    pub fn new(name: impl Into<String>, effect: SpellEffect) -> Self {
        Self {
            name: name.into(),
            effect,
        }
    }

    pub fn is_healing(&self) -> bool {
        self.effect == SpellEffect::Heal
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    pub hp: u32,
    pub damage: u32,
    pub xp: u64,
}

impl MonsterTemplate {
    pub fn new(name: impl Into<String>, hp: u32, damage: u32, xp: u64) -> Self {
        Self {
            name: name.into(),
            icon: String::new(),
            hp,
            damage,
            xp,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// In-memory tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticTables {
    classes: BTreeMap<ClassKey, ClassTemplate>,
    spells: BTreeMap<ClassKey, Vec<SpellDefinition>>,
    monsters: Vec<MonsterTemplate>,
}

impl StaticTables {
    pub fn new(
        classes: BTreeMap<ClassKey, ClassTemplate>,
        spells: BTreeMap<ClassKey, Vec<SpellDefinition>>,
        monsters: Vec<MonsterTemplate>,
    ) -> Self {
        Self {
            classes,
            spells,
            monsters,
        }
    }

    /// The stock class, spell and monster tables.
    pub fn classic() -> Self {
        use ClassKey::*;
        use SpellEffect::{Damage, Heal};

        let classes = BTreeMap::from([
            (Fighter, ClassTemplate::new("Fighter", 12, 0, 15, 8, 12).with_icon("⚔️")),
            (Mage, ClassTemplate::new("Mage", 6, 10, 8, 16, 10).with_icon("🔮")),
            (Priest, ClassTemplate::new("Priest", 10, 8, 10, 14, 10).with_icon("✨")),
            (Thief, ClassTemplate::new("Thief", 8, 0, 10, 10, 16).with_icon("🗝️")),
            (Ranger, ClassTemplate::new("Ranger", 10, 4, 12, 10, 14).with_icon("🏹")),
            (Paladin, ClassTemplate::new("Paladin", 11, 6, 14, 11, 10).with_icon("🛡️")),
        ]);

        let spells = BTreeMap::from([
            (
                Mage,
                vec![
                    SpellDefinition::new("Fireball", Damage),
                    SpellDefinition::new("Ice Lance", Damage),
                    SpellDefinition::new("Lightning", Damage),
                ],
            ),
            (
                Priest,
                vec![
                    SpellDefinition::new("Heal", Heal),
                    SpellDefinition::new("Bless", Damage),
                    SpellDefinition::new("Smite", Damage),
                ],
            ),
            (Ranger, vec![SpellDefinition::new("Quick Shot", Damage)]),
            (Paladin, vec![SpellDefinition::new("Lay on Hands", Heal)]),
        ]);

        let monsters = vec![
            MonsterTemplate::new("Goblin", 8, 3, 10).with_icon("👺"),
            MonsterTemplate::new("Skeleton", 12, 4, 15).with_icon("💀"),
            MonsterTemplate::new("Orc", 18, 6, 25).with_icon("👹"),
            MonsterTemplate::new("Dark Wizard", 15, 8, 30).with_icon("🧙"),
            MonsterTemplate::new("Dragon", 50, 15, 100).with_icon("🐉"),
        ];

        Self::new(classes, spells, monsters)
    }
}

impl Default for StaticTables {
    fn default() -> Self {
        Self::classic()
    }
}

impl TablesOracle for StaticTables {
    fn class_template(&self, class: ClassKey) -> Option<&ClassTemplate> {
        self.classes.get(&class)
    }

    fn spells(&self, class: ClassKey) -> &[SpellDefinition] {
        self.spells.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }

    fn monsters(&self) -> &[MonsterTemplate] {
        &self.monsters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_class_has_a_template() {
        let tables = StaticTables::classic();
        for class in ClassKey::iter() {
            assert!(tables.class_template(class).is_some(), "{class} missing");
        }
    }

    #[test]
    fn healing_spells_are_tagged() {
        let tables = StaticTables::classic();
        assert!(tables.spell(ClassKey::Priest, "Heal").unwrap().is_healing());
        assert!(tables.spell(ClassKey::Paladin, "Lay on Hands").unwrap().is_healing());
        assert!(!tables.spell(ClassKey::Priest, "Smite").unwrap().is_healing());
        assert!(tables.spell(ClassKey::Mage, "Heal").is_none());
        assert!(tables.spells(ClassKey::Fighter).is_empty());
    }

    #[test]
    fn monsters_are_ordered_weakest_first() {
        let tables = StaticTables::classic();
        let names: Vec<&str> = tables.monsters().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Goblin", "Skeleton", "Orc", "Dark Wizard", "Dragon"]);
    }
}
