//! Class, spell and monster tables loader.

use std::collections::BTreeMap;
use std::path::Path;

use game_core::{ClassKey, ClassTemplate, MonsterTemplate, SpellDefinition, SpellEffect, StaticTables};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// `tables.toml` layout.
///
/// ```toml
/// [[classes]]
/// key = "MAGE"
/// name = "Mage"
/// hp = 6
/// mp = 10
/// strength = 8
/// intellect = 16
/// dexterity = 10
///
/// [[spells]]
/// class = "MAGE"
/// name = "Fireball"
/// effect = "damage"
///
/// [[monsters]]
/// name = "Goblin"
/// hp = 8
/// damage = 3
/// xp = 10
/// ```
#[derive(Debug, Deserialize)]
struct TablesToml {
    classes: Vec<ClassEntry>,
    #[serde(default)]
    spells: Vec<SpellEntry>,
    monsters: Vec<MonsterTemplate>,
}

#[derive(Debug, Deserialize)]
struct ClassEntry {
    key: ClassKey,
    name: String,
    #[serde(default)]
    icon: String,
    hp: u32,
    mp: u32,
    strength: u32,
    intellect: u32,
    dexterity: u32,
}

#[derive(Debug, Deserialize)]
struct SpellEntry {
    class: ClassKey,
    name: String,
    effect: SpellEffect,
}

/// Loader for the static rule tables.
pub struct TablesLoader;

impl TablesLoader {
    /// Load tables from a TOML file.
    pub fn load(path: &Path) -> LoadResult<StaticTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse tables from TOML text.
    ///
    /// Rejects duplicate classes, duplicate spells within a class, spells for
    /// classes without a template, an empty monster roster, and classes or
    /// monsters with zero hp.
    pub fn parse(content: &str) -> LoadResult<StaticTables> {
        let data: TablesToml = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        let mut classes = BTreeMap::new();
        for entry in data.classes {
            anyhow::ensure!(entry.hp > 0, "class {} must start with hp above zero", entry.key);
            let template = ClassTemplate::new(
                entry.name,
                entry.hp,
                entry.mp,
                entry.strength,
                entry.intellect,
                entry.dexterity,
            )
            .with_icon(entry.icon);
            if classes.insert(entry.key, template).is_some() {
                anyhow::bail!("class {} is defined twice", entry.key);
            }
        }

        let mut spells: BTreeMap<ClassKey, Vec<SpellDefinition>> = BTreeMap::new();
        for entry in data.spells {
            anyhow::ensure!(
                classes.contains_key(&entry.class),
                "spell {:?} belongs to class {} which has no template",
                entry.name,
                entry.class
            );
            let known = spells.entry(entry.class).or_default();
            anyhow::ensure!(
                known.iter().all(|spell| spell.name != entry.name),
                "spell {:?} is listed twice for class {}",
                entry.name,
                entry.class
            );
            known.push(SpellDefinition::new(entry.name, entry.effect));
        }

        anyhow::ensure!(!data.monsters.is_empty(), "monster table is empty");
        for monster in &data.monsters {
            anyhow::ensure!(
                monster.hp > 0,
                "monster {:?} must have hp above zero",
                monster.name
            );
        }

        Ok(StaticTables::new(classes, spells, data.monsters))
    }
}
