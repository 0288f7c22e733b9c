//! Damage rolls and application.

use crate::env::{ConfigOracle, RandomSource};
use crate::state::{Character, Monster};

/// Roll `floor(random() * stat / 2) + floor(stat / 2)`.
///
/// The result lies in `[floor(stat/2), floor(stat/2) + ceil(stat/2) - 1]`,
/// roughly half to all of `stat`.
pub fn roll_stat_damage(stat: u32, rng: &mut (impl RandomSource + ?Sized)) -> u32 {
    let variance = (rng.next_unit() * stat as f64 / 2.0).floor() as u32;
    variance + stat / 2
}

/// Physical attack damage driven by strength.
///
/// # Formula
///
/// ```text
/// damage = floor(random() * str / 2) + floor(str / 2)
/// ```
pub fn roll_physical_damage(attacker: &Character, rng: &mut (impl RandomSource + ?Sized)) -> u32 {
    roll_stat_damage(attacker.strength, rng)
}

/// Offensive spell damage driven by intellect, plus the configured flat bonus.
///
/// # Formula
///
/// ```text
/// damage = floor(random() * int / 2) + floor(int / 2) + bonus
/// ```
pub fn roll_magic_damage(
    caster: &Character,
    config: &(impl ConfigOracle + ?Sized),
    rng: &mut (impl RandomSource + ?Sized),
) -> u32 {
    roll_stat_damage(caster.intellect, rng) + config.magic_damage_bonus()
}

/// Monster attack damage.
///
/// # Formula
///
/// ```text
/// damage = floor(random() * damage) + floor(damage / 2)
/// ```
pub fn roll_monster_damage(monster: &Monster, rng: &mut (impl RandomSource + ?Sized)) -> u32 {
    let variance = (rng.next_unit() * monster.damage as f64).floor() as u32;
    variance + monster.damage / 2
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::testing::Script;
    use crate::config::GameConfig;
    use crate::env::{ClassTemplate, MonsterTemplate};
    use crate::state::{ClassKey, EntityId};

    fn character(class: ClassKey, strength: u32, intellect: u32) -> Character {
        let template = ClassTemplate::new("Test", 10, 10, strength, intellect, 10);
        Character::from_template(EntityId(1), "Test", class, &template)
    }

    #[test]
    fn fighter_damage_spans_seven_to_fourteen() {
        let fighter = character(ClassKey::Fighter, 15, 8);
        assert_eq!(roll_physical_damage(&fighter, &mut Script::new([0.0])), 7);
        assert_eq!(roll_physical_damage(&fighter, &mut Script::new([0.5])), 10);
        assert_eq!(roll_physical_damage(&fighter, &mut Script::new([0.999_999])), 14);
    }

    #[test]
    fn magic_damage_adds_flat_bonus() {
        let mage = character(ClassKey::Mage, 8, 16);
        let config = GameConfig::default();
        assert_eq!(roll_magic_damage(&mage, &config, &mut Script::new([0.0])), 13);
        assert_eq!(roll_magic_damage(&mage, &config, &mut Script::new([0.999_999])), 20);
    }

    #[test]
    fn monster_damage_ranges_over_base_magnitude() {
        let orc = Monster::spawn(EntityId(9), &MonsterTemplate::new("Orc", 18, 6, 25));
        assert_eq!(roll_monster_damage(&orc, &mut Script::new([0.0])), 3);
        assert_eq!(roll_monster_damage(&orc, &mut Script::new([0.999_999])), 8);
    }

    #[test]
    fn zero_stat_deals_nothing() {
        let weakling = character(ClassKey::Thief, 0, 0);
        assert_eq!(roll_physical_damage(&weakling, &mut Script::new([0.9])), 0);
    }

    #[test]
    fn apply_damage_never_goes_negative() {
        assert_eq!(apply_damage(5, 3), 2);
        assert_eq!(apply_damage(5, 30), 0);
    }
}
