//! Critical hit chance and multiplier.

use crate::env::{ConfigOracle, RandomSource};
use crate::state::Character;

/// Critical chance for a given dexterity.
///
/// # Formula
///
/// ```text
/// chance = base + dex / 200
/// clamped to [0, 1]
/// ```
pub fn critical_chance(dexterity: u32, config: &(impl ConfigOracle + ?Sized)) -> f64 {
    (config.crit_base_chance() + dexterity as f64 / 200.0).clamp(0.0, 1.0)
}

/// Roll whether the attacker lands a critical hit.
pub fn roll_critical(
    attacker: &Character,
    config: &(impl ConfigOracle + ?Sized),
    rng: &mut (impl RandomSource + ?Sized),
) -> bool {
    rng.next_unit() < critical_chance(attacker.dexterity, config)
}

/// `floor(damage * multiplier)`.
pub fn apply_critical_multiplier(damage: u32, config: &(impl ConfigOracle + ?Sized)) -> u32 {
    (damage as f64 * config.crit_multiplier()).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::testing::Script;
    use crate::config::GameConfig;
    use crate::env::ClassTemplate;
    use crate::state::{ClassKey, EntityId};

    fn thief() -> Character {
        let template = ClassTemplate::new("Thief", 8, 0, 10, 10, 16);
        Character::from_template(EntityId(1), "Vex", ClassKey::Thief, &template)
    }

    #[test]
    fn dexterity_raises_crit_chance() {
        let config = GameConfig::default();
        assert!((critical_chance(16, &config) - 0.23).abs() < 1e-9);
        assert!((critical_chance(0, &config) - 0.15).abs() < 1e-9);
    }

    #[test]
    fn chance_is_clamped() {
        let config = GameConfig::default();
        assert_eq!(critical_chance(1_000, &config), 1.0);

        let negative = GameConfig {
            crit_base_chance: -2.0,
            ..GameConfig::default()
        };
        assert_eq!(critical_chance(10, &negative), 0.0);
    }

    #[test]
    fn roll_compares_against_chance() {
        let config = GameConfig::default();
        let vex = thief();
        assert!(roll_critical(&vex, &config, &mut Script::new([0.22])));
        assert!(!roll_critical(&vex, &config, &mut Script::new([0.23])));
    }

    #[test]
    fn multiplier_floors() {
        let config = GameConfig::default();
        assert_eq!(apply_critical_multiplier(10, &config), 18);
        assert_eq!(apply_critical_multiplier(7, &config), 12);
        assert_eq!(apply_critical_multiplier(0, &config), 0);
    }
}
