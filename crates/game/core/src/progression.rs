//! Experience thresholds and level-up application.
//!
//! Level-ups are pure: they take a character and its class template and
//! return the grown character. The catch-up loop reports one [`LevelUp`] per
//! level gained so callers can surface each step.

use crate::env::ClassTemplate;
use crate::state::{Character, EntityId};

/// A single level gained by a character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    pub character: EntityId,
    pub name: String,
    /// Level reached.
    pub level: u32,
}

/// `floor(100 * 1.5^(level - 1))`.
///
/// The xp needed to reach `level` from `level - 1`, so a level-1 character
/// advances once its xp reaches `xp_threshold(2) = 150`. Saturates at
/// `u64::MAX`, which is treated as unreachable.
pub fn xp_threshold(level: u32) -> u64 {
    let exponent = i32::try_from(level).unwrap_or(i32::MAX).saturating_sub(1);
    (100.0 * 1.5_f64.powi(exponent)).floor() as u64
}

/// Whether the character's xp clears the threshold for the next level.
pub fn can_level_up(character: &Character) -> bool {
    let Some(next) = character.level.checked_add(1) else {
        return false;
    };
    let threshold = xp_threshold(next);
    threshold != u64::MAX && character.xp >= threshold
}

/// Growth for one stat: 2 when the class base exceeds 12, else 1.
#[inline]
fn stat_gain(base: u32) -> u32 {
    if base > 12 { 2 } else { 1 }
}

/// Applies at most one level-up.
///
/// Returns an unchanged copy when xp does not clear the next threshold, so
/// repeated calls past that point are no-ops.
///
/// # Growth
///
/// ```text
/// max_hp += floor(base_hp / 2) + 2    (hp refilled)
/// max_mp += floor(base_mp / 2) + 1    (mp refilled)
/// str/int/dex += 2 if base > 12 else 1
/// ```
pub fn apply_level_up(character: &Character, template: &ClassTemplate) -> Character {
    let mut next = character.clone();
    if !can_level_up(character) {
        return next;
    }

    next.level += 1;
    next.hp.grow(template.hp / 2 + 2);
    next.mp.grow(template.mp / 2 + 1);
    next.strength += stat_gain(template.strength);
    next.intellect += stat_gain(template.intellect);
    next.dexterity += stat_gain(template.dexterity);
    next
}

/// Applies level-ups until xp no longer clears the next threshold.
pub fn level_up_fully(character: &Character, template: &ClassTemplate) -> (Character, Vec<LevelUp>) {
    let mut current = character.clone();
    let mut gained = Vec::new();

    while can_level_up(&current) {
        current = apply_level_up(&current, template);
        gained.push(LevelUp {
            character: current.id,
            name: current.name.clone(),
            level: current.level,
        });
    }

    (current, gained)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ClassKey;

    fn mage_template() -> ClassTemplate {
        ClassTemplate::new("Mage", 6, 10, 8, 16, 10)
    }

    fn mage(xp: u64) -> Character {
        let mut mage = Character::from_template(EntityId(3), "Cyra", ClassKey::Mage, &mage_template());
        mage.xp = xp;
        mage
    }

    #[test]
    fn thresholds_grow_by_half() {
        assert_eq!(xp_threshold(1), 100);
        assert_eq!(xp_threshold(2), 150);
        assert_eq!(xp_threshold(3), 225);
        assert_eq!(xp_threshold(4), 337);
        assert!((1..30).all(|level| xp_threshold(level) < xp_threshold(level + 1)));
    }

    #[test]
    fn level_up_grows_per_class_base() {
        let mut wounded = mage(150);
        wounded.hp.drain(4);
        wounded.mp.drain(10);

        let grown = apply_level_up(&wounded, &mage_template());
        assert_eq!(grown.level, 2);
        assert_eq!(grown.hp.maximum, 6 + 3 + 2);
        assert!(grown.hp.is_full());
        assert_eq!(grown.mp.maximum, 10 + 5 + 1);
        assert!(grown.mp.is_full());
        // intellect base 16 > 12 grows by 2; the rest by 1
        assert_eq!(grown.intellect, 18);
        assert_eq!(grown.strength, 9);
        assert_eq!(grown.dexterity, 11);
    }

    #[test]
    fn below_threshold_is_unchanged() {
        let apprentice = mage(149);
        assert_eq!(apply_level_up(&apprentice, &mage_template()), apprentice);
    }

    #[test]
    fn level_up_is_idempotent_once_caught_up() {
        let (caught_up, _) = level_up_fully(&mage(1_000), &mage_template());
        let again = apply_level_up(&caught_up, &mage_template());
        assert_eq!(again, caught_up);
        assert_eq!(apply_level_up(&again, &mage_template()), caught_up);
    }

    #[test]
    fn loop_matches_repeated_single_steps() {
        let template = mage_template();
        let start = mage(600);

        let (looped, gained) = level_up_fully(&start, &template);
        // 150, 225, 337, 506 cleared; 759 not
        assert_eq!(gained.len(), 4);
        assert_eq!(looped.level, 5);

        let mut stepped = start;
        for _ in 0..gained.len() {
            stepped = apply_level_up(&stepped, &template);
        }
        assert_eq!(stepped, looped);
    }

    #[test]
    fn each_level_is_reported() {
        let (_, gained) = level_up_fully(&mage(300), &mage_template());
        let levels: Vec<u32> = gained.iter().map(|level_up| level_up.level).collect();
        assert_eq!(levels, vec![2, 3]);
        assert!(gained.iter().all(|level_up| level_up.name == "Cyra"));
    }

    #[test]
    fn unreachable_threshold_stops_loop() {
        let (capped, _) = level_up_fully(&mage(u64::MAX), &mage_template());
        assert!(!can_level_up(&capped));
    }
}
