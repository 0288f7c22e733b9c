//! Healing rolls and application.

use crate::env::RandomSource;

/// Smallest possible heal.
pub const HEAL_BASE: u32 = 10;
/// Width of the heal roll.
pub const HEAL_SPREAD: u32 = 10;

/// Roll `floor(random() * 10) + 10`, an integer in `[10, 19]`.
pub fn roll_healing(rng: &mut (impl RandomSource + ?Sized)) -> u32 {
    (rng.next_unit() * HEAL_SPREAD as f64).floor() as u32 + HEAL_BASE
}

/// Apply healing to current HP.
///
/// # Returns
///
/// New HP value (clamped to `max_hp`)
pub fn apply_healing(current_hp: u32, max_hp: u32, healing: u32) -> u32 {
    current_hp.saturating_add(healing).min(max_hp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::testing::Script;

    #[test]
    fn healing_spans_ten_to_nineteen() {
        assert_eq!(roll_healing(&mut Script::new([0.0])), 10);
        assert_eq!(roll_healing(&mut Script::new([0.999_999])), 19);
    }

    #[test]
    fn healing_never_exceeds_maximum() {
        assert_eq!(apply_healing(4, 12, 19), 12);
        assert_eq!(apply_healing(0, 12, 10), 10);
    }
}
