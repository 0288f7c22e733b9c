//! Combat resolution math.
//!
//! Pure functions over entity stats. Randomness is injected through
//! [`RandomSource`](crate::env::RandomSource), so every roll is replayable
//! from a seed and tests can script exact samples.
//!
//! # Core Functions
//!
//! - `roll_physical_damage` / `roll_magic_damage`: stat-driven damage
//! - `roll_critical` / `apply_critical_multiplier`: dexterity-driven crits
//! - `roll_healing`: flat heal roll
//! - `roll_monster_damage`: retaliation damage
//! - `apply_damage` / `apply_healing`: clamped HP updates

pub mod critical;
pub mod damage;
pub mod healing;
pub mod rejection;
pub mod result;

#[cfg(test)]
pub(crate) mod testing;

pub use critical::{apply_critical_multiplier, critical_chance, roll_critical};
pub use damage::{
    apply_damage, roll_magic_damage, roll_monster_damage, roll_physical_damage, roll_stat_damage,
};
pub use healing::{apply_healing, roll_healing};
pub use rejection::ActionRejection;
pub use result::{ResolvedAction, SessionOutcome};
