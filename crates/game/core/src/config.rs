/// Balance constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Mana spent by every spell, regardless of class or effect.
    pub spell_cost: u32,
    /// Critical chance before the dexterity bonus.
    pub crit_base_chance: f64,
    /// Damage multiplier applied on a critical hit.
    pub crit_multiplier: f64,
    /// Flat bonus added to magic damage rolls.
    pub magic_damage_bonus: u32,
    /// Party size cap, never above [`GameConfig::MAX_PARTY_SIZE`].
    pub max_party_size: usize,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Capacity of the party roster.
    pub const MAX_PARTY_SIZE: usize = 6;
    /// Largest group a single encounter can spawn.
    pub const MAX_MONSTERS: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SPELL_COST: u32 = 3;
    pub const DEFAULT_CRIT_BASE_CHANCE: f64 = 0.15;
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.8;
    pub const DEFAULT_MAGIC_DAMAGE_BONUS: u32 = 5;

    pub fn new() -> Self {
        Self {
            spell_cost: Self::DEFAULT_SPELL_COST,
            crit_base_chance: Self::DEFAULT_CRIT_BASE_CHANCE,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            magic_damage_bonus: Self::DEFAULT_MAGIC_DAMAGE_BONUS,
            max_party_size: Self::MAX_PARTY_SIZE,
        }
    }

    pub fn with_spell_cost(mut self, spell_cost: u32) -> Self {
        self.spell_cost = spell_cost;
        self
    }

    /// Party cap clamped to the roster capacity.
    pub fn party_limit(&self) -> usize {
        self.max_party_size.clamp(1, Self::MAX_PARTY_SIZE)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_balance_table() {
        let config = GameConfig::default();
        assert_eq!(config.spell_cost, 3);
        assert_eq!(config.crit_base_chance, 0.15);
        assert_eq!(config.crit_multiplier, 1.8);
        assert_eq!(config.party_limit(), 6);
    }

    #[test]
    fn party_limit_never_exceeds_capacity() {
        let config = GameConfig {
            max_party_size: 40,
            ..GameConfig::default()
        };
        assert_eq!(config.party_limit(), GameConfig::MAX_PARTY_SIZE);
    }
}
