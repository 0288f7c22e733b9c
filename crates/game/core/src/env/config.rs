use crate::config::GameConfig;

/// Oracle exposing balance constants to the rules.
pub trait ConfigOracle: Send + Sync {
    /// Mana cost shared by every spell.
    fn spell_cost(&self) -> u32;

    /// Critical chance before the dexterity bonus.
    fn crit_base_chance(&self) -> f64;

    /// Multiplier applied to critical hits.
    fn crit_multiplier(&self) -> f64;

    /// Flat bonus added to magic damage.
    fn magic_damage_bonus(&self) -> u32;

    /// Maximum number of party members.
    fn party_limit(&self) -> usize;
}

impl ConfigOracle for GameConfig {
    fn spell_cost(&self) -> u32 {
        self.spell_cost
    }

    fn crit_base_chance(&self) -> f64 {
        self.crit_base_chance
    }

    fn crit_multiplier(&self) -> f64 {
        self.crit_multiplier
    }

    fn magic_damage_bonus(&self) -> u32 {
        self.magic_damage_bonus
    }

    fn party_limit(&self) -> usize {
        GameConfig::party_limit(self)
    }
}
