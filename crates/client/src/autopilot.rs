//! Headless driver that plays a run with simple random choices.
//!
//! Exploration wanders forward and turns at walls, resting whenever a member
//! drops below half health. In combat a random living member acts: healers
//! patch the most wounded ally, casters sometimes throw a damage spell, and
//! everyone else attacks a random monster. Every action goes through the
//! select / choose / target flow a player would use.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use game_core::{
    ActionOutcome, Character, ExplorationOutcome, GamePhase, SelectionOutcome, SessionOutcome,
    SpellDefinition, SpellEffect, Step, TablesOracle, Turn,
};
use runtime::Runtime;

/// Counters collected while driving a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub commands: u32,
    pub encounters: u32,
    pub victories: u32,
    pub defeats: u32,
    pub treasure_gold: u64,
    pub rests: u32,
    pub declined: u32,
}

pub struct Autopilot {
    rng: StdRng,
    max_steps: u32,
    stats: RunStats,
}

impl Autopilot {
    pub fn new(seed: u64, max_steps: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_steps,
            stats: RunStats::default(),
        }
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Issues one command. Returns `false` once the run is over or the
    /// command budget is spent.
    pub fn step(&mut self, runtime: &mut Runtime) -> Result<bool> {
        if self.stats.commands >= self.max_steps {
            return Ok(false);
        }

        match runtime.state().phase {
            GamePhase::Exploring => self.explore(runtime)?,
            GamePhase::Combat => self.fight(runtime)?,
            GamePhase::PartyCreation | GamePhase::GameOver => return Ok(false),
        }
        self.stats.commands += 1;
        Ok(true)
    }

    fn explore(&mut self, runtime: &mut Runtime) -> Result<()> {
        if runtime.alive_party().iter().any(is_wounded) {
            runtime.rest()?;
            self.stats.rests += 1;
            return Ok(());
        }

        let outcome = match self.rng.gen_range(0..10) {
            0 => runtime.turn(Turn::Left)?,
            1 => runtime.turn(Turn::Right)?,
            _ => runtime.step(Step::Forward)?,
        };

        match outcome {
            ExplorationOutcome::Blocked { .. } => {
                let turn = if self.rng.gen_bool(0.5) { Turn::Left } else { Turn::Right };
                runtime.turn(turn)?;
            }
            ExplorationOutcome::EncounterStarted { .. } => self.stats.encounters += 1,
            ExplorationOutcome::TreasureFound { gold, .. } => self.stats.treasure_gold += gold,
            ExplorationOutcome::Turned { .. }
            | ExplorationOutcome::Moved { .. }
            | ExplorationOutcome::Descended { .. } => {}
        }
        Ok(())
    }

    fn fight(&mut self, runtime: &mut Runtime) -> Result<()> {
        if let Some(outcome) = runtime.conclude_if_session_over()? {
            match outcome {
                SessionOutcome::Victory { .. } => self.stats.victories += 1,
                SessionOutcome::Defeat => self.stats.defeats += 1,
            }
            return Ok(());
        }

        let party = runtime.alive_party();
        let monsters = runtime.alive_monsters();
        if party.is_empty() || monsters.is_empty() {
            return Ok(());
        }

        let actor = &party[self.rng.gen_range(0..party.len())];
        let spell_cost = runtime.oracles().config().spell_cost;
        let spells: Vec<SpellDefinition> = if actor.mp.current >= spell_cost {
            runtime.oracles().tables().spells(actor.class).to_vec()
        } else {
            Vec::new()
        };

        let heal = spells.iter().find(|spell| spell.effect == SpellEffect::Heal);
        let damage = spells.iter().find(|spell| spell.effect == SpellEffect::Damage);
        let most_wounded = party
            .iter()
            .filter(|member| is_wounded(member))
            .min_by_key(|member| member.hp.current);
        let foe = monsters[self.rng.gen_range(0..monsters.len())].id;

        if let SelectionOutcome::Declined(_) = runtime.select_member(actor.id)? {
            self.stats.declined += 1;
            return Ok(());
        }

        let (selection, target) = match (heal, damage, most_wounded) {
            (Some(spell), _, Some(patient)) => (runtime.choose_spell(&spell.name)?, patient.id),
            (_, Some(spell), _) if self.rng.gen_bool(0.5) => {
                (runtime.choose_spell(&spell.name)?, foe)
            }
            _ => (runtime.choose_attack()?, foe),
        };
        if let SelectionOutcome::Declined(_) = selection {
            self.stats.declined += 1;
            runtime.cancel_selection()?;
            return Ok(());
        }

        if let ActionOutcome::Declined(_) = runtime.choose_target(target)? {
            self.stats.declined += 1;
            runtime.cancel_selection()?;
        }
        Ok(())
    }
}

fn is_wounded(member: &Character) -> bool {
    member.hp.current * 2 < member.hp.maximum
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ClassKey, DungeonGrid, LayoutMaps};
    use runtime::{OracleManager, RuntimeConfig};

    fn embarked(rows: &[&str], seed: u64) -> Runtime {
        let maps = LayoutMaps::single(DungeonGrid::from_rows(rows).unwrap());
        let mut runtime = Runtime::builder()
            .config(RuntimeConfig {
                seed: Some(seed),
                ..RuntimeConfig::default()
            })
            .oracles(OracleManager::classic(maps))
            .build()
            .unwrap();
        runtime.recruit("Aria", ClassKey::Fighter).unwrap();
        runtime.recruit("Bram", ClassKey::Priest).unwrap();
        runtime.embark().unwrap();
        runtime
    }

    #[test]
    fn respects_command_budget() {
        let mut runtime = embarked(&["...", "...", "..."], 1);
        let mut pilot = Autopilot::new(1, 25);
        while pilot.step(&mut runtime).unwrap() {}
        assert_eq!(pilot.stats().commands, 25);
    }

    #[test]
    fn fights_every_encounter_it_enters() {
        let mut runtime = embarked(&["EEE", "EEE", "EEE"], 8);
        let mut pilot = Autopilot::new(8, 2_000);
        while pilot.step(&mut runtime).unwrap() {}

        let stats = pilot.stats();
        assert!(stats.encounters > 0);
        assert!(stats.victories + stats.defeats <= stats.encounters);
        assert!(stats.victories + stats.defeats + 1 >= stats.encounters);
        assert_ne!(runtime.state().phase, GamePhase::PartyCreation);
    }

    #[test]
    fn stops_when_the_party_is_gone() {
        let mut runtime = embarked(&["."], 3);
        runtime.reset();
        let mut pilot = Autopilot::new(3, 10);
        assert!(!pilot.step(&mut runtime).unwrap());
        assert_eq!(pilot.stats().commands, 0);
    }
}
