//! High-level runtime orchestrator.
//!
//! The runtime owns the authoritative [`GameState`], runs every operation
//! through [`GameEngine`] against the loaded oracles, and publishes what
//! happened on the [`EventBus`]. Resolution is synchronous, so callers read
//! the returned outcome directly and subscribers receive the same steps in
//! order.

use tokio::sync::broadcast;
use tracing::{debug, info};

use game_core::{
    ActionOutcome, Character, ClassKey, CombatEvent, EntityId, ExplorationOutcome, GameEngine,
    GameState, Monster, Party, SelectionOutcome, SessionOutcome, Step, Turn,
};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, PartyEvent, SessionSummary, Topic};
use crate::oracle::OracleManager;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Seed for a fresh run; a random one is drawn when unset.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            event_buffer_size: 100,
        }
    }
}

/// Main runtime that drives a single run.
pub struct Runtime {
    state: GameState,
    oracles: OracleManager,
    events: EventBus,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Subscribe to one event topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    /// Cloneable handle to the event bus.
    pub fn event_bus(&self) -> EventBus {
        self.events.clone()
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Immutable copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn seed(&self) -> u64 {
        self.state.game_seed
    }

    pub fn alive_party(&self) -> Vec<Character> {
        self.state.alive_party().into_iter().cloned().collect()
    }

    pub fn alive_monsters(&self) -> Vec<Monster> {
        self.state.alive_monsters().into_iter().cloned().collect()
    }

    // ------------------------------------------------------------------
    // Party
    // ------------------------------------------------------------------

    pub fn recruit(&mut self, name: &str, class: ClassKey) -> Result<EntityId> {
        let env = self.oracles.as_game_env();
        let id = GameEngine::new(&mut self.state).recruit(env, name, class)?;

        let name = self
            .state
            .party
            .get(id)
            .map(|member| member.name.clone())
            .unwrap_or_default();
        info!(%id, %name, %class, "recruited party member");
        self.events
            .publish(Event::Party(PartyEvent::Recruited { id, name, class }));
        Ok(id)
    }

    pub fn embark(&mut self) -> Result<()> {
        let env = self.oracles.as_game_env();
        GameEngine::new(&mut self.state).embark(env)?;

        let depth = self.depth();
        info!(depth, members = self.state.party.len(), "party embarked");
        self.events
            .publish(Event::Party(PartyEvent::Embarked { depth }));
        Ok(())
    }

    /// Restores alive members to full hp and mp.
    pub fn rest(&mut self) -> Result<Party> {
        let party = GameEngine::new(&mut self.state).rest()?;
        info!(alive = party.alive_count(), "party rested");
        self.events.publish(Event::Party(PartyEvent::Rested {
            party: party.clone(),
        }));
        Ok(party)
    }

    /// Discards the run and returns to party creation. The seed is kept.
    pub fn reset(&mut self) {
        GameEngine::new(&mut self.state).reset();
        info!("run reset");
        self.events.publish(Event::Party(PartyEvent::Reset));
    }

    // ------------------------------------------------------------------
    // Exploration
    // ------------------------------------------------------------------

    pub fn turn(&mut self, turn: Turn) -> Result<ExplorationOutcome> {
        let outcome = GameEngine::new(&mut self.state).turn(turn)?;
        self.publish_exploration(&outcome);
        Ok(outcome)
    }

    pub fn step(&mut self, step: Step) -> Result<ExplorationOutcome> {
        let env = self.oracles.as_game_env();
        let outcome = GameEngine::new(&mut self.state).step(env, step)?;
        self.publish_exploration(&outcome);
        Ok(outcome)
    }

    fn publish_exploration(&self, outcome: &ExplorationOutcome) {
        match outcome {
            ExplorationOutcome::EncounterStarted { position, monsters } => {
                let names: Vec<&str> = monsters.iter().map(|m| m.name.as_str()).collect();
                info!(x = position.x, y = position.y, ?names, "encounter started");
            }
            ExplorationOutcome::TreasureFound { gold, share, .. } => {
                info!(gold, share, "treasure found");
            }
            ExplorationOutcome::Descended { depth } => info!(depth, "descended"),
            ExplorationOutcome::Blocked { .. } => debug!("movement blocked"),
            ExplorationOutcome::Moved { .. } | ExplorationOutcome::Turned { .. } => {}
        }
        self.events.publish(Event::Exploration(outcome.clone()));
    }

    // ------------------------------------------------------------------
    // Combat
    // ------------------------------------------------------------------

    pub fn attack(&mut self, attacker: EntityId, target: EntityId) -> Result<ActionOutcome> {
        let env = self.oracles.as_game_env();
        let outcome = GameEngine::new(&mut self.state).attack(env, attacker, target)?;
        self.publish_action(&outcome);
        Ok(outcome)
    }

    pub fn cast_spell(
        &mut self,
        caster: EntityId,
        spell: &str,
        target: EntityId,
    ) -> Result<ActionOutcome> {
        let env = self.oracles.as_game_env();
        let outcome = GameEngine::new(&mut self.state).cast_spell(env, caster, spell, target)?;
        self.publish_action(&outcome);
        Ok(outcome)
    }

    pub fn select_member(&mut self, member: EntityId) -> Result<SelectionOutcome> {
        let outcome = GameEngine::new(&mut self.state).select_member(member)?;
        self.publish_selection(&outcome);
        Ok(outcome)
    }

    pub fn choose_attack(&mut self) -> Result<SelectionOutcome> {
        let outcome = GameEngine::new(&mut self.state).choose_attack()?;
        self.publish_selection(&outcome);
        Ok(outcome)
    }

    pub fn choose_spell(&mut self, spell: &str) -> Result<SelectionOutcome> {
        let env = self.oracles.as_game_env();
        let outcome = GameEngine::new(&mut self.state).choose_spell(env, spell)?;
        self.publish_selection(&outcome);
        Ok(outcome)
    }

    pub fn choose_target(&mut self, target: EntityId) -> Result<ActionOutcome> {
        let env = self.oracles.as_game_env();
        let outcome = GameEngine::new(&mut self.state).choose_target(env, target)?;
        self.publish_action(&outcome);
        Ok(outcome)
    }

    pub fn cancel_selection(&mut self) -> Result<()> {
        GameEngine::new(&mut self.state).cancel_selection()?;
        debug!("selection cancelled");
        Ok(())
    }

    /// Leaves a concluded session, returning its outcome.
    ///
    /// `None` while the fight is still going or outside combat.
    pub fn conclude_if_session_over(&mut self) -> Result<Option<SessionOutcome>> {
        let rounds = self.state.combat.as_ref().map_or(0, |combat| combat.round);
        let Some(outcome) = GameEngine::new(&mut self.state).conclude_if_session_over()? else {
            return Ok(None);
        };

        let (total_xp, total_gold) = match &outcome {
            SessionOutcome::Victory {
                total_xp,
                total_gold,
                ..
            } => (*total_xp, *total_gold),
            SessionOutcome::Defeat => (0, 0),
        };
        info!(verdict = %outcome.verdict(), rounds, phase = %self.state.phase, "session concluded");
        self.events.publish(Event::SessionConcluded(SessionSummary {
            verdict: outcome.verdict(),
            total_xp,
            total_gold,
            rounds,
        }));
        Ok(Some(outcome))
    }

    fn publish_selection(&self, outcome: &SelectionOutcome) {
        if let SelectionOutcome::Declined(rejection) = outcome {
            debug!(%rejection, "selection declined");
            self.events.publish(Event::ActionDeclined(rejection.clone()));
        }
    }

    fn publish_action(&self, outcome: &ActionOutcome) {
        let report = match outcome {
            ActionOutcome::Declined(rejection) => {
                debug!(%rejection, "action declined");
                self.events.publish(Event::ActionDeclined(rejection.clone()));
                return;
            }
            ActionOutcome::Resolved(report) => report,
        };

        debug!(
            actor = %report.action.actor(),
            target = %report.action.target(),
            events = report.events.len(),
            "action resolved"
        );
        for event in &report.events {
            match event {
                CombatEvent::VictoryConcluded {
                    total_xp,
                    total_gold,
                    level_ups,
                } => {
                    info!(total_xp, total_gold, "victory");
                    for level_up in level_ups {
                        info!(name = %level_up.name, level = level_up.level, "level up");
                    }
                }
                CombatEvent::DefeatConcluded => info!("party defeated"),
                _ => {}
            }
            self.events.publish(Event::Combat(event.clone()));
        }
    }

    fn depth(&self) -> u32 {
        self.state.dungeon.as_ref().map_or(0, |dungeon| dungeon.depth)
    }
}

/// Builder for constructing a runtime with custom configuration
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    initial_state: Option<GameState>,
    oracles: Option<OracleManager>,
}

impl RuntimeBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            initial_state: None,
            oracles: None,
        }
    }

    /// Set the runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Resume from an existing state instead of a fresh run.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the oracle manager (required)
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        if self.config.event_buffer_size == 0 {
            return Err(RuntimeError::InvalidEventBuffer);
        }

        let state = match self.initial_state {
            Some(state) => state,
            None => GameState::with_seed(self.config.seed.unwrap_or_else(rand::random)),
        };
        info!(seed = state.game_seed, phase = %state.phase, "runtime ready");

        Ok(Runtime {
            state,
            oracles,
            events: EventBus::with_capacity(self.config.event_buffer_size),
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
