//! Operation pipeline over [`GameState`].
//!
//! The [`GameEngine`] is the only writer of game state. Each operation checks
//! the game phase, validates its inputs, resolves every consequence
//! synchronously and then advances the nonce so the next operation rolls
//! from fresh seeds. Declined actions leave the state untouched, nonce
//! included.

mod combat;
mod errors;
mod events;
mod exploration;
mod party;
mod selection;


pub use errors::ExecuteError;
pub use events::{
    ActionOutcome, ActionReport, CombatEvent, ExplorationOutcome, SelectionOutcome, Step, Turn,
};

use crate::state::{CombatState, DungeonState, GamePhase, GameState};

/// Game engine that owns mutation of a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    fn require_phase(&self, expected: GamePhase) -> Result<(), ExecuteError> {
        if self.state.phase != expected {
            return Err(ExecuteError::wrong_phase(expected, self.state.phase));
        }
        Ok(())
    }

    fn combat(&self) -> Result<&CombatState, ExecuteError> {
        self.require_phase(GamePhase::Combat)?;
        self.state.combat.as_ref().ok_or(ExecuteError::NoActiveCombat)
    }

    fn combat_mut(&mut self) -> Result<&mut CombatState, ExecuteError> {
        self.require_phase(GamePhase::Combat)?;
        self.state.combat.as_mut().ok_or(ExecuteError::NoActiveCombat)
    }

    /// Active session that still accepts player input.
    fn open_combat(&self) -> Result<&CombatState, ExecuteError> {
        let combat = self.combat()?;
        if combat.phase.is_concluded() {
            return Err(ExecuteError::SessionConcluded);
        }
        Ok(combat)
    }

    fn dungeon_mut(&mut self) -> Result<&mut DungeonState, ExecuteError> {
        self.state.dungeon.as_mut().ok_or(ExecuteError::NotInDungeon)
    }

    #[inline]
    fn advance_nonce(&mut self) {
        self.state.nonce += 1;
    }
}
