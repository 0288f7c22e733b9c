//! Party creation, rest and reset.

use crate::env::{GameEnv, OracleError};
use crate::state::{Character, ClassKey, DungeonState, EntityId, GamePhase, Party};

use super::{ExecuteError, GameEngine};

impl GameEngine<'_> {
    /// Adds a level-1 character built from the class template.
    ///
    /// The name is trimmed and must not be empty.
    pub fn recruit(
        &mut self,
        env: GameEnv<'_>,
        name: &str,
        class: ClassKey,
    ) -> Result<EntityId, ExecuteError> {
        self.require_phase(GamePhase::PartyCreation)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(ExecuteError::EmptyName);
        }

        let limit = env.config()?.party_limit();
        if self.state.party.len() >= limit {
            return Err(ExecuteError::PartyFull { limit });
        }

        let template = env
            .tables()?
            .class_template(class)
            .ok_or(OracleError::UnknownClass(class))?;
        if template.hp == 0 {
            return Err(OracleError::LifelessClass(class).into());
        }

        let id = self.state.allocate_entity_id();
        let character = Character::from_template(id, name, class, template);
        self.state
            .party
            .push(character)
            .map_err(|_| ExecuteError::PartyFull { limit })?;

        self.advance_nonce();
        Ok(id)
    }

    /// Enters dungeon level 1 at the origin, facing north.
    pub fn embark(&mut self, env: GameEnv<'_>) -> Result<(), ExecuteError> {
        self.require_phase(GamePhase::PartyCreation)?;
        if self.state.party.is_empty() {
            return Err(ExecuteError::EmptyParty);
        }

        let grid = env.map()?.layout(1).ok_or(OracleError::NoLayout(1))?;
        self.state.dungeon = Some(DungeonState::enter(1, grid));
        self.state.phase = GamePhase::Exploring;

        self.advance_nonce();
        Ok(())
    }

    /// Restores living members to full hp and mp. Returns the rested party.
    pub fn rest(&mut self) -> Result<Party, ExecuteError> {
        self.require_phase(GamePhase::Exploring)?;

        self.state.party = self.state.party.rested();
        self.advance_nonce();
        Ok(self.state.party.clone())
    }

    /// Discards the party, dungeon and any session, back to party creation.
    ///
    /// Seed and entity ids keep counting so a reset run never replays or
    /// reuses them.
    pub fn reset(&mut self) {
        self.state.phase = GamePhase::PartyCreation;
        self.state.party = Party::new();
        self.state.dungeon = None;
        self.state.combat = None;
        self.advance_nonce();
    }
}
