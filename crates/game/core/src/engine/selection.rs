//! Two-step player selection: member, then action, then target.
//!
//! Selection steps never roll dice or touch combatants, so they leave the
//! nonce alone. Only `choose_target` executes anything.

use crate::combat::ActionRejection;
use crate::env::GameEnv;
use crate::state::{ActionSelection, EntityId, PendingAction};

use super::{ActionOutcome, ExecuteError, GameEngine, SelectionOutcome};

impl GameEngine<'_> {
    /// Picks the party member who will act, replacing any earlier choice.
    pub fn select_member(&mut self, member: EntityId) -> Result<SelectionOutcome, ExecuteError> {
        self.open_combat()?;
        if !self.state.party.get(member).is_some_and(|m| m.is_alive()) {
            return Ok(SelectionOutcome::Declined(ActionRejection::InvalidActor(member)));
        }

        self.combat_mut()?.selection = ActionSelection::MemberSelected { member };
        Ok(SelectionOutcome::Updated)
    }

    /// Chooses a physical attack for the selected member.
    pub fn choose_attack(&mut self) -> Result<SelectionOutcome, ExecuteError> {
        let member = self.selected_member()?;
        self.combat_mut()?.selection = ActionSelection::ActionChosen {
            member,
            action: PendingAction::Attack,
        };
        Ok(SelectionOutcome::Updated)
    }

    /// Chooses a spell for the selected member.
    ///
    /// Declined when the member cannot afford it; an unknown spell for the
    /// member's class is an error.
    pub fn choose_spell(
        &mut self,
        env: GameEnv<'_>,
        spell: &str,
    ) -> Result<SelectionOutcome, ExecuteError> {
        let member_id = self.selected_member()?;
        let Some(member) = self.state.party.get(member_id).filter(|m| m.is_alive()) else {
            return Ok(SelectionOutcome::Declined(ActionRejection::InvalidActor(member_id)));
        };

        let definition = env.tables()?.spell(member.class, spell).ok_or_else(|| {
            ExecuteError::UnknownSpell {
                class: member.class,
                spell: spell.to_owned(),
            }
        })?;

        let cost = env.config()?.spell_cost();
        if member.mp.current < cost {
            return Ok(SelectionOutcome::Declined(
                ActionRejection::InsufficientResource {
                    actor: member_id,
                    required: cost,
                    available: member.mp.current,
                },
            ));
        }

        self.combat_mut()?.selection = ActionSelection::ActionChosen {
            member: member_id,
            action: PendingAction::CastSpell {
                spell: definition.name.clone(),
            },
        };
        Ok(SelectionOutcome::Updated)
    }

    /// Executes the chosen action against `target`.
    ///
    /// A declined execution keeps the selection so the player can pick
    /// another target.
    pub fn choose_target(
        &mut self,
        env: GameEnv<'_>,
        target: EntityId,
    ) -> Result<ActionOutcome, ExecuteError> {
        let (member, action) = match &self.open_combat()?.selection {
            ActionSelection::ActionChosen { member, action } => (*member, action.clone()),
            ActionSelection::MemberSelected { .. } => return Err(ExecuteError::NoActionChosen),
            ActionSelection::Idle => return Err(ExecuteError::NothingSelected),
        };

        match action {
            PendingAction::Attack => self.attack(env, member, target),
            PendingAction::CastSpell { spell } => self.cast_spell(env, member, &spell, target),
        }
    }

    /// Drops the pending selection without any other effect.
    pub fn cancel_selection(&mut self) -> Result<(), ExecuteError> {
        self.combat_mut()?.selection = ActionSelection::Idle;
        Ok(())
    }

    fn selected_member(&self) -> Result<EntityId, ExecuteError> {
        match self.open_combat()?.selection {
            ActionSelection::MemberSelected { member }
            | ActionSelection::ActionChosen { member, .. } => Ok(member),
            ActionSelection::Idle => Err(ExecuteError::NothingSelected),
        }
    }
}
