//! Error types for engine operations.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{ClassKey, GamePhase};

/// Errors surfaced while running an operation through the game engine.
///
/// Stale player choices are not errors; they come back as
/// [`ActionOutcome::Declined`](super::ActionOutcome::Declined). Everything
/// here points at a caller bug or broken static data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("operation requires phase {expected}, game is in {actual}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("class {class} has no spell named {spell:?}")]
    UnknownSpell { class: ClassKey, spell: String },

    #[error("game is in combat but no session is active")]
    NoActiveCombat,

    #[error("combat session has concluded; acknowledge it before acting")]
    SessionConcluded,

    #[error("no party member is selected")]
    NothingSelected,

    #[error("no action is chosen for the selected member")]
    NoActionChosen,

    #[error("party is full ({limit} members)")]
    PartyFull { limit: usize },

    #[error("character name must not be empty")]
    EmptyName,

    #[error("cannot embark without party members")]
    EmptyParty,

    #[error("party has not entered the dungeon")]
    NotInDungeon,
}

impl ExecuteError {
    pub(crate) fn wrong_phase(expected: GamePhase, actual: GamePhase) -> Self {
        Self::WrongPhase { expected, actual }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(error) => error.severity(),
            Self::UnknownSpell { .. } | Self::NoActiveCombat | Self::NotInDungeon => {
                ErrorSeverity::Internal
            }
            Self::WrongPhase { .. }
            | Self::SessionConcluded
            | Self::NothingSelected
            | Self::NoActionChosen
            | Self::PartyFull { .. }
            | Self::EmptyName
            | Self::EmptyParty => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(error) => error.error_code(),
            Self::WrongPhase { .. } => "WRONG_PHASE",
            Self::UnknownSpell { .. } => "UNKNOWN_SPELL",
            Self::NoActiveCombat => "NO_ACTIVE_COMBAT",
            Self::SessionConcluded => "SESSION_CONCLUDED",
            Self::NothingSelected => "NOTHING_SELECTED",
            Self::NoActionChosen => "NO_ACTION_CHOSEN",
            Self::PartyFull { .. } => "PARTY_FULL",
            Self::EmptyName => "EMPTY_NAME",
            Self::EmptyParty => "EMPTY_PARTY",
            Self::NotInDungeon => "NOT_IN_DUNGEON",
        }
    }
}
