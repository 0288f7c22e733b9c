//! Non-fatal reasons for declining a player action.

use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Why an action was declined.
///
/// These come from stale selections rather than programmer error, so the
/// engine reports them without mutating state or emitting events.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionRejection {
    #[error("actor {0} is missing or defeated")]
    InvalidActor(EntityId),

    #[error("target {0} is missing or already defeated")]
    InvalidTarget(EntityId),

    #[error("actor {actor} needs {required} mp but has {available}")]
    InsufficientResource {
        actor: EntityId,
        required: u32,
        available: u32,
    },
}

impl GameError for ActionRejection {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidActor(_) => "ACTION_INVALID_ACTOR",
            Self::InvalidTarget(_) => "ACTION_INVALID_TARGET",
            Self::InsufficientResource { .. } => "ACTION_INSUFFICIENT_RESOURCE",
        }
    }
}
