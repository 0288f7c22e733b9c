//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the rules engine and from runtime assembly so clients
//! can bubble them up with consistent context.
use thiserror::Error;

use game_core::{ErrorSeverity, ExecuteError, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("event buffer size must be greater than zero")]
    InvalidEventBuffer,
}

impl RuntimeError {
    /// Severity of the underlying failure, for logging and retry decisions.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Execute(error) => error.severity(),
            Self::MissingOracles | Self::InvalidEventBuffer => ErrorSeverity::Fatal,
        }
    }
}
