//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. [`crate::ExecuteError`], [`crate::MapError`])
//! live next to the code that raises them. This module provides the shared
//! classification used to decide how a caller should react.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each subsystem has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Stale input is not an error**: rejected player choices surface as
//!   [`crate::ActionRejection`] inside a normal outcome, never as `Err`

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can re-present the choice and try again
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: inconsistent static data (tables, layouts) that needs fixing
/// - **Fatal**: the engine cannot continue with the current environment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    ///
    /// Examples: target already defeated, not enough mana
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: party full, operation issued in the wrong game phase
    Validation,

    /// Internal error - static data does not match what the rules expect.
    ///
    /// Examples: spell missing from the class spell table, malformed layout
    Internal,

    /// Fatal error - required oracle missing.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a data or configuration defect.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for metrics and for asserting on error kinds in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
