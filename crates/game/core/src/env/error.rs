use crate::error::{ErrorSeverity, GameError};
use crate::state::ClassKey;

/// Errors raised when the environment cannot answer a query the rules need.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("tables oracle not available")]
    TablesNotAvailable,

    #[error("map oracle not available")]
    MapNotAvailable,

    #[error("rng oracle not available")]
    RngNotAvailable,

    #[error("config oracle not available")]
    ConfigNotAvailable,

    #[error("class {0} has no template")]
    UnknownClass(ClassKey),

    #[error("monster table is empty")]
    NoMonsters,

    #[error("no dungeon layout for depth {0}")]
    NoLayout(u32),

    #[error("class {0} has no hit points")]
    LifelessClass(ClassKey),

    #[error("monster template #{0} has no hit points")]
    LifelessMonster(usize),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownClass(_)
            | Self::NoMonsters
            | Self::NoLayout(_)
            | Self::LifelessClass(_)
            | Self::LifelessMonster(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TablesNotAvailable => "TABLES_NOT_AVAILABLE",
            Self::MapNotAvailable => "MAP_NOT_AVAILABLE",
            Self::RngNotAvailable => "RNG_NOT_AVAILABLE",
            Self::ConfigNotAvailable => "CONFIG_NOT_AVAILABLE",
            Self::UnknownClass(_) => "UNKNOWN_CLASS",
            Self::NoMonsters => "NO_MONSTERS",
            Self::NoLayout(_) => "NO_LAYOUT",
            Self::LifelessClass(_) => "LIFELESS_CLASS",
            Self::LifelessMonster(_) => "LIFELESS_MONSTER",
        }
    }
}
