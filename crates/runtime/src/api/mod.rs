//! Types exposed to runtime consumers.
mod errors;

pub use errors::{Result, RuntimeError};
