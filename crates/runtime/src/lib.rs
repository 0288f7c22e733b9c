//! Runtime orchestration for the dungeon crawler.
//!
//! This crate wires oracle access, the rules engine and a topic-based event
//! bus into a single [`Runtime`] that clients drive one operation at a time.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`oracle`] bundles loaded content into `game-core` oracles
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

pub use api::{Result, RuntimeError};
pub use events::{Event, EventBus, PartyEvent, SessionSummary, Topic};
pub use oracle::OracleManager;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
