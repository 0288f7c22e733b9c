//! Topic-based event bus for runtime events.
//!
//! The runtime resolves each operation synchronously and then publishes what
//! happened, in order, to the topic it belongs to. Consumers subscribe only
//! to the topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{PartyEvent, SessionSummary};
