//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use game_core::{ActionRejection, CombatEvent, ExplorationOutcome};

use super::types::{PartyEvent, SessionSummary};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Recruitment, embarking, resting, resets
    Party,
    /// Movement and tile triggers
    Exploration,
    /// Combat resolution steps and session conclusions
    Combat,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Party, Topic::Exploration, Topic::Combat];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Party(PartyEvent),
    Exploration(ExplorationOutcome),
    Combat(CombatEvent),

    /// A player action was rejected without changing anything.
    ActionDeclined(ActionRejection),

    SessionConcluded(SessionSummary),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Party(_) => Topic::Party,
            Event::Exploration(_) => Topic::Exploration,
            Event::Combat(_) | Event::ActionDeclined(_) | Event::SessionConcluded(_) => {
                Topic::Combat
            }
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Channels are created up front, one per topic.
#[derive(Clone)]
pub struct EventBus {
    party: broadcast::Sender<Event>,
    exploration: broadcast::Sender<Event>,
    combat: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero, like [`broadcast::channel`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            party: broadcast::channel(capacity).0,
            exploration: broadcast::channel(capacity).0,
            combat: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Party => &self.party,
            Topic::Exploration => &self.exploration,
            Topic::Combat => &self.combat,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events published after
    /// this call.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_route_to_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut party = bus.subscribe(Topic::Party);
        let mut combat = bus.subscribe(Topic::Combat);

        bus.publish(Event::Party(PartyEvent::Reset));

        assert!(matches!(party.try_recv(), Ok(Event::Party(PartyEvent::Reset))));
        assert!(combat.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        let bus = EventBus::default();
        bus.publish(Event::Combat(CombatEvent::DefeatConcluded));
    }
}
