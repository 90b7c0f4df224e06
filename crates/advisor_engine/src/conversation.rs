//! Conversation log - append-only message history
//!
//! Single source of truth for the visible transcript. Messages are never
//! reordered or removed; every mutation is an append, and every append
//! notifies observers.

use advisor_core::Message;
use tokio::sync::broadcast;

use crate::events::EngineEvent;

/// Ordered, append-only sequence of messages, seeded with the greeting.
#[derive(Debug)]
pub struct ConversationLog {
    messages: Vec<Message>,
    events: broadcast::Sender<EngineEvent>,
}

impl ConversationLog {
    /// Create a log seeded with the fixed assistant greeting.
    pub fn new(events: broadcast::Sender<EngineEvent>) -> Self {
        let mut log = Self {
            messages: Vec::new(),
            events,
        };
        log.append(Message::welcome());
        log
    }

    /// Add one message to the end and notify observers. Content is not
    /// validated here; input trimming is the caller's concern.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        // Absent or lagging receivers must never fail an append.
        let _ = self.events.send(EngineEvent::MessageAppended);
    }

    /// The full ordered sequence, cloned for rendering.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
