//! Per-conversation input state.

use parking_lot::Mutex;
use std::collections::HashMap;

pub type ConversationId = i64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    /// Next free-text message is a weight value.
    AwaitingWeight,
}

/// State of every open conversation. Conversations never share state.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    states: Mutex<HashMap<ConversationId, SessionState>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, conv: ConversationId) -> SessionState {
        self.states.lock().get(&conv).copied().unwrap_or_default()
    }

    pub fn set(&self, conv: ConversationId, state: SessionState) {
        let mut states = self.states.lock();
        match state {
            SessionState::Idle => {
                states.remove(&conv);
            }
            other => {
                states.insert(conv, other);
            }
        }
    }

    /// Return the current state and reset the conversation to `Idle`.
    pub fn take(&self, conv: ConversationId) -> SessionState {
        self.states.lock().remove(&conv).unwrap_or_default()
    }
}
