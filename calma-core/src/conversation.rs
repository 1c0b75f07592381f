use chrono::{Local, NaiveDateTime};
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
pub enum Role {
    User,
    Assistant,
}

/// One line of the chat transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub role: Role,
    pub text: String,
    pub at: NaiveDateTime,
}

impl ChatEntry {
    /// Local time of the message, `HH:MM`.
    pub fn timestamp(&self) -> String {
        self.at.format("%H:%M").to_string()
    }
}

/// Ordered chat transcript for a session. Grows without bound until cleared.
#[derive(Debug, Default)]
pub struct ConversationLog {
    entries: Vec<ChatEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, role: Role, text: &str) -> ChatEntry {
        self.append_at(role, text, Local::now().naive_local())
    }

    pub fn append_at(&mut self, role: Role, text: &str, at: NaiveDateTime) -> ChatEntry {
        let entry = ChatEntry {
            role,
            text: text.to_string(),
            at,
        };
        self.entries.push(entry.clone());
        entry
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn all(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
