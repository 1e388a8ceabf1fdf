//! Transcript data model.

use chrono::{DateTime, Local};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Admin,
}

impl Author {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone)]
pub struct Message {
    text: String,
    author: Author,
    timestamp: DateTime<Local>,
}

impl Message {
    /// Create a user message stamped with the current wall-clock time.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Author::User)
    }

    /// Create an admin message stamped with the current wall-clock time.
    pub fn admin(text: impl Into<String>) -> Self {
        Self::new(text, Author::Admin)
    }

    fn new(text: impl Into<String>, author: Author) -> Self {
        Self {
            text: text.into(),
            author,
            timestamp: Local::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Hour:minute display label, 24-hour regardless of platform locale default.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Append-only ordered list of messages shown in the chat panel.
///
/// Entries are never edited, reordered, or removed; append order is
/// chronological order.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return a reference to the stored entry.
    pub fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        self.messages.last().unwrap()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Count of entries from the given author.
    pub fn count_by(&self, author: Author) -> usize {
        self.messages.iter().filter(|m| m.author == author).count()
    }
}
