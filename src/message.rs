//! Chat message data contract and transcript.
//!
//! [`Message`] is the single record shape shared by every view in the crate.
//! Components never interpret it beyond handing it to the bubble renderer.
//! [`Transcript`] owns an ordered list of messages and guarantees that every
//! [`MessageId`] appears at most once, which is what makes the id usable as a
//! render key.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Stable identity of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System prompt.
    System,
    /// User message.
    User,
    /// Assistant response.
    Assistant,
}

impl MessageRole {
    /// Lowercase name, as used in serialized form and in `data-role`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One chat utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier, used as the render key.
    #[serde(default)]
    pub id: MessageId,
    /// Role of the message author.
    pub role: MessageRole,
    /// Plain text content.
    pub content: String,
    /// Creation time.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a message with a fresh id.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Replace the id.
    #[must_use]
    pub fn with_id(mut self, id: MessageId) -> Self {
        self.id = id;
        self
    }
}

/// Ordered list of messages with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript that starts with a system prompt.
    pub fn with_system_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(prompt)],
        }
    }

    /// Build a transcript from existing messages, rejecting duplicate ids.
    pub fn from_messages(messages: Vec<Message>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(messages.len());
        for message in &messages {
            if !seen.insert(message.id) {
                return Err(Error::DuplicateMessageId(message.id));
            }
        }
        Ok(Self { messages })
    }

    /// Load a transcript from a JSON file containing an array of messages.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let messages: Vec<Message> = serde_json::from_str(&raw)?;
        Self::from_messages(messages)
    }

    /// Serialize as a pretty-printed JSON array.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }

    /// Append a message. The transcript is left untouched on error.
    pub fn push(&mut self, message: Message) -> Result<()> {
        if self.contains(message.id) {
            return Err(Error::DuplicateMessageId(message.id));
        }
        self.messages.push(message);
        Ok(())
    }

    /// Whether a message with this id is present.
    pub fn contains(&self, id: MessageId) -> bool {
        self.messages.iter().any(|m| m.id == id)
    }

    /// All messages, in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Iterate over all messages, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Messages shown in the chat view: everything except system prompts.
    pub fn visible(&self) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|m| m.role != MessageRole::System)
            .cloned()
            .collect()
    }

    /// Clear the conversation, keeping the leading system prompt(s).
    pub fn reset(&mut self) {
        let keep = self
            .messages
            .iter()
            .take_while(|m| m.role == MessageRole::System)
            .count();
        self.messages.truncate(keep);
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<'de> Deserialize<'de> for Transcript {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let messages = Vec::<Message>::deserialize(deserializer)?;
        Self::from_messages(messages).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
