// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Transcript messages
//!
//! A message is immutable once created. The id lets a placeholder be removed
//! by identity when its request settles.

use std::fmt;

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Avatar glyph drawn beside the bubble
    pub fn icon(&self) -> &'static str {
        match self {
            Sender::User => "👤",
            Sender::Bot => "🤖",
        }
    }
}

/// Identity of a rendered message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single chat bubble
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    text: String,
    sender: Sender,
    timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let msg = Message::user("How many cartons of milk?");
        assert_eq!(msg.text(), "How many cartons of milk?");
        assert_eq!(msg.sender(), Sender::User);
        assert!(msg.is_from_user());
    }

    #[test]
    fn test_bot_message() {
        let msg = Message::bot("10 cartons");
        assert_eq!(msg.sender(), Sender::Bot);
        assert!(!msg.is_from_user());
    }

    #[test]
    fn test_ids_are_unique_for_identical_text() {
        let a = Message::bot("...");
        let b = Message::bot("...");
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_sender_icons() {
        assert_eq!(Sender::User.icon(), "👤");
        assert_eq!(Sender::Bot.icon(), "🤖");
    }

    #[test]
    fn test_message_id_display_is_uuid() {
        let msg = Message::user("hi");
        assert_eq!(msg.id().to_string().len(), 36);
    }
}
