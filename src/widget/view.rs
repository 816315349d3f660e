// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Conversation view
//!
//! Ordered, append-only list of messages. The only removal is by id, which
//! the widget uses for placeholders.

use super::message::{Message, MessageId, Sender};
use super::surface::TranscriptSurface;

/// In-memory transcript
#[derive(Debug, Clone, Default)]
pub struct ConversationView {
    messages: Vec<Message>,
    /// Message most recently brought into view
    scrolled_to: Option<MessageId>,
}

impl ConversationView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id() == id)
    }

    /// Count messages from one sender
    pub fn count_from(&self, sender: Sender) -> usize {
        self.messages.iter().filter(|m| m.sender() == sender).count()
    }

    /// Texts in display order
    pub fn texts(&self) -> Vec<&str> {
        self.messages.iter().map(Message::text).collect()
    }

    /// Whether the newest message is the one last scrolled into view
    pub fn is_showing_latest(&self) -> bool {
        match self.messages.last() {
            Some(last) => self.scrolled_to == Some(last.id()),
            None => true,
        }
    }
}

impl TranscriptSurface for ConversationView {
    fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    fn remove(&mut self, id: MessageId) -> bool {
        match self.messages.iter().position(|m| m.id() == id) {
            Some(index) => {
                self.messages.remove(index);
                true
            }
            None => false,
        }
    }

    fn scroll_to_latest(&mut self) {
        self.scrolled_to = self.messages.last().map(Message::id);
    }

    fn messages(&self) -> &[Message] {
        &self.messages
    }
}
