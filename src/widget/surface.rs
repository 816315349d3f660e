// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! UI surfaces the widget is composed against
//!
//! The widget never looks these up itself; they are passed to
//! `ChatWidget::new`, so a terminal frontend and a test double are equally
//! valid.

use super::message::{Message, MessageId};

/// Text input the user types a question into
pub trait InputField {
    /// Current raw value (untrimmed)
    fn value(&self) -> String;

    /// Empty the field
    fn clear(&mut self);
}

/// Clickable control that triggers a submission
#[cfg_attr(test, mockall::automock)]
pub trait SendControl {
    fn set_enabled(&mut self, enabled: bool);

    fn is_enabled(&self) -> bool;
}

/// Scrollable container holding the rendered transcript
pub trait TranscriptSurface {
    /// Render one message at the end
    fn append(&mut self, message: Message);

    /// Remove a previously appended message; returns false if it was absent
    fn remove(&mut self, id: MessageId) -> bool;

    /// Bring the newest message into view
    fn scroll_to_latest(&mut self);

    /// Messages currently rendered, oldest first
    fn messages(&self) -> &[Message];
}

/// A plain string is a usable input field
impl InputField for String {
    fn value(&self) -> String {
        self.clone()
    }

    fn clear(&mut self) {
        String::clear(self);
    }
}

/// Send button state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendButton {
    enabled: bool,
}

impl Default for SendButton {
    fn default() -> Self {
        Self::new()
    }
}

impl SendButton {
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl SendControl for SendButton {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
