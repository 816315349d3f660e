// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input state for the chat terminal
//!
//! Single-line buffer with a character-indexed cursor and a history of
//! submitted questions.

use crate::widget::InputField;

/// Input state for the text input area
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current input buffer
    buffer: String,
    /// Cursor position (character index)
    cursor: usize,
    /// Previously submitted questions, oldest first
    history: Vec<String>,
    /// None = editing new input, Some(i) = browsing history
    history_index: Option<usize>,
    /// Buffer saved when history browsing started
    saved_buffer: Option<String>,
    max_history: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
            saved_buffer: None,
            max_history: 100,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of a character index
    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        // Single-line field.
        if c == '\n' || c == '\r' {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position, dropping line breaks
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Discard the buffer without recording it
    pub fn discard(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.history_index = None;
        self.saved_buffer = None;
    }

    /// Take the buffer, recording it in history if it is not blank and not a
    /// repeat of the last entry
    pub fn commit(&mut self) -> String {
        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        self.history_index = None;
        self.saved_buffer = None;

        if !text.trim().is_empty() && self.history.last().map(String::as_str) != Some(&text) {
            self.history.push(text.clone());
            if self.history.len() > self.max_history {
                self.history.remove(0);
            }
        }

        text
    }

    /// Navigate to the previous history entry
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }

        match self.history_index {
            None => {
                self.saved_buffer = Some(self.buffer.clone());
                let last = self.history.len() - 1;
                self.history_index = Some(last);
                self.load(self.history[last].clone());
            }
            Some(0) => {}
            Some(i) => {
                self.history_index = Some(i - 1);
                self.load(self.history[i - 1].clone());
            }
        }
    }

    /// Navigate to the next history entry, restoring the saved buffer past the
    /// newest one
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(i) if i + 1 >= self.history.len() => {
                self.history_index = None;
                if let Some(saved) = self.saved_buffer.take() {
                    self.load(saved);
                }
            }
            Some(i) => {
                self.history_index = Some(i + 1);
                self.load(self.history[i + 1].clone());
            }
        }
    }

    /// Replace the buffer content
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.load(text.into());
        self.history_index = None;
    }

    fn load(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.char_count();
    }
}

impl InputField for InputState {
    fn value(&self) -> String {
        self.buffer.clone()
    }

    /// The widget only clears after a question was dispatched, so the
    /// cleared text goes into history.
    fn clear(&mut self) {
        self.commit();
    }
}
