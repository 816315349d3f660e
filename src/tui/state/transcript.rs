// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Transcript pane: the conversation plus its scroll position

use crate::widget::{ConversationView, Message, MessageId, TranscriptSurface};

use super::scroll::ScrollState;

/// Scrollable transcript container for the terminal
#[derive(Debug, Clone, Default)]
pub struct TranscriptPane {
    view: ConversationView,
    scroll: ScrollState,
    /// Content width at the last render; 0 before the first frame
    width: u16,
}

impl TranscriptPane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ConversationView {
        &self.view
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Record the pane size for this frame and return the total content height
    pub fn resize(&mut self, width: u16, height: u16) -> usize {
        self.scroll.update_viewport_height(height);
        self.width = width;
        let total = self
            .scroll
            .calculate_total_height(self.view.messages(), width);
        self.scroll.maybe_auto_scroll(total);
        total
    }

    fn total_height(&mut self) -> usize {
        self.scroll
            .calculate_total_height(self.view.messages(), self.width)
    }

    pub fn page_up(&mut self) {
        self.scroll.page_up();
    }

    pub fn page_down(&mut self) {
        let total = self.total_height();
        self.scroll.page_down(total);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll.scroll_up(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let total = self.total_height();
        self.scroll.scroll_down(lines, total);
    }
}

impl TranscriptSurface for TranscriptPane {
    fn append(&mut self, message: Message) {
        self.view.append(message);
        self.scroll.invalidate_cache();
    }

    fn remove(&mut self, id: MessageId) -> bool {
        let removed = self.view.remove(id);
        if removed {
            self.scroll.invalidate_cache();
        }
        removed
    }

    /// Brings the newest message into view, even after a manual scroll.
    fn scroll_to_latest(&mut self) {
        self.view.scroll_to_latest();
        self.scroll.auto_scroll_enabled = true;
        if self.width > 0 {
            let total = self.total_height();
            self.scroll.scroll_to_bottom(total);
        }
    }

    fn messages(&self) -> &[Message] {
        self.view.messages()
    }
}
