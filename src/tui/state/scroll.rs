// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Scroll state for the transcript pane

use crate::tui::widgets::message::message_height;
use crate::widget::Message;

/// Scroll position and viewport of the transcript pane
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll position in lines from the top
    pub scroll_offset: usize,
    /// Height of the viewport in lines
    pub viewport_height: u16,
    /// Follow new messages
    pub auto_scroll_enabled: bool,
    /// Cached total content height in lines
    cached_total_height: Option<usize>,
    /// Width used for the cached height
    cached_width: Option<u16>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            viewport_height: 20,
            auto_scroll_enabled: true,
            cached_total_height: None,
            cached_width: None,
        }
    }

    /// Update the viewport height (terminal resized)
    pub fn update_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
    }

    /// Total wrapped height of all messages at the given width
    pub fn calculate_total_height(&mut self, messages: &[Message], width: u16) -> usize {
        if let (Some(height), Some(cached_width)) = (self.cached_total_height, self.cached_width) {
            if cached_width == width {
                return height;
            }
        }

        let total_height = messages.iter().map(|m| message_height(m, width)).sum();
        self.cached_total_height = Some(total_height);
        self.cached_width = Some(width);
        total_height
    }

    fn max_offset(&self, total_height: usize) -> usize {
        total_height.saturating_sub(self.viewport_height as usize)
    }

    /// Scroll up; stops following new messages
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        if lines > 0 {
            self.auto_scroll_enabled = false;
        }
    }

    /// Scroll down; reaching the bottom resumes following
    pub fn scroll_down(&mut self, lines: usize, total_height: usize) {
        let max_offset = self.max_offset(total_height);
        self.scroll_offset = (self.scroll_offset + lines).min(max_offset);
        if self.scroll_offset >= max_offset {
            self.auto_scroll_enabled = true;
        }
    }

    /// Scroll to the bottom and resume following
    pub fn scroll_to_bottom(&mut self, total_height: usize) {
        self.scroll_offset = self.max_offset(total_height);
        self.auto_scroll_enabled = true;
    }

    /// Jump to the bottom if following is on
    pub fn maybe_auto_scroll(&mut self, total_height: usize) {
        if self.auto_scroll_enabled {
            self.scroll_offset = self.max_offset(total_height);
        }
    }

    pub fn is_at_bottom(&self, total_height: usize) -> bool {
        self.scroll_offset >= self.max_offset(total_height)
    }

    pub fn is_at_top(&self) -> bool {
        self.scroll_offset == 0
    }

    /// Forget the cached height (messages changed)
    pub fn invalidate_cache(&mut self) {
        self.cached_total_height = None;
        self.cached_width = None;
    }

    pub fn page_up(&mut self) {
        let page_size = (self.viewport_height / 2).max(1) as usize;
        self.scroll_up(page_size);
    }

    pub fn page_down(&mut self, total_height: usize) {
        let page_size = (self.viewport_height / 2).max(1) as usize;
        self.scroll_down(page_size, total_height);
    }

    /// `(first visible line, last visible line, total lines)` when content
    /// overflows the viewport
    pub fn scroll_indicator(&self, total_height: usize) -> Option<(usize, usize, usize)> {
        if total_height <= self.viewport_height as usize {
            None
        } else {
            let viewport_end =
                (self.scroll_offset + self.viewport_height as usize).min(total_height);
            Some((self.scroll_offset + 1, viewport_end, total_height))
        }
    }
}
