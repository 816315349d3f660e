// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Message bubble rendering
//!
//! A bubble is a header row (avatar, label, optional time), the wrapped text
//! indented past the avatar, and one blank spacer row.

use ratatui::prelude::*;
use unicode_width::UnicodeWidthChar;

use crate::config::AppearanceConfig;
use crate::widget::{Message, Sender};

/// Columns taken by the avatar glyph and its gap
pub const AVATAR_WIDTH: u16 = 3;

/// Width available to message text inside a pane of `width` columns
pub fn content_width(width: u16) -> usize {
    width.saturating_sub(AVATAR_WIDTH + 1).max(1) as usize
}

/// Hard-wrap text at `width` terminal columns, keeping explicit line breaks.
///
/// Wide glyphs count as two columns. One that does not fit on the current
/// line starts the next; a glyph wider than `width` gets a line to itself.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;
        for ch in raw.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > width && used > 0 {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            line.push(ch);
            used += ch_width;
        }
        lines.push(line);
    }
    lines
}

/// Rows a bubble occupies in a pane of `width` columns
pub fn message_height(message: &Message, width: u16) -> usize {
    1 + wrap_text(message.text(), content_width(width)).len() + 1
}

/// Widget for rendering a single bubble
pub struct MessageWidget<'a> {
    message: &'a Message,
    appearance: &'a AppearanceConfig,
    placeholder: Option<&'a str>,
    skip_rows: usize,
}

impl<'a> MessageWidget<'a> {
    pub fn new(message: &'a Message, appearance: &'a AppearanceConfig) -> Self {
        Self {
            message,
            appearance,
            placeholder: None,
            skip_rows: 0,
        }
    }

    /// Bot text rendered as a pending placeholder
    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Rows scrolled off the top of the pane
    pub fn skip_rows(mut self, rows: usize) -> Self {
        self.skip_rows = rows;
        self
    }

    fn is_placeholder(&self) -> bool {
        self.message.sender() == Sender::Bot && self.placeholder == Some(self.message.text())
    }

    fn header(&self) -> Line<'a> {
        let (label, style) = match self.message.sender() {
            Sender::User => (
                self.appearance.user_label.as_str(),
                Style::default().fg(Color::Cyan).bold(),
            ),
            Sender::Bot => (
                self.appearance.bot_name.as_str(),
                Style::default().fg(Color::Green).bold(),
            ),
        };

        let mut spans = vec![
            Span::raw(self.message.sender().icon()),
            Span::raw(" "),
            Span::styled(label, style),
        ];
        if self.appearance.show_timestamps {
            spans.push(Span::styled(
                format!("  {}", self.message.timestamp().format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }

    fn content_style(&self) -> Style {
        if self.is_placeholder() {
            return Style::default().fg(Color::DarkGray).italic();
        }
        match self.message.sender() {
            Sender::User => Style::default().fg(Color::Cyan),
            Sender::Bot => Style::default().fg(Color::White),
        }
    }
}

impl<'a> Widget for MessageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width <= AVATAR_WIDTH {
            return;
        }

        let text_width = area.width - AVATAR_WIDTH;
        let content_style = self.content_style();
        let body = wrap_text(self.message.text(), content_width(area.width));

        // Row 0 is the header; the trailing spacer row is left blank.
        let mut y = area.y;
        let bottom = area.y + area.height;
        for row in self.skip_rows..=body.len() {
            if y >= bottom {
                break;
            }
            if row == 0 {
                buf.set_line(area.x, y, &self.header(), area.width);
            } else {
                buf.set_stringn(
                    area.x + AVATAR_WIDTH,
                    y,
                    &body[row - 1],
                    text_width as usize,
                    content_style,
                );
            }
            y += 1;
        }
    }
}

/// Render the visible part of a transcript, skipping `scroll_offset` rows
pub fn render_messages(
    messages: &[Message],
    appearance: &AppearanceConfig,
    placeholder: &str,
    area: Rect,
    buf: &mut Buffer,
    scroll_offset: usize,
) {
    let viewport_end = area.y + area.height;
    let mut current_y = area.y;
    let mut rows_skipped = 0;

    for message in messages {
        if current_y >= viewport_end {
            break;
        }

        let height = message_height(message, area.width);
        if rows_skipped + height <= scroll_offset {
            rows_skipped += height;
            continue;
        }

        let skip_in_message = scroll_offset.saturating_sub(rows_skipped);
        rows_skipped += height;

        let visible = (height - skip_in_message) as u16;
        let msg_area = Rect {
            x: area.x,
            y: current_y,
            width: area.width,
            height: visible.min(viewport_end - current_y),
        };

        MessageWidget::new(message, appearance)
            .placeholder(placeholder)
            .skip_rows(skip_in_message)
            .render(msg_area, buf);
        current_y += visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
    }

    fn appearance() -> AppearanceConfig {
        AppearanceConfig {
            show_timestamps: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_wrap_text_hard_wraps_and_keeps_breaks() {
        assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_text("ab\n\ncd", 4), vec!["ab", "", "cd"]);
        assert_eq!(wrap_text("", 4), vec![""]);
    }

    #[test]
    fn test_wrap_text_counts_wide_glyphs_as_two_columns() {
        assert_eq!(wrap_text("库存苹果一", 4), vec!["库存", "苹果", "一"]);
        assert_eq!(wrap_text("ab库c", 3), vec!["ab", "库c"]);
        assert_eq!(wrap_text("库", 1), vec!["库"]);
    }

    #[test]
    fn test_wide_text_is_rendered_in_full() {
        let appearance = appearance();
        let answer = "库存苹果一共有十二箱香蕉五箱";
        let msg = Message::bot(answer);
        let area = Rect::new(0, 0, 24, 6);
        let mut buf = Buffer::empty(area);

        // 20 text columns hold 10 wide glyphs per row
        assert_eq!(message_height(&msg, area.width), 4);
        MessageWidget::new(&msg, &appearance).render(area, &mut buf);

        let shown: String = (1..3)
            .map(|y| row_text(&buf, y))
            .collect::<String>()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        assert_eq!(shown, answer);
    }

    #[test]
    fn test_message_height_counts_header_and_spacer() {
        let msg = Message::bot("x".repeat(30));
        // 20 columns leave 16 for text: two rows of content
        assert_eq!(message_height(&msg, 20), 4);
    }

    #[test]
    fn test_bot_bubble_header_and_text() {
        let appearance = appearance();
        let msg = Message::bot("10 cartons");
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        MessageWidget::new(&msg, &appearance).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Green-Ops AI"));
        assert!(row_text(&buf, 1).contains("10 cartons"));
        assert_eq!(row_text(&buf, 2).trim(), "");
    }

    #[test]
    fn test_user_bubble_uses_user_label() {
        let appearance = appearance();
        let msg = Message::user("hello");
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        MessageWidget::new(&msg, &appearance).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("you"));
    }

    #[test]
    fn test_timestamp_shown_when_enabled() {
        let appearance = AppearanceConfig::default();
        let msg = Message::bot("hi");
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        MessageWidget::new(&msg, &appearance).render(area, &mut buf);

        let stamp = msg.timestamp().format("%H:%M").to_string();
        assert!(row_text(&buf, 0).contains(&stamp));
    }

    #[test]
    fn test_placeholder_is_dimmed() {
        let appearance = appearance();
        let msg = Message::bot("...");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);

        MessageWidget::new(&msg, &appearance)
            .placeholder("...")
            .render(area, &mut buf);

        assert_eq!(buf[(AVATAR_WIDTH, 1)].fg, Color::DarkGray);
    }

    #[test]
    fn test_render_messages_skips_scrolled_rows() {
        let appearance = appearance();
        let messages = vec![Message::bot("first"), Message::user("second")];
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        // Skip the whole first bubble and the header of the second.
        render_messages(&messages, &appearance, "...", area, &mut buf, 4);

        assert!(row_text(&buf, 0).contains("second"));
        assert!(!(0..3).any(|y| row_text(&buf, y).contains("first")));
    }
}
