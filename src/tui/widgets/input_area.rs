// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input area widget: question field plus the send button

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};
use unicode_width::UnicodeWidthChar;

use crate::tui::state::InputState;

/// Label drawn for the send control
pub const SEND_LABEL: &str = "[ Send ]";

/// Split the input row into the text field and the send button
pub fn split_input_row(area: Rect) -> (Rect, Rect) {
    let button_width = (SEND_LABEL.len() as u16 + 2).min(area.width);
    let field = Rect {
        width: area.width - button_width,
        ..area
    };
    let button = Rect {
        x: area.x + field.width,
        width: button_width,
        ..area
    };
    (field, button)
}

/// Text field rendering
pub struct InputArea<'a> {
    input: &'a InputState,
    focused: bool,
    placeholder: Option<&'a str>,
}

impl<'a> InputArea<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self {
            input,
            focused: true,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// First character shown, so the cursor stays inside the field
    fn view_start(&self, text_width: usize) -> usize {
        let before: Vec<char> = self.input.text().chars().take(self.input.cursor()).collect();
        let budget = text_width.saturating_sub(1);
        let mut used = 0;
        let mut start = before.len();
        while start > 0 {
            let ch_width = before[start - 1].width().unwrap_or(0);
            if used + ch_width > budget {
                break;
            }
            used += ch_width;
            start -= 1;
        }
        start
    }

    /// Columns between the first shown character and the cursor
    fn cursor_column(&self, text_width: usize) -> usize {
        let start = self.view_start(text_width);
        self.input
            .text()
            .chars()
            .skip(start)
            .take(self.input.cursor().saturating_sub(start))
            .map(|ch| ch.width().unwrap_or(0))
            .sum()
    }

    /// Cursor position in screen coordinates
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // Border (1) and prompt "> " (2)
        let text_width = area.width.saturating_sub(4) as usize;
        let column = self.cursor_column(text_width);
        let x = area.x + 1 + 2 + column as u16;
        let y = area.y + 1;
        (
            x.min(area.x + area.width.saturating_sub(2)),
            y.min(area.y + area.height.saturating_sub(1)),
        )
    }
}

impl<'a> Widget for InputArea<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        buf.set_string(
            inner.x,
            inner.y,
            "> ",
            Style::default().fg(Color::Cyan).bold(),
        );

        let text_x = inner.x + 2;
        let text_width = inner.width.saturating_sub(2) as usize;

        if self.input.is_empty() {
            if let Some(placeholder) = self.placeholder {
                buf.set_stringn(
                    text_x,
                    inner.y,
                    placeholder,
                    text_width,
                    Style::default().fg(Color::DarkGray).italic(),
                );
            }
        } else {
            let visible: String = self
                .input
                .text()
                .chars()
                .skip(self.view_start(text_width))
                .collect();
            buf.set_stringn(
                text_x,
                inner.y,
                visible,
                text_width,
                Style::default().fg(Color::White),
            );
        }
    }
}

/// The clickable send control
pub struct SendButtonWidget {
    enabled: bool,
}

impl SendButtonWidget {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Widget for SendButtonWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.enabled {
            Style::default().fg(Color::Black).bg(Color::Green).bold()
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.enabled {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        buf.set_stringn(inner.x, inner.y, SEND_LABEL, inner.width as usize, style);
    }
}
