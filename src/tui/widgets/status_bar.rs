// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Status bar widget

use ratatui::prelude::*;

/// Title row: bot name, endpoint, in-flight requests
pub struct StatusBar<'a> {
    title: &'a str,
    endpoint: &'a str,
    in_flight: usize,
    policy: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(title: &'a str, endpoint: &'a str) -> Self {
        Self {
            title,
            endpoint,
            in_flight: 0,
            policy: None,
        }
    }

    pub fn in_flight(mut self, count: usize) -> Self {
        self.in_flight = count;
        self
    }

    /// Show the submission policy label
    pub fn policy(mut self, label: &'a str) -> Self {
        self.policy = Some(label);
        self
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let bg_style = Style::default().bg(Color::DarkGray);
        for x in area.x..area.x + area.width {
            buf.set_string(x, area.y, " ", bg_style);
        }

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                self.title,
                Style::default().fg(Color::White).bold().bg(Color::DarkGray),
            ),
            Span::styled(" ─ ", Style::default().fg(Color::Gray).bg(Color::DarkGray)),
            Span::styled(
                self.endpoint,
                Style::default().fg(Color::Cyan).bg(Color::DarkGray),
            ),
        ];
        if let Some(policy) = self.policy {
            spans.push(Span::styled(
                format!("  {}", policy),
                Style::default().fg(Color::Gray).bg(Color::DarkGray),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        // Right-aligned request indicator
        let (indicator, style) = if self.in_flight > 0 {
            (
                format!("● waiting on {} ", self.in_flight),
                Style::default().fg(Color::Yellow).bg(Color::DarkGray),
            )
        } else {
            (
                "idle ".to_string(),
                Style::default().fg(Color::Green).bg(Color::DarkGray),
            )
        };
        let width = indicator.chars().count() as u16;
        if width < area.width {
            buf.set_string(area.x + area.width - width, area.y, &indicator, style);
        }
    }
}
