// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Frame rendering for the chat terminal

use ratatui::{prelude::*, widgets::Paragraph};

use super::app::ChatApp;
use super::widgets::{render_messages, InputArea, SendButtonWidget, StatusBar};
use crate::widget::TranscriptSurface;

mod layout;

use layout::calculate_layout;

/// Hint shown in the empty input field
const INPUT_HINT: &str = "Ask a question and press Enter";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut ChatApp) {
    let layout = calculate_layout(frame.area());

    render_title_bar(frame, app, layout.title_bar);
    render_chat_area(frame, app, layout.chat);

    let input = InputArea::new(app.widget().input()).placeholder(INPUT_HINT);
    let cursor = input.cursor_position(layout.input);
    frame.render_widget(input, layout.input);
    frame.render_widget(SendButtonWidget::new(app.send_enabled()), layout.send_button);
    app.set_send_button_area(layout.send_button);

    if layout.input.height > 0 {
        frame.set_cursor_position(cursor);
    }
}

fn render_title_bar(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let widget = app.widget();
    let bar = StatusBar::new(&app.appearance().bot_name, app.endpoint_url())
        .in_flight(widget.in_flight())
        .policy(widget.config().submission_policy.label());
    frame.render_widget(bar, area);
}

fn render_chat_area(frame: &mut Frame, app: &mut ChatApp, area: Rect) {
    let total_height = app
        .widget_mut()
        .transcript_mut()
        .resize(area.width, area.height);

    let widget = app.widget();
    let pane = widget.transcript();
    render_messages(
        pane.messages(),
        app.appearance(),
        &widget.config().placeholder,
        area,
        frame.buffer_mut(),
        pane.scroll().scroll_offset,
    );

    if let Some((current_line, _, total_lines)) = pane.scroll().scroll_indicator(total_height) {
        let text = if pane.scroll().is_at_top() {
            "⬆ Top".to_string()
        } else if pane.scroll().is_at_bottom(total_height) {
            "⬇ Bottom".to_string()
        } else {
            format!("↕ {}/{}", current_line, total_lines)
        };

        let indicator = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray).bg(Color::Black))
            .alignment(Alignment::Right);
        let indicator_area = Rect {
            x: area.x + area.width.saturating_sub(15),
            y: area.y + area.height.saturating_sub(1),
            width: 15u16.min(area.width),
            height: 1u16.min(area.height),
        };
        frame.render_widget(indicator, indicator_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, DEFAULT_GREETING};
    use crate::endpoint::{MockEndpoint, MockReply};
    use crate::widget::InputField;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;
    use std::time::Duration;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn create_app(endpoint: MockEndpoint) -> ChatApp {
        let mut settings = Settings::default();
        settings.appearance.show_timestamps = false;
        ChatApp::new(&settings, Arc::new(endpoint))
    }

    #[test]
    fn test_draw_initial_screen() {
        let mut app = create_app(MockEndpoint::new());
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("Green-Ops AI"));
        assert!(screen.contains(&DEFAULT_GREETING[..30]));
        assert!(screen.contains("[ Send ]"));
        assert!(screen.contains(INPUT_HINT));
        assert!(screen.contains("idle"));
    }

    #[tokio::test]
    async fn test_drawn_send_button_is_clickable() {
        let mut app = create_app(MockEndpoint::answering("ok"));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        app.widget_mut().input_mut().set_buffer("question");

        terminal.draw(|f| draw(f, &mut app)).unwrap();
        app.handle_event(crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: 75,
            row: 22,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }));

        assert_eq!(app.widget().in_flight(), 1);
        app.widget_mut().settle().await;
    }

    #[tokio::test]
    async fn test_draw_shows_placeholder_then_answer() {
        let endpoint = MockEndpoint::new()
            .with_replies(vec![MockReply::answer("7 crates left").after(Duration::from_millis(20))]);
        let mut app = create_app(endpoint);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        app.widget_mut().input_mut().set_buffer("stock of apples?");
        app.widget_mut().on_send_click();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let pending = screen_text(&terminal);
        assert!(pending.contains("stock of apples?"));
        assert!(pending.contains("..."));
        assert!(pending.contains("waiting on 1"));

        app.widget_mut().settle().await;
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let done = screen_text(&terminal);
        assert!(done.contains("7 crates left"));
        assert!(!done.contains("..."));
        assert!(app.widget().input().value().is_empty());
    }

    #[test]
    fn test_long_transcript_follows_newest() {
        let mut app = create_app(MockEndpoint::new());
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        for i in 0..10 {
            let message = crate::widget::Message::bot(format!("line number {}", i));
            let pane = app.widget_mut().transcript_mut();
            pane.append(message);
            pane.scroll_to_latest();
        }
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("line number 9"));
        assert!(!screen.contains("line number 0"));
        assert!(screen.contains("Bottom"));
    }
}
