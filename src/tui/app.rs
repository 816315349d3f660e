// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat terminal application state and event handling

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::config::{AppearanceConfig, Settings};
use crate::endpoint::AnsweringEndpoint;
use crate::error::Result;
use crate::widget::{ChatWidget, SendButton, SendControl};

use super::state::{InputState, TranscriptPane};

/// Lines moved per mouse wheel notch
const WHEEL_LINES: usize = 3;

/// The chat widget wired to terminal surfaces
pub type TerminalWidget = ChatWidget<InputState, SendButton, TranscriptPane>;

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    Quit,
}

/// Main chat terminal application
pub struct ChatApp {
    widget: TerminalWidget,
    appearance: AppearanceConfig,
    endpoint_url: String,
    /// Where the send button was drawn in the last frame
    send_button_area: Option<Rect>,
    should_quit: bool,
}

impl ChatApp {
    pub fn new(settings: &Settings, endpoint: Arc<dyn AnsweringEndpoint>) -> Self {
        let endpoint_url = endpoint.describe();
        let mut widget = ChatWidget::new(
            settings.widget.clone(),
            InputState::new(),
            SendButton::new(),
            TranscriptPane::new(),
            endpoint,
        );
        widget.init();

        Self {
            widget,
            appearance: settings.appearance.clone(),
            endpoint_url,
            send_button_area: None,
            should_quit: false,
        }
    }

    pub fn widget(&self) -> &TerminalWidget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut TerminalWidget {
        &mut self.widget
    }

    pub fn appearance(&self) -> &AppearanceConfig {
        &self.appearance
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_send_button_area(&mut self, area: Rect) {
        self.send_button_area = Some(area);
    }

    /// Apply a finished request or wait briefly, then drain terminal input
    pub async fn tick(&mut self) -> Result<TickResult> {
        if self.should_quit {
            return Ok(TickResult::Quit);
        }

        tokio::select! {
            Some(completion) = self.widget.next_completion() => {
                self.widget.apply(completion);
            }
            _ = tokio::time::sleep(Duration::from_millis(50)) => {}
        }

        while crossterm::event::poll(Duration::from_millis(0))? {
            let event = crossterm::event::read()?;
            self.handle_event(event);
        }

        Ok(if self.should_quit {
            TickResult::Quit
        } else {
            TickResult::Continue
        })
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => self.widget.input_mut().insert_str(&text),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.widget.input_mut().discard(),
            KeyCode::Enter => {
                self.widget.on_key_press(KeyCode::Enter);
            }
            KeyCode::Char(c) if !ctrl => self.widget.input_mut().insert_char(c),
            KeyCode::Backspace => self.widget.input_mut().backspace(),
            KeyCode::Delete => self.widget.input_mut().delete(),
            KeyCode::Left => self.widget.input_mut().move_left(),
            KeyCode::Right => self.widget.input_mut().move_right(),
            KeyCode::Home => self.widget.input_mut().move_home(),
            KeyCode::End => self.widget.input_mut().move_end(),
            KeyCode::Up => self.widget.input_mut().history_prev(),
            KeyCode::Down => self.widget.input_mut().history_next(),
            KeyCode::PageUp => self.widget.transcript_mut().page_up(),
            KeyCode::PageDown => self.widget.transcript_mut().page_down(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.widget.transcript_mut().scroll_up(WHEEL_LINES),
            MouseEventKind::ScrollDown => self.widget.transcript_mut().scroll_down(WHEEL_LINES),
            MouseEventKind::Down(MouseButton::Left) => {
                let clicked = Position::new(mouse.column, mouse.row);
                if self
                    .send_button_area
                    .is_some_and(|area| area.contains(clicked))
                {
                    self.widget.on_send_click();
                }
            }
            _ => {}
        }
    }

    pub fn send_enabled(&self) -> bool {
        self.widget.send_control().is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SubmissionPolicy, DEFAULT_GREETING};
    use crate::endpoint::MockEndpoint;
    use crate::widget::{Sender, TranscriptSurface};

    fn create_app(endpoint: MockEndpoint) -> ChatApp {
        ChatApp::new(&Settings::default(), Arc::new(endpoint))
    }

    fn press(app: &mut ChatApp, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn press_ctrl(app: &mut ChatApp, c: char) {
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )));
    }

    fn type_text(app: &mut ChatApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut ChatApp, column: u16, row: u16) {
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    #[test]
    fn test_app_starts_with_greeting() {
        let app = create_app(MockEndpoint::new());
        let messages = app.widget().transcript().messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text(), DEFAULT_GREETING);
        assert_eq!(app.endpoint_url(), "mock");
    }

    #[test]
    fn test_typing_fills_input() {
        let mut app = create_app(MockEndpoint::new());
        type_text(&mut app, "hi there");
        assert_eq!(app.widget().input().text(), "hi there");

        press_ctrl(&mut app, 'u');
        assert!(app.widget().input().is_empty());
    }

    #[tokio::test]
    async fn test_enter_submits_and_answer_arrives() {
        let endpoint = MockEndpoint::answering("12 pallets");
        let mut app = create_app(endpoint.clone());

        type_text(&mut app, "how many pallets?");
        press(&mut app, KeyCode::Enter);

        assert!(app.widget().input().is_empty());
        assert_eq!(app.widget().in_flight(), 1);

        app.widget_mut().settle().await;

        let last = app.widget().transcript().messages().last().unwrap();
        assert_eq!(last.sender(), Sender::Bot);
        assert_eq!(last.text(), "12 pallets");
        assert_eq!(endpoint.questions(), vec!["how many pallets?"]);
        assert_eq!(app.widget().input().history().len(), 1);
    }

    #[test]
    fn test_enter_on_blank_input_does_nothing() {
        let endpoint = MockEndpoint::new();
        let mut app = create_app(endpoint.clone());

        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.widget().transcript().messages().len(), 1);
        assert_eq!(app.widget().input().text(), "   ");
        assert_eq!(endpoint.call_count(), 0);
    }

    #[tokio::test]
    async fn test_click_on_send_button_submits() {
        let mut app = create_app(MockEndpoint::answering("ok"));
        app.set_send_button_area(Rect::new(70, 20, 10, 3));
        type_text(&mut app, "question");

        click(&mut app, 5, 5);
        assert_eq!(app.widget().in_flight(), 0);

        click(&mut app, 72, 21);
        assert_eq!(app.widget().in_flight(), 1);
        app.widget_mut().settle().await;
        assert_eq!(app.widget().in_flight(), 0);
    }

    #[tokio::test]
    async fn test_serialized_policy_disables_button_while_waiting() {
        let mut settings = Settings::default();
        settings.widget.submission_policy = SubmissionPolicy::Serialized;
        let mut app = ChatApp::new(&settings, Arc::new(MockEndpoint::answering("ok")));

        type_text(&mut app, "q");
        press(&mut app, KeyCode::Enter);
        assert!(!app.send_enabled());

        app.widget_mut().settle().await;
        assert!(app.send_enabled());
    }

    #[test]
    fn test_escape_quits() {
        let mut app = create_app(MockEndpoint::new());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = create_app(MockEndpoint::new());
        press_ctrl(&mut app, 'c');
        assert!(app.should_quit());
    }

    #[test]
    fn test_paste_inserts_text() {
        let mut app = create_app(MockEndpoint::new());
        app.handle_event(Event::Paste("pasted".to_string()));
        assert_eq!(app.widget().input().text(), "pasted");
    }

    #[test]
    fn test_history_navigation_keys() {
        let mut app = create_app(MockEndpoint::new());
        app.widget_mut().input_mut().set_buffer("earlier");
        app.widget_mut().input_mut().commit();

        press(&mut app, KeyCode::Up);
        assert_eq!(app.widget().input().text(), "earlier");
        press(&mut app, KeyCode::Down);
        assert!(app.widget().input().is_empty());
    }
}
