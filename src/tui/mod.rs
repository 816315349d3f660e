// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Terminal frontend for the chat widget
//!
//! Provides the three surfaces the widget needs:
//! - a transcript pane rendered as message bubbles
//! - a single-line input with history
//! - a clickable send button

pub mod app;
pub mod state;
pub mod ui;
pub mod widgets;

use std::io;
use std::panic;
use std::sync::Arc;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Settings;
use crate::endpoint::AnsweringEndpoint;
use crate::error::{ChatError, Result};

pub use app::{ChatApp, TerminalWidget, TickResult};
pub use state::{InputState, ScrollState, TranscriptPane};

/// Run the chat terminal until the user quits
pub async fn run_chat_tui(settings: &Settings, endpoint: Arc<dyn AnsweringEndpoint>) -> Result<()> {
    let restore_panic_hook = install_panic_hook(|| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    });

    enable_raw_mode().map_err(|e| ChatError::Tui(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| ChatError::Tui(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| ChatError::Tui(e.to_string()))?;

    let mut app = ChatApp::new(settings, endpoint);
    tracing::debug!(
        target: "greenops.widget",
        endpoint = %app.endpoint_url(),
        "chat terminal started"
    );

    let result = run_app(&mut terminal, &mut app).await;

    restore_panic_hook();

    disable_raw_mode().map_err(|e| ChatError::Tui(e.to_string()))?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(|e| ChatError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| ChatError::Tui(e.to_string()))?;

    if app.widget().in_flight() > 0 {
        tracing::debug!(
            target: "greenops.widget",
            in_flight = app.widget().in_flight(),
            "exiting with requests still outstanding"
        );
    }

    result
}

/// Run `cleanup` before the current panic hook until the returned closure
/// puts that hook back.
fn install_panic_hook<F>(cleanup: F) -> impl FnOnce()
where
    F: Fn() + Send + Sync + 'static,
{
    let original = Arc::new(panic::take_hook());
    let chained = Arc::clone(&original);
    panic::set_hook(Box::new(move |panic_info| {
        cleanup();
        (*chained)(panic_info);
    }));

    move || {
        // Dropping our hook releases its handle on the original.
        drop(panic::take_hook());
        match Arc::try_unwrap(original) {
            Ok(hook) => panic::set_hook(hook),
            Err(shared) => panic::set_hook(Box::new(move |panic_info| (*shared)(panic_info))),
        }
    }
}

/// Main application loop
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut ChatApp) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| ChatError::Tui(e.to_string()))?;

        match app.tick().await? {
            TickResult::Continue => {}
            TickResult::Quit => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static OUTER_CALLS: AtomicUsize = AtomicUsize::new(0);
    static CLEANUP_CALLS: AtomicUsize = AtomicUsize::new(0);

    #[test]
    fn test_panic_hook_chains_then_restores() {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {
            OUTER_CALLS.fetch_add(1, Ordering::SeqCst);
        }));

        let restore = install_panic_hook(|| {
            CLEANUP_CALLS.fetch_add(1, Ordering::SeqCst);
        });
        let _ = panic::catch_unwind(|| panic!("while the terminal is raw"));
        let outer_while_installed = OUTER_CALLS.load(Ordering::SeqCst);

        restore();
        let cleanup_while_installed = CLEANUP_CALLS.load(Ordering::SeqCst);
        let _ = panic::catch_unwind(|| panic!("after teardown"));
        let cleanup_after = CLEANUP_CALLS.load(Ordering::SeqCst);
        let outer_after = OUTER_CALLS.load(Ordering::SeqCst);

        drop(panic::take_hook());
        panic::set_hook(previous);

        assert!(cleanup_while_installed >= 1);
        assert!(outer_while_installed >= 1);
        // The outer hook is back in place and ours is gone.
        assert!(outer_after > outer_while_installed);
        assert_eq!(cleanup_after, cleanup_while_installed);
    }
}
