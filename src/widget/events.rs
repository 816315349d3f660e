// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Completion events
//!
//! Request tasks never touch the transcript. They report their outcome over
//! a tokio mpsc channel and the UI loop applies it.

use tokio::sync::mpsc;

use crate::error::EndpointError;

use super::message::MessageId;

/// Outcome of one submission, tagged with its placeholder
#[derive(Debug, Clone)]
pub struct Completion {
    /// Placeholder appended when the request was issued
    pub placeholder: MessageId,
    /// Question that was sent
    pub question: String,
    /// Answer text or the reason there is none
    pub outcome: Result<String, EndpointError>,
}

/// Type alias for the completion sender
pub type CompletionSender = mpsc::UnboundedSender<Completion>;

/// Type alias for the completion receiver
pub type CompletionReceiver = mpsc::UnboundedReceiver<Completion>;

/// Create a new completion channel
pub fn completion_channel() -> (CompletionSender, CompletionReceiver) {
    mpsc::unbounded_channel()
}

/// Send a completion, ignoring errors if the widget was dropped
pub fn send_completion(tx: &CompletionSender, completion: Completion) {
    let _ = tx.send(completion);
}

/// Reports the outcome of one request task.
///
/// If the task is dropped before `finish` (the endpoint panicked or the task
/// was cancelled), the guard reports `EndpointError::Interrupted` instead, so
/// the placeholder never waits forever.
pub struct PendingReply {
    tx: CompletionSender,
    placeholder: MessageId,
    question: Option<String>,
}

impl PendingReply {
    pub fn new(tx: CompletionSender, placeholder: MessageId, question: String) -> Self {
        Self {
            tx,
            placeholder,
            question: Some(question),
        }
    }

    /// Send the outcome. Consumes the guard.
    pub fn finish(mut self, outcome: Result<String, EndpointError>) {
        self.send(outcome);
    }

    fn send(&mut self, outcome: Result<String, EndpointError>) {
        if let Some(question) = self.question.take() {
            send_completion(
                &self.tx,
                Completion {
                    placeholder: self.placeholder,
                    question,
                    outcome,
                },
            );
        }
    }
}

impl Drop for PendingReply {
    fn drop(&mut self) {
        self.send(Err(EndpointError::Interrupted));
    }
}
