// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat widget controller
//!
//! Each submission moves through
//! `idle → userMessageShown → placeholderShown → (resolved | failed) → done`.
//! The request runs on its own tokio task; its completion is applied by
//! whoever owns the widget (the UI loop, or `settle` in tests).

use std::sync::Arc;

use crossterm::event::KeyCode;

use crate::config::{SubmissionPolicy, WidgetConfig};
use crate::endpoint::AnsweringEndpoint;
use crate::error::{ChatError, Result};

use super::events::{
    completion_channel, Completion, CompletionReceiver, CompletionSender, PendingReply,
};
use super::message::{Message, MessageId};
use super::surface::{InputField, SendControl, TranscriptSurface};

/// Why a trigger did not produce a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Trimmed input was empty
    EmptyInput,
    /// Serialized policy and a request is already outstanding
    Busy,
    /// The key pressed does not submit
    NotATrigger,
}

/// What a trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored(IgnoreReason),
    /// A request was issued; the placeholder tags its eventual reply
    Dispatched { placeholder: MessageId },
}

/// Trim the raw input into a question, rejecting blank input.
pub fn parse_question(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ChatError::EmptyInput)
    } else {
        Ok(trimmed.to_string())
    }
}

/// The chat widget
pub struct ChatWidget<I, S, T> {
    config: WidgetConfig,
    input: I,
    send: S,
    transcript: T,
    endpoint: Arc<dyn AnsweringEndpoint>,
    /// Placeholders of in-flight requests, in issue order
    pending: Vec<MessageId>,
    initialized: bool,
    completion_tx: CompletionSender,
    completion_rx: CompletionReceiver,
}

impl<I, S, T> ChatWidget<I, S, T>
where
    I: InputField,
    S: SendControl,
    T: TranscriptSurface,
{
    pub fn new(
        config: WidgetConfig,
        input: I,
        send: S,
        transcript: T,
        endpoint: Arc<dyn AnsweringEndpoint>,
    ) -> Self {
        let (completion_tx, completion_rx) = completion_channel();
        Self {
            config,
            input,
            send,
            transcript,
            endpoint,
            pending: Vec::new(),
            initialized: false,
            completion_tx,
            completion_rx,
        }
    }

    /// Append the greeting. Only the first call has an effect.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        let greeting = Message::bot(self.config.greeting.clone());
        self.show(greeting);
    }

    /// The send control was clicked
    pub fn on_send_click(&mut self) -> SubmitOutcome {
        if !self.send.is_enabled() {
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        }
        self.submit()
    }

    /// A key was pressed while the input has focus
    pub fn on_key_press(&mut self, key: KeyCode) -> SubmitOutcome {
        match key {
            KeyCode::Enter => self.submit(),
            _ => SubmitOutcome::Ignored(IgnoreReason::NotATrigger),
        }
    }

    /// Submit the current input.
    ///
    /// Must be called from within a tokio runtime when the input is non-empty.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.config.submission_policy == SubmissionPolicy::Serialized && !self.pending.is_empty()
        {
            tracing::debug!(
                target: "greenops.widget",
                in_flight = self.pending.len(),
                "submission ignored while a request is outstanding"
            );
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        }

        let question = match parse_question(&self.input.value()) {
            Ok(question) => question,
            Err(_) => return SubmitOutcome::Ignored(IgnoreReason::EmptyInput),
        };

        self.show(Message::user(question.clone()));
        self.input.clear();

        let placeholder = Message::bot(self.config.placeholder.clone());
        let placeholder_id = placeholder.id();
        self.show(placeholder);
        self.pending.push(placeholder_id);

        if self.config.submission_policy == SubmissionPolicy::Serialized {
            self.send.set_enabled(false);
        }

        tracing::debug!(
            target: "greenops.widget",
            placeholder = %placeholder_id,
            endpoint = %self.endpoint.describe(),
            in_flight = self.pending.len(),
            "dispatching question"
        );

        let endpoint = Arc::clone(&self.endpoint);
        let reply = PendingReply::new(self.completion_tx.clone(), placeholder_id, question.clone());
        tokio::spawn(async move {
            let outcome = endpoint.ask(&question).await;
            reply.finish(outcome);
        });

        SubmitOutcome::Dispatched {
            placeholder: placeholder_id,
        }
    }

    /// Apply a completion: drop its placeholder, then show the answer or the
    /// fallback. Returns false for a completion this widget did not issue.
    pub fn apply(&mut self, completion: Completion) -> bool {
        let Some(index) = self
            .pending
            .iter()
            .position(|id| *id == completion.placeholder)
        else {
            tracing::warn!(
                target: "greenops.widget",
                placeholder = %completion.placeholder,
                "completion for unknown placeholder ignored"
            );
            return false;
        };
        self.pending.remove(index);
        self.transcript.remove(completion.placeholder);

        let text = match completion.outcome {
            Ok(answer) => {
                tracing::debug!(
                    target: "greenops.widget",
                    placeholder = %completion.placeholder,
                    answer_chars = answer.chars().count(),
                    "answer received"
                );
                answer
            }
            Err(error) => {
                tracing::warn!(
                    target: "greenops.widget",
                    kind = error.kind(),
                    error = %error,
                    question = %completion.question,
                    "error fetching chatbot response"
                );
                self.config.fallback.clone()
            }
        };
        self.show(Message::bot(text));

        if self.config.submission_policy == SubmissionPolicy::Serialized && self.pending.is_empty()
        {
            self.send.set_enabled(true);
        }
        true
    }

    /// Wait for the next completion. Returns `None` when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        if self.pending.is_empty() {
            return None;
        }
        self.completion_rx.recv().await
    }

    /// Apply every completion that has already arrived, without waiting.
    pub fn drain_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            if self.apply(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait until every in-flight request has been applied.
    pub async fn settle(&mut self) {
        while let Some(completion) = self.next_completion().await {
            self.apply(completion);
        }
    }

    fn show(&mut self, message: Message) {
        self.transcript.append(message);
        self.transcript.scroll_to_latest();
    }

    // === Accessors ===

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn endpoint_description(&self) -> String {
        self.endpoint.describe()
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn send_control(&self) -> &S {
        &self.send
    }

    pub fn transcript(&self) -> &T {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut T {
        &mut self.transcript
    }
}
