// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock answering endpoint for testing
//!
//! Provides a scripted implementation of the AnsweringEndpoint trait that can
//! be used without a running server.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::EndpointError;

use super::client::AnsweringEndpoint;

/// A pre-configured reply for the mock endpoint
#[derive(Clone, Debug)]
pub struct MockReply {
    /// Answer or failure to return
    pub outcome: Result<String, EndpointError>,
    /// How long to wait before returning
    pub delay: Duration,
}

impl MockReply {
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            delay: Duration::ZERO,
        }
    }

    pub fn failure(error: EndpointError) -> Self {
        Self {
            outcome: Err(error),
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A scripted answering endpoint
///
/// Replies are consumed in order; once the script is exhausted the last reply
/// repeats. Every question received is recorded.
#[derive(Clone)]
pub struct MockEndpoint {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    last: Arc<Mutex<MockReply>>,
    questions: Arc<Mutex<Vec<String>>>,
    call_count: Arc<AtomicUsize>,
}

impl Default for MockEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEndpoint {
    /// Create a mock that answers "mock answer" to everything
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            last: Arc::new(Mutex::new(MockReply::answer("mock answer"))),
            questions: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Always answer with the given text
    pub fn answering(text: impl Into<String>) -> Self {
        Self::new().with_replies(vec![MockReply::answer(text)])
    }

    /// Always fail with the given error
    pub fn failing(error: EndpointError) -> Self {
        Self::new().with_replies(vec![MockReply::failure(error)])
    }

    /// Replace the script
    pub fn with_replies(self, replies: Vec<MockReply>) -> Self {
        {
            let mut queue = lock_or_recover(&self.replies);
            queue.clear();
            queue.extend(replies);
        }
        self
    }

    /// Number of questions received so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Questions received so far, in arrival order
    pub fn questions(&self) -> Vec<String> {
        lock_or_recover(&self.questions).clone()
    }

    fn next_reply(&self) -> MockReply {
        let mut queue = lock_or_recover(&self.replies);
        match queue.pop_front() {
            Some(reply) => {
                *lock_or_recover(&self.last) = reply.clone();
                reply
            }
            None => lock_or_recover(&self.last).clone(),
        }
    }
}

fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("Mock endpoint lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

#[async_trait]
impl AnsweringEndpoint for MockEndpoint {
    fn describe(&self) -> String {
        "mock".to_string()
    }

    async fn ask(&self, question: &str) -> Result<String, EndpointError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        lock_or_recover(&self.questions).push(question.to_string());

        let reply = self.next_reply();
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.outcome
    }
}
