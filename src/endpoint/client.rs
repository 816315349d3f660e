// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Answering endpoint trait and wire types
//!
//! Defines the abstraction the widget talks to, so the HTTP client can be
//! swapped for a scripted double in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EndpointError;

/// Something that turns a question into an answer
#[async_trait]
pub trait AnsweringEndpoint: Send + Sync {
    /// Human-readable location (e.g., the URL) for the status bar and logs
    fn describe(&self) -> String;

    /// Send one question and wait for its answer
    async fn ask(&self, question: &str) -> Result<String, EndpointError>;
}

/// Request body: `{"question": string}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

impl AskRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Success response body: `{"answer": string}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_request_serializes_question_field() {
        let body = serde_json::to_value(AskRequest::new("How many apples?")).unwrap();
        assert_eq!(body, serde_json::json!({"question": "How many apples?"}));
    }

    #[test]
    fn test_ask_response_ignores_extra_fields() {
        let response: AskResponse =
            serde_json::from_str(r#"{"answer": "42", "model": "x"}"#).unwrap();
        assert_eq!(response.answer, "42");
    }

    #[test]
    fn test_ask_response_requires_answer() {
        let parsed = serde_json::from_str::<AskResponse>(r#"{"reply": "42"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_ask_response_rejects_non_string_answer() {
        let parsed = serde_json::from_str::<AskResponse>(r#"{"answer": 42}"#);
        assert!(parsed.is_err());
    }
}
