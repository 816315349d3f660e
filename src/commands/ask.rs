// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! One-shot question command

use std::io::Write;

use crate::config::WidgetConfig;
use crate::endpoint::AnsweringEndpoint;
use crate::error::{ChatError, Result};
use crate::widget::parse_question;

/// How a one-shot question ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskStatus {
    /// The endpoint answered
    Answered,
    /// The fallback text was printed instead
    Fallback,
    /// Blank question; nothing was sent
    Skipped,
}

impl AskStatus {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            AskStatus::Fallback => 1,
            AskStatus::Answered | AskStatus::Skipped => 0,
        }
    }
}

/// Ask one question and print the answer, or the fallback on failure
pub async fn execute<W: Write>(
    question: &str,
    config: &WidgetConfig,
    endpoint: &dyn AnsweringEndpoint,
    out: &mut W,
) -> Result<AskStatus> {
    let question = match parse_question(question) {
        Ok(question) => question,
        Err(ChatError::EmptyInput) => return Ok(AskStatus::Skipped),
        Err(e) => return Err(e),
    };

    tracing::debug!(
        target: "greenops.widget",
        endpoint = %endpoint.describe(),
        "asking one-shot question"
    );

    let status = match endpoint.ask(&question).await {
        Ok(answer) => {
            writeln!(out, "{}", answer)?;
            AskStatus::Answered
        }
        Err(error) => {
            tracing::warn!(
                target: "greenops.widget",
                kind = error.kind(),
                error = %error,
                "error fetching chatbot response"
            );
            writeln!(out, "{}", config.fallback)?;
            AskStatus::Fallback
        }
    };
    out.flush()?;
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FALLBACK;
    use crate::endpoint::MockEndpoint;
    use crate::error::EndpointError;

    async fn run(question: &str, endpoint: &MockEndpoint) -> (AskStatus, String) {
        let mut out = Vec::new();
        let status = execute(question, &WidgetConfig::default(), endpoint, &mut out)
            .await
            .unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_ask_prints_answer() {
        let endpoint = MockEndpoint::answering("42");
        let (status, output) = run("  What is the meaning of life? ", &endpoint).await;

        assert_eq!(status, AskStatus::Answered);
        assert_eq!(output, "42\n");
        assert_eq!(endpoint.questions(), vec!["What is the meaning of life?"]);
        assert_eq!(status.exit_code(), 0);
    }

    #[tokio::test]
    async fn test_ask_prints_fallback_on_failure() {
        let endpoint = MockEndpoint::failing(EndpointError::InvalidResponse("no answer".into()));
        let (status, output) = run("anything", &endpoint).await;

        assert_eq!(status, AskStatus::Fallback);
        assert_eq!(output, format!("{}\n", DEFAULT_FALLBACK));
        assert_eq!(status.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_ask_blank_question_sends_nothing() {
        let endpoint = MockEndpoint::new();
        let (status, output) = run(" \t ", &endpoint).await;

        assert_eq!(status, AskStatus::Skipped);
        assert!(output.is_empty());
        assert_eq!(endpoint.call_count(), 0);
        assert_eq!(status.exit_code(), 0);
    }
}
