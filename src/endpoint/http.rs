// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP answering endpoint
//!
//! POSTs `{"question": ...}` as JSON and expects `{"answer": ...}` back.
//! Any non-2xx status is a failure regardless of body. No retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::EndpointConfig;
use crate::error::{EndpointError, Result};

use super::client::{AnsweringEndpoint, AskRequest, AskResponse};

/// Longest slice of an error body kept for diagnostics
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Answering endpoint reached over HTTP
pub struct HttpEndpoint {
    client: Client,
    url: String,
}

impl HttpEndpoint {
    /// Create an endpoint for a full URL with no request timeout
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Build from settings, honouring the optional timeout
    pub fn from_config(config: &EndpointConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            url: config.url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AnsweringEndpoint for HttpEndpoint {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn ask(&self, question: &str) -> std::result::Result<String, EndpointError> {
        tracing::debug!(
            target: "greenops.endpoint",
            url = %self.url,
            question_chars = question.chars().count(),
            "posting question"
        );

        let response = self
            .client
            .post(&self.url)
            .json(&AskRequest::new(question))
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(
                target: "greenops.endpoint",
                status = status.as_u16(),
                "endpoint returned non-success status"
            );
            return Err(EndpointError::HttpStatus {
                status: status.as_u16(),
                message: truncate_chars(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let body: AskResponse = response
            .json()
            .await
            .map_err(|e| EndpointError::InvalidResponse(e.to_string()))?;

        Ok(body.answer)
    }
}

fn classify_send_error(err: reqwest::Error) -> EndpointError {
    if err.is_timeout() {
        EndpointError::Timeout
    } else {
        EndpointError::Network(err.to_string())
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
