// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for greenops-chat
//!
//! `ChatError` covers the application as a whole. `EndpointError` describes
//! why a single question could not be answered; the widget collapses every
//! variant into one fallback message and keeps the detail for diagnostics.

use thiserror::Error;

/// Main error type for greenops-chat operations
#[derive(Error, Debug)]
pub enum ChatError {
    /// Answering endpoint errors
    #[error("Endpoint error: {0}")]
    Endpoint(#[from] EndpointError),

    /// The trimmed question was empty
    #[error("Empty input")]
    EmptyInput,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup or rendering errors
    #[error("Terminal error: {0}")]
    Tui(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Reasons a request to the answering endpoint failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// The request could not be sent or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("HTTP status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Success status, but the body was not `{"answer": string}`
    #[error("Invalid endpoint response: {0}")]
    InvalidResponse(String),

    /// The configured request timeout elapsed
    #[error("Request timed out")]
    Timeout,

    /// The request task stopped before producing an outcome
    #[error("Request ended without a reply")]
    Interrupted,
}

impl EndpointError {
    /// Short label used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            EndpointError::Network(_) => "network",
            EndpointError::HttpStatus { .. } => "http_status",
            EndpointError::InvalidResponse(_) => "invalid_response",
            EndpointError::Timeout => "timeout",
            EndpointError::Interrupted => "interrupted",
        }
    }
}

/// Result type alias for greenops-chat operations
pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_empty_input() {
        let err = ChatError::EmptyInput;
        assert_eq!(err.to_string(), "Empty input");
    }

    #[test]
    fn test_chat_error_config() {
        let err = ChatError::Config("bad url".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("bad url"));
    }

    #[test]
    fn test_chat_error_tui() {
        let err = ChatError::Tui("raw mode".to_string());
        assert!(err.to_string().contains("Terminal error"));
    }

    #[test]
    fn test_chat_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ChatError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_chat_error_from_endpoint_error() {
        let err: ChatError = EndpointError::Timeout.into();
        assert!(err.to_string().contains("Endpoint error"));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_endpoint_error_http_status() {
        let err = EndpointError::HttpStatus {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn test_endpoint_error_kinds() {
        assert_eq!(EndpointError::Network("x".into()).kind(), "network");
        assert_eq!(
            EndpointError::HttpStatus {
                status: 500,
                message: String::new()
            }
            .kind(),
            "http_status"
        );
        assert_eq!(
            EndpointError::InvalidResponse("x".into()).kind(),
            "invalid_response"
        );
        assert_eq!(EndpointError::Timeout.kind(), "timeout");
        assert_eq!(EndpointError::Interrupted.kind(), "interrupted");
    }

    #[test]
    fn test_endpoint_error_clone_eq() {
        let err = EndpointError::Network("refused".to_string());
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn test_result_type_alias() {
        fn test_fn() -> Result<i32> {
            Err(ChatError::EmptyInput)
        }

        assert!(test_fn().is_err());
    }
}
