// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for greenops-chat
//!
//! Handles loading settings from ~/.greenops-chat/settings.json

use serde::{Deserialize, Serialize};

mod io;
mod validation;

pub use io::{ENDPOINT_ENV, HOME_ENV};

/// Greeting appended by the bot when the widget starts
pub const DEFAULT_GREETING: &str =
    "Hello! I'm Green-Ops AI. Ask me about your inventory, or any other topic!";

/// Text of the transient bot message shown while a request is in flight
pub const DEFAULT_PLACEHOLDER: &str = "...";

/// Bot message shown when a question could not be answered
pub const DEFAULT_FALLBACK: &str = "Sorry, I am having trouble connecting. Please try again later.";

/// Main settings structure, stored in ~/.greenops-chat/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Answering endpoint location
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Fixed widget texts and submission behaviour
    #[serde(default)]
    pub widget: WidgetConfig,

    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Where questions are sent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EndpointConfig {
    /// Scheme, host and port of the answering service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Route of the answering endpoint
    #[serde(default = "default_path")]
    pub path: String,

    /// Request timeout; `None` waits indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
            timeout_secs: None,
        }
    }
}

impl EndpointConfig {
    /// Full URL questions are POSTed to
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}

/// How overlapping submissions are handled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPolicy {
    /// Every submission is dispatched immediately; replies land in arrival order
    #[default]
    Concurrent,
    /// The send control is disabled while a request is outstanding
    Serialized,
}

impl SubmissionPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionPolicy::Concurrent => "concurrent",
            SubmissionPolicy::Serialized => "serialized",
        }
    }
}

/// Widget texts and behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WidgetConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default = "default_fallback")]
    pub fallback: String,

    #[serde(default)]
    pub submission_policy: SubmissionPolicy,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            placeholder: default_placeholder(),
            fallback: default_fallback(),
            submission_policy: SubmissionPolicy::default(),
        }
    }
}

/// Appearance settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Label shown above bot bubbles and in the status bar
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    /// Label shown above user bubbles
    #[serde(default = "default_user_label")]
    pub user_label: String,

    /// Show the local time next to each bubble label
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            user_label: default_user_label(),
            show_timestamps: true,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_path() -> String {
    "/api/chatbot".to_string()
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

fn default_bot_name() -> String {
    "Green-Ops AI".to_string()
}

fn default_user_label() -> String {
    "you".to_string()
}

fn default_true() -> bool {
    true
}
