// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use reqwest::Url;

use crate::error::{ChatError, Result};

use super::Settings;

impl Settings {
    /// Reject settings the widget cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.endpoint.path.starts_with('/') {
            return Err(ChatError::Config(format!(
                "endpoint.path must start with '/': {}",
                self.endpoint.path
            )));
        }

        validate_base_url(&self.endpoint.base_url)?;

        if self.endpoint.timeout_secs == Some(0) {
            return Err(ChatError::Config(
                "endpoint.timeout_secs must be greater than zero".to_string(),
            ));
        }

        for (field, value) in [
            ("widget.greeting", &self.widget.greeting),
            ("widget.placeholder", &self.widget.placeholder),
            ("widget.fallback", &self.widget.fallback),
            ("appearance.bot_name", &self.appearance.bot_name),
            ("appearance.user_label", &self.appearance.user_label),
        ] {
            if value.trim().is_empty() {
                return Err(ChatError::Config(format!("{field} cannot be empty")));
            }
        }

        Ok(())
    }
}

/// The base URL must parse, use http(s) and name a host.
fn validate_base_url(base_url: &str) -> Result<()> {
    let parsed = Url::parse(base_url).map_err(|e| {
        ChatError::Config(format!("endpoint.base_url is not a valid URL ({e}): {base_url}"))
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ChatError::Config(format!(
            "endpoint.base_url must be an http(s) URL: {base_url}"
        )));
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ChatError::Config(format!(
            "endpoint.base_url has no host: {base_url}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut settings = Settings::default();
        settings.endpoint.base_url = "ftp://example.com".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("http(s) URL"));
    }

    #[test]
    fn test_rejects_base_url_without_host() {
        let mut settings = Settings::default();
        settings.endpoint.base_url = "https://".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_base_url_that_does_not_parse() {
        let mut settings = Settings::default();
        settings.endpoint.base_url = "http://exa mple.com".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("not a valid URL"));
    }

    #[test]
    fn test_rejects_base_url_without_scheme() {
        let mut settings = Settings::default();
        settings.endpoint.base_url = "localhost:5000".to_string();
        assert!(matches!(settings.validate(), Err(ChatError::Config(_))));
    }

    #[test]
    fn test_accepts_host_with_port_and_trailing_slash() {
        let mut settings = Settings::default();
        settings.endpoint.base_url = "https://inventory.example.com:8443/".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_relative_path() {
        let mut settings = Settings::default();
        settings.endpoint.path = "api/chatbot".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.endpoint.timeout_secs = Some(0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_texts() {
        let mut settings = Settings::default();
        settings.widget.placeholder = "   ".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("widget.placeholder"));
    }
}
