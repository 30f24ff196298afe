//! Text-to-speech client for the `/order` command.
//!
//! Sends the spoken order script to an IBM Watson style `synthesize`
//! endpoint with basic auth and returns the raw audio bytes.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::error::{BotError, Result};

/// Default synthesize endpoint.
pub const DEFAULT_TTS_URL: &str = "https://stream.watsonplatform.net/text-to-speech/api/v1/synthesize";

/// Default audio format requested from the service.
pub const DEFAULT_TTS_ACCEPT: &str = "audio/wav";

/// Pause marker the service understands in place of a line break.
const BREAK_TAG: &str = "<break/>";

/// Connection settings for the TTS service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsConfig {
    /// Synthesize endpoint URL.
    pub url: String,
    /// Basic auth user name.
    pub username: String,
    /// Basic auth password.
    pub password: String,
    /// Value of the `Accept` header (audio format).
    pub accept: String,
}

impl TtsConfig {
    /// Creates a config for the default endpoint and audio format.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url: DEFAULT_TTS_URL.to_string(),
            username: username.into(),
            password: password.into(),
            accept: DEFAULT_TTS_ACCEPT.to_string(),
        }
    }

    /// Reads `TTS_URL`, `TTS_USERNAME`, `TTS_PASSWORD` and `TTS_ACCEPT`.
    ///
    /// Returns `None` unless both credentials are set.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = lookup("TTS_USERNAME").filter(|v| !v.is_empty())?;
        let password = lookup("TTS_PASSWORD").filter(|v| !v.is_empty())?;

        let mut config = Self::new(username, password);
        if let Some(url) = lookup("TTS_URL") {
            config.url = url;
        }
        if let Some(accept) = lookup("TTS_ACCEPT") {
            config.accept = accept;
        }
        Some(config)
    }
}

/// Error body returned by the service on failure.
#[derive(Debug, Deserialize)]
struct TtsErrorBody {
    error: String,
    #[serde(default)]
    code: Option<u16>,
}

/// Request body for a script: line breaks become `<break/>` pauses.
pub fn tts_payload(script: &str) -> serde_json::Value {
    serde_json::json!({ "text": script.replace('\n', BREAK_TAG) })
}

/// Extracts the message from a service error body.
fn error_detail(body: &[u8]) -> Result<String> {
    let parsed: TtsErrorBody = serde_json::from_slice(body)?;
    Ok(match parsed.code {
        Some(code) => format!("{} ({})", parsed.error, code),
        None => parsed.error,
    })
}

/// HTTP client for the TTS service.
#[derive(Debug, Clone)]
pub struct TtsClient {
    config: TtsConfig,
    http: reqwest::Client,
}

impl TtsClient {
    /// Creates a client with the given settings.
    pub fn new(config: TtsConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// The settings this client was created with.
    pub fn config(&self) -> &TtsConfig {
        &self.config
    }

    /// Synthesizes `script` and returns the audio bytes.
    pub async fn synthesize(&self, script: &str) -> Result<Vec<u8>> {
        debug!(url = %self.config.url, chars = script.len(), "Requesting speech synthesis");

        let response = self
            .http
            .post(&self.config.url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, self.config.accept.as_str())
            .json(&tts_payload(script))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = error_detail(&body).unwrap_or_else(|e| e.to_string());
            error!(status = status.as_u16(), detail = %detail, "Speech synthesis failed");
            return Err(BotError::TtsStatus(status.as_u16()));
        }

        info!(bytes = body.len(), "Speech synthesis complete");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_payload_replaces_line_breaks() {
        let payload = tts_payload("Hi.\nCan I have 2 Burger\nThank you!\n");
        assert_eq!(
            payload,
            serde_json::json!({ "text": "Hi.<break/>Can I have 2 Burger<break/>Thank you!<break/>" })
        );
    }

    #[test]
    fn test_payload_escapes_quotes() {
        let payload = tts_payload("2 \"Special\" burger");
        let wire = serde_json::to_string(&payload).unwrap();
        assert_eq!(wire, r#"{"text":"2 \"Special\" burger"}"#);
    }

    #[test]
    fn test_config_defaults() {
        let config = TtsConfig::new("user", "pass");
        assert_eq!(config.url, DEFAULT_TTS_URL);
        assert_eq!(config.accept, DEFAULT_TTS_ACCEPT);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = TtsConfig::from_lookup(lookup_from(&[
            ("TTS_USERNAME", "user"),
            ("TTS_PASSWORD", "pass"),
            ("TTS_ACCEPT", "audio/ogg;codecs=opus"),
        ]))
        .unwrap();

        assert_eq!(config.username, "user");
        assert_eq!(config.password, "pass");
        assert_eq!(config.url, DEFAULT_TTS_URL);
        assert_eq!(config.accept, "audio/ogg;codecs=opus");
    }

    #[test]
    fn test_config_requires_credentials() {
        assert!(TtsConfig::from_lookup(lookup_from(&[("TTS_USERNAME", "user")])).is_none());
        assert!(TtsConfig::from_lookup(lookup_from(&[
            ("TTS_USERNAME", ""),
            ("TTS_PASSWORD", "pass"),
        ]))
        .is_none());
        assert!(TtsConfig::from_lookup(lookup_from(&[])).is_none());
    }

    #[test]
    fn test_error_detail() {
        let body = br#"{"error":"Unauthorized","code":401}"#;
        assert_eq!(error_detail(body).unwrap(), "Unauthorized (401)");

        let body = br#"{"error":"Bad voice"}"#;
        assert_eq!(error_detail(body).unwrap(), "Bad voice");

        assert!(matches!(error_detail(b"<html>"), Err(BotError::JsonError(_))));
    }

    #[tokio::test]
    async fn test_synthesize_unreachable_host() {
        let mut config = TtsConfig::new("user", "pass");
        config.url = "http://127.0.0.1:1/synthesize".to_string();

        let client = TtsClient::new(config);
        let result = client.synthesize("Hi.\n").await;
        assert!(matches!(result, Err(BotError::HttpError(_))));
    }
}
