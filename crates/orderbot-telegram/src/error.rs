//! Error types for the Telegram bot.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the Telegram bot.
#[derive(Debug, Error)]
pub enum BotError {
    /// Bot token not provided or invalid.
    #[error("Telegram bot token not set. Set TELEGRAM_BOT_TOKEN environment variable.")]
    NoToken,

    /// Failed to start the bot.
    #[error("Failed to start bot: {0}")]
    BotStartFailed(String),

    /// TTS credentials are missing.
    #[error("Text-to-speech not configured. Set TTS_USERNAME and TTS_PASSWORD.")]
    TtsNotConfigured,

    /// TTS service answered with a non-success status.
    #[error("Text-to-speech request failed with status {0}")]
    TtsStatus(u16),

    /// Menu image file not found on disk.
    #[error("Menu image not found: {}", .0.display())]
    MenuAssetMissing(PathBuf),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for Telegram operations.
pub type Result<T> = std::result::Result<T, BotError>;

impl From<reqwest::Error> for BotError {
    fn from(e: reqwest::Error) -> Self {
        BotError::HttpError(e.to_string())
    }
}
