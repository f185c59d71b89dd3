//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0:#}")]
    Config(#[from] anyhow::Error),

    #[error("Telegram error: {0}")]
    Telegram(#[from] telegram_client::TelegramError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] openai_client::OpenAiError),

    #[error("Giphy error: {0}")]
    Giphy(#[from] giphy_client::GiphyError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
