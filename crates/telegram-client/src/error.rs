//! Telegram client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("Request error: {0}")]
    Request(#[from] teloxide::RequestError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
