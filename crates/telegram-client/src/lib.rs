//! Telegram Bot API client built on teloxide.

mod client;
mod error;
mod receiver;
mod types;

pub use client::{Messenger, TelegramClient};
pub use error::TelegramError;
pub use receiver::{UpdateReceiver, MAX_POLL_TIMEOUT};
pub use types::*;
