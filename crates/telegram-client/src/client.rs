//! Telegram Bot API client.

use crate::error::TelegramError;
use crate::types::TextFormat;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode};
use tracing::{debug, instrument, warn};
use url::Url;

/// Outbound side of the messaging platform.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a text message, optionally with a parse mode.
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        format: Option<TextFormat>,
    ) -> Result<(), TelegramError>;

    /// Send an animation by URL with an optional caption.
    async fn send_animation(
        &self,
        chat_id: i64,
        url: &str,
        caption: Option<&str>,
    ) -> Result<(), TelegramError>;
}

/// Thin wrapper around `teloxide::Bot`.
#[derive(Clone)]
pub struct TelegramClient {
    bot: Bot,
}

impl TelegramClient {
    /// Create a client against the public Bot API.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            bot: Bot::new(token),
        }
    }

    /// Create a client against a custom Bot API server.
    pub fn with_api_url(token: impl Into<String>, api_url: &str) -> Result<Self, TelegramError> {
        let url = Url::parse(api_url)?;
        Ok(Self {
            bot: Bot::new(token).set_api_url(url),
        })
    }

    /// The underlying teloxide bot.
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Username of this bot, via `getMe`.
    #[instrument(skip(self))]
    pub async fn username(&self) -> Result<Option<String>, TelegramError> {
        let me = self.bot.get_me().await?;
        Ok(me.user.username.clone())
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    #[instrument(skip(self, text))]
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        format: Option<TextFormat>,
    ) -> Result<(), TelegramError> {
        let request = self.bot.send_message(ChatId(chat_id), text);
        let result = match format {
            Some(TextFormat::Html) => request.parse_mode(ParseMode::Html).await,
            None => request.await,
        };

        if let Err(e) = result {
            warn!("Send failed: {}", e);
            return Err(e.into());
        }

        debug!("Sent text to {}", chat_id);
        Ok(())
    }

    #[instrument(skip(self, caption))]
    async fn send_animation(
        &self,
        chat_id: i64,
        url: &str,
        caption: Option<&str>,
    ) -> Result<(), TelegramError> {
        let media = InputFile::url(Url::parse(url)?);
        let request = self.bot.send_animation(ChatId(chat_id), media);
        let result = match caption {
            Some(caption) => request.caption(caption).await,
            None => request.await,
        };

        if let Err(e) = result {
            warn!("Animation send failed: {}", e);
            return Err(e.into());
        }

        debug!("Sent animation to {}", chat_id);
        Ok(())
    }
}
