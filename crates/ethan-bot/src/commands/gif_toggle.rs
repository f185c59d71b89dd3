//! GIF on/off commands.

use crate::commands::{chat_label, CommandHandler};
use crate::delivery::Reply;
use crate::error::AppResult;
use async_trait::async_trait;
use chat_settings::ChatSettingsStore;
use std::sync::Arc;
use telegram_client::BotMessage;
use tracing::info;

pub struct GifToggleHandler {
    settings: Arc<ChatSettingsStore>,
    enable: bool,
}

impl GifToggleHandler {
    /// Handler for `/ethan_mode_gif_on`.
    pub fn on(settings: Arc<ChatSettingsStore>) -> Self {
        Self {
            settings,
            enable: true,
        }
    }

    /// Handler for `/ethan_mode_gif_off`.
    pub fn off(settings: Arc<ChatSettingsStore>) -> Self {
        Self {
            settings,
            enable: false,
        }
    }
}

#[async_trait]
impl CommandHandler for GifToggleHandler {
    fn name(&self) -> &str {
        if self.enable {
            "gif_on"
        } else {
            "gif_off"
        }
    }

    fn triggers(&self) -> &[&str] {
        if self.enable {
            &["ethan_mode_gif_on"]
        } else {
            &["ethan_mode_gif_off"]
        }
    }

    async fn execute(&self, message: &BotMessage) -> AppResult<Reply> {
        self.settings.set_enabled(message.chat_id, self.enable).await;

        let label = chat_label(message.chat_type);
        let chats = self.settings.chat_count().await;
        info!(
            chat_id = message.chat_id,
            enabled = self.enable,
            chats = chats,
            "GIF setting changed"
        );

        Ok(if self.enable {
            Reply::Text(format!("GIFs enabled for {}. ETHAN MODE now comes with visuals.", label))
        } else {
            Reply::Text(format!("GIFs disabled for {}. ETHAN MODE goes text-only.", label))
        })
    }
}
