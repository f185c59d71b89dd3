//! Settings command - shows this chat's configuration.

use crate::commands::{chat_label, CommandHandler};
use crate::delivery::{DeliveryMode, Reply};
use crate::error::AppResult;
use async_trait::async_trait;
use chat_settings::ChatSettingsStore;
use std::sync::Arc;
use telegram_client::BotMessage;

pub struct SettingsHandler {
    settings: Arc<ChatSettingsStore>,
    delivery_mode: DeliveryMode,
    ai_enabled: bool,
    gif_source: &'static str,
}

impl SettingsHandler {
    pub fn new(
        settings: Arc<ChatSettingsStore>,
        delivery_mode: DeliveryMode,
        ai_enabled: bool,
        gif_source: &'static str,
    ) -> Self {
        Self {
            settings,
            delivery_mode,
            ai_enabled,
            gif_source,
        }
    }
}

#[async_trait]
impl CommandHandler for SettingsHandler {
    fn name(&self) -> &str {
        "settings"
    }

    fn triggers(&self) -> &[&str] {
        &["ethan_mode_settings"]
    }

    async fn execute(&self, message: &BotMessage) -> AppResult<Reply> {
        let record = self.settings.get(message.chat_id).await;
        let gifs = match &record {
            Some(settings) => format!(
                "{} (changed {})",
                on_off(settings.gif_enabled),
                settings.updated_at.format("%Y-%m-%d %H:%M UTC")
            ),
            None => format!("{} (default)", on_off(self.settings.default_enabled())),
        };

        Ok(Reply::Text(format!(
            "ETHAN MODE settings for {}:\n\
             GIFs: {}\n\
             GIF source: {}\n\
             Delivery: {}\n\
             AI replies: {}",
            chat_label(message.chat_type),
            gifs,
            self.gif_source,
            self.delivery_mode.as_str(),
            if self.ai_enabled { "enabled" } else { "disabled" },
        )))
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "ON"
    } else {
        "OFF"
    }
}
