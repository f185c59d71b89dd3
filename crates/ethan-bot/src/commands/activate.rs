//! Activation command - the main ETHAN MODE reply.

use crate::commands::CommandHandler;
use crate::delivery::{DeliveryMode, Reply};
use crate::error::AppResult;
use crate::media::MediaSource;
use crate::random::RandomSource;
use crate::responder::{Responder, Trigger};
use async_trait::async_trait;
use chat_settings::ChatSettingsStore;
use std::sync::Arc;
use telegram_client::BotMessage;
use tracing::{debug, instrument};

pub struct ActivateHandler {
    responder: Arc<dyn Responder>,
    media: Arc<dyn MediaSource>,
    settings: Arc<ChatSettingsStore>,
    mode: DeliveryMode,
    random: Arc<dyn RandomSource>,
}

impl ActivateHandler {
    pub fn new(
        responder: Arc<dyn Responder>,
        media: Arc<dyn MediaSource>,
        settings: Arc<ChatSettingsStore>,
        mode: DeliveryMode,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            responder,
            media,
            settings,
            mode,
            random,
        }
    }

    /// Resolve `Random` into a concrete mode for this activation.
    fn effective_mode(&self) -> DeliveryMode {
        match self.mode {
            DeliveryMode::Random => match self.random.pick(3) {
                0 => DeliveryMode::TextOnly,
                1 => DeliveryMode::Caption,
                _ => DeliveryMode::Separate,
            },
            mode => mode,
        }
    }
}

#[async_trait]
impl CommandHandler for ActivateHandler {
    fn name(&self) -> &str {
        "activate"
    }

    fn triggers(&self) -> &[&str] {
        &["ethan_mode_activate", "click_to_go_crypto_ethan_mode"]
    }

    #[instrument(skip(self, message), fields(chat_id = message.chat_id))]
    async fn execute(&self, message: &BotMessage) -> AppResult<Reply> {
        let text = self
            .responder
            .generate(&Trigger::command(message.text.trim()))
            .await;

        let mode = self.effective_mode();
        if mode == DeliveryMode::TextOnly || !self.settings.is_enabled(message.chat_id).await {
            return Ok(Reply::Text(text));
        }

        let Some(url) = self.media.resolve(None).await else {
            debug!("No GIF available, sending text only");
            return Ok(Reply::Text(text));
        };

        Ok(match mode {
            DeliveryMode::Separate => Reply::AnimationThenText { url, text },
            _ => Reply::Animation {
                url,
                caption: Some(text),
            },
        })
    }
}
