//! Passive replies - occasional unprompted reactions in group chats.

use crate::commands::CommandHandler;
use crate::delivery::Reply;
use crate::error::AppResult;
use crate::random::RandomSource;
use crate::responder::{Responder, Trigger};
use async_trait::async_trait;
use std::sync::Arc;
use telegram_client::BotMessage;
use tracing::debug;

/// Messages shorter than this (after trimming) never get a passive reply.
const MIN_MESSAGE_CHARS: usize = 6;

pub struct PassiveReplyHandler {
    responder: Arc<dyn Responder>,
    random: Arc<dyn RandomSource>,
    chance: f64,
    bot_username: Option<String>,
}

impl PassiveReplyHandler {
    pub fn new(
        responder: Arc<dyn Responder>,
        random: Arc<dyn RandomSource>,
        chance: f64,
        bot_username: Option<String>,
    ) -> Self {
        Self {
            responder,
            random,
            chance,
            bot_username,
        }
    }

    fn should_reply(&self, message: &BotMessage) -> bool {
        if !message.is_group() || message.is_command() {
            return false;
        }
        if message.text.trim().chars().count() < MIN_MESSAGE_CHARS {
            return false;
        }

        let mentioned = self
            .bot_username
            .as_deref()
            .is_some_and(|username| message.mentions_user(username));

        mentioned || self.random.chance(self.chance)
    }
}

#[async_trait]
impl CommandHandler for PassiveReplyHandler {
    fn name(&self) -> &str {
        "passive"
    }

    fn is_default(&self) -> bool {
        true
    }

    async fn execute(&self, message: &BotMessage) -> AppResult<Reply> {
        if !self.should_reply(message) {
            return Ok(Reply::None);
        }

        debug!(chat_id = message.chat_id, "Passive reply triggered");
        let text = self
            .responder
            .generate(&Trigger::ambient(message.text.trim()))
            .await;

        Ok(Reply::Text(text))
    }
}
