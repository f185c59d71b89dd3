//! Message routing.

use crate::commands::CommandHandler;
use crate::delivery::{deliver, Reply};
use crate::persona::FALLBACK_REPLY;
use telegram_client::{BotMessage, Messenger};
use tracing::{debug, error, info};

/// Routes each message to the first matching handler and delivers its reply.
pub struct Dispatcher {
    handlers: Vec<Box<dyn CommandHandler>>,
    bot_username: Option<String>,
}

impl Dispatcher {
    pub fn new(handlers: Vec<Box<dyn CommandHandler>>, bot_username: Option<String>) -> Self {
        Self {
            handlers,
            bot_username,
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Find the handler for a message, if any.
    pub fn route(&self, message: &BotMessage) -> Option<&dyn CommandHandler> {
        if let Some(command) = message.command() {
            if let (Some(target), Some(me)) = (command.bot, self.bot_username.as_deref()) {
                if !target.eq_ignore_ascii_case(me.trim_start_matches('@')) {
                    debug!(command = command.name, bot = target, "Command addressed to another bot");
                    return None;
                }
            }
        }

        self.handlers
            .iter()
            .find(|h| h.matches(message))
            .map(|h| h.as_ref())
    }

    /// Handle one message end to end. Never fails.
    pub async fn dispatch(&self, message: &BotMessage, messenger: &dyn Messenger) {
        let Some(handler) = self.route(message) else {
            return;
        };

        if message.is_command() {
            info!(chat_id = message.chat_id, command = handler.name(), "Handling command");
        }

        let reply = match handler.execute(message).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(chat_id = message.chat_id, handler = handler.name(), "Handler error: {}", e);
                Reply::text(FALLBACK_REPLY)
            }
        };

        deliver(messenger, message.chat_id, &reply).await;
    }
}
