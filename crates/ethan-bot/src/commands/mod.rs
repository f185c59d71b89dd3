//! Bot command handlers.

mod activate;
mod gif;
mod gif_toggle;
mod help;
mod passive;
mod settings;

pub use activate::ActivateHandler;
pub use gif::GifHandler;
pub use gif_toggle::GifToggleHandler;
pub use help::HelpHandler;
pub use passive::PassiveReplyHandler;
pub use settings::SettingsHandler;

use crate::delivery::Reply;
use crate::error::AppResult;
use async_trait::async_trait;
use telegram_client::{BotMessage, ChatType};

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handler name for logging.
    fn name(&self) -> &str;

    /// Command names without the leading slash (e.g. "ethan_mode_help").
    fn triggers(&self) -> &[&str] {
        &[]
    }

    /// Whether this is the default handler for non-command messages.
    fn is_default(&self) -> bool {
        false
    }

    /// Check if this handler matches the message.
    fn matches(&self, message: &BotMessage) -> bool {
        match message.command() {
            Some(command) => self.triggers().contains(&command.name),
            None => self.is_default() && !message.is_command(),
        }
    }

    /// Execute the command.
    async fn execute(&self, message: &BotMessage) -> AppResult<Reply>;
}

/// How replies refer to the chat.
pub(crate) fn chat_label(chat_type: ChatType) -> &'static str {
    match chat_type {
        ChatType::Private => "this chat",
        ChatType::Group | ChatType::Supergroup => "this group",
        ChatType::Channel => "this channel",
    }
}
