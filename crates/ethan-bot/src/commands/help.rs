//! Help command - lists available commands.

use crate::commands::CommandHandler;
use crate::delivery::Reply;
use crate::error::AppResult;
use async_trait::async_trait;
use telegram_client::BotMessage;

const COMMANDS: &[(&str, &str)] = &[
    ("/ethan_mode_activate", "Activate ETHAN MODE"),
    ("/ethan_mode_gif", "Send an ETHAN MODE GIF"),
    ("/ethan_mode_gif_on", "Enable GIFs in this chat"),
    ("/ethan_mode_gif_off", "Disable GIFs in this chat"),
    ("/ethan_mode_settings", "Show this chat's settings"),
    ("/ethan_mode_help", "Show this message"),
];

pub struct HelpHandler {
    passive_replies: bool,
}

impl HelpHandler {
    pub fn new(passive_replies: bool) -> Self {
        Self { passive_replies }
    }

    fn html(&self) -> String {
        let mut text = String::from("<b>ETHAN MODE</b>\n\n");
        for (command, description) in COMMANDS {
            text.push_str(&format!("{} - {}\n", command, description));
        }
        if self.passive_replies {
            text.push_str("\n<i>In groups I may chime in on my own. Mention me to get a guaranteed reply.</i>");
        }
        text
    }

    fn plain(&self) -> String {
        let mut text = String::from("ETHAN MODE\n\n");
        for (command, description) in COMMANDS {
            text.push_str(&format!("{} - {}\n", command, description));
        }
        if self.passive_replies {
            text.push_str("\nIn groups I may chime in on my own. Mention me to get a guaranteed reply.");
        }
        text
    }
}

impl Default for HelpHandler {
    fn default() -> Self {
        Self::new(false)
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn name(&self) -> &str {
        "help"
    }

    fn triggers(&self) -> &[&str] {
        &["ethan_mode_help", "start"]
    }

    async fn execute(&self, _message: &BotMessage) -> AppResult<Reply> {
        Ok(Reply::Formatted {
            html: self.html(),
            plain: self.plain(),
        })
    }
}
