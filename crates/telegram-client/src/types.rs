//! Inbound message model.

use teloxide::types::{Message, MessageEntityKind};

/// Kind of chat a message arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatType {
    /// Group and supergroup chats.
    pub fn is_group(&self) -> bool {
        matches!(self, ChatType::Group | ChatType::Supergroup)
    }
}

/// Outbound text formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Html,
}

/// A parsed `/command@bot` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation<'a> {
    pub name: &'a str,
    /// Bot username after `@`, if the command was addressed to one.
    pub bot: Option<&'a str>,
}

/// Parsed message for bot processing.
#[derive(Debug, Clone)]
pub struct BotMessage {
    pub chat_id: i64,
    pub chat_type: ChatType,
    pub message_id: i32,
    pub text: String,
    /// `@username` mentions, lower-cased and without the `@`.
    pub mentions: Vec<String>,
}

impl BotMessage {
    /// Extract a bot message from a Telegram message. Non-text messages yield `None`.
    pub fn from_message(msg: &Message) -> Option<Self> {
        let text = msg.text()?.to_string();

        let chat_type = if msg.chat.is_private() {
            ChatType::Private
        } else if msg.chat.is_supergroup() {
            ChatType::Supergroup
        } else if msg.chat.is_group() {
            ChatType::Group
        } else {
            ChatType::Channel
        };

        let mentions = msg
            .parse_entities()
            .unwrap_or_default()
            .iter()
            .filter(|e| matches!(e.kind(), MessageEntityKind::Mention))
            .map(|e| e.text().trim_start_matches('@').to_lowercase())
            .collect();

        Some(Self {
            chat_id: msg.chat.id.0,
            chat_type,
            message_id: msg.id.0,
            text,
            mentions,
        })
    }

    pub fn is_group(&self) -> bool {
        self.chat_type.is_group()
    }

    /// Whether the text is a slash command.
    pub fn is_command(&self) -> bool {
        self.text.trim_start().starts_with('/')
    }

    /// Parse the leading `/command[@bot]`; any arguments are ignored.
    pub fn command(&self) -> Option<CommandInvocation<'_>> {
        let text = self.text.trim_start();
        let rest = text.strip_prefix('/')?;

        let head = rest.split(char::is_whitespace).next()?;

        let (name, bot) = match head.split_once('@') {
            Some((name, bot)) => (name, Some(bot)),
            None => (head, None),
        };

        if name.is_empty() {
            return None;
        }

        Some(CommandInvocation { name, bot })
    }

    /// Whether the message mentions `username` (with or without a leading `@`).
    ///
    /// Matches parsed mention entities, or an `@username` in the text that is
    /// not part of a longer handle or address.
    pub fn mentions_user(&self, username: &str) -> bool {
        let username = username.trim_start_matches('@').to_lowercase();
        if username.is_empty() {
            return false;
        }

        if self.mentions.iter().any(|m| *m == username) {
            return true;
        }

        let text = self.text.to_lowercase();
        let needle = format!("@{}", username);
        text.match_indices(&needle).any(|(start, _)| {
            let before = text[..start].chars().next_back();
            let after = text[start + needle.len()..].chars().next();
            !before.is_some_and(is_handle_char) && !after.is_some_and(is_handle_char)
        })
    }
}

/// Characters allowed in a Telegram username.
fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
