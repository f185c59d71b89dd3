//! Outbound reply plans and their delivery.

use crate::persona::FALLBACK_REPLY;
use serde::Deserialize;
use telegram_client::{Messenger, TextFormat};
use tracing::{debug, error, warn};

/// How an activation reply combines text and GIF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// GIF with the text as caption, in one message.
    #[default]
    Caption,
    /// GIF first, then the text as its own message.
    Separate,
    /// Uniform pick of text-only, caption or separate per activation.
    Random,
    /// Never attach a GIF.
    TextOnly,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Caption => "caption",
            DeliveryMode::Separate => "separate",
            DeliveryMode::Random => "random",
            DeliveryMode::TextOnly => "text_only",
        }
    }
}

/// What a handler wants sent back to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to send.
    None,
    Text(String),
    /// HTML text with a plain-text variant used if formatting is rejected.
    Formatted { html: String, plain: String },
    Animation { url: String, caption: Option<String> },
    AnimationThenText { url: String, text: String },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Reply::None)
    }
}

/// Send a reply. Failures are logged and never propagated.
pub async fn deliver(messenger: &dyn Messenger, chat_id: i64, reply: &Reply) {
    match reply {
        Reply::None => {}
        Reply::Text(text) => {
            if let Err(e) = messenger.send_text(chat_id, text, None).await {
                error!(chat_id, "Failed to send reply: {}", e);
            }
        }
        Reply::Formatted { html, plain } => {
            if let Err(e) = messenger.send_text(chat_id, html, Some(TextFormat::Html)).await {
                warn!(chat_id, "Formatted send failed, retrying as plain text: {}", e);
                if let Err(e) = messenger.send_text(chat_id, plain, None).await {
                    error!(chat_id, "Failed to send plain reply: {}", e);
                }
            }
        }
        Reply::Animation { url, caption } => {
            if let Err(e) = messenger.send_animation(chat_id, url, caption.as_deref()).await {
                warn!(chat_id, "Failed to send GIF, falling back to text: {}", e);
                let text = caption.as_deref().unwrap_or(FALLBACK_REPLY);
                if let Err(e) = messenger.send_text(chat_id, text, None).await {
                    error!(chat_id, "Failed to send fallback text: {}", e);
                }
            }
        }
        Reply::AnimationThenText { url, text } => {
            if let Err(e) = messenger.send_animation(chat_id, url, None).await {
                warn!(chat_id, "Failed to send GIF: {}", e);
            }
            if let Err(e) = messenger.send_text(chat_id, text, None).await {
                error!(chat_id, "Failed to send reply: {}", e);
            }
        }
    }
    debug!(chat_id, "Reply delivered");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingMessenger, Sent};

    const GIF: &str = "https://media.giphy.com/media/abc/giphy.gif";

    #[tokio::test]
    async fn test_none_sends_nothing() {
        let messenger = RecordingMessenger::default();
        deliver(&messenger, 1, &Reply::None).await;
        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn test_text_is_one_call() {
        let messenger = RecordingMessenger::default();
        deliver(&messenger, 1, &Reply::text("ETHAN MODE ACTIVATED")).await;

        assert_eq!(
            messenger.sent(),
            vec![Sent::Text {
                chat_id: 1,
                text: "ETHAN MODE ACTIVATED".into(),
                format: None
            }]
        );
    }

    #[tokio::test]
    async fn test_failed_text_is_not_retried() {
        let messenger = RecordingMessenger {
            fail_all: true,
            ..Default::default()
        };
        deliver(&messenger, 1, &Reply::text("hi")).await;
        assert_eq!(messenger.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_formatted_falls_back_to_plain() {
        let messenger = RecordingMessenger {
            fail_formatted: true,
            ..Default::default()
        };
        let reply = Reply::Formatted {
            html: "<b>help</b>".into(),
            plain: "help".into(),
        };

        deliver(&messenger, 1, &reply).await;

        assert_eq!(
            messenger.sent(),
            vec![
                Sent::Text {
                    chat_id: 1,
                    text: "<b>help</b>".into(),
                    format: Some(TextFormat::Html)
                },
                Sent::Text {
                    chat_id: 1,
                    text: "help".into(),
                    format: None
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_formatted_success_sends_once() {
        let messenger = RecordingMessenger::default();
        let reply = Reply::Formatted {
            html: "<b>help</b>".into(),
            plain: "help".into(),
        };

        deliver(&messenger, 1, &reply).await;
        assert_eq!(messenger.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_animation_with_caption_single_call() {
        let messenger = RecordingMessenger::default();
        let reply = Reply::Animation {
            url: GIF.into(),
            caption: Some("ETHAN MODE".into()),
        };

        deliver(&messenger, 1, &reply).await;

        assert_eq!(
            messenger.sent(),
            vec![Sent::Animation {
                chat_id: 1,
                url: GIF.into(),
                caption: Some("ETHAN MODE".into())
            }]
        );
    }

    #[tokio::test]
    async fn test_failed_animation_falls_back_to_caption_text() {
        let messenger = RecordingMessenger {
            fail_animation: true,
            ..Default::default()
        };
        let reply = Reply::Animation {
            url: GIF.into(),
            caption: Some("ETHAN MODE".into()),
        };

        deliver(&messenger, 1, &reply).await;

        let sent = messenger.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(
            sent[1],
            Sent::Text {
                chat_id: 1,
                text: "ETHAN MODE".into(),
                format: None
            }
        );
    }

    #[tokio::test]
    async fn test_failed_uncaptioned_animation_falls_back_to_guaranteed_text() {
        let messenger = RecordingMessenger {
            fail_animation: true,
            ..Default::default()
        };
        let reply = Reply::Animation {
            url: GIF.into(),
            caption: None,
        };

        deliver(&messenger, 1, &reply).await;

        assert_eq!(
            messenger.sent()[1],
            Sent::Text {
                chat_id: 1,
                text: FALLBACK_REPLY.into(),
                format: None
            }
        );
    }

    #[tokio::test]
    async fn test_animation_then_text_sends_both() {
        let messenger = RecordingMessenger::default();
        let reply = Reply::AnimationThenText {
            url: GIF.into(),
            text: "ETHAN MODE".into(),
        };

        deliver(&messenger, 1, &reply).await;

        assert_eq!(
            messenger.sent(),
            vec![
                Sent::Animation {
                    chat_id: 1,
                    url: GIF.into(),
                    caption: None
                },
                Sent::Text {
                    chat_id: 1,
                    text: "ETHAN MODE".into(),
                    format: None
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_animation_then_text_still_sends_text_when_gif_fails() {
        let messenger = RecordingMessenger {
            fail_animation: true,
            ..Default::default()
        };
        let reply = Reply::AnimationThenText {
            url: GIF.into(),
            text: "ETHAN MODE".into(),
        };

        deliver(&messenger, 1, &reply).await;

        let sent = messenger.sent();
        assert_eq!(sent.len(), 2);
        assert!(matches!(sent[1], Sent::Text { .. }));
    }

    #[test]
    fn test_delivery_mode_names() {
        assert_eq!(DeliveryMode::default(), DeliveryMode::Caption);
        assert_eq!(DeliveryMode::TextOnly.as_str(), "text_only");
        let mode: DeliveryMode = serde_json::from_str("\"random\"").unwrap();
        assert_eq!(mode, DeliveryMode::Random);
    }
}
