//! GIF command - an ETHAN MODE GIF on demand.

use crate::commands::CommandHandler;
use crate::delivery::Reply;
use crate::error::AppResult;
use crate::media::MediaSource;
use crate::persona::FALLBACK_REPLY;
use async_trait::async_trait;
use std::sync::Arc;
use telegram_client::BotMessage;

pub struct GifHandler {
    media: Arc<dyn MediaSource>,
    keyword: String,
}

impl GifHandler {
    pub fn new(media: Arc<dyn MediaSource>, keyword: impl Into<String>) -> Self {
        Self {
            media,
            keyword: keyword.into(),
        }
    }
}

#[async_trait]
impl CommandHandler for GifHandler {
    fn name(&self) -> &str {
        "gif"
    }

    fn triggers(&self) -> &[&str] {
        &["ethan_mode_gif"]
    }

    // An explicit request, so the per-chat GIF flag does not apply.
    async fn execute(&self, _message: &BotMessage) -> AppResult<Reply> {
        Ok(match self.media.resolve(Some(&self.keyword)).await {
            Some(url) => Reply::Animation {
                url,
                caption: Some(FALLBACK_REPLY.to_string()),
            },
            None => Reply::text(format!("{} (no GIF available right now)", FALLBACK_REPLY)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{message, CountingMedia};
    use telegram_client::ChatType;

    #[tokio::test]
    async fn test_sends_gif_with_fixed_keyword() {
        let media = Arc::new(CountingMedia::new(Some("https://media.giphy.com/media/x/giphy.gif")));
        let handler = GifHandler::new(media.clone(), "ethan mode");

        let reply = handler
            .execute(&message(ChatType::Group, "/ethan_mode_gif"))
            .await
            .unwrap();

        assert_eq!(
            reply,
            Reply::Animation {
                url: "https://media.giphy.com/media/x/giphy.gif".into(),
                caption: Some(FALLBACK_REPLY.into()),
            }
        );
        assert_eq!(
            media.hints.lock().unwrap().clone(),
            vec![Some("ethan mode".to_string())]
        );
    }

    #[tokio::test]
    async fn test_no_gif_sends_text() {
        let handler = GifHandler::new(Arc::new(CountingMedia::new(None)), "ethan mode");
        let reply = handler
            .execute(&message(ChatType::Private, "/ethan_mode_gif"))
            .await
            .unwrap();

        assert!(matches!(reply, Reply::Text(ref t) if t.starts_with(FALLBACK_REPLY)));
    }

    #[test]
    fn test_does_not_match_toggle_commands() {
        let handler = GifHandler::new(Arc::new(CountingMedia::new(None)), "ethan mode");
        assert!(handler.matches(&message(ChatType::Group, "/ethan_mode_gif")));
        assert!(!handler.matches(&message(ChatType::Group, "/ethan_mode_gif_on")));
        assert!(!handler.matches(&message(ChatType::Group, "/ethan_mode_gif_off")));
    }
}
