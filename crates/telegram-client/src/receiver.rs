//! Update receiver with long polling.

use crate::client::TelegramClient;
use crate::types::BotMessage;
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::types::UpdateKind;
use tokio::time::sleep;
use tokio_stream::Stream;
use tracing::{debug, error, warn};

/// Longest `getUpdates` wait we ask for.
///
/// teloxide's default HTTP client gives up after 17 s, so a longer poll would
/// time out client-side before Telegram answers.
pub const MAX_POLL_TIMEOUT: Duration = Duration::from_secs(15);

/// Receiver that long-polls `getUpdates` for new messages.
pub struct UpdateReceiver {
    client: TelegramClient,
    poll_timeout: Duration,
}

impl UpdateReceiver {
    /// `poll_timeout` is capped at [`MAX_POLL_TIMEOUT`].
    pub fn new(client: TelegramClient, poll_timeout: Duration) -> Self {
        let poll_timeout = if poll_timeout > MAX_POLL_TIMEOUT {
            warn!(
                "Poll timeout {:?} exceeds the HTTP client timeout, using {:?}",
                poll_timeout, MAX_POLL_TIMEOUT
            );
            MAX_POLL_TIMEOUT
        } else {
            poll_timeout
        };

        Self {
            client,
            poll_timeout,
        }
    }

    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout
    }

    /// Start receiving text messages as an async stream.
    pub fn stream(self) -> impl Stream<Item = BotMessage> {
        async_stream::stream! {
            let mut offset: i32 = 0;
            let timeout = self.poll_timeout.as_secs() as u32;

            loop {
                let updates = self
                    .client
                    .bot()
                    .get_updates()
                    .offset(offset)
                    .timeout(timeout)
                    .await;

                match updates {
                    Ok(updates) => {
                        for update in updates {
                            offset = update.id.as_offset();

                            if let UpdateKind::Message(msg) = update.kind {
                                if let Some(bot_msg) = BotMessage::from_message(&msg) {
                                    debug!(
                                        "Received: {} from chat {}",
                                        bot_msg.text.chars().take(50).collect::<String>(),
                                        bot_msg.chat_id
                                    );
                                    yield bot_msg;
                                }
                            }
                        }
                    }
                    Err(e) => {
                        error!("Receive error: {}", e);
                        // Back off on error
                        sleep(Duration::from_secs(5)).await;
                    }
                }
            }
        }
    }
}
