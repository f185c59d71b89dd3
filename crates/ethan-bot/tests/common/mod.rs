//! Common test utilities for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use ethan_bot::random::RandomSource;
use ethan_bot::Config;
use std::collections::HashMap;
use std::sync::Mutex;
use telegram_client::{BotMessage, ChatType, Messenger, TelegramError, TextFormat};
use wiremock::MockServer;

pub const BOT_TOKEN: &str = "123:test-token";

/// Build a config from the given variables plus a bot token.
pub fn test_config(pairs: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    vars.entry("TELEGRAM_BOT_TOKEN".into())
        .or_insert_with(|| BOT_TOKEN.into());
    Config::from_vars(vars).unwrap()
}

/// Config pointing both optional services at mock servers.
pub fn mocked_services_config(
    openai: &MockServer,
    giphy: &MockServer,
    extra: &[(&str, &str)],
) -> Config {
    let openai_url = openai.uri();
    let giphy_url = giphy.uri();
    let mut pairs = vec![
        ("OPENAI_API_KEY", "test-api-key"),
        ("OPENAI__BASE_URL", openai_url.as_str()),
        ("OPENAI__MODEL", "test-model"),
        ("GIPHY_API_KEY", "test-giphy-key"),
        ("GIPHY__BASE_URL", giphy_url.as_str()),
    ];
    pairs.extend_from_slice(extra);
    test_config(&pairs)
}

pub fn chat_completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 15, "total_tokens": 25}
    })
}

pub fn giphy_search(id: &str) -> serde_json::Value {
    serde_json::json!({
        "data": [{
            "id": id,
            "images": {
                "original": {"url": format!("https://media.giphy.com/media/{}/giphy.gif", id)}
            }
        }],
        "meta": {"status": 200, "msg": "OK"}
    })
}

pub fn message(chat_type: ChatType, text: &str) -> BotMessage {
    BotMessage {
        chat_id: if chat_type.is_group() { -1001 } else { 42 },
        chat_type,
        message_id: 7,
        text: text.into(),
        mentions: Vec::new(),
    }
}

/// Random source with pinned outcomes.
pub struct FixedRandom {
    pub index: usize,
    pub hit: bool,
}

impl RandomSource for FixedRandom {
    fn pick(&self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    fn chance(&self, _probability: f64) -> bool {
        self.hit
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Animation { chat_id: i64, url: String, caption: Option<String> },
}

/// Messenger that records every outbound call.
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingMessenger {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        _format: Option<TextFormat>,
    ) -> Result<(), TelegramError> {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id,
            text: text.into(),
        });
        Ok(())
    }

    async fn send_animation(
        &self,
        chat_id: i64,
        url: &str,
        caption: Option<&str>,
    ) -> Result<(), TelegramError> {
        self.sent.lock().unwrap().push(Sent::Animation {
            chat_id,
            url: url.into(),
            caption: caption.map(String::from),
        });
        Ok(())
    }
}
