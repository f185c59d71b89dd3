//! Fakes shared by unit tests.

use crate::media::MediaSource;
use crate::random::RandomSource;
use crate::responder::{Responder, Trigger};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use telegram_client::{BotMessage, ChatType, Messenger, TelegramError, TextFormat};

/// Random source with pinned outcomes.
pub struct FixedRandom {
    pub index: usize,
    pub hit: bool,
}

impl FixedRandom {
    pub fn new(index: usize, hit: bool) -> Self {
        Self { index, hit }
    }
}

impl RandomSource for FixedRandom {
    fn pick(&self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    fn chance(&self, _probability: f64) -> bool {
        self.hit
    }
}

/// Responder returning a fixed string and recording triggers.
pub struct StaticResponder {
    pub reply: String,
    pub triggers: Mutex<Vec<Trigger>>,
}

impl StaticResponder {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.into(),
            triggers: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Trigger> {
        self.triggers.lock().unwrap().clone()
    }
}

#[async_trait]
impl Responder for StaticResponder {
    async fn generate(&self, trigger: &Trigger) -> String {
        self.triggers.lock().unwrap().push(trigger.clone());
        self.reply.clone()
    }
}

/// Media source returning a fixed result and counting calls.
pub struct CountingMedia {
    pub url: Option<String>,
    pub hints: Mutex<Vec<Option<String>>>,
    calls: AtomicUsize,
}

impl CountingMedia {
    pub fn new(url: Option<&str>) -> Self {
        Self {
            url: url.map(String::from),
            hints: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaSource for CountingMedia {
    async fn resolve(&self, hint: Option<&str>) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.hints.lock().unwrap().push(hint.map(String::from));
        self.url.clone()
    }
}

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text {
        chat_id: i64,
        text: String,
        format: Option<TextFormat>,
    },
    Animation {
        chat_id: i64,
        url: String,
        caption: Option<String>,
    },
}

/// Messenger that records every call and can be told to fail.
#[derive(Default)]
pub struct RecordingMessenger {
    pub sent: Mutex<Vec<Sent>>,
    pub fail_formatted: bool,
    pub fail_animation: bool,
    pub fail_all: bool,
}

impl RecordingMessenger {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn failure() -> TelegramError {
        TelegramError::InvalidUrl(url::ParseError::EmptyHost)
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        format: Option<TextFormat>,
    ) -> Result<(), TelegramError> {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id,
            text: text.into(),
            format,
        });
        if self.fail_all || (self.fail_formatted && format.is_some()) {
            return Err(Self::failure());
        }
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
        if self.fail_all || self.fail_animation {
            return Err(Self::failure());
        }
        Ok(())
    }
}

pub fn message(chat_type: ChatType, text: &str) -> BotMessage {
    BotMessage {
        chat_id: if chat_type.is_group() { -100 } else { 100 },
        chat_type,
        message_id: 1,
        text: text.into(),
        mentions: Vec::new(),
    }
}
