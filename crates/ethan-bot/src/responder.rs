//! Reply text generation.

use crate::persona::{Persona, FALLBACK_REPLY};
use crate::random::{choose, RandomSource};
use async_trait::async_trait;
use openai_client::{Message, OpenAiClient};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Longest generated reply we pass on.
const MAX_REPLY_CHARS: usize = 280;
/// Longest slice of a user's message quoted into the prompt.
const MAX_CONTEXT_CHARS: usize = 500;
const MAX_TOKENS: u32 = 120;
const TEMPERATURE: f32 = 0.9;

/// What caused a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub is_command: bool,
    pub source_text: String,
}

impl Trigger {
    pub fn command(text: impl Into<String>) -> Self {
        Self {
            is_command: true,
            source_text: text.into(),
        }
    }

    pub fn ambient(text: impl Into<String>) -> Self {
        Self {
            is_command: false,
            source_text: text.into(),
        }
    }

    fn prompt(&self) -> String {
        let context: String = self.source_text.trim().chars().take(MAX_CONTEXT_CHARS).collect();
        if self.is_command {
            format!(
                "Someone just sent the command \"{}\". Announce that ETHAN MODE is activated.",
                context
            )
        } else {
            format!(
                "Someone in the group chat said: \"{}\". React to it with ETHAN MODE energy.",
                context
            )
        }
    }
}

/// Produces reply text. Implementations never fail.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn generate(&self, trigger: &Trigger) -> String;
}

/// Generated replies with a static pool fallback.
pub struct ResponseGenerator {
    ai: Option<Arc<OpenAiClient>>,
    persona: Persona,
    system_prompt: String,
    random: Arc<dyn RandomSource>,
}

impl ResponseGenerator {
    /// `ai` is `None` when no API key is configured; replies then come from the pool only.
    pub fn new(
        ai: Option<Arc<OpenAiClient>>,
        persona: Persona,
        system_prompt: Option<String>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            ai,
            persona,
            system_prompt: system_prompt.unwrap_or_else(|| persona.system_prompt().to_string()),
            random,
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai.is_some()
    }

    /// Uniform draw from the persona's pool.
    pub fn canned(&self) -> String {
        choose(self.random.as_ref(), self.persona.responses())
            .copied()
            .unwrap_or(FALLBACK_REPLY)
            .to_string()
    }
}

#[async_trait]
impl Responder for ResponseGenerator {
    #[instrument(skip(self, trigger), fields(is_command = trigger.is_command))]
    async fn generate(&self, trigger: &Trigger) -> String {
        let Some(ai) = &self.ai else {
            return self.canned();
        };

        let messages = vec![
            Message::system(self.system_prompt.clone()),
            Message::user(trigger.prompt()),
        ];

        match ai.chat(messages, Some(TEMPERATURE), Some(MAX_TOKENS)).await {
            Ok(text) => {
                debug!("Generated {} chars", text.chars().count());
                truncate(&text, MAX_REPLY_CHARS)
            }
            Err(e) => {
                warn!("AI reply failed, using canned response: {}", e);
                self.canned()
            }
        }
    }
}

/// Truncate on a char boundary, marking the cut with an ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
