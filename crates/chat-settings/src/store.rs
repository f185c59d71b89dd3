//! In-memory per-chat settings store.

use crate::types::ChatSettings;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// In-memory settings keyed by chat id.
///
/// Records are created on first write and live until the process exits.
/// Chats without a record resolve to the default captured at construction.
#[derive(Clone)]
pub struct ChatSettingsStore {
    settings: Arc<RwLock<HashMap<i64, ChatSettings>>>,
    default_enabled: bool,
}

impl ChatSettingsStore {
    /// Create an empty store with the process-wide GIF default.
    pub fn new(default_enabled: bool) -> Self {
        info!(
            "In-memory chat settings store initialized (gif default={})",
            default_enabled
        );

        Self {
            settings: Arc::new(RwLock::new(HashMap::new())),
            default_enabled,
        }
    }

    /// The default applied to chats that were never toggled.
    pub fn default_enabled(&self) -> bool {
        self.default_enabled
    }

    /// Whether GIFs are enabled for a chat.
    pub async fn is_enabled(&self, chat_id: i64) -> bool {
        let settings = self.settings.read().await;
        settings
            .get(&chat_id)
            .map(|s| s.gif_enabled)
            .unwrap_or(self.default_enabled)
    }

    /// Set the GIF flag for a chat, creating its record if needed.
    #[instrument(skip(self))]
    pub async fn set_enabled(&self, chat_id: i64, enabled: bool) {
        let mut settings = self.settings.write().await;
        let default_enabled = self.default_enabled;

        settings
            .entry(chat_id)
            .or_insert_with(|| ChatSettings::new(chat_id, default_enabled))
            .set_gif_enabled(enabled);

        debug!("GIFs {} for chat {}", if enabled { "enabled" } else { "disabled" }, chat_id);
    }

    /// The chat's explicit record, if it was ever toggled.
    pub async fn get(&self, chat_id: i64) -> Option<ChatSettings> {
        self.settings.read().await.get(&chat_id).cloned()
    }

    /// Number of chats with an explicit record.
    pub async fn chat_count(&self) -> usize {
        self.settings.read().await.len()
    }
}
