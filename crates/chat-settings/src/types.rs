//! Per-chat settings record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Settings for a single chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettings {
    pub chat_id: i64,
    /// Whether replies in this chat may carry a GIF.
    pub gif_enabled: bool,
    pub updated_at: DateTime<Utc>,
}

impl ChatSettings {
    pub fn new(chat_id: i64, gif_enabled: bool) -> Self {
        Self {
            chat_id,
            gif_enabled,
            updated_at: Utc::now(),
        }
    }

    /// Overwrite the GIF flag.
    pub fn set_gif_enabled(&mut self, enabled: bool) {
        self.gif_enabled = enabled;
        self.updated_at = Utc::now();
    }
}
