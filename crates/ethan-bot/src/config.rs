//! Application configuration loaded from environment variables.

use crate::delivery::DeliveryMode;
use crate::persona::Persona;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use telegram_client::MAX_POLL_TIMEOUT;

/// Conventional variable names and the nested keys they override.
const ENV_ALIASES: &[(&str, &str)] = &[
    ("TELEGRAM_BOT_TOKEN", "telegram.bot_token"),
    ("OPENAI_API_KEY", "openai.api_key"),
    ("GIPHY_API_KEY", "giphy.api_key"),
    ("GIF_ENABLED_DEFAULT", "bot.gif_enabled_default"),
    ("GIPHY_KEYWORDS", "giphy.keywords"),
    ("GIF_URLS", "giphy.static_urls"),
    ("DELIVERY_MODE", "bot.delivery_mode"),
    ("PERSONA", "bot.persona"),
    ("PASSIVE_REPLIES", "bot.passive_replies"),
    ("PASSIVE_REPLY_CHANCE", "bot.passive_reply_chance"),
];

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Telegram configuration
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Generative-text configuration
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// GIF configuration
    #[serde(default)]
    pub giphy: GiphyConfig,

    /// Bot behaviour
    #[serde(default)]
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot token from @BotFather
    #[serde(default)]
    pub bot_token: String,

    /// Long-poll timeout for getUpdates
    #[serde(default = "default_poll_timeout", with = "humantime_serde")]
    pub poll_timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// API key; AI replies are disabled without one
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_openai_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GiphyConfig {
    /// API key; Giphy search is disabled without one
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_giphy_url")]
    pub base_url: String,

    /// Content rating filter
    #[serde(default = "default_rating")]
    pub rating: String,

    /// Comma-separated search keywords
    #[serde(default)]
    pub keywords: Option<String>,

    /// Comma-separated GIF URLs; takes priority over search when set
    #[serde(default)]
    pub static_urls: Option<String>,

    /// Keyword used by the explicit GIF command
    #[serde(default = "default_fixed_keyword")]
    pub fixed_keyword: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub persona: Persona,

    /// Overrides the persona's system prompt
    #[serde(default)]
    pub system_prompt: Option<String>,

    #[serde(default)]
    pub delivery_mode: DeliveryMode,

    /// GIF setting for chats that never toggled it
    #[serde(default = "default_true")]
    pub gif_enabled_default: bool,

    /// Reply to ordinary group messages now and then
    #[serde(default)]
    pub passive_replies: bool,

    #[serde(default = "default_passive_chance")]
    pub passive_reply_chance: f64,
}

// Default implementations
impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            poll_timeout: default_poll_timeout(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openai_url(),
            model: default_model(),
            timeout: default_timeout(),
        }
    }
}

impl Default for GiphyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_giphy_url(),
            rating: default_rating(),
            keywords: None,
            static_urls: None,
            fixed_keyword: default_fixed_keyword(),
            timeout: default_timeout(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            persona: Persona::default(),
            system_prompt: None,
            delivery_mode: DeliveryMode::default(),
            gif_enabled_default: default_true(),
            passive_replies: false,
            passive_reply_chance: default_passive_chance(),
        }
    }
}

// Default value functions
fn default_poll_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_openai_url() -> String {
    "https://api.openai.com/v1".into()
}

fn default_model() -> String {
    "gpt-4o-mini".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_giphy_url() -> String {
    "https://api.giphy.com/v1".into()
}

fn default_rating() -> String {
    "g".into()
}

fn default_fixed_keyword() -> String {
    "ethan mode".into()
}

fn default_true() -> bool {
    true
}

fn default_passive_chance() -> f64 {
    0.1
}

/// Split a comma-separated list, dropping blanks.
fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl OpenAiConfig {
    /// The API key, if one is set and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        non_empty(&self.api_key)
    }
}

impl GiphyConfig {
    pub fn api_key(&self) -> Option<&str> {
        non_empty(&self.api_key)
    }

    pub fn keyword_list(&self) -> Vec<String> {
        split_list(self.keywords.as_deref())
    }

    pub fn static_url_list(&self) -> Vec<String> {
        split_list(self.static_urls.as_deref())
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars().collect())
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        let mut builder = config::Config::builder().add_source(
            config::Environment::default()
                .separator("__")
                // Tokens contain ':' and keyword lists contain ','; keep strings as strings.
                .try_parsing(false)
                .source(Some(vars.clone())),
        );

        for (var, key) in ENV_ALIASES {
            builder = builder
                .set_override_option(*key, vars.get(*var).cloned())
                .with_context(|| format!("Invalid value for {}", var))?;
        }

        let config: Config = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.telegram.bot_token.trim().is_empty() {
            bail!("TELEGRAM_BOT_TOKEN environment variable is not set");
        }

        if self.telegram.poll_timeout > MAX_POLL_TIMEOUT {
            bail!(
                "TELEGRAM__POLL_TIMEOUT must be at most {:?}, got {:?}",
                MAX_POLL_TIMEOUT,
                self.telegram.poll_timeout
            );
        }

        if !(0.0..=1.0).contains(&self.bot.passive_reply_chance) {
            bail!(
                "PASSIVE_REPLY_CHANCE must be between 0 and 1, got {}",
                self.bot.passive_reply_chance
            );
        }

        Ok(())
    }
}
