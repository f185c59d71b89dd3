//! Component wiring and the main event loop.

use crate::commands::*;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::AppResult;
use crate::media::MediaResolver;
use crate::random::{RandomSource, ThreadRandom};
use crate::responder::ResponseGenerator;
use anyhow::Context;
use chat_settings::ChatSettingsStore;
use giphy_client::GiphyClient;
use openai_client::OpenAiClient;
use std::sync::Arc;
use telegram_client::{TelegramClient, UpdateReceiver};
use tokio::signal;
use tokio_stream::StreamExt;
use tracing::{info, warn};

/// Everything the event loop needs, built once from configuration.
pub struct App {
    dispatcher: Dispatcher,
    settings: Arc<ChatSettingsStore>,
    ai: Option<Arc<OpenAiClient>>,
    giphy: Option<Arc<GiphyClient>>,
}

impl App {
    /// Build clients and handlers. Optional services without credentials are left out.
    pub fn build(
        config: &Config,
        bot_username: Option<String>,
        random: Arc<dyn RandomSource>,
    ) -> AppResult<Self> {
        let ai = match config.openai.api_key() {
            Some(key) => Some(Arc::new(
                OpenAiClient::new(
                    key,
                    &config.openai.base_url,
                    &config.openai.model,
                    config.openai.timeout,
                )
                .context("Failed to create OpenAI client")?,
            )),
            None => {
                info!("OPENAI_API_KEY not set, using canned responses");
                None
            }
        };

        let giphy = match config.giphy.api_key() {
            Some(key) => Some(Arc::new(
                GiphyClient::new(
                    key,
                    &config.giphy.base_url,
                    &config.giphy.rating,
                    config.giphy.timeout,
                )
                .context("Failed to create Giphy client")?,
            )),
            None => {
                info!("GIPHY_API_KEY not set, GIF search disabled");
                None
            }
        };

        let settings = Arc::new(ChatSettingsStore::new(config.bot.gif_enabled_default));

        let responder = Arc::new(ResponseGenerator::new(
            ai.clone(),
            config.bot.persona,
            config.bot.system_prompt.clone(),
            random.clone(),
        ));

        let media = Arc::new(MediaResolver::new(
            config.giphy.static_url_list(),
            giphy.clone(),
            config.giphy.keyword_list(),
            random.clone(),
        ));
        let gif_source = media.describe();

        let mut handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(ActivateHandler::new(
                responder.clone(),
                media.clone(),
                settings.clone(),
                config.bot.delivery_mode,
                random.clone(),
            )),
            Box::new(GifHandler::new(media, &config.giphy.fixed_keyword)),
            Box::new(GifToggleHandler::on(settings.clone())),
            Box::new(GifToggleHandler::off(settings.clone())),
            Box::new(SettingsHandler::new(
                settings.clone(),
                config.bot.delivery_mode,
                ai.is_some(),
                gif_source,
            )),
            Box::new(HelpHandler::new(config.bot.passive_replies)),
        ];

        if config.bot.passive_replies {
            handlers.push(Box::new(PassiveReplyHandler::new(
                responder,
                random,
                config.bot.passive_reply_chance,
                bot_username.clone(),
            )));
        }

        info!(
            persona = config.bot.persona.as_str(),
            delivery = config.bot.delivery_mode.as_str(),
            gif_source,
            passive = config.bot.passive_replies,
            "Registered {} command handlers",
            handlers.len()
        );

        Ok(Self {
            dispatcher: Dispatcher::new(handlers, bot_username),
            settings,
            ai,
            giphy,
        })
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn settings(&self) -> &Arc<ChatSettingsStore> {
        &self.settings
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai.is_some()
    }

    pub fn giphy_enabled(&self) -> bool {
        self.giphy.is_some()
    }

    /// Probe optional services. Failures only warn; requests fall back at call time.
    pub async fn check_services(&self) {
        if let Some(ai) = &self.ai {
            if ai.health_check().await {
                info!("OpenAI healthy - Model: {}", ai.model());
            } else {
                warn!("OpenAI health check failed - will fall back to canned responses on error");
            }
        }

        if let Some(giphy) = &self.giphy {
            info!("Giphy search enabled (rating={})", giphy.rating());
        }
    }
}

/// Start the bot from a configuration load result.
///
/// A configuration error is returned before any connection is opened.
pub async fn launch(config: anyhow::Result<Config>) -> AppResult<()> {
    let config = config?;
    run(config).await
}

/// Run the bot until Ctrl-C.
pub async fn run(config: Config) -> AppResult<()> {
    let telegram = TelegramClient::new(config.telegram.bot_token.clone());

    let bot_username = match telegram.username().await {
        Ok(Some(username)) => {
            info!("Connected to Telegram as @{}", username);
            Some(username)
        }
        Ok(None) => {
            warn!("Bot account has no username - mention detection disabled");
            None
        }
        Err(e) => {
            warn!("Failed to fetch bot identity: {} - mention detection disabled", e);
            None
        }
    };

    let app = App::build(&config, bot_username, Arc::new(ThreadRandom))?;
    app.check_services().await;

    info!("Listening for messages...");

    let receiver = UpdateReceiver::new(telegram.clone(), config.telegram.poll_timeout);
    let mut stream = Box::pin(receiver.stream());

    loop {
        tokio::select! {
            Some(message) = stream.next() => {
                app.dispatcher().dispatch(&message, &telegram).await;
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}
