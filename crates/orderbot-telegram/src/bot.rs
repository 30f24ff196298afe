//! Main Telegram bot implementation.

use std::sync::Arc;

use orderbot_core::config;
use teloxide::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{BotError, Result};
use crate::handlers::{bot_commands, handle_message};
use crate::state::{create_shared_state, BotState};
use crate::tts::{TtsClient, TtsConfig};

/// The Telegram bot for Orderbot.
pub struct OrderBot {
    /// The teloxide bot instance.
    bot: Bot,
    /// Shared state across handlers.
    state: Arc<BotState>,
}

impl OrderBot {
    /// Create a new OrderBot instance.
    ///
    /// Requires `TELEGRAM_BOT_TOKEN`. Text-to-speech is enabled when
    /// `TTS_USERNAME` and `TTS_PASSWORD` are set.
    pub fn new() -> Result<Self> {
        let tts = TtsConfig::from_env().map(TtsClient::new);
        let state = create_shared_state(config::menu_dir(), tts);
        Self::with_state(state)
    }

    /// Create an OrderBot with custom state (for testing).
    pub fn with_state(state: Arc<BotState>) -> Result<Self> {
        let token = std::env::var("TELEGRAM_BOT_TOKEN").map_err(|_| BotError::NoToken)?;

        Ok(Self {
            bot: Bot::new(token),
            state,
        })
    }

    /// Get the bot's username.
    pub async fn get_me(&self) -> Result<String> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::BotStartFailed(e.to_string()))?;
        Ok(me.username().to_string())
    }

    /// Shared state used by the handlers.
    pub fn state(&self) -> &Arc<BotState> {
        &self.state
    }

    /// Publish the command list shown in Telegram's command menu.
    pub async fn register_commands(&self) -> Result<()> {
        self.bot
            .set_my_commands(bot_commands())
            .await
            .map_err(|e| BotError::BotStartFailed(e.to_string()))?;
        debug!("Registered bot commands");
        Ok(())
    }

    /// Start the bot in polling mode.
    pub async fn start_polling(&self) -> Result<()> {
        info!("Starting Telegram bot in polling mode...");

        if let Err(e) = self.register_commands().await {
            warn!(error = %e, "Could not register command list");
        }

        let bot = self.bot.clone();
        let state = Arc::clone(&self.state);

        let handler = dptree::entry()
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| {
                        msg.text()
                            .map(|t| t.trim_start().starts_with('/'))
                            .unwrap_or(false)
                    })
                    .endpoint(move |bot: Bot, msg: Message| {
                        let state = Arc::clone(&state);
                        async move { handle_message(bot, msg, state).await }
                    }),
            )
            .branch(Update::filter_message().endpoint(|msg: Message| async move {
                debug!(chat_id = %msg.chat.id, "Ignoring non-command message");
                respond(())
            }));

        info!("Bot is running! Send /add <item> to start an order.");

        Dispatcher::builder(bot, handler)
            .default_handler(|upd| async move {
                debug!("Unhandled update: {:?}", upd);
            })
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}
