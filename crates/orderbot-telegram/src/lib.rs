//! Telegram bot front end for Orderbot.
//!
//! Turns chat commands into calls on the shared order store and sends the
//! replies back as text, voice, or photo messages.
//!
//! # Environment Variables
//!
//! Required:
//! - `TELEGRAM_BOT_TOKEN`: Bot token from @BotFather
//!
//! Optional:
//! - `TTS_USERNAME` / `TTS_PASSWORD`: Text-to-speech credentials for `/order`
//! - `TTS_URL`: Synthesize endpoint (default: Watson text-to-speech)
//! - `TTS_ACCEPT`: Audio format to request (default: `audio/wav`)
//! - `ORDERBOT_MENU_DIR`: Where menu images live (default: `~/.orderbot/menus`)
//!
//! # Example
//!
//! ```no_run
//! use orderbot_telegram::OrderBot;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bot = OrderBot::new()?;
//!     bot.start_polling().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Commands
//!
//! - `/add <item>` - Add an item for yourself
//! - `/clear` - Clear all orders
//! - `/view` - List orders as placed
//! - `/collate` - Count orders by item
//! - `/split` - Group orders by user
//! - `/order` - Hear the collated order
//! - `/menu <name>` - Show a menu

pub mod bot;
pub mod error;
pub mod handlers;
pub mod menus;
pub mod state;
pub mod tts;

pub use bot::OrderBot;
pub use error::{BotError, Result};
pub use state::{create_shared_state, BotState};
pub use tts::{tts_payload, TtsClient, TtsConfig};
