//! Message handlers for the Telegram bot.

use std::sync::Arc;

use orderbot_core::{Command, Customer, Reply, MESSAGE_COMMAND_ERROR, MESSAGE_NO_MENU, MESSAGE_TTS_ERROR};
use teloxide::prelude::*;
use teloxide::types::{BotCommand, InputFile, User};
use tracing::{debug, info, warn};

use crate::state::BotState;

/// File name attached to the spoken order.
const VOICE_FILE_NAME: &str = "Orders";

/// Commands shown in Telegram's command menu.
pub fn bot_commands() -> Vec<BotCommand> {
    Command::ALL
        .iter()
        .map(|c| BotCommand::new(c.name(), c.description()))
        .collect()
}

/// The sender as an order owner: Telegram ID and first name.
pub fn customer_from_user(user: &User) -> Customer {
    Customer::new(user.id.0, user.first_name.clone())
}

/// Handle a message that starts with `/`.
pub async fn handle_message(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let Some((command, raw_text)) = Command::from_message_text(text) else {
        debug!(chat_id = %msg.chat.id, "Ignoring non-command message");
        return Ok(());
    };

    let Some(customer) = msg.from.as_ref().map(customer_from_user) else {
        warn!(chat_id = %msg.chat.id, "Command without a sender");
        bot.send_message(msg.chat.id, MESSAGE_COMMAND_ERROR).await?;
        return Ok(());
    };

    info!(
        chat_id = %msg.chat.id,
        user = %customer.name,
        command = %command,
        "Command received"
    );

    let reply = state
        .execute(command, raw_text, &customer, msg.chat.id.0)
        .await;

    deliver(&bot, msg.chat.id, reply, &state).await
}

/// Sends a reply to the chat in the form its kind calls for.
pub async fn deliver(bot: &Bot, chat_id: ChatId, reply: Reply, state: &BotState) -> ResponseResult<()> {
    match reply {
        Reply::Text(text) => {
            bot.send_message(chat_id, text).await?;
        }
        Reply::Audio { script, chat_id } => {
            send_spoken_order(bot, ChatId(chat_id), &script, state).await?;
        }
        Reply::Image {
            menu_key,
            chat_id,
            first_time,
        } => {
            send_menu(bot, ChatId(chat_id), &menu_key, first_time, state).await?;
        }
    }
    Ok(())
}

/// Synthesizes the order script and sends it as a voice message.
async fn send_spoken_order(
    bot: &Bot,
    chat_id: ChatId,
    script: &str,
    state: &BotState,
) -> ResponseResult<()> {
    match state.synthesize(script).await {
        Ok(audio) => {
            bot.send_voice(chat_id, InputFile::memory(audio).file_name(VOICE_FILE_NAME))
                .await?;
            info!(chat_id = %chat_id, "Spoken order sent");
        }
        Err(e) => {
            warn!(chat_id = %chat_id, error = %e, "Could not generate spoken order");
            bot.send_message(chat_id, MESSAGE_TTS_ERROR).await?;
        }
    }
    Ok(())
}

/// Sends a menu image, or the unsupported-menu message if the file is gone.
async fn send_menu(
    bot: &Bot,
    chat_id: ChatId,
    menu_key: &str,
    first_time: bool,
    state: &BotState,
) -> ResponseResult<()> {
    if first_time {
        info!(menu = %menu_key, "Showing menu for the first time");
    }

    match state.menu_image(menu_key) {
        Ok(path) => {
            bot.send_photo(chat_id, InputFile::file(path)).await?;
        }
        Err(e) => {
            warn!(menu = %menu_key, error = %e, "Menu image unavailable");
            bot.send_message(chat_id, MESSAGE_NO_MENU).await?;
        }
    }
    Ok(())
}
