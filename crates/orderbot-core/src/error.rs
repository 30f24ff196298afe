//! User-facing failures of command handling.

use thiserror::Error;

/// Reply for a command that isn't recognized.
pub const MESSAGE_COMMAND_ERROR: &str = "Sorry, I didn't understand that! Could you try again?";

/// Reply when there is nothing to show.
pub const MESSAGE_NO_ORDERS: &str = "You have no orders! Try adding one with '/add'!";

/// Reply for a menu we don't have.
pub const MESSAGE_NO_MENU: &str = "Sorry, we don't support this menu for now!";

/// Reply when the spoken order could not be produced.
pub const MESSAGE_TTS_ERROR: &str = "We could not generate your orders in an audio file...";

/// Errors raised while handling a command.
///
/// None of these are fatal. Each one displays as the message sent back to
/// the chat, and [`execute`](crate::dispatch::execute) turns every error
/// into a text reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Token did not match any known command.
    #[error("{}", MESSAGE_COMMAND_ERROR)]
    UnrecognizedCommand(String),

    /// `/menu` asked for a menu that isn't supported.
    #[error("{}", MESSAGE_NO_MENU)]
    UnsupportedMenu(String),

    /// A read command ran against an empty order list.
    #[error("{}", MESSAGE_NO_ORDERS)]
    EmptyOrderState,
}

/// Result type for command handling.
pub type Result<T> = std::result::Result<T, OrderError>;
