//! Routes a parsed command to the order store and renders the reply.
//!
//! [`execute`] is the only entry point a transport needs. It takes the
//! store by `&mut`, so a caller that shares the store across tasks runs
//! each call inside one lock acquisition.

use tracing::{debug, info};

use crate::aggregate::{by_item, by_user};
use crate::command::Command;
use crate::error::{OrderError, Result};
use crate::render::{
    render_addition_confirmation, render_collated, render_split, render_tts_script, render_view,
};
use crate::store::OrderStore;

/// The only menu with an image available.
pub const MENU_SHAKE_SHACK: &str = "Shake Shack";

/// The person who sent a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Platform user ID.
    pub id: u64,
    /// Display name used in every rendered list.
    pub name: String,
}

impl Customer {
    /// Creates a customer.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Outcome of one command, ready for the transport to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text message.
    Text(String),
    /// Spoken order: the transport synthesizes `script` and sends audio.
    Audio {
        /// Script for the text-to-speech service.
        script: String,
        /// Chat the audio goes to.
        chat_id: i64,
    },
    /// Menu image: the transport looks up the asset for `menu_key`.
    Image {
        /// Menu name, as requested.
        menu_key: String,
        /// Chat the image goes to.
        chat_id: i64,
        /// True the first time this menu is shown in this process.
        first_time: bool,
    },
}

impl Reply {
    /// Text content, if this is a text reply.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Runs a command token against the store.
///
/// `raw_text` is the message with the command word removed. Every failure
/// is turned into a [`Reply::Text`] carrying the user-facing message.
pub fn execute(
    store: &mut OrderStore,
    command_token: &str,
    raw_text: &str,
    customer: &Customer,
    chat_id: i64,
) -> Reply {
    info!(command = %command_token, chat_id = chat_id, "Parsing command");
    run(store, Command::parse(command_token), command_token, raw_text, customer, chat_id)
}

/// Like [`execute`], for callers that already parsed the command.
pub fn execute_command(
    store: &mut OrderStore,
    command: Command,
    raw_text: &str,
    customer: &Customer,
    chat_id: i64,
) -> Reply {
    run(store, command, command.name(), raw_text, customer, chat_id)
}

fn run(
    store: &mut OrderStore,
    command: Command,
    token: &str,
    raw_text: &str,
    customer: &Customer,
    chat_id: i64,
) -> Reply {
    let outcome = match command {
        Command::Add => Ok(Reply::Text(add(store, raw_text, customer))),
        Command::Clear => Ok(Reply::Text(store.clear().to_string())),
        Command::View => render_view(store.orders()).map(Reply::Text),
        Command::Collate => render_collated(&by_item(store.orders())).map(Reply::Text),
        Command::Split => render_split(&by_user(store.orders())).map(Reply::Text),
        Command::Order => Ok(order(store, chat_id)),
        Command::Menu => menu(store, raw_text, chat_id),
        Command::Unknown => Err(OrderError::UnrecognizedCommand(token.to_string())),
    };

    outcome.unwrap_or_else(|e| {
        debug!(command = %token, error = ?e, "Command answered with error message");
        Reply::Text(e.to_string())
    })
}

fn add(store: &mut OrderStore, raw_text: &str, customer: &Customer) -> String {
    store.add_order(customer.id, &customer.name, raw_text);
    render_addition_confirmation(&customer.name, raw_text, &by_user(store.orders()))
}

fn order(store: &OrderStore, chat_id: i64) -> Reply {
    let script = render_tts_script(&by_item(store.orders()));
    info!(items = store.len(), "Converting orders to audio");
    Reply::Audio { script, chat_id }
}

fn menu(store: &mut OrderStore, menu_name: &str, chat_id: i64) -> Result<Reply> {
    info!(menu = %menu_name, "Loading menu");

    if menu_name != MENU_SHAKE_SHACK {
        debug!(menu = %menu_name, "Menu name did not match {:?}", MENU_SHAKE_SHACK);
        return Err(OrderError::UnsupportedMenu(menu_name.to_string()));
    }

    let first_time = store.mark_menu_seen(menu_name);
    Ok(Reply::Image {
        menu_key: menu_name.to_string(),
        chat_id,
        first_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MESSAGE_COMMAND_ERROR, MESSAGE_NO_MENU, MESSAGE_NO_ORDERS};
    use crate::store::CLEARED_MESSAGE;

    const CHAT: i64 = -1001;

    fn alice() -> Customer {
        Customer::new(1, "Alice")
    }

    #[test]
    fn test_add_confirms_and_stores() {
        let mut store = OrderStore::new();
        let reply = execute(&mut store, "add", "burger", &alice(), CHAT);

        assert_eq!(
            reply,
            Reply::Text("Alice added 1 burger!\n\nAlice ordered:\n1 x Burger\n\n".into())
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut store = OrderStore::new();
        execute(&mut store, "add", "burger", &alice(), CHAT);
        let reply = execute(&mut store, "clear", "", &alice(), CHAT);

        assert_eq!(reply.as_text(), Some(CLEARED_MESSAGE));
        assert!(store.is_empty());
    }

    #[test]
    fn test_read_commands_on_empty_store() {
        let mut store = OrderStore::new();
        for token in ["view", "collate", "split"] {
            let reply = execute(&mut store, token, "", &alice(), CHAT);
            assert_eq!(reply.as_text(), Some(MESSAGE_NO_ORDERS), "token {}", token);
        }
    }

    #[test]
    fn test_unknown_command() {
        let mut store = OrderStore::new();
        for token in ["dance", "", "Add", "start"] {
            let reply = execute(&mut store, token, "burger", &alice(), CHAT);
            assert_eq!(reply.as_text(), Some(MESSAGE_COMMAND_ERROR));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_order_produces_audio_request() {
        let mut store = OrderStore::new();
        execute(&mut store, "add", "burger", &alice(), CHAT);
        execute(&mut store, "add", "burger", &alice(), CHAT);

        match execute(&mut store, "order", "", &alice(), CHAT) {
            Reply::Audio { script, chat_id } => {
                assert_eq!(chat_id, CHAT);
                assert!(script.contains("Can I have 2 Burger\n"));
                assert!(script.ends_with("Thank you!\n"));
            }
            other => panic!("expected audio request, got {:?}", other),
        }
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_menu_first_time_flag() {
        let mut store = OrderStore::new();

        let first = execute(&mut store, "menu", MENU_SHAKE_SHACK, &alice(), CHAT);
        let second = execute(&mut store, "menu", MENU_SHAKE_SHACK, &alice(), CHAT);

        assert_eq!(
            first,
            Reply::Image {
                menu_key: MENU_SHAKE_SHACK.into(),
                chat_id: CHAT,
                first_time: true,
            }
        );
        assert_eq!(
            second,
            Reply::Image {
                menu_key: MENU_SHAKE_SHACK.into(),
                chat_id: CHAT,
                first_time: false,
            }
        );
    }

    #[test]
    fn test_menu_unsupported() {
        let mut store = OrderStore::new();
        let reply = execute(&mut store, "menu", "Burger King", &alice(), CHAT);

        assert_eq!(reply.as_text(), Some(MESSAGE_NO_MENU));
        assert!(!store.is_menu_seen("Burger King"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_menu_name_must_match_exactly() {
        let mut store = OrderStore::new();
        for name in ["shake shack", "Shake Shack ", "", "Shake"] {
            let reply = execute(&mut store, "menu", name, &alice(), CHAT);
            assert_eq!(reply.as_text(), Some(MESSAGE_NO_MENU), "menu {:?}", name);
        }
    }

    #[test]
    fn test_execute_command_matches_execute() {
        let mut a = OrderStore::new();
        let mut b = OrderStore::new();

        let via_token = execute(&mut a, "add", "taco", &alice(), CHAT);
        let via_command = execute_command(&mut b, Command::Add, "taco", &alice(), CHAT);
        assert_eq!(via_token, via_command);

        let unknown = execute_command(&mut b, Command::Unknown, "taco", &alice(), CHAT);
        assert_eq!(unknown.as_text(), Some(MESSAGE_COMMAND_ERROR));
    }
}
