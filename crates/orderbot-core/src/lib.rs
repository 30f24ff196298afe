//! Orderbot Core - order taking and aggregation for group food orders.
//!
//! This crate holds everything that doesn't talk to the network:
//!
//! - **store**: In-memory order list and menu-seen flags
//! - **aggregate**: Grouping by item and by user, pluralization
//! - **render**: Text for each chat reply and the spoken order script
//! - **command**: Command vocabulary and message parsing
//! - **dispatch**: Routes a command to the store and wraps the reply
//! - **config**: Shared configuration paths
//!
//! # Example
//!
//! ```
//! use orderbot_core::{execute, Customer, OrderStore, Reply};
//!
//! let mut store = OrderStore::new();
//! let alice = Customer::new(1, "Alice");
//!
//! execute(&mut store, "add", "burger", &alice, 42);
//! execute(&mut store, "add", "burger", &alice, 42);
//!
//! let reply = execute(&mut store, "collate", "", &alice, 42);
//! assert_eq!(reply, Reply::Text("Collated your orders!\n\n2 x Burgers\n".into()));
//! ```

pub mod aggregate;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod store;

pub use aggregate::{by_item, by_user, capitalize, pluralize, ByItem, ByUser};
pub use command::Command;
pub use dispatch::{execute, execute_command, Customer, Reply, MENU_SHAKE_SHACK};
pub use error::{
    OrderError, Result, MESSAGE_COMMAND_ERROR, MESSAGE_NO_MENU, MESSAGE_NO_ORDERS,
    MESSAGE_TTS_ERROR,
};
pub use store::{Order, OrderStore, CLEARED_MESSAGE};
