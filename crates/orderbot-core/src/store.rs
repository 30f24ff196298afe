//! In-memory order store.
//!
//! Holds every order placed since the last `/clear`, in the order the
//! orders arrived, plus the set of menus that have already been shown.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::aggregate::capitalize;

/// Confirmation returned by [`OrderStore::clear`].
pub const CLEARED_MESSAGE: &str = "Cleared your orders!";

/// One user's request for one named food item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Messaging platform user ID.
    pub user_id: u64,
    /// Display name of the user who placed the order.
    pub user_name: String,
    /// Item name, capitalized on insertion.
    pub item_name: String,
}

impl Order {
    /// Creates a new order.
    pub fn new(user_id: u64, user_name: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            item_name: item_name.into(),
        }
    }

    /// One-line form used by `/view`.
    pub fn view_line(&self) -> String {
        format!("{}: {}", self.user_name, self.item_name)
    }
}

/// The shared order collection for one conversation.
///
/// Orders are only ever appended or cleared all at once; grouping happens
/// at render time, never on insert.
///
/// Menu-seen flags live beside the orders but are *not* reset by
/// [`clear`](Self::clear). A menu that has been displayed once stays
/// "seen" for the life of the process, independent of the order list.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
    seen_menus: HashSet<String>,
}

impl OrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an order. The item name is capitalized before storing.
    ///
    /// An empty item name is stored as an empty-name order.
    pub fn add_order(&mut self, user_id: u64, user_name: &str, item_name: &str) -> &Order {
        info!(user = %user_name, item = %item_name, "Adding order");
        self.orders
            .push(Order::new(user_id, user_name, capitalize(item_name)));
        // just pushed
        &self.orders[self.orders.len() - 1]
    }

    /// Removes every order. Menu-seen flags are kept.
    pub fn clear(&mut self) -> &'static str {
        info!(count = self.orders.len(), "Clearing orders");
        self.orders.clear();
        CLEARED_MESSAGE
    }

    /// Returns true if no orders are stored.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// All orders in insertion order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Marks a menu as seen.
    ///
    /// Returns `true` only the first time a given menu name is marked.
    pub fn mark_menu_seen(&mut self, menu_name: &str) -> bool {
        let first_time = self.seen_menus.insert(menu_name.to_string());
        if first_time {
            debug!(menu = %menu_name, "First time loading menu");
        }
        first_time
    }

    /// Returns true if the menu has been marked seen before.
    pub fn is_menu_seen(&self, menu_name: &str) -> bool {
        self.seen_menus.contains(menu_name)
    }
}
