//! Text rendering for chat replies and the spoken order script.

use std::fmt::Write;

use crate::aggregate::{by_item, pluralize, ByItem, ByUser};
use crate::error::{OrderError, Result};
use crate::store::Order;

/// Header for `/view`.
pub const VIEW_HEADER: &str = "These are your orders so far:";

/// Header for `/collate`.
pub const COLLATE_HEADER: &str = "Collated your orders!";

/// Header for `/split`.
pub const SPLIT_HEADER: &str = "Split your bill by user:";

/// Opening of the spoken order, followed by the item list.
const TTS_OPENING: &str = "Hi, I would like to place a delivery order.\nCan I have ";

/// Closing of the spoken order.
const TTS_CLOSING: &str = "Thank you!\n";

/// `"{count} x {item}"` with the item pluralized for counts above one.
pub fn item_line(item_name: &str, count: usize) -> String {
    format!("{} x {}", count, pluralize(item_name, count))
}

/// Confirmation for `/add`, followed by every user's current order.
///
/// The whole order state is reprinted after each addition, not just the
/// new item.
pub fn render_addition_confirmation(user_name: &str, item_name: &str, by_user: &ByUser<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} added 1 {}!", user_name, item_name);
    out.push('\n');

    for (name, orders) in by_user.iter() {
        let _ = writeln!(out, "{} ordered:", name);
        for (item, count) in by_item(orders.iter().copied()).iter() {
            let _ = writeln!(out, "{}", item_line(item, count));
        }
        out.push('\n');
    }

    out
}

/// Every order in arrival order, one per line.
pub fn render_view(orders: &[Order]) -> Result<String> {
    if orders.is_empty() {
        return Err(OrderError::EmptyOrderState);
    }

    let mut out = format!("{}\n\n", VIEW_HEADER);
    for order in orders {
        let _ = writeln!(out, "{}", order.view_line());
    }
    Ok(out)
}

/// Item totals across all users.
pub fn render_collated(by_item: &ByItem<'_>) -> Result<String> {
    if by_item.is_empty() {
        return Err(OrderError::EmptyOrderState);
    }

    let mut out = format!("{}\n\n", COLLATE_HEADER);
    for (item, count) in by_item.iter() {
        let _ = writeln!(out, "{}", item_line(item, count));
    }
    Ok(out)
}

/// Per-user bill. Each order gets its own line; duplicates are not merged.
pub fn render_split(by_user: &ByUser<'_>) -> Result<String> {
    if by_user.is_empty() {
        return Err(OrderError::EmptyOrderState);
    }

    let mut out = format!("{}\n\n", SPLIT_HEADER);
    for (name, orders) in by_user.iter() {
        let _ = writeln!(out, "{} ordered:", name);
        // TODO: add per-item prices once menus carry them; until then the total stays 0.0
        let total: f64 = 0.0;
        for order in orders {
            let _ = writeln!(out, "{}", order.item_name);
        }
        let _ = writeln!(out, "Total = {:.1}", total);
        out.push('\n');
    }
    Ok(out)
}

/// Script read out by the text-to-speech service for `/order`.
///
/// Line breaks are left as `\n`; escaping for the wire belongs to the TTS
/// client.
pub fn render_tts_script(by_item: &ByItem<'_>) -> String {
    let mut out = String::from(TTS_OPENING);
    for (item, count) in by_item.iter() {
        let _ = writeln!(out, "{} {}", count, item);
    }
    out.push_str(TTS_CLOSING);
    out
}
