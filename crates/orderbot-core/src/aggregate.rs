//! Grouping and counting over a snapshot of orders.
//!
//! Both groupings keep keys in first-occurrence order, so rendered output
//! follows the order in which items and users first appeared.

use std::collections::HashMap;

use crate::store::Order;

/// Item name to order count, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByItem<'a> {
    counts: Vec<(&'a str, usize)>,
}

impl<'a> ByItem<'a> {
    /// Iterates `(item_name, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Count for an item, if present.
    pub fn get(&self, item_name: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(name, _)| *name == item_name)
            .map(|(_, count)| *count)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if there are no items.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

/// User name to that user's orders, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByUser<'a> {
    groups: Vec<(&'a str, Vec<&'a Order>)>,
}

impl<'a> ByUser<'a> {
    /// Iterates `(user_name, orders)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a Order])> + '_ {
        self.groups
            .iter()
            .map(|(name, orders)| (*name, orders.as_slice()))
    }

    /// Orders for a user, if present.
    pub fn get(&self, user_name: &str) -> Option<&[&'a Order]> {
        self.groups
            .iter()
            .find(|(name, _)| *name == user_name)
            .map(|(_, orders)| orders.as_slice())
    }

    /// Number of distinct users.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no users.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of orders across all users.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, orders)| orders.len()).sum()
    }
}

/// Groups orders by exact item name.
pub fn by_item<'a, I>(orders: I) -> ByItem<'a>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for order in orders {
        let name = order.item_name.as_str();
        match index.get(name) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(name, counts.len());
                counts.push((name, 1));
            }
        }
    }

    ByItem { counts }
}

/// Groups orders by exact user name.
pub fn by_user<'a, I>(orders: I) -> ByUser<'a>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, Vec<&'a Order>)> = Vec::new();

    for order in orders {
        let name = order.user_name.as_str();
        match index.get(name) {
            Some(&slot) => groups[slot].1.push(order),
            None => {
                index.insert(name, groups.len());
                groups.push((name, vec![order]));
            }
        }
    }

    ByUser { groups }
}

/// Appends an "s" when `count > 1` and the name doesn't already end in "s".
///
/// No irregular plurals: "fry" becomes "frys".
pub fn pluralize(item_name: &str, count: usize) -> String {
    if count > 1 && !item_name.ends_with('s') {
        format!("{}s", item_name)
    } else {
        item_name.to_string()
    }
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
