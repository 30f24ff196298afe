//! Command vocabulary and message parsing.

use std::fmt;

/// Marker that starts every command.
pub const COMMAND_PREFIX: char = '/';

/// A command a chat message can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Add one item for the sender.
    Add,
    /// Drop every order.
    Clear,
    /// List orders as placed.
    View,
    /// Count orders by item.
    Collate,
    /// Group orders by user for bill splitting.
    Split,
    /// Read the collated order out loud.
    Order,
    /// Show a restaurant menu.
    Menu,
    /// Anything that isn't one of the above.
    Unknown,
}

impl Command {
    /// Every recognized command, in help order.
    pub const ALL: [Command; 7] = [
        Command::Add,
        Command::Clear,
        Command::View,
        Command::Collate,
        Command::Split,
        Command::Order,
        Command::Menu,
    ];

    /// Maps a token (without the leading `/`) to a command.
    ///
    /// Matching is case-sensitive: `"Add"` is [`Command::Unknown`].
    pub fn parse(token: &str) -> Self {
        match token {
            "add" => Command::Add,
            "clear" => Command::Clear,
            "view" => Command::View,
            "collate" => Command::Collate,
            "split" => Command::Split,
            "order" => Command::Order,
            "menu" => Command::Menu,
            _ => Command::Unknown,
        }
    }

    /// Splits a chat message into its command and the remaining text.
    ///
    /// The first whitespace-delimited word must start with `/`. A trailing
    /// `@botname`, which Telegram appends to commands in group chats, is
    /// dropped before matching. The remaining text is everything after the
    /// first space, or empty for a one-word message.
    ///
    /// Returns `None` when the message isn't a command at all.
    pub fn from_message_text(text: &str) -> Option<(Self, &str)> {
        let text = text.trim_start();
        let (first, rest) = match text.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest),
            None => (text, ""),
        };

        let token = first.strip_prefix(COMMAND_PREFIX)?;
        let token = token.split_once('@').map_or(token, |(name, _)| name);
        Some((Self::parse(token), rest))
    }

    /// Name as typed after the `/`.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Clear => "clear",
            Command::View => "view",
            Command::Collate => "collate",
            Command::Split => "split",
            Command::Order => "order",
            Command::Menu => "menu",
            Command::Unknown => "unknown",
        }
    }

    /// Short help text shown in the chat's command list.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Add => "Add an item to your order: /add <item>",
            Command::Clear => "Clear all orders",
            Command::View => "View all orders as placed",
            Command::Collate => "Collate orders by item",
            Command::Split => "Split the bill by user",
            Command::Order => "Read the collated order out loud",
            Command::Menu => "Show a menu: /menu <name>",
            Command::Unknown => "Unrecognized command",
        }
    }

    /// Returns true if running this command changes the order list.
    pub fn mutates(&self) -> bool {
        matches!(self, Command::Add | Command::Clear)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COMMAND_PREFIX, self.name())
    }
}
