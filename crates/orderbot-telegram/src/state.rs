//! Shared state for the Telegram bot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use orderbot_core::{execute_command, Command, Customer, OrderStore, Reply};
use tokio::sync::Mutex;
use tracing::warn;

use crate::error::{BotError, Result};
use crate::menus::resolve_menu_image;
use crate::tts::TtsClient;

/// Shared state for the Telegram bot, accessible across all handlers.
pub struct BotState {
    /// The one order list every chat writes to.
    orders: Mutex<OrderStore>,
    /// Speech client, if credentials are configured.
    tts: Option<TtsClient>,
    /// Directory holding menu images.
    menu_dir: PathBuf,
}

impl BotState {
    /// Create a new BotState instance.
    pub fn new(menu_dir: impl Into<PathBuf>, tts: Option<TtsClient>) -> Self {
        if tts.is_none() {
            warn!("Text-to-speech not configured - /order will reply with an error");
        }

        Self {
            orders: Mutex::new(OrderStore::new()),
            tts,
            menu_dir: menu_dir.into(),
        }
    }

    /// Check if text-to-speech is available.
    pub fn has_tts(&self) -> bool {
        self.tts.is_some()
    }

    /// Directory holding menu images.
    pub fn menu_dir(&self) -> &Path {
        &self.menu_dir
    }

    /// Runs one command against the order store.
    ///
    /// The store lock is held for the whole command, so concurrent updates
    /// see each command as a single step.
    pub async fn execute(
        &self,
        command: Command,
        raw_text: &str,
        customer: &Customer,
        chat_id: i64,
    ) -> Reply {
        let mut orders = self.orders.lock().await;
        execute_command(&mut orders, command, raw_text, customer, chat_id)
    }

    /// Number of orders currently stored.
    pub async fn order_count(&self) -> usize {
        self.orders.lock().await.len()
    }

    /// Synthesizes the spoken order.
    pub async fn synthesize(&self, script: &str) -> Result<Vec<u8>> {
        let tts = self.tts.as_ref().ok_or(BotError::TtsNotConfigured)?;
        tts.synthesize(script).await
    }

    /// Path of the image for a menu.
    pub fn menu_image(&self, menu_key: &str) -> Result<PathBuf> {
        resolve_menu_image(&self.menu_dir, menu_key)
    }
}

/// Create shared state wrapped in Arc.
pub fn create_shared_state(menu_dir: impl Into<PathBuf>, tts: Option<TtsClient>) -> Arc<BotState> {
    Arc::new(BotState::new(menu_dir, tts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderbot_core::{MENU_SHAKE_SHACK, MESSAGE_NO_ORDERS};

    fn state() -> (tempfile::TempDir, Arc<BotState>) {
        let tmp = tempfile::tempdir().unwrap();
        let state = create_shared_state(tmp.path(), None);
        (tmp, state)
    }

    #[tokio::test]
    async fn test_execute_updates_shared_store() {
        let (_tmp, state) = state();
        let alice = Customer::new(1, "Alice");

        state.execute(Command::Add, "burger", &alice, 10).await;
        state.execute(Command::Add, "fries", &alice, 20).await;
        assert_eq!(state.order_count().await, 2);

        let reply = state.execute(Command::Clear, "", &alice, 10).await;
        assert!(matches!(reply, Reply::Text(_)));
        assert_eq!(state.order_count().await, 0);

        let reply = state.execute(Command::View, "", &alice, 10).await;
        assert_eq!(reply.as_text(), Some(MESSAGE_NO_ORDERS));
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_all_kept() {
        let (_tmp, state) = state();

        let mut handles = Vec::new();
        for i in 0..20u64 {
            let state = Arc::clone(&state);
            handles.push(tokio::spawn(async move {
                let customer = Customer::new(i, format!("User{}", i % 4));
                state.execute(Command::Add, "taco", &customer, 1).await
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(state.order_count().await, 20);
        let reply = state.execute(Command::Collate, "", &Customer::new(0, "User0"), 1).await;
        assert_eq!(
            reply.as_text(),
            Some("Collated your orders!\n\n20 x Tacos\n")
        );
    }

    #[tokio::test]
    async fn test_synthesize_without_tts() {
        let (_tmp, state) = state();
        assert!(!state.has_tts());
        assert!(matches!(
            state.synthesize("Hi.\n").await,
            Err(BotError::TtsNotConfigured)
        ));
    }

    #[test]
    fn test_menu_image_uses_menu_dir() {
        let (tmp, state) = state();
        assert!(state.menu_image(MENU_SHAKE_SHACK).is_err());

        std::fs::write(tmp.path().join("shake-shack.png"), b"png").unwrap();
        assert_eq!(
            state.menu_image(MENU_SHAKE_SHACK).unwrap(),
            tmp.path().join("shake-shack.png")
        );
        assert_eq!(state.menu_dir(), tmp.path());
    }
}
