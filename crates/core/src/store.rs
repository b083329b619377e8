//! Cart persistence

use std::io;

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tokio::sync::Mutex;

/// Default key a session's cart is stored under.
pub const DEFAULT_CART_KEY: &str = "intellismart_cart";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error")]
    Io(#[from] io::Error),

    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
}

/// A durable key-value store holding whole serialized carts.
#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Load the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    async fn save(&self, key: &str, document: &str) -> Result<(), StoreError>;
}

/// Process-local store, for tests and embedders without durable storage.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    documents: Mutex<FxHashMap<String, String>>,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.documents.lock().await.get(key).cloned())
    }

    async fn save(&self, key: &str, document: &str) -> Result<(), StoreError> {
        self.documents
            .lock()
            .await
            .insert(key.to_string(), document.to_string());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn load_missing_key_is_none() -> TestResult {
        let store = MemoryCartStore::new();

        assert_eq!(store.load(DEFAULT_CART_KEY).await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn save_replaces_previous_document() -> TestResult {
        let store = MemoryCartStore::new();

        store.save("cart", "{\"a\":1}").await?;
        store.save("cart", "{\"a\":2}").await?;

        assert_eq!(store.load("cart").await?.as_deref(), Some("{\"a\":2}"));
        assert_eq!(store.load("other").await?, None);

        Ok(())
    }
}
