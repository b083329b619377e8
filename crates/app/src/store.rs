//! File-backed cart storage

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use intellismart::store::{CartStore, StoreError};
use tokio::fs;
use tracing::debug;

/// Keeps each cart as `<dir>/<key>.json`, so a cart outlives the process.
#[derive(Debug, Clone)]
pub struct FileCartStore {
    dir: PathBuf,
}

impl FileCartStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Check that `key` can name a file. Keys are ASCII letters, digits,
    /// `_` and `-`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] for any other key.
    pub fn validate_key(key: &str) -> Result<(), StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if valid {
            Ok(())
        } else {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }

    fn path(&self, key: &str) -> Result<PathBuf, StoreError> {
        Self::validate_key(key)?;

        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl CartStore for FileCartStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path(key)?;

        match fs::read_to_string(&path).await {
            Ok(document) => Ok(Some(document)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn save(&self, key: &str, document: &str) -> Result<(), StoreError> {
        let path = self.path(key)?;
        let staged = self.dir.join(format!(".{key}.json.tmp"));

        fs::create_dir_all(&self.dir).await?;
        fs::write(&staged, document).await?;
        fs::rename(&staged, &path).await?;

        debug!(path = %path.display(), "saved cart");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn missing_document_loads_as_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileCartStore::new(dir.path());

        assert_eq!(store.load("intellismart_cart").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn saved_document_round_trips_and_is_replaced() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileCartStore::new(dir.path().join("nested"));

        store.save("intellismart_cart", r#"{"items":[]}"#).await?;
        store.save("intellismart_cart", r#"{"items":[1]}"#).await?;

        assert_eq!(
            store.load("intellismart_cart").await?.as_deref(),
            Some(r#"{"items":[1]}"#)
        );
        assert!(dir.path().join("nested/intellismart_cart.json").exists());
        assert!(!dir.path().join("nested/.intellismart_cart.json.tmp").exists());

        Ok(())
    }

    #[tokio::test]
    async fn keys_that_escape_the_directory_are_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileCartStore::new(dir.path());

        for key in ["", "../cart", "a/b", "cart.json"] {
            assert!(
                matches!(store.save(key, "{}").await, Err(StoreError::InvalidKey(_))),
                "{key:?} should be rejected"
            );
        }

        Ok(())
    }

    #[test]
    fn default_key_is_valid() {
        assert!(FileCartStore::validate_key(intellismart::store::DEFAULT_CART_KEY).is_ok());
    }
}
