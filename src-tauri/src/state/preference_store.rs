use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::PreferenceKey;

pub const PREFERENCES_FILE: &str = "preferences.json";

/// String preferences persisted as a JSON object on disk.
///
/// Every mutation rewrites the whole file while holding the write lock, so
/// concurrent `set`/`remove` calls land on disk in the order they took the
/// lock.
pub struct PreferenceStore {
    path: PathBuf,
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl PreferenceStore {
    /// Load `path`. A missing file is an empty store; an unreadable or
    /// corrupt one is logged and also starts empty.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path).await;
        tracing::info!(
            "Preference store opened at {} with {} entries",
            path.display(),
            entries.len()
        );

        Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    pub async fn get(&self, key: &PreferenceKey) -> Option<String> {
        self.entries.read().await.get(key.as_str()).cloned()
    }

    /// Store `value` under `key` and flush to disk.
    ///
    /// The in-memory value is kept even when the flush fails; the error is
    /// returned to the caller.
    pub async fn set(&self, key: &PreferenceKey, value: String) -> io::Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.as_str().to_string(), value);
        self.persist(&entries).await
    }

    /// Remove `key`. Returns whether it was present; absent keys do not touch
    /// the file.
    pub async fn remove(&self, key: &PreferenceKey) -> io::Result<bool> {
        let mut entries = self.entries.write().await;
        if entries.remove(key.as_str()).is_none() {
            return Ok(false);
        }
        self.persist(&entries).await?;
        Ok(true)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Stored keys, sorted.
    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> io::Result<()> {
        let json = serde_json::to_vec_pretty(entries)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write beside the target then rename so a crash never leaves a torn file
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        restrict_permissions(&tmp).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!("Persisted {} preferences", entries.len());
        Ok(())
    }
}

impl Clone for PreferenceStore {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            entries: Arc::clone(&self.entries),
        }
    }
}

async fn load_entries(path: &Path) -> HashMap<String, String> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return HashMap::new(),
        Err(e) => {
            tracing::warn!("Failed to read preferences {}: {}", path.display(), e);
            return HashMap::new();
        }
    };

    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        tracing::warn!("Ignoring corrupt preferences {}: {}", path.display(), e);
        HashMap::new()
    })
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await
}

#[cfg(not(unix))]
#[allow(clippy::unused_async)]
async fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> PreferenceKey {
        PreferenceKey::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open(dir.path().join(PREFERENCES_FILE)).await;

        assert!(store.is_empty().await);
        assert_eq!(store.get(&key("auth_token")).await, None);
    }

    #[tokio::test]
    async fn test_corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let store = PreferenceStore::open(&path).await;
        assert!(store.is_empty().await);

        // The next write replaces the corrupt file
        store.set(&key("auth_token"), "t".to_string()).await.unwrap();
        let reopened = PreferenceStore::open(&path).await;
        assert_eq!(reopened.get(&key("auth_token")).await.as_deref(), Some("t"));
    }

    #[tokio::test]
    async fn test_set_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE);
        let store = PreferenceStore::open(&path).await;

        store.set(&key("auth_token"), "abc".to_string()).await.unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_remove_reports_presence() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open(dir.path().join(PREFERENCES_FILE)).await;

        assert!(!store.remove(&key("auth_token")).await.unwrap());
        store.set(&key("auth_token"), "abc".to_string()).await.unwrap();
        assert!(store.remove(&key("auth_token")).await.unwrap());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_keys_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open(dir.path().join(PREFERENCES_FILE)).await;

        store.set(&key("b"), "2".to_string()).await.unwrap();
        store.set(&key("a"), "1".to_string()).await.unwrap();

        assert_eq!(store.keys().await, vec!["a".to_string(), "b".to_string()]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        let store = PreferenceStore::open(&path).await;
        store.set(&key("auth_token"), "abc".to_string()).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_store_matches_model(
                ops in proptest::collection::vec(
                    (0usize..4, proptest::option::of("[a-z]{0,8}")),
                    0..40,
                )
            ) {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .unwrap();
                let dir = tempfile::tempdir().unwrap();
                let path = dir.path().join(PREFERENCES_FILE);
                let keys = ["auth_token", "auth_state", "theme", "locale"];

                let model = runtime.block_on(async {
                    let store = PreferenceStore::open(&path).await;
                    let mut model = HashMap::new();
                    for (slot, value) in &ops {
                        let key = PreferenceKey::parse(keys[*slot]).unwrap();
                        match value {
                            Some(value) => {
                                store.set(&key, value.clone()).await.unwrap();
                                model.insert(keys[*slot].to_string(), value.clone());
                            }
                            None => {
                                let removed = store.remove(&key).await.unwrap();
                                assert_eq!(removed, model.remove(keys[*slot]).is_some());
                            }
                        }
                    }
                    model
                });

                let reopened = runtime.block_on(PreferenceStore::open(&path));
                for slot in keys {
                    let key = PreferenceKey::parse(slot).unwrap();
                    prop_assert_eq!(
                        runtime.block_on(reopened.get(&key)),
                        model.get(slot).cloned()
                    );
                }
            }
        }
    }
}
