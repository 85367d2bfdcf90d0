use crate::error::StorageError;
use crate::storage::SharedStore;

/// Persists the bearer token on the platform's secure backend.
#[derive(Clone)]
pub struct TokenStorage {
    backend: SharedStore,
}

impl TokenStorage {
    pub const STORAGE_KEY: &'static str = "auth_token";

    pub fn new(backend: SharedStore) -> Self {
        Self { backend }
    }

    /// Replace the stored token; `None` (or an empty string) deletes it.
    pub async fn set_token(&self, token: Option<&str>) -> Result<(), StorageError> {
        match token.filter(|token| !token.is_empty()) {
            Some(token) => self.backend.write(Self::STORAGE_KEY, token).await,
            None => self.backend.delete(Self::STORAGE_KEY).await,
        }
    }

    pub async fn get_token(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .backend
            .read(Self::STORAGE_KEY)
            .await?
            .filter(|token| !token.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;
    use crate::storage::MemoryStore;

    fn tokens() -> (Rc<MemoryStore>, TokenStorage) {
        let store = Rc::new(MemoryStore::new());
        let backend: SharedStore = store.clone();
        let tokens = TokenStorage::new(backend);
        (store, tokens)
    }

    #[test]
    fn test_token_round_trip() {
        let (_, tokens) = tokens();
        for token in ["abc", "eyJhbGciOiJIUzI1NiJ9.e30.sig", "with spaces and ünïcode"] {
            block_on(tokens.set_token(Some(token))).unwrap();
            assert_eq!(block_on(tokens.get_token()).unwrap().as_deref(), Some(token));
        }
    }

    #[test]
    fn test_set_none_deletes() {
        let (store, tokens) = tokens();
        block_on(tokens.set_token(Some("abc"))).unwrap();

        block_on(tokens.set_token(None)).unwrap();

        assert_eq!(block_on(tokens.get_token()).unwrap(), None);
        assert!(store.get(TokenStorage::STORAGE_KEY).is_none());
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let (_, tokens) = tokens();
        block_on(tokens.set_token(Some("abc"))).unwrap();
        block_on(tokens.set_token(Some(""))).unwrap();

        assert_eq!(block_on(tokens.get_token()).unwrap(), None);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let (store, tokens) = tokens();
        store.set_fail_writes(true);

        assert!(block_on(tokens.set_token(Some("abc"))).is_err());
    }
}
