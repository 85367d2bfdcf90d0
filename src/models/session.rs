use std::fmt;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::SharedStore;

/// Who the signed-in user is to the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Parent,
    Child,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "PARENT",
            Self::Child => "CHILD",
        }
    }

    /// Route a user with this role lands on after signing in.
    pub fn home_route(self, id: &str) -> String {
        match self {
            Self::Parent => format!("/parent/{id}"),
            Self::Child => format!("/child/{id}"),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PARENT" => Some(Self::Parent),
            "CHILD" => Some(Self::Child),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed-in identity. `id` and `role` only ever exist together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub role: Role,
}

/// Persisted shape: `{"id": .., "role": ..}`, either field possibly null.
#[derive(Deserialize)]
struct PersistedSession {
    id: Option<String>,
    role: Option<Role>,
}

/// The locally remembered identity, or nobody.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn signed_in(id: impl Into<String>, role: Role) -> Self {
        Self {
            identity: Some(Identity {
                id: id.into(),
                role,
            }),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.id.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    pub const fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub const fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Parse a persisted blob. Anything absent, malformed or half-populated
    /// is treated as signed out.
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str::<PersistedSession>(raw) {
            Ok(PersistedSession {
                id: Some(id),
                role: Some(role),
            }) => Self::signed_in(id, role),
            _ => Self::default(),
        }
    }
}

/// Reactive holder of the current [`Session`], mirrored to a storage backend
/// under [`SessionStore::STORAGE_KEY`].
///
/// Cheap to copy; handed to components through context.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<Session>,
    backend: StoredValue<SendWrapper<SharedStore>>,
}

impl SessionStore {
    pub const STORAGE_KEY: &'static str = "auth_state";

    /// Load the persisted session. Never fails: read errors and bad blobs
    /// both restore as signed out.
    pub async fn restore(backend: SharedStore) -> Self {
        let raw = backend.read(Self::STORAGE_KEY).await.unwrap_or(None);
        let session = Session::decode(raw.as_deref());
        Self::with_session(backend, session)
    }

    fn with_session(backend: SharedStore, session: Session) -> Self {
        Self {
            state: RwSignal::new(session),
            backend: StoredValue::new(SendWrapper::new(backend)),
        }
    }

    /// Current session; tracked when called inside a reactive scope.
    pub fn get(&self) -> Session {
        self.state.get()
    }

    pub fn get_untracked(&self) -> Session {
        self.state.get_untracked()
    }

    /// Read-only signal for components that re-render on sign-in changes.
    pub fn subscribe(&self) -> Signal<Session> {
        let state = self.state;
        Signal::derive(move || state.get())
    }

    /// Persist `{id, role}` then update the in-memory session.
    ///
    /// The in-memory session changes even if the durable write fails; the
    /// write error is returned so the caller can report it.
    pub async fn set(&self, id: &str, role: Role) -> Result<(), StorageError> {
        let identity = Identity {
            id: id.to_string(),
            role,
        };
        let encoded = serde_json::to_string(&identity)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let backend = self.backend.get_value();
        let written = backend.write(Self::STORAGE_KEY, &encoded).await;

        self.state.set(Session {
            identity: Some(identity),
        });
        written
    }

    /// Remove the persisted blob and sign out in memory.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let backend = self.backend.get_value();
        let removed = backend.delete(Self::STORAGE_KEY).await;

        self.state.set(Session::default());
        removed
    }
}
