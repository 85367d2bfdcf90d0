//! Key-value persistence behind a single capability interface.
//!
//! The backend is chosen once, when the app starts, by [`Platform::detect`]:
//! a plain browser gets `localStorage`, the Tauri shell gets the native
//! preference store over IPC.

pub mod browser;
pub mod memory;
pub mod native;

use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::JsValue;

use crate::error::StorageError;

pub use browser::BrowserStorage;
pub use memory::MemoryStore;
pub use native::NativePreferences;

/// Read, write and delete string values by key.
///
/// Implementations may be synchronous underneath; callers always await.
#[async_trait(?Send)]
pub trait KeyValueStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a storage backend.
pub type SharedStore = Rc<dyn KeyValueStore>;

/// Where the frontend is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Browser,
    Native,
}

impl Platform {
    /// Inspect the window for the Tauri bridge.
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::Browser;
        };
        match js_sys::Reflect::get(&window, &JsValue::from_str("__TAURI__")) {
            Ok(bridge) if !bridge.is_undefined() && !bridge.is_null() => Self::Native,
            _ => Self::Browser,
        }
    }

    /// Backend used for secrets on this platform (the bearer token).
    pub fn secure_store(self) -> SharedStore {
        match self {
            Self::Native => Rc::new(NativePreferences),
            Self::Browser => local_store(),
        }
    }
}

/// The browser's `localStorage`, or an in-memory map when it is unavailable
/// (private mode, no window).
pub fn local_store() -> SharedStore {
    match BrowserStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            web_sys::console::warn_1(
                &format!("localStorage unavailable, falling back to memory: {e}").into(),
            );
            Rc::new(MemoryStore::new())
        }
    }
}
