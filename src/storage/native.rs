use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::KeyValueStore;
use crate::error::StorageError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct KeyArgs<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct SetArgs<'a> {
    key: &'a str,
    value: &'a str,
}

/// Preference store owned by the native host, reached through Tauri IPC
/// (`prefs_get`, `prefs_set`, `prefs_remove`).
pub struct NativePreferences;

impl NativePreferences {
    async fn call(cmd: &str, args: &impl Serialize) -> Result<JsValue, StorageError> {
        let args = serde_wasm_bindgen::to_value(args)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        invoke(cmd, args).await.map_err(|e| {
            StorageError::Backend(
                e.as_string()
                    .unwrap_or_else(|| format!("{cmd} IPC failed")),
            )
        })
    }
}

#[async_trait(?Send)]
impl KeyValueStore for NativePreferences {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = Self::call("prefs_get", &KeyArgs { key }).await?;
        serde_wasm_bindgen::from_value::<Option<String>>(value)
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::call("prefs_set", &SetArgs { key, value }).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        Self::call("prefs_remove", &KeyArgs { key }).await?;
        Ok(())
    }
}
