use tauri::State;

use crate::models::PreferenceKey;
use crate::state::PreferenceStore;

fn parse_key(key: &str) -> Result<PreferenceKey, String> {
    PreferenceKey::parse(key).map_err(|e| {
        tracing::warn!("Rejected preference key {:?}: {}", key, e);
        e.to_string()
    })
}

/// Read a preference.
///
/// # Returns
/// * `Ok(Some(value))` - Stored value
/// * `Ok(None)` - Key not set
/// * `Err(String)` - Invalid key
pub async fn get_preference(store: &PreferenceStore, key: &str) -> Result<Option<String>, String> {
    let key = parse_key(key)?;
    let value = store.get(&key).await;
    tracing::debug!("prefs_get {} -> {}", key, if value.is_some() { "hit" } else { "miss" });
    Ok(value)
}

/// Store a preference and flush it to disk.
pub async fn set_preference(store: &PreferenceStore, key: &str, value: String) -> Result<(), String> {
    let key = parse_key(key)?;
    tracing::debug!("prefs_set {}", key);
    store.set(&key, value).await.map_err(|e| {
        tracing::error!("Failed to persist preference {}: {}", key, e);
        format!("Failed to save preference: {e}")
    })
}

/// Delete a preference. Removing an absent key succeeds.
pub async fn remove_preference(store: &PreferenceStore, key: &str) -> Result<(), String> {
    let key = parse_key(key)?;
    let removed = store.remove(&key).await.map_err(|e| {
        tracing::error!("Failed to persist removal of {}: {}", key, e);
        format!("Failed to remove preference: {e}")
    })?;
    tracing::debug!("prefs_remove {} (present: {})", key, removed);
    Ok(())
}

#[tauri::command]
pub async fn prefs_get(
    key: String,
    store: State<'_, PreferenceStore>,
) -> Result<Option<String>, String> {
    get_preference(&store, &key).await
}

#[tauri::command]
pub async fn prefs_set(
    key: String,
    value: String,
    store: State<'_, PreferenceStore>,
) -> Result<(), String> {
    set_preference(&store, &key, value).await
}

#[tauri::command]
pub async fn prefs_remove(key: String, store: State<'_, PreferenceStore>) -> Result<(), String> {
    remove_preference(&store, &key).await
}
