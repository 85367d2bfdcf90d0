pub mod commands;
pub mod logging;
pub mod models;
pub mod state;

use std::path::PathBuf;

use commands::{prefs_get, prefs_remove, prefs_set};
use logging::setup_logging;
use state::preference_store::PREFERENCES_FILE;
use state::PreferenceStore;

const APP_IDENTIFIER: &str = "com.chorequest.app";

/// `<config dir>/com.chorequest.app/preferences.json`, falling back to the
/// home directory and then the working directory.
pub fn preferences_path() -> PathBuf {
    let base = dirs_next::config_dir()
        .or_else(dirs_next::home_dir)
        .unwrap_or_else(|| {
            tracing::warn!("No config or home directory, storing preferences in working dir");
            PathBuf::from(".")
        });
    base.join(APP_IDENTIFIER).join(PREFERENCES_FILE)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging before starting Tauri
    if let Err(e) = setup_logging() {
        eprintln!("Warning: Failed to setup logging: {e}");
    }

    tracing::info!("Starting ChoreQuest");

    let store = tauri::async_runtime::block_on(PreferenceStore::open(preferences_path()));

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(store)
        .invoke_handler(tauri::generate_handler![prefs_get, prefs_set, prefs_remove])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
