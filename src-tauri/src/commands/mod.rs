pub mod preferences;

pub use preferences::{prefs_get, prefs_remove, prefs_set};
