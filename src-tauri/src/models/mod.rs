pub mod preference;

pub use preference::{KeyError, PreferenceKey, MAX_KEY_LEN};
