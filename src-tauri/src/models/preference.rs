use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest key the store accepts.
pub const MAX_KEY_LEN: usize = 256;

/// Why a key was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    Empty,
    TooLong(usize),
    ControlCharacter,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Preference key cannot be empty"),
            Self::TooLong(len) => write!(
                f,
                "Preference key is {len} characters, limit is {MAX_KEY_LEN}"
            ),
            Self::ControlCharacter => write!(f, "Preference key contains control characters"),
        }
    }
}

impl std::error::Error for KeyError {}

/// A validated preference key (frontend → backend IPC).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PreferenceKey(String);

impl PreferenceKey {
    /// Validate a raw key: non-empty, at most [`MAX_KEY_LEN`] characters and
    /// free of control characters.
    pub fn parse(raw: &str) -> Result<Self, KeyError> {
        if raw.trim().is_empty() {
            return Err(KeyError::Empty);
        }
        let len = raw.chars().count();
        if len > MAX_KEY_LEN {
            return Err(KeyError::TooLong(len));
        }
        if raw.chars().any(char::is_control) {
            return Err(KeyError::ControlCharacter);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PreferenceKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PreferenceKey> for String {
    fn from(key: PreferenceKey) -> Self {
        key.0
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_session_keys() {
        assert_eq!(PreferenceKey::parse("auth_token").unwrap().as_str(), "auth_token");
        assert_eq!(PreferenceKey::parse("auth_state").unwrap().to_string(), "auth_state");
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert_eq!(PreferenceKey::parse(""), Err(KeyError::Empty));
        assert_eq!(PreferenceKey::parse("   "), Err(KeyError::Empty));
    }

    #[test]
    fn test_rejects_long_keys() {
        let key = "k".repeat(MAX_KEY_LEN + 1);
        assert_eq!(
            PreferenceKey::parse(&key),
            Err(KeyError::TooLong(MAX_KEY_LEN + 1))
        );
        assert!(PreferenceKey::parse(&"k".repeat(MAX_KEY_LEN)).is_ok());
    }

    #[test]
    fn test_rejects_control_characters() {
        assert_eq!(
            PreferenceKey::parse("auth\ntoken"),
            Err(KeyError::ControlCharacter)
        );
    }

    #[test]
    fn test_deserialization_validates() {
        let key: PreferenceKey = serde_json::from_str("\"auth_token\"").unwrap();
        assert_eq!(key.as_str(), "auth_token");
        assert!(serde_json::from_str::<PreferenceKey>("\"\"").is_err());
    }
}
