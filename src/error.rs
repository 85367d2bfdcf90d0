use thiserror::Error;

/// Failure reading or writing a persisted key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled, IPC missing)
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    /// The backend rejected the operation
    #[error("storage backend failed: {0}")]
    Backend(String),
    /// A persisted value could not be encoded or decoded
    #[error("failed to serialize stored value: {0}")]
    Serialization(String),
}

/// Failure talking to the GraphQL server or the dev auth endpoint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("{}", .0.join("; "))]
    Graphql(Vec<String>),
    #[error("response contained no data")]
    MissingData,
    #[error("invalid response: {0}")]
    Decode(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_errors_join_messages() {
        let err = ClientError::Graphql(vec!["unauthorized".to_string(), "not found".to_string()]);
        assert_eq!(err.to_string(), "unauthorized; not found");
    }

    #[test]
    fn test_storage_error_converts_into_client_error() {
        let err: ClientError = StorageError::Backend("quota exceeded".to_string()).into();
        assert_eq!(err.to_string(), "storage backend failed: quota exceeded");
    }

    #[test]
    fn test_status_error_display() {
        let err = ClientError::Status {
            status: 412,
            body: "JWT_SECRET not set".to_string(),
        };
        assert_eq!(err.to_string(), "server responded with 412: JWT_SECRET not set");
    }
}
