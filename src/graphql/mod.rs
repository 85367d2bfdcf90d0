//! Typed GraphQL access to the ChoreQuest backend.

pub mod cache;
pub mod client;
pub mod hooks;
pub mod operations;
pub mod transport;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use cache::QueryCache;
pub use client::{FetchPolicy, GraphqlClient};
pub use hooks::{use_mutation, use_query, MutationHandle, QueryHandle};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// A single GraphQL document with its variable and result types.
///
/// Variables and results are plain data so they can live in signals.
pub trait GraphqlOperation: 'static {
    /// Operation name, sent as `operationName` and used as the cache key prefix
    const NAME: &'static str;
    const KIND: OperationKind;
    const DOCUMENT: &'static str;

    type Variables: Serialize + Clone + Send + Sync + 'static;
    type Data: DeserializeOwned + Clone + Send + Sync + 'static;
}

/// Request body for a POST to the GraphQL endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: &'a Value,
    pub operation_name: &'a str,
}

/// Response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorMessage>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorMessage {
    pub message: String,
}
