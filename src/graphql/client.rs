use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use super::{
    GraphqlOperation, GraphqlRequest, GraphqlResponse, HttpRequest, HttpTransport, OperationKind,
    QueryCache,
};
use crate::auth::TokenStorage;
use crate::error::{ClientError, StorageError};

/// Whether a query may be answered from cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Use a cached result when one exists
    CacheFirst,
    /// Always ask the server (refetch); the result replaces the cached one
    NetworkOnly,
}

struct ClientInner {
    endpoint: String,
    transport: Rc<dyn HttpTransport>,
    tokens: TokenStorage,
    cache: RefCell<QueryCache>,
}

/// The one GraphQL client of the app. Clones share transport, token storage
/// and cache.
///
/// Errors are handed back to the caller as they occurred; nothing is retried.
#[derive(Clone)]
pub struct GraphqlClient {
    inner: Rc<ClientInner>,
}

impl GraphqlClient {
    pub fn new(
        endpoint: impl Into<String>,
        transport: Rc<dyn HttpTransport>,
        tokens: TokenStorage,
    ) -> Self {
        Self {
            inner: Rc::new(ClientInner {
                endpoint: endpoint.into(),
                transport,
                tokens,
                cache: RefCell::new(QueryCache::new()),
            }),
        }
    }

    /// `Bearer <token>` for the currently stored token, read fresh each call.
    pub async fn authorization(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .inner
            .tokens
            .get_token()
            .await?
            .map(|token| format!("Bearer {token}")))
    }

    /// Build the HTTP request for an operation, including the auth header.
    pub async fn prepare<Op: GraphqlOperation>(
        &self,
        variables: &Value,
    ) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(&GraphqlRequest {
            query: Op::DOCUMENT,
            variables,
            operation_name: Op::NAME,
        })?;

        let mut request = HttpRequest::post(self.inner.endpoint.as_str())
            .with_header("Content-Type", "application/json")
            .with_header("Accept", "application/json")
            .with_body(body);
        if let Some(authorization) = self.authorization().await? {
            request = request.with_header("Authorization", authorization);
        }
        Ok(request)
    }

    /// Run a query or mutation.
    ///
    /// Queries honour `policy`; mutations always go to the server and their
    /// entities are merged into cached query results.
    pub async fn execute<Op: GraphqlOperation>(
        &self,
        variables: &Op::Variables,
        policy: FetchPolicy,
    ) -> Result<Op::Data, ClientError> {
        let variables = serde_json::to_value(variables)?;
        let key = QueryCache::key(Op::NAME, &variables);

        if Op::KIND == OperationKind::Query && policy == FetchPolicy::CacheFirst {
            let cached = self.inner.cache.borrow().read(&key).cloned();
            if let Some(data) = cached {
                return Ok(serde_json::from_value(data)?);
            }
        }

        let request = self.prepare::<Op>(&variables).await?;
        let response = self.inner.transport.post(request).await?;
        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let envelope: GraphqlResponse = serde_json::from_str(&response.body)?;
        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            return Err(ClientError::Graphql(
                errors.into_iter().map(|error| error.message).collect(),
            ));
        }
        let data = envelope
            .data
            .filter(|data| !data.is_null())
            .ok_or(ClientError::MissingData)?;

        {
            let mut cache = self.inner.cache.borrow_mut();
            match Op::KIND {
                OperationKind::Query => cache.write(key, data.clone()),
                OperationKind::Mutation => cache.merge_entities(&data),
            }
        }

        Ok(serde_json::from_value(data)?)
    }

    pub async fn query<Op: GraphqlOperation>(
        &self,
        variables: &Op::Variables,
        policy: FetchPolicy,
    ) -> Result<Op::Data, ClientError> {
        self.execute::<Op>(variables, policy).await
    }

    pub async fn mutate<Op: GraphqlOperation>(
        &self,
        variables: &Op::Variables,
    ) -> Result<Op::Data, ClientError> {
        self.execute::<Op>(variables, FetchPolicy::NetworkOnly).await
    }

    /// Decoded cached result for an operation, if any.
    pub fn cached<Op: GraphqlOperation>(&self, variables: &Op::Variables) -> Option<Op::Data> {
        let variables = serde_json::to_value(variables).ok()?;
        let cache = self.inner.cache.borrow();
        let data = cache.read(&QueryCache::key(Op::NAME, &variables))?;
        serde_json::from_value(data.clone()).ok()
    }

    /// Drop every cached result (sign-in/sign-out).
    pub fn reset_cache(&self) {
        self.inner.cache.borrow_mut().clear();
    }
}
