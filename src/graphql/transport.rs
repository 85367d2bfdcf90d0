use async_trait::async_trait;

use crate::error::ClientError;

/// Outgoing POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends requests to the backend. `?Send` because browser fetch futures
/// are not `Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

/// Production transport: `reqwest`, which uses `fetch` on wasm.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use async_trait::async_trait;

    use super::{HttpRequest, HttpResponse, HttpTransport};
    use crate::error::ClientError;

    /// Replays queued responses and records every request it receives.
    #[derive(Default)]
    pub struct FakeTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, ClientError>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, status: u16, body: serde_json::Value) {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
        }

        pub fn fail(&self, error: ClientError) {
            self.responses.borrow_mut().push_back(Err(error));
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }

        pub fn last_body(&self) -> serde_json::Value {
            let requests = self.requests.borrow();
            let body = requests
                .last()
                .and_then(|request| request.body.as_deref())
                .expect("no request body recorded");
            serde_json::from_str(body).expect("request body is not json")
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for FakeTransport {
        async fn post(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Transport("no response queued".to_string())))
        }
    }

    /// Client over a transport that never answers; for handles that are
    /// exercised without sending.
    pub fn offline_client() -> crate::graphql::GraphqlClient {
        let transport: std::rc::Rc<dyn HttpTransport> = std::rc::Rc::new(FakeTransport::new());
        let backend: crate::storage::SharedStore =
            std::rc::Rc::new(crate::storage::MemoryStore::new());
        crate::graphql::GraphqlClient::new(
            "http://localhost/query",
            transport,
            crate::auth::TokenStorage::new(backend),
        )
    }
}
