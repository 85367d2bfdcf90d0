use serde::Deserialize;

use crate::config::Endpoints;
use crate::error::ClientError;
use crate::graphql::{HttpRequest, HttpTransport};
use crate::models::{Role, SessionStore};
use crate::services::Services;

#[derive(Deserialize)]
struct DevTokenResponse {
    token: String,
}

/// Ask the development auth endpoint for a token:
/// `POST <auth_base>/auth/dev?role=<ROLE>&sub=<id>` → `{"token": ".."}`.
pub async fn request_dev_token(
    transport: &dyn HttpTransport,
    endpoints: &Endpoints,
    role: Role,
    sub: &str,
) -> Result<String, ClientError> {
    let mut url = endpoints.dev_auth()?;
    url.query_pairs_mut()
        .append_pair("role", role.as_str())
        .append_pair("sub", sub);

    let response = transport
        .post(HttpRequest::post(url.as_str()).with_header("Accept", "application/json"))
        .await?;
    if !response.is_success() {
        return Err(ClientError::Status {
            status: response.status,
            body: response.body,
        });
    }

    let DevTokenResponse { token } = serde_json::from_str(&response.body)?;
    if token.is_empty() {
        return Err(ClientError::Decode("empty token".to_string()));
    }
    Ok(token)
}

/// Sign in as `id` with `role`: fetch a dev token, store it, remember the
/// session. Returns the route to navigate to.
pub async fn sign_in(
    services: &Services,
    sessions: SessionStore,
    role: Role,
    id: &str,
) -> Result<String, ClientError> {
    let token =
        request_dev_token(services.transport.as_ref(), &services.endpoints, role, id).await?;
    services.tokens.set_token(Some(&token)).await?;
    services.client.reset_cache();
    sessions.set(id, role).await?;
    Ok(role.home_route(id))
}

/// Forget the token, the session and every cached result.
///
/// All three steps run even if an earlier one fails; the first error is
/// returned.
pub async fn sign_out(services: &Services, sessions: SessionStore) -> Result<(), ClientError> {
    let token = services.tokens.set_token(None).await;
    let session = sessions.clear().await;
    services.client.reset_cache();
    token?;
    session?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::auth::TokenStorage;
    use crate::config::AppConfig;
    use crate::graphql::transport::testing::FakeTransport;
    use crate::models::Session;
    use crate::storage::{MemoryStore, Platform, SharedStore};

    struct Harness {
        transport: Rc<FakeTransport>,
        token_store: Rc<MemoryStore>,
        session_store: Rc<MemoryStore>,
        services: Services,
        sessions: SessionStore,
    }

    fn harness() -> Harness {
        let config = AppConfig {
            graphql_url: "/query".to_string(),
            auth_base_url: None,
            graphiql_url: String::new(),
            dev_tools: false,
        };
        let endpoints = config.resolve("http://localhost:5173").unwrap();
        let transport = Rc::new(FakeTransport::new());
        let token_store = Rc::new(MemoryStore::new());
        let session_store = Rc::new(MemoryStore::new());
        let shared_transport: Rc<dyn HttpTransport> = transport.clone();
        let token_backend: SharedStore = token_store.clone();
        let session_backend: SharedStore = session_store.clone();
        let services = Services::new(
            config,
            endpoints,
            Platform::Browser,
            shared_transport,
            TokenStorage::new(token_backend),
        );
        let sessions = block_on(SessionStore::restore(session_backend));
        Harness {
            transport,
            token_store,
            session_store,
            services,
            sessions,
        }
    }

    #[test]
    fn test_dev_token_request_url() {
        let h = harness();
        h.transport.respond(200, json!({"token": "jwt"}));

        let token = block_on(request_dev_token(
            h.transport.as_ref(),
            &h.services.endpoints,
            Role::Child,
            "kid one&two",
        ))
        .unwrap();

        assert_eq!(token, "jwt");
        let request = &h.transport.requests()[0];
        assert_eq!(
            request.url,
            "http://localhost:5173/auth/dev?role=CHILD&sub=kid+one%26two"
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_parent_login_scenario() {
        let h = harness();
        h.transport.respond(200, json!({"token": "parent-jwt"}));

        let route = block_on(sign_in(&h.services, h.sessions, Role::Parent, "parent-1")).unwrap();

        assert_eq!(route, "/parent/parent-1");
        assert_eq!(
            h.transport.requests()[0].url,
            "http://localhost:5173/auth/dev?role=PARENT&sub=parent-1"
        );
        assert_eq!(
            h.token_store.get(TokenStorage::STORAGE_KEY).as_deref(),
            Some("parent-jwt")
        );
        assert_eq!(
            h.sessions.get_untracked(),
            Session::signed_in("parent-1", Role::Parent)
        );
        assert!(h.session_store.get(SessionStore::STORAGE_KEY).is_some());
    }

    #[test]
    fn test_failed_login_changes_nothing() {
        let h = harness();
        h.transport.respond(412, json!("JWT_SECRET not set"));

        let result = block_on(sign_in(&h.services, h.sessions, Role::Parent, "parent-1"));

        assert!(matches!(result, Err(ClientError::Status { status: 412, .. })));
        assert!(h.token_store.get(TokenStorage::STORAGE_KEY).is_none());
        assert!(!h.sessions.get_untracked().is_signed_in());
    }

    #[test]
    fn test_malformed_token_response() {
        let h = harness();
        h.transport.respond(200, json!({"nope": true}));
        h.transport.respond(200, json!({"token": ""}));

        let missing = block_on(sign_in(&h.services, h.sessions, Role::Child, "c1"));
        let empty = block_on(sign_in(&h.services, h.sessions, Role::Child, "c1"));

        assert!(matches!(missing, Err(ClientError::Decode(_))));
        assert!(matches!(empty, Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_sign_out_clears_token_and_session() {
        let h = harness();
        h.transport.respond(200, json!({"token": "jwt"}));
        block_on(sign_in(&h.services, h.sessions, Role::Child, "c1")).unwrap();

        block_on(sign_out(&h.services, h.sessions)).unwrap();

        assert!(h.token_store.get(TokenStorage::STORAGE_KEY).is_none());
        assert!(h.session_store.get(SessionStore::STORAGE_KEY).is_none());
        assert!(!h.sessions.get_untracked().is_signed_in());
    }

    #[test]
    fn test_sign_out_reports_storage_failure_but_still_signs_out() {
        let h = harness();
        h.transport.respond(200, json!({"token": "jwt"}));
        block_on(sign_in(&h.services, h.sessions, Role::Child, "c1")).unwrap();
        h.token_store.set_fail_writes(true);

        let result = block_on(sign_out(&h.services, h.sessions));

        assert!(matches!(result, Err(ClientError::Storage(_))));
        assert!(!h.sessions.get_untracked().is_signed_in());
    }
}
