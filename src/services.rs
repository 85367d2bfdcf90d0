use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::auth::TokenStorage;
use crate::config::{AppConfig, Endpoints};
use crate::graphql::{GraphqlClient, HttpTransport};
use crate::storage::Platform;

/// Everything a page needs to reach the backend, built once at startup and
/// handed down through context.
#[derive(Clone)]
pub struct Services {
    pub config: AppConfig,
    pub endpoints: Endpoints,
    pub platform: Platform,
    pub transport: Rc<dyn HttpTransport>,
    pub tokens: TokenStorage,
    pub client: GraphqlClient,
}

impl Services {
    pub fn new(
        config: AppConfig,
        endpoints: Endpoints,
        platform: Platform,
        transport: Rc<dyn HttpTransport>,
        tokens: TokenStorage,
    ) -> Self {
        let client = GraphqlClient::new(
            endpoints.graphql.as_str(),
            Rc::clone(&transport),
            tokens.clone(),
        );
        Self {
            config,
            endpoints,
            platform,
            transport,
            tokens,
            client,
        }
    }
}

/// Context wrapper; the services hold `Rc`s and never leave the UI thread.
pub type SharedServices = SendWrapper<Services>;

pub fn provide_services(services: Services) {
    provide_context::<SharedServices>(SendWrapper::new(services));
}

pub fn use_services() -> SharedServices {
    use_context::<SharedServices>().expect("Services context missing")
}
