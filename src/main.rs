mod app;
mod auth;
mod components;
mod config;
mod error;
mod graphql;
mod models;
mod navigation;
mod pages;
mod services;
mod storage;

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::app::App;
use crate::auth::TokenStorage;
use crate::config::AppConfig;
use crate::graphql::{HttpTransport, ReqwestTransport};
use crate::models::SessionStore;
use crate::services::Services;
use crate::storage::{local_store, Platform};

fn main() {
    console_error_panic_hook::set_once();

    spawn_local(async {
        let config = AppConfig::from_build_env();
        let (origin, _) = navigation::current_location();
        let endpoints = match config.resolve(&origin) {
            Ok(endpoints) => endpoints,
            Err(e) => {
                console::error_1(&format!("Invalid endpoint configuration: {e}").into());
                return;
            }
        };

        let platform = Platform::detect();
        let tokens = TokenStorage::new(platform.secure_store());
        let sessions = SessionStore::restore(local_store()).await;
        let transport: Rc<dyn HttpTransport> = Rc::new(ReqwestTransport::new());
        let services = Services::new(config, endpoints, platform, transport, tokens);

        mount_to_body(move || view! { <App services=services sessions=sessions /> });
    });
}
