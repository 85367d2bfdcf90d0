use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use send_wrapper::SendWrapper;

use crate::auth::sign_out;
use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::config::AppConfig;
use crate::models::{Role, Session, SessionStore, UiState};
use crate::services::use_services;

/// Where the brand link points for the current session.
pub fn home_link(session: &Session) -> String {
    match (session.role(), session.id()) {
        (Some(Role::Parent), Some(id)) => Role::Parent.home_route(id),
        _ => "/login".to_string(),
    }
}

/// GraphiQL explorer URL, only for builds with dev tools enabled.
pub fn graphiql_link(config: &AppConfig) -> Option<String> {
    config.dev_tools.then(|| config.graphiql_url.clone())
}

/// Sticky top bar with navigation and the signed-in identity.
#[component]
pub fn Header() -> impl IntoView {
    let services = use_services();
    let sessions = use_context::<SessionStore>().expect("SessionStore context missing");
    let ui = use_context::<UiState>().expect("UiState context missing");
    let session = sessions.subscribe();
    let navigate = SendWrapper::new(use_navigate());

    let graphiql_url = graphiql_link(&services.config);

    let on_sign_out = move |_| {
        let services = services.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = sign_out(&services, sessions).await {
                ui.report("Sign out incomplete", &e);
            }
            (*navigate)("/login", NavigateOptions::default());
        });
    };

    view! {
        <header class="sticky top-0 z-40 bg-gradient-to-r from-indigo-600 to-cyan-500 text-white shadow">
            <div class="max-w-6xl mx-auto px-4 h-12 flex items-center justify-between">
                <A href=move || home_link(&session.get()) attr:class="font-semibold">
                    "ChoreQuest"
                </A>
                <nav class="text-sm flex items-center gap-4">
                    <A href="/login" attr:class="hover:underline">"Login"</A>
                    <A href="/parent/parent-1" attr:class="hover:underline">"Parent"</A>
                    <A href="/child/child-1" attr:class="hover:underline">"Child"</A>
                    {move || {
                        session
                            .get()
                            .identity()
                            .map(|identity| {
                                view! {
                                    <span class="opacity-90">
                                        {format!("{} · {}", identity.role, identity.id)}
                                    </span>
                                }
                            })
                    }}
                    <Show when=move || session.get().is_signed_in()>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            class="text-white hover:bg-white/10"
                            on:click=on_sign_out.clone()
                        >
                            "Sign out"
                        </Button>
                    </Show>
                    {graphiql_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    class="hover:underline"
                                    target="_blank"
                                    rel="noreferrer"
                                >
                                    "GraphiQL"
                                </a>
                            }
                        })}
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_link_for_parent() {
        let session = Session::signed_in("parent-1", Role::Parent);
        assert_eq!(home_link(&session), "/parent/parent-1");
    }

    fn config(dev_tools: bool) -> AppConfig {
        AppConfig {
            graphql_url: "/query".to_string(),
            auth_base_url: None,
            graphiql_url: "http://localhost:8080/graphiql".to_string(),
            dev_tools,
        }
    }

    #[test]
    fn test_graphiql_hidden_without_dev_tools() {
        assert_eq!(graphiql_link(&config(false)), None);
    }

    #[test]
    fn test_graphiql_shown_with_dev_tools() {
        assert_eq!(
            graphiql_link(&config(true)).as_deref(),
            Some("http://localhost:8080/graphiql")
        );
    }

    #[test]
    fn test_home_link_otherwise_login() {
        assert_eq!(home_link(&Session::default()), "/login");
        assert_eq!(home_link(&Session::signed_in("c1", Role::Child)), "/login");
    }
}
