use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use send_wrapper::SendWrapper;

use crate::auth::sign_in;
use crate::components::ui::{Button, Card, CardContent, CardHeader, CardTitle, Input, Label, Select};
use crate::models::{Role, SessionStore, UiState};
use crate::services::use_services;

/// Role and id to sign in with. The id is sent exactly as typed; the select
/// only offers valid roles, anything else reads as parent.
pub fn login_target(role: &str, id: String) -> (Role, String) {
    (Role::parse(role).unwrap_or(Role::Parent), id)
}

/// Dev login: pick a role and an id, get a token from the backend.
#[component]
pub fn LoginPage() -> impl IntoView {
    let services = use_services();
    let sessions = use_context::<SessionStore>().expect("SessionStore context missing");
    let ui = use_context::<UiState>().expect("UiState context missing");
    let navigate = SendWrapper::new(use_navigate());

    let role = RwSignal::new(Role::Parent.as_str().to_string());
    let id = RwSignal::new(String::from("parent-1"));
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let (selected_role, user_id) = login_target(&role.get_untracked(), id.get_untracked());

        busy.set(true);
        let services = services.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match sign_in(&services, sessions, selected_role, &user_id).await {
                Ok(route) => (*navigate)(&route, NavigateOptions::default()),
                Err(e) => ui.report("Login failed", &e),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="min-h-dvh grid place-items-center bg-zinc-50 text-zinc-900">
            <Card class="w-full max-w-sm">
                <CardHeader>
                    <CardTitle class="text-xl font-semibold">"Chorequest Login"</CardTitle>
                    <p class="text-sm text-zinc-600 mt-1">"Dev login issues a JWT via backend"</p>
                </CardHeader>
                <CardContent>
                    <form class="mt-2 space-y-3" on:submit=on_submit>
                        <div>
                            <Label html_for="login-role" class="mb-1">"Role"</Label>
                            <Select value=role attr:id="login-role">
                                <option value="PARENT">"Parent"</option>
                                <option value="CHILD">"Child"</option>
                            </Select>
                        </div>
                        <div>
                            <Label html_for="login-id" class="mb-1">"ID"</Label>
                            <Input value=id placeholder="parent-1 or <childId>" attr:id="login-id" />
                        </div>
                        <Button submit=true class="w-full" disabled=busy>
                            {move || if busy.get() { "Signing in…" } else { "Login" }}
                        </Button>
                    </form>
                </CardContent>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_target_keeps_id_as_typed() {
        assert_eq!(
            login_target("CHILD", " kid-1 ".to_string()),
            (Role::Child, " kid-1 ".to_string())
        );
        assert_eq!(login_target("PARENT", String::new()), (Role::Parent, String::new()));
    }

    #[test]
    fn test_login_target_defaults_to_parent() {
        assert_eq!(login_target("", "parent-1".to_string()).0, Role::Parent);
    }
}
