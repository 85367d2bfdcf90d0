use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::{Header, NotificationBar};
use crate::models::{SessionStore, UiState};
use crate::pages::{ChildView, LoginPage, NotFound, ParentDashboard};
use crate::services::{provide_services, Services};

/// Root application component: provides the shared services, session and
/// UI state, then routes between the pages.
#[component]
pub fn App(services: Services, sessions: SessionStore) -> impl IntoView {
    provide_services(services);
    provide_context(sessions);
    provide_context(UiState::new());

    view! {
        <Router>
            <div class="min-h-dvh bg-zinc-50 text-zinc-900">
                <Header />
                <NotificationBar />
                <main>
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=|| view! { <Redirect path="/login" /> } />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/parent") view=ParentDashboard />
                        <Route path=path!("/parent/:parentId") view=ParentDashboard />
                        <Route path=path!("/child/:childId") view=ChildView />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
