use leptos::prelude::*;

use super::classes;

#[component]
pub fn Card(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=classes(&["bg-white rounded-xl shadow", &class])>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=classes(&["px-4 pt-4", &class])>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <h2 class=classes(&["font-medium", &class])>{children()}</h2> }
}

#[component]
pub fn CardContent(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=classes(&["p-4 pt-2", &class])>{children()}</div> }
}
