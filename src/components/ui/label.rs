use leptos::prelude::*;

use super::classes;

#[component]
pub fn Label(
    #[prop(into, optional)] html_for: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <label for=html_for class=classes(&["block text-sm font-medium text-zinc-700", &class])>
            {children()}
        </label>
    }
}
