use leptos::prelude::*;

use super::{field_class, FIELD_BASE};

/// Text input bound two-way to `value`.
#[component]
pub fn Input(
    value: RwSignal<String>,
    #[prop(into, optional)] placeholder: String,
    /// HTML input type; `text` when empty
    #[prop(into, optional)]
    kind: String,
    #[prop(optional)] invalid: bool,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let kind = if kind.is_empty() {
        "text".to_string()
    } else {
        kind
    };

    view! {
        <input
            type=kind
            class=field_class(FIELD_BASE, invalid, &class)
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
