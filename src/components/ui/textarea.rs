use leptos::prelude::*;

use super::{field_class, FIELD_BASE};

#[component]
pub fn Textarea(
    value: RwSignal<String>,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] invalid: bool,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <textarea
            class=field_class(FIELD_BASE, invalid, &class)
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
