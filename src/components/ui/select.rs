use leptos::prelude::*;

use super::{classes, field_class, FIELD_BASE};

pub fn select_class(invalid: bool, extra: &str) -> String {
    field_class(&classes(&[FIELD_BASE, "bg-white"]), invalid, extra)
}

/// `<select>` whose options are the children. With `value` set, the
/// selection is bound two-way; without it, listen with `on:change`.
#[component]
pub fn Select(
    #[prop(optional)] value: Option<RwSignal<String>>,
    #[prop(optional)] invalid: bool,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <select
            class=select_class(invalid, &class)
            prop:value=move || value.map(|value| value.get()).unwrap_or_default()
            on:change=move |ev| {
                if let Some(value) = value {
                    value.set(event_target_value(&ev));
                }
            }
        >
            {children()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_has_white_background() {
        let class = select_class(false, "");
        assert!(class.contains("bg-white"));
        assert!(class.ends_with("border-zinc-300"));
    }
}
