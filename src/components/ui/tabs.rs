use leptos::prelude::*;

use super::classes;

/// Selected tab index shared by a `Tabs` group.
#[derive(Clone, Copy)]
struct TabsContext {
    index: RwSignal<usize>,
}

fn use_tabs(component: &str) -> TabsContext {
    use_context::<TabsContext>()
        .unwrap_or_else(|| panic!("{component} must be used within Tabs"))
}

pub fn tab_class(selected: bool, extra: &str) -> String {
    let state = if selected {
        "border-indigo-600 text-indigo-600"
    } else {
        "border-transparent text-zinc-600 hover:text-zinc-900"
    };
    classes(&["px-3 py-2 -mb-px border-b-2 transition-colors", state, extra])
}

#[component]
pub fn Tabs(
    #[prop(optional)] default_index: usize,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    provide_context(TabsContext {
        index: RwSignal::new(default_index),
    });

    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn TabList(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=classes(&["flex gap-2 border-b", &class])>{children()}</div> }
}

#[component]
pub fn Tab(
    idx: usize,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let tabs = use_tabs("Tab");

    view! {
        <button
            type="button"
            class=move || tab_class(tabs.index.get() == idx, &class)
            on:click=move |_| tabs.index.set(idx)
        >
            {children()}
        </button>
    }
}

#[component]
pub fn TabPanels(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=class>{children()}</div> }
}

/// Rendered only while its tab is selected.
#[component]
pub fn TabPanel(
    idx: usize,
    #[prop(into, optional)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let tabs = use_tabs("TabPanel");

    view! {
        <Show when=move || tabs.index.get() == idx>
            <div class=class.clone()>{children()}</div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_tab_is_highlighted() {
        assert!(tab_class(true, "").contains("border-indigo-600"));
        assert!(tab_class(false, "").contains("border-transparent"));
    }
}
