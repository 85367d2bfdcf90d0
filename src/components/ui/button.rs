use leptos::prelude::*;

use super::classes;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "bg-indigo-600 text-white hover:bg-indigo-500",
            Self::Secondary => "bg-zinc-200 text-zinc-900 hover:bg-zinc-300",
            Self::Danger => "bg-rose-600 text-white hover:bg-rose-500",
            Self::Ghost => "bg-transparent text-indigo-600 hover:bg-indigo-50",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
}

impl ButtonSize {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "px-2.5 py-1.5 text-sm",
            Self::Md => "px-3 py-2",
        }
    }
}

const BASE: &str = "inline-flex items-center justify-center rounded transition-colors disabled:opacity-60 disabled:cursor-not-allowed";

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    classes(&[BASE, size.class(), variant.class(), extra])
}

/// Styled `<button>`. Event listeners given at the call site (`on:click`)
/// land on the button element.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] disabled: Signal<bool>,
    /// `submit` inside forms, `button` elsewhere
    #[prop(optional)]
    submit: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=button_class(variant, size, &class)
            prop:disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_button_class() {
        let class = button_class(ButtonVariant::default(), ButtonSize::default(), "");
        assert!(class.starts_with("inline-flex"));
        assert!(class.contains("px-3 py-2"));
        assert!(class.ends_with("bg-indigo-600 text-white hover:bg-indigo-500"));
    }

    #[test]
    fn test_variant_and_size() {
        let class = button_class(ButtonVariant::Danger, ButtonSize::Sm, "w-full");
        assert!(class.contains("px-2.5 py-1.5 text-sm"));
        assert!(class.contains("bg-rose-600"));
        assert!(class.ends_with("w-full"));
    }
}
