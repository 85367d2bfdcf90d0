//! Styled form and layout primitives. No business logic lives here.

pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod label;
pub mod select;
pub mod tabs;
pub mod textarea;

pub use badge::{Badge, BadgeTone};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader, CardTitle};
pub use input::Input;
pub use label::Label;
pub use select::{select_class, Select};
pub use tabs::{Tab, TabList, TabPanel, TabPanels, Tabs};
pub use textarea::Textarea;

/// Join non-empty class fragments with single spaces.
pub fn classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shared look of text fields (input, select, textarea).
pub(crate) fn field_class(base: &str, invalid: bool, extra: &str) -> String {
    let border = if invalid {
        "border-rose-400"
    } else {
        "border-zinc-300"
    };
    classes(&[base, border, extra])
}

pub(crate) const FIELD_BASE: &str =
    "w-full rounded border px-3 py-2 outline-none focus:ring-2 focus:ring-indigo-400";
