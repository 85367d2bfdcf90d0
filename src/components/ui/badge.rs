use leptos::prelude::*;

use super::classes;
use crate::models::AssignmentStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeTone {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Neutral => "bg-zinc-100 text-zinc-800",
            Self::Success => "bg-emerald-100 text-emerald-800",
            Self::Warning => "bg-amber-100 text-amber-800",
            Self::Danger => "bg-rose-100 text-rose-800",
            Self::Info => "bg-sky-100 text-sky-800",
        }
    }
}

impl From<AssignmentStatus> for BadgeTone {
    fn from(status: AssignmentStatus) -> Self {
        match status {
            AssignmentStatus::Assigned => Self::Info,
            AssignmentStatus::Completed => Self::Success,
            AssignmentStatus::Unknown => Self::Neutral,
        }
    }
}

pub fn badge_class(tone: BadgeTone, extra: &str) -> String {
    classes(&[
        "inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium",
        tone.class(),
        extra,
    ])
}

#[component]
pub fn Badge(
    #[prop(optional)] tone: BadgeTone,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <span class=badge_class(tone, &class)>{children()}</span> }
}
