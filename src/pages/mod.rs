pub mod child_view;
pub mod login;
pub mod parent_dashboard;

pub use child_view::ChildView;
pub use login::LoginPage;
pub use parent_dashboard::ParentDashboard;

use leptos::prelude::*;
use leptos_router::components::A;

/// Integer from a number field: leading sign and digits, anything else 0.
pub fn parse_int(raw: &str) -> i64 {
    let raw = raw.trim();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map_or(0, |value| sign * value)
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto p-6 space-y-2">
            <h1 class="text-2xl font-semibold">"Page not found"</h1>
            <A href="/login" attr:class="text-indigo-600 text-sm">"Back to login"</A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("50"), 50);
        assert_eq!(parse_int(" 12 "), 12);
        assert_eq!(parse_int("-3"), -3);
        assert_eq!(parse_int("7.9"), 7);
        assert_eq!(parse_int("42abc"), 42);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int("-"), 0);
    }
}
