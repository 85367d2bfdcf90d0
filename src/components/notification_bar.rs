use leptos::prelude::*;
use leptos::tachys::dom::window;
use wasm_bindgen::JsCast;

use crate::models::UiState;

const DISMISS_AFTER_MS: i32 = 5000;

/// Displays transient error and status messages (non-modal).
#[component]
pub fn NotificationBar() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState context missing");

    let pending_timeout = std::rc::Rc::new(std::cell::Cell::new(None::<i32>));

    // Auto-dismiss effect
    Effect::new({
        let pending_timeout = std::rc::Rc::clone(&pending_timeout);
        move |_| {
            // A newer message restarts the countdown
            if let Some(timeout_id) = pending_timeout.take() {
                window().clear_timeout_with_handle(timeout_id);
            }

            if ui.notification.get().is_some() {
                let callback: wasm_bindgen::prelude::Closure<dyn FnMut()> =
                    wasm_bindgen::closure::Closure::new(move || {
                        ui.clear_notification();
                    });

                if let Ok(handle) = window().set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    DISMISS_AFTER_MS,
                ) {
                    pending_timeout.set(Some(handle));
                    callback.forget();
                }
            }
        }
    });

    view! {
        <Show when=move || ui.notification.get().is_some()>
            <div class="notification-bar fixed bottom-4 inset-x-0 mx-auto max-w-md rounded bg-rose-600 text-white px-4 py-2 shadow flex items-center justify-between gap-3" role="alert">
                <span>{move || ui.notification.get().unwrap_or_default()}</span>
                <button type="button" class="text-white/80 hover:text-white" on:click=move |_| ui.clear_notification()>
                    "✕"
                </button>
            </div>
        </Show>
    }
}
