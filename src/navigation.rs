use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::storage::Platform;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct OpenUrlArgs<'a> {
    url: &'a str,
}

/// Leave the app for an external page (checkout). The browser navigates in
/// place; the native shell hands the URL to the system browser.
pub async fn open_external(platform: Platform, url: &str) -> Result<(), String> {
    match platform {
        Platform::Native => {
            let args = serde_wasm_bindgen::to_value(&OpenUrlArgs { url })
                .map_err(|e| e.to_string())?;
            invoke("plugin:opener|open_url", args)
                .await
                .map(|_| ())
                .map_err(|e| e.as_string().unwrap_or_else(|| "open_url failed".to_string()))
        }
        Platform::Browser => web_sys::window()
            .ok_or_else(|| "no window".to_string())?
            .location()
            .assign(url)
            .map_err(|e| format!("{e:?}")),
    }
}

/// `window.location.origin` and `href`, empty when unavailable.
pub fn current_location() -> (String, String) {
    web_sys::window().map_or_else(Default::default, |window| {
        let location = window.location();
        (
            location.origin().unwrap_or_default(),
            location.href().unwrap_or_default(),
        )
    })
}
