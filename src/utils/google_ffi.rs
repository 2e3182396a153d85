// ============================================================================
// GOOGLE IDENTITY SERVICES FFI
// ============================================================================
// Thin wrapper over `google.accounts.oauth2.initCodeClient` (loaded by
// index.html). Opens the provider popup and reports a code or an error.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::errors::AuthError;
use crate::services::code_from_provider;
use crate::utils::GOOGLE_SCOPES;

#[wasm_bindgen]
extern "C" {
    type CodeClient;

    #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "oauth2"], js_name = initCodeClient)]
    fn init_code_client(config: &Object) -> Result<CodeClient, JsValue>;

    #[wasm_bindgen(method, js_name = requestCode)]
    fn request_code(this: &CodeClient);
}

const DEFAULT_UNAVAILABLE: &str = "Google login failed";

type CodeHandler = Rc<RefCell<Option<Box<dyn FnOnce(Result<String, AuthError>)>>>>;

fn string_field(value: &JsValue, key: &str) -> Option<String> {
    Reflect::get(value, &JsValue::from_str(key)).ok()?.as_string()
}

fn deliver(handler: &CodeHandler, result: Result<String, AuthError>) {
    let callback = handler.borrow_mut().take();
    if let Some(callback) = callback {
        callback(result);
    }
}

/// Starts the authorization-code popup. `on_result` runs exactly once,
/// with the code or with the reason the flow failed.
pub fn request_google_code(client_id: &str, on_result: impl FnOnce(Result<String, AuthError>) + 'static) {
    let handler: CodeHandler = Rc::new(RefCell::new(Some(Box::new(on_result))));

    if client_id.is_empty() {
        log::error!("❌ GOOGLE_CLIENT_ID is not configured");
        deliver(&handler, Err(AuthError::Provider("Google login is not configured".to_string())));
        return;
    }

    let on_response = {
        let handler = handler.clone();
        Closure::wrap(Box::new(move |response: JsValue| {
            let result = code_from_provider(
                string_field(&response, "code"),
                string_field(&response, "error"),
                string_field(&response, "error_description"),
            );
            deliver(&handler, result);
        }) as Box<dyn FnMut(JsValue)>)
    };

    // Popup closed or blocked
    let on_error = {
        let handler = handler.clone();
        Closure::wrap(Box::new(move |error: JsValue| {
            let kind = string_field(&error, "type").unwrap_or_else(|| "popup_failed".to_string());
            let result = code_from_provider(None, Some(kind), string_field(&error, "message"));
            deliver(&handler, result);
        }) as Box<dyn FnMut(JsValue)>)
    };

    let config = Object::new();
    let fields: [(&str, &JsValue); 5] = [
        ("client_id", &JsValue::from_str(client_id)),
        ("scope", &JsValue::from_str(GOOGLE_SCOPES)),
        ("ux_mode", &JsValue::from_str("popup")),
        ("callback", on_response.as_ref()),
        ("error_callback", on_error.as_ref()),
    ];
    for (key, value) in fields {
        let _ = Reflect::set(&config, &JsValue::from_str(key), value);
    }

    match init_code_client(&config) {
        Ok(client) => {
            client.request_code();
            // GIS keeps calling into these after this function returns
            on_response.forget();
            on_error.forget();
        }
        Err(e) => {
            log::error!("❌ Google Identity Services unavailable: {:?}", e);
            deliver(&handler, Err(AuthError::Provider(DEFAULT_UNAVAILABLE.to_string())));
        }
    }
}
