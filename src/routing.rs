// ============================================================================
// ROUTING - three screens on top of the History API
// ============================================================================

use url::form_urlencoded;
use wasm_bindgen::JsValue;
use web_sys::window;

pub const HOME_PATH: &str = "/";
pub const AUTH_CALLBACK_PATH: &str = "/auth/callback";
pub const LOGIN_ERROR_PATH: &str = "/login-error";

/// Fired on `window` after a programmatic navigation so the app re-reads the location
pub const NAVIGATE_EVENT: &str = "lna:navigate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    AuthCallback,
    LoginError { message: String },
    NotFound,
}

impl Route {
    pub fn parse(path: &str, query: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            AUTH_CALLBACK_PATH => Route::AuthCallback,
            LOGIN_ERROR_PATH => {
                let message = form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
                    .find(|(key, _)| key == "message")
                    .map(|(_, value)| value.into_owned())
                    .unwrap_or_default();
                Route::LoginError { message }
            }
            _ => Route::NotFound,
        }
    }

    pub fn to_url(&self) -> String {
        match self {
            Route::Home | Route::NotFound => HOME_PATH.to_string(),
            Route::AuthCallback => AUTH_CALLBACK_PATH.to_string(),
            Route::LoginError { message } if message.is_empty() => LOGIN_ERROR_PATH.to_string(),
            Route::LoginError { message } => {
                format!("{}?message={}", LOGIN_ERROR_PATH, urlencoding::encode(message))
            }
        }
    }
}

/// A route plus whether it replaces the current history entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub replace: bool,
}

impl Navigation {
    pub fn push(route: Route) -> Self {
        Self { route, replace: false }
    }

    pub fn replace(route: Route) -> Self {
        Self { route, replace: true }
    }
}

/// Route of the page currently loaded in the browser
pub fn current_route() -> Route {
    let Some(location) = window().map(|w| w.location()) else {
        return Route::Home;
    };
    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();
    Route::parse(&path, &query)
}

/// Query string of the current page, with its leading `?`
pub fn current_query() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn navigate(navigation: &Navigation) {
    let Some(win) = window() else {
        return;
    };
    let url = navigation.route.to_url();

    let result = win.history().and_then(|history| {
        if navigation.replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(&url))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(&url))
        }
    });

    if let Err(e) = result {
        log::error!("❌ Navigation to {} failed: {:?}", url, e);
        return;
    }

    log::debug!("🧭 {} {}", if navigation.replace { "replace" } else { "push" }, url);
    if let Ok(event) = web_sys::Event::new(NAVIGATE_EVENT) {
        let _ = win.dispatch_event(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/", ""), Route::Home);
        assert_eq!(Route::parse("", ""), Route::Home);
        assert_eq!(Route::parse("/auth/callback", "?code=abc"), Route::AuthCallback);
        assert_eq!(Route::parse("/auth/callback/", ""), Route::AuthCallback);
        assert_eq!(Route::parse("/elsewhere", ""), Route::NotFound);
    }

    #[test]
    fn test_login_error_message_round_trip() {
        let route = Route::LoginError { message: "server error: 50% & more".to_string() };
        let url = route.to_url();
        let (path, query) = url.split_once('?').unwrap();
        assert_eq!(Route::parse(path, query), route);
    }

    #[test]
    fn test_login_error_without_message() {
        assert_eq!(
            Route::parse("/login-error", ""),
            Route::LoginError { message: String::new() }
        );
        assert_eq!(Route::LoginError { message: String::new() }.to_url(), "/login-error");
    }
}
