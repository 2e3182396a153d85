use yew::prelude::*;

use crate::config::CONFIG;
use crate::routing::{navigate, Navigation, Route};
use crate::services::{sign_in_with_code, ApiClient};
use crate::state::AuthSession;
use crate::utils::google_ffi::request_google_code;

/// Session plus the login flag derived from it; `refresh` re-reads the
/// store after a write so every consumer re-renders.
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub session: AuthSession,
    pub logged_in: bool,
    pub refresh: Callback<()>,
}

/// Owns the session for the whole app (used once, by `App`)
#[hook]
pub fn use_auth_provider() -> AuthContext {
    let session = use_memo((), |_| AuthSession::browser());
    let logged_in = use_state(|| session.is_logged_in());

    let refresh = {
        let session = session.clone();
        let logged_in = logged_in.clone();
        use_callback((), move |_: (), _| {
            logged_in.set(session.is_logged_in());
        })
    };

    AuthContext {
        session: (*session).clone(),
        logged_in: *logged_in,
        refresh,
    }
}

pub struct UseAuthHandle {
    pub logged_in: bool,
    pub error: Option<String>,
    pub login: Callback<()>,
    pub logout: Callback<()>,
    pub dismiss_error: Callback<()>,
}

/// Login/logout for the navigation bar. Failures end up in `error`, never thrown.
#[hook]
pub fn use_auth() -> UseAuthHandle {
    let auth = use_context::<AuthContext>();
    let error = use_state(|| None::<String>);

    let login = {
        let auth = auth.clone();
        let error = error.clone();
        Callback::from(move |_| {
            let Some(auth) = auth.clone() else {
                log::error!("❌ AuthContext missing");
                return;
            };
            let error = error.clone();
            error.set(None);

            request_google_code(&CONFIG.google_client_id, move |result| match result {
                Ok(code) => {
                    wasm_bindgen_futures::spawn_local(async move {
                        let client = ApiClient::new();
                        match sign_in_with_code(&client, &auth.session, &code).await {
                            Ok(()) => {
                                auth.refresh.emit(());
                                navigate(&Navigation::push(Route::Home));
                            }
                            Err(e) => error.set(Some(e.to_string())),
                        }
                    });
                }
                Err(e) => {
                    log::error!("❌ Google auth error: {}", e);
                    error.set(Some(e.to_string()));
                }
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_| {
            let Some(auth) = auth.as_ref() else {
                return;
            };
            if let Err(e) = auth.session.clear() {
                log::error!("❌ {}", e);
            }
            log::info!("👋 Logout");
            auth.refresh.emit(());
            navigate(&Navigation::push(Route::Home));
        })
    };

    let dismiss_error = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    UseAuthHandle {
        logged_in: auth.map(|a| a.logged_in).unwrap_or(false),
        error: (*error).clone(),
        login,
        logout,
        dismiss_error,
    }
}
