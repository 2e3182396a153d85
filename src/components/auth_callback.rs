use yew::prelude::*;

use crate::context::LanguageContext;
use crate::errors::AuthError;
use crate::hooks::AuthContext;
use crate::routing::{current_query, navigate};
use crate::services::{callback_navigation, code_from_query, sign_in_with_code, ApiClient};

/// Landing page of the redirect flow: exchanges `?code=` and moves on
#[function_component(AuthCallback)]
pub fn auth_callback() -> Html {
    let texts = use_context::<LanguageContext>().unwrap_or_default();
    let auth = use_context::<AuthContext>();

    use_effect_with((), move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            log::info!("🔐 Processing OAuth callback");
            let result = match (code_from_query(&current_query()), auth) {
                (Ok(code), Some(auth)) => {
                    let result = sign_in_with_code(&ApiClient::new(), &auth.session, &code).await;
                    if result.is_ok() {
                        auth.refresh.emit(());
                    }
                    result
                }
                (Ok(_), None) => Err(AuthError::Storage("no session available".to_string())),
                (Err(e), _) => {
                    log::error!("❌ OAuth callback: {}", e);
                    Err(e)
                }
            };
            navigate(&callback_navigation(&result));
        });
        || ()
    });

    html! {
        <div class="auth-callback">
            <div class="spinner"></div>
            <p>{texts.get("processing_auth")}</p>
        </div>
    }
}
