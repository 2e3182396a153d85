use yew::prelude::*;

use super::{AuthCallback, LoginError, NavBar, NewsStack};
use crate::context::{save_language, stored_language, LanguageContext};
use crate::hooks::{use_auth_provider, use_route, AuthContext};
use crate::models::Language;
use crate::routing::Route;

/// Mirrors the current language on `<html lang dir>` so the whole page flips
fn apply_document_language(language: Language) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("lang", language.code());
    let _ = root.set_attribute("dir", language.dir());
}

#[function_component(App)]
pub fn app() -> Html {
    let language = use_state(stored_language);
    let texts = use_memo(*language, |language| LanguageContext::new(*language));
    let auth = use_auth_provider();
    let route = use_route();

    use_effect_with(*language, |language| {
        apply_document_language(*language);
        || ()
    });

    let on_language = {
        let language = language.clone();
        Callback::from(move |selected: Language| {
            log::info!("🌐 Language -> {}", selected.code());
            save_language(selected);
            language.set(selected);
        })
    };

    let page = match route {
        Route::Home => html! { <NewsStack /> },
        Route::AuthCallback => html! { <AuthCallback /> },
        Route::LoginError { message } => html! { <LoginError {message} /> },
        Route::NotFound => html! {
            <div class="status-message">{texts.get("page_not_found")}</div>
        },
    };

    html! {
        <ContextProvider<LanguageContext> context={(*texts).clone()}>
            <ContextProvider<AuthContext> context={auth}>
                <div class="app" dir={texts.dir()}>
                    <NavBar {on_language} />
                    <main class="content">
                        {page}
                    </main>
                </div>
            </ContextProvider<AuthContext>>
        </ContextProvider<LanguageContext>>
    }
}
