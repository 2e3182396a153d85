use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::context::LanguageContext;
use crate::hooks::use_auth;
use crate::models::Language;
use crate::utils::TOAST_TIMEOUT_MS;

#[derive(Properties, PartialEq, Clone)]
pub struct NavBarProps {
    pub on_language: Callback<Language>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let texts = use_context::<LanguageContext>().unwrap_or_default();
    let auth = use_auth();
    let menu_open = use_state(|| false);

    // Auto-hide the error toast; a new error restarts the timer
    {
        let dismiss = auth.dismiss_error.clone();
        use_effect_with(auth.error.clone(), move |error| {
            let timeout = error
                .is_some()
                .then(|| Timeout::new(TOAST_TIMEOUT_MS, move || dismiss.emit(())));
            move || drop(timeout)
        });
    }

    // Full reload of the home page
    let on_title = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/");
        }
    });

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_e: MouseEvent| menu_open.set(!*menu_open))
    };

    let language_options = Language::all().into_iter().map(|language| {
        let on_pick = {
            let cb = props.on_language.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |_e: MouseEvent| {
                menu_open.set(false);
                cb.emit(language);
            })
        };
        let class = classes!("language-option", (language == texts.language).then_some("active"));
        html! {
            <li key={language.code()}>
                <button {class} onclick={on_pick}>{language.native_name()}</button>
            </li>
        }
    });

    let auth_button = if auth.logged_in {
        let logout = auth.logout.clone();
        html! {
            <button class="btn-auth logout" onclick={Callback::from(move |_e: MouseEvent| logout.emit(()))}>
                {texts.get("logout")}
            </button>
        }
    } else {
        let login = auth.login.clone();
        html! {
            <button class="btn-auth login" onclick={Callback::from(move |_e: MouseEvent| login.emit(()))}>
                {texts.get("login")}
            </button>
        }
    };

    let toast = auth.error.as_ref().map(|message| {
        let dismiss = auth.dismiss_error.clone();
        html! {
            <div class="toast error" role="alert">
                <span class="toast-message">{message}</span>
                <button class="toast-close" onclick={Callback::from(move |_e: MouseEvent| dismiss.emit(()))}>
                    {texts.get("close")}
                </button>
            </div>
        }
    });

    html! {
        <>
            <nav class="nav-bar">
                <a class="nav-title" href="/" onclick={on_title}>{texts.get("app_title")}</a>
                <div class="nav-actions">
                    <div class="language-menu">
                        <button class="btn-language" onclick={toggle_menu}>
                            {format!("🌐 {}", texts.get("language"))}
                        </button>
                        if *menu_open {
                            <ul class="language-dropdown">
                                {for language_options}
                            </ul>
                        }
                    </div>
                    {auth_button}
                </div>
            </nav>
            {for toast}
        </>
    }
}
