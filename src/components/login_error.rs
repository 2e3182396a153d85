use yew::prelude::*;

use crate::context::LanguageContext;
use crate::routing::{navigate, Navigation, Route};

#[derive(Properties, PartialEq, Clone)]
pub struct LoginErrorProps {
    #[prop_or_default]
    pub message: String,
}

#[function_component(LoginError)]
pub fn login_error(props: &LoginErrorProps) -> Html {
    let texts = use_context::<LanguageContext>().unwrap_or_default();

    let go_home = Callback::from(|_e: MouseEvent| navigate(&Navigation::push(Route::Home)));

    html! {
        <div class="login-error">
            <h2>{texts.get("login_failed")}</h2>
            if !props.message.is_empty() {
                <p class="login-error-message">{props.message.clone()}</p>
            }
            <button class="btn-primary" onclick={go_home}>{texts.get("return_home")}</button>
        </div>
    }
}
