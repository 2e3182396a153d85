use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::routing::{current_route, Route, NAVIGATE_EVENT};

const LOCATION_EVENTS: [&str; 2] = ["popstate", NAVIGATE_EVENT];

/// Current route, kept in sync with back/forward and `routing::navigate`
#[hook]
pub fn use_route() -> Route {
    let route = use_state(current_route);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(current_route());
            }) as Box<dyn FnMut(web_sys::Event)>);

            let win = window();
            if let Some(win) = &win {
                for event in LOCATION_EVENTS {
                    if let Err(e) = win.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
                        log::error!("❌ Could not listen to {}: {:?}", event, e);
                    }
                }
            }

            move || {
                if let Some(win) = win {
                    for event in LOCATION_EVENTS {
                        let _ = win.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
                    }
                }
                drop(listener);
            }
        });
    }

    (*route).clone()
}
