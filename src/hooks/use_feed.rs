use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::services::{fetch_news, ApiClient};
use crate::state::{FeedState, FilterEvent, PageRequest};

pub struct UseFeedHandle {
    pub state: Rc<RefCell<FeedState>>,
    pub on_filter: Callback<FilterEvent>,
    pub load_more: Callback<()>,
}

/// Infinite-scroll feed. The state machine sits in a RefCell so the
/// loading guard is checked against the live state, not a render snapshot.
#[hook]
pub fn use_feed() -> UseFeedHandle {
    let state = use_mut_ref(|| FeedState::new(CONFIG.page_size, Utc::now()));
    let update = use_force_update();

    // Initial page, once; late pages are dropped after unmount
    {
        let state = state.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            let request = state.borrow_mut().start();
            if let Some(request) = request {
                spawn_page(state.clone(), update, request);
            }
            move || state.borrow_mut().detach()
        });
    }

    let on_filter = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |event: FilterEvent| {
            let request = match event {
                FilterEvent::Apply(source_ids) => {
                    log::info!("🔎 Filter applied: {} sources", source_ids.len());
                    state.borrow_mut().apply_filter(source_ids)
                }
                FilterEvent::Clear => {
                    log::info!("🔎 Filter cleared");
                    state.borrow_mut().clear_filter()
                }
            };
            spawn_page(state.clone(), update.clone(), request);
        })
    };

    let load_more = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            let request = state.borrow_mut().next_page();
            if let Some(request) = request {
                spawn_page(state.clone(), update.clone(), request);
            }
        })
    };

    UseFeedHandle { state, on_filter, load_more }
}

fn spawn_page(state: Rc<RefCell<FeedState>>, update: UseForceUpdateHandle, request: PageRequest) {
    update.force_update();

    wasm_bindgen_futures::spawn_local(async move {
        let client = ApiClient::new();
        let outcome = fetch_news(&client, &request).await;

        let applied = state.borrow_mut().complete(&request, outcome);
        if applied {
            update.force_update();
        } else {
            log::debug!("⏭️ Ignoring stale page (offset {})", request.offset);
        }
    });
}
