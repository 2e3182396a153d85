use yew::prelude::*;

use crate::models::SourceOption;
use crate::services::{fetch_sources, ApiClient};

/// Source catalog, loaded once on mount. Stays empty if the request fails.
#[hook]
pub fn use_sources() -> UseStateHandle<Vec<SourceOption>> {
    let sources = use_state(Vec::<SourceOption>::new);

    {
        let sources = sources.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                log::info!("📚 Loading source catalog...");
                let loaded = fetch_sources(&ApiClient::new()).await;
                sources.set(loaded);
            });
            || ()
        });
    }

    sources
}
