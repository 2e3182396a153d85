use yew::prelude::*;

use super::{Filter, NewsCard};
use crate::context::LanguageContext;
use crate::hooks::{use_feed, use_sentinel, use_sources};
use crate::state::RequestState;

/// Home screen: filter bar, story cards and the infinite-scroll sentinel
#[function_component(NewsStack)]
pub fn news_stack() -> Html {
    let texts = use_context::<LanguageContext>().unwrap_or_default();
    let feed = use_feed();
    let sources = use_sources();
    let sentinel = use_node_ref();

    let (stories, request_state) = {
        let state = feed.state.borrow();
        (state.stories().to_vec(), state.request_state())
    };

    // Re-observe after every page so a sentinel that stays on screen fires again
    use_sentinel(sentinel.clone(), (stories.len(), request_state), feed.load_more.clone());

    let status = match request_state {
        RequestState::Loading if stories.is_empty() => Some(("loading", texts.get("loading_news"))),
        RequestState::Loading => Some(("loading-more", texts.get("loading_more"))),
        _ if stories.is_empty() => Some(("empty", texts.get("no_news"))),
        RequestState::Exhausted => Some(("end", texts.get("no_more"))),
        _ => None,
    };

    let cards = stories.iter().enumerate().map(|(index, story)| {
        html! {
            <NewsCard key={format!("{}-{}", index, story.title)} story={story.clone()} />
        }
    });

    html! {
        <section class="news-stack">
            <Filter sources={(*sources).clone()} on_filter={feed.on_filter.clone()} />

            <div class="news-list">
                {for cards}
            </div>

            if !stories.is_empty() && request_state == RequestState::Idle {
                <div class="scroll-sentinel" ref={sentinel}></div>
            }

            if let Some((kind, text)) = status {
                <div class={classes!("status-message", kind)}>{text}</div>
            }
        </section>
    }
}
