use yew::prelude::*;

use crate::context::LanguageContext;
use crate::models::SourceOption;
use crate::state::{FilterEvent, FilterState};

#[derive(Properties, PartialEq, Clone)]
pub struct FilterProps {
    pub sources: Vec<SourceOption>,
    pub on_filter: Callback<FilterEvent>,
}

/// Runs `edit` on a copy of the state, stores it, then forwards the resulting event
fn change(
    state: &UseStateHandle<FilterState>,
    on_filter: &Callback<FilterEvent>,
    edit: impl FnOnce(&mut FilterState) -> Option<FilterEvent>,
) {
    let mut next = (**state).clone();
    let event = edit(&mut next);
    state.set(next);
    if let Some(event) = event {
        on_filter.emit(event);
    }
}

/// Source picker: chips for the applied sources, a popover to stage a new selection
#[function_component(Filter)]
pub fn filter(props: &FilterProps) -> Html {
    let texts = use_context::<LanguageContext>().unwrap_or_default();
    let state = use_state(FilterState::new);

    let on_open = {
        let (state, on_filter) = (state.clone(), props.on_filter.clone());
        Callback::from(move |_e: MouseEvent| {
            change(&state, &on_filter, |s| {
                s.open();
                None
            })
        })
    };

    let on_cancel = {
        let (state, on_filter) = (state.clone(), props.on_filter.clone());
        Callback::from(move |_e: MouseEvent| {
            change(&state, &on_filter, |s| {
                s.cancel();
                None
            })
        })
    };

    let on_apply = {
        let (state, on_filter) = (state.clone(), props.on_filter.clone());
        Callback::from(move |_e: MouseEvent| change(&state, &on_filter, FilterState::apply))
    };

    let on_clear = {
        let (state, on_filter) = (state.clone(), props.on_filter.clone());
        Callback::from(move |_e: MouseEvent| change(&state, &on_filter, |s| Some(s.clear())))
    };

    let chips = state.applied().iter().map(|source| {
        let on_remove = {
            let (state, on_filter) = (state.clone(), props.on_filter.clone());
            let uuid = source.uuid.clone();
            Callback::from(move |_e: MouseEvent| change(&state, &on_filter, |s| s.remove(&uuid)))
        };
        html! {
            <span class="filter-chip" key={source.uuid.clone()}>
                {source.name.clone()}
                <button class="chip-remove" onclick={on_remove}>{"×"}</button>
            </span>
        }
    });

    let options = props.sources.iter().map(|source| {
        let on_toggle = {
            let (state, on_filter) = (state.clone(), props.on_filter.clone());
            let source = source.clone();
            Callback::from(move |_e: Event| {
                change(&state, &on_filter, |s| {
                    s.toggle(&source);
                    None
                })
            })
        };
        html! {
            <li key={source.uuid.clone()}>
                <label class="filter-option">
                    <input type="checkbox" checked={state.is_staged(&source.uuid)} onchange={on_toggle} />
                    <span>{source.name.clone()}</span>
                </label>
            </li>
        }
    });

    let trigger_class = classes!("filter-trigger", state.is_filtered().then_some("active"));

    html! {
        <div class="filter">
            <div class="filter-bar">
                <button class={trigger_class} onclick={on_open} title={texts.get("filter_sources")}>
                    {"⚙️"}
                    if state.is_filtered() {
                        <span class="filter-badge">{state.badge_count()}</span>
                    }
                </button>
                <div class="filter-chips">
                    {for chips}
                </div>
                if state.is_filtered() {
                    <button class="filter-clear-all" onclick={on_clear.clone()}>{texts.get("clear_all")}</button>
                }
            </div>

            if state.is_open() {
                <div class="filter-popover">
                    <div class="filter-popover-header">
                        <h3>{texts.get("filter_by_source")}</h3>
                        <button class="btn-close" onclick={on_cancel.clone()}>{"✕"}</button>
                    </div>
                    if props.sources.is_empty() {
                        <p class="filter-empty">{texts.get("no_sources")}</p>
                    } else {
                        <ul class="filter-options">
                            {for options}
                        </ul>
                    }
                    <div class="filter-popover-actions">
                        <button class="btn-apply" disabled={!state.can_apply()} onclick={on_apply}>
                            {texts.get("apply")}
                        </button>
                        <button class="btn-cancel" onclick={on_cancel}>{texts.get("cancel")}</button>
                        <button class="btn-clear" onclick={on_clear}>{texts.get("clear")}</button>
                    </div>
                </div>
            }
        </div>
    }
}
