use std::collections::HashSet;

use yew::prelude::*;

use crate::context::LanguageContext;
use crate::models::News;
use crate::utils::{format_publish_date, shorten_url, FALLBACK_IMAGE, VISIBLE_ARTICLES};

#[derive(Properties, PartialEq, Clone)]
pub struct NewsCardProps {
    pub story: News,
}

#[function_component(NewsCard)]
pub fn news_card(props: &NewsCardProps) -> Html {
    let texts = use_context::<LanguageContext>().unwrap_or_default();
    let summary_open = use_state(|| false);
    let articles_open = use_state(|| false);
    let visited = use_state(HashSet::<String>::new);
    let story = &props.story;

    let published = format_publish_date(story.publish_date.as_ref(), &texts.language);

    let toggle_summary = {
        let summary_open = summary_open.clone();
        Callback::from(move |_e: MouseEvent| summary_open.set(!*summary_open))
    };

    let toggle_articles = {
        let articles_open = articles_open.clone();
        Callback::from(move |_e: MouseEvent| articles_open.set(!*articles_open))
    };

    // Broken image urls fall back to the bundled placeholder
    let on_image_error = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<web_sys::HtmlImageElement>() {
            if !img.src().ends_with(FALLBACK_IMAGE) {
                img.set_src(FALLBACK_IMAGE);
            }
        }
    });

    let title = if story.title.trim().is_empty() {
        texts.get("untitled")
    } else {
        story.title.clone()
    };

    let summary = if story.summary.trim().is_empty() {
        html! { <p class="news-summary empty">{texts.get("no_summary")}</p> }
    } else {
        let text = if *summary_open {
            story.summary.clone()
        } else {
            story.summary_preview().to_string()
        };
        html! {
            <div class="news-summary">
                <p>{text}</p>
                if story.has_more_summary() {
                    <button class="btn-link" onclick={toggle_summary}>
                        {if *summary_open { texts.get("read_less") } else { texts.get("read_more") }}
                    </button>
                }
            </div>
        }
    };

    let source_chips = story.sources.iter().map(|source| {
        html! {
            <a class="source-chip" key={source.name.clone()} href={source.url.clone()} target="_blank" rel="noopener noreferrer">
                {source.name.clone()}
            </a>
        }
    });

    let article_links = story.visible_articles(*articles_open, VISIBLE_ARTICLES).iter().map(|article| {
        let on_visit = {
            let visited = visited.clone();
            let url = article.url.clone();
            Callback::from(move |_e: MouseEvent| {
                let mut next = (*visited).clone();
                next.insert(url.clone());
                visited.set(next);
            })
        };
        let class = classes!("article-link", visited.contains(&article.url).then_some("visited"));
        html! {
            <li>
                <a {class} href={article.url.clone()} target="_blank" rel="noopener noreferrer" onclick={on_visit}>
                    {shorten_url(&article.url)}
                </a>
            </li>
        }
    });

    html! {
        <article class="news-card" dir={texts.dir()} lang={story.language.code()}>
            <img class="news-image" src={story.image_url.clone()} alt={title.clone()} loading="lazy" onerror={on_image_error} />
            <div class="news-body">
                <h2 class="news-title">{title}</h2>
                if !published.is_empty() {
                    <p class="news-date">{format!("{} {}", texts.get("published"), published)}</p>
                }
                if !story.sources.is_empty() {
                    <div class="news-sources">{for source_chips}</div>
                }
                {summary}
                if !story.articles.is_empty() {
                    <div class="news-articles">
                        <h3>{texts.get("articles")}</h3>
                        <ul>{for article_links}</ul>
                        if story.has_hidden_articles(VISIBLE_ARTICLES) {
                            <button class="btn-link" onclick={toggle_articles}>
                                {if *articles_open { texts.get("show_less") } else { texts.get("more_articles") }}
                            </button>
                        }
                    </div>
                }
            </div>
        </article>
    }
}
