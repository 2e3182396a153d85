// ============================================================================
// NEWS SERVICE - stories and source catalog
// ============================================================================
// Turns feed page requests into API calls and API stories into `News`.
// Failures are logged here and never reach the user as errors.
// ============================================================================

use crate::errors::ApiError;
use crate::models::{ArticleDto, ArticleLink, Language, News, Source, SourceOption, StoriesRequest, StoryDto};
use crate::state::PageRequest;
use crate::utils::date_format::parse_publish_date;
use crate::utils::FALLBACK_IMAGE;

use super::ApiClient;

/// Fetches one feed page. The error is already logged; the feed controller
/// only uses it to stop auto-paging.
pub async fn fetch_news(client: &ApiClient, page: &PageRequest) -> Result<Vec<News>, ApiError> {
    let request = stories_request(page);

    match client.fetch_stories(&request).await {
        Ok(response) => {
            let stories: Vec<News> = response.enriched_stories.into_iter().map(story_to_news).collect();
            log::info!("✅ {} stories at offset {}", stories.len(), page.offset);
            Ok(stories)
        }
        Err(e) => {
            log::error!("❌ Error fetching news (offset {}): {}", page.offset, e);
            Err(e)
        }
    }
}

/// Source catalog for the filter; empty when it cannot be loaded
pub async fn fetch_sources(client: &ApiClient) -> Vec<SourceOption> {
    match client.fetch_sources().await {
        Ok(response) => {
            log::info!("✅ {} sources loaded", response.sources.len());
            response.sources
        }
        Err(e) => {
            log::error!("❌ Error loading sources: {}", e);
            Vec::new()
        }
    }
}

pub fn stories_request(page: &PageRequest) -> StoriesRequest {
    StoriesRequest {
        cuttof_date: page.cutoff_iso(),
        offset: page.offset,
        page_size: page.page_size,
        source_ids: page.source_ids.clone(),
    }
}

pub fn story_to_news(story: StoryDto) -> News {
    let sources = dedupe_sources(&story.articles);
    let articles = story
        .articles
        .iter()
        .map(|a| ArticleLink { url: a.source_url.clone() })
        .collect();

    News {
        title: story.title,
        summary: story.summary.unwrap_or_default(),
        language: Language::from_code(story.language.as_deref().unwrap_or_default()),
        image_url: story
            .image_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_IMAGE.to_string()),
        sources,
        articles,
        publish_date: story.publish_date.as_deref().and_then(parse_publish_date),
    }
}

/// One source per name, in first-seen order; a repeated name keeps the
/// URL of its last article.
pub fn dedupe_sources(articles: &[ArticleDto]) -> Vec<Source> {
    let mut sources: Vec<Source> = Vec::with_capacity(articles.len());
    for article in articles {
        match sources.iter_mut().find(|s| s.name == article.source_name) {
            Some(existing) => existing.url = article.source_url.clone(),
            None => sources.push(Source {
                name: article.source_name.clone(),
                url: article.source_url.clone(),
            }),
        }
    }
    sources
}
