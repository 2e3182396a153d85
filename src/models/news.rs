use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Language;

/// A publisher contributing articles to a story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
}

/// Link to one of the raw articles grouped under a story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleLink {
    pub url: String,
}

/// Entry of the source catalog offered by the filter.
/// The uuid only travels in filter requests; stories never carry it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceOption {
    #[serde(alias = "id", alias = "_id")]
    pub uuid: String,
    pub name: String,
}

/// An aggregated story as shown in the feed. Built once from an API
/// payload and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    pub title: String,
    pub summary: String,
    pub language: Language,
    pub image_url: String,
    pub sources: Vec<Source>,
    pub articles: Vec<ArticleLink>,
    pub publish_date: Option<DateTime<Utc>>,
}

impl News {
    /// Summary text before the first line break
    pub fn summary_preview(&self) -> &str {
        self.summary.split('\n').next().unwrap_or_default()
    }

    /// A multi-line summary can be expanded
    pub fn has_more_summary(&self) -> bool {
        self.summary.contains('\n')
    }

    /// Articles visible on the card; `limit` of them unless fully expanded
    pub fn visible_articles(&self, show_all: bool, limit: usize) -> &[ArticleLink] {
        if show_all || self.articles.len() <= limit {
            &self.articles
        } else {
            &self.articles[..limit]
        }
    }

    pub fn has_hidden_articles(&self, limit: usize) -> bool {
        self.articles.len() > limit
    }
}
