// Wire formats of the news API. Field names follow the server, including
// its `cuttof_date` spelling.

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StoriesRequest {
    pub cuttof_date: String,
    pub offset: usize,
    pub page_size: usize,
    pub source_ids: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StoriesResponse {
    pub enriched_stories: Vec<StoryDto>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StoryDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub articles: Vec<ArticleDto>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ArticleDto {
    #[serde(default)]
    pub id: Option<String>,
    pub source_name: String,
    pub source_url: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SourcesResponse {
    pub sources: Vec<super::SourceOption>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenRequest {
    pub code: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stories_request_uses_server_field_names() {
        let request = StoriesRequest {
            cuttof_date: "2024-05-01T10:00:00+00:00".to_string(),
            offset: 20,
            page_size: 10,
            source_ids: vec!["a1".to_string()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["cuttof_date"], "2024-05-01T10:00:00+00:00");
        assert_eq!(json["page_size"], 10);
        assert_eq!(json["source_ids"][0], "a1");
    }

    #[test]
    fn test_story_with_optional_fields_missing() {
        let body = r#"{"enriched_stories":[{"title":"T","language":"en","publish_date":"2024-05-01T10:00:00",
            "articles":[{"id":"x","source_name":"BBC","source_url":"https://bbc.com/1"}]}]}"#;
        let parsed: StoriesResponse = serde_json::from_str(body).unwrap();
        let story = &parsed.enriched_stories[0];
        assert_eq!(story.summary, None);
        assert_eq!(story.image_url, None);
        assert_eq!(story.articles[0].source_name, "BBC");
    }

    #[test]
    fn test_missing_story_list_is_an_error() {
        assert!(serde_json::from_str::<StoriesResponse>(r#"{"stories":[]}"#).is_err());
    }

    #[test]
    fn test_source_catalog_accepts_id_aliases() {
        let body = r#"{"sources":[{"uuid":"u1","name":"Al Jazeera"},{"_id":"u2","name":"BBC","url":"https://bbc.com"}]}"#;
        let parsed: SourcesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.sources[0].uuid, "u1");
        assert_eq!(parsed.sources[1].uuid, "u2");
    }
}
