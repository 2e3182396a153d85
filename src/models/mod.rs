pub mod language;
pub mod news;
pub mod api;

pub use language::Language;
pub use news::{ArticleLink, News, Source, SourceOption};
pub use api::{
    ArticleDto, SourcesResponse, StoriesRequest, StoriesResponse, StoryDto, TokenRequest,
    TokenResponse,
};
