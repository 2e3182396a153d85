pub mod api_client;
pub mod news_service;
pub mod auth_service;

pub use api_client::ApiClient;
pub use news_service::*;
pub use auth_service::*;
