/// API base URL used when API_URL is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Stories requested per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// localStorage key holding the bearer token
pub const STORAGE_KEY_AUTH_TOKEN: &str = "authToken";

/// localStorage key holding the language preference
pub const STORAGE_KEY_LANGUAGE: &str = "lna_language";

/// Image shown when a story has none
pub const FALLBACK_IMAGE: &str = "/assets/news-placeholder.png";

/// Article links shown before the "more articles" toggle
pub const VISIBLE_ARTICLES: usize = 3;

/// How long the login error toast stays on screen
pub const TOAST_TIMEOUT_MS: u32 = 6_000;

pub const STORIES_PATH: &str = "/api/news/stories";
pub const SOURCES_PATH: &str = "/api/news/sources";
pub const GOOGLE_CALLBACK_PATH: &str = "/api/auth/google/callback";

/// Scopes requested from the Google code client
pub const GOOGLE_SCOPES: &str = "openid email profile";
