use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_API_URL, DEFAULT_PAGE_SIZE};

/// Build-time configuration of the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub google_client_id: String,
    pub page_size: usize,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            google_client_id: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Reads the values baked in at compile time (see build.rs)
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("GOOGLE_CLIENT_ID"),
            option_env!("PAGE_SIZE"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        google_client_id: Option<&str>,
        page_size: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_url),
            google_client_id: google_client_id.unwrap_or_default().to_string(),
            page_size: page_size
                .and_then(|size| size.parse().ok())
                .filter(|size: &usize| *size > 0)
                .unwrap_or(defaults.page_size),
            environment: environment.unwrap_or("development").to_string(),
            enable_logging: enable_logging
                .and_then(|flag| flag.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
