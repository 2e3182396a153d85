use serde::{Deserialize, Serialize};

/// The two languages the client is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }

    /// Unknown codes fall back to Arabic, the default feed language
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Language::English,
            _ => Language::Arabic,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Arabic)
    }

    /// Value for the `dir` attribute
    pub fn dir(&self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    /// Label of the language in its own script, used by the language menu
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Arabic => "عربي",
            Language::English => "English",
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::English, Language::Arabic]
    }
}
