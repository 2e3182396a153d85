pub mod language;

pub use language::{stored_language, save_language, LanguageContext};
