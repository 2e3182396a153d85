// Shared helpers

pub mod constants;
pub mod storage;
pub mod date_format;
pub mod url_display;
pub mod google_ffi;

pub use constants::*;
pub use storage::*;
pub use date_format::format_publish_date;
pub use url_display::shorten_url;
