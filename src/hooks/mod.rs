pub mod use_auth;
pub mod use_feed;
pub mod use_route;
pub mod use_sentinel;
pub mod use_sources;

pub use use_auth::{use_auth, use_auth_provider, AuthContext, UseAuthHandle};
pub use use_feed::{use_feed, UseFeedHandle};
pub use use_route::use_route;
pub use use_sentinel::use_sentinel;
pub use use_sources::use_sources;
