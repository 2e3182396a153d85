pub mod app;
pub mod nav_bar;
pub mod filter;
pub mod news_stack;
pub mod news_card;
pub mod auth_callback;
pub mod login_error;

pub use app::App;
pub use nav_bar::NavBar;
pub use filter::Filter;
pub use news_stack::NewsStack;
pub use news_card::NewsCard;
pub use auth_callback::AuthCallback;
pub use login_error::LoginError;
