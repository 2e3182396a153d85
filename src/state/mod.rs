// ============================================================================
// STATE MODULE - plain state machines, wrapped by the hooks
// ============================================================================

pub mod auth_state;
pub mod feed_state;
pub mod filter_state;

pub use auth_state::*;
pub use feed_state::*;
pub use filter_state::*;
