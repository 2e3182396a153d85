// ============================================================================
// LNA WEB - bilingual news feed client (yew + WASM)
// ============================================================================
// - models: domain records and wire DTOs
// - services: HTTP calls and their mapping to the domain
// - state: plain state machines (feed, filter, auth session)
// - hooks / components: yew glue on top of the state
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod errors;
pub mod hooks;
pub mod models;
pub mod routing;
pub mod services;
pub mod state;
pub mod utils;

pub use components::App;
