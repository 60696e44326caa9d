pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod logging;
pub mod observability;
pub mod render;
pub mod search;
pub mod types;

// Application use cases and the ports they depend on
pub mod app;
// Adapters implementing the ports
pub mod infra;
