//! EventDesk client
//!
//! A headless admin and student client for the EventDesk registration API.
//! This library provides typed API access, session management with a
//! persisted token/role pair, per-screen view controllers, and the pure
//! filtering and reconciliation logic behind the student event list.

#![allow(non_snake_case)]

pub mod config;
pub mod controllers;
pub mod services;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventDeskError, Result};

// Re-export main components for easy access
pub use services::ApiClient;
pub use state::SessionStore;
pub use controllers::Route;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
