//! Services module
//!
//! This module contains the HTTP collaborator for the registration API

pub mod api;

// Re-export commonly used services
pub use api::{ApiClient, Envelope};
