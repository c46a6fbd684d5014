//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod session;
pub mod event;
pub mod registration;
pub mod filter;

// Re-export commonly used models
pub use session::{Role, Session, LoginRequest, SignupRequest, AuthData};
pub use event::{Event, AvailableEvent, EventPayload, EventForm};
pub use registration::{Registration, RegistrationSummary, Student};
pub use filter::{FilterCriteria, AvailabilityFilter, filter_events, distinct_categories};
