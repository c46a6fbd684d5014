//! Test helper modules
//!
//! Shared infrastructure for the integration tests: the mock registration
//! API server and common fixtures.

#![allow(dead_code)]

pub mod api_mock;
pub mod test_data;

pub use api_mock::{RegistrationApiMock, error_envelope, ok_envelope};
pub use test_data::*;
