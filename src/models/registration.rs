//! Registration models

use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;

use super::event::Event;
use super::session::Role;

/// A student's registration for an event, owned server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    pub event: Event,
    #[serde(default)]
    pub user: Option<Student>,
    #[serde(default)]
    pub registered_at: Option<NaiveDateTime>,
}

/// Flattened view returned by `GET /registrations/{id}`, which summarizes
/// the registration and its event instead of nesting them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSummary {
    pub id: i64,
    pub event_id: i64,
    pub event_title: String,
    pub venue: String,
    #[serde(default)]
    pub registered_at: Option<NaiveDateTime>,
}

/// Student record as returned by `/events/{id}/students`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}
