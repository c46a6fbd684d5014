//! Event models

use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;

use crate::utils::errors::{EventDeskError, Result};

/// Event as the admin endpoints serialize it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub venue: String,
    pub max_capacity: i32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date_time: Option<NaiveDateTime>,
}

/// Event as `/events/available` serializes it for students.
///
/// The server emits `date_time` here (snake case) while every other event
/// payload uses `dateTime`; the field attributes carry the wire names as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableEvent {
    pub id: i64,
    pub title: String,
    pub venue: String,
    #[serde(rename = "maxCapacity")]
    pub max_capacity: i32,
    #[serde(rename = "remainingSeats")]
    pub remaining_seats: i32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date_time: Option<NaiveDateTime>,
    /// Derived client-side from the user's registered event ids, never on the wire
    #[serde(skip)]
    pub is_registered: bool,
}

impl AvailableEvent {
    /// A full event cannot accept another registration
    pub fn is_full(&self) -> bool {
        self.remaining_seats <= 0
    }
}

/// JSON body for event create and update requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub title: String,
    pub venue: String,
    pub max_capacity: i32,
    pub category: Option<String>,
    pub speaker: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<NaiveDateTime>,
}

/// Raw form fields for the admin event editor, held as entered
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: String,
    pub venue: String,
    pub category: String,
    pub speaker: String,
    pub max_capacity: String,
    pub description: String,
    pub date_time: String,
}

impl EventForm {
    /// Pre-fill the form from an existing event for editing
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            venue: event.venue.clone(),
            category: event.category.clone().unwrap_or_default(),
            speaker: event.speaker.clone().unwrap_or_default(),
            max_capacity: event.max_capacity.to_string(),
            description: event.description.clone().unwrap_or_default(),
            date_time: event
                .date_time
                .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
                .unwrap_or_default(),
        }
    }

    /// Validate and normalize the form into a request payload.
    ///
    /// Title, venue and capacity are required; blank optional fields become
    /// `None` rather than empty strings, matching what the server expects.
    pub fn to_payload(&self) -> Result<EventPayload> {
        let title = self.title.trim();
        let venue = self.venue.trim();

        if title.is_empty() || venue.is_empty() || self.max_capacity.trim().is_empty() {
            return Err(EventDeskError::InvalidInput(
                "Title, venue, and capacity are required".to_string()
            ));
        }

        let max_capacity: i32 = self.max_capacity.trim().parse().map_err(|_| {
            EventDeskError::InvalidInput("Capacity must be a whole number".to_string())
        })?;

        if max_capacity <= 0 {
            return Err(EventDeskError::InvalidInput(
                "Capacity must be greater than zero".to_string()
            ));
        }

        let date_time = match self.date_time.trim() {
            "" => None,
            raw => Some(parse_form_date_time(raw)?),
        };

        Ok(EventPayload {
            title: title.to_string(),
            venue: venue.to_string(),
            max_capacity,
            category: normalize_optional(&self.category),
            speaker: normalize_optional(&self.speaker),
            description: normalize_optional(&self.description),
            date_time,
        })
    }
}

fn normalize_optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse the `YYYY-MM-DDTHH:MM` value a datetime-local input produces,
/// tolerating an optional seconds component.
fn parse_form_date_time(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|_| {
            EventDeskError::InvalidInput(format!("Invalid event date: {}", raw))
        })
}
