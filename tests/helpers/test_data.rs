//! Shared fixtures for integration tests

use std::sync::Arc;
use serde_json::{json, Value};
use tempfile::TempDir;

use EventDesk::config::{ApiConfig, SessionConfig};
use EventDesk::models::session::{Role, Session};
use EventDesk::services::ApiClient;
use EventDesk::state::SessionStore;

pub const STUDENT_TOKEN: &str = "student-token";
pub const ADMIN_TOKEN: &str = "admin-token";

/// Session config pointing into a per-test temp directory
pub fn session_config(dir: &TempDir) -> SessionConfig {
    SessionConfig {
        file_path: dir
            .path()
            .join("session.toml")
            .to_string_lossy()
            .into_owned(),
    }
}

/// Build the client pair against a mock server base URL
pub async fn client_pair(base_url: &str, dir: &TempDir) -> (Arc<ApiClient>, Arc<SessionStore>) {
    let session = Arc::new(
        SessionStore::open(&session_config(dir))
            .await
            .expect("session store"),
    );
    let api = Arc::new(
        ApiClient::new(
            &ApiConfig {
                base_url: base_url.to_string(),
                user_agent: "EventDesk-Test/1.0".to_string(),
            },
            session.clone(),
        )
        .expect("api client"),
    );
    (api, session)
}

/// Client pair with an already-stored session
pub async fn authenticated_pair(
    base_url: &str,
    dir: &TempDir,
    token: &str,
    role: Role,
) -> (Arc<ApiClient>, Arc<SessionStore>) {
    let (api, session) = client_pair(base_url, dir).await;
    session
        .set(Session {
            token: token.to_string(),
            role,
        })
        .await
        .expect("store session");
    (api, session)
}

/// Student-facing event JSON the way `/events/available` serializes it
pub fn available_event_json(id: i64, title: &str, category: &str, seats: i64) -> Value {
    json!({
        "id": id,
        "title": title,
        "venue": "Main Hall",
        "maxCapacity": 50,
        "remainingSeats": seats,
        "category": category,
        "speaker": "Dr. Reed",
        "description": "Hands-on session",
        "date_time": "2026-08-07T18:00:00"
    })
}

/// Admin-facing event JSON the way `/events` serializes it
pub fn admin_event_json(id: i64, title: &str, venue: &str, capacity: i64) -> Value {
    json!({
        "id": id,
        "title": title,
        "venue": venue,
        "maxCapacity": capacity,
        "category": "Tech",
        "speaker": null,
        "description": null,
        "dateTime": "2026-09-01T10:00:00"
    })
}

/// Registration JSON the way `/registrations/my` serializes it
pub fn registration_json(id: i64, event_id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "event": admin_event_json(event_id, title, "Main Hall", 50),
        "user": {"id": 9, "name": "Priya", "email": "priya@example.com", "role": "STUDENT"},
        "registeredAt": "2026-08-01T09:15:00"
    })
}
