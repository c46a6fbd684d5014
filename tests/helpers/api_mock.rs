//! Mock registration API server for testing
//!
//! This module provides a mock HTTP server that simulates the EventDesk
//! registration API for testing purposes. It uses wiremock to create
//! configurable mock responses wrapped in the API's response envelope.

use serde_json::{json, Value};
use wiremock::{
    matchers::{bearer_token, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock registration API server
pub struct RegistrationApiMock {
    pub server: MockServer,
}

/// Wrap a payload in the `{success, message, data}` envelope
pub fn ok_envelope(message: &str, data: Value) -> Value {
    json!({
        "success": true,
        "message": message,
        "data": data
    })
}

/// Error envelope the server produces for rejected requests
pub fn error_envelope(message: &str) -> Value {
    json!({
        "success": false,
        "message": message,
        "data": null
    })
}

impl RegistrationApiMock {
    /// Start a fresh mock server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL matching the client's `/api` base-path convention
    pub fn base_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    // ---------- Auth ----------

    pub async fn mock_login_success(&self, token: &str, role: &str) {
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(
                "Login successful",
                json!({"token": token, "role": role}),
            )))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_login_failure(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(status).set_body_json(error_envelope(message)))
            .mount(&self.server)
            .await;
    }

    /// Login response with a raw payload, for malformed-shape cases
    pub async fn mock_login_raw(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_signup_success(&self) {
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("User registered successfully", Value::Null)))
            .mount(&self.server)
            .await;
    }

    // ---------- Events ----------

    pub async fn mock_admin_events(&self, token: &str, events: Value) {
        Mock::given(method("GET"))
            .and(path("/api/events"))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("Events fetched", events)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_available_events(&self, token: &str, events: Value) {
        Mock::given(method("GET"))
            .and(path("/api/events/available"))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("Seats Fetched Success", events)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_get_event(&self, token: &str, event: Value) {
        let event_id = event["id"].as_i64().expect("event id");
        Mock::given(method("GET"))
            .and(path(format!("/api/events/{}", event_id)))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("Event fetched", event)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_event_students(&self, token: &str, event_id: i64, students: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/events/{}/students", event_id)))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("Registered students", students)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_create_event(&self, token: &str, created: Value) {
        Mock::given(method("POST"))
            .and(path("/api/events"))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("Event created", created)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_update_event(&self, token: &str, updated: Value) {
        let event_id = updated["id"].as_i64().expect("event id");
        Mock::given(method("PUT"))
            .and(path(format!("/api/events/{}", event_id)))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("Event updated", updated)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_delete_event(&self, token: &str, event_id: i64) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/events/{}", event_id)))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("Event deleted", Value::Null)))
            .mount(&self.server)
            .await;
    }

    // ---------- Registrations ----------

    pub async fn mock_my_event_ids(&self, token: &str, ids: Value) {
        Mock::given(method("GET"))
            .and(path("/api/registrations/my/events"))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("My registered event IDs", ids)))
            .mount(&self.server)
            .await;
    }

    /// Register endpoint that must be hit exactly `expected_calls` times
    pub async fn mock_register_success(&self, token: &str, event_id: i64, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(format!("/api/registrations/{}", event_id)))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("Registered successfully", Value::Null)))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_register_failure(
        &self,
        token: &str,
        event_id: i64,
        status: u16,
        message: &str,
    ) {
        Mock::given(method("POST"))
            .and(path(format!("/api/registrations/{}", event_id)))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(status).set_body_json(error_envelope(message)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_my_registrations(&self, token: &str, registrations: Value) {
        Mock::given(method("GET"))
            .and(path("/api/registrations/my"))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("My registrations", registrations)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_get_registration(&self, token: &str, summary: Value) {
        let registration_id = summary["id"].as_i64().expect("registration id");
        Mock::given(method("GET"))
            .and(path(format!("/api/registrations/{}", registration_id)))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("Registration found", summary)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_unregister(&self, token: &str, registration_id: i64) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/registrations/{}", registration_id)))
            .and(bearer_token(token))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(ok_envelope("Unregistered successfully", Value::Null)))
            .mount(&self.server)
            .await;
    }

    /// Make a path answer 403 with the given body, for session-expiry flows
    pub async fn mock_forbidden(&self, request_path: &str) {
        Mock::given(path(request_path.to_string()))
            .respond_with(ResponseTemplate::new(403)
                .set_body_json(error_envelope("Access denied")))
            .mount(&self.server)
            .await;
    }
}
