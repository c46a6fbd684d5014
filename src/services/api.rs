//! Registration API client
//!
//! This service owns all HTTP traffic against the remote registration API:
//! request construction, bearer authentication, envelope decoding, error
//! mapping, and the global session-invalidation rule for authorization
//! failures. Each endpoint decodes into its own typed payload; a success
//! body whose `data` is missing or ill-typed is an explicit error, never a
//! silently empty collection.

use std::sync::Arc;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::models::event::{AvailableEvent, Event, EventPayload};
use crate::models::registration::{Registration, RegistrationSummary, Student};
use crate::models::session::{AuthData, LoginRequest, SignupRequest};
use crate::state::session::SessionStore;
use crate::utils::errors::{EventDeskError, Result};
use crate::utils::logging;

/// Response envelope every endpoint wraps its payload in
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// HTTP client for the registration API
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a new ApiClient instance.
    ///
    /// No request timeout is configured; the transport's own behavior
    /// governs, and nothing is retried.
    pub fn new(config: &ApiConfig, session: Arc<SessionStore>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(EventDeskError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token, or short-circuit without a network call
    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        let session = self.session.require()?;
        Ok(builder.bearer_auth(session.token))
    }

    /// Decode a response into the typed `data` payload
    async fn decode<T: DeserializeOwned>(&self, path: &str, response: Response) -> Result<T> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            logging::log_session_invalidated(status.as_u16());
            self.session.invalidate().await;
            return Err(EventDeskError::SessionExpired);
        }

        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Envelope<serde_json::Value>>(&bytes)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

            logging::log_api_error(path, &message);
            return Err(EventDeskError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = serde_json::from_slice(&bytes).map_err(|e| {
            EventDeskError::InvalidResponseShape(format!("{}: {}", path, e))
        })?;

        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            warn!(endpoint = path, message = %message, "Server reported failure on success status");
            return Err(EventDeskError::Api {
                status: status.as_u16(),
                message,
            });
        }

        envelope.data.ok_or_else(|| {
            EventDeskError::InvalidResponseShape(format!("{}: missing data field", path))
        })
    }

    /// Decode a response whose `data` is always null
    async fn decode_unit(&self, path: &str, response: Response) -> Result<()> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            logging::log_session_invalidated(status.as_u16());
            self.session.invalidate().await;
            return Err(EventDeskError::SessionExpired);
        }

        let bytes = response.bytes().await?;
        let envelope = serde_json::from_slice::<Envelope<serde_json::Value>>(&bytes).ok();

        if !status.is_success() || !envelope.as_ref().map_or(false, |e| e.success) {
            let message = envelope
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

            logging::log_api_error(path, &message);
            return Err(EventDeskError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }

    // ---------- Auth ----------

    /// `POST /auth/login`, unauthenticated
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthData> {
        let path = "/auth/login";
        debug!(email = %request.email, "Logging in");
        let response = self
            .client
            .post(self.endpoint(path))
            .json(request)
            .send()
            .await?;
        self.decode(path, response).await
    }

    /// `POST /auth/register`, unauthenticated
    pub async fn signup(&self, request: &SignupRequest) -> Result<()> {
        let path = "/auth/register";
        debug!(email = %request.email, role = %request.role, "Registering user");
        let response = self
            .client
            .post(self.endpoint(path))
            .json(request)
            .send()
            .await?;
        self.decode_unit(path, response).await
    }

    // ---------- Events ----------

    /// `GET /events` (admin listing)
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let path = "/events";
        let request = self.authorized(self.client.get(self.endpoint(path)))?;
        let response = request.send().await?;
        self.decode(path, response).await
    }

    /// `GET /events/available` (student listing with remaining seats)
    pub async fn list_available_events(&self) -> Result<Vec<AvailableEvent>> {
        let path = "/events/available";
        let request = self.authorized(self.client.get(self.endpoint(path)))?;
        let response = request.send().await?;
        self.decode(path, response).await
    }

    /// `GET /events/{id}`
    pub async fn get_event(&self, event_id: i64) -> Result<Event> {
        let path = format!("/events/{}", event_id);
        let request = self.authorized(self.client.get(self.endpoint(&path)))?;
        let response = request.send().await?;
        self.decode(&path, response).await
    }

    /// `GET /events/{id}/students`
    pub async fn list_event_students(&self, event_id: i64) -> Result<Vec<Student>> {
        let path = format!("/events/{}/students", event_id);
        let request = self.authorized(self.client.get(self.endpoint(&path)))?;
        let response = request.send().await?;
        self.decode(&path, response).await
    }

    /// `POST /events`
    pub async fn create_event(&self, payload: &EventPayload) -> Result<Event> {
        let path = "/events";
        let request = self.authorized(self.client.post(self.endpoint(path)))?;
        let response = request.json(payload).send().await?;
        self.decode(path, response).await
    }

    /// `PUT /events/{id}`
    pub async fn update_event(&self, event_id: i64, payload: &EventPayload) -> Result<Event> {
        let path = format!("/events/{}", event_id);
        let request = self.authorized(self.client.put(self.endpoint(&path)))?;
        let response = request.json(payload).send().await?;
        self.decode(&path, response).await
    }

    /// `DELETE /events/{id}`
    pub async fn delete_event(&self, event_id: i64) -> Result<()> {
        let path = format!("/events/{}", event_id);
        let request = self.authorized(self.client.delete(self.endpoint(&path)))?;
        let response = request.send().await?;
        self.decode_unit(&path, response).await
    }

    // ---------- Registrations ----------

    /// `POST /registrations/{eventId}`
    pub async fn register_for_event(&self, event_id: i64) -> Result<()> {
        let path = format!("/registrations/{}", event_id);
        let request = self.authorized(self.client.post(self.endpoint(&path)))?;
        let response = request.send().await?;
        self.decode_unit(&path, response).await
    }

    /// `GET /registrations/my`
    pub async fn my_registrations(&self) -> Result<Vec<Registration>> {
        let path = "/registrations/my";
        let request = self.authorized(self.client.get(self.endpoint(path)))?;
        let response = request.send().await?;
        self.decode(path, response).await
    }

    /// `GET /registrations/my/events`
    pub async fn my_registered_event_ids(&self) -> Result<Vec<i64>> {
        let path = "/registrations/my/events";
        let request = self.authorized(self.client.get(self.endpoint(path)))?;
        let response = request.send().await?;
        self.decode(path, response).await
    }

    /// `GET /registrations/{id}`
    pub async fn get_registration(&self, registration_id: i64) -> Result<RegistrationSummary> {
        let path = format!("/registrations/{}", registration_id);
        let request = self.authorized(self.client.get(self.endpoint(&path)))?;
        let response = request.send().await?;
        self.decode(&path, response).await
    }

    /// `DELETE /registrations/{id}`
    pub async fn unregister(&self, registration_id: i64) -> Result<()> {
        let path = format!("/registrations/{}", registration_id);
        let request = self.authorized(self.client.delete(self.endpoint(&path)))?;
        let response = request.send().await?;
        self.decode_unit(&path, response).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
