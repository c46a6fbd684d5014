//! Login screen controller

use std::sync::Arc;
use tracing::{debug, info};

use crate::models::session::LoginRequest;
use crate::services::api::ApiClient;
use crate::state::session::SessionStore;
use crate::utils::errors::{EventDeskError, Result};
use crate::utils::logging;
use super::Route;

/// Form and submission state for the login screen
pub struct LoginController {
    api: Arc<ApiClient>,
    session: Arc<SessionStore>,
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl LoginController {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            email: String::new(),
            password: String::new(),
            loading: false,
            error: None,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err(EventDeskError::InvalidInput(
                "Email and password are required".to_string()
            ));
        }
        Ok(())
    }

    /// Submit the login form. Validation failures never reach the network.
    /// On success the session is stored and the caller receives the route
    /// matching the issued role.
    pub async fn login(&mut self) -> Result<Route> {
        if let Err(e) = self.validate() {
            self.error = Some(e.user_message());
            return Err(e);
        }

        self.loading = true;
        self.error = None;
        debug!(email = %self.email.trim(), "Submitting login");

        let request = LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };

        let result = self.api.login(&request).await;
        self.loading = false;

        match result {
            Ok(auth) => {
                let role = auth.role;
                self.session.set(auth.into()).await?;
                logging::log_user_action("login", Some(role.as_str()));
                info!(role = %role, "Login successful");
                Ok(Route::for_role(role))
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}
