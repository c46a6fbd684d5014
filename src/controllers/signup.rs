//! Signup screen controller

use std::sync::Arc;
use tracing::{debug, info};

use crate::models::session::{Role, SignupRequest};
use crate::services::api::ApiClient;
use crate::utils::errors::{EventDeskError, Result};
use crate::utils::helpers::is_valid_email;
use crate::utils::logging;
use super::Route;

/// Form and submission state for the account signup screen
pub struct SignupController {
    api: Arc<ApiClient>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub loading: bool,
    pub error: Option<String>,
}

impl SignupController {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Student,
            loading: false,
            error: None,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.trim().is_empty()
        {
            return Err(EventDeskError::InvalidInput(
                "Name, email, and password are required".to_string()
            ));
        }

        if !is_valid_email(self.email.trim()) {
            return Err(EventDeskError::InvalidInput(
                "Enter a valid email address".to_string()
            ));
        }

        Ok(())
    }

    /// Submit the signup form; on success the caller routes to login
    pub async fn signup(&mut self) -> Result<Route> {
        if let Err(e) = self.validate() {
            self.error = Some(e.user_message());
            return Err(e);
        }

        self.loading = true;
        self.error = None;
        debug!(email = %self.email.trim(), role = %self.role, "Submitting signup");

        let request = SignupRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        };

        let result = self.api.signup(&request).await;
        self.loading = false;

        match result {
            Ok(()) => {
                logging::log_user_action("signup", Some(self.role.as_str()));
                info!("Signup successful");
                Ok(Route::Login)
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}
